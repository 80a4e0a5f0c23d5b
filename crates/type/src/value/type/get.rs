// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{net::IpAddr, time::SystemTime};

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use uuid::Uuid;

use crate::Type;

/// Names the wire kind an application type is written as.
pub trait GetType {
	fn get_type() -> Type;
}

macro_rules! impl_get_type {
	($($t:ty => $variant:ident),* $(,)?) => {
		$(
			impl GetType for $t {
				fn get_type() -> Type {
					Type::$variant
				}
			}
		)*
	};
}

impl_get_type!(
	bool => Boolean,
	f32 => Float4,
	f64 => Float8,
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	i128 => Int16,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	u128 => Uint16,
	String => Utf8,
	Vec<u8> => Blob,
	Uuid => Uuid,
	SystemTime => Timestamp,
	IpAddr => Inet,
	BigDecimal => Decimal,
	BigInt => VarInt,
);
