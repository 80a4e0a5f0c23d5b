// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::net::IpAddr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use uuid::Uuid;

use crate::Value;

macro_rules! impl_from {
	($($t:ty => $ctor:ident),* $(,)?) => {
		$(
			impl From<$t> for Value {
				fn from(v: $t) -> Self {
					Value::$ctor(v)
				}
			}
		)*
	};
}

impl_from!(
	bool => bool,
	f32 => float4,
	f64 => float8,
	i8 => int1,
	i16 => int2,
	i32 => int4,
	i64 => int8,
	i128 => int16,
	u8 => uint1,
	u16 => uint2,
	u32 => uint4,
	u64 => uint8,
	u128 => uint16,
	String => utf8,
	&str => utf8,
	Vec<u8> => blob,
	Uuid => uuid,
	IpAddr => inet,
	BigDecimal => decimal,
	BigInt => varint,
);

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map(Into::into).unwrap_or(Value::Undefined)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_scalars() {
		assert_eq!(Value::from(7i64), Value::Int8(7));
		assert_eq!(Value::from("x"), Value::Utf8("x".to_string()));
		assert_eq!(Value::from(true), Value::Boolean(true));
	}

	#[test]
	fn test_from_option() {
		assert_eq!(Value::from(Some(3u8)), Value::Uint1(3));
		assert_eq!(Value::from(None::<u8>), Value::Undefined);
	}
}
