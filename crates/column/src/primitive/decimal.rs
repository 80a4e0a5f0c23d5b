// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use rowbind_type::Value;

use super::Primitive;

impl Primitive for BigDecimal {
	fn to_wire(&self) -> Value {
		Value::Decimal(self.clone())
	}

	fn from_wire(value: &Value) -> Option<Self> {
		match value {
			Value::Decimal(v) => Some(v.clone()),
			_ => None,
		}
	}
}

impl Primitive for BigInt {
	fn to_wire(&self) -> Value {
		Value::VarInt(self.clone())
	}

	fn from_wire(value: &Value) -> Option<Self> {
		match value {
			Value::VarInt(v) => Some(v.clone()),
			Value::Int1(v) => Some(BigInt::from(*v)),
			Value::Int2(v) => Some(BigInt::from(*v)),
			Value::Int4(v) => Some(BigInt::from(*v)),
			Value::Int8(v) => Some(BigInt::from(*v)),
			Value::Int16(v) => Some(BigInt::from(*v)),
			Value::Uint1(v) => Some(BigInt::from(*v)),
			Value::Uint2(v) => Some(BigInt::from(*v)),
			Value::Uint4(v) => Some(BigInt::from(*v)),
			Value::Uint8(v) => Some(BigInt::from(*v)),
			Value::Uint16(v) => Some(BigInt::from(*v)),
			_ => None,
		}
	}
}
