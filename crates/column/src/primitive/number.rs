// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowbind_type::Value;

use super::Primitive;

impl Primitive for bool {
	fn to_wire(&self) -> Value {
		Value::Boolean(*self)
	}

	fn from_wire(value: &Value) -> Option<Self> {
		match value {
			Value::Boolean(v) => Some(*v),
			_ => None,
		}
	}
}

/// Integers also read narrower integer kinds, as long as the widening is
/// lossless.
macro_rules! impl_integer {
	($t:ty, $variant:ident, [$($widen:ident),*]) => {
		impl Primitive for $t {
			fn to_wire(&self) -> Value {
				Value::$variant(*self)
			}

			fn from_wire(value: &Value) -> Option<Self> {
				match value {
					Value::$variant(v) => Some(*v),
					$(Value::$widen(v) => Some(<$t>::from(*v)),)*
					_ => None,
				}
			}
		}
	};
}

impl_integer!(i8, Int1, []);
impl_integer!(i16, Int2, [Int1, Uint1]);
impl_integer!(i32, Int4, [Int1, Int2, Uint1, Uint2]);
impl_integer!(i64, Int8, [Int1, Int2, Int4, Uint1, Uint2, Uint4]);
impl_integer!(i128, Int16, [Int1, Int2, Int4, Int8, Uint1, Uint2, Uint4, Uint8]);
impl_integer!(u8, Uint1, []);
impl_integer!(u16, Uint2, [Uint1]);
impl_integer!(u32, Uint4, [Uint1, Uint2]);
impl_integer!(u64, Uint8, [Uint1, Uint2, Uint4]);
impl_integer!(u128, Uint16, [Uint1, Uint2, Uint4, Uint8]);

impl Primitive for f32 {
	fn to_wire(&self) -> Value {
		Value::float4(*self)
	}

	fn from_wire(value: &Value) -> Option<Self> {
		match value {
			Value::Float4(v) => Some(v.value()),
			_ => None,
		}
	}
}

impl Primitive for f64 {
	fn to_wire(&self) -> Value {
		Value::float8(*self)
	}

	fn from_wire(value: &Value) -> Option<Self> {
		match value {
			Value::Float8(v) => Some(v.value()),
			Value::Float4(v) => Some(f64::from(v.value())),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use rowbind_type::Value;

	use super::Primitive;
	use crate::primitive::tests::round_trip;

	#[test]
	fn test_round_trip() {
		assert_eq!(round_trip(&true), Some(true));
		assert_eq!(round_trip(&false), Some(false));
		assert_eq!(round_trip(&i8::MIN), Some(i8::MIN));
		assert_eq!(round_trip(&-12_345i16), Some(-12_345));
		assert_eq!(round_trip(&i32::MAX), Some(i32::MAX));
		assert_eq!(round_trip(&i64::MIN), Some(i64::MIN));
		assert_eq!(round_trip(&i128::MAX), Some(i128::MAX));
		assert_eq!(round_trip(&u8::MAX), Some(u8::MAX));
		assert_eq!(round_trip(&7u16), Some(7));
		assert_eq!(round_trip(&u32::MAX), Some(u32::MAX));
		assert_eq!(round_trip(&u64::MAX), Some(u64::MAX));
		assert_eq!(round_trip(&u128::MAX), Some(u128::MAX));
		assert_eq!(round_trip(&1.5f32), Some(1.5));
		assert_eq!(round_trip(&-0.25f64), Some(-0.25));
		assert_eq!(round_trip(&f64::INFINITY), Some(f64::INFINITY));
	}

	#[test]
	fn test_widening() {
		assert_eq!(i64::from_wire(&Value::int4(-3)), Some(-3));
		assert_eq!(i64::from_wire(&Value::uint4(u32::MAX)), Some(u32::MAX as i64));
		assert_eq!(i128::from_wire(&Value::uint8(u64::MAX)), Some(u64::MAX as i128));
		assert_eq!(u64::from_wire(&Value::uint1(8)), Some(8));
		assert_eq!(f64::from_wire(&Value::float4(0.5)), Some(0.5));
	}

	#[test]
	fn test_no_narrowing() {
		assert_eq!(i32::from_wire(&Value::int8(1)), None);
		assert_eq!(u8::from_wire(&Value::int1(1)), None);
		assert_eq!(u64::from_wire(&Value::int8(1)), None);
		assert_eq!(f32::from_wire(&Value::float8(1.0)), None);
	}

	#[test]
	fn test_nan_has_no_wire_form() {
		assert_eq!(f64::NAN.to_wire(), Value::Undefined);
		assert_eq!(round_trip(&f32::NAN), None);
	}
}
