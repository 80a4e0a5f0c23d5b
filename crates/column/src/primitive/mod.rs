// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The primitive codec registry.
//!
//! There is exactly one `impl Primitive` per supported scalar type, so the
//! codec for `T` is picked by the compiler wherever a column kind is generic
//! over `T: Primitive`.

use rowbind_type::{GetType, Row, Value};
use tracing::debug;

mod decimal;
mod net;
mod number;
mod temporal;
mod text;
mod uuid;

pub trait Primitive: GetType + Sized {
	/// Total: every value has a wire form. Floats that are NaN become
	/// `Value::Undefined`.
	fn to_wire(&self) -> Value;

	/// Partial: `None` when the wire value is of an incompatible kind.
	fn from_wire(value: &Value) -> Option<Self>;

	/// Reads `name` from `row`. Missing, null and incompatible values are
	/// all absent.
	fn from_row<R: Row + ?Sized>(row: &R, name: &str) -> Option<Self> {
		let value = row.value(name)?;
		let result = Self::from_wire(value);
		if result.is_none() {
			debug!(
				column = name,
				expected = %Self::get_type(),
				found = %value.get_type(),
				"column value does not decode"
			);
		}
		result
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use rowbind_type::NamedRow;

	use super::*;

	/// Writes `value` into a fresh row and reads it back.
	pub(crate) fn round_trip<T: Primitive>(value: &T) -> Option<T> {
		let row = NamedRow::new().with("c", value.to_wire());
		T::from_row(&row, "c")
	}

	#[test]
	fn test_missing_is_absent() {
		let row = NamedRow::new();
		assert_eq!(i64::from_row(&row, "c"), None);
		assert_eq!(String::from_row(&row, "c"), None);
	}

	#[test]
	fn test_null_is_absent() {
		let row = NamedRow::new().with("c", Value::Undefined);
		assert_eq!(bool::from_row(&row, "c"), None);
	}

	#[test]
	fn test_incompatible_is_absent() {
		let row = NamedRow::new().with("c", Value::utf8("12"));
		assert_eq!(i32::from_row(&row, "c"), None);
	}

	#[test]
	fn test_idempotent() {
		let row = NamedRow::new().with("c", Value::int8(9));
		assert_eq!(i64::from_row(&row, "c"), i64::from_row(&row, "c"));
	}
}
