// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::marker::PhantomData;

use rowbind_type::{Row, Value};

use crate::{Column, Optional, Presence, Primitive, Required, Result, column::impl_descriptor};

/// A scalar column read and written through `T`'s primitive codec.
pub struct PrimitiveColumn<T, P = Required> {
	name: String,
	marker: PhantomData<fn() -> (T, P)>,
}

pub type OptionalPrimitiveColumn<T> = PrimitiveColumn<T, Optional>;

impl_descriptor!(PrimitiveColumn<T, P>);

impl<T: Primitive, P: Presence> Column for PrimitiveColumn<T, P> {
	type Value = T;
	type Output = P::Output<T>;

	fn name(&self) -> &str {
		&self.name
	}

	fn optional<R: Row + ?Sized>(&self, row: &R) -> Option<T> {
		T::from_row(row, &self.name)
	}

	fn apply<R: Row + ?Sized>(&self, row: &R) -> Result<P::Output<T>> {
		P::resolve(row, &self.name, self.optional(row))
	}

	fn to_wire(&self, value: &T) -> Value {
		value.to_wire()
	}
}

#[cfg(test)]
mod tests {
	use rowbind_type::{NamedRow, Type, Value};

	use super::*;

	#[test]
	fn test_required_present() {
		let id: PrimitiveColumn<i64> = PrimitiveColumn::new("id");
		let row = NamedRow::new().with("id", 42i64);

		assert_eq!(id.name(), "id");
		assert_eq!(id.apply(&row).unwrap(), 42);
		assert_eq!(id.optional(&row), Some(42));
	}

	#[test]
	fn test_required_absent_fails() {
		let id: PrimitiveColumn<i64> = PrimitiveColumn::new("id");
		let row = NamedRow::new();

		let err = id.apply(&row).unwrap_err();
		assert_eq!(err.code(), "COLUMN_001");
		assert_eq!(err.column.as_ref().map(|c| c.name.as_str()), Some("id"));
	}

	#[test]
	fn test_required_null_fails() {
		let id: PrimitiveColumn<i64> = PrimitiveColumn::new("id");
		let row = NamedRow::new().with("id", Value::Undefined);

		assert!(id.apply(&row).is_err());
	}

	#[test]
	fn test_required_wrong_type_fails() {
		let id: PrimitiveColumn<i64> = PrimitiveColumn::new("id");
		let row = NamedRow::new().with("id", "forty-two");

		let err = id.apply(&row).unwrap_err();
		assert_eq!(err.column.as_ref().and_then(|c| c.found), Some(Type::Utf8));
	}

	#[test]
	fn test_optional() {
		let email = OptionalPrimitiveColumn::<String>::new("email");

		let present = NamedRow::new().with("email", "ada@example.com");
		assert_eq!(email.apply(&present).unwrap(), Some("ada@example.com".to_string()));

		let absent = NamedRow::new();
		assert_eq!(email.apply(&absent).unwrap(), None);
	}

	#[test]
	fn test_bind() {
		let score = OptionalPrimitiveColumn::<f64>::new("score");
		assert_eq!(score.bind(&0.5), ("score".to_string(), Value::float8(0.5)));

		let row: NamedRow = [score.bind(&0.5)].into_iter().collect();
		assert_eq!(score.apply(&row).unwrap(), Some(0.5));
	}

	#[test]
	fn test_idempotent() {
		let id: PrimitiveColumn<i32> = PrimitiveColumn::new("id");
		let row = NamedRow::new().with("id", 3i32);

		assert_eq!(id.optional(&row), id.optional(&row));
		assert_eq!(id.apply(&row).unwrap(), id.apply(&row).unwrap());
	}

	#[test]
	fn test_clone_and_debug() {
		let id: PrimitiveColumn<u8> = PrimitiveColumn::new("id");
		let copy = id.clone();
		assert_eq!(copy.name(), "id");
		assert_eq!(format!("{copy:?}"), "PrimitiveColumn { name: \"id\" }");
	}

	#[test]
	fn test_shared_across_threads() {
		let id: PrimitiveColumn<i64> = PrimitiveColumn::new("id");

		std::thread::scope(|scope| {
			for n in 0..4i64 {
				let id = &id;
				scope.spawn(move || {
					let row = NamedRow::new().with("id", n);
					assert_eq!(id.apply(&row).unwrap(), n);
				});
			}
		});
	}
}
