// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::marker::PhantomData;

use rowbind_type::{Row, Value};

use super::decode_elements;
use crate::{Column, Primitive, Result, column::impl_descriptor};

/// A native list column; order is preserved. An absent list reads as empty.
pub struct ListColumn<T> {
	name: String,
	marker: PhantomData<fn() -> T>,
}

impl_descriptor!(ListColumn<T>);

impl<T: Primitive> Column for ListColumn<T> {
	type Value = Vec<T>;
	type Output = Vec<T>;

	fn name(&self) -> &str {
		&self.name
	}

	fn optional<R: Row + ?Sized>(&self, row: &R) -> Option<Vec<T>> {
		let elements = row.list(&self.name)?;
		Some(decode_elements(&self.name, elements).collect())
	}

	fn apply<R: Row + ?Sized>(&self, row: &R) -> Result<Vec<T>> {
		Ok(self.optional(row).unwrap_or_default())
	}

	fn to_wire(&self, value: &Vec<T>) -> Value {
		Value::List(value.iter().map(Primitive::to_wire).collect())
	}
}

#[cfg(test)]
mod tests {
	use rowbind_type::{NamedRow, Value};

	use super::*;

	#[test]
	fn test_order_preserved() {
		let scores = ListColumn::<i32>::new("scores");
		let row = NamedRow::new().with("scores", Value::list([Value::int4(3), Value::int4(1), Value::int4(2)]));

		assert_eq!(scores.apply(&row).unwrap(), vec![3, 1, 2]);
		assert_eq!(scores.optional(&row), scores.optional(&row));
	}

	#[test]
	fn test_duplicates_kept() {
		let scores = ListColumn::<u8>::new("scores");
		let row = NamedRow::new().with("scores", Value::list([Value::uint1(1), Value::uint1(1)]));

		assert_eq!(scores.apply(&row).unwrap(), vec![1, 1]);
	}

	#[test]
	fn test_absent_is_empty() {
		let scores = ListColumn::<i32>::new("scores");

		assert_eq!(scores.optional(&NamedRow::new()), None);
		assert_eq!(scores.apply(&NamedRow::new()).unwrap(), Vec::<i32>::new());
	}

	#[test]
	fn test_round_trip() {
		let names = ListColumn::<String>::new("names");
		let value = vec!["b".to_string(), "a".to_string(), "b".to_string()];
		let row: NamedRow = [names.bind(&value)].into_iter().collect();

		assert_eq!(names.apply(&row).unwrap(), value);
	}
}
