// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::BTreeSet, marker::PhantomData};

use rowbind_type::{Row, Value};

use super::decode_elements;
use crate::{Column, Primitive, Result, column::impl_descriptor};

/// A native set column. An absent set reads as empty.
pub struct SetColumn<T> {
	name: String,
	marker: PhantomData<fn() -> T>,
}

impl_descriptor!(SetColumn<T>);

impl<T: Primitive + Ord> Column for SetColumn<T> {
	type Value = BTreeSet<T>;
	type Output = BTreeSet<T>;

	fn name(&self) -> &str {
		&self.name
	}

	fn optional<R: Row + ?Sized>(&self, row: &R) -> Option<BTreeSet<T>> {
		let elements = row.set(&self.name)?;
		Some(decode_elements(&self.name, elements).collect())
	}

	fn apply<R: Row + ?Sized>(&self, row: &R) -> Result<BTreeSet<T>> {
		Ok(self.optional(row).unwrap_or_default())
	}

	fn to_wire(&self, value: &BTreeSet<T>) -> Value {
		Value::Set(value.iter().map(Primitive::to_wire).collect())
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeSet;

	use rowbind_type::{NamedRow, Value};

	use super::*;

	#[test]
	fn test_round_trip() {
		let tags = SetColumn::<i32>::new("tags");
		let row = NamedRow::new().with("tags", Value::set([Value::int4(3), Value::int4(1), Value::int4(2)]));

		assert_eq!(tags.apply(&row).unwrap(), BTreeSet::from([1, 2, 3]));
		assert_eq!(tags.optional(&row), tags.optional(&row));
	}

	#[test]
	fn test_absent_is_empty() {
		let tags = SetColumn::<String>::new("tags");

		assert_eq!(tags.optional(&NamedRow::new()), None);
		assert_eq!(tags.apply(&NamedRow::new()).unwrap(), BTreeSet::new());
		assert_eq!(tags.apply(&NamedRow::new().with("tags", Value::Undefined)).unwrap(), BTreeSet::new());
	}

	#[test]
	fn test_stored_empty_is_present() {
		let tags = SetColumn::<String>::new("tags");
		let row = NamedRow::new().with("tags", Value::set([]));

		assert_eq!(tags.optional(&row), Some(BTreeSet::new()));
	}

	#[test]
	fn test_undecodable_elements_dropped() {
		let tags = SetColumn::<i64>::new("tags");
		let row = NamedRow::new().with("tags", Value::set([Value::int8(1), Value::utf8("x"), Value::int8(2)]));

		assert_eq!(tags.apply(&row).unwrap(), BTreeSet::from([1, 2]));
	}

	#[test]
	fn test_wrong_kind_is_empty() {
		let tags = SetColumn::<i64>::new("tags");
		let row = NamedRow::new().with("tags", Value::list([Value::int8(1)]));

		assert_eq!(tags.apply(&row).unwrap(), BTreeSet::new());
	}

	#[test]
	fn test_to_wire() {
		let tags = SetColumn::<String>::new("tags");
		let value = BTreeSet::from(["b".to_string(), "a".to_string()]);

		assert_eq!(tags.to_wire(&value), Value::set([Value::utf8("a"), Value::utf8("b")]));

		let row: NamedRow = [tags.bind(&value)].into_iter().collect();
		assert_eq!(tags.apply(&row).unwrap(), value);
	}
}
