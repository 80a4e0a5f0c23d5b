// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{collections::BTreeMap, marker::PhantomData};

use rowbind_type::{Row, Value};

use super::decode_element;
use crate::{Column, Primitive, Result, column::impl_descriptor};

/// A native map column; keys and values each use their own codec. An absent
/// map reads as empty.
pub struct MapColumn<K, V> {
	name: String,
	marker: PhantomData<fn() -> (K, V)>,
}

impl_descriptor!(MapColumn<K, V>);

impl<K, V> Column for MapColumn<K, V>
where
	K: Primitive + Ord,
	V: Primitive,
{
	type Value = BTreeMap<K, V>;
	type Output = BTreeMap<K, V>;

	fn name(&self) -> &str {
		&self.name
	}

	fn optional<R: Row + ?Sized>(&self, row: &R) -> Option<BTreeMap<K, V>> {
		let entries = row.map(&self.name)?;
		Some(
			entries
				.iter()
				.filter_map(|(key, value)| {
					Some((decode_element(&self.name, key)?, decode_element(&self.name, value)?))
				})
				.collect(),
		)
	}

	fn apply<R: Row + ?Sized>(&self, row: &R) -> Result<BTreeMap<K, V>> {
		Ok(self.optional(row).unwrap_or_default())
	}

	fn to_wire(&self, value: &BTreeMap<K, V>) -> Value {
		Value::Map(value.iter().map(|(key, value)| (key.to_wire(), value.to_wire())).collect())
	}
}
