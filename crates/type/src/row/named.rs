// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;

use super::Row;
use crate::Value;

/// An in-memory row that keeps its columns in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedRow {
	values: IndexMap<String, Value>,
}

impl NamedRow {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(name, value);
		self
	}

	/// Sets a column, returning the value it replaced.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.values.insert(name.into(), value.into())
	}

	pub fn remove(&mut self, name: &str) -> Option<Value> {
		self.values.shift_remove(name)
	}

	pub fn get_name(&self, index: usize) -> Option<&str> {
		self.values.get_index(index).map(|(name, _)| name.as_str())
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.values.keys().map(String::as_str)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.values.iter().map(|(name, value)| (name.as_str(), value))
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl Row for NamedRow {
	fn get(&self, name: &str) -> Option<&Value> {
		self.values.get(name)
	}
}

impl<N: Into<String>> FromIterator<(N, Value)> for NamedRow {
	fn from_iter<I: IntoIterator<Item = (N, Value)>>(iter: I) -> Self {
		Self {
			values: iter.into_iter().map(|(name, value)| (name.into(), value)).collect(),
		}
	}
}

impl<N: Into<String>> Extend<(N, Value)> for NamedRow {
	fn extend<I: IntoIterator<Item = (N, Value)>>(&mut self, iter: I) {
		self.values.extend(iter.into_iter().map(|(name, value)| (name.into(), value)));
	}
}
