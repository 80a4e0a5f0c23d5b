// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The read-only row capability.
//!
//! A [`Row`] is one record fetched by a driver. Codecs only ever look up
//! columns by name; the kind-specialized lookups below return `None` both for
//! a missing or null column and for a column holding a different wire kind.

use std::{
	collections::HashMap,
	hash::{BuildHasher, Hash},
};

use indexmap::IndexMap;
use tracing::debug;

use crate::{Type, Value};

mod named;

pub use named::NamedRow;

pub trait Row {
	/// Raw lookup. `Some(Value::Undefined)` is a stored null.
	fn get(&self, name: &str) -> Option<&Value>;

	/// Defined values only; null reads as absent.
	fn value(&self, name: &str) -> Option<&Value> {
		self.get(name).filter(|value| value.is_defined())
	}

	fn contains(&self, name: &str) -> bool {
		self.value(name).is_some()
	}

	fn utf8(&self, name: &str) -> Option<&str> {
		match self.value(name)? {
			Value::Utf8(text) => Some(text.as_str()),
			other => mismatch(name, Type::Utf8, other),
		}
	}

	fn set(&self, name: &str) -> Option<&[Value]> {
		match self.value(name)? {
			Value::Set(elements) => Some(elements.as_slice()),
			other => mismatch(name, Type::Set, other),
		}
	}

	fn list(&self, name: &str) -> Option<&[Value]> {
		match self.value(name)? {
			Value::List(elements) => Some(elements.as_slice()),
			other => mismatch(name, Type::List, other),
		}
	}

	fn map(&self, name: &str) -> Option<&[(Value, Value)]> {
		match self.value(name)? {
			Value::Map(entries) => Some(entries.as_slice()),
			other => mismatch(name, Type::Map, other),
		}
	}
}

fn mismatch<T>(name: &str, expected: Type, found: &Value) -> Option<T> {
	debug!(column = name, %expected, found = %found.get_type(), "column holds a different wire kind");
	None
}

impl<R: Row + ?Sized> Row for &R {
	fn get(&self, name: &str) -> Option<&Value> {
		(**self).get(name)
	}
}

impl<R: Row + ?Sized> Row for Box<R> {
	fn get(&self, name: &str) -> Option<&Value> {
		(**self).get(name)
	}
}

impl<K, S> Row for HashMap<K, Value, S>
where
	K: std::borrow::Borrow<str> + Hash + Eq,
	S: BuildHasher,
{
	fn get(&self, name: &str) -> Option<&Value> {
		HashMap::get(self, name)
	}
}

impl<K, S> Row for IndexMap<K, Value, S>
where
	K: std::borrow::Borrow<str> + Hash + Eq,
	S: BuildHasher,
{
	fn get(&self, name: &str) -> Option<&Value> {
		IndexMap::get(self, name)
	}
}
