// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{fmt, marker::PhantomData};

use rowbind_type::{Row, Type, Value};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use super::json::{decode, encode_or_undefined};
use crate::{Column, Declare, Result};

/// What a JSON list reads as when nothing in it decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
	/// Absent, even if the stored list had elements. Matches rows written by
	/// earlier mappers.
	#[default]
	Absent,
	/// Present and empty.
	Empty,
}

/// A list whose elements are each stored as JSON text.
///
/// Elements are decoded independently; the ones that fail are dropped and
/// never fail the read.
pub struct JsonListColumn<T> {
	name: String,
	policy: EmptyPolicy,
	marker: PhantomData<fn() -> T>,
}

impl<T> JsonListColumn<T> {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			policy: EmptyPolicy::default(),
			marker: PhantomData,
		}
	}

	pub fn with_empty_policy(mut self, policy: EmptyPolicy) -> Self {
		self.policy = policy;
		self
	}

	pub fn empty_policy(&self) -> EmptyPolicy {
		self.policy
	}
}

impl<T> Declare for JsonListColumn<T> {
	fn declare(name: impl Into<String>) -> Self {
		Self::new(name)
	}
}

impl<T> Clone for JsonListColumn<T> {
	fn clone(&self) -> Self {
		Self::new(self.name.clone()).with_empty_policy(self.policy)
	}
}

impl<T> fmt::Debug for JsonListColumn<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("JsonListColumn").field("name", &self.name).field("policy", &self.policy).finish()
	}
}

impl<T: Serialize + DeserializeOwned> Column for JsonListColumn<T> {
	type Value = Vec<T>;
	type Output = Vec<T>;

	fn name(&self) -> &str {
		&self.name
	}

	fn optional<R: Row + ?Sized>(&self, row: &R) -> Option<Vec<T>> {
		let elements = row.list(&self.name)?;
		let decoded: Vec<T> = elements
			.iter()
			.filter_map(|element| match element {
				Value::Utf8(text) => decode(&self.name, text),
				other => {
					debug!(
						column = %self.name,
						expected = %Type::Utf8,
						found = %other.get_type(),
						"dropping JSON list element that is not text"
					);
					None
				}
			})
			.collect();

		if decoded.is_empty() && self.policy == EmptyPolicy::Absent {
			return None;
		}
		Some(decoded)
	}

	fn apply<R: Row + ?Sized>(&self, row: &R) -> Result<Vec<T>> {
		Ok(self.optional(row).unwrap_or_default())
	}

	fn to_wire(&self, value: &Vec<T>) -> Value {
		Value::List(
			value.iter()
				.map(|element| encode_or_undefined(&self.name, element))
				.filter(Value::is_defined)
				.collect(),
		)
	}
}
