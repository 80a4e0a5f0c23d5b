// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::marker::PhantomData;

use rowbind_type::{Row, Value};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use crate::{Column, ColumnError, Optional, Presence, Required, Result, column::impl_descriptor};

/// A column for types with no native wire form, stored as JSON text.
///
/// Malformed text reads as absent rather than failing the row.
pub struct JsonColumn<T, P = Required> {
	name: String,
	marker: PhantomData<fn() -> (T, P)>,
}

pub type OptionalJsonColumn<T> = JsonColumn<T, Optional>;

impl_descriptor!(JsonColumn<T, P>);

impl<T: Serialize, P> JsonColumn<T, P> {
	/// Like [`Column::to_wire`], but reports values serde_json cannot encode.
	pub fn try_to_wire(&self, value: &T) -> Result<Value> {
		encode(&self.name, value)
	}
}

impl<T, P> Column for JsonColumn<T, P>
where
	T: Serialize + DeserializeOwned,
	P: Presence,
{
	type Value = T;
	type Output = P::Output<T>;

	fn name(&self) -> &str {
		&self.name
	}

	fn optional<R: Row + ?Sized>(&self, row: &R) -> Option<T> {
		decode(&self.name, row.utf8(&self.name)?)
	}

	fn apply<R: Row + ?Sized>(&self, row: &R) -> Result<P::Output<T>> {
		P::resolve(row, &self.name, self.optional(row))
	}

	fn to_wire(&self, value: &T) -> Value {
		encode_or_undefined(&self.name, value)
	}
}

pub(super) fn encode<T: Serialize>(column: &str, value: &T) -> Result<Value> {
	serde_json::to_string(value).map(Value::Utf8).map_err(|err| {
		ColumnError::Encode {
			column: column.to_string(),
			reason: err.to_string(),
		}
		.into()
	})
}

pub(super) fn encode_or_undefined<T: Serialize>(column: &str, value: &T) -> Value {
	match encode(column, value) {
		Ok(value) => value,
		Err(err) => {
			warn!(column, reason = err.label.as_deref().unwrap_or_default(), "writing JSON column as null");
			Value::Undefined
		}
	}
}

pub(super) fn decode<T: DeserializeOwned>(column: &str, text: &str) -> Option<T> {
	match serde_json::from_str(text) {
		Ok(value) => Some(value),
		Err(err) => {
			debug!(column, error = %err, "discarding malformed JSON");
			None
		}
	}
}
