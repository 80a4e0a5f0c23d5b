// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! The concrete column kinds.
//!
//! Scalar kinds take a [`Presence`](crate::Presence) parameter. Collection
//! kinds never fail: an absent collection reads as an empty one.

use rowbind_type::Value;
use tracing::debug;

use crate::Primitive;

mod enumeration;
mod json;
mod json_list;
mod list;
mod map;
mod primitive;
mod set;

pub use enumeration::{EnumColumn, OptionalEnumColumn};
pub use json::{JsonColumn, OptionalJsonColumn};
pub use json_list::{EmptyPolicy, JsonListColumn};
pub use list::ListColumn;
pub use map::MapColumn;
pub use primitive::{OptionalPrimitiveColumn, PrimitiveColumn};
pub use set::SetColumn;

/// Decodes collection elements, dropping the ones that do not convert.
fn decode_elements<'a, T: Primitive>(column: &'a str, elements: &'a [Value]) -> impl Iterator<Item = T> {
	elements.iter().filter_map(move |element| decode_element(column, element))
}

fn decode_element<T: Primitive>(column: &str, element: &Value) -> Option<T> {
	let decoded = T::from_wire(element);
	if decoded.is_none() {
		debug!(
			column,
			expected = %T::get_type(),
			found = %element.get_type(),
			"dropping collection element that does not decode"
		);
	}
	decoded
}
