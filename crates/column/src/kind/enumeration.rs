// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::marker::PhantomData;

use rowbind_type::{Row, Value};
use tracing::debug;

use crate::{Column, Enumeration, Optional, Presence, Required, Result, column::impl_descriptor};

/// A column holding one of a fixed set of names, stored as text.
pub struct EnumColumn<E, P = Required> {
	name: String,
	marker: PhantomData<fn() -> (E, P)>,
}

pub type OptionalEnumColumn<E> = EnumColumn<E, Optional>;

impl_descriptor!(EnumColumn<E, P>);

impl<E: Enumeration, P: Presence> Column for EnumColumn<E, P> {
	type Value = E;
	type Output = P::Output<E>;

	fn name(&self) -> &str {
		&self.name
	}

	fn optional<R: Row + ?Sized>(&self, row: &R) -> Option<E> {
		let text = row.utf8(&self.name)?;
		let value = E::from_name(text);
		if value.is_none() {
			debug!(column = %self.name, value = text, known = ?E::names(), "unknown enumeration value");
		}
		value
	}

	fn apply<R: Row + ?Sized>(&self, row: &R) -> Result<P::Output<E>> {
		P::resolve(row, &self.name, self.optional(row))
	}

	fn to_wire(&self, value: &E) -> Value {
		Value::utf8(value.name())
	}
}
