// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowbind_type::{Row, Value};

use crate::Result;

/// A named, stateless accessor bound to one logical field.
///
/// The name is fixed when the descriptor is built and is the only state a
/// descriptor carries, so one instance can serve any number of rows, from any
/// number of threads.
pub trait Column {
	/// The decoded application type.
	type Value;
	/// What `apply` yields: `Value`, `Option<Value>` or a collection.
	type Output;

	fn name(&self) -> &str;

	/// Reads the column; `None` means no usable value in this row.
	fn optional<R: Row + ?Sized>(&self, row: &R) -> Option<Self::Value>;

	fn apply<R: Row + ?Sized>(&self, row: &R) -> Result<Self::Output>;

	/// Renders a value in the form the write path sends to the store.
	fn to_wire(&self, value: &Self::Value) -> Value;

	/// The `(column, wire value)` pair for a write statement.
	fn bind(&self, value: &Self::Value) -> (String, Value) {
		(self.name().to_string(), self.to_wire(value))
	}
}

/// Builds a descriptor from its column name alone.
///
/// Every column kind implements this; `#[derive(Columns)]` relies on it to
/// bind each field to the field's own name.
pub trait Declare: Sized {
	fn declare(name: impl Into<String>) -> Self;
}

/// Implements construction, `Declare`, `Clone` and `Debug` for a kind made of
/// a `name` and a phantom `marker`.
macro_rules! impl_descriptor {
	($kind:ident<$($param:ident),+>) => {
		impl<$($param),+> $kind<$($param),+> {
			pub fn new(name: impl Into<String>) -> Self {
				Self {
					name: name.into(),
					marker: std::marker::PhantomData,
				}
			}
		}

		impl<$($param),+> $crate::Declare for $kind<$($param),+> {
			fn declare(name: impl Into<String>) -> Self {
				Self::new(name)
			}
		}

		impl<$($param),+> Clone for $kind<$($param),+> {
			fn clone(&self) -> Self {
				Self::new(self.name.clone())
			}
		}

		impl<$($param),+> std::fmt::Debug for $kind<$($param),+> {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.debug_struct(stringify!($kind)).field("name", &self.name).finish()
			}
		}
	};
}

pub(crate) use impl_descriptor;
