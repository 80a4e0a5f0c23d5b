// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Typed column descriptors over rows fetched from a column store.
//!
//! A descriptor is a named, stateless accessor bound to one logical field. It
//! reads a [`Row`](rowbind_type::Row) and produces a typed value, and renders
//! typed values back to their wire form for the write path.
//!
//! - [`Primitive`] is the per-scalar codec, resolved through trait bounds
//! - [`Presence`] selects whether absence is a value ([`Optional`]) or an
//!   extraction fault ([`Required`])
//! - the kinds in [`kind`] build on both: primitive, JSON, enumeration, set,
//!   list, map and JSON list columns
//!
//! ```ignore
//! let id: PrimitiveColumn<i64> = PrimitiveColumn::new("id");
//! let email = OptionalPrimitiveColumn::<String>::new("email");
//!
//! let id = id.apply(&row)?;           // i64, or an extraction fault
//! let email = email.apply(&row)?;     // Option<String>, never fails
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod column;
mod enumeration;
mod error;
mod from_row;
pub mod kind;
mod presence;
pub mod primitive;

pub use column::{Column, Declare};
pub use enumeration::Enumeration;
pub use error::ColumnError;
pub use from_row::FromRow;
pub use kind::{
	EmptyPolicy, EnumColumn, JsonColumn, JsonListColumn, ListColumn, MapColumn, OptionalEnumColumn,
	OptionalJsonColumn, OptionalPrimitiveColumn, PrimitiveColumn, SetColumn,
};
pub use presence::{Optional, Presence, Required};
pub use primitive::Primitive;
pub use rowbind_type::Error;

pub type Result<T> = std::result::Result<T, Error>;
