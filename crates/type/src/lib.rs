// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Wire-level building blocks shared by every rowbind crate.
//!
//! - [`Value`] is the store's native representation of one column's content
//! - [`Type`] names the wire kind of a [`Value`]
//! - [`Row`] is the read-only capability a fetched record exposes
//! - [`Error`] wraps a [`Diagnostic`] describing what went wrong

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod row;
pub mod value;

pub use error::{
	Error,
	diagnostic::{Diagnostic, DiagnosticColumn, IntoDiagnostic},
	render::DefaultRenderer,
};
pub use row::{NamedRow, Row};
pub use value::{
	OrderedF32, OrderedF64, Value,
	ordered_float::OrderedFloatError,
	r#type::{GetType, Type},
};

pub type Result<T> = std::result::Result<T, Error>;
