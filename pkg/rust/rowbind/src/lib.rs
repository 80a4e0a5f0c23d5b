// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Typed, named column descriptors for mapping rows fetched from a column
//! store to application types, and application values back to wire values.
//!
//! ```ignore
//! use rowbind::prelude::*;
//!
//! #[derive(Enumeration)]
//! enum Status { Active, Suspended }
//!
//! #[derive(Columns)]
//! struct UserColumns {
//!     id: PrimitiveColumn<i64>,
//!     email: OptionalPrimitiveColumn<String>,
//!     status: EnumColumn<Status>,
//!     roles: SetColumn<String>,
//! }
//!
//! let columns = UserColumns::new();
//! let id = columns.id.apply(&row)?;
//! let roles = columns.roles.apply(&row)?;
//! ```

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use rowbind_column as column;
pub use rowbind_column::{
	Column, ColumnError, Declare, EmptyPolicy, EnumColumn, Enumeration, FromRow, JsonColumn, JsonListColumn,
	ListColumn, MapColumn, Optional, OptionalEnumColumn, OptionalJsonColumn, OptionalPrimitiveColumn, Presence,
	Primitive, PrimitiveColumn, Required, Result, SetColumn,
};
pub use rowbind_derive::{Columns, Enumeration};
pub use rowbind_type as r#type;
pub use rowbind_type::{
	DefaultRenderer, Diagnostic, DiagnosticColumn, Error, GetType, IntoDiagnostic, NamedRow, OrderedF32, OrderedF64,
	Row, Type, Value,
};

/// The traits and kinds needed to declare and apply descriptors.
pub mod prelude {
	pub use crate::{
		Column, Columns, EmptyPolicy, EnumColumn, Enumeration, FromRow, JsonColumn, JsonListColumn, ListColumn,
		MapColumn, NamedRow, OptionalEnumColumn, OptionalJsonColumn, OptionalPrimitiveColumn, PrimitiveColumn, Row,
		SetColumn, Value,
	};
}
