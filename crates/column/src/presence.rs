// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowbind_type::Row;
use tracing::instrument;

use crate::{ColumnError, Result};

/// Decides what `apply` makes of an absent value.
pub trait Presence {
	type Output<T>;

	fn resolve<T, R: Row + ?Sized>(row: &R, column: &str, value: Option<T>) -> Result<Self::Output<T>>;
}

/// Absence is an extraction fault; `apply` yields `T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Required {}

/// Absence is a value; `apply` yields `Option<T>` and never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Optional {}

impl Presence for Required {
	type Output<T> = T;

	#[instrument(name = "column::required::resolve", level = "trace", skip_all, fields(column = column))]
	fn resolve<T, R: Row + ?Sized>(row: &R, column: &str, value: Option<T>) -> Result<T> {
		match value {
			Some(value) => Ok(value),
			None => Err(ColumnError::Extraction {
				column: column.to_string(),
				found: row.value(column).map(|value| value.get_type()),
			}
			.into()),
		}
	}
}

impl Presence for Optional {
	type Output<T> = Option<T>;

	fn resolve<T, R: Row + ?Sized>(_row: &R, _column: &str, value: Option<T>) -> Result<Option<T>> {
		Ok(value)
	}
}
