// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowbind_type::Row;

use crate::Result;

/// Assembles an application record from one row, usually through a set of
/// column descriptors.
pub trait FromRow: Sized {
	fn from_row<R: Row + ?Sized>(row: &R) -> Result<Self>;
}
