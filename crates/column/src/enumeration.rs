// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

/// A closed set of named values stored as text.
///
/// Names are matched by exact string equality. `#[derive(Enumeration)]`
/// implements this for fieldless enums.
pub trait Enumeration: Sized {
	/// Every canonical name, in declaration order.
	fn names() -> &'static [&'static str];

	fn name(&self) -> &'static str;

	fn from_name(name: &str) -> Option<Self>;
}
