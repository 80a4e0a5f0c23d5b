// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

pub mod diagnostic;
pub mod render;

use diagnostic::Diagnostic;
use render::DefaultRenderer;

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn code(&self) -> &str {
		&self.0.code
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(diagnostic)
	}
}
