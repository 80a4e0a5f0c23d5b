// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::Type;

/// A structured, renderable description of a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub column: Option<DiagnosticColumn>,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

/// The column a diagnostic is about, with the wire kind found there if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticColumn {
	pub name: String,
	pub found: Option<Type>,
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

impl Diagnostic {
	pub fn with_cause(mut self, cause: impl IntoDiagnostic) -> Self {
		self.cause = Some(Box::new(cause.into_diagnostic()));
		self
	}
}
