// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use rowbind_type::{Diagnostic, DiagnosticColumn, Error, IntoDiagnostic, Type};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColumnError {
	#[error("required column '{column}' has no usable value")]
	Extraction {
		column: String,
		found: Option<Type>,
	},

	#[error("column '{column}' could not be encoded: {reason}")]
	Encode {
		column: String,
		reason: String,
	},
}

impl ColumnError {
	pub fn column(&self) -> &str {
		match self {
			ColumnError::Extraction {
				column,
				..
			} => column,
			ColumnError::Encode {
				column,
				..
			} => column,
		}
	}
}

impl IntoDiagnostic for ColumnError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			ColumnError::Extraction {
				column,
				found,
			} => {
				let (label, notes) = match found {
					Some(found) => (
						format!("column holds a {found} value that does not decode"),
						vec![
							"a value that is present but does not decode is treated as absent".to_string(),
							"check that the descriptor's type matches the stored column type".to_string(),
						],
					),
					None => (
						"column is missing or null".to_string(),
						vec!["required columns fail instead of yielding a default".to_string()],
					),
				};

				Diagnostic {
					code: "COLUMN_001".to_string(),
					message: format!("required column '{column}' has no usable value"),
					column: Some(DiagnosticColumn {
						name: column,
						found,
					}),
					label: Some(label),
					help: Some("declare the column optional if absence is expected".to_string()),
					notes,
					cause: None,
				}
			}

			ColumnError::Encode {
				column,
				reason,
			} => Diagnostic {
				code: "COLUMN_002".to_string(),
				message: format!("column '{column}' could not be encoded"),
				column: Some(DiagnosticColumn {
					name: column,
					found: None,
				}),
				label: Some(reason),
				help: Some("JSON object keys must serialize as strings".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<ColumnError> for Error {
	fn from(err: ColumnError) -> Self {
		Error(err.into_diagnostic())
	}
}
