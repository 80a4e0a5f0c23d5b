// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::Write;

use super::diagnostic::Diagnostic;

pub struct DefaultRenderer;

impl DefaultRenderer {
	pub fn render_string(diagnostic: &Diagnostic) -> String {
		let mut output = String::new();
		Self::render(&mut output, diagnostic, 0);
		output
	}

	fn render(output: &mut String, d: &Diagnostic, depth: usize) {
		let indent = "  ".repeat(depth);

		let _ = writeln!(output, "{indent}error[{}]: {}", d.code, d.message);

		if let Some(label) = &d.label {
			let _ = writeln!(output, "{indent}  = {label}");
		}

		if let Some(column) = &d.column {
			match column.found {
				Some(found) => {
					let _ = writeln!(output, "{indent}note: column `{}` holds `{found}`", column.name);
				}
				None => {
					let _ = writeln!(output, "{indent}note: column `{}`", column.name);
				}
			}
		}

		if let Some(help) = &d.help {
			let _ = writeln!(output, "{indent}help: {help}");
		}

		for note in &d.notes {
			let _ = writeln!(output, "{indent}note: {note}");
		}

		if let Some(cause) = &d.cause {
			let _ = writeln!(output, "{indent}caused by:");
			Self::render(output, cause, depth + 1);
		}
	}
}
