// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Code generation for `#[derive(Columns)]`.

use proc_macro2::{TokenStream, TokenTree};

use crate::{
	generate::{arrow, braces, ident, literal_str, parens, path, path_sep, punct, static_str_slice, str_slice_literal},
	parse::ParsedStruct,
};

/// Generates `new`, `column_names` and `Default` for a descriptor struct.
///
/// ```ignore
/// impl UserColumns {
///     pub fn new() -> Self {
///         Self { id: <PrimitiveColumn<i64> as ::rowbind::Declare>::declare("id"), .. }
///     }
///     pub fn column_names() -> &'static [&'static str] { &["id", ..] }
/// }
/// impl ::core::default::Default for UserColumns { .. }
/// ```
pub fn expand(parsed: ParsedStruct) -> TokenStream {
	let declare = path(&parsed.crate_path, &["Declare"]);

	let mut initializers = Vec::new();
	for field in &parsed.fields {
		initializers.push(TokenTree::Ident(field.ident.clone()));
		initializers.push(punct(':'));
		initializers.push(punct('<'));
		initializers.extend(field.ty.iter().cloned());
		initializers.push(ident("as"));
		initializers.extend(declare.iter().cloned());
		initializers.push(punct('>'));
		initializers.extend(path_sep());
		initializers.push(ident("declare"));
		initializers.push(parens([literal_str(&field.column)]));
		initializers.push(punct(','));
	}

	let mut new_fn = vec![ident("pub"), ident("fn"), ident("new"), parens([])];
	new_fn.extend(arrow());
	new_fn.push(ident("Self"));
	new_fn.push(braces([ident("Self"), braces(initializers)]));

	let mut names_fn = vec![ident("pub"), ident("fn"), ident("column_names"), parens([])];
	names_fn.extend(arrow());
	names_fn.extend(static_str_slice());
	names_fn.push(braces(str_slice_literal(parsed.fields.iter().map(|f| f.column.as_str()))));

	let mut tokens = vec![ident("impl"), TokenTree::Ident(parsed.name.clone())];
	tokens.push(braces(new_fn.into_iter().chain(names_fn)));

	let mut default_fn = vec![ident("fn"), ident("default"), parens([])];
	default_fn.extend(arrow());
	default_fn.push(ident("Self"));
	let mut default_body = vec![ident("Self")];
	default_body.extend(path_sep());
	default_body.push(ident("new"));
	default_body.push(parens([]));
	default_fn.push(braces(default_body));

	tokens.push(ident("impl"));
	tokens.extend(path("core", &["default", "Default"]));
	tokens.push(ident("for"));
	tokens.push(TokenTree::Ident(parsed.name));
	tokens.push(braces(default_fn));

	tokens.into_iter().collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::parse::parse_struct_with_crate;

	/// Expanded source with whitespace removed.
	fn expand_source(source: &str) -> String {
		match parse_struct_with_crate(source.parse().unwrap(), "rowbind") {
			Ok(parsed) => expand(parsed).to_string().replace(' ', ""),
			Err(err) => panic!("{err}"),
		}
	}

	#[test]
	fn test_expand() {
		let expanded = expand_source("struct C { id: PrimitiveColumn<i64>, #[column(name = \"e\")] r#type: X }");

		assert!(expanded.contains("id:<PrimitiveColumn<i64>as::rowbind::Declare>::declare(\"id\"),"));
		assert!(expanded.contains("r#type:<Xas::rowbind::Declare>::declare(\"e\"),"));
		assert!(expanded.contains("pubfncolumn_names()->&'static[&'staticstr]{&[\"id\",\"e\",]}"));
		assert!(expanded.contains("impl::core::default::DefaultforC{fndefault()->Self{Self::new()}}"));
	}

	#[test]
	fn test_expand_empty() {
		let expanded = expand_source("struct Nothing {}");

		assert!(expanded.contains("pubfnnew()->Self{Self{}}"));
	}
}
