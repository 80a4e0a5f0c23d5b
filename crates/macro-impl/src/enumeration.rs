// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Code generation for `#[derive(Enumeration)]`.

use proc_macro2::{TokenStream, TokenTree};

use crate::{
	generate::{
		arrow, braces, fat_arrow, ident, literal_str, option, parens, path, path_sep, punct, static_str,
		static_str_slice, str_slice_literal,
	},
	parse::ParsedEnum,
};

pub fn expand(parsed: ParsedEnum) -> TokenStream {
	let mut body = Vec::new();

	// fn names() -> &'static [&'static str]
	body.extend([ident("fn"), ident("names"), parens([])]);
	body.extend(arrow());
	body.extend(static_str_slice());
	body.push(braces(str_slice_literal(parsed.variants.iter().map(|v| v.name.as_str()))));

	// fn name(&self) -> &'static str
	let mut to_name = Vec::new();
	for variant in &parsed.variants {
		to_name.extend(variant_path(&variant.ident));
		to_name.extend(fat_arrow());
		to_name.push(literal_str(&variant.name));
		to_name.push(punct(','));
	}
	body.extend([ident("fn"), ident("name"), parens([punct('&'), ident("self")])]);
	body.extend(arrow());
	body.extend(static_str());
	body.push(braces([ident("match"), punct('*'), ident("self"), braces(to_name)]));

	// fn from_name(name: &str) -> Option<Self>
	let mut from_name = Vec::new();
	for variant in &parsed.variants {
		from_name.push(literal_str(&variant.name));
		from_name.extend(fat_arrow());
		from_name.extend(option("Some"));
		from_name.push(parens(variant_path(&variant.ident)));
		from_name.push(punct(','));
	}
	from_name.push(ident("_unknown"));
	from_name.extend(fat_arrow());
	from_name.extend(option("None"));
	from_name.push(punct(','));

	body.extend([ident("fn"), ident("from_name"), parens([ident("name"), punct(':'), punct('&'), ident("str")])]);
	body.extend(arrow());
	body.extend(path("core", &["option", "Option"]));
	body.extend([punct('<'), ident("Self"), punct('>')]);
	body.push(braces([ident("match"), ident("name"), braces(from_name)]));

	let mut tokens = vec![ident("impl")];
	tokens.extend(path(&parsed.crate_path, &["Enumeration"]));
	tokens.push(ident("for"));
	tokens.push(TokenTree::Ident(parsed.name));
	tokens.push(braces(body));
	tokens.into_iter().collect()
}

/// `Self::Variant`
fn variant_path(variant: &proc_macro2::Ident) -> Vec<TokenTree> {
	let mut tokens = vec![ident("Self")];
	tokens.extend(path_sep());
	tokens.push(TokenTree::Ident(variant.clone()));
	tokens
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::parse::parse_enum_with_crate;

	fn expand_source(source: &str) -> String {
		match parse_enum_with_crate(source.parse().unwrap(), "rowbind") {
			Ok(parsed) => expand(parsed).to_string().replace(' ', ""),
			Err(err) => panic!("{err}"),
		}
	}

	#[test]
	fn test_expand() {
		let expanded = expand_source("enum Color { Red, #[enumeration(name = \"GREEN\")] Green }");

		assert!(expanded.starts_with("impl::rowbind::EnumerationforColor{"));
		assert!(expanded.contains("fnnames()->&'static[&'staticstr]{&[\"Red\",\"GREEN\",]}"));
		assert!(expanded.contains("match*self{Self::Red=>\"Red\",Self::Green=>\"GREEN\",}"));
		assert!(expanded.contains("\"GREEN\"=>::core::option::Option::Some(Self::Green),"));
		assert!(expanded.contains("fnfrom_name(name:&str)->::core::option::Option<Self>"));
	}
}
