// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Minimal parsing of derive input, working directly on proc-macro2 tokens.

use std::{collections::HashSet, iter::Peekable};

use proc_macro2::{Delimiter, Ident, Literal, Spacing, TokenStream, TokenTree, token_stream::IntoIter};

use crate::generate::compile_error;

type Tokens = Peekable<IntoIter>;

/// A struct with named fields.
pub struct ParsedStruct {
	pub name: Ident,
	pub fields: Vec<ParsedField>,
	pub crate_path: String,
}

pub struct ParsedField {
	/// The field identifier as written, `r#` included.
	pub ident: Ident,
	pub ty: Vec<TokenTree>,
	/// The column this field is bound to.
	pub column: String,
}

/// A fieldless enum.
pub struct ParsedEnum {
	pub name: Ident,
	pub variants: Vec<ParsedVariant>,
	pub crate_path: String,
}

pub struct ParsedVariant {
	pub ident: Ident,
	/// The canonical stored name.
	pub name: String,
}

/// What a field or variant attribute contributes.
enum Attribute {
	Rename(String),
	Other,
}

pub fn parse_struct_with_crate(input: TokenStream, crate_path: &str) -> Result<ParsedStruct, TokenStream> {
	let mut tokens = input.into_iter().peekable();
	let name = parse_item_header(&mut tokens, "struct", "Columns")?;

	let body = match tokens.next() {
		Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Brace => group.stream(),
		_ => return Err(compile_error("Columns can only be derived for structs with named fields")),
	};

	let mut fields = Vec::new();
	let mut seen = HashSet::new();
	let mut body = body.into_iter().peekable();

	while body.peek().is_some() {
		let mut column = None;
		while is_punct(body.peek(), '#') {
			if let Attribute::Rename(name) = parse_attribute(&mut body, "column")? {
				column = Some(name);
			}
		}
		skip_visibility(&mut body);

		let ident = match body.next() {
			Some(TokenTree::Ident(ident)) => ident,
			_ => return Err(compile_error("expected a field name")),
		};
		if !is_punct(body.next().as_ref(), ':') {
			return Err(compile_error("expected `:` after field name"));
		}
		let ty = take_until_comma(&mut body);
		if ty.is_empty() {
			return Err(compile_error("expected a field type"));
		}

		let column = column.unwrap_or_else(|| unraw(&ident));
		if !seen.insert(column.clone()) {
			return Err(compile_error(&format!("column `{column}` is bound to more than one field")));
		}
		fields.push(ParsedField {
			ident,
			ty,
			column,
		});
	}

	Ok(ParsedStruct {
		name,
		fields,
		crate_path: crate_path.to_string(),
	})
}

pub fn parse_enum_with_crate(input: TokenStream, crate_path: &str) -> Result<ParsedEnum, TokenStream> {
	let mut tokens = input.into_iter().peekable();
	let name = parse_item_header(&mut tokens, "enum", "Enumeration")?;

	let body = match tokens.next() {
		Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Brace => group.stream(),
		_ => return Err(compile_error("expected enum body")),
	};

	let mut variants = Vec::new();
	let mut seen = HashSet::new();
	let mut body = body.into_iter().peekable();

	while body.peek().is_some() {
		let mut rename = None;
		while is_punct(body.peek(), '#') {
			if let Attribute::Rename(name) = parse_attribute(&mut body, "enumeration")? {
				rename = Some(name);
			}
		}

		let ident = match body.next() {
			Some(TokenTree::Ident(ident)) => ident,
			_ => return Err(compile_error("expected a variant name")),
		};
		match body.peek() {
			Some(TokenTree::Group(_)) => {
				return Err(compile_error("Enumeration can only be derived for enums without fields"));
			}
			Some(TokenTree::Punct(punct)) if punct.as_char() == '=' => {
				body.next();
				skip_expression(&mut body);
			}
			_ => skip_expression(&mut body),
		}

		let name = rename.unwrap_or_else(|| unraw(&ident));
		if !seen.insert(name.clone()) {
			return Err(compile_error(&format!("enumeration name `{name}` is used by more than one variant")));
		}
		variants.push(ParsedVariant {
			ident,
			name,
		});
	}

	Ok(ParsedEnum {
		name,
		variants,
		crate_path: crate_path.to_string(),
	})
}

/// Skips outer attributes and visibility, then reads `keyword Name`.
fn parse_item_header(tokens: &mut Tokens, keyword: &str, derive: &str) -> Result<Ident, TokenStream> {
	loop {
		if is_punct(tokens.peek(), '#') {
			tokens.next();
			tokens.next();
			continue;
		}
		match tokens.next() {
			Some(TokenTree::Ident(ident)) if ident == "pub" => skip_restriction(tokens),
			Some(TokenTree::Ident(ident)) if ident == keyword => break,
			Some(TokenTree::Ident(ident)) if ident == "struct" || ident == "enum" || ident == "union" => {
				return Err(compile_error(&format!("{derive} can only be derived for a {keyword}")));
			}
			Some(_) => continue,
			None => return Err(compile_error(&format!("expected `{keyword}`"))),
		}
	}

	let name = match tokens.next() {
		Some(TokenTree::Ident(ident)) => ident,
		_ => return Err(compile_error(&format!("expected {keyword} name"))),
	};
	if is_punct(tokens.peek(), '<') {
		return Err(compile_error(&format!("{derive} cannot be derived for generic types")));
	}
	Ok(name)
}

/// Reads one `#[...]`; only `#[wanted(name = "...")]` is interpreted.
fn parse_attribute(tokens: &mut Tokens, wanted: &str) -> Result<Attribute, TokenStream> {
	tokens.next();
	let group = match tokens.next() {
		Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Bracket => group,
		_ => return Err(compile_error("expected attribute")),
	};

	let mut inner = group.stream().into_iter();
	match inner.next() {
		Some(TokenTree::Ident(ident)) if ident == wanted => {}
		_ => return Ok(Attribute::Other),
	}
	let args = match inner.next() {
		Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Parenthesis => group.stream(),
		_ => return Err(compile_error(&format!("expected #[{wanted}(name = \"...\")]"))),
	};

	let mut args = args.into_iter();
	let key = args.next();
	let eq = args.next();
	let value = args.next();
	match (key, eq, value, args.next()) {
		(Some(TokenTree::Ident(key)), Some(TokenTree::Punct(eq)), Some(TokenTree::Literal(value)), None)
			if key == "name" && eq.as_char() == '=' =>
		{
			match string_value(&value) {
				Some(name) if !name.is_empty() => Ok(Attribute::Rename(name)),
				Some(_) => Err(compile_error(&format!("#[{wanted}(name = ...)] expects a non-empty string"))),
				None => Err(compile_error(&format!("#[{wanted}(name = ...)] expects a plain or raw string literal"))),
			}
		}
		_ => Err(compile_error(&format!("expected #[{wanted}(name = \"...\")]"))),
	}
}

fn skip_visibility(tokens: &mut Tokens) {
	if matches!(tokens.peek(), Some(TokenTree::Ident(ident)) if ident == "pub") {
		tokens.next();
		skip_restriction(tokens);
	}
}

/// Skips `(crate)`, `(super)` or `(in path)` after `pub`.
fn skip_restriction(tokens: &mut Tokens) {
	if matches!(tokens.peek(), Some(TokenTree::Group(group)) if group.delimiter() == Delimiter::Parenthesis) {
		tokens.next();
	}
}

/// Collects tokens up to the next top-level comma, consuming the comma.
fn take_until_comma(tokens: &mut Tokens) -> Vec<TokenTree> {
	let mut collected = Vec::new();
	let mut depth = 0usize;
	let mut after_dash = false;

	while let Some(token) = tokens.next() {
		if let TokenTree::Punct(punct) = &token {
			match punct.as_char() {
				',' if depth == 0 => break,
				'<' => depth += 1,
				// `->` is not a closing angle bracket
				'>' if !after_dash => depth = depth.saturating_sub(1),
				_ => {}
			}
			after_dash = punct.as_char() == '-' && punct.spacing() == Spacing::Joint;
		} else {
			after_dash = false;
		}
		collected.push(token);
	}
	collected
}

/// Skips an expression up to the next top-level comma, consuming the comma.
///
/// Only groups nest in expression position; `<` is a comparison or a shift.
fn skip_expression(tokens: &mut Tokens) {
	for token in tokens.by_ref() {
		if is_punct(Some(&token), ',') {
			break;
		}
	}
}

fn is_punct(token: Option<&TokenTree>, ch: char) -> bool {
	matches!(token, Some(TokenTree::Punct(punct)) if punct.as_char() == ch)
}

fn unraw(ident: &Ident) -> String {
	let name = ident.to_string();
	match name.strip_prefix("r#") {
		Some(stripped) => stripped.to_string(),
		None => name,
	}
}

/// The value of a string literal token, with escapes resolved.
fn string_value(literal: &Literal) -> Option<String> {
	let repr = literal.to_string();

	if let Some(raw) = repr.strip_prefix('r') {
		let hashes = raw.len() - raw.trim_start_matches('#').len();
		let body = raw.get(hashes..raw.len().checked_sub(hashes)?)?;
		return body.strip_prefix('"')?.strip_suffix('"').map(str::to_string);
	}

	let body = repr.strip_prefix('"')?.strip_suffix('"')?;
	let mut value = String::with_capacity(body.len());
	let mut chars = body.chars().peekable();
	while let Some(ch) = chars.next() {
		if ch != '\\' {
			value.push(ch);
			continue;
		}
		match chars.next()? {
			'n' => value.push('\n'),
			'r' => value.push('\r'),
			't' => value.push('\t'),
			'0' => value.push('\0'),
			'\\' => value.push('\\'),
			'"' => value.push('"'),
			'\'' => value.push('\''),
			'x' => {
				let hex: String = chars.by_ref().take(2).collect();
				let byte = u8::from_str_radix(&hex, 16).ok().filter(u8::is_ascii)?;
				value.push(char::from(byte));
			}
			'u' => {
				if chars.next()? != '{' {
					return None;
				}
				let hex: String = chars.by_ref().take_while(|ch| *ch != '}').filter(|ch| *ch != '_').collect();
				value.push(char::from_u32(u32::from_str_radix(&hex, 16).ok()?)?);
			}
			// line continuation: the newline and leading whitespace are dropped
			'\n' => {
				while chars.next_if(|ch| ch.is_whitespace()).is_some() {}
			}
			_ => return None,
		}
	}
	Some(value)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse_struct(source: &str) -> Result<ParsedStruct, TokenStream> {
		parse_struct_with_crate(source.parse().unwrap(), "rowbind")
	}

	fn parse_enum(source: &str) -> Result<ParsedEnum, TokenStream> {
		parse_enum_with_crate(source.parse().unwrap(), "rowbind")
	}

	fn render(tokens: &[TokenTree]) -> String {
		tokens.iter().cloned().collect::<TokenStream>().to_string()
	}

	#[test]
	fn test_struct_fields() {
		let parsed = parse_struct(
			r#"
			#[derive(Debug)]
			pub struct UserColumns {
				/// the key
				pub id: PrimitiveColumn<i64>,
				#[column(name = "e_mail")]
				pub(crate) email: OptionalPrimitiveColumn<String>,
				quotas: MapColumn<String, u32>
			}
			"#,
		)
		.unwrap_or_else(|_| panic!("parse failed"));

		assert_eq!(parsed.name.to_string(), "UserColumns");
		assert_eq!(parsed.crate_path, "rowbind");

		let columns: Vec<_> = parsed.fields.iter().map(|f| f.column.as_str()).collect();
		assert_eq!(columns, vec!["id", "e_mail", "quotas"]);
		assert_eq!(render(&parsed.fields[2].ty), "MapColumn < String , u32 >");
	}

	#[test]
	fn test_raw_identifier() {
		let parsed = parse_struct("struct C { r#type: PrimitiveColumn<String> }").unwrap_or_else(|_| panic!());

		assert_eq!(parsed.fields[0].ident.to_string(), "r#type");
		assert_eq!(parsed.fields[0].column, "type");
	}

	#[test]
	fn test_function_pointer_type() {
		let parsed = parse_struct("struct C { a: Wrap<fn() -> u8, u16>, b: X }").unwrap_or_else(|_| panic!());

		assert_eq!(parsed.fields.len(), 2);
		assert_eq!(parsed.fields[1].column, "b");
	}

	#[test]
	fn test_struct_rejections() {
		assert!(parse_struct("struct C(PrimitiveColumn<i64>);").is_err());
		assert!(parse_struct("struct C<T> { a: T }").is_err());
		assert!(parse_struct("enum C { A }").is_err());
		assert!(parse_struct("struct C { a: X, #[column(name = \"a\")] b: X }").is_err());
		assert!(parse_struct("struct C { #[column(name = \"\")] a: X }").is_err());
		assert!(parse_struct("struct C { #[column(rename = \"b\")] a: X }").is_err());
		assert!(parse_struct("struct C { #[column(name = b\"x\")] a: X }").is_err());
	}

	#[test]
	fn test_enum_variants() {
		let parsed = parse_enum(
			r#"
			#[derive(Debug)]
			enum Color {
				/// the first
				Red = 1,
				#[enumeration(name = "GREEN")]
				Green,
				#[enumeration(name = r"BL\UE")]
				Blue = 7
			}
			"#,
		)
		.unwrap_or_else(|_| panic!("parse failed"));

		let names: Vec<_> = parsed.variants.iter().map(|v| v.name.as_str()).collect();
		assert_eq!(names, vec!["Red", "GREEN", r"BL\UE"]);
		assert_eq!(parsed.variants[1].ident.to_string(), "Green");
	}

	#[test]
	fn test_shifted_discriminants() {
		let parsed = parse_enum("enum Flags { A = 1 << 0, B = 1 << 1, C = (1 << 2) | 1, D }")
			.unwrap_or_else(|_| panic!("parse failed"));

		let names: Vec<_> = parsed.variants.iter().map(|v| v.name.as_str()).collect();
		assert_eq!(names, vec!["A", "B", "C", "D"]);
	}

	#[test]
	fn test_enum_rejections() {
		assert!(parse_enum("enum E { A(u8) }").is_err());
		assert!(parse_enum("enum E { A { x: u8 } }").is_err());
		assert!(parse_enum("enum E { A, #[enumeration(name = \"A\")] B }").is_err());
		assert!(parse_enum("struct E { a: u8 }").is_err());
	}

	#[test]
	fn test_string_value() {
		let value = |source: &str| match source.parse::<TokenStream>().unwrap().into_iter().next() {
			Some(TokenTree::Literal(literal)) => string_value(&literal),
			_ => None,
		};

		assert_eq!(value(r#""plain""#), Some("plain".to_string()));
		assert_eq!(value(r#""a\"b\n""#), Some("a\"b\n".to_string()));
		assert_eq!(value(r##"r#"x"y"#"##), Some("x\"y".to_string()));
		assert_eq!(value(r#""\x41\u{1F600}\u{e9}""#), Some("A\u{1F600}\u{e9}".to_string()));
		assert_eq!(value("\"a\\\n    b\""), Some("ab".to_string()));
		assert_eq!(value("42"), None);
	}
}
