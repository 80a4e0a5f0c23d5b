// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Token generation helpers for building TokenStreams without external dependencies.

use proc_macro2::{Delimiter, Group, Ident, Literal, Punct, Spacing, Span, TokenStream, TokenTree};

/// Creates an identifier token.
pub fn ident(name: &str) -> TokenTree {
	TokenTree::Ident(Ident::new(name, Span::call_site()))
}

/// Creates a punctuation token with Alone spacing.
pub fn punct(ch: char) -> TokenTree {
	TokenTree::Punct(Punct::new(ch, Spacing::Alone))
}

/// Creates a punctuation token with Joint spacing (for multi-char punctuation like ::).
pub fn punct_joint(ch: char) -> TokenTree {
	TokenTree::Punct(Punct::new(ch, Spacing::Joint))
}

/// Creates a string literal token.
pub fn literal_str(s: &str) -> TokenTree {
	TokenTree::Literal(Literal::string(s))
}

/// Creates a group (delimited tokens).
pub fn group(delimiter: Delimiter, tokens: impl IntoIterator<Item = TokenTree>) -> TokenTree {
	TokenTree::Group(Group::new(delimiter, tokens.into_iter().collect()))
}

/// Creates parentheses group: (tokens)
pub fn parens(tokens: impl IntoIterator<Item = TokenTree>) -> TokenTree {
	group(Delimiter::Parenthesis, tokens)
}

/// Creates brace group: {tokens}
pub fn braces(tokens: impl IntoIterator<Item = TokenTree>) -> TokenTree {
	group(Delimiter::Brace, tokens)
}

/// Creates bracket group: [tokens]
pub fn brackets(tokens: impl IntoIterator<Item = TokenTree>) -> TokenTree {
	group(Delimiter::Bracket, tokens)
}

/// Emits `::` (path separator).
pub fn path_sep() -> impl Iterator<Item = TokenTree> {
	[punct_joint(':'), punct(':')].into_iter()
}

/// Emits a global path like `::rowbind::Declare`.
///
/// `crate_path` may itself contain `::` separated segments.
pub fn path(crate_path: &str, segments: &[&str]) -> Vec<TokenTree> {
	let mut tokens = Vec::new();
	for seg in crate_path.split("::").chain(segments.iter().copied()).filter(|seg| !seg.is_empty()) {
		tokens.extend(path_sep());
		tokens.push(ident(seg));
	}
	tokens
}

/// Emits `::core::option::Option::<variant>`.
pub fn option(variant: &str) -> Vec<TokenTree> {
	path("core", &["option", "Option", variant])
}

/// Emits `->` (return type arrow).
pub fn arrow() -> impl Iterator<Item = TokenTree> {
	[punct_joint('-'), punct('>')].into_iter()
}

/// Emits `=>` (match arm arrow).
pub fn fat_arrow() -> impl Iterator<Item = TokenTree> {
	[punct_joint('='), punct('>')].into_iter()
}

/// Emits `&'static [&'static str]`.
pub fn static_str_slice() -> Vec<TokenTree> {
	let mut tokens = vec![punct('&')];
	tokens.extend(lifetime_static());
	let mut inner = vec![punct('&')];
	inner.extend(lifetime_static());
	inner.push(ident("str"));
	tokens.push(brackets(inner));
	tokens
}

/// Emits `&'static str`.
pub fn static_str() -> Vec<TokenTree> {
	let mut tokens = vec![punct('&')];
	tokens.extend(lifetime_static());
	tokens.push(ident("str"));
	tokens
}

fn lifetime_static() -> [TokenTree; 2] {
	[punct_joint('\''), ident("static")]
}

/// Emits `&["a", "b", ...]`.
pub fn str_slice_literal<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<TokenTree> {
	let mut inner = Vec::new();
	for value in values {
		inner.push(literal_str(value));
		inner.push(punct(','));
	}
	vec![punct('&'), brackets(inner)]
}

/// Creates a compile_error!("message") invocation.
pub fn compile_error(message: &str) -> TokenStream {
	let tokens = vec![ident("compile_error"), punct('!'), parens([literal_str(message)])];
	tokens.into_iter().collect()
}
