// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Implementation for the rowbind derive macros.
//!
//! This crate provides the implementation logic used by the proc-macro crate.
//! It's not intended for direct use; use `rowbind-derive` or `rowbind`
//! instead.

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod columns;
pub mod enumeration;
pub mod generate;
pub mod parse;

use proc_macro2::TokenStream;

/// Derive `Columns` with the default crate path (rowbind).
pub fn derive_columns(input: TokenStream) -> TokenStream {
	derive_columns_with_crate(input, "rowbind")
}

/// Derive `Columns` with a custom crate path.
///
/// # Arguments
/// * `input` - The derive macro input TokenStream
/// * `crate_path` - The crate exposing `Declare` (e.g., "rowbind", "rowbind_column")
pub fn derive_columns_with_crate(input: TokenStream, crate_path: &str) -> TokenStream {
	match parse::parse_struct_with_crate(input, crate_path) {
		Ok(parsed) => columns::expand(parsed),
		Err(err) => err,
	}
}

/// Derive `Enumeration` with the default crate path (rowbind).
pub fn derive_enumeration(input: TokenStream) -> TokenStream {
	derive_enumeration_with_crate(input, "rowbind")
}

/// Derive `Enumeration` with a custom crate path.
pub fn derive_enumeration_with_crate(input: TokenStream, crate_path: &str) -> TokenStream {
	match parse::parse_enum_with_crate(input, crate_path) {
		Ok(parsed) => enumeration::expand(parsed),
		Err(err) => err,
	}
}
