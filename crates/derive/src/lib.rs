// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Derive macros for rowbind.
//!
//! - `#[derive(Columns)]` builds every descriptor field of a struct from the
//!   field's name, or from `#[column(name = "...")]`
//! - `#[derive(Enumeration)]` maps the variants of a fieldless enum to their
//!   stored names, overridable with `#[enumeration(name = "...")]`

#![cfg_attr(not(debug_assertions), deny(warnings))]

use proc_macro::TokenStream;

#[proc_macro_derive(Columns, attributes(column))]
pub fn derive_columns(input: TokenStream) -> TokenStream {
	rowbind_macro_impl::derive_columns_with_crate(input.into(), "rowbind").into()
}

#[proc_macro_derive(Enumeration, attributes(enumeration))]
pub fn derive_enumeration(input: TokenStream) -> TokenStream {
	rowbind_macro_impl::derive_enumeration_with_crate(input.into(), "rowbind").into()
}
