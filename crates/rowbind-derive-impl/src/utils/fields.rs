// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field binding utilities for generated impls.

use proc_macro2::TokenStream;
use quote::ToTokens;
use syn::{Generics, WhereClause, parse_quote};

use crate::parse::FieldShape;

/// Fresh local bindings (`field_0`, `field_1`, ...) as tokens.
pub fn bindings(fields: &[FieldShape]) -> Vec<TokenStream> {
    fields
        .iter()
        .map(|f: &FieldShape| f.binding().into_token_stream())
        .collect()
}

/// Where clause requiring `bound` on every field type.
///
/// Bounds are only added when the record has type parameters; for concrete
/// records the compiler checks the field types directly.
pub fn bounded_where_clause(
    generics: &Generics,
    fields: &[FieldShape],
    bound: &TokenStream
) -> Option<WhereClause> {
    if generics.type_params().next().is_none() {
        return generics.where_clause.clone();
    }

    let mut clause = generics
        .where_clause
        .clone()
        .unwrap_or_else(|| parse_quote!(where));
    for field in fields {
        let ty = &field.ty;
        clause.predicates.push(parse_quote!(#ty: #bound));
    }
    Some(clause)
}
