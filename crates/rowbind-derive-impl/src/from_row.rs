// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(FromRow)]` code generation.
//!
//! The generated decoder pulls one column per field from a
//! [`RowParser`](../../rowbind_core/struct.RowParser.html), strictly in
//! declaration order, and applies the constructor once every field decoded.
//! The first failing column aborts the whole record.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! #[automatically_derived]
//! impl ::rowbind::FromRow for Person {
//!     const COLUMNS: usize = 2;
//!
//!     fn from_row(row: &mut ::rowbind::RowParser<'_>) -> Result<Self, ::rowbind::RowError> {
//!         let field_0 = row.next_column::<String>()?;
//!         let field_1 = row.next_column::<i32>()?;
//!         Ok(Self { name: field_0, age: field_1 })
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use crate::{
    parse::{FieldNames, TypeShape},
    utils::fields
};

/// Entry point for the `FromRow` derive.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

/// Expand a derive input into the decoder impl.
///
/// # Errors
///
/// Any rejection from [`TypeShape::inspect`].
pub fn expand(input: &DeriveInput) -> darling::Result<TokenStream2> {
    let shape = TypeShape::inspect(input, "FromRow", FieldNames::Any)?;
    Ok(generate(&shape))
}

fn generate(shape: &TypeShape) -> TokenStream2 {
    let ident = &shape.ident;
    let arity = shape.arity();
    let (impl_generics, ty_generics, _) = shape.generics.split_for_impl();
    let where_clause = fields::bounded_where_clause(
        &shape.generics,
        &shape.fields,
        &quote!(::rowbind::FromColumn)
    );

    let bindings = fields::bindings(&shape.fields);
    let types = shape.fields.iter().map(|f| &f.ty);
    let construct = shape.construct(&bindings);

    quote! {
        #[automatically_derived]
        impl #impl_generics ::rowbind::FromRow for #ident #ty_generics #where_clause {
            const COLUMNS: usize = #arity;

            fn from_row(
                row: &mut ::rowbind::RowParser<'_>
            ) -> ::core::result::Result<Self, ::rowbind::RowError> {
                #( let #bindings = row.next_column::<#types>()?; )*
                ::core::result::Result::Ok(#construct)
            }
        }
    }
}
