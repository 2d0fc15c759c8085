// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(ToRow)]` code generation.
//!
//! The generated encoder destructures the record once and converts every
//! field with [`ToColumn`](../../rowbind_core/trait.ToColumn.html), keeping
//! declaration order. Encoding cannot fail.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! #[automatically_derived]
//! impl ::rowbind::ToRow for Person {
//!     const COLUMNS: usize = 2;
//!
//!     fn to_row(&self) -> Vec<::rowbind::Value> {
//!         let Self { name: field_0, age: field_1 } = self;
//!         vec![
//!             ::rowbind::ToColumn::to_column(field_0),
//!             ::rowbind::ToColumn::to_column(field_1),
//!         ]
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

/// Entry point for the `ToRow` derive.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

/// Expand a derive input into the encoder impl.
///
/// # Errors
///
/// Any rejection from [`TypeShape::inspect`].
pub fn expand(input: &DeriveInput) -> darling::Result<TokenStream2> {
    let shape = TypeShape::inspect(input, "ToRow", FieldNames::Any)?;
    Ok(generate(&shape))
}

fn generate(shape: &TypeShape) -> TokenStream2 {
    let ident = &shape.ident;
    let arity = shape.arity();
    let (impl_generics, ty_generics, _) = shape.generics.split_for_impl();
    let where_clause = fields::bounded_where_clause(
        &shape.generics,
        &shape.fields,
        &quote!(::rowbind::ToColumn)
    );

    let pattern = shape.destructure();
    let bindings = fields::bindings(&shape.fields);

    quote! {
        #[automatically_derived]
        impl #impl_generics ::rowbind::ToRow for #ident #ty_generics #where_clause {
            const COLUMNS: usize = #arity;

            fn to_row(&self) -> ::std::vec::Vec<::rowbind::Value> {
                let #pattern = self;
                ::std::vec![#( ::rowbind::ToColumn::to_column(#bindings) ),*]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::ItemImpl;

    use super::*;

    fn rendered(input: DeriveInput) -> String {
        let item: ItemImpl = syn::parse2(expand(&input).unwrap()).unwrap();
        quote!(#item).to_string()
    }

    #[test]
    fn encodes_fields_in_declaration_order() {
        let out = rendered(syn::parse_quote! {
            struct Entity { e_field: String, e_field2: i32, e_field3: bool }
        });

        assert!(out.contains("let Self { e_field : field_0 , e_field2 : field_1 , e_field3 : field_2 } = self"));
        let first = out.find("to_column (field_0)").unwrap();
        let second = out.find("to_column (field_1)").unwrap();
        let third = out.find("to_column (field_2)").unwrap();
        assert!(first < second && second < third);
        assert!(out.contains("const COLUMNS : usize = 3usize"));
    }

    #[test]
    fn positional_struct_is_destructured_by_position() {
        let out = rendered(syn::parse_quote!(struct Pair(i64, String);));
        assert!(out.contains("let Self (field_0 , field_1) = self"));
    }

    #[test]
    fn generic_fields_are_bounded() {
        let out = rendered(syn::parse_quote!(struct Wrapper<T> { inner: T }));
        assert!(out.contains("T : :: rowbind :: ToColumn"));
    }

    #[test]
    fn enum_is_rejected() {
        let input: DeriveInput = syn::parse_quote!(enum Status { Active, Inactive });
        let err = expand(&input).unwrap_err();
        assert!(err.to_string().contains("unsupported shape"));
    }
}
