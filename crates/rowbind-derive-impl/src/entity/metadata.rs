// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Entity` trait implementation.
//!
//! Built-in naming rules are applied during expansion, so the accessors
//! return literals. A naming function path is called from the accessor
//! instead.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl ::rowbind::Entity for Person {
//!     type Id = PersonId;
//!
//!     fn table_name() -> String {
//!         String::from("person")
//!     }
//!
//!     fn column_names() -> Vec<String> {
//!         vec![String::from("name"), String::from("age")]
//!     }
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::EntityBinding;

/// Generates `impl Entity` for the record.
pub fn generate(binding: &EntityBinding<'_>) -> TokenStream {
    let shape = binding.shape;
    let config = binding.config;
    let ident = &shape.ident;
    let id = &binding.id;
    let (impl_generics, ty_generics, where_clause) = shape.generics.split_for_impl();

    let table = config.table_naming.expr(&shape.base_name());
    let columns = shape
        .field_names()
        .into_iter()
        .map(|name| config.column_naming.expr(&name));

    quote! {
        #[automatically_derived]
        impl #impl_generics ::rowbind::Entity for #ident #ty_generics #where_clause {
            type Id = #id;

            fn table_name() -> ::std::string::String {
                #table
            }

            fn column_names() -> ::std::vec::Vec<::std::string::String> {
                ::std::vec![#(#columns),*]
            }
        }
    }
}
