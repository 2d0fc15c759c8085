// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Identifier newtype generation.
//!
//! # Generated Code
//!
//! For `Person` with default configuration:
//!
//! ```rust,ignore
//! #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
//! pub struct PersonId(pub ::rowbind::BigInt);
//!
//! impl From<::rowbind::BigInt> for PersonId { ... }
//! impl ::rowbind::FromColumn for PersonId { ... }
//! impl ::rowbind::ToColumn for PersonId { ... }
//! ```
//!
//! The scalar must itself implement `FromColumn` and `ToColumn`.

use proc_macro2::TokenStream;
use quote::quote;

use super::EntityBinding;
use crate::parse::Capability;

/// Generates the identifier type and its conversions.
pub fn generate(binding: &EntityBinding<'_>) -> TokenStream {
    let vis = &binding.shape.vis;
    let id = &binding.id;
    let scalar = &binding.config.id_type;
    let capabilities = &binding.config.id_capabilities;

    let derives = capabilities.derive_paths();
    let derive_attr = if derives.is_empty() {
        TokenStream::new()
    } else {
        quote! { #[derive(#(#derives),*)] }
    };
    let doc = format!("Identifier of a `{}` row.", binding.shape.base_name());

    let display = if capabilities.contains(Capability::Display) {
        display_impl(binding)
    } else {
        TokenStream::new()
    };

    quote! {
        #[doc = #doc]
        #derive_attr
        #vis struct #id(pub #scalar);

        #[automatically_derived]
        impl ::core::convert::From<#scalar> for #id {
            fn from(value: #scalar) -> Self {
                Self(value)
            }
        }

        #[automatically_derived]
        impl ::rowbind::FromColumn for #id {
            fn from_column(
                value: &::rowbind::Value
            ) -> ::core::result::Result<Self, ::rowbind::ColumnError> {
                <#scalar as ::rowbind::FromColumn>::from_column(value).map(Self)
            }
        }

        #[automatically_derived]
        impl ::rowbind::ToColumn for #id {
            fn to_column(&self) -> ::rowbind::Value {
                ::rowbind::ToColumn::to_column(&self.0)
            }
        }

        #display
    }
}

fn display_impl(binding: &EntityBinding<'_>) -> TokenStream {
    let id = &binding.id;

    quote! {
        #[automatically_derived]
        impl ::core::fmt::Display for #id {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }
    }
}
