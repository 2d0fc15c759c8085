// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity derive macro implementation.
//!
//! `#[derive(Entity)]` binds a record to a table: it names the table and its
//! columns and introduces a dedicated identifier type. Parsing is delegated
//! to [`crate::parse`], generation to the submodules below.
//!
//! # Architecture
//!
//! ```text
//! entity.rs (orchestrator)
//! │
//! ├── parse/       → TypeShape (Required names) + EntityConfig
//! │
//! ├── id.rs        → {Name}Id newtype and its conversions
//! └── metadata.rs  → impl Entity (table_name, column_names, Id)
//! ```
//!
//! # Generated Code
//!
//! For an entity like:
//!
//! ```rust,ignore
//! #[derive(Entity)]
//! #[entity(table_naming = "snake_case")]
//! pub struct OrderItem {
//!     pub sku: String,
//!     pub quantity: i32,
//! }
//! ```
//!
//! The macro generates:
//!
//! | Item | Purpose |
//! |------|---------|
//! | `pub struct OrderItemId(pub BigInt)` | Identifier newtype |
//! | `impl From<BigInt> for OrderItemId` | Wrapping a raw scalar |
//! | `impl FromColumn / ToColumn for OrderItemId` | Binding the identifier as a column |
//! | `impl Entity for OrderItem` | `"order_item"`, `["sku", "quantity"]` |

mod id;
mod metadata;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Ident, parse_macro_input};

use crate::parse::{EntityConfig, FieldNames, TypeShape};

/// Main entry point for the Entity derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

/// Expand a derive input into the identifier type and `Entity` impl.
///
/// # Errors
///
/// - Shape rejections from [`TypeShape::inspect`]
/// - Attribute errors from [`EntityConfig::from_derive_input`]
/// - `NameCollision` from [`EntityConfig::id_ident`]
pub fn expand(input: &DeriveInput) -> darling::Result<TokenStream2> {
    let shape = TypeShape::inspect(input, "Entity", FieldNames::Required)?;
    let config = EntityConfig::from_derive_input(input)?;
    let id_ident = config.id_ident(&shape)?;

    Ok(generate(&EntityBinding {
        shape:  &shape,
        config: &config,
        id:     id_ident
    }))
}

/// Everything the generators need for one entity.
struct EntityBinding<'a> {
    shape:  &'a TypeShape,
    config: &'a EntityConfig,
    id:     Ident
}

fn generate(binding: &EntityBinding<'_>) -> TokenStream2 {
    let id = id::generate(binding);
    let metadata = metadata::generate(binding);

    quote! {
        #id
        #metadata
    }
}
