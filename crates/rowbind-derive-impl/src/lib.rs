// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Quick Navigation
//!
//! - **Decoder**: [`FromRow`](macro@FromRow) - record from a row of columns
//! - **Encoder**: [`ToRow`](macro@ToRow) - row of columns from a record
//! - **Binder**: [`Entity`](macro@Entity) - table metadata and identifier type
//!
//! # Attribute Quick Reference
//!
//! Only `Entity` takes attributes:
//!
//! ```rust,ignore
//! #[derive(Entity)]
//! #[entity(
//!     table_naming = "snake_case",      // "identity" | case rule | fn path
//!     column_naming = "camelCase",      // same forms as table_naming
//!     id_type = "i64",                  // default: rowbind::BigInt
//!     id_derive(Eq, Ord, Debug, Hash),  // default: Eq, Ord, Debug
//!     id_name = "PersonKey"             // default: {Name}Id
//! )]
//! pub struct Person { /* ... */ }
//! ```
//!
//! # Accepted Shapes
//!
//! | Shape | `FromRow` | `ToRow` | `Entity` |
//! |-------|-----------|---------|----------|
//! | `struct S { a: A, .. }` | ✅ | ✅ | ✅ |
//! | `struct S(A, ..)` | ✅ | ✅ | ❌ missing field names |
//! | `struct S;` / `struct S {}` | ❌ empty constructor | ❌ | ❌ |
//! | `enum` / `union` | ❌ unsupported shape | ❌ | ❌ |

mod entity;
mod error;
mod from_row;
mod parse;
mod to_row;
mod utils;

use proc_macro::TokenStream;

/// Derive a row decoder.
///
/// Generates `impl rowbind::FromRow` that reads one column per field, in
/// declaration order, and builds the record once every column decoded.
///
/// Works with named and tuple structs. Generic field types must implement
/// `FromColumn`.
///
/// # Example
///
/// ```rust,ignore
/// use rowbind::{FromRow, Value, decode_row};
///
/// #[derive(FromRow)]
/// struct Person {
///     name: String,
///     age: i32,
/// }
///
/// let person: Person = decode_row(&[Value::Text("Ada".into()), Value::Int(36)])?;
/// ```
///
/// # Errors
///
/// Compile errors for enums, unions and structs without fields.
#[proc_macro_derive(FromRow)]
pub fn derive_from_row(input: TokenStream) -> TokenStream {
    from_row::derive(input)
}

/// Derive a row encoder.
///
/// Generates `impl rowbind::ToRow` that converts every field to a column
/// value, in declaration order. The inverse of [`FromRow`](macro@FromRow).
///
/// # Example
///
/// ```rust,ignore
/// use rowbind::{ToRow, encode_row};
///
/// #[derive(ToRow)]
/// struct Point(i32, i32);
///
/// assert_eq!(encode_row(&Point(1, 2)).len(), 2);
/// ```
#[proc_macro_derive(ToRow)]
pub fn derive_to_row(input: TokenStream) -> TokenStream {
    to_row::derive(input)
}

/// Derive table metadata and an identifier type.
///
/// For a record `Person` the macro generates:
///
/// - **`PersonId`** - newtype over the identifier scalar, with the requested
///   capabilities, `From<scalar>`, `FromColumn` and `ToColumn`
/// - **`impl Entity for Person`** - `type Id = PersonId`, `table_name()` and
///   `column_names()`
///
/// # Entity Attributes
///
/// | Attribute | Default | Description |
/// |-----------|---------|-------------|
/// | `table_naming` | `"identity"` | Conversion applied to the record name |
/// | `column_naming` | `"identity"` | Conversion applied to each field name |
/// | `id_type` | `rowbind::BigInt` | Identifier scalar |
/// | `id_derive(...)` | `Eq, Ord, Debug` | `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`, `Debug`, `Clone`, `Copy`, `Default`, `Display` |
/// | `id_name` | `{Name}Id` | Identifier type name |
///
/// A naming value is `"identity"`, a case rule (`snake_case`, `camelCase`,
/// `PascalCase`, `SCREAMING_SNAKE_CASE`, `kebab-case`, `lowercase`,
/// `UPPERCASE`, `Title Case`, `Train-Case`, `COBOL-CASE`) or a path to a
/// `fn(&str) -> impl Into<String>`.
///
/// # Example
///
/// ```rust,ignore
/// use rowbind::{Entity, IdOf};
///
/// #[derive(Entity)]
/// #[entity(table_naming = "snake_case", id_type = "i64", id_derive(Eq, Hash, Copy))]
/// pub struct OrderItem {
///     pub sku: String,
///     pub quantity: i32,
/// }
///
/// assert_eq!(OrderItem::table_name(), "order_item");
/// let id: IdOf<OrderItem> = OrderItemId(7);
/// ```
///
/// # Errors
///
/// Compile errors for every shape except a struct with named fields, for
/// unknown attribute keys or values, and for an `id_name` equal to the
/// record name.
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive(input)
}
