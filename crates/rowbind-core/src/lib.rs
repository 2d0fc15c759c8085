// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for rowbind.
//!
//! This crate provides the contracts that rowbind-generated code type-checks
//! against. It can also be used standalone for manual implementations.
//!
//! # Overview
//!
//! - [`Value`] — Transport-neutral column value
//! - [`FromColumn`] / [`ToColumn`] — Scalar decode/encode of one column
//! - [`RowParser`] — Forward-only cursor over one row
//! - [`FromRow`] / [`ToRow`] — Whole-record decode/encode
//! - [`Entity`] — Table metadata and identifier type of a record
//! - [`prelude`] — Convenient re-exports
//!
//! # Usage
//!
//! Most users should use `rowbind` directly, which re-exports this crate.
//! For manual implementations:
//!
//! ```rust
//! use rowbind_core::prelude::*;
//!
//! struct Point {
//!     x: i32,
//!     y: i32
//! }
//!
//! impl FromRow for Point {
//!     const COLUMNS: usize = 2;
//!
//!     fn from_row(row: &mut RowParser<'_>) -> Result<Self, RowError> {
//!         let x = row.next_column()?;
//!         let y = row.next_column()?;
//!         Ok(Self { x, y })
//!     }
//! }
//!
//! let point: Point = decode_row(&[Value::Int(3), Value::Int(4)]).unwrap();
//! assert_eq!((point.x, point.y), (3, 4));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod column;
mod error;
pub mod prelude;
mod row;
mod value;

pub use column::{FromColumn, ToColumn};
pub use error::{ColumnError, RowError};
/// Re-export of the default identifier scalar for generated code.
pub use num_bigint::BigInt;
pub use row::{FromRow, RowParser, ToRow, decode_row, encode_row};
pub use value::{Value, ValueKind};

/// Table metadata and identifier type of a record.
///
/// Generated by `#[derive(Entity)]`, which also emits a fresh `{Name}Id`
/// newtype and binds it as [`Entity::Id`].
///
/// # Example
///
/// ```rust
/// use rowbind_core::{Entity, IdOf};
///
/// struct Person {
///     name: String,
///     age:  i32
/// }
///
/// struct PersonId(i64);
///
/// impl Entity for Person {
///     type Id = PersonId;
///
///     fn table_name() -> String {
///         "Person".to_string()
///     }
///
///     fn column_names() -> Vec<String> {
///         vec!["name".to_string(), "age".to_string()]
///     }
/// }
///
/// let id: IdOf<Person> = PersonId(1);
/// assert_eq!(Person::table_name(), "Person");
/// assert_eq!(id.0, 1);
/// ```
pub trait Entity {
    /// Distinct identifier type of this record.
    type Id;

    /// Database table name.
    fn table_name() -> String;

    /// Column names in field declaration order.
    fn column_names() -> Vec<String>;
}

/// Identifier type bound to an entity.
pub type IdOf<E> = <E as Entity>::Id;
