// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column values exchanged with the database layer.
//!
//! [`Value`] is the transport-neutral representation of a single column. The
//! database driver produces a `&[Value]` per row and consumes a `Vec<Value>`
//! per bound parameter list; everything in between is typed Rust.
//!
//! With the `serde` feature both [`Value`] and [`ValueKind`] implement
//! `Serialize`/`Deserialize`, so decoded rows can be cached or shipped as-is.

use std::fmt;

use num_bigint::BigInt;

/// A single column value.
///
/// # Example
///
/// ```rust
/// use rowbind_core::{Value, ValueKind};
///
/// let v = Value::Text("alice".into());
/// assert_eq!(v.kind(), ValueKind::Text);
/// assert!(!v.is_null());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// SQL `NULL`.
    Null,

    /// Boolean column.
    Bool(bool),

    /// Any integer column that fits into 64 bits.
    Int(i64),

    /// Floating point column.
    Float(f64),

    /// Text column.
    Text(String),

    /// Binary column.
    Bytes(Vec<u8>),

    /// Arbitrary-precision integer (`NUMERIC` with scale 0).
    BigInt(BigInt)
}

impl Value {
    /// Get the kind tag of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::BigInt(_) => ValueKind::BigInt
        }
    }

    /// Check if this value is `NULL`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Kind of a [`Value`], used in decode diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// `NULL`.
    Null,
    /// Boolean.
    Bool,
    /// 64-bit integer.
    Int,
    /// Floating point.
    Float,
    /// Text.
    Text,
    /// Binary.
    Bytes,
    /// Arbitrary-precision integer.
    BigInt
}

impl ValueKind {
    /// Human-readable name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::Bytes => "bytes",
            Self::BigInt => "bigint"
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
