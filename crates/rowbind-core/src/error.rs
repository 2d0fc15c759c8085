// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Decode errors.
//!
//! [`ColumnError`] is produced by a single [`FromColumn`](crate::FromColumn)
//! conversion and knows nothing about its position. [`RowParser`] wraps it
//! into [`RowError::Column`] together with the column index.
//!
//! [`RowParser`]: crate::RowParser

use crate::ValueKind;

/// Failure converting one column value into a Rust type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnError {
    /// The column holds a value of the wrong kind.
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        /// Rust type the column was decoded into.
        expected: &'static str,
        /// Kind actually stored in the column.
        found:    ValueKind
    },

    /// The value does not fit into the target type.
    #[error("value out of range for {target}")]
    OutOfRange {
        /// Rust type the column was decoded into.
        target: &'static str
    },

    /// `NULL` decoded into a non-`Option` type.
    #[error("unexpected NULL")]
    UnexpectedNull
}

/// Failure decoding a whole row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RowError {
    /// A decoder asked for more columns than the row has.
    #[error("row exhausted: no column at position {position}")]
    Exhausted {
        /// Zero-based index of the missing column.
        position: usize
    },

    /// The row width does not match the decoder's column count.
    #[error("column count mismatch: expected {expected}, found {found}")]
    ColumnCount {
        /// Columns the decoder consumes.
        expected: usize,
        /// Columns present in the row.
        found:    usize
    },

    /// A single column failed to convert.
    #[error("column {position}: {source}")]
    Column {
        /// Zero-based column index.
        position: usize,
        /// Underlying conversion failure.
        source:   ColumnError
    }
}

impl RowError {
    /// Get the column position this error refers to, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Exhausted {
                position
            }
            | Self::Column {
                position, ..
            } => Some(*position),
            Self::ColumnCount {
                ..
            } => None
        }
    }
}
