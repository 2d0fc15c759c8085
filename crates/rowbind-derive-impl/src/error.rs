// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Build-time diagnostics.
//!
//! Every derive aborts on the first structural problem it finds and reports
//! it as a compile error pointing at the offending item. No partial output is
//! emitted.
//!
//! # Taxonomy
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | [`ErrorKind::UnsupportedShape`] | The type is an enum or a union |
//! | [`ErrorKind::EmptyConstructor`] | The struct has no fields |
//! | [`ErrorKind::MissingFieldNames`] | Named fields are required but the struct is a tuple struct |
//! | [`ErrorKind::NameCollision`] | A generated item would reuse a name the macro can see |
//! | [`ErrorKind::LookupFailure`] | A type or path given in an attribute cannot be resolved |

use std::fmt;

use proc_macro2::Span;

/// Category of a derive failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The type is not a single-constructor product.
    UnsupportedShape,

    /// The constructor has zero fields.
    EmptyConstructor,

    /// Field names are required but absent.
    MissingFieldNames,

    /// A derived binding name is already taken.
    NameCollision,

    /// An attribute references a type or path that does not parse.
    LookupFailure
}

impl ErrorKind {
    /// Short label used as the message prefix.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::UnsupportedShape => "unsupported shape",
            Self::EmptyConstructor => "empty constructor",
            Self::MissingFieldNames => "missing field names",
            Self::NameCollision => "name collision",
            Self::LookupFailure => "lookup failure"
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A located derive failure.
#[derive(Debug, Clone)]
pub struct DeriveError {
    kind:    ErrorKind,
    message: String,
    span:    Span
}

impl DeriveError {
    /// Create an error of `kind` pointing at `span`.
    pub fn new(kind: ErrorKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            span
        }
    }

    /// Get the error category.
    #[must_use]
    #[cfg_attr(not(test), allow(dead_code))]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the message without the category prefix.
    #[must_use]
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for DeriveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for DeriveError {}

impl From<DeriveError> for syn::Error {
    fn from(err: DeriveError) -> Self {
        syn::Error::new(err.span, err.to_string())
    }
}

impl From<DeriveError> for darling::Error {
    fn from(err: DeriveError) -> Self {
        darling::Error::from(syn::Error::from(err))
    }
}
