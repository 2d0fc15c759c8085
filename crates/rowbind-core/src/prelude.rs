// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rowbind_core::prelude::*;
//! ```

pub use crate::{
    ColumnError, Entity, FromColumn, FromRow, IdOf, RowError, RowParser, ToColumn, ToRow, Value,
    decode_row, encode_row
};
