// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Input analysis for the rowbind derives.
//!
//! Structural checks are hand-written against `syn`; entity-level options
//! are parsed with [`darling`].
//!
//! # Module Structure
//!
//! - [`shape`] - Shape inspection shared by all derives
//! - [`naming`] - Table/column name conversion
//! - [`capability`] - Identifier capability tags
//! - [`config`] - `#[entity(...)]` configuration
//!
//! # Data Structures
//!
//! ```text
//! TypeShape
//! ├── ident: Ident          (struct name, e.g., "Person")
//! ├── vis: Visibility
//! ├── generics: Generics
//! ├── style: FieldStyle     (Named | Positional)
//! └── fields: Vec<FieldShape>
//!     └── FieldShape
//!         ├── ident: Option<Ident>
//!         ├── ty: Type
//!         └── index: usize
//!
//! EntityConfig
//! ├── table_naming: NamingFunction
//! ├── column_naming: NamingFunction
//! ├── id_capabilities: CapabilitySet
//! ├── id_type: Type
//! └── id_name: Option<Ident>
//! ```

mod capability;
mod config;
mod naming;
mod shape;

pub use capability::{Capability, CapabilitySet};
pub use config::EntityConfig;
pub use naming::{NamingFunction, RenameRule};
pub use shape::{FieldNames, FieldShape, FieldStyle, TypeShape};
