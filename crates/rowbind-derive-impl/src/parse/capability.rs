// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Capability tags for generated identifier types.
//!
//! `#[entity(id_derive(Eq, Ord, Debug))]` requests standard capabilities for
//! the `{Name}Id` newtype. Each tag expands to the derives it needs:
//!
//! | Tag | Expands to |
//! |-----|------------|
//! | `PartialEq` | `PartialEq` |
//! | `Eq` | `PartialEq, Eq` |
//! | `PartialOrd` | `PartialEq, PartialOrd` |
//! | `Ord` | `PartialEq, Eq, PartialOrd, Ord` |
//! | `Hash` | `Hash` |
//! | `Debug` | `Debug` |
//! | `Clone` | `Clone` |
//! | `Copy` | `Clone, Copy` |
//! | `Default` | `Default` |
//! | `Display` | hand-written `Display` delegating to the scalar |
//!
//! Without the attribute the set is `{Eq, Ord, Debug}`. Floating point
//! scalars only support the partial tags.

use std::collections::BTreeSet;

use darling::{FromMeta, ast::NestedMeta};
use proc_macro2::TokenStream;
use quote::quote;
use syn::Meta;

/// A requested identifier capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Partial equality.
    PartialEq,
    /// Equality.
    Eq,
    /// Partial ordering.
    PartialOrd,
    /// Total ordering.
    Ord,
    /// Hashing.
    Hash,
    /// Debug printing.
    Debug,
    /// Cloning.
    Clone,
    /// Bitwise copy.
    Copy,
    /// Default value.
    Default,
    /// User-facing printing.
    Display
}

impl Capability {
    /// Parse a capability from its tag name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "PartialEq" => Some(Self::PartialEq),
            "Eq" => Some(Self::Eq),
            "PartialOrd" => Some(Self::PartialOrd),
            "Ord" => Some(Self::Ord),
            "Hash" => Some(Self::Hash),
            "Debug" => Some(Self::Debug),
            "Clone" => Some(Self::Clone),
            "Copy" => Some(Self::Copy),
            "Default" => Some(Self::Default),
            "Display" => Some(Self::Display),
            _ => None
        }
    }

    fn derives(self) -> &'static [DeriveTrait] {
        match self {
            Self::PartialEq => &[DeriveTrait::PartialEq],
            Self::Eq => &[DeriveTrait::PartialEq, DeriveTrait::Eq],
            Self::PartialOrd => &[DeriveTrait::PartialEq, DeriveTrait::PartialOrd],
            Self::Ord => &[
                DeriveTrait::PartialEq,
                DeriveTrait::Eq,
                DeriveTrait::PartialOrd,
                DeriveTrait::Ord
            ],
            Self::Hash => &[DeriveTrait::Hash],
            Self::Debug => &[DeriveTrait::Debug],
            Self::Clone => &[DeriveTrait::Clone],
            Self::Copy => &[DeriveTrait::Clone, DeriveTrait::Copy],
            Self::Default => &[DeriveTrait::Default],
            Self::Display => &[]
        }
    }
}

/// Standard derivable traits, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum DeriveTrait {
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash
}

impl DeriveTrait {
    fn path(self) -> TokenStream {
        match self {
            Self::Debug => quote!(::core::fmt::Debug),
            Self::Clone => quote!(::core::clone::Clone),
            Self::Copy => quote!(::core::marker::Copy),
            Self::Default => quote!(::core::default::Default),
            Self::PartialEq => quote!(::core::cmp::PartialEq),
            Self::Eq => quote!(::core::cmp::Eq),
            Self::PartialOrd => quote!(::core::cmp::PartialOrd),
            Self::Ord => quote!(::core::cmp::Ord),
            Self::Hash => quote!(::core::hash::Hash)
        }
    }
}

/// Set of capabilities requested for an identifier type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl Default for CapabilitySet {
    /// Equality, ordering and debug printing.
    fn default() -> Self {
        Self::from_iter([Capability::Eq, Capability::Ord, Capability::Debug])
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl CapabilitySet {
    /// Check if a capability was requested.
    #[must_use]
    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    /// Derive paths implied by the set, deduplicated and in stable order.
    #[must_use]
    pub fn derive_paths(&self) -> Vec<TokenStream> {
        self.0
            .iter()
            .flat_map(|capability| capability.derives().iter().copied())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(DeriveTrait::path)
            .collect()
    }
}

impl FromMeta for CapabilitySet {
    fn from_list(items: &[NestedMeta]) -> darling::Result<Self> {
        let mut errors = darling::Error::accumulator();
        let mut set = BTreeSet::new();

        for item in items {
            let NestedMeta::Meta(Meta::Path(path)) = item else {
                errors.push(darling::Error::unexpected_type("non-word").with_span(item));
                continue;
            };
            let name = path
                .get_ident()
                .map(ToString::to_string)
                .unwrap_or_default();
            match Capability::from_name(&name) {
                Some(capability) => {
                    set.insert(capability);
                }
                None => {
                    let label = quote!(#path).to_string().replace(' ', "");
                    errors.push(darling::Error::unknown_value(&label).with_span(path));
                }
            }
        }

        errors.finish_with(Self(set))
    }
}
