// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity binder configuration.
//!
//! [`EntityConfig`] is the explicit configuration value handed to the entity
//! binder. It is parsed from `#[entity(...)]`; every key is optional and
//! falls back to [`EntityConfig::default`].
//!
//! # Supported Attributes
//!
//! | Attribute | Default | Description |
//! |-----------|---------|-------------|
//! | `table_naming` | `"identity"` | Conversion applied to the record name |
//! | `column_naming` | `"identity"` | Conversion applied to each field name |
//! | `id_type` | `::rowbind::BigInt` | Scalar wrapped by the identifier |
//! | `id_derive(...)` | `Eq, Ord, Debug` | Identifier capabilities |
//! | `id_name` | `{Name}Id` | Identifier type name |
//!
//! # Example
//!
//! ```rust,ignore
//! #[derive(Entity)]
//! #[entity(
//!     table_naming = "snake_case",
//!     column_naming = "camelCase",
//!     id_type = "i64",
//!     id_derive(Eq, Ord, Hash, Debug, Clone, Copy)
//! )]
//! pub struct OrderItem { /* ... */ }
//! ```

use darling::{FromDeriveInput, util::SpannedValue};
use proc_macro2::Span;
use quote::format_ident;
use syn::{DeriveInput, Ident, Type};

use super::{CapabilitySet, NamingFunction, TypeShape};
use crate::error::{DeriveError, ErrorKind};

/// Raw `#[entity(...)]` attributes as parsed by darling.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity))]
struct EntityAttrs {
    #[darling(default)]
    table_naming: Option<NamingFunction>,

    #[darling(default)]
    column_naming: Option<NamingFunction>,

    #[darling(default)]
    id_type: Option<SpannedValue<String>>,

    #[darling(default)]
    id_derive: Option<CapabilitySet>,

    #[darling(default)]
    id_name: Option<Ident>
}

/// Configuration of one entity binding.
#[derive(Debug, Clone)]
pub struct EntityConfig {
    /// Conversion from record name to table name.
    pub table_naming: NamingFunction,

    /// Conversion from field name to column name.
    pub column_naming: NamingFunction,

    /// Capabilities of the generated identifier type.
    pub id_capabilities: CapabilitySet,

    /// Scalar type wrapped by the identifier.
    pub id_type: Type,

    /// Explicit identifier name, overriding `{Name}Id`.
    pub id_name: Option<Ident>
}

impl Default for EntityConfig {
    /// Identity naming, `{Eq, Ord, Debug}`, arbitrary-precision integer.
    fn default() -> Self {
        Self {
            table_naming:    NamingFunction::Identity,
            column_naming:   NamingFunction::Identity,
            id_capabilities: CapabilitySet::default(),
            id_type:         default_id_type(),
            id_name:         None
        }
    }
}

/// Default identifier scalar: an arbitrary-precision integer.
pub fn default_id_type() -> Type {
    syn::parse_quote!(::rowbind::BigInt)
}

impl EntityConfig {
    /// Parse configuration from `#[entity(...)]`, filling in defaults.
    ///
    /// # Errors
    ///
    /// - Unknown keys, naming rules or capability tags (accumulated)
    /// - `id_type` that is not a valid type, or a naming value that is not a
    ///   path (`LookupFailure`)
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = EntityAttrs::from_derive_input(input)?;
        let defaults = Self::default();

        let id_type = match attrs.id_type {
            Some(raw) => parse_id_type(raw.as_str(), raw.span())?,
            None => defaults.id_type
        };

        Ok(Self {
            table_naming: attrs.table_naming.unwrap_or(defaults.table_naming),
            column_naming: attrs.column_naming.unwrap_or(defaults.column_naming),
            id_capabilities: attrs.id_derive.unwrap_or(defaults.id_capabilities),
            id_type,
            id_name: attrs.id_name
        })
    }

    /// Identifier type name for `shape`.
    ///
    /// # Errors
    ///
    /// `NameCollision` when the name equals the record's own name.
    pub fn id_ident(&self, shape: &TypeShape) -> Result<Ident, DeriveError> {
        let ident = match &self.id_name {
            Some(name) => name.clone(),
            None => format_ident!("{}Id", shape.base_name())
        };

        if ident == shape.base_name() {
            return Err(DeriveError::new(
                ErrorKind::NameCollision,
                shape.ident.span(),
                format!("identifier type `{ident}` would shadow the record itself")
            ));
        }

        Ok(ident)
    }
}

fn parse_id_type(raw: &str, span: Span) -> Result<Type, DeriveError> {
    syn::parse_str::<Type>(raw).map_err(|err| {
        DeriveError::new(
            ErrorKind::LookupFailure,
            span,
            format!("cannot resolve id_type `{raw}`: {err}")
        )
    })
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::*;
    use crate::parse::{Capability, FieldNames, RenameRule};

    fn config(input: &DeriveInput) -> darling::Result<EntityConfig> {
        EntityConfig::from_derive_input(input)
    }

    fn shape(input: &DeriveInput) -> TypeShape {
        TypeShape::inspect(input, "Entity", FieldNames::Required).unwrap()
    }

    #[test]
    fn defaults_without_attribute() {
        let input: DeriveInput = syn::parse_quote! {
            pub struct Person { name: String, age: i32 }
        };
        let config = config(&input).unwrap();

        assert_eq!(config.table_naming, NamingFunction::Identity);
        assert_eq!(config.column_naming, NamingFunction::Identity);
        assert_eq!(config.id_capabilities, CapabilitySet::default());
        let id_type = &config.id_type;
        assert_eq!(quote!(#id_type).to_string(), ":: rowbind :: BigInt");
        assert_eq!(config.id_ident(&shape(&input)).unwrap(), "PersonId");
    }

    #[test]
    fn full_attribute() {
        let input: DeriveInput = syn::parse_quote! {
            #[entity(
                table_naming = "snake_case",
                column_naming = "camelCase",
                id_type = "i64",
                id_derive(Eq, Hash, Copy),
                id_name = "PersonKey"
            )]
            pub struct Person { name: String }
        };
        let config = config(&input).unwrap();

        assert_eq!(config.table_naming, NamingFunction::Rule(RenameRule::Snake));
        assert_eq!(config.column_naming, NamingFunction::Rule(RenameRule::Camel));
        assert!(config.id_capabilities.contains(Capability::Hash));
        assert!(!config.id_capabilities.contains(Capability::Ord));
        let id_type = &config.id_type;
        assert_eq!(quote!(#id_type).to_string(), "i64");
        assert_eq!(config.id_ident(&shape(&input)).unwrap(), "PersonKey");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let input: DeriveInput = syn::parse_quote! {
            #[entity(tablename = "people")]
            pub struct Person { name: String }
        };
        assert!(config(&input).is_err());
    }

    #[test]
    fn bad_id_type_is_lookup_failure() {
        let err = parse_id_type("Vec<", Span::call_site()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LookupFailure);

        let input: DeriveInput = syn::parse_quote! {
            #[entity(id_type = "not a type")]
            pub struct Person { name: String }
        };
        let err = config(&input).unwrap_err();
        assert!(err.to_string().contains("lookup failure"));
    }

    #[test]
    fn bad_naming_path_is_lookup_failure() {
        let input: DeriveInput = syn::parse_quote! {
            #[entity(column_naming = "crate::::broken")]
            pub struct Person { name: String }
        };
        let err = config(&input).unwrap_err();
        assert!(err.to_string().contains("lookup failure"));
    }

    #[test]
    fn id_name_equal_to_record_collides() {
        let input: DeriveInput = syn::parse_quote! {
            #[entity(id_name = "Person")]
            pub struct Person { name: String }
        };
        let config = config(&input).unwrap();
        let err = config.id_ident(&shape(&input)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NameCollision);
    }

    #[test]
    fn raw_record_name_derives_plain_id() {
        let input: DeriveInput = syn::parse_quote! {
            pub struct r#Match { score: i32 }
        };
        let config = config(&input).unwrap();
        assert_eq!(config.id_ident(&shape(&input)).unwrap(), "MatchId");
    }
}
