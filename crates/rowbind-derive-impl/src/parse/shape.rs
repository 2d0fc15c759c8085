// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Structural inspection of the derive input.
//!
//! [`TypeShape::inspect`] is the single gate every derive passes through. It
//! accepts exactly one shape: a struct with at least one field, either named
//! (`struct S { a: A }`) or positional (`struct S(A)`).
//!
//! # Rejections
//!
//! | Input | Error |
//! |-------|-------|
//! | `enum`, including single-variant enums | `UnsupportedShape` |
//! | `union` | `UnsupportedShape` |
//! | `struct S;`, `struct S {}`, `struct S();` | `EmptyConstructor` |
//! | `struct S(A)` with [`FieldNames::Required`] | `MissingFieldNames` |

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Fields, Generics, Ident, Index, Member, Type, Visibility, ext::IdentExt
};

use crate::error::{DeriveError, ErrorKind};

/// Whether the caller needs field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldNames {
    /// Positional and named structs are both accepted.
    Any,

    /// Only structs with named fields are accepted.
    Required
}

/// How the struct's fields are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStyle {
    /// `struct S { a: A, b: B }`
    Named,

    /// `struct S(A, B)`
    Positional
}

/// One field of the inspected struct.
#[derive(Debug)]
pub struct FieldShape {
    /// Field name, `None` for positional fields.
    pub ident: Option<Ident>,

    /// Declared field type.
    pub ty: Type,

    /// Zero-based declaration index.
    pub index: usize
}

impl FieldShape {
    /// Member used to access this field (`a` or `0`).
    #[must_use]
    pub fn member(&self) -> Member {
        match &self.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(self.index))
        }
    }

    /// Fresh local binding for this field: `field_0`, `field_1`, ...
    #[must_use]
    pub fn binding(&self) -> Ident {
        format_ident!("field_{}", self.index)
    }

    /// Field name without a raw-identifier prefix (`r#type` → `type`).
    #[must_use]
    pub fn name_str(&self) -> Option<String> {
        self.ident.as_ref().map(|ident| ident.unraw().to_string())
    }
}

/// Validated structure of a single-constructor record type.
#[derive(Debug)]
pub struct TypeShape {
    /// Record identifier (e.g., `Person`).
    pub ident: Ident,

    /// Record visibility, propagated to generated items.
    pub vis: Visibility,

    /// Record generics, reused for generated impls.
    pub generics: Generics,

    /// Named or positional fields.
    pub style: FieldStyle,

    /// Fields in declaration order. Never empty.
    pub fields: Vec<FieldShape>
}

impl TypeShape {
    /// Inspect a derive input.
    ///
    /// `derive` is the name of the requesting derive and only appears in
    /// error messages.
    ///
    /// # Errors
    ///
    /// See the [module documentation](self) for the rejection table.
    pub fn inspect(
        input: &DeriveInput,
        derive: &str,
        names: FieldNames
    ) -> Result<Self, DeriveError> {
        let data = match &input.data {
            Data::Struct(data) => data,
            Data::Enum(_) => {
                return Err(DeriveError::new(
                    ErrorKind::UnsupportedShape,
                    input.ident.span(),
                    format!("{derive} can only be derived for structs, not enums")
                ));
            }
            Data::Union(_) => {
                return Err(DeriveError::new(
                    ErrorKind::UnsupportedShape,
                    input.ident.span(),
                    format!("{derive} can only be derived for structs, not unions")
                ));
            }
        };

        let style = match &data.fields {
            Fields::Named(_) => FieldStyle::Named,
            Fields::Unnamed(_) => FieldStyle::Positional,
            Fields::Unit => {
                return Err(empty(input, derive));
            }
        };

        if data.fields.is_empty() {
            return Err(empty(input, derive));
        }

        if names == FieldNames::Required && style == FieldStyle::Positional {
            return Err(DeriveError::new(
                ErrorKind::MissingFieldNames,
                input.ident.span(),
                format!("{derive} requires named fields, found a tuple struct")
            ));
        }

        let fields = data
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| FieldShape {
                ident: field.ident.clone(),
                ty: field.ty.clone(),
                index
            })
            .collect();

        Ok(Self {
            ident: input.ident.clone(),
            vis: input.vis.clone(),
            generics: input.generics.clone(),
            style,
            fields
        })
    }

    /// Number of fields. Always at least one.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    /// Record name without a raw-identifier prefix.
    #[must_use]
    pub fn base_name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Field names in declaration order.
    ///
    /// Empty for positional structs.
    #[must_use]
    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().filter_map(FieldShape::name_str).collect()
    }

    /// Constructor expression applying `Self` to `values` in field order.
    ///
    /// `Self { a: v0, b: v1 }` or `Self(v0, v1)`.
    #[must_use]
    pub fn construct(&self, values: &[TokenStream]) -> TokenStream {
        match self.style {
            FieldStyle::Named => {
                let members = self.fields.iter().map(FieldShape::member);
                quote! { Self { #(#members: #values),* } }
            }
            FieldStyle::Positional => quote! { Self(#(#values),*) }
        }
    }

    /// Pattern binding every field to [`FieldShape::binding`].
    ///
    /// `Self { a: field_0, b: field_1 }` or `Self(field_0, field_1)`.
    #[must_use]
    pub fn destructure(&self) -> TokenStream {
        let bindings = self.fields.iter().map(FieldShape::binding);
        match self.style {
            FieldStyle::Named => {
                let members = self.fields.iter().map(FieldShape::member);
                quote! { Self { #(#members: #bindings),* } }
            }
            FieldStyle::Positional => quote! { Self(#(#bindings),*) }
        }
    }
}

fn empty(input: &DeriveInput, derive: &str) -> DeriveError {
    DeriveError::new(
        ErrorKind::EmptyConstructor,
        input.ident.span(),
        format!("{derive} requires at least one field")
    )
}
