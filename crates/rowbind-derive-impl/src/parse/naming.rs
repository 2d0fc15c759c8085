// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Name conversion for table and column names.
//!
//! A [`NamingFunction`] maps a Rust name (record or field) to a database
//! name. It comes in three forms:
//!
//! | Attribute value | Form | Applied |
//! |-----------------|------|---------|
//! | `"identity"` | [`NamingFunction::Identity`] | at expansion |
//! | `"snake_case"`, `"camelCase"`, ... | [`NamingFunction::Rule`] | at expansion |
//! | `"crate::naming::plural"` | [`NamingFunction::Function`] | in generated code |
//!
//! The function form calls a user-supplied `fn(&str) -> impl Into<String>`
//! from the generated accessor, so any pure string transformation can be
//! plugged in. A rule name always wins over a function of the same name;
//! write `self::lowercase` to call a local function called `lowercase`.

use convert_case::{Case, Casing};
use darling::FromMeta;
use proc_macro2::{Span, TokenStream};
use quote::quote;

use crate::error::{DeriveError, ErrorKind};

/// Built-in case conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// `snake_case`
    Snake,
    /// `camelCase`
    Camel,
    /// `PascalCase`
    Pascal,
    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnake,
    /// `kebab-case`
    Kebab,
    /// `lowercase`
    Lower,
    /// `UPPERCASE`
    Upper,
    /// `Title Case`
    Title,
    /// `Train-Case`
    Train,
    /// `COBOL-CASE`
    Cobol
}

impl RenameRule {
    /// Parse a rule from its attribute spelling. Matching ignores case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "snake_case" => Some(Self::Snake),
            "camelcase" => Some(Self::Camel),
            "pascalcase" => Some(Self::Pascal),
            "screaming_snake_case" => Some(Self::ScreamingSnake),
            "kebab-case" => Some(Self::Kebab),
            "lowercase" => Some(Self::Lower),
            "uppercase" => Some(Self::Upper),
            "title case" => Some(Self::Title),
            "train-case" => Some(Self::Train),
            "cobol-case" => Some(Self::Cobol),
            _ => None
        }
    }

    /// Convert `name` according to this rule.
    #[must_use]
    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::Snake => name.to_case(Case::Snake),
            Self::Camel => name.to_case(Case::Camel),
            Self::Pascal => name.to_case(Case::Pascal),
            Self::ScreamingSnake => name.to_case(Case::UpperSnake),
            Self::Kebab => name.to_case(Case::Kebab),
            Self::Lower => name.to_lowercase(),
            Self::Upper => name.to_uppercase(),
            Self::Title => name.to_case(Case::Title),
            Self::Train => name.to_case(Case::Train),
            Self::Cobol => name.to_case(Case::Cobol)
        }
    }
}

/// A pure `String -> String` name conversion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NamingFunction {
    /// Keep the Rust name unchanged.
    #[default]
    Identity,

    /// Apply a built-in case conversion.
    Rule(RenameRule),

    /// Call a user function from generated code.
    Function(syn::Path)
}

impl NamingFunction {
    /// Convert `name` at expansion time.
    ///
    /// Returns `None` for [`NamingFunction::Function`], whose result is only
    /// known when the generated code runs.
    #[must_use]
    pub fn convert(&self, name: &str) -> Option<String> {
        match self {
            Self::Identity => Some(name.to_string()),
            Self::Rule(rule) => Some(rule.apply(name)),
            Self::Function(_) => None
        }
    }

    /// Expression producing the converted name as a `String`.
    #[must_use]
    pub fn expr(&self, name: &str) -> TokenStream {
        if let Self::Function(path) = self {
            return quote! { ::std::string::String::from(#path(#name)) };
        }
        let converted = self.convert(name).unwrap_or_else(|| name.to_string());
        quote! { ::std::string::String::from(#converted) }
    }
}

impl FromMeta for NamingFunction {
    fn from_string(value: &str) -> darling::Result<Self> {
        if value.eq_ignore_ascii_case("identity") {
            return Ok(Self::Identity);
        }
        if let Some(rule) = RenameRule::from_name(value) {
            return Ok(Self::Rule(rule));
        }
        syn::parse_str::<syn::Path>(value)
            .map(Self::Function)
            .map_err(|err| {
                // darling attaches the span of the attribute value.
                darling::Error::custom(DeriveError::new(
                    ErrorKind::LookupFailure,
                    Span::call_site(),
                    format!("cannot resolve naming function `{value}`: {err}")
                ))
            })
    }
}
