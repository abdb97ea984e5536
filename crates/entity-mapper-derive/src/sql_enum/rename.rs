// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `rename_all` case rules.

use convert_case::{Case, Casing};
use darling::FromMeta;

/// Case applied to variant identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    Lower,
    Upper,
    Snake,
    ScreamingSnake,
    Kebab,
    Camel,
    Pascal
}

impl RenameRule {
    /// Constant name for a variant identifier.
    pub fn apply(self, ident: &str) -> String {
        match self {
            Self::Lower => ident.to_lowercase(),
            Self::Upper => ident.to_uppercase(),
            Self::Snake => ident.to_case(Case::Snake),
            Self::ScreamingSnake => ident.to_case(Case::Snake).to_uppercase(),
            Self::Kebab => ident.to_case(Case::Kebab),
            Self::Camel => ident.to_case(Case::Camel),
            Self::Pascal => ident.to_case(Case::Pascal)
        }
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            "snake_case" => Ok(Self::Snake),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "kebab-case" => Ok(Self::Kebab),
            "camelCase" => Ok(Self::Camel),
            "PascalCase" => Ok(Self::Pascal),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}
