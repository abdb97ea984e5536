// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[column(...)]` and `#[join_column(...)]` parsing.

use syn::{Attribute, LitBool, LitStr, Meta};

/// Column annotation on a field.
///
/// # Example
///
/// ```rust,ignore
/// #[column(name = "full_name")]
/// pub name: String,
///
/// #[column(insertable = false, updatable = false)]
/// pub version: i64,
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// Column name override. Empty means none.
    pub name: String,

    /// Included in INSERT statements.
    pub insertable: bool,

    /// Included in UPDATE statements.
    pub updatable: bool
}

impl Default for ColumnDef {
    fn default() -> Self {
        Self {
            name:       String::new(),
            insertable: true,
            updatable:  true
        }
    }
}

impl ColumnDef {
    /// Parse from `#[column]` or `#[column(...)]`.
    ///
    /// # Recognized Options
    ///
    /// - `name = "col"`
    /// - `insertable = false`
    /// - `updatable = false`
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys or malformed values.
    pub fn from_attr(attr: &Attribute) -> syn::Result<Self> {
        let mut column = Self::default();

        if let Meta::List(list) = &attr.meta {
            list.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    column.name = meta.value()?.parse::<LitStr>()?.value();
                } else if meta.path.is_ident("insertable") {
                    column.insertable = meta.value()?.parse::<LitBool>()?.value;
                } else if meta.path.is_ident("updatable") {
                    column.updatable = meta.value()?.parse::<LitBool>()?.value;
                } else {
                    return Err(meta.error("expected `name`, `insertable` or `updatable`"));
                }
                Ok(())
            })?;
        }

        Ok(column)
    }
}

/// Parse the foreign-key column name from `#[join_column(name = "fk")]`.
///
/// # Errors
///
/// Returns an error when `name` is missing or malformed.
pub fn parse_join_column(attr: &Attribute) -> syn::Result<String> {
    let mut name = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("name") {
            name = Some(meta.value()?.parse::<LitStr>()?.value());
            Ok(())
        } else {
            Err(meta.error("expected `name`"))
        }
    })?;
    name.ok_or_else(|| syn::Error::new_spanned(attr, "join_column requires `name = \"...\"`"))
}
