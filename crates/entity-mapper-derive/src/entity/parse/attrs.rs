// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Default | Description |
//! |-----------|---------|-------------|
//! | `table` | struct name | Table name override |
//! | `mapped_superclass` | `false` | Persistable supertype |
//! | `unmapped` | `false` | Plain supertype |
//! | `access` | `"field"` | Member declaration style |

use darling::FromDeriveInput;
use syn::{Generics, Ident};

use super::access::AccessStyle;

/// Attributes parsed from `#[entity(...)]`.
///
/// Internal to parsing; the rest of the macro works with
/// [`EntityDef`](super::EntityDef).
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), supports(struct_named))]
pub struct EntityAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct generics, rejected by the constructor.
    pub generics: Generics,

    /// Table name override.
    #[darling(default)]
    pub table: Option<String>,

    /// Persistable supertype that is not itself an entity.
    #[darling(default)]
    pub mapped_superclass: bool,

    /// Plain supertype.
    #[darling(default)]
    pub unmapped: bool,

    /// Member declaration style.
    #[darling(default)]
    pub access: AccessStyle
}
