// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parsing and validation of `#[derive(Entity)]` input.
//!
//! [`EntityDef`] is the single structure handed to code generation. It owns
//! its data and is built once per expansion by
//! [`EntityDef::from_derive_input`].
//!
//! # Validation
//!
//! | Check | Span |
//! |-------|------|
//! | Named struct without generics | struct ident |
//! | `mapped_superclass` and `unmapped` not combined | struct ident |
//! | At most one `#[id]` | second `#[id]` field |
//! | Entity has an `#[id]` or an `#[inherit]` field | struct ident |
//! | To-one relation on an `Option<T>` field | field |
//! | `#[join_column]` only on a to-one relation | field |
//! | `#[inherit]` not combined with other attributes | field |

mod access;
mod attrs;
mod field;

pub use access::AccessStyle;
use attrs::EntityAttrs;
use darling::FromDeriveInput;
pub use field::{FieldDef, Relation};
use syn::{DeriveInput, Ident};

/// How the struct takes part in persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingDef {
    Entity,
    MappedSuperclass,
    Unmapped
}

/// Complete parsed entity definition.
#[derive(Debug)]
pub struct EntityDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Non-empty table name override.
    pub table: Option<String>,

    pub mapping: MappingDef,

    pub access: AccessStyle,

    /// Fields in declaration order.
    pub fields: Vec<FieldDef>
}

impl EntityDef {
    /// Parse entity definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// Returns every violated rule listed in the module docs.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = EntityAttrs::from_derive_input(input)?;

        if !attrs.generics.params.is_empty() {
            return Err(darling::Error::custom("Entity cannot be derived for generic structs")
                .with_span(&attrs.generics));
        }

        let mapping = match (attrs.mapped_superclass, attrs.unmapped) {
            (true, true) => {
                return Err(darling::Error::custom(
                    "`mapped_superclass` and `unmapped` are mutually exclusive"
                )
                .with_span(&input.ident));
            }
            (true, false) => MappingDef::MappedSuperclass,
            (false, true) => MappingDef::Unmapped,
            (false, false) => MappingDef::Entity
        };

        let fields: Vec<FieldDef> = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(FieldDef::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("Entity requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Entity can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let mut errors = darling::Error::accumulator();
        for field in &fields {
            validate_field(field, &mut errors);
        }

        let mut ids = fields.iter().filter(|f| f.id);
        ids.next();
        for extra in ids {
            errors.push(
                darling::Error::custom("Entity must have at most one field with #[id] attribute")
                    .with_span(&extra.ident)
            );
        }

        let has_id = fields.iter().any(|f| f.id);
        let inherits = fields.iter().any(|f| f.inherit);
        if mapping == MappingDef::Entity && !has_id && !inherits {
            errors.push(
                darling::Error::custom("Entity must have exactly one field with #[id] attribute")
                    .with_span(&input.ident)
            );
        }

        errors.finish()?;

        Ok(Self {
            ident: attrs.ident,
            table: attrs.table.filter(|t| !t.is_empty()),
            mapping,
            access: attrs.access,
            fields
        })
    }
}

fn validate_field(field: &FieldDef, errors: &mut darling::error::Accumulator) {
    if field.to_one().is_some() && field.option_inner().is_none() {
        errors.push(
            darling::Error::custom("to-one relations must be declared as `Option<T>`")
                .with_span(&field.ty)
        );
    }
    if field.join_column.is_some() && field.to_one().is_none() {
        errors.push(
            darling::Error::custom("#[join_column] requires #[many_to_one] or #[one_to_one]")
                .with_span(&field.ident)
        );
    }
    if field.inherit
        && (field.id || field.column.is_some() || field.transient || field.relation.is_some())
    {
        errors.push(
            darling::Error::custom("#[inherit] cannot be combined with other field attributes")
                .with_span(&field.ident)
        );
    }
}
