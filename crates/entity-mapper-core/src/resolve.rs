// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Metadata resolution.
//!
//! Answers the questions SQL generation and materialization ask about an
//! entity: which member is the identity, what the table and column names
//! are, and which members are transient, static or relations.
//!
//! # Naming
//!
//! | Question | Override | Fallback |
//! |----------|----------|----------|
//! | Table | non-empty table override | simple type name |
//! | Column | non-empty `Column.name` | field name, or bean property name |
//! | Foreign key | join column | column name + configured suffix |
//!
//! Bean property names follow the getter convention: `get_total` names the
//! property `total`, and `is_active` names `active` when the getter returns a
//! `bool`.

use crate::{
    accessor::{Accessor, FieldAccessor, PropertyAccessor},
    error::MetadataError,
    meta::{Entity, EntityType, Mapping, MemberKind, MemberMeta},
    value::ValueKind
};

impl MemberMeta {
    /// Transient annotation or transient modifier.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        self.transient || self.modifiers.is_transient
    }

    #[must_use]
    pub const fn is_static(&self) -> bool {
        self.modifiers.is_static
    }

    /// Any relation annotation.
    #[must_use]
    pub const fn is_relation(&self) -> bool {
        self.relation.is_some()
    }

    #[must_use]
    pub fn is_to_one_relation(&self) -> bool {
        self.relation.is_some_and(|r| r.is_to_one())
    }

    #[must_use]
    pub const fn is_identity(&self) -> bool {
        self.id
    }

    /// Declared as a list or map.
    #[must_use]
    pub const fn is_multi_valued(&self) -> bool {
        self.value_type.kind.is_multi_valued()
    }
}

/// Property name of a getter following the bean convention.
///
/// `get_x` yields `x` for any type; `is_x` yields `x` only for `bool`
/// getters. Fields and setters have no property name.
#[must_use]
pub fn bean_property(meta: &MemberMeta) -> Option<String> {
    if meta.kind != MemberKind::Getter {
        return None;
    }
    let is_bool = meta.value_type.kind == ValueKind::Bool && !meta.value_type.nullable;
    let rest = meta
        .name
        .strip_prefix("get_")
        .or_else(|| meta.name.strip_prefix("is_").filter(|_| is_bool))?;
    (!rest.is_empty()).then(|| rest.to_owned())
}

impl<E> EntityType<E> {
    /// Find the member carrying the identity marker.
    ///
    /// Getters are scanned before fields. A getter identity makes the whole
    /// entity method-based.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::MissingIdentity`] if no getter or eligible
    /// field is marked.
    pub fn identity_accessor(&self) -> Result<Accessor<E>, MetadataError> {
        if let Some(getter) = self.getters().find(|g| g.meta.is_identity()) {
            return Ok(Accessor::Property(PropertyAccessor::new(
                self,
                getter.clone()
            )));
        }
        self.fields()
            .filter(|f| !f.meta.inherited || f.meta.declared_in.mapping.is_persistable())
            .find(|f| f.meta.is_identity())
            .map(|f| Accessor::Field(FieldAccessor::new(f.clone())))
            .ok_or_else(|| MetadataError::MissingIdentity {
                entity: self.name().to_owned()
            })
    }

    /// Table override if present and non-empty, else the simple type name.
    #[must_use]
    pub fn table_name(&self) -> String {
        self.table_override()
            .filter(|t| !t.is_empty())
            .unwrap_or(self.name())
            .to_owned()
    }

    /// Entity or mapped superclass.
    #[must_use]
    pub const fn is_persistable(&self) -> bool {
        self.mapping().is_persistable()
    }

    /// Declared as an entity.
    #[must_use]
    pub fn is_entity(&self) -> bool {
        self.mapping() == Mapping::Entity
    }

    /// # Errors
    ///
    /// Returns [`MetadataError::NotAnEntity`] unless declared as an entity.
    pub fn ensure_entity(&self) -> Result<(), MetadataError> {
        if self.is_entity() {
            Ok(())
        } else {
            Err(MetadataError::NotAnEntity {
                entity: self.name().to_owned()
            })
        }
    }
}

impl<E> Accessor<E> {
    /// Column override if present and non-empty, else the natural name.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::NotAGetter`] for a method-based accessor whose
    /// getter does not follow the naming convention.
    pub fn column_name(&self) -> Result<String, MetadataError> {
        if let Some(name) = self.meta().column.and_then(|c| c.name_override()) {
            return Ok(name.to_owned());
        }
        match self {
            Self::Field(_) => Ok(self.meta().name.to_owned()),
            Self::Property(p) => {
                p.property()
                    .map(str::to_owned)
                    .ok_or_else(|| MetadataError::NotAGetter {
                        method: p.getter().meta.name.to_owned()
                    })
            }
        }
    }

    /// Column holding the foreign key of a to-one relation.
    ///
    /// # Errors
    ///
    /// Same as [`column_name`](Self::column_name).
    pub fn foreign_key_column(&self, suffix: &str) -> Result<String, MetadataError> {
        match self.meta().join_column.filter(|c| !c.is_empty()) {
            Some(column) => Ok(column.to_owned()),
            None => Ok(format!("{}{suffix}", self.column_name()?))
        }
    }

    #[must_use]
    pub const fn is_identity(&self) -> bool {
        self.meta().is_identity()
    }

    #[must_use]
    pub const fn is_transient(&self) -> bool {
        self.meta().is_transient()
    }

    #[must_use]
    pub const fn is_static(&self) -> bool {
        self.meta().is_static()
    }

    #[must_use]
    pub const fn is_relation(&self) -> bool {
        self.meta().is_relation()
    }

    #[must_use]
    pub fn is_to_one_relation(&self) -> bool {
        self.meta().is_to_one_relation()
    }

    #[must_use]
    pub const fn is_multi_valued(&self) -> bool {
        self.meta().is_multi_valued()
    }

    /// Declaring type is an entity or mapped superclass.
    #[must_use]
    pub const fn is_declared_persistable(&self) -> bool {
        self.meta().declared_in.mapping.is_persistable()
    }
}

/// Identity accessor of `E`.
///
/// # Errors
///
/// See [`EntityType::identity_accessor`].
pub fn resolve_identity_accessor<E: Entity>() -> Result<Accessor<E>, MetadataError> {
    EntityType::<E>::of().identity_accessor()
}

/// Table name of `E`.
#[must_use]
pub fn resolve_table_name<E: Entity>() -> String {
    EntityType::<E>::of().table_name()
}

/// Column name of `accessor`.
///
/// # Errors
///
/// See [`Accessor::column_name`].
pub fn resolve_column_name<E>(accessor: &Accessor<E>) -> Result<String, MetadataError> {
    accessor.column_name()
}
