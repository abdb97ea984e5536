// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Persistable property accessors.
//!
//! An entity is accessed either through its fields or through bean-style
//! getter/setter pairs. The choice is made once per entity: if the identity
//! marker sits on a getter, every property is method-based, otherwise every
//! property is field-based. The two styles are never mixed.
//!
//! | Identity on | Accessors enumerated |
//! |-------------|----------------------|
//! | getter | `get_x`/`is_x` getters paired with `set_x` setters |
//! | field | own fields plus fields of persistable supertypes |
//!
//! Transient and static members are skipped in both modes.

use crate::{
    error::{AccessError, MaterializationError, MetadataError},
    materialize::RelationContext,
    meta::{EntityType, Member, MemberMeta},
    resolve::bean_property,
    value::{Value, ValueType}
};

/// Whether an entity is accessed through fields or methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Field,
    Property
}

/// Field-based accessor.
pub struct FieldAccessor<E> {
    field: Member<E>
}

/// Method-based accessor: a getter and its optional setter.
pub struct PropertyAccessor<E> {
    property: Option<String>,
    getter:   Member<E>,
    setter:   Option<Member<E>>
}

/// Read/write handle on one persistable property.
pub enum Accessor<E> {
    Field(FieldAccessor<E>),
    Property(PropertyAccessor<E>)
}

impl<E> FieldAccessor<E> {
    pub(crate) const fn new(field: Member<E>) -> Self {
        Self {
            field
        }
    }
}

impl<E> PropertyAccessor<E> {
    /// Pair `getter` with the `set_<property>` setter declared on `ty`.
    pub(crate) fn new(ty: &EntityType<E>, getter: Member<E>) -> Self {
        let property = bean_property(&getter.meta);
        let setter = property
            .as_deref()
            .and_then(|p| ty.setter(&format!("set_{p}")))
            .cloned();
        Self {
            property,
            getter,
            setter
        }
    }

    /// Bean property name, `None` if the getter breaks the convention.
    #[must_use]
    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }

    #[must_use]
    pub const fn getter(&self) -> &Member<E> {
        &self.getter
    }

    #[must_use]
    pub const fn setter(&self) -> Option<&Member<E>> {
        self.setter.as_ref()
    }
}

impl<E> Clone for FieldAccessor<E> {
    fn clone(&self) -> Self {
        Self {
            field: self.field.clone()
        }
    }
}

impl<E> Clone for PropertyAccessor<E> {
    fn clone(&self) -> Self {
        Self {
            property: self.property.clone(),
            getter:   self.getter.clone(),
            setter:   self.setter.clone()
        }
    }
}

impl<E> Clone for Accessor<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Field(field) => Self::Field(field.clone()),
            Self::Property(property) => Self::Property(property.clone())
        }
    }
}

impl<E> std::fmt::Debug for Accessor<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Accessor")
            .field("mode", &self.mode())
            .field("name", &self.name())
            .finish()
    }
}

impl<E> Accessor<E> {
    #[must_use]
    pub const fn mode(&self) -> AccessMode {
        match self {
            Self::Field(_) => AccessMode::Field,
            Self::Property(_) => AccessMode::Property
        }
    }

    /// Logical name: field name, or bean property name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Field(f) => f.field.meta.name,
            Self::Property(p) => p.property.as_deref().unwrap_or(p.getter.meta.name)
        }
    }

    /// Annotations of the field, or of the getter.
    #[must_use]
    pub const fn meta(&self) -> &MemberMeta {
        match self {
            Self::Field(f) => &f.field.meta,
            Self::Property(p) => &p.getter.meta
        }
    }

    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.meta().value_type
    }

    /// Read the current value.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::NotReadable`] for members without a read
    /// closure, such as relations.
    pub fn get(&self, entity: &E) -> Result<Value, AccessError> {
        let member = match self {
            Self::Field(f) => &f.field,
            Self::Property(p) => &p.getter
        };
        member
            .access
            .reader()
            .map(|read| read(entity))
            .ok_or_else(|| AccessError::NotReadable {
                property: self.name().to_owned()
            })
    }

    /// Assign a value already prepared for [`value_type`](Self::value_type).
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::ReadOnly`] without a setter and
    /// [`AccessError::Conversion`] if the value has the wrong kind.
    pub fn set(&self, entity: &mut E, value: Value) -> Result<(), AccessError> {
        let write = match self {
            Self::Field(f) => f.field.access.writer(),
            Self::Property(p) => p.setter.as_ref().and_then(|s| s.access.writer())
        };
        let Some(write) = write else {
            return Err(AccessError::ReadOnly {
                property: self.name().to_owned()
            });
        };
        write(entity, value).map_err(|source| AccessError::Conversion {
            property: self.name().to_owned(),
            source
        })
    }

    /// Populate a to-one relation. Does nothing for other accessors.
    pub(crate) fn link(
        &self,
        entity: &mut E,
        ctx: &RelationContext<'_>
    ) -> Result<(), MaterializationError> {
        let link = match self {
            Self::Field(f) => f.field.access.linker(),
            Self::Property(p) => p.setter.as_ref().and_then(|s| s.access.linker())
        };
        match link {
            Some(link) => link(entity, ctx),
            None => Ok(())
        }
    }
}

/// Enumerate the persistable accessors of `ty` in declaration order.
///
/// # Errors
///
/// Returns [`MetadataError::MissingIdentity`] if no member is marked as the
/// identity.
pub fn build_accessors<E>(ty: &EntityType<E>) -> Result<Vec<Accessor<E>>, MetadataError> {
    let mode = ty.identity_accessor()?.mode();
    let skipped = |meta: &MemberMeta| meta.is_transient() || meta.is_static();
    let accessors = match mode {
        AccessMode::Property => ty
            .getters()
            .filter(|g| !skipped(&g.meta) && bean_property(&g.meta).is_some())
            .map(|g| Accessor::Property(PropertyAccessor::new(ty, g.clone())))
            .collect(),
        AccessMode::Field => ty
            .fields()
            .filter(|f| !f.meta.inherited || f.meta.declared_in.mapping.is_persistable())
            .filter(|f| !skipped(&f.meta))
            .map(|f| Accessor::Field(FieldAccessor::new(f.clone())))
            .collect()
    };
    Ok(accessors)
}
