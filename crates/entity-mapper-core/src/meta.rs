// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity declarations.
//!
//! An entity describes its own shape by implementing [`Entity::declare`].
//! The declaration registers every field, getter and setter together with
//! its annotations and typed access closures. Everything else in the crate
//! (identity resolution, SQL generation, row materialization) reads the
//! resulting [`EntityType`].
//!
//! Declarations are usually generated by `#[derive(Entity)]`, but they can be
//! written by hand:
//!
//! ```rust
//! use entity_mapper_core::prelude::*;
//!
//! #[derive(Default)]
//! struct Author {
//!     id:   Option<i64>,
//!     name: String
//! }
//!
//! impl Entity for Author {
//!     fn declare(decl: &mut Declaration<Self>) {
//!         decl.entity().table("authors");
//!         decl.field("id", |a| &a.id, |a| &mut a.id).id();
//!         decl.field("name", |a| &a.name, |a| &mut a.name);
//!     }
//! }
//!
//! let ty = EntityType::<Author>::of();
//! assert_eq!(ty.table_name(), "authors");
//! ```

use std::{any::type_name, fmt, sync::Arc};

use crate::{
    error::{ConversionError, MaterializationError},
    materialize::RelationContext,
    value::{SqlValue, Value, ValueKind, ValueType}
};

/// Types that map to a table.
///
/// `Default` stands in for the no-argument constructor used when rows are
/// materialized.
pub trait Entity: Default + 'static {
    /// Register members and annotations.
    fn declare(decl: &mut Declaration<Self>);
}

/// How a declared type takes part in persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mapping {
    /// Concrete entity backed by a table.
    Entity,
    /// Supertype whose members are persisted by its entities.
    MappedSuperclass,
    /// Plain type; its members are never written.
    #[default]
    Unmapped
}

impl Mapping {
    /// Entity or mapped superclass.
    #[must_use]
    pub const fn is_persistable(self) -> bool {
        matches!(self, Self::Entity | Self::MappedSuperclass)
    }
}

/// Column annotation.
///
/// An empty `name` means no override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name:       &'static str,
    pub insertable: bool,
    pub updatable:  bool
}

impl Default for Column {
    fn default() -> Self {
        Self {
            name:       "",
            insertable: true,
            updatable:  true
        }
    }
}

impl Column {
    /// Column annotation with a name override.
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self {
            name,
            insertable: true,
            updatable: true
        }
    }

    /// Name override, if present and non-empty.
    #[must_use]
    pub fn name_override(&self) -> Option<&'static str> {
        Some(self.name).filter(|name| !name.is_empty())
    }
}

/// Relation annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    ManyToOne,
    OneToOne,
    OneToMany
}

impl RelationKind {
    /// Relation backed by a single foreign-key column.
    #[must_use]
    pub const fn is_to_one(self) -> bool {
        matches!(self, Self::ManyToOne | Self::OneToOne)
    }
}

/// Kind of declared member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Getter,
    Setter
}

/// Language-level modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Belongs to the type rather than to instances.
    pub is_static:    bool,
    /// Excluded from serialized state.
    pub is_transient: bool
}

/// Type that declared a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclaringType {
    /// Simple type name.
    pub name:    &'static str,
    pub mapping: Mapping
}

/// Annotations and shape of one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberMeta {
    /// Field or method name as declared.
    pub name:        &'static str,
    pub kind:        MemberKind,
    pub value_type:  ValueType,
    /// Identity marker.
    pub id:          bool,
    pub column:      Option<Column>,
    /// Transient annotation.
    pub transient:   bool,
    pub relation:    Option<RelationKind>,
    /// Join-column override for to-one relations.
    pub join_column: Option<&'static str>,
    pub modifiers:   Modifiers,
    pub declared_in: DeclaringType,
    /// Spliced in from a supertype.
    pub inherited:   bool
}

pub(crate) type ReadFn<E> = Arc<dyn Fn(&E) -> Value + Send + Sync>;
pub(crate) type WriteFn<E> = Arc<dyn Fn(&mut E, Value) -> Result<(), ConversionError> + Send + Sync>;
pub(crate) type LinkFn<E> =
    Arc<dyn Fn(&mut E, &RelationContext<'_>) -> Result<(), MaterializationError> + Send + Sync>;

/// Typed access to a member.
pub enum Access<E> {
    Read(ReadFn<E>),
    Write(WriteFn<E>),
    ReadWrite(ReadFn<E>, WriteFn<E>),
    /// Populates a to-one relation from joined columns.
    Link(LinkFn<E>),
    /// No value-level access.
    Opaque
}

impl<E> Clone for Access<E> {
    fn clone(&self) -> Self {
        match self {
            Self::Read(read) => Self::Read(Arc::clone(read)),
            Self::Write(write) => Self::Write(Arc::clone(write)),
            Self::ReadWrite(read, write) => Self::ReadWrite(Arc::clone(read), Arc::clone(write)),
            Self::Link(link) => Self::Link(Arc::clone(link)),
            Self::Opaque => Self::Opaque
        }
    }
}

impl<E> fmt::Debug for Access<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Read(_) => "Read",
            Self::Write(_) => "Write",
            Self::ReadWrite(..) => "ReadWrite",
            Self::Link(_) => "Link",
            Self::Opaque => "Opaque"
        })
    }
}

impl<E> Access<E> {
    pub(crate) fn reader(&self) -> Option<&ReadFn<E>> {
        match self {
            Self::Read(read) | Self::ReadWrite(read, _) => Some(read),
            _ => None
        }
    }

    pub(crate) fn writer(&self) -> Option<&WriteFn<E>> {
        match self {
            Self::Write(write) | Self::ReadWrite(_, write) => Some(write),
            _ => None
        }
    }

    pub(crate) fn linker(&self) -> Option<&LinkFn<E>> {
        match self {
            Self::Link(link) => Some(link),
            _ => None
        }
    }
}

/// Lift access on a supertype stored inside `E` into access on `E`.
fn project<P: 'static, E: 'static>(
    access: Access<P>,
    get: &Arc<dyn Fn(&E) -> &P + Send + Sync>,
    get_mut: &Arc<dyn Fn(&mut E) -> &mut P + Send + Sync>
) -> Access<E> {
    let read = |read: ReadFn<P>| -> ReadFn<E> {
        let get = Arc::clone(get);
        Arc::new(move |e: &E| read(get(e)))
    };
    let write = |write: WriteFn<P>| -> WriteFn<E> {
        let get_mut = Arc::clone(get_mut);
        Arc::new(move |e: &mut E, v: Value| write(get_mut(e), v))
    };
    match access {
        Access::Read(r) => Access::Read(read(r)),
        Access::Write(w) => Access::Write(write(w)),
        Access::ReadWrite(r, w) => Access::ReadWrite(read(r), write(w)),
        Access::Link(link) => {
            let get_mut = Arc::clone(get_mut);
            Access::Link(Arc::new(move |e: &mut E, ctx: &RelationContext<'_>| {
                link(get_mut(e), ctx)
            }))
        }
        Access::Opaque => Access::Opaque
    }
}

/// One declared field or method.
pub struct Member<E> {
    pub meta:   MemberMeta,
    pub access: Access<E>
}

impl<E> Clone for Member<E> {
    fn clone(&self) -> Self {
        Self {
            meta:   self.meta.clone(),
            access: self.access.clone()
        }
    }
}

impl<E> fmt::Debug for Member<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("meta", &self.meta)
            .field("access", &self.access)
            .finish()
    }
}

/// Builder filled in by [`Entity::declare`].
pub struct Declaration<E> {
    name:    &'static str,
    mapping: Mapping,
    table:   Option<&'static str>,
    members: Vec<Member<E>>
}

impl<E: 'static> Declaration<E> {
    fn new() -> Self {
        Self {
            name:    simple_name::<E>(),
            mapping: Mapping::Unmapped,
            table:   None,
            members: Vec::new()
        }
    }

    /// Mark as an entity.
    pub fn entity(&mut self) -> &mut Self {
        self.mapping = Mapping::Entity;
        self
    }

    /// Mark as a mapped superclass.
    pub fn mapped_superclass(&mut self) -> &mut Self {
        self.mapping = Mapping::MappedSuperclass;
        self
    }

    /// Table name override. Empty means none.
    pub fn table(&mut self, name: &'static str) -> &mut Self {
        self.table = Some(name);
        self
    }

    /// Field of a column-mappable type.
    pub fn field<T: SqlValue + 'static>(
        &mut self,
        name: &'static str,
        get: impl Fn(&E) -> &T + Send + Sync + 'static,
        get_mut: impl Fn(&mut E) -> &mut T + Send + Sync + 'static
    ) -> MemberBuilder<'_, E> {
        let read: ReadFn<E> = Arc::new(move |e: &E| get(e).to_value());
        let write: WriteFn<E> = Arc::new(move |e: &mut E, v: Value| {
            *get_mut(e) = T::from_value(v)?;
            Ok(())
        });
        self.push(
            name,
            MemberKind::Field,
            T::value_type(),
            Access::ReadWrite(read, write)
        )
    }

    /// Getter method returning a column-mappable type.
    pub fn getter<T: SqlValue + 'static>(
        &mut self,
        name: &'static str,
        read: impl Fn(&E) -> T + Send + Sync + 'static
    ) -> MemberBuilder<'_, E> {
        let read: ReadFn<E> = Arc::new(move |e: &E| read(e).to_value());
        self.push(name, MemberKind::Getter, T::value_type(), Access::Read(read))
    }

    /// Setter method taking a column-mappable type.
    pub fn setter<T: SqlValue + 'static>(
        &mut self,
        name: &'static str,
        write: impl Fn(&mut E, T) + Send + Sync + 'static
    ) -> MemberBuilder<'_, E> {
        let write: WriteFn<E> = Arc::new(move |e: &mut E, v: Value| {
            write(e, T::from_value(v)?);
            Ok(())
        });
        self.push(name, MemberKind::Setter, T::value_type(), Access::Write(write))
    }

    /// To-one relation field.
    pub fn to_one<T: Entity>(
        &mut self,
        name: &'static str,
        kind: RelationKind,
        slot: impl Fn(&mut E) -> &mut Option<T> + Send + Sync + 'static
    ) -> MemberBuilder<'_, E> {
        let link: LinkFn<E> = Arc::new(move |e: &mut E, ctx: &RelationContext<'_>| {
            if let Some(related) = ctx.load::<T>()? {
                *slot(e) = Some(related);
            }
            Ok(())
        });
        let builder = self.push(
            name,
            MemberKind::Field,
            ValueType::new(ValueKind::Entity).nullable(),
            Access::Link(link)
        );
        builder.member.meta.relation = Some(kind);
        builder
    }

    /// Getter of a to-one relation.
    pub fn to_one_getter(&mut self, name: &'static str, kind: RelationKind) -> MemberBuilder<'_, E> {
        let builder = self.push(
            name,
            MemberKind::Getter,
            ValueType::new(ValueKind::Entity).nullable(),
            Access::Opaque
        );
        builder.member.meta.relation = Some(kind);
        builder
    }

    /// Setter of a to-one relation.
    pub fn to_one_setter<T: Entity>(
        &mut self,
        name: &'static str,
        write: impl Fn(&mut E, T) + Send + Sync + 'static
    ) -> MemberBuilder<'_, E> {
        let link: LinkFn<E> = Arc::new(move |e: &mut E, ctx: &RelationContext<'_>| {
            if let Some(related) = ctx.load::<T>()? {
                write(e, related);
            }
            Ok(())
        });
        self.push(
            name,
            MemberKind::Setter,
            ValueType::new(ValueKind::Entity).nullable(),
            Access::Link(link)
        )
    }

    /// To-many relation field. Never written, never populated.
    pub fn to_many(&mut self, name: &'static str) -> MemberBuilder<'_, E> {
        let builder = self.push(
            name,
            MemberKind::Field,
            ValueType::new(ValueKind::List),
            Access::Opaque
        );
        builder.member.meta.relation = Some(RelationKind::OneToMany);
        builder
    }

    /// Getter of a to-many relation.
    pub fn to_many_getter(&mut self, name: &'static str) -> MemberBuilder<'_, E> {
        let builder = self.push(
            name,
            MemberKind::Getter,
            ValueType::new(ValueKind::List),
            Access::Opaque
        );
        builder.member.meta.relation = Some(RelationKind::OneToMany);
        builder
    }

    /// Field whose type has no column representation.
    pub fn opaque_field(&mut self, name: &'static str) -> MemberBuilder<'_, E> {
        self.push(
            name,
            MemberKind::Field,
            ValueType::new(ValueKind::Opaque),
            Access::Opaque
        )
    }

    /// Getter whose return type has no column representation.
    pub fn opaque_getter(&mut self, name: &'static str) -> MemberBuilder<'_, E> {
        self.push(
            name,
            MemberKind::Getter,
            ValueType::new(ValueKind::Opaque),
            Access::Opaque
        )
    }

    /// Splice in the members of a supertype stored in a field of `E`.
    ///
    /// Spliced members keep the supertype as their declaring type.
    pub fn inherit<P: Entity>(
        &mut self,
        get: impl Fn(&E) -> &P + Send + Sync + 'static,
        get_mut: impl Fn(&mut E) -> &mut P + Send + Sync + 'static
    ) -> &mut Self {
        let get: Arc<dyn Fn(&E) -> &P + Send + Sync> = Arc::new(get);
        let get_mut: Arc<dyn Fn(&mut E) -> &mut P + Send + Sync> = Arc::new(get_mut);
        for member in EntityType::<P>::of().members {
            self.members.push(Member {
                meta:   MemberMeta {
                    inherited: true,
                    ..member.meta
                },
                access: project(member.access, &get, &get_mut)
            });
        }
        self
    }

    fn push(
        &mut self,
        name: &'static str,
        kind: MemberKind,
        value_type: ValueType,
        access: Access<E>
    ) -> MemberBuilder<'_, E> {
        let index = self.members.len();
        self.members.push(Member {
            meta: MemberMeta {
                name,
                kind,
                value_type,
                id: false,
                column: None,
                transient: false,
                relation: None,
                join_column: None,
                modifiers: Modifiers::default(),
                declared_in: DeclaringType {
                    name:    self.name,
                    mapping: self.mapping
                },
                inherited: false
            },
            access
        });
        MemberBuilder {
            member: &mut self.members[index]
        }
    }

    fn finish(mut self) -> EntityType<E> {
        let owner = DeclaringType {
            name:    self.name,
            mapping: self.mapping
        };
        for member in self.members.iter_mut().filter(|m| !m.meta.inherited) {
            member.meta.declared_in = owner;
        }
        EntityType {
            name:    self.name,
            mapping: self.mapping,
            table:   self.table,
            members: self.members
        }
    }
}

/// Annotates the member just declared.
pub struct MemberBuilder<'a, E> {
    member: &'a mut Member<E>
}

impl<E> MemberBuilder<'_, E> {
    /// Identity marker.
    pub fn id(self) -> Self {
        self.member.meta.id = true;
        self
    }

    /// Column annotation.
    pub fn column(self, column: Column) -> Self {
        self.member.meta.column = Some(column);
        self
    }

    /// Column annotation with only a name.
    pub fn name(mut self, name: &'static str) -> Self {
        self.column_mut().name = name;
        self
    }

    /// Excluded from INSERT.
    pub fn not_insertable(mut self) -> Self {
        self.column_mut().insertable = false;
        self
    }

    /// Excluded from UPDATE.
    pub fn not_updatable(mut self) -> Self {
        self.column_mut().updatable = false;
        self
    }

    /// Transient annotation.
    pub fn transient(self) -> Self {
        self.member.meta.transient = true;
        self
    }

    /// Transient modifier.
    pub fn transient_modifier(self) -> Self {
        self.member.meta.modifiers.is_transient = true;
        self
    }

    /// Static modifier.
    pub fn static_member(self) -> Self {
        self.member.meta.modifiers.is_static = true;
        self
    }

    /// Join-column override.
    pub fn join_column(self, name: &'static str) -> Self {
        self.member.meta.join_column = Some(name);
        self
    }

    fn column_mut(&mut self) -> &mut Column {
        self.member.meta.column.get_or_insert_with(Column::default)
    }
}

/// Evaluated declaration of an entity type.
pub struct EntityType<E> {
    name:    &'static str,
    mapping: Mapping,
    table:   Option<&'static str>,
    members: Vec<Member<E>>
}

impl<E: Entity> EntityType<E> {
    /// Run the declaration of `E`.
    #[must_use]
    pub fn of() -> Self {
        let mut decl = Declaration::new();
        E::declare(&mut decl);
        decl.finish()
    }
}

impl<E> EntityType<E> {
    /// Simple type name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn mapping(&self) -> Mapping {
        self.mapping
    }

    /// Declared table override, possibly empty.
    #[must_use]
    pub const fn table_override(&self) -> Option<&'static str> {
        self.table
    }

    /// All members in declaration order.
    #[must_use]
    pub fn members(&self) -> &[Member<E>] {
        &self.members
    }

    pub fn fields(&self) -> impl Iterator<Item = &Member<E>> {
        self.of_kind(MemberKind::Field)
    }

    pub fn getters(&self) -> impl Iterator<Item = &Member<E>> {
        self.of_kind(MemberKind::Getter)
    }

    /// Setter with the given method name.
    #[must_use]
    pub fn setter(&self, name: &str) -> Option<&Member<E>> {
        self.of_kind(MemberKind::Setter).find(|m| m.meta.name == name)
    }

    fn of_kind(&self, kind: MemberKind) -> impl Iterator<Item = &Member<E>> {
        self.members.iter().filter(move |m| m.meta.kind == kind)
    }
}

impl<E> fmt::Debug for EntityType<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityType")
            .field("name", &self.name)
            .field("mapping", &self.mapping)
            .field("table", &self.table)
            .field("members", &self.members)
            .finish()
    }
}

/// Last path segment of a type name, without generic arguments.
fn simple_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let path = full.split('<').next().unwrap_or(full);
    path.rsplit("::").next().unwrap_or(path)
}
