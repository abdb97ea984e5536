// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Runtime engine for entity-mapper.
//!
//! This crate turns entity declarations into SQL statements and maps result
//! rows back onto entities. It is used by the code `#[derive(Entity)]`
//! generates, and can be used on its own with hand-written declarations.
//!
//! # Overview
//!
//! | Module | Role |
//! |--------|------|
//! | [`value`] | Typed cells and parameters, Rust type conversions |
//! | [`meta`] | [`Entity`] trait and the [`Declaration`] builder |
//! | [`resolve`] | Identity, table and column name resolution |
//! | [`accessor`] | Persistable field or property accessors |
//! | [`sql`] | Statement generation |
//! | [`materialize`] | Row to entity mapping, relation population |
//! | [`runner`] | Save, delete and find on top of an [`Executor`] |
//!
//! # Usage
//!
//! Most users should depend on `entity-mapper`, which re-exports this crate
//! together with the derive macros:
//!
//! ```rust
//! use entity_mapper_core::prelude::*;
//!
//! #[derive(Default)]
//! struct Tag {
//!     id:    Option<i64>,
//!     label: String
//! }
//!
//! impl Entity for Tag {
//!     fn declare(decl: &mut Declaration<Self>) {
//!         decl.entity();
//!         decl.field("id", |t| &t.id, |t| &mut t.id).id();
//!         decl.field("label", |t| &t.label, |t| &mut t.label);
//!     }
//! }
//!
//! let sql = SqlWriter::new();
//! assert_eq!(sql.insert::<Tag>().unwrap(), "INSERT INTO Tag (label) VALUES (?)");
//! assert_eq!(sql.update_by_id::<Tag>(&[]).unwrap(), "UPDATE Tag SET label = ? WHERE id = ?");
//! ```

#![warn(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod accessor;
pub mod config;
pub mod error;
pub mod executor;
pub mod materialize;
pub mod meta;
pub mod prelude;
pub mod resolve;
pub mod result;
pub mod runner;
pub mod sql;
pub mod value;

pub use accessor::{AccessMode, Accessor, build_accessors};
pub use config::{DEFAULT_FOREIGN_KEY_SUFFIX, MapperConfig};
pub use error::{AccessError, ConversionError, MaterializationError, MetadataError, PersistenceError};
pub use executor::Executor;
pub use materialize::{RelationContext, RowMaterializer};
pub use meta::{Column, Declaration, Entity, EntityType, Mapping, RelationKind};
pub use resolve::{resolve_column_name, resolve_identity_accessor, resolve_table_name};
pub use result::{ColumnDescriptor, ResultSet};
pub use runner::{NewEntityTester, NullIdentity, QueryRunner, QueryRunnerBuilder};
pub use sql::{AnsiQuoting, IdentifierQuoter, NoQuoting, SqlWriter};
pub use value::{SqlEnum, SqlValue, Value, ValueKind, ValueType};
