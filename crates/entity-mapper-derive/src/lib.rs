// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## Struct-Level `#[entity(...)]`
//!
//! ```rust,ignore
//! #[derive(Default, Entity)]
//! #[entity(
//!     table = "users",      // Optional: table name (default: struct name)
//!     access = "property",  // Optional: "field" | "property" (default: "field")
//! )]
//! pub struct User { /* ... */ }
//!
//! #[derive(Default, Entity)]
//! #[entity(mapped_superclass)] // Persistable supertype, never queried itself
//! pub struct Audited { /* ... */ }
//! ```
//!
//! ## Field-Level Attributes
//!
//! ```rust,ignore
//! pub struct Order {
//!     #[id]
//!     pub id: Option<i64>,
//!
//!     #[column(name = "order_no", updatable = false)]
//!     pub number: String,
//!
//!     #[transient]
//!     pub cache: Vec<u8>,
//!
//!     #[many_to_one]
//!     #[join_column(name = "buyer_fk")]
//!     pub buyer: Option<Customer>,
//!
//!     #[one_to_many]
//!     pub lines: Vec<Line>,
//!
//!     #[inherit]
//!     pub audit: Audited,
//! }
//! ```

mod entity;
mod sql_enum;

use proc_macro::TokenStream;

/// Derive macro declaring a struct's persistence metadata.
///
/// Generates an `entity_mapper::Entity` implementation whose `declare`
/// registers every field (or every bean-style accessor method with
/// `access = "property"`) together with its annotations.
///
/// # Struct Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `table = "t"` | Table name override. Empty means no override |
/// | `mapped_superclass` | Persistable supertype that is not an entity |
/// | `unmapped` | Plain supertype whose members are never written |
/// | `access = "property"` | Declare `get_x`/`is_x`/`set_x` methods instead of fields |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[id]` | Identity column |
/// | `#[column(name = "c", insertable = false, updatable = false)]` | Column annotation |
/// | `#[transient]` | Never read or written |
/// | `#[many_to_one]`, `#[one_to_one]` | To-one relation on an `Option<T>` field |
/// | `#[one_to_many]` | To-many relation, never populated |
/// | `#[join_column(name = "fk")]` | Foreign-key column of a to-one relation |
/// | `#[inherit]` | Splice in the members of the supertype stored in this field |
///
/// # Example
///
/// ```rust,ignore
/// use entity_mapper::{Entity, SqlWriter};
///
/// #[derive(Debug, Default, Entity)]
/// #[entity(table = "customers")]
/// pub struct Customer {
///     #[id]
///     pub id: Option<i64>,
///
///     #[column(name = "full_name")]
///     pub name: String,
/// }
///
/// let sql = SqlWriter::new().insert::<Customer>()?;
/// assert_eq!(sql, "INSERT INTO customers (full_name) VALUES (?)");
/// ```
///
/// # Compile Errors
///
/// - tuple structs, unit structs and enums
/// - more than one `#[id]` field
/// - no `#[id]` on an entity without an `#[inherit]` field
/// - a to-one relation on a field that is not an `Option`
#[proc_macro_derive(
    Entity,
    attributes(
        entity, id, column, transient, many_to_one, one_to_one, one_to_many, join_column, inherit
    )
)]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive(input)
}

/// Derive macro mapping a unit-only enum to named constants.
///
/// Implements `entity_mapper::SqlEnum` and `entity_mapper::SqlValue`. Values
/// are bound as the constant name and read back by exact name match.
///
/// # Attributes
///
/// | Attribute | Level | Description |
/// |-----------|-------|-------------|
/// | `#[sql_enum(rename_all = "SCREAMING_SNAKE_CASE")]` | enum | Case applied to every constant |
/// | `#[sql_enum(rename = "X")]` | variant | Explicit constant name |
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug, Default, SqlEnum)]
/// #[sql_enum(rename_all = "SCREAMING_SNAKE_CASE")]
/// pub enum Status {
///     #[default]
///     Active,
///     OnHold,
/// }
///
/// assert_eq!(Status::OnHold.name(), "ON_HOLD");
/// ```
#[proc_macro_derive(SqlEnum, attributes(sql_enum))]
pub fn derive_sql_enum(input: TokenStream) -> TokenStream {
    sql_enum::derive(input)
}
