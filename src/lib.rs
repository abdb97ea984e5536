// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # Example
//!
//! ```rust
//! use entity_mapper::prelude::*;
//!
//! #[derive(Debug, Default, Entity)]
//! #[entity(table = "customers")]
//! struct Customer {
//!     #[id]
//!     id:   Option<i64>,
//!     #[column(name = "full_name")]
//!     name: String
//! }
//!
//! let sql = SqlWriter::new();
//! assert_eq!(
//!     sql.insert::<Customer>().unwrap(),
//!     "INSERT INTO customers (full_name) VALUES (?)"
//! );
//!
//! let rows = ResultSet::with_columns(["id", "full_name"])
//!     .row([Value::I64(1), Value::from("Ada")]);
//! let customers: Vec<Customer> = RowMaterializer::default().materialize_all(rows).unwrap();
//! assert_eq!(customers[0].name, "Ada");
//! ```

pub use entity_mapper_core::*;
pub use entity_mapper_derive::{Entity, SqlEnum};

/// Convenient re-exports for common usage, derives included.
pub mod prelude {
    pub use entity_mapper_core::prelude::*;
    pub use entity_mapper_derive::{Entity, SqlEnum};
}
