// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust
//! use entity_mapper_core::prelude::*;
//! ```

pub use crate::{
    Column, ColumnDescriptor, Declaration, Entity, EntityType, Executor, MapperConfig,
    PersistenceError, QueryRunner, RelationKind, ResultSet, RowMaterializer, SqlEnum, SqlValue,
    SqlWriter, Value,
    sql::{AnsiQuoting, IdentifierQuoter}
};
