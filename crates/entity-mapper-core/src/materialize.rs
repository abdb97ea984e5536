// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Row materialization.
//!
//! [`RowMaterializer`] turns the rows of a [`ResultSet`] into entities. Each
//! result column is matched case-insensitively against the column names of
//! the entity's accessors (label first, name when the label is empty). The
//! first matching accessor wins; unmatched columns are ignored.
//!
//! # Joined Tables
//!
//! Columns may carry the table they were selected from. Such columns only
//! populate the entity whose table they belong to, which lets one row carry
//! an entity together with the targets of its to-one relations:
//!
//! ```text
//! SELECT EntityWithJoin.*, SimpleEntity.* FROM EntityWithJoin, SimpleEntity ...
//!
//! id | simple_id | id | name
//! ───┴───────────┼────┴─────
//!  EntityWithJoin│ SimpleEntity
//! ```
//!
//! A relation is left unset when its foreign-key column is present and
//! `NULL`, when no column of the target table is present, or when the target
//! table was already materialized higher up in the same row.

mod convert;

use tracing::trace;

pub use self::convert::prepare;
use crate::{
    accessor::{Accessor, build_accessors},
    config::MapperConfig,
    error::{MaterializationError, MetadataError},
    meta::{Entity, EntityType},
    result::{ColumnDescriptor, ResultSet},
    value::Value
};

/// Which result columns an entity may read.
#[derive(Debug, Clone, Copy)]
enum ColumnScope<'a> {
    /// Every column.
    All,
    /// Unattributed columns and columns of this table.
    Root(&'a str),
    /// Only columns of this table.
    Joined(&'a str)
}

impl ColumnScope<'_> {
    fn admits(self, column: &ColumnDescriptor) -> bool {
        match self {
            Self::All => true,
            Self::Root(table) => column.table.is_none() || column.belongs_to(table),
            Self::Joined(table) => column.belongs_to(table)
        }
    }
}

/// Builds entities from result rows.
#[derive(Debug, Clone, Default)]
pub struct RowMaterializer {
    config: MapperConfig
}

impl RowMaterializer {
    #[must_use]
    pub const fn new(config: MapperConfig) -> Self {
        Self {
            config
        }
    }

    #[must_use]
    pub const fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Index of the accessor each column populates, `None` for unmatched
    /// columns.
    ///
    /// Relation accessors never match. With `table` set, columns attributed
    /// to another table are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] if a column name cannot be resolved.
    pub fn map_columns_to_accessors<E>(
        &self,
        columns: &[ColumnDescriptor],
        accessors: &[Accessor<E>],
        table: Option<&str>
    ) -> Result<Vec<Option<usize>>, MetadataError> {
        let scope = table.map_or(ColumnScope::All, ColumnScope::Root);
        map_scoped(columns, accessors, scope)
    }

    /// Build one entity from `row`.
    ///
    /// `mapping` is the result of
    /// [`map_columns_to_accessors`](Self::map_columns_to_accessors) for the
    /// same columns and accessors. Entries for columns attributed to a table
    /// other than `E`'s are ignored, whatever table the mapping was built
    /// for, so joined columns only ever reach relation targets.
    ///
    /// # Errors
    ///
    /// Returns [`MaterializationError`] if `E` is not an entity or a cell
    /// cannot be assigned.
    pub fn materialize<E: Entity>(
        &self,
        columns: &[ColumnDescriptor],
        row: &[Value],
        accessors: &[Accessor<E>],
        mapping: &[Option<usize>]
    ) -> Result<E, MaterializationError> {
        let ty = EntityType::<E>::of();
        ty.ensure_entity()?;
        let table = ty.table_name();
        let frame = Frame {
            columns,
            row,
            table: &table,
            scope: ColumnScope::Root(&table),
            path: std::slice::from_ref(&table)
        };
        self.fill(&frame, accessors, mapping)
    }

    /// Build one entity per row, consuming the result.
    ///
    /// # Errors
    ///
    /// Returns [`MaterializationError`] if `E` is not an entity or any row
    /// fails.
    pub fn materialize_all<E: Entity>(&self, result: ResultSet) -> Result<Vec<E>, MaterializationError> {
        let ty = EntityType::<E>::of();
        ty.ensure_entity()?;
        if result.rows.is_empty() {
            return Ok(Vec::new());
        }
        let accessors = build_accessors(&ty)?;
        let table = ty.table_name();
        let scope = ColumnScope::Root(&table);
        let mapping = map_scoped(&result.columns, &accessors, scope)?;
        let path = [table.clone()];
        result
            .rows
            .iter()
            .map(|row| {
                let frame = Frame {
                    columns: &result.columns,
                    row,
                    table: &table,
                    scope,
                    path: &path
                };
                self.fill(&frame, &accessors, &mapping)
            })
            .collect()
    }

    /// Build an entity from the first row, if any.
    ///
    /// # Errors
    ///
    /// Same as [`materialize_all`](Self::materialize_all).
    pub fn materialize_one<E: Entity>(&self, mut result: ResultSet) -> Result<Option<E>, MaterializationError> {
        result.rows.truncate(1);
        Ok(self.materialize_all(result)?.into_iter().next())
    }

    fn fill<E: Entity>(
        &self,
        frame: &Frame<'_>,
        accessors: &[Accessor<E>],
        mapping: &[Option<usize>]
    ) -> Result<E, MaterializationError> {
        let mut entity = E::default();
        for (column, index) in mapping.iter().enumerate() {
            if !frame.columns.get(column).is_some_and(|c| frame.scope.admits(c)) {
                continue;
            }
            let Some(accessor) = index.and_then(|i| accessors.get(i)) else {
                continue;
            };
            let cell = frame.row.get(column).cloned().unwrap_or(Value::Null);
            let value = prepare(accessor.name(), accessor.value_type(), cell)?;
            accessor.set(&mut entity, value)?;
        }
        for accessor in accessors.iter().filter(|a| a.is_to_one_relation()) {
            let foreign_key = accessor.foreign_key_column(&self.config.foreign_key_suffix)?;
            let ctx = RelationContext {
                materializer: self,
                frame,
                foreign_key: &foreign_key
            };
            accessor.link(&mut entity, &ctx)?;
        }
        Ok(entity)
    }
}

/// One entity's view of the current row.
struct Frame<'a> {
    columns: &'a [ColumnDescriptor],
    row:     &'a [Value],
    table:   &'a str,
    scope:   ColumnScope<'a>,
    /// Tables materialized so far on the way to this entity.
    path:    &'a [String]
}

/// Handed to relation accessors while a row is materialized.
pub struct RelationContext<'a> {
    materializer: &'a RowMaterializer,
    frame:        &'a Frame<'a>,
    foreign_key:  &'a str
}

impl RelationContext<'_> {
    /// Materialize the relation target `T` from the joined columns.
    ///
    /// # Errors
    ///
    /// Returns [`MaterializationError`] if `T` is not an entity or a joined
    /// cell cannot be assigned.
    pub fn load<T: Entity>(&self) -> Result<Option<T>, MaterializationError> {
        let ty = EntityType::<T>::of();
        ty.ensure_entity()?;
        let table = ty.table_name();
        let frame = self.frame;

        if frame.path.iter().any(|t| t.eq_ignore_ascii_case(&table)) {
            trace!(table = %table, "relation target already on path");
            return Ok(None);
        }
        if self.foreign_key_is_null() {
            trace!(foreign_key = self.foreign_key, "foreign key is NULL");
            return Ok(None);
        }
        if !frame.columns.iter().any(|c| c.belongs_to(&table)) {
            trace!(table = %table, "no joined columns");
            return Ok(None);
        }

        let accessors = build_accessors(&ty)?;
        let scope = ColumnScope::Joined(&table);
        let mapping = map_scoped(frame.columns, &accessors, scope)?;
        let mut path = frame.path.to_vec();
        path.push(table.clone());
        let joined = Frame {
            columns: frame.columns,
            row: frame.row,
            table: &table,
            scope,
            path: &path
        };
        trace!(parent = frame.table, table = %table, "populating relation");
        self.materializer.fill(&joined, &accessors, &mapping).map(Some)
    }

    fn foreign_key_is_null(&self) -> bool {
        let frame = self.frame;
        frame
            .columns
            .iter()
            .position(|c| frame.scope.admits(c) && c.effective_name().eq_ignore_ascii_case(self.foreign_key))
            .and_then(|i| frame.row.get(i))
            .is_some_and(Value::is_null)
    }
}

fn map_scoped<E>(
    columns: &[ColumnDescriptor],
    accessors: &[Accessor<E>],
    scope: ColumnScope<'_>
) -> Result<Vec<Option<usize>>, MetadataError> {
    let names = accessors
        .iter()
        .map(|a| {
            if a.is_relation() {
                Ok(None)
            } else {
                a.column_name().map(Some)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mapping = columns
        .iter()
        .map(|column| {
            if !scope.admits(column) {
                return None;
            }
            let label = column.effective_name();
            let found = names
                .iter()
                .position(|name| name.as_deref().is_some_and(|n| n.eq_ignore_ascii_case(label)));
            trace!(column = label, accessor = ?found, "mapped column");
            found
        })
        .collect();
    Ok(mapping)
}
