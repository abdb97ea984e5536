// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! SQL statement generation.
//!
//! [`SqlWriter`] renders parameterized statements from entity metadata. All
//! parameters are positional `?` placeholders.
//!
//! # Statements
//!
//! | Method | Output |
//! |--------|--------|
//! | [`select_by_id`](SqlWriter::select_by_id) | `SELECT * FROM t WHERE id = ?` |
//! | [`select`](SqlWriter::select) | `SELECT * FROM t` |
//! | [`insert`](SqlWriter::insert) | `INSERT INTO t (a, b) VALUES (?, ?)` |
//! | [`update_by_id`](SqlWriter::update_by_id) | `UPDATE t SET a = ?, b = ? WHERE id = ?` |
//! | [`delete_by_id`](SqlWriter::delete_by_id) | `DELETE FROM t WHERE id = ?` |
//!
//! # Column Eligibility
//!
//! A property is written by INSERT or UPDATE only if its declaring type is
//! persistable and it is not a relation, not transient, not static, not the
//! identity and not a list or map. `Column.insertable` and `Column.updatable`
//! then exclude it from the respective statement. An entity left with no
//! eligible column is rejected with [`MetadataError::NoWritableColumns`]
//! rather than rendered as `INSERT INTO t () VALUES ()` or `UPDATE t SET
//! WHERE ...`.
//!
//! # Quoting
//!
//! Table and derived column names go through an [`IdentifierQuoter`]. The
//! default [`NoQuoting`] emits bare identifiers. Column lists passed by the
//! caller are used verbatim and never quoted: the explicit columns of
//! [`update_by_id`](SqlWriter::update_by_id) as well as those of
//! [`where_clause`](SqlWriter::where_clause), [`asc`](SqlWriter::asc) and
//! [`desc`](SqlWriter::desc). Quote them beforehand when the quoter matters.

use std::{fmt, sync::Arc};

use crate::{
    accessor::{Accessor, build_accessors},
    error::MetadataError,
    meta::{Entity, EntityType}
};

/// Renders identifiers into statement text.
pub trait IdentifierQuoter: fmt::Debug + Send + Sync {
    fn quote(&self, identifier: &str) -> String;
}

/// Bare identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoQuoting;

impl IdentifierQuoter for NoQuoting {
    fn quote(&self, identifier: &str) -> String {
        identifier.to_owned()
    }
}

/// Double-quoted identifiers, embedded quotes doubled.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiQuoting;

impl IdentifierQuoter for AnsiQuoting {
    fn quote(&self, identifier: &str) -> String {
        format!("\"{}\"", identifier.replace('"', "\"\""))
    }
}

/// Statement being prepared, for eligibility checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOperation {
    Insert,
    Update
}

/// Whether `accessor` is bound by an INSERT or UPDATE of its entity.
#[must_use]
pub fn is_eligible<E>(accessor: &Accessor<E>, operation: WriteOperation) -> bool {
    if !accessor.is_declared_persistable()
        || accessor.is_relation()
        || accessor.is_transient()
        || accessor.is_static()
        || accessor.is_identity()
        || accessor.is_multi_valued()
    {
        return false;
    }
    let column = accessor.meta().column.unwrap_or_default();
    match operation {
        WriteOperation::Insert => column.insertable,
        WriteOperation::Update => column.updatable
    }
}

/// Generates statements for entity types.
#[derive(Debug, Clone)]
pub struct SqlWriter {
    quoter: Arc<dyn IdentifierQuoter>
}

impl Default for SqlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlWriter {
    /// Writer emitting bare identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::with_quoter(NoQuoting)
    }

    #[must_use]
    pub fn with_quoter(quoter: impl IdentifierQuoter + 'static) -> Self {
        Self {
            quoter: Arc::new(quoter)
        }
    }

    /// `SELECT * FROM <table> WHERE <id> = ?`
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] if the identity cannot be resolved.
    pub fn select_by_id<E: Entity>(&self) -> Result<String, MetadataError> {
        let ty = EntityType::<E>::of();
        Ok(format!(
            "SELECT * FROM {} WHERE {} = ?",
            self.table(&ty),
            self.identity_column(&ty)?
        ))
    }

    /// `SELECT * FROM <table>`
    #[must_use]
    pub fn select<E: Entity>(&self) -> String {
        format!("SELECT * FROM {}", self.table(&EntityType::<E>::of()))
    }

    /// `INSERT INTO <table> (<columns>) VALUES (<placeholders>)`
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] if the identity or a column name cannot be
    /// resolved, or no column is insertable.
    pub fn insert<E: Entity>(&self) -> Result<String, MetadataError> {
        let ty = EntityType::<E>::of();
        let columns = self.eligible_columns(&ty, WriteOperation::Insert)?;
        let placeholders = vec!["?"; columns.len()].join(", ");
        Ok(format!(
            "INSERT INTO {} ({}) VALUES ({placeholders})",
            self.table(&ty),
            columns.join(", ")
        ))
    }

    /// `UPDATE <table> SET <c1> = ?, <c2> = ? WHERE <id> = ?`
    ///
    /// With an empty `columns` slice every updatable column is set. Explicit
    /// columns are used verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] if the identity or a column name cannot be
    /// resolved, or `columns` is empty and no column is updatable.
    pub fn update_by_id<E: Entity>(&self, columns: &[&str]) -> Result<String, MetadataError> {
        let ty = EntityType::<E>::of();
        let columns = if columns.is_empty() {
            self.eligible_columns(&ty, WriteOperation::Update)?
        } else {
            columns.iter().map(|c| (*c).to_owned()).collect()
        };
        let assignments: Vec<String> = columns.iter().map(|c| format!("{c} = ?")).collect();
        Ok(format!(
            "UPDATE {} SET {} WHERE {} = ?",
            self.table(&ty),
            assignments.join(", "),
            self.identity_column(&ty)?
        ))
    }

    /// `DELETE FROM <table> WHERE <id> = ?`
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] if the identity cannot be resolved.
    pub fn delete_by_id<E: Entity>(&self) -> Result<String, MetadataError> {
        let ty = EntityType::<E>::of();
        Ok(format!(
            "DELETE FROM {} WHERE {} = ?",
            self.table(&ty),
            self.identity_column(&ty)?
        ))
    }

    /// ` WHERE a = ?` for one column, left-nested conjunction for more.
    /// Columns are not quoted.
    ///
    /// ```rust
    /// # use entity_mapper_core::sql::SqlWriter;
    /// let sql = SqlWriter::new();
    /// assert_eq!(sql.where_clause(&["a"]), " WHERE a = ?");
    /// assert_eq!(sql.where_clause(&["a", "b", "c"]), " WHERE ((a = ? AND b = ?) AND c = ?)");
    /// ```
    #[must_use]
    pub fn where_clause(&self, columns: &[&str]) -> String {
        let mut conditions = columns.iter().map(|c| format!("{c} = ?"));
        let Some(first) = conditions.next() else {
            return String::new();
        };
        let condition = conditions.fold(first, |acc, next| format!("({acc} AND {next})"));
        format!(" WHERE {condition}")
    }

    /// ` ORDER BY a, b ASC`, columns not quoted.
    #[must_use]
    pub fn asc(&self, columns: &[&str]) -> String {
        order_by(columns, "ASC")
    }

    /// ` ORDER BY a, b DESC`, columns not quoted.
    #[must_use]
    pub fn desc(&self, columns: &[&str]) -> String {
        order_by(columns, "DESC")
    }

    fn table<E>(&self, ty: &EntityType<E>) -> String {
        self.quoter.quote(&ty.table_name())
    }

    fn identity_column<E>(&self, ty: &EntityType<E>) -> Result<String, MetadataError> {
        Ok(self.quoter.quote(&ty.identity_accessor()?.column_name()?))
    }

    fn eligible_columns<E>(
        &self,
        ty: &EntityType<E>,
        operation: WriteOperation
    ) -> Result<Vec<String>, MetadataError> {
        let columns = build_accessors(ty)?
            .iter()
            .filter(|a| is_eligible(a, operation))
            .map(|a| a.column_name().map(|c| self.quoter.quote(&c)))
            .collect::<Result<Vec<_>, _>>()?;
        if columns.is_empty() {
            return Err(MetadataError::NoWritableColumns {
                entity:    ty.name().to_owned(),
                statement: match operation {
                    WriteOperation::Insert => "INSERT",
                    WriteOperation::Update => "UPDATE"
                }
            });
        }
        Ok(columns)
    }
}

fn order_by(columns: &[&str], direction: &str) -> String {
    if columns.is_empty() {
        return String::new();
    }
    format!(" ORDER BY {} {direction}", columns.join(", "))
}
