// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Tabular query results.

use crate::value::Value;

/// Metadata of one result column.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnDescriptor {
    /// Column label, possibly empty.
    pub label: String,
    /// Underlying column name.
    pub name:  String,
    /// Table the column was selected from, if the driver reports it.
    pub table: Option<String>
}

impl ColumnDescriptor {
    /// Column with the given name and no label.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            label: String::new(),
            name:  name.into(),
            table: None
        }
    }

    #[must_use]
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn from_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Label, falling back to the name when the label is empty.
    #[must_use]
    pub fn effective_name(&self) -> &str {
        if self.label.is_empty() {
            &self.name
        } else {
            &self.label
        }
    }

    /// Attributed to `table`, compared case-insensitively.
    #[must_use]
    pub fn belongs_to(&self, table: &str) -> bool {
        self.table
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case(table))
    }
}

/// Column descriptors plus rows of cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    pub columns: Vec<ColumnDescriptor>,
    pub rows:    Vec<Vec<Value>>
}

impl ResultSet {
    #[must_use]
    pub const fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self {
            columns,
            rows: Vec::new()
        }
    }

    /// Result with unlabeled, unattributed columns.
    #[must_use]
    pub fn with_columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self::new(names.into_iter().map(ColumnDescriptor::new).collect())
    }

    /// Append a row.
    #[must_use]
    pub fn row(mut self, cells: impl IntoIterator<Item = Value>) -> Self {
        self.push_row(cells);
        self
    }

    pub fn push_row(&mut self, cells: impl IntoIterator<Item = Value>) {
        self.rows.push(cells.into_iter().collect());
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }
}
