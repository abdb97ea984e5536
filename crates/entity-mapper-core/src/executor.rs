// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Statement execution boundary.
//!
//! The crate never talks to a database itself. [`QueryRunner`] hands every
//! statement to an [`Executor`], which owns connections, pooling and
//! transactions.
//!
//! [`QueryRunner`]: crate::runner::QueryRunner

use crate::{result::ResultSet, value::Value};

/// Runs parameterized statements.
pub trait Executor {
    /// Driver error, wrapped into
    /// [`PersistenceError::Execution`](crate::error::PersistenceError::Execution).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run a query and return its rows.
    ///
    /// # Errors
    ///
    /// Returns the driver error.
    fn query(&self, sql: &str, params: &[Value]) -> Result<ResultSet, Self::Error>;

    /// Run an UPDATE or DELETE and return the affected row count.
    ///
    /// # Errors
    ///
    /// Returns the driver error.
    fn update(&self, sql: &str, params: &[Value]) -> Result<u64, Self::Error>;

    /// Run an INSERT and return the generated key, if the driver reports one.
    ///
    /// # Errors
    ///
    /// Returns the driver error.
    fn insert(&self, sql: &str, params: &[Value]) -> Result<Option<Value>, Self::Error>;
}

impl<X: Executor + ?Sized> Executor for &X {
    type Error = X::Error;

    fn query(&self, sql: &str, params: &[Value]) -> Result<ResultSet, Self::Error> {
        (**self).query(sql, params)
    }

    fn update(&self, sql: &str, params: &[Value]) -> Result<u64, Self::Error> {
        (**self).update(sql, params)
    }

    fn insert(&self, sql: &str, params: &[Value]) -> Result<Option<Value>, Self::Error> {
        (**self).insert(sql, params)
    }
}
