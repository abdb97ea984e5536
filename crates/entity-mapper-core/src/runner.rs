// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Save, delete and find orchestration.
//!
//! [`QueryRunner`] combines the [`SqlWriter`], the [`RowMaterializer`] and an
//! [`Executor`]. Saving decides between INSERT and UPDATE by asking a
//! [`NewEntityTester`] whether the entity is new:
//!
//! ```text
//!            is_new?
//!   ┌──────────┴──────────┐
//!  NEW                 EXISTING
//!   │                     │
//! INSERT insertable    UPDATE updatable
//! columns              columns, identity last
//!   │                     │
//! write generated      return affected
//! key, return 1        row count
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! let runner = QueryRunner::builder()
//!     .sql_writer(SqlWriter::with_quoter(AnsiQuoting))
//!     .build(&executor);
//!
//! let mut user = User { id: None, name: "Ada".into() };
//! runner.save(&mut user)?;          // INSERT, id written back
//! runner.save(&mut user)?;          // UPDATE
//! let found: Option<User> = runner.find_by_id(&user.id)?;
//! runner.delete::<User, _>(&user.id)?;
//! ```

use tracing::debug;

use crate::{
    accessor::build_accessors,
    error::PersistenceError,
    executor::Executor,
    materialize::{RowMaterializer, prepare},
    meta::{Entity, EntityType},
    sql::{SqlWriter, WriteOperation, is_eligible},
    value::{SqlValue, Value}
};

/// Decides whether an entity has been persisted before.
pub trait NewEntityTester {
    /// `true` if saving `entity` must INSERT.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the entity cannot be inspected.
    fn is_new<E: Entity>(&self, entity: &E) -> Result<bool, PersistenceError>;
}

/// New when the identity value is `NULL`.
///
/// Identities declared with a primitive type are never `NULL`, so entities
/// using them always count as existing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullIdentity;

impl NewEntityTester for NullIdentity {
    fn is_new<E: Entity>(&self, entity: &E) -> Result<bool, PersistenceError> {
        let identity = EntityType::<E>::of().identity_accessor()?;
        Ok(identity.get(entity)?.is_null())
    }
}

/// Entity-level persistence on top of an [`Executor`].
///
/// # Type Parameters
///
/// - `X`: statement executor
/// - `N`: new-entity test, [`NullIdentity`] by default
#[derive(Debug, Clone)]
pub struct QueryRunner<X, N = NullIdentity> {
    executor:     X,
    sql:          SqlWriter,
    materializer: RowMaterializer,
    tester:       N
}

impl<X: Executor> QueryRunner<X> {
    /// Runner with default writer, materializer and tester.
    pub fn new(executor: X) -> Self {
        QueryRunnerBuilder::default().build(executor)
    }
}

impl QueryRunner<(), NullIdentity> {
    /// Start configuring a runner.
    #[must_use]
    pub fn builder() -> QueryRunnerBuilder {
        QueryRunnerBuilder::default()
    }
}

impl<X: Executor, N: NewEntityTester> QueryRunner<X, N> {
    #[must_use]
    pub const fn executor(&self) -> &X {
        &self.executor
    }

    #[must_use]
    pub const fn sql_writer(&self) -> &SqlWriter {
        &self.sql
    }

    #[must_use]
    pub const fn materializer(&self) -> &RowMaterializer {
        &self.materializer
    }

    /// Insert a new entity or update an existing one.
    ///
    /// On insert the generated key is written into the identity and `1` is
    /// returned. On update the affected row count is returned.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if metadata cannot be resolved, a
    /// property cannot be read, the executor fails, or an insert yields no
    /// usable key.
    pub fn save<E: Entity>(&self, entity: &mut E) -> Result<u64, PersistenceError> {
        let ty = EntityType::<E>::of();
        let accessors = build_accessors(&ty)?;
        let identity = ty.identity_accessor()?;
        let is_new = self.tester.is_new(entity)?;
        let operation = if is_new {
            WriteOperation::Insert
        } else {
            WriteOperation::Update
        };

        let mut params = Vec::new();
        for accessor in accessors.iter().filter(|a| is_eligible(a, operation)) {
            params.push(bindable(accessor.get(entity)?));
        }

        if !is_new {
            params.push(bindable(identity.get(entity)?));
            let sql = self.sql.update_by_id::<E>(&[])?;
            debug!(entity = ty.name(), %sql, params = params.len(), "updating");
            return self
                .executor
                .update(&sql, &params)
                .map_err(PersistenceError::execution);
        }

        let sql = self.sql.insert::<E>()?;
        debug!(entity = ty.name(), %sql, params = params.len(), "inserting");
        let key = self
            .executor
            .insert(&sql, &params)
            .map_err(PersistenceError::execution)?
            .ok_or_else(|| PersistenceError::MissingGeneratedKey {
                entity: ty.name().to_owned()
            })?;
        let key = prepare(identity.name(), identity.value_type(), key)?;
        identity.set(entity, key)?;
        Ok(1)
    }

    /// Delete the row with the given primary key.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the identity cannot be resolved or the
    /// executor fails.
    pub fn delete<E: Entity, K: SqlValue>(&self, primary_key: &K) -> Result<u64, PersistenceError> {
        let sql = self.sql.delete_by_id::<E>()?;
        debug!(%sql, "deleting");
        self.executor
            .update(&sql, &[primary_key.to_value()])
            .map_err(PersistenceError::execution)
    }

    /// Load the entity with the given primary key.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the identity cannot be resolved, the
    /// executor fails, or the row cannot be materialized.
    pub fn find_by_id<E: Entity, K: SqlValue>(&self, primary_key: &K) -> Result<Option<E>, PersistenceError> {
        let sql = self.sql.select_by_id::<E>()?;
        debug!(%sql, "finding by id");
        let result = self
            .executor
            .query(&sql, &[primary_key.to_value()])
            .map_err(PersistenceError::execution)?;
        Ok(self.materializer.materialize_one(result)?)
    }

    /// Load every row of the entity's table.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the executor fails or a row cannot be
    /// materialized.
    pub fn find_all<E: Entity>(&self) -> Result<Vec<E>, PersistenceError> {
        let sql = self.sql.select::<E>();
        debug!(%sql, "finding all");
        let result = self
            .executor
            .query(&sql, &[])
            .map_err(PersistenceError::execution)?;
        Ok(self.materializer.materialize_all(result)?)
    }
}

/// Enum constants are bound by name as text.
fn bindable(value: Value) -> Value {
    match value {
        Value::Enum(name) => Value::Text(name.to_owned()),
        other => other
    }
}

/// Configures a [`QueryRunner`].
#[derive(Debug, Clone, Default)]
pub struct QueryRunnerBuilder<N = NullIdentity> {
    sql:          SqlWriter,
    materializer: RowMaterializer,
    tester:       N
}

impl<N> QueryRunnerBuilder<N> {
    #[must_use]
    pub fn sql_writer(mut self, sql: SqlWriter) -> Self {
        self.sql = sql;
        self
    }

    #[must_use]
    pub fn materializer(mut self, materializer: RowMaterializer) -> Self {
        self.materializer = materializer;
        self
    }

    /// Replace the new-entity test.
    #[must_use]
    pub fn entity_tester<M: NewEntityTester>(self, tester: M) -> QueryRunnerBuilder<M> {
        QueryRunnerBuilder {
            sql: self.sql,
            materializer: self.materializer,
            tester
        }
    }

    /// Finish with the executor to run statements on.
    pub fn build<X: Executor>(self, executor: X) -> QueryRunner<X, N> {
        QueryRunner {
            executor,
            sql: self.sql,
            materializer: self.materializer,
            tester: self.tester
        }
    }
}
