// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shared fixtures: derived entities and an in-memory executor.

#![allow(dead_code)]

use std::{collections::VecDeque, sync::Mutex};

use chrono::NaiveDate;
use entity_mapper::prelude::*;

#[derive(Debug, Default, Clone, PartialEq, Entity)]
pub struct SimpleEntity {
    #[id]
    pub id:   Option<i64>,
    pub name: String
}

#[derive(Debug, Default, Entity)]
#[entity(table = "myTableName")]
pub struct CustomNameEntity {
    #[id]
    #[column(name = "customNameId")]
    pub id:   Option<i64>,
    #[column(name = "customName")]
    pub name: String
}

#[derive(Debug, Default, Entity)]
#[entity(table = "")]
pub struct EmptyNameEntity {
    #[id]
    #[column(name = "")]
    pub id:   Option<i64>,
    #[column(name = "")]
    pub name: String
}

#[derive(Debug, Default, Entity)]
#[entity(access = "property")]
pub struct CustomNamePropertyEntity {
    #[id]
    #[column(name = "propId")]
    id:     Option<i64>,
    #[column(name = "propName")]
    name:   String,
    active: bool
}

impl CustomNamePropertyEntity {
    pub fn get_id(&self) -> Option<i64> {
        self.id
    }

    pub fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    pub fn get_name(&self) -> String {
        self.name.clone()
    }

    pub fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

#[derive(Debug, Default, Entity)]
pub struct NonUpdatableEntity {
    #[id]
    pub id:      Option<i64>,
    pub name:    String,
    #[column(updatable = false)]
    pub created: String,
    #[column(insertable = false)]
    pub version: i64
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, SqlEnum)]
#[sql_enum(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Active,
    OnHold,
    #[sql_enum(rename = "closed")]
    Closed
}

#[derive(Debug, Default, Entity)]
pub struct EnumEntity {
    #[id]
    pub id:     Option<i64>,
    pub status: Status
}

#[derive(Debug, Default, Entity)]
#[entity(table = "primitives")]
pub struct MultiplePropertyEntity {
    #[id]
    pub id:     i64,
    pub count:  i32,
    pub price:  f64,
    pub active: bool,
    pub day:    Option<NaiveDate>,
    pub note:   Option<String>,
    #[transient]
    pub cache:  Vec<Vec<u8>>
}

#[derive(Debug, Default, Clone, PartialEq, Entity)]
#[entity(table = "customers")]
pub struct Customer {
    #[id]
    pub id:   Option<i64>,
    pub name: String
}

#[derive(Debug, Default, Clone, PartialEq, Entity)]
#[entity(table = "accounts")]
pub struct Account {
    #[id]
    pub id:     Option<i64>,
    pub status: Status
}

#[derive(Debug, Default, Clone, PartialEq, Entity)]
pub struct Line {
    #[id]
    pub id: Option<i64>
}

#[derive(Debug, Default, Entity)]
#[entity(table = "orders")]
pub struct EntityWithRelations {
    #[id]
    pub id:       Option<i64>,
    pub number:   String,
    #[many_to_one]
    pub customer: Option<Customer>,
    #[one_to_one]
    #[join_column(name = "acct_fk")]
    pub account:  Option<Account>,
    #[one_to_many]
    pub lines:    Vec<Line>
}

#[derive(Debug, Default, Entity)]
#[entity(mapped_superclass)]
pub struct Audited {
    #[id]
    pub id:         Option<i64>,
    pub created_by: String
}

#[derive(Debug, Default, Entity)]
#[entity(unmapped)]
pub struct Scratch {
    pub note: String
}

#[derive(Debug, Default, Entity)]
pub struct Invoice {
    #[inherit]
    pub audit:   Audited,
    #[inherit]
    pub scratch: Scratch,
    pub total:   f64
}

/// Statement seen by [`RecordingExecutor`].
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql:    String,
    pub params: Vec<Value>
}

/// Failure returned by [`RecordingExecutor`] when told to fail.
#[derive(Debug, thiserror::Error)]
#[error("executor failure: {0}")]
pub struct ExecutorFailure(pub String);

/// Executor keeping every statement in memory.
///
/// Queries answer with queued result sets, inserts with generated keys
/// counting up from 1.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    statements: Mutex<Vec<Statement>>,
    results:    Mutex<VecDeque<ResultSet>>,
    next_key:   Mutex<i64>,
    no_keys:    bool,
    failing:    bool
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts report no generated key.
    pub fn without_keys() -> Self {
        Self {
            no_keys: true,
            ..Self::default()
        }
    }

    /// Every statement fails.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Queue the answer to the next query.
    pub fn answer(&self, result: ResultSet) {
        self.results.lock().unwrap().push_back(result);
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.statements.lock().unwrap().clone()
    }

    pub fn last(&self) -> Statement {
        self.statements().pop().expect("no statement recorded")
    }

    fn record(&self, sql: &str, params: &[Value]) -> Result<(), ExecutorFailure> {
        self.statements.lock().unwrap().push(Statement {
            sql:    sql.to_owned(),
            params: params.to_vec()
        });
        if self.failing {
            return Err(ExecutorFailure(sql.to_owned()));
        }
        Ok(())
    }
}

impl Executor for RecordingExecutor {
    type Error = ExecutorFailure;

    fn query(&self, sql: &str, params: &[Value]) -> Result<ResultSet, ExecutorFailure> {
        self.record(sql, params)?;
        Ok(self
            .results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ResultSet::new(Vec::new())))
    }

    fn update(&self, sql: &str, params: &[Value]) -> Result<u64, ExecutorFailure> {
        self.record(sql, params)?;
        Ok(1)
    }

    fn insert(&self, sql: &str, params: &[Value]) -> Result<Option<Value>, ExecutorFailure> {
        self.record(sql, params)?;
        if self.no_keys {
            return Ok(None);
        }
        let mut next = self.next_key.lock().unwrap();
        *next += 1;
        Ok(Some(Value::I64(*next)))
    }
}
