// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

mod common;

use common::*;
use entity_mapper::{NewEntityTester, PersistenceError, prelude::*};

#[test]
fn save_inserts_then_updates() {
    let executor = RecordingExecutor::new();
    let runner = QueryRunner::new(&executor);
    let mut entity = SimpleEntity {
        id:   None,
        name: "first".into()
    };

    assert_eq!(runner.save(&mut entity).unwrap(), 1);
    assert_eq!(entity.id, Some(1));
    assert_eq!(
        executor.last(),
        Statement {
            sql:    "INSERT INTO SimpleEntity (name) VALUES (?)".into(),
            params: vec![Value::from("first")]
        }
    );

    entity.name = "second".into();
    assert_eq!(runner.save(&mut entity).unwrap(), 1);
    assert_eq!(
        executor.last(),
        Statement {
            sql:    "UPDATE SimpleEntity SET name = ? WHERE id = ?".into(),
            params: vec![Value::from("second"), Value::I64(1)]
        }
    );
    assert_eq!(executor.statements().len(), 2);
}

#[test]
fn save_binds_only_eligible_columns() {
    let executor = RecordingExecutor::new();
    let runner = QueryRunner::new(&executor);
    let mut entity = NonUpdatableEntity {
        id:      None,
        name:    "n".into(),
        created: "today".into(),
        version: 3
    };

    runner.save(&mut entity).unwrap();
    assert_eq!(
        executor.last().params,
        [Value::from("n"), Value::from("today")]
    );

    runner.save(&mut entity).unwrap();
    assert_eq!(
        executor.last().params,
        [Value::from("n"), Value::I64(3), Value::I64(1)]
    );
}

#[test]
fn enums_are_bound_as_constant_names() {
    let executor = RecordingExecutor::new();
    let runner = QueryRunner::new(&executor);
    let mut entity = EnumEntity {
        id:     None,
        status: Status::OnHold
    };

    runner.save(&mut entity).unwrap();
    assert_eq!(
        executor.last(),
        Statement {
            sql:    "INSERT INTO EnumEntity (status) VALUES (?)".into(),
            params: vec![Value::Text("ON_HOLD".into())]
        }
    );
}

#[test]
fn primitive_identity_is_never_new() {
    let executor = RecordingExecutor::new();
    let runner = QueryRunner::new(&executor);
    let mut entity = MultiplePropertyEntity::default();

    runner.save(&mut entity).unwrap();
    assert!(executor.last().sql.starts_with("UPDATE primitives SET"));
}

#[test]
fn missing_generated_key_fails() {
    let executor = RecordingExecutor::without_keys();
    let runner = QueryRunner::new(&executor);
    let mut entity = SimpleEntity::default();

    let err = runner.save(&mut entity).unwrap_err();
    assert!(matches!(
        err,
        PersistenceError::MissingGeneratedKey { ref entity } if entity == "SimpleEntity"
    ));
    assert_eq!(entity.id, None);
}

#[test]
fn executor_failures_are_wrapped() {
    let executor = RecordingExecutor::failing();
    let runner = QueryRunner::new(&executor);

    let err = runner.save(&mut SimpleEntity::default()).unwrap_err();
    assert!(err.is_execution());
    let err = runner.find_all::<SimpleEntity>().unwrap_err();
    assert!(err.is_execution());
}

#[test]
fn save_requires_identity() {
    let executor = RecordingExecutor::new();
    let runner = QueryRunner::new(&executor);

    let err = runner.save(&mut Scratch::default()).unwrap_err();
    assert!(matches!(err, PersistenceError::Metadata(_)));
    assert!(executor.statements().is_empty());
}

#[test]
fn inherited_identity_receives_generated_key() {
    let executor = RecordingExecutor::new();
    let runner = QueryRunner::new(&executor);
    let mut invoice = Invoice {
        total: 12.5,
        ..Invoice::default()
    };

    runner.save(&mut invoice).unwrap();
    assert_eq!(invoice.audit.id, Some(1));
    assert_eq!(
        executor.last().sql,
        "INSERT INTO Invoice (created_by, total) VALUES (?, ?)"
    );
}

#[test]
fn property_access_save() {
    let executor = RecordingExecutor::new();
    let runner = QueryRunner::new(&executor);
    let mut entity = CustomNamePropertyEntity::default();
    entity.set_name("prop".into());
    entity.set_active(true);

    runner.save(&mut entity).unwrap();
    assert_eq!(entity.get_id(), Some(1));
    assert_eq!(
        executor.last().params,
        [Value::from("prop"), Value::Bool(true)]
    );
}

#[test]
fn find_and_delete_by_id() {
    let executor = RecordingExecutor::new();
    executor.answer(ResultSet::with_columns(["customNameId", "customName"]).row([
        Value::I64(5),
        Value::from("five")
    ]));
    let runner = QueryRunner::new(&executor);

    let found: Option<CustomNameEntity> = runner.find_by_id(&5_i64).unwrap();
    let found = found.unwrap();
    assert_eq!(found.name, "five");
    assert_eq!(
        executor.last(),
        Statement {
            sql:    "SELECT * FROM myTableName WHERE customNameId = ?".into(),
            params: vec![Value::I64(5)]
        }
    );

    let missing: Option<CustomNameEntity> = runner.find_by_id(&6_i64).unwrap();
    assert!(missing.is_none());

    assert_eq!(runner.delete::<CustomNameEntity, _>(&5_i64).unwrap(), 1);
    assert_eq!(
        executor.last().sql,
        "DELETE FROM myTableName WHERE customNameId = ?"
    );
}

#[test]
fn find_all_materializes_every_row() {
    let executor = RecordingExecutor::new();
    executor.answer(
        ResultSet::with_columns(["id", "name"])
            .row([Value::I64(1), Value::from("a")])
            .row([Value::I64(2), Value::from("b")])
    );
    let runner = QueryRunner::new(&executor);

    let all: Vec<SimpleEntity> = runner.find_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[1].name, "b");
    assert_eq!(executor.last().sql, "SELECT * FROM SimpleEntity");
}

struct AlwaysNew;

impl NewEntityTester for AlwaysNew {
    fn is_new<E: Entity>(&self, _entity: &E) -> Result<bool, PersistenceError> {
        Ok(true)
    }
}

#[test]
fn builder_configures_quoting_and_tester() {
    let executor = RecordingExecutor::new();
    let runner = QueryRunner::builder()
        .sql_writer(SqlWriter::with_quoter(AnsiQuoting))
        .entity_tester(AlwaysNew)
        .build(&executor);
    let mut entity = SimpleEntity {
        id:   Some(40),
        name: "forced".into()
    };

    runner.save(&mut entity).unwrap();
    assert_eq!(
        executor.last().sql,
        "INSERT INTO \"SimpleEntity\" (\"name\") VALUES (?)"
    );
    assert_eq!(entity.id, Some(1));
}
