// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

mod common;

use common::*;
use entity_mapper::{
    AccessMode, MetadataError, prelude::*, resolve_column_name, resolve_identity_accessor,
    resolve_table_name
};

#[test]
fn simple_entity_statements() {
    let sql = SqlWriter::new();
    assert_eq!(
        sql.insert::<SimpleEntity>().unwrap(),
        "INSERT INTO SimpleEntity (name) VALUES (?)"
    );
    assert_eq!(
        sql.update_by_id::<SimpleEntity>(&[]).unwrap(),
        "UPDATE SimpleEntity SET name = ? WHERE id = ?"
    );
    assert_eq!(
        sql.select_by_id::<SimpleEntity>().unwrap(),
        "SELECT * FROM SimpleEntity WHERE id = ?"
    );
    assert_eq!(sql.select::<SimpleEntity>(), "SELECT * FROM SimpleEntity");
    assert_eq!(
        sql.delete_by_id::<SimpleEntity>().unwrap(),
        "DELETE FROM SimpleEntity WHERE id = ?"
    );
}

#[test]
fn custom_table_and_column_names() {
    let sql = SqlWriter::new();
    assert_eq!(
        sql.delete_by_id::<CustomNameEntity>().unwrap(),
        "DELETE FROM myTableName WHERE customNameId = ?"
    );
    assert_eq!(
        sql.insert::<CustomNameEntity>().unwrap(),
        "INSERT INTO myTableName (customName) VALUES (?)"
    );
    assert_eq!(
        sql.update_by_id::<CustomNameEntity>(&[]).unwrap(),
        "UPDATE myTableName SET customName = ? WHERE customNameId = ?"
    );
}

#[test]
fn empty_overrides_equal_no_override() {
    let sql = SqlWriter::new();
    assert_eq!(resolve_table_name::<EmptyNameEntity>(), "EmptyNameEntity");
    assert_eq!(
        sql.update_by_id::<EmptyNameEntity>(&[]).unwrap(),
        "UPDATE EmptyNameEntity SET name = ? WHERE id = ?"
    );
}

#[test]
fn property_access_uses_bean_names() {
    let sql = SqlWriter::new();
    assert_eq!(
        sql.insert::<CustomNamePropertyEntity>().unwrap(),
        "INSERT INTO CustomNamePropertyEntity (propName, active) VALUES (?, ?)"
    );
    assert_eq!(
        sql.select_by_id::<CustomNamePropertyEntity>().unwrap(),
        "SELECT * FROM CustomNamePropertyEntity WHERE propId = ?"
    );

    let identity = resolve_identity_accessor::<CustomNamePropertyEntity>().unwrap();
    assert_eq!(identity.mode(), AccessMode::Property);
    assert_eq!(resolve_column_name(&identity).unwrap(), "propId");
}

#[test]
fn eligibility_flags() {
    let sql = SqlWriter::new();
    assert_eq!(
        sql.insert::<NonUpdatableEntity>().unwrap(),
        "INSERT INTO NonUpdatableEntity (name, created) VALUES (?, ?)"
    );
    assert_eq!(
        sql.update_by_id::<NonUpdatableEntity>(&[]).unwrap(),
        "UPDATE NonUpdatableEntity SET name = ?, version = ? WHERE id = ?"
    );
}

#[test]
fn explicit_update_columns() {
    let sql = SqlWriter::new();
    assert_eq!(
        sql.update_by_id::<SimpleEntity>(&["name", "other"]).unwrap(),
        "UPDATE SimpleEntity SET name = ?, other = ? WHERE id = ?"
    );
}

#[test]
fn relations_and_transients_are_not_written() {
    let sql = SqlWriter::new();
    assert_eq!(
        sql.insert::<EntityWithRelations>().unwrap(),
        "INSERT INTO orders (number) VALUES (?)"
    );
    assert_eq!(
        sql.insert::<MultiplePropertyEntity>().unwrap(),
        "INSERT INTO primitives (count, price, active, day, note) VALUES (?, ?, ?, ?, ?)"
    );
}

#[test]
fn inherited_members_from_mapped_superclass() {
    let sql = SqlWriter::new();
    assert_eq!(
        sql.insert::<Invoice>().unwrap(),
        "INSERT INTO Invoice (created_by, total) VALUES (?, ?)"
    );
    assert_eq!(
        sql.delete_by_id::<Invoice>().unwrap(),
        "DELETE FROM Invoice WHERE id = ?"
    );
}

#[test]
fn supertype_without_identity_fails() {
    let err = SqlWriter::new().insert::<Scratch>().unwrap_err();
    assert_eq!(
        err,
        MetadataError::MissingIdentity {
            entity: "Scratch".into()
        }
    );
}

#[test]
fn ansi_quoting() {
    let sql = SqlWriter::with_quoter(AnsiQuoting);
    assert_eq!(
        sql.insert::<CustomNameEntity>().unwrap(),
        "INSERT INTO \"myTableName\" (\"customName\") VALUES (?)"
    );
    assert_eq!(
        sql.delete_by_id::<CustomNameEntity>().unwrap(),
        "DELETE FROM \"myTableName\" WHERE \"customNameId\" = ?"
    );
}

#[test]
fn where_and_order_fragments() {
    let sql = SqlWriter::new();
    let query = format!(
        "{}{}{}",
        sql.select::<SimpleEntity>(),
        sql.where_clause(&["name", "id"]),
        sql.desc(&["id"])
    );
    assert_eq!(
        query,
        "SELECT * FROM SimpleEntity WHERE (name = ? AND id = ?) ORDER BY id DESC"
    );
}

#[test]
fn identity_only_entity_is_rejected_for_writes() {
    let sql = SqlWriter::new();
    assert_eq!(
        sql.insert::<Line>().unwrap_err(),
        MetadataError::NoWritableColumns {
            entity:    "Line".into(),
            statement: "INSERT"
        }
    );
    assert!(matches!(
        sql.update_by_id::<Line>(&[]),
        Err(MetadataError::NoWritableColumns { statement: "UPDATE", .. })
    ));
    assert_eq!(sql.select_by_id::<Line>().unwrap(), "SELECT * FROM Line WHERE id = ?");
}

#[test]
fn ansi_quoting_leaves_fragment_columns_verbatim() {
    let sql = SqlWriter::with_quoter(AnsiQuoting);
    assert_eq!(
        format!("{}{}{}", sql.select::<SimpleEntity>(), sql.where_clause(&["name"]), sql.asc(&["id"])),
        "SELECT * FROM \"SimpleEntity\" WHERE name = ? ORDER BY id ASC"
    );
}
