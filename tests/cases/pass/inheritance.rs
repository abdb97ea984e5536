// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_mapper::prelude::*;

#[derive(Debug, Default, Entity)]
#[entity(mapped_superclass)]
pub struct Identified {
    #[id]
    #[column(name = "pk")]
    pub id: Option<i64>,
}

#[derive(Debug, Default, Entity)]
#[entity(mapped_superclass)]
pub struct Versioned {
    #[inherit]
    pub base: Identified,

    #[column(insertable = false)]
    pub version: i32,
}

#[derive(Debug, Default, Entity)]
#[entity(table = "documents")]
pub struct Document {
    #[inherit]
    pub versioned: Versioned,

    pub body: String,
}

fn main() {
    let sql = SqlWriter::new();
    assert_eq!(
        sql.insert::<Document>().unwrap(),
        "INSERT INTO documents (body) VALUES (?)"
    );
    assert_eq!(
        sql.update_by_id::<Document>(&[]).unwrap(),
        "UPDATE documents SET version = ?, body = ? WHERE pk = ?"
    );
}
