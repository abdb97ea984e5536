// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_mapper::prelude::*;

#[derive(Debug, Default, Entity)]
pub struct Author {
    #[id]
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Debug, Default, Entity)]
pub struct Chapter {
    #[id]
    pub id: Option<i64>,
}

#[derive(Debug, Default, Entity)]
#[entity(table = "books")]
pub struct Book {
    #[id]
    pub id: Option<i64>,

    #[many_to_one]
    #[join_column(name = "written_by")]
    pub author: Option<Author>,

    pub title: String,

    #[one_to_many]
    pub chapters: Vec<Chapter>,
}

fn main() {
    let sql = SqlWriter::new();
    assert_eq!(sql.insert::<Book>().unwrap(), "INSERT INTO books (title) VALUES (?)");
}
