// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_mapper::prelude::*;

#[derive(Debug, Default, Entity)]
#[entity(table = "users")]
pub struct User {
    #[id]
    pub id: Option<i64>,

    #[column(name = "user_name")]
    pub name: String,

    #[column(updatable = false)]
    pub created: Option<chrono::NaiveDateTime>,

    #[transient]
    pub session: std::collections::HashSet<u32>,
}

fn main() {
    let sql = SqlWriter::new();
    assert_eq!(
        sql.insert::<User>().unwrap(),
        "INSERT INTO users (user_name, created) VALUES (?, ?)"
    );
    assert_eq!(
        sql.update_by_id::<User>(&[]).unwrap(),
        "UPDATE users SET user_name = ? WHERE id = ?"
    );
}
