// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_mapper::prelude::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, SqlEnum)]
#[sql_enum(rename_all = "snake_case")]
pub enum Level {
    #[default]
    Low,
    VeryHigh,
    #[sql_enum(rename = "MID")]
    Medium,
}

#[derive(Debug, Default, Entity)]
pub struct Alert {
    #[id]
    pub id: Option<i64>,
    pub level: Level,
    pub previous: Option<Level>,
}

fn main() {
    assert_eq!(Level::CONSTANTS, ["low", "very_high", "MID"]);
    assert_eq!(Level::VeryHigh.name(), "very_high");
    assert_eq!(Level::from_name("MID"), Some(Level::Medium));
    assert_eq!(Level::Low.to_value(), Value::Enum("low"));
    assert_eq!(Level::from_value(Value::from("very_high")).unwrap(), Level::VeryHigh);
    assert!(Level::from_value(Value::from("LOW")).is_err());

    let sql = SqlWriter::new();
    assert_eq!(
        sql.insert::<Alert>().unwrap(),
        "INSERT INTO Alert (level, previous) VALUES (?, ?)"
    );
}
