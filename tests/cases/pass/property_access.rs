// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use entity_mapper::prelude::*;

#[derive(Debug, Default, Entity)]
pub struct Owner {
    #[id]
    pub id: Option<i64>,
}

#[derive(Debug, Default, Entity)]
#[entity(access = "property", table = "pets")]
pub struct Pet {
    #[id]
    id: Option<i64>,

    #[column(name = "pet_name")]
    name: String,

    vaccinated: bool,

    #[many_to_one]
    owner: Option<Owner>,

    #[transient]
    mood: String,
}

impl Pet {
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

    pub fn is_vaccinated(&self) -> bool {
        self.vaccinated
    }

    pub fn set_vaccinated(&mut self, vaccinated: bool) {
        self.vaccinated = vaccinated;
    }

    pub fn set_owner(&mut self, owner: Option<Owner>) {
        self.owner = owner;
    }
}

fn main() {
    let sql = SqlWriter::new();
    assert_eq!(
        sql.insert::<Pet>().unwrap(),
        "INSERT INTO pets (pet_name, vaccinated) VALUES (?, ?)"
    );
    let _ = Pet::default().mood;
}
