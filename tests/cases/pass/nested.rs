// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use sieve::{Describable, Field};

#[derive(Describable)]
pub struct Team {
    pub id: u64,
    pub name: String,
}

#[derive(Describable)]
#[describe(route = "people")]
pub struct Person {
    pub id: u64,

    #[describe(nested)]
    pub team: Team,

    #[describe(nested)]
    pub mentor: Option<Box<Person>>,

    #[describe(many)]
    pub reports: Vec<Person>,

    #[describe(many)]
    pub former_teams: Option<Vec<Team>>,
}

fn main() {
    let person = Person {
        id: 1,
        team: Team { id: 2, name: "core".into() },
        mentor: None,
        reports: Vec::new(),
        former_teams: None,
    };
    assert!(matches!(person.field("team"), Some(Field::Object(_))));
    assert!(matches!(person.field("reports"), Some(Field::List(_))));
    assert!(!person.field("mentor").is_some_and(|field| field.is_truthy()));
    assert!(!person.field("former_teams").is_some_and(|field| field.is_truthy()));
}
