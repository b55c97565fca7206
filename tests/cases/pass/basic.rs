// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use sieve::Describable;
use uuid::Uuid;

#[derive(Describable)]
#[describe(route = "users")]
pub struct User {
    #[describe(id)]
    pub id: Uuid,

    pub name: String,

    pub email: Option<String>,

    #[describe(skip)]
    pub password_hash: String,

    pub created_at: DateTime<Utc>,
}

fn main() {
    let user = User {
        id: Uuid::now_v7(),
        name: "Ada".into(),
        email: None,
        password_hash: "hash".into(),
        created_at: Utc::now(),
    };
    let descriptor = user.descriptor();
    assert_eq!(descriptor.identifier(), "id");
    assert!(!descriptor.declares("password_hash"));
    assert!(user.field("email").is_some());
    assert!(user.field("password_hash").is_none());
}
