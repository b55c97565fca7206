// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use serde_json::{Value, json};
use sieve::{Describable, Error, Field, Handler, Node, Serializer};

fn masked(_: &Field<'_>) -> Value {
    json!("****")
}

pub struct Plain;

impl Handler for Plain {
    fn serialize(&self, serializer: &Serializer<'_>, node: &Node<'_>) -> Result<Value, Error> {
        serializer.serialize_object_default(node)
    }
}

#[derive(Describable)]
#[describe(route = "cards", expand = false, include_null, expose_meta = false, handler = "Plain")]
pub struct Card {
    pub id: u32,

    #[describe(strategy = "masked")]
    pub number: String,
}

fn main() {
    let card = Card { id: 1, number: "4111".into() };
    let descriptor = card.descriptor();
    assert_eq!(descriptor.route_name(), Some("cards"));
    assert!(!descriptor.expands());
    assert!(descriptor.includes_null());
    assert!(!descriptor.exposes_meta());
    assert!(descriptor.custom_handler().is_some());
    assert!(descriptor.strategy_for("number").is_some());
    assert_eq!(card.type_name(), "Card");
}
