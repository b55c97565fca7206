// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use sieve::Describable;

#[derive(Describable)]
pub struct Order {
    #[describe(id)]
    pub number: String,
    pub r#type: String,
}

#[derive(Describable)]
pub struct Line {
    pub sku: String,
    pub quantity: u32,
}

fn main() {
    let order = Order { number: "A-1".into(), r#type: "web".into() };
    assert_eq!(order.descriptor().identifier(), "number");
    assert!(order.descriptor().declares("type"));

    let line = Line { sku: "X".into(), quantity: 2 };
    assert_eq!(line.descriptor().identifier(), "sku");
}
