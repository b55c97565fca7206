// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use sieve::Describable;

#[derive(Describable)]
#[describe(rout = "models")]
pub struct Model {
    pub id: u32,
}

fn main() {}
