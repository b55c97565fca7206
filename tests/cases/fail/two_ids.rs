// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use sieve::Describable;

#[derive(Describable)]
pub struct Order {
    #[describe(id)]
    pub number: String,

    #[describe(id)]
    pub code: String,
}

fn main() {}
