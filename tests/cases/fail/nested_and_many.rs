// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use sieve::Describable;

#[derive(Describable)]
pub struct Team {
    pub id: u32,

    #[describe(nested, many)]
    pub members: Vec<Team>,
}

fn main() {}
