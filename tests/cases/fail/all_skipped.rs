// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use sieve::Describable;

#[derive(Describable)]
pub struct Hidden {
    #[describe(skip)]
    pub secret: String,
}

fn main() {}
