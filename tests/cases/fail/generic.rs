// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use sieve::Describable;

#[derive(Describable)]
pub struct Wrapper<T> {
    pub id: u32,
    pub value: T,
}

fn main() {}
