// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT
#![allow(dead_code)]
use rowbind::Entity;

#[derive(Entity)]
pub struct Pair(i64, String);

fn main() {}
