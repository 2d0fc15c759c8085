// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT
#![allow(dead_code)]
use rowbind::Entity;

#[derive(Entity)]
#[entity(id_name = "Person")]
pub struct Person { name: String }

fn main() {}
