// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT
#![allow(dead_code)]
use rowbind::ToRow;

#[derive(ToRow)]
pub struct Marker;

fn main() {}
