// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use rowbind::{FromRow, ToRow, Value, decode_row, encode_row};

#[derive(Debug, PartialEq, FromRow, ToRow)]
struct Measurement(String, f64, Option<i64>);

fn main() {
    let m = Measurement("temp".into(), 21.5, None);
    let row = encode_row(&m);
    assert_eq!(row[2], Value::Null);
    let back: Measurement = decode_row(&row).unwrap();
    assert_eq!(back, m);
}
