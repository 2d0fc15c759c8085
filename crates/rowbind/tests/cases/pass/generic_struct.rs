// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use rowbind::{FromRow, ToRow, Value, decode_row, encode_row};

#[derive(Debug, PartialEq, FromRow, ToRow)]
struct Labeled<T> {
    label: String,
    value: T,
}

fn main() {
    let row = vec![Value::Text("answer".into()), Value::Int(42)];
    let decoded: Labeled<i64> = decode_row(&row).unwrap();
    assert_eq!(decoded.value, 42);
    assert_eq!(encode_row(&decoded), row);

    let flag: Labeled<bool> = decode_row(&[Value::Text("on".into()), Value::Bool(true)]).unwrap();
    assert!(flag.value);
}
