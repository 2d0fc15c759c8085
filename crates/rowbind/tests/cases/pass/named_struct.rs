// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use rowbind::{FromRow, ToRow, Value, decode_row, encode_row};

#[derive(Debug, PartialEq, FromRow, ToRow)]
pub struct Entity {
    pub e_field: String,
    pub e_field2: i32,
    pub e_field3: bool,
}

fn main() {
    let row = vec![Value::Text("x".into()), Value::Int(5), Value::Bool(true)];
    let decoded: Entity = decode_row(&row).unwrap();
    assert_eq!(
        decoded,
        Entity {
            e_field: "x".to_string(),
            e_field2: 5,
            e_field3: true,
        }
    );
    assert_eq!(encode_row(&decoded), row);
    assert_eq!(<Entity as FromRow>::COLUMNS, 3);
}
