// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use rowbind::{Entity, FromColumn, ToColumn, Value};

#[derive(Entity)]
#[entity(
    table_naming = "snake_case",
    column_naming = "SCREAMING_SNAKE_CASE",
    id_type = "i64",
    id_derive(Eq, Hash, Copy, Debug, Display)
)]
pub struct OrderItem {
    pub sku: String,
    pub unit_price: i64,
}

fn main() {
    assert_eq!(OrderItem::table_name(), "order_item");
    assert_eq!(OrderItem::column_names(), vec!["SKU", "UNIT_PRICE"]);

    let id = OrderItemId(7);
    let copy = id;
    let mut seen = HashSet::new();
    seen.insert(id);
    assert!(seen.contains(&copy));
    assert_eq!(id.to_string(), "7");

    assert_eq!(id.to_column(), Value::Int(7));
    assert_eq!(OrderItemId::from_column(&Value::Int(9)).unwrap(), OrderItemId(9));
}
