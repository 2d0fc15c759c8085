// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use rowbind::Entity;

mod naming {
    pub fn plural(name: &str) -> String {
        format!("{}s", name.to_lowercase())
    }

    pub fn prefixed(name: &str) -> String {
        format!("c_{name}")
    }
}

#[derive(Entity)]
#[entity(table_naming = "naming::plural", column_naming = "crate::naming::prefixed", id_name = "InvoiceKey")]
pub struct Invoice {
    pub total: i64,
    pub r#type: String,
}

fn main() {
    assert_eq!(Invoice::table_name(), "invoices");
    assert_eq!(Invoice::column_names(), vec!["c_total", "c_type"]);
    let _key: <Invoice as Entity>::Id = InvoiceKey(rowbind::BigInt::from(1));
}
