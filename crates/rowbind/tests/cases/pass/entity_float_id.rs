// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use rowbind::{Entity, FromColumn, ToColumn, Value};

#[derive(Entity)]
#[entity(id_type = "f64", id_derive(PartialEq, PartialOrd, Debug, Clone, Copy))]
pub struct Sample {
    pub reading: f64
}

fn main() {
    let low = SampleId(0.5);
    let high = SampleId::from(2.5);
    assert!(low < high);
    assert_ne!(low, high);
    assert_eq!(high.to_column(), Value::Float(2.5));
    assert_eq!(SampleId::from_column(&Value::Float(0.5)).unwrap(), low);
    assert_eq!(Sample::column_names(), vec!["reading"]);
}
