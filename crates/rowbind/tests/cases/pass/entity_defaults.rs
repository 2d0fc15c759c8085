// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use rowbind::{BigInt, Entity, IdOf};

#[derive(Entity)]
pub struct Person {
    pub name: String,
    pub age: i32,
}

fn main() {
    assert_eq!(Person::table_name(), "Person");
    assert_eq!(Person::column_names(), vec!["name", "age"]);

    let a: IdOf<Person> = PersonId(BigInt::from(1));
    let b = PersonId::from(BigInt::from(2));
    assert!(a < b);
    assert_ne!(a, b);
    println!("{a:?}");
}
