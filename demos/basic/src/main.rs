// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Basic rowbind example
//!
//! Demonstrates:
//! - `FromRow` / `ToRow` against an in-memory result set
//! - `Entity` metadata for building a SQL statement
//! - Typed identifiers via `IdOf`
//!
//! Run with `RUST_LOG=rowbind_core=trace` to see the runtime's row events.

use rowbind::{Entity, FromRow, IdOf, RowError, ToRow, Value, decode_row, encode_row};
use tracing_subscriber::EnvFilter;

// ============================================================================
// Entity Definition
// ============================================================================

/// A user row.
#[derive(Debug, Clone, PartialEq, FromRow, ToRow, Entity)]
#[entity(
    table_naming = "snake_case",
    id_type = "i64",
    id_derive(Eq, Ord, Hash, Debug, Clone, Copy, Display)
)]
pub struct UserAccount {
    /// Primary key.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Optional contact address.
    pub email: Option<String>,

    /// Whether the account may log in.
    pub active: bool
}

impl UserAccount {
    fn key(&self) -> IdOf<Self> {
        UserAccountId(self.id)
    }
}

// ============================================================================
// Fake Driver
// ============================================================================

/// Rows as a driver would return them for `SELECT * FROM user_account`.
fn result_set() -> Vec<Vec<Value>> {
    vec![
        vec![
            Value::Int(1),
            Value::Text("ada".into()),
            Value::Text("ada@example.com".into()),
            Value::Bool(true),
        ],
        vec![Value::Int(2), Value::Text("brian".into()), Value::Null, Value::Int(0)],
        vec![Value::Int(3), Value::Null, Value::Null, Value::Bool(true)],
    ]
}

fn insert_statement<E: Entity>() -> String {
    let columns = E::column_names();
    let placeholders = (1..=columns.len())
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({placeholders})",
        E::table_name(),
        columns.join(", ")
    )
}

// ============================================================================
// Main
// ============================================================================

fn main() -> Result<(), RowError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("demo_basic=info"))
        )
        .init();

    tracing::info!(sql = %insert_statement::<UserAccount>(), "prepared insert");

    let mut users = Vec::new();
    for row in result_set() {
        match decode_row::<UserAccount>(&row) {
            Ok(user) => {
                tracing::info!(id = %user.key(), name = %user.name, "decoded user");
                users.push(user);
            }
            Err(err) => tracing::warn!(error = %err, column = ?err.position(), "skipping row")
        }
    }

    for user in &users {
        let params = encode_row(user);
        tracing::info!(
            id = %user.key(),
            columns = params.len(),
            expected = <UserAccount as ToRow>::COLUMNS,
            "bound insert parameters"
        );
    }

    if let Some(first) = users.first() {
        let again = decode_row::<UserAccount>(&encode_row(first))?;
        tracing::info!(round_trip = again == *first, "re-decoded first user");
    }
    tracing::info!(
        decoder_columns = <UserAccount as FromRow>::COLUMNS,
        metadata_columns = UserAccount::column_names().len(),
        "column counts"
    );

    Ok(())
}
