// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Row-level decoding and encoding.
//!
//! A row is an ordered slice of [`Value`]s. Decoding walks it with a
//! [`RowParser`], a cursor that only moves forward: every
//! [`RowParser::next_column`] call decodes the current column and advances.
//! Derived [`FromRow`] impls consume one column per field in declaration
//! order, and derived [`ToRow`] impls emit one value per field in the same
//! order, so `decode_row(&encode_row(&v))` reconstructs `v`.
//!
//! # Example
//!
//! ```rust
//! use rowbind_core::{Value, decode_row, encode_row};
//!
//! let values = encode_row(&("alice".to_string(), 30_i32));
//! assert_eq!(values, vec![Value::Text("alice".into()), Value::Int(30)]);
//!
//! let decoded: (String, i32) = decode_row(&values).unwrap();
//! assert_eq!(decoded, ("alice".to_string(), 30));
//! ```

use crate::{FromColumn, RowError, ToColumn, Value};

/// Forward-only cursor over the columns of one row.
#[derive(Debug, Clone)]
pub struct RowParser<'r> {
    values:   &'r [Value],
    position: usize
}

impl<'r> RowParser<'r> {
    /// Create a parser positioned at the first column.
    #[must_use]
    pub const fn new(values: &'r [Value]) -> Self {
        Self {
            values,
            position: 0
        }
    }

    /// Decode the current column as `T` and advance.
    ///
    /// # Errors
    ///
    /// - [`RowError::Exhausted`] when no column is left
    /// - [`RowError::Column`] when the conversion fails
    pub fn next_column<T: FromColumn>(&mut self) -> Result<T, RowError> {
        let position = self.position;
        let value = self.values.get(position).ok_or(RowError::Exhausted {
            position
        })?;
        self.position += 1;
        T::from_column(value).map_err(|source| RowError::Column {
            position,
            source
        })
    }

    /// Index of the next column to be decoded.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Number of columns not yet consumed.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.values.len().saturating_sub(self.position)
    }
}

/// Decode a value from consecutive columns of a row.
///
/// Usually derived with `#[derive(FromRow)]`.
pub trait FromRow: Sized {
    /// Number of columns consumed by [`FromRow::from_row`].
    const COLUMNS: usize;

    /// Decode `Self`, consuming exactly [`FromRow::COLUMNS`] columns.
    ///
    /// # Errors
    ///
    /// Propagates the first [`RowError`] returned by the parser.
    fn from_row(row: &mut RowParser<'_>) -> Result<Self, RowError>;
}

/// Encode a value into an ordered list of row parameters.
///
/// Usually derived with `#[derive(ToRow)]`.
pub trait ToRow {
    /// Number of values produced by [`ToRow::to_row`].
    const COLUMNS: usize;

    /// Encode `self`, producing exactly [`ToRow::COLUMNS`] values.
    fn to_row(&self) -> Vec<Value>;
}

/// Decode a complete row.
///
/// Unlike calling [`FromRow::from_row`] directly, this rejects rows whose
/// width differs from [`FromRow::COLUMNS`].
///
/// # Errors
///
/// - [`RowError::ColumnCount`] when the row is too short or too long
/// - any error raised while decoding a column
pub fn decode_row<T: FromRow>(values: &[Value]) -> Result<T, RowError> {
    if values.len() != T::COLUMNS {
        tracing::debug!(
            expected = T::COLUMNS,
            found = values.len(),
            "row width does not match decoder"
        );
        return Err(RowError::ColumnCount {
            expected: T::COLUMNS,
            found:    values.len()
        });
    }

    let mut parser = RowParser::new(values);
    let decoded = T::from_row(&mut parser)?;
    tracing::trace!(columns = parser.position(), "decoded row");
    Ok(decoded)
}

/// Encode a complete row.
pub fn encode_row<T: ToRow + ?Sized>(value: &T) -> Vec<Value> {
    let values = value.to_row();
    tracing::trace!(columns = values.len(), "encoded row");
    values
}

impl<T: ToRow + ?Sized> ToRow for &T {
    const COLUMNS: usize = T::COLUMNS;

    fn to_row(&self) -> Vec<Value> {
        (**self).to_row()
    }
}

macro_rules! tuple {
    ($count:expr; $($name:ident),+) => {
        impl<$($name: FromColumn),+> FromRow for ($($name,)+) {
            const COLUMNS: usize = $count;

            fn from_row(row: &mut RowParser<'_>) -> Result<Self, RowError> {
                Ok(($(row.next_column::<$name>()?,)+))
            }
        }

        impl<$($name: ToColumn),+> ToRow for ($($name,)+) {
            const COLUMNS: usize = $count;

            #[allow(non_snake_case)]
            fn to_row(&self) -> Vec<Value> {
                let ($($name,)+) = self;
                vec![$($name.to_column()),+]
            }
        }
    };
}

tuple!(1; A);
tuple!(2; A, B);
tuple!(3; A, B, C);
tuple!(4; A, B, C, D);
tuple!(5; A, B, C, D, E);
tuple!(6; A, B, C, D, E, F);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColumnError;

    #[test]
    fn parser_advances_monotonically() {
        let values = [Value::Int(1), Value::Text("two".into())];
        let mut parser = RowParser::new(&values);
        assert_eq!(parser.remaining(), 2);

        assert_eq!(parser.next_column::<i32>(), Ok(1));
        assert_eq!(parser.position(), 1);
        assert_eq!(parser.next_column::<String>(), Ok("two".to_string()));
        assert_eq!(parser.remaining(), 0);

        assert_eq!(
            parser.next_column::<i32>(),
            Err(RowError::Exhausted {
                position: 2
            })
        );
    }

    #[test]
    fn parser_reports_failing_position() {
        let values = [Value::Int(1), Value::Null];
        let mut parser = RowParser::new(&values);
        parser.next_column::<i64>().unwrap();
        assert_eq!(
            parser.next_column::<String>(),
            Err(RowError::Column {
                position: 1,
                source:   ColumnError::UnexpectedNull
            })
        );
    }

    #[test]
    fn decode_row_rejects_wrong_width() {
        let values = [Value::Int(1), Value::Int(2), Value::Int(3)];
        assert_eq!(
            decode_row::<(i32, i32)>(&values),
            Err(RowError::ColumnCount {
                expected: 2,
                found:    3
            })
        );
        assert_eq!(
            decode_row::<(i32, i32, i32, i32)>(&values),
            Err(RowError::ColumnCount {
                expected: 4,
                found:    3
            })
        );
    }

    #[test]
    fn tuples_round_trip() {
        let row = (true, 7_i64, "seven".to_string(), Some(1.5_f64));
        let values = encode_row(&row);
        assert_eq!(values.len(), 4);
        assert_eq!(decode_row::<(bool, i64, String, Option<f64>)>(&values), Ok(row));
    }

    #[test]
    fn reference_encodes_like_value() {
        let row = (1_i32,);
        assert_eq!(<&(i32,) as ToRow>::COLUMNS, 1);
        assert_eq!(encode_row(&&row), vec![Value::Int(1)]);
    }
}
