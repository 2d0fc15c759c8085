// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Scalar column conversions.
//!
//! [`FromColumn`] decodes one [`Value`] into a Rust type, [`ToColumn`] encodes
//! a Rust value into one [`Value`]. Derived `FromRow`/`ToRow` impls call these
//! once per field.
//!
//! # Types
//!
//! | Rust type | Decodes from | Encodes to |
//! |-----------|--------------|------------|
//! | `bool` | `Bool`, `Int` (0/1) | `Bool` |
//! | `i8`, `i16`, `i32`, `i64` | `Int`, `BigInt` | `Int` |
//! | `u8`, `u16`, `u32` | `Int`, `BigInt` | `Int` |
//! | `f32`, `f64` | `Float`, `Int` | `Float` |
//!
//! Narrowing conversions are range-checked: an integer that does not fit, or a
//! finite float beyond `f32::MAX`, decodes to [`ColumnError::OutOfRange`].
//! | `String` | `Text` | `Text` |
//! | `&str` | - | `Text` |
//! | `Vec<u8>` | `Bytes` | `Bytes` |
//! | `&[u8]` | - | `Bytes` |
//! | `BigInt` | `BigInt`, `Int` | `BigInt` |
//! | `Option<T>` | `Null` or `T` | `Null` or `T` |
//! | `Value` | anything | itself |
//!
//! `u64` is not supported: it has no lossless 64-bit signed representation.

use num_bigint::BigInt;

use crate::{ColumnError, Value};

/// Decode a single column value.
pub trait FromColumn: Sized {
    /// Convert the column value into `Self`.
    ///
    /// # Errors
    ///
    /// Returns [`ColumnError`] when the value has the wrong kind, is out of
    /// range, or is `NULL` for a non-optional type.
    fn from_column(value: &Value) -> Result<Self, ColumnError>;
}

/// Encode a single value into a column.
pub trait ToColumn {
    /// Convert `self` into a column value.
    fn to_column(&self) -> Value;
}

fn mismatch(expected: &'static str, found: &Value) -> ColumnError {
    if found.is_null() {
        ColumnError::UnexpectedNull
    } else {
        ColumnError::TypeMismatch {
            expected,
            found: found.kind()
        }
    }
}

fn out_of_range<E>(target: &'static str) -> impl FnOnce(E) -> ColumnError {
    move |_| ColumnError::OutOfRange {
        target
    }
}

impl<T: ToColumn + ?Sized> ToColumn for &T {
    fn to_column(&self) -> Value {
        (**self).to_column()
    }
}

macro_rules! integer {
    ($($ty:ty),*) => {$(
        impl FromColumn for $ty {
            fn from_column(value: &Value) -> Result<Self, ColumnError> {
                match value {
                    Value::Int(v) => <$ty>::try_from(*v).map_err(out_of_range(stringify!($ty))),
                    Value::BigInt(v) => <$ty>::try_from(v).map_err(out_of_range(stringify!($ty))),
                    other => Err(mismatch(stringify!($ty), other))
                }
            }
        }

        impl ToColumn for $ty {
            fn to_column(&self) -> Value {
                Value::Int(i64::from(*self))
            }
        }
    )*};
}

integer!(i8, i16, i32, u8, u16, u32);

impl FromColumn for i64 {
    fn from_column(value: &Value) -> Result<Self, ColumnError> {
        match value {
            Value::Int(v) => Ok(*v),
            Value::BigInt(v) => Self::try_from(v).map_err(out_of_range("i64")),
            other => Err(mismatch("i64", other))
        }
    }
}

impl ToColumn for i64 {
    fn to_column(&self) -> Value {
        Value::Int(*self)
    }
}

impl FromColumn for bool {
    fn from_column(value: &Value) -> Result<Self, ColumnError> {
        match value {
            Value::Bool(v) => Ok(*v),
            Value::Int(0) => Ok(false),
            Value::Int(1) => Ok(true),
            Value::Int(_) => Err(ColumnError::OutOfRange {
                target: "bool"
            }),
            other => Err(mismatch("bool", other))
        }
    }
}

impl ToColumn for bool {
    fn to_column(&self) -> Value {
        Value::Bool(*self)
    }
}

impl FromColumn for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_column(value: &Value) -> Result<Self, ColumnError> {
        match value {
            Value::Float(v) => Ok(*v),
            Value::Int(v) => Ok(*v as f64),
            other => Err(mismatch("f64", other))
        }
    }
}

impl ToColumn for f64 {
    fn to_column(&self) -> Value {
        Value::Float(*self)
    }
}

impl FromColumn for f32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn from_column(value: &Value) -> Result<Self, ColumnError> {
        match value {
            Value::Float(v) => {
                let narrowed = *v as f32;
                if v.is_finite() && narrowed.is_infinite() {
                    return Err(ColumnError::OutOfRange {
                        target: "f32"
                    });
                }
                Ok(narrowed)
            }
            Value::Int(v) => Ok(*v as f32),
            other => Err(mismatch("f32", other))
        }
    }
}

impl ToColumn for f32 {
    fn to_column(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl FromColumn for String {
    fn from_column(value: &Value) -> Result<Self, ColumnError> {
        match value {
            Value::Text(v) => Ok(v.clone()),
            other => Err(mismatch("String", other))
        }
    }
}

impl ToColumn for String {
    fn to_column(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToColumn for str {
    fn to_column(&self) -> Value {
        Value::Text(self.to_owned())
    }
}

impl FromColumn for Vec<u8> {
    fn from_column(value: &Value) -> Result<Self, ColumnError> {
        match value {
            Value::Bytes(v) => Ok(v.clone()),
            other => Err(mismatch("Vec<u8>", other))
        }
    }
}

impl ToColumn for Vec<u8> {
    fn to_column(&self) -> Value {
        Value::Bytes(self.clone())
    }
}

impl ToColumn for [u8] {
    fn to_column(&self) -> Value {
        Value::Bytes(self.to_vec())
    }
}

impl FromColumn for BigInt {
    fn from_column(value: &Value) -> Result<Self, ColumnError> {
        match value {
            Value::BigInt(v) => Ok(v.clone()),
            Value::Int(v) => Ok(Self::from(*v)),
            other => Err(mismatch("BigInt", other))
        }
    }
}

impl ToColumn for BigInt {
    fn to_column(&self) -> Value {
        Value::BigInt(self.clone())
    }
}

impl<T: FromColumn> FromColumn for Option<T> {
    fn from_column(value: &Value) -> Result<Self, ColumnError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_column(other).map(Some)
        }
    }
}

impl<T: ToColumn> ToColumn for Option<T> {
    fn to_column(&self) -> Value {
        match self {
            Some(v) => v.to_column(),
            None => Value::Null
        }
    }
}

impl FromColumn for Value {
    fn from_column(value: &Value) -> Result<Self, ColumnError> {
        Ok(value.clone())
    }
}

impl ToColumn for Value {
    fn to_column(&self) -> Value {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::ValueKind;

    #[test]
    fn integer_narrowing_checks_range() {
        assert_eq!(i8::from_column(&Value::Int(-128)), Ok(-128));
        assert_eq!(
            i8::from_column(&Value::Int(300)),
            Err(ColumnError::OutOfRange {
                target: "i8"
            })
        );
        assert_eq!(
            u32::from_column(&Value::Int(-1)),
            Err(ColumnError::OutOfRange {
                target: "u32"
            })
        );
    }

    #[test]
    fn float_narrowing_checks_range() {
        assert_eq!(f32::from_column(&Value::Float(1.5)), Ok(1.5));
        assert_eq!(
            f32::from_column(&Value::Float(1e300)),
            Err(ColumnError::OutOfRange {
                target: "f32"
            })
        );
        assert_eq!(
            f32::from_column(&Value::Float(-1e300)),
            Err(ColumnError::OutOfRange {
                target: "f32"
            })
        );
        assert_eq!(
            f32::from_column(&Value::Float(f64::INFINITY)),
            Ok(f32::INFINITY)
        );
        assert!(f32::from_column(&Value::Float(f64::NAN)).unwrap().is_nan());
    }

    #[test]
    fn integer_from_bigint() {
        let big = Value::BigInt(BigInt::from(42));
        assert_eq!(i64::from_column(&big), Ok(42));
        assert_eq!(i16::from_column(&big), Ok(42));

        let huge = Value::BigInt(BigInt::from(i64::MAX) * BigInt::from(4));
        assert_eq!(
            i64::from_column(&huge),
            Err(ColumnError::OutOfRange {
                target: "i64"
            })
        );
    }

    #[test]
    fn null_into_scalar_is_unexpected() {
        assert_eq!(String::from_column(&Value::Null), Err(ColumnError::UnexpectedNull));
        assert_eq!(i32::from_column(&Value::Null), Err(ColumnError::UnexpectedNull));
    }

    #[test]
    fn null_into_option_is_none() {
        assert_eq!(Option::<String>::from_column(&Value::Null), Ok(None));
        assert_eq!(Option::<i32>::from_column(&Value::Int(5)), Ok(Some(5)));
        assert_eq!(None::<i32>.to_column(), Value::Null);
    }

    #[test]
    fn wrong_kind_is_type_mismatch() {
        assert_eq!(
            bool::from_column(&Value::Text("yes".into())),
            Err(ColumnError::TypeMismatch {
                expected: "bool",
                found:    ValueKind::Text
            })
        );
    }

    #[test]
    fn bool_accepts_integer_flags() {
        assert_eq!(bool::from_column(&Value::Int(1)), Ok(true));
        assert_eq!(bool::from_column(&Value::Int(0)), Ok(false));
        assert!(bool::from_column(&Value::Int(2)).is_err());
    }

    #[test]
    fn borrowed_values_encode_like_owned() {
        assert_eq!("x".to_column(), Value::Text("x".into()));
        assert_eq!((&5_i32).to_column(), Value::Int(5));
        assert_eq!([1_u8, 2].as_slice().to_column(), Value::Bytes(vec![1, 2]));
    }

    #[test]
    fn bigint_accepts_int() {
        assert_eq!(BigInt::from_column(&Value::Int(-3)), Ok(BigInt::from(-3)));
    }

    proptest! {
        #[test]
        fn i64_round_trips(v in any::<i64>()) {
            prop_assert_eq!(i64::from_column(&v.to_column()), Ok(v));
        }

        #[test]
        fn string_round_trips(v in ".*") {
            prop_assert_eq!(String::from_column(&v.to_column()), Ok(v));
        }

        #[test]
        fn optional_u16_round_trips(v in any::<Option<u16>>()) {
            prop_assert_eq!(Option::<u16>::from_column(&v.to_column()), Ok(v));
        }
    }
}
