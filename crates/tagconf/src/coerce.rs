//! Default value coercion.
//!
//! Responsibilities:
//! - Define the `Coerce` trait that turns a directive's default literal into a
//!   value of the field's declared type, writing it into the field in place.
//! - Implement `Coerce` for scalars, strings, durations, paths, sequences, sets,
//!   and maps; other std types get the no-op.
//! - Provide `coerce_record` for nested records (used by `#[derive(Record)]`).
//!
//! Does NOT handle:
//! - Deciding whether a default applies (see `processor.rs`).
//! - Literal grammars for numbers and durations (see `number.rs`).
//!
//! Invariants:
//! - The field is only written on success; a failed coercion leaves it untouched.
//! - Sequences and maps are decoded from JSON into a fresh, empty container.
//! - Nested records are decoded from a JSON object onto their existing value.
//! - Types without a specific rule use the trait's no-op default.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::number::{
    parse_bool, parse_duration, parse_float, parse_signed, parse_signed_duration_nanos, parse_unsigned,
};
use crate::overlay::overlay;

/// Errors produced while converting a default literal.
#[derive(Error, Debug)]
pub enum CoerceError {
    #[error("invalid {target} literal \"{literal}\"")]
    InvalidSyntax {
        literal: String,
        target: &'static str,
    },

    #[error("{target} literal \"{literal}\" out of range")]
    Overflow {
        literal: String,
        target: &'static str,
    },

    #[error("invalid structured literal: {0}")]
    Structured(#[from] serde_json::Error),
}

impl CoerceError {
    pub(crate) fn invalid_syntax(literal: &str, target: &'static str) -> Self {
        CoerceError::InvalidSyntax {
            literal: literal.to_string(),
            target,
        }
    }

    pub(crate) fn overflow(literal: &str, target: &'static str) -> Self {
        CoerceError::Overflow {
            literal: literal.to_string(),
            target,
        }
    }
}

/// A field type that can take its value from a default literal.
///
/// The provided method is a no-op, so a type with no meaningful literal form
/// opts in with an empty `impl Coerce for MyType {}` and simply stays at zero.
pub trait Coerce {
    /// Replace `self` with the value described by `literal`.
    fn coerce_default(&mut self, literal: &str) -> Result<(), CoerceError> {
        let _ = literal;
        Ok(())
    }
}

impl Coerce for bool {
    fn coerce_default(&mut self, literal: &str) -> Result<(), CoerceError> {
        *self = parse_bool(literal)?;
        Ok(())
    }
}

macro_rules! coerce_signed {
    ($($ty:ty),*) => {$(
        impl Coerce for $ty {
            fn coerce_default(&mut self, literal: &str) -> Result<(), CoerceError> {
                *self = parse_signed(literal, stringify!($ty))?;
                Ok(())
            }
        }
    )*};
}

macro_rules! coerce_unsigned {
    ($($ty:ty),*) => {$(
        impl Coerce for $ty {
            fn coerce_default(&mut self, literal: &str) -> Result<(), CoerceError> {
                *self = parse_unsigned(literal, stringify!($ty))?;
                Ok(())
            }
        }
    )*};
}

macro_rules! coerce_float {
    ($($ty:ty),*) => {$(
        impl Coerce for $ty {
            fn coerce_default(&mut self, literal: &str) -> Result<(), CoerceError> {
                *self = parse_float(literal, stringify!($ty), |v: &$ty| v.is_infinite())?;
                Ok(())
            }
        }
    )*};
}

coerce_signed!(i8, i16, i32, isize);
coerce_unsigned!(u8, u16, u32, u64, usize);
coerce_float!(f32, f64);

/// 64-bit integers double as nanosecond durations: `"5s"` or `"-5s"` is
/// tried first, then the literal is read as a plain integer.
impl Coerce for i64 {
    fn coerce_default(&mut self, literal: &str) -> Result<(), CoerceError> {
        *self = match parse_signed_duration_nanos(literal) {
            Some(nanos) => {
                i64::try_from(nanos).map_err(|_| CoerceError::overflow(literal, "i64"))?
            }
            None => parse_signed(literal, "i64")?,
        };
        Ok(())
    }
}

impl Coerce for Duration {
    fn coerce_default(&mut self, literal: &str) -> Result<(), CoerceError> {
        *self = parse_duration(literal)?;
        Ok(())
    }
}

impl Coerce for String {
    fn coerce_default(&mut self, literal: &str) -> Result<(), CoerceError> {
        *self = literal.to_string();
        Ok(())
    }
}

impl Coerce for PathBuf {
    fn coerce_default(&mut self, literal: &str) -> Result<(), CoerceError> {
        *self = PathBuf::from(literal);
        Ok(())
    }
}

impl<T> Coerce for Vec<T>
where
    T: DeserializeOwned,
{
    fn coerce_default(&mut self, literal: &str) -> Result<(), CoerceError> {
        *self = serde_json::from_str(literal)?;
        Ok(())
    }
}

impl<T> Coerce for VecDeque<T>
where
    T: DeserializeOwned,
{
    fn coerce_default(&mut self, literal: &str) -> Result<(), CoerceError> {
        *self = serde_json::from_str(literal)?;
        Ok(())
    }
}

impl<T, S> Coerce for HashSet<T, S>
where
    T: DeserializeOwned + Eq + Hash,
    S: BuildHasher + Default,
{
    fn coerce_default(&mut self, literal: &str) -> Result<(), CoerceError> {
        *self = serde_json::from_str(literal)?;
        Ok(())
    }
}

impl<T> Coerce for BTreeSet<T>
where
    T: DeserializeOwned + Ord,
{
    fn coerce_default(&mut self, literal: &str) -> Result<(), CoerceError> {
        *self = serde_json::from_str(literal)?;
        Ok(())
    }
}

impl<K, V, S> Coerce for HashMap<K, V, S>
where
    K: DeserializeOwned + Eq + Hash,
    V: DeserializeOwned,
    S: BuildHasher + Default,
{
    fn coerce_default(&mut self, literal: &str) -> Result<(), CoerceError> {
        *self = serde_json::from_str(literal)?;
        Ok(())
    }
}

impl<K, V> Coerce for BTreeMap<K, V>
where
    K: DeserializeOwned + Ord,
    V: DeserializeOwned,
{
    fn coerce_default(&mut self, literal: &str) -> Result<(), CoerceError> {
        *self = serde_json::from_str(literal)?;
        Ok(())
    }
}

impl<T> Coerce for Option<T> {}

macro_rules! coerce_noop {
    ($($ty:ty),*) => {$(
        impl Coerce for $ty {}
    )*};
}

coerce_noop!(char, i128, u128);

/// Decode a JSON object literal onto an existing record.
///
/// Keys absent from the literal keep the record's current values.
pub fn coerce_record<R>(record: &mut R, literal: &str) -> Result<(), CoerceError>
where
    R: Serialize + DeserializeOwned,
{
    let patch: serde_json::Value = serde_json::from_str(literal)?;
    overlay(record, patch)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    fn coerced<T: Coerce + Default>(literal: &str) -> Result<T, CoerceError> {
        let mut value = T::default();
        value.coerce_default(literal)?;
        Ok(value)
    }

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Limits {
        soft: u32,
        hard: u32,
    }

    #[test]
    fn test_scalars() {
        assert!(coerced::<bool>("true").unwrap());
        assert_eq!(coerced::<i32>("80").unwrap(), 80);
        assert_eq!(coerced::<u16>("0x1f90").unwrap(), 8080);
        assert_eq!(coerced::<f64>("0.25").unwrap(), 0.25);
        assert_eq!(coerced::<String>("debug").unwrap(), "debug");
        assert_eq!(coerced::<PathBuf>("/etc/app").unwrap(), PathBuf::from("/etc/app"));
    }

    #[test]
    fn test_i64_prefers_duration() {
        assert_eq!(coerced::<i64>("5s").unwrap(), 5_000_000_000);
        assert_eq!(coerced::<i64>("2h30m").unwrap(), 9_000_000_000_000);
        assert_eq!(coerced::<i64>("1048576").unwrap(), 1_048_576);
        assert_eq!(coerced::<i64>("-3").unwrap(), -3);
        assert_eq!(coerced::<i64>("-5s").unwrap(), -5_000_000_000);
        assert_eq!(coerced::<i64>("+250ms").unwrap(), 250_000_000);
        assert_eq!(coerced::<i64>("-0x10").unwrap(), -16);
        assert!(matches!(
            coerced::<i64>("-300y"),
            Err(CoerceError::Overflow { .. })
        ));
        assert!(matches!(
            coerced::<i64>("5 parsecs"),
            Err(CoerceError::InvalidSyntax { .. })
        ));
    }

    #[test]
    fn test_duration_field() {
        assert_eq!(coerced::<Duration>("250ms").unwrap(), Duration::from_millis(250));
        assert!(coerced::<Duration>("250").is_err());
    }

    #[test]
    fn test_error_names_target_type() {
        let err = coerced::<u8>("256").unwrap_err();
        assert_eq!(err.to_string(), "u8 literal \"256\" out of range");
    }

    #[test]
    fn test_sequences_and_maps_decode_json() {
        assert_eq!(
            coerced::<Vec<String>>(r#"["a","b"]"#).unwrap(),
            vec!["a".to_string(), "b".to_string()]
        );

        let map = coerced::<HashMap<String, u32>>(r#"{"x":1}"#).unwrap();
        assert_eq!(map.get("x"), Some(&1));

        let ordered = coerced::<BTreeMap<String, bool>>(r#"{"b":true,"a":false}"#).unwrap();
        assert_eq!(ordered.keys().collect::<Vec<_>>(), vec!["a", "b"]);

        assert!(matches!(
            coerced::<Vec<u8>>("1,2,3"),
            Err(CoerceError::Structured(_))
        ));
    }

    #[test]
    fn test_sets_and_deques_decode_json() {
        let set = coerced::<HashSet<String>>(r#"["a","b","a"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("b"));

        let ordered = coerced::<BTreeSet<u8>>("[3,1,2]").unwrap();
        assert_eq!(ordered.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);

        let queue = coerced::<VecDeque<u16>>("[80,443]").unwrap();
        assert_eq!(queue.front(), Some(&80));

        assert!(matches!(
            coerced::<HashSet<u8>>("{}"),
            Err(CoerceError::Structured(_))
        ));
    }

    #[test]
    fn test_types_without_a_literal_form_stay_zero() {
        assert_eq!(coerced::<char>("x").unwrap(), '\0');
        assert_eq!(coerced::<i128>("5").unwrap(), 0);
        assert_eq!(coerced::<u128>("5").unwrap(), 0);
    }

    #[test]
    fn test_sequence_default_replaces_contents() {
        let mut value = vec![9u8];
        value.coerce_default("[1,2]").unwrap();
        assert_eq!(value, vec![1, 2]);
    }

    #[test]
    fn test_option_is_noop() {
        let mut value: Option<u32> = None;
        value.coerce_default("5").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_failed_coercion_leaves_value() {
        let mut value = 7u8;
        assert!(value.coerce_default("nope").is_err());
        assert_eq!(value, 7);
    }

    #[test]
    fn test_record_decodes_in_place() {
        let mut limits = Limits { soft: 10, hard: 0 };
        coerce_record(&mut limits, r#"{"hard":20}"#).unwrap();
        assert_eq!(limits, Limits { soft: 10, hard: 20 });

        assert!(coerce_record(&mut limits, "[1]").is_err());
    }
}
