//! In-place decoding of a document onto an existing value.
//!
//! The value is serialized into the document's own tree type, the document
//! is merged over it, and the result is deserialized back. Each format keeps
//! its own tree so nothing it can express is lost on the way: YAML keeps
//! tags, non-string keys, and non-finite floats; TOML keeps non-finite floats.
//!
//! Merge rules:
//! - Maps merge key by key; any other document value replaces what was there.
//! - `null` leaves the existing entry as it was, so a key set to null behaves
//!   like a missing key.
//! - YAML tagged values with the same tag merge their contents.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use thiserror::Error;

/// A document tree that a record can be serialized into and rebuilt from.
pub(crate) trait Tree: Sized {
    type Error: fmt::Display;

    fn from_record<T: Serialize>(record: &T) -> Result<Self, Self::Error>;
    fn into_record<T: DeserializeOwned>(self) -> Result<T, Self::Error>;
    fn is_null(&self) -> bool;
    fn merge(&mut self, patch: Self);
}

/// Merge `patch` onto `target` and write the result back.
///
/// `target` is only replaced when the merged tree deserializes cleanly.
pub(crate) fn overlay<T, V>(target: &mut T, patch: V) -> Result<(), V::Error>
where
    T: Serialize + DeserializeOwned,
    V: Tree,
{
    if patch.is_null() {
        return Ok(());
    }
    let mut base = V::from_record(&*target)?;
    base.merge(patch);
    *target = base.into_record()?;
    Ok(())
}

impl Tree for serde_json::Value {
    type Error = serde_json::Error;

    fn from_record<T: Serialize>(record: &T) -> Result<Self, Self::Error> {
        serde_json::to_value(record)
    }

    fn into_record<T: DeserializeOwned>(self) -> Result<T, Self::Error> {
        serde_json::from_value(self)
    }

    fn is_null(&self) -> bool {
        matches!(self, serde_json::Value::Null)
    }

    fn merge(&mut self, patch: Self) {
        use serde_json::Value;
        match (self, patch) {
            (_, Value::Null) => {}
            (Value::Object(base), Value::Object(patch)) => {
                for (key, value) in patch {
                    match base.get_mut(&key) {
                        Some(existing) => existing.merge(value),
                        None if Tree::is_null(&value) => {}
                        None => {
                            base.insert(key, value);
                        }
                    }
                }
            }
            (base, patch) => *base = patch,
        }
    }
}

impl Tree for serde_yaml::Value {
    type Error = serde_yaml::Error;

    fn from_record<T: Serialize>(record: &T) -> Result<Self, Self::Error> {
        serde_yaml::to_value(record)
    }

    fn into_record<T: DeserializeOwned>(self) -> Result<T, Self::Error> {
        serde_yaml::from_value(self)
    }

    fn is_null(&self) -> bool {
        matches!(self, serde_yaml::Value::Null)
    }

    fn merge(&mut self, patch: Self) {
        use serde_yaml::Value;
        match (self, patch) {
            (_, Value::Null) => {}
            (Value::Mapping(base), Value::Mapping(patch)) => {
                for (key, value) in patch {
                    match base.get_mut(&key) {
                        Some(existing) => existing.merge(value),
                        None if Tree::is_null(&value) => {}
                        None => {
                            base.insert(key, value);
                        }
                    }
                }
            }
            (Value::Tagged(base), Value::Tagged(patch)) if base.tag == patch.tag => {
                base.value.merge(patch.value);
            }
            (base, patch) => *base = patch,
        }
    }
}

/// Failure converting between a record and a TOML tree.
#[derive(Error, Debug)]
pub(crate) enum TomlTreeError {
    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Deserialize(#[from] toml::de::Error),
}

impl Tree for toml::Value {
    type Error = TomlTreeError;

    fn from_record<T: Serialize>(record: &T) -> Result<Self, Self::Error> {
        Ok(toml::Value::try_from(record)?)
    }

    fn into_record<T: DeserializeOwned>(self) -> Result<T, Self::Error> {
        Ok(self.try_into()?)
    }

    // TOML has no null.
    fn is_null(&self) -> bool {
        false
    }

    fn merge(&mut self, patch: Self) {
        use toml::Value;
        match (self, patch) {
            (Value::Table(base), Value::Table(patch)) => {
                for (key, value) in patch {
                    match base.get_mut(&key) {
                        Some(existing) => existing.merge(value),
                        None => {
                            base.insert(key, value);
                        }
                    }
                }
            }
            (base, patch) => *base = patch,
        }
    }
}
