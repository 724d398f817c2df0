//! File format selection and decoding.
//!
//! Responsibilities:
//! - Map a file extension to a supported format (case-insensitive).
//! - Decode a document with the format's parser and overlay it onto a record.
//!
//! Does NOT handle:
//! - Reading files (see `loader`).
//! - Format grammars; parsing is delegated to `serde_json`, `serde_yaml`, and `toml`.
//!
//! Invariants:
//! - Only `.json`, `.yaml`, `.yml`, and `.toml` are recognized; the file
//!   contents never influence the choice.
//! - Keys absent from a document leave the record's fields untouched.
//! - Documents are merged in their own format's tree, so YAML tags and
//!   non-finite floats in YAML or TOML reach the record intact.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::Path;

use crate::error::Error;
use crate::overlay::overlay;

/// A supported configuration file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Toml,
}

impl Format {
    /// Select the format for `path` from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| Error::UnsupportedFileType {
                path: path.to_path_buf(),
            })
    }

    /// Select the format for an extension given without the leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("json") {
            Some(Format::Json)
        } else if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") {
            Some(Format::Yaml)
        } else if ext.eq_ignore_ascii_case("toml") {
            Some(Format::Toml)
        } else {
            None
        }
    }

    /// Decode `content` and overlay it onto `record`.
    ///
    /// `origin` names the document in errors (usually the file path).
    pub fn decode_into<R>(self, content: &str, origin: &str, record: &mut R) -> Result<(), Error>
    where
        R: Serialize + DeserializeOwned,
    {
        let decode_error = |message: String| Error::Decode {
            origin: origin.to_string(),
            format: self,
            message,
        };

        match self {
            Format::Json => {
                let document: serde_json::Value =
                    serde_json::from_str(content).map_err(|e| decode_error(e.to_string()))?;
                overlay(record, document).map_err(|e| decode_error(e.to_string()))
            }
            Format::Yaml => {
                let document: serde_yaml::Value =
                    serde_yaml::from_str(content).map_err(|e| decode_error(e.to_string()))?;
                overlay(record, document).map_err(|e| decode_error(e.to_string()))
            }
            Format::Toml => {
                let document: toml::Table =
                    toml::from_str(content).map_err(|e| decode_error(e.to_string()))?;
                overlay(record, toml::Value::Table(document))
                    .map_err(|e| decode_error(e.to_string()))
            }
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Toml => "TOML",
        };
        f.write_str(name)
    }
}
