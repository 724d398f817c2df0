//! Error types for loading and post-processing records.
//!
//! Responsibilities:
//! - Define the error variants returned by `Loader::load` and `process`.
//! - Attach the offending file path or field name to every variant.
//!
//! Does NOT handle:
//! - Directive grammar failures before they are tied to a field (see `directive.rs`).
//! - Literal conversion failures before they are tied to a field (see `coerce.rs`).
//!
//! Invariants:
//! - Decoder messages are passed through verbatim; no variant carries file contents.
//! - Errors are returned to the caller, never retried or logged as fatal here.

use std::path::PathBuf;
use thiserror::Error;

use crate::coerce::CoerceError;
use crate::format::Format;

/// Errors that can occur while loading a record.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported file type: {path}")]
    UnsupportedFileType { path: PathBuf },

    #[error("failed to decode {format} from {origin}: {message}")]
    Decode {
        origin: String,
        format: Format,
        message: String,
    },

    #[error("unsupported option on field \"{field}\": \"{option}\"")]
    UnsupportedOption { field: String, option: String },

    #[error("field \"{field}\" required")]
    RequiredFieldMissing { field: String },

    #[error("invalid default value for \"{field}\": {source}")]
    InvalidDefaultValue {
        field: String,
        #[source]
        source: CoerceError,
    },
}

impl Error {
    /// Name of the field the error refers to, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::UnsupportedOption { field, .. }
            | Error::RequiredFieldMissing { field }
            | Error::InvalidDefaultValue { field, .. } => Some(field),
            Error::Io { .. } | Error::UnsupportedFileType { .. } | Error::Decode { .. } => None,
        }
    }
}
