//! Loader implementation.
//!
//! Responsibilities:
//! - Build a `Loader` from default, explicit, or environment-derived options.
//! - Run the load sequence: read file, select format, decode, process.
//!
//! Does NOT handle:
//! - Environment variable parsing (delegated to env.rs).
//! - Directive semantics (delegated to processor.rs).
//!
//! Invariants / Assumptions:
//! - The file is read before its extension is checked, so a missing file is
//!   an I/O error whatever its name.
//! - Processing only runs after the document decoded successfully.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

use super::options::Options;
use crate::error::Error;
use crate::format::Format;
use crate::processor;
use crate::record::Record;

/// Loads configuration files into records and post-processes them.
#[derive(Debug, Clone, Default)]
pub struct Loader {
    options: Options,
}

impl Loader {
    /// Create a loader with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a loader with explicit options.
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Create a loader whose options honor `TAGCONF_*` environment variables.
    pub fn from_env() -> Self {
        Self::with_options(Options::from_env())
    }

    /// Adjust the options before the loader is used.
    ///
    /// ```
    /// let loader = tagconf::Loader::new().with(|opts| opts.delimiter = ",".into());
    /// assert_eq!(loader.options().delimiter, ",");
    /// ```
    pub fn with(mut self, mutate: impl FnOnce(&mut Options)) -> Self {
        mutate(&mut self.options);
        self
    }

    /// The options this loader applies.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Load `path` into `record`.
    ///
    /// The document is decoded onto the record's current state, then required
    /// fields are checked and defaults filled.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (`Error::Io`)
    /// - The extension is not json, yaml, yml, or toml (`Error::UnsupportedFileType`)
    /// - The document does not decode into the record (`Error::Decode`)
    /// - Processing fails (see [`Loader::process`])
    pub fn load<R>(&self, path: impl AsRef<Path>, record: &mut R) -> Result<(), Error>
    where
        R: Record + Serialize + DeserializeOwned,
    {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let format = Format::from_path(path)?;

        tracing::debug!(path = %path.display(), %format, "Loading config file");

        format.decode_into(&content, &path.display().to_string(), record)?;
        self.process(record)?;

        tracing::debug!(path = %path.display(), "Config file loaded");
        Ok(())
    }

    /// Load an in-memory document of the given format into `record`.
    pub fn load_str<R>(&self, content: &str, format: Format, record: &mut R) -> Result<(), Error>
    where
        R: Record + Serialize + DeserializeOwned,
    {
        format.decode_into(content, "<string>", record)?;
        self.process(record)
    }

    /// Run only the processing pass on a record populated by other means.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A directive has an unrecognized clause (`Error::UnsupportedOption`)
    /// - A required field is at its zero value (`Error::RequiredFieldMissing`)
    /// - A default literal does not fit its field (`Error::InvalidDefaultValue`)
    pub fn process<R>(&self, record: &mut R) -> Result<(), Error>
    where
        R: Record,
    {
        processor::process(record, &self.options)
    }
}

/// Load `path` into `record` with default options.
pub fn load<R>(path: impl AsRef<Path>, record: &mut R) -> Result<(), Error>
where
    R: Record + Serialize + DeserializeOwned,
{
    Loader::new().load(path, record)
}
