//! Tests for the loader.
//!
//! Responsibilities:
//! - Test option construction and fluent mutation.
//! - Test environment variable overrides for options.
//! - Test the file load sequence and its error ordering.
//!
//! Invariants:
//! - Environment tests use `serial_test` and `temp_env` to avoid pollution.
//! - Temporary files are cleaned up automatically via `tempfile`.

use serde::{Deserialize, Serialize};

use crate::coerce::{Coerce, CoerceError};
use crate::record::{Field, Record};
use crate::zero::is_zero;


/// Record shared by the loader tests.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TestConfig {
    pub host: String,
    pub port: i32,
    pub mode: String,
    pub ssl: bool,
}

impl Record for TestConfig {
    const FIELDS: &'static [Field] = &[
        Field::new("host", &[("config", "required"), ("strict", "required")]),
        Field::new("port", &[("config", "default=80"), ("strict", "required")]),
        Field::new("mode", &[("pipe", "default=release|required")]),
        Field::new("ssl", &[("config", "default=true")]),
    ];

    fn is_zero_at(&self, index: usize) -> bool {
        match index {
            0 => is_zero(&self.host),
            1 => is_zero(&self.port),
            2 => is_zero(&self.mode),
            3 => is_zero(&self.ssl),
            _ => false,
        }
    }

    fn apply_default_at(&mut self, index: usize, literal: &str) -> Result<(), CoerceError> {
        match index {
            0 => self.host.coerce_default(literal),
            1 => self.port.coerce_default(literal),
            2 => self.mode.coerce_default(literal),
            3 => self.ssl.coerce_default(literal),
            _ => Ok(()),
        }
    }
}
