//! Loader options.
//!
//! Invariants:
//! - Defaults are the `config` keyword and the `;` delimiter.
//! - Options deserialize with missing keys taken from the defaults, so a host
//!   application can embed them in its own configuration.

use serde::{Deserialize, Serialize};

use super::env::apply_env;
use crate::constants::{DEFAULT_DELIMITER, DEFAULT_DIRECTIVE_KEYWORD};

/// Options controlling how field directives are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Keyword selecting which of a field's directives is read.
    pub directive_keyword: String,
    /// Separator between clauses of one directive.
    pub delimiter: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            directive_keyword: DEFAULT_DIRECTIVE_KEYWORD.to_string(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl Options {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Default options with `TAGCONF_DIRECTIVE_KEYWORD` and `TAGCONF_DELIMITER` applied.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        apply_env(&mut options);
        options
    }

    /// Set the directive keyword.
    pub fn with_directive_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.directive_keyword = keyword.into();
        self
    }

    /// Set the clause delimiter.
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }
}
