//! Environment variable overrides for loader options.
//!
//! Responsibilities:
//! - Read `TAGCONF_DIRECTIVE_KEYWORD` and `TAGCONF_DELIMITER`.
//! - Provide the empty/whitespace filtering helper used for every variable.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed), so a
//!   whitespace delimiter cannot come from the environment.

use super::options::Options;
use crate::constants::{ENV_DELIMITER, ENV_DIRECTIVE_KEYWORD};

/// The trimmed value of `key`, or `None` when it is unset or blank.
pub(crate) fn env_var_or_none(key: &str) -> Option<String> {
    let value = std::env::var(key).ok()?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Apply environment variable overrides to `options`.
pub(crate) fn apply_env(options: &mut Options) {
    if let Some(keyword) = env_var_or_none(ENV_DIRECTIVE_KEYWORD) {
        tracing::debug!(keyword = %keyword, "Directive keyword taken from environment");
        options.directive_keyword = keyword;
    }
    if let Some(delimiter) = env_var_or_none(ENV_DELIMITER) {
        tracing::debug!(delimiter = %delimiter, "Delimiter taken from environment");
        options.delimiter = delimiter;
    }
}
