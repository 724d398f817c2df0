//! Per-field directive parsing.
//!
//! A directive is the string attached to a field under the loader's keyword,
//! e.g. `required` or `default=80`, with clauses joined by the delimiter.
//!
//! Invariants:
//! - An unrecognized clause is always an error, never ignored.
//! - `default=-` declares "no default"; it never clears an earlier default.
//! - Repeated clauses of one kind are last-write-wins.

use thiserror::Error;

use crate::constants::{DEFAULT_CLAUSE_PREFIX, NO_DEFAULT_SENTINEL, REQUIRED_CLAUSE};

/// Options derived from one field's directive string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectiveOptions {
    pub required: bool,
    pub has_default: bool,
    pub default_value: String,
}

/// Errors produced while parsing a directive string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectiveError {
    #[error("unsupported option: \"{0}\"")]
    UnsupportedOption(String),
}

/// Parse `directive` into options, splitting clauses on `delimiter`.
///
/// An empty delimiter leaves the directive unsplit.
pub fn parse_directive(directive: &str, delimiter: &str) -> Result<DirectiveOptions, DirectiveError> {
    let mut options = DirectiveOptions::default();
    if directive.is_empty() {
        return Ok(options);
    }

    let clauses: Vec<&str> = if delimiter.is_empty() {
        vec![directive]
    } else {
        directive.split(delimiter).collect()
    };

    for clause in clauses {
        if clause == REQUIRED_CLAUSE {
            options.required = true;
        } else if let Some(literal) = clause.strip_prefix(DEFAULT_CLAUSE_PREFIX) {
            if literal != NO_DEFAULT_SENTINEL {
                options.has_default = true;
                options.default_value = literal.to_string();
            }
        } else {
            return Err(DirectiveError::UnsupportedOption(clause.to_string()));
        }
    }

    Ok(options)
}
