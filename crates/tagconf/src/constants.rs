//! Centralized constants for the tagconf workspace.
//!
//! Default loader options and the environment variable names that override
//! them live here so the builder, env layer, and tests agree on one value.

// =============================================================================
// Directive Defaults
// =============================================================================

/// Directive keyword read from each field when no other keyword is configured.
pub const DEFAULT_DIRECTIVE_KEYWORD: &str = "config";

/// Separator between clauses of one directive string.
pub const DEFAULT_DELIMITER: &str = ";";

/// Clause marking a field as required.
pub const REQUIRED_CLAUSE: &str = "required";

/// Prefix of the clause carrying a default literal.
pub const DEFAULT_CLAUSE_PREFIX: &str = "default=";

/// Default literal that declares "no default" while keeping the clause.
pub const NO_DEFAULT_SENTINEL: &str = "-";

// =============================================================================
// Environment Overrides
// =============================================================================

/// Overrides [`DEFAULT_DIRECTIVE_KEYWORD`] for `Options::from_env`.
pub const ENV_DIRECTIVE_KEYWORD: &str = "TAGCONF_DIRECTIVE_KEYWORD";

/// Overrides [`DEFAULT_DELIMITER`] for `Options::from_env`.
pub const ENV_DELIMITER: &str = "TAGCONF_DELIMITER";
