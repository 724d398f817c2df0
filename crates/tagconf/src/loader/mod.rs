//! Configuration loader for files and in-memory documents.
//!
//! Responsibilities:
//! - Provide the `Loader` entry point: read a file, pick its format, decode it
//!   into the caller's record, then run the processing pass.
//! - Own the per-loader `Options` (directive keyword and clause delimiter).
//! - Layer `TAGCONF_*` environment variables over the default options.
//!
//! Does NOT handle:
//! - Directive semantics (see `processor.rs`).
//! - Format grammars (delegated to the format crates via `format.rs`).
//!
//! Invariants / Assumptions:
//! - Options are fixed once a `Loader` is built; there is no global state.
//! - A `Loader` may be shared across threads as long as each call gets its own record.

mod builder;
mod env;
mod options;

#[cfg(test)]
mod tests;

pub use builder::{Loader, load};
pub use options::Options;
