//! Record field descriptors.
//!
//! Responsibilities:
//! - Describe a record's fields in declaration order: name, directive strings
//!   per keyword, and whether a default may be written into the field.
//! - Expose per-field zero checks and default application by index.
//!
//! Does NOT handle:
//! - Directive grammar (see `directive.rs`).
//! - The processing pass itself (see `processor.rs`).
//!
//! Invariants:
//! - `FIELDS` lists every field of the record, in declaration order.
//! - Index `i` in `is_zero_at` and `apply_default_at` refers to `FIELDS[i]`.
//! - An index with no directive may report `false` and ignore defaults.

use crate::coerce::CoerceError;

/// Static description of one record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Field name as written in the record definition.
    pub name: &'static str,
    /// `(keyword, directive)` pairs attached to the field.
    pub directives: &'static [(&'static str, &'static str)],
    /// Whether defaults may be written into the field.
    pub writable: bool,
}

impl Field {
    /// Describe a writable field.
    pub const fn new(name: &'static str, directives: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            name,
            directives,
            writable: true,
        }
    }

    /// Mark the field read-only: it is still checked for `required`, but
    /// defaults are never written into it.
    pub const fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    /// Directive attached under `keyword`, or `""` if there is none.
    ///
    /// The first pair with a matching keyword wins.
    pub fn directive(&self, keyword: &str) -> &'static str {
        self.directives
            .iter()
            .find(|(key, _)| *key == keyword)
            .map(|(_, directive)| *directive)
            .unwrap_or("")
    }
}

/// A configuration record whose fields can be post-processed.
///
/// Usually implemented with `#[derive(Record)]`; a hand-written
/// implementation lists the fields and matches on the index:
///
/// ```
/// use tagconf::{Coerce, CoerceError, Field, Record, is_zero};
///
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// impl Record for Server {
///     const FIELDS: &'static [Field] = &[
///         Field::new("host", &[("config", "required")]),
///         Field::new("port", &[("config", "default=80")]),
///     ];
///
///     fn is_zero_at(&self, index: usize) -> bool {
///         match index {
///             0 => is_zero(&self.host),
///             1 => is_zero(&self.port),
///             _ => false,
///         }
///     }
///
///     fn apply_default_at(&mut self, index: usize, literal: &str) -> Result<(), CoerceError> {
///         match index {
///             0 => self.host.coerce_default(literal),
///             1 => self.port.coerce_default(literal),
///             _ => Ok(()),
///         }
///     }
/// }
///
/// let mut server = Server { host: "localhost".into(), port: 0 };
/// tagconf::Loader::new().process(&mut server).unwrap();
/// assert_eq!(server.port, 80);
/// ```
pub trait Record {
    /// Every field of the record, in declaration order.
    const FIELDS: &'static [Field];

    /// Whether the field at `index` holds its type's zero value.
    fn is_zero_at(&self, index: usize) -> bool;

    /// Write the default described by `literal` into the field at `index`.
    fn apply_default_at(&mut self, index: usize, literal: &str) -> Result<(), CoerceError>;
}
