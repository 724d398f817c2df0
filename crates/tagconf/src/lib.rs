//! Typed configuration loading with per-field directives.
//!
//! `tagconf` decodes a JSON, YAML, or TOML file into a caller-supplied
//! record, then walks the record's fields and applies each field's
//! directive: `required` fields must not be left at their zero value, and
//! `default=<literal>` fills zero-valued fields from a string literal
//! converted to the field's type.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use tagconf::{Format, Loader, Record};
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize, Record)]
//! struct Server {
//!     #[tag(config = "required")]
//!     host: String,
//!     #[tag(config = "default=80")]
//!     port: u16,
//! }
//!
//! let mut server = Server::default();
//! Loader::new()
//!     .load_str(r#"{"host":"127.0.0.1"}"#, Format::Json, &mut server)
//!     .unwrap();
//! assert_eq!(server.port, 80);
//! ```

mod coerce;
pub mod constants;
mod directive;
mod error;
mod format;
mod loader;
mod number;
mod overlay;
mod processor;
mod record;
mod zero;

pub use coerce::{Coerce, CoerceError, coerce_record};
pub use directive::{DirectiveError, DirectiveOptions, parse_directive};
pub use error::Error;
pub use format::Format;
pub use loader::{Loader, Options, load};
pub use processor::process;
pub use record::{Field, Record};
pub use zero::is_zero;

#[cfg(feature = "derive")]
pub use tagconf_derive::Record;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
