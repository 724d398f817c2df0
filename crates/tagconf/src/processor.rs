//! The post-load processing pass.
//!
//! Responsibilities:
//! - Walk a record's fields in declaration order.
//! - Parse each field's directive and reject unsupported clauses.
//! - Fail on required fields left at their zero value.
//! - Fill zero-valued fields that declare a default.
//!
//! Does NOT handle:
//! - Decoding documents into the record (see `format.rs`).
//! - Record shape checks; `Record` is only implemented for structs and the
//!   pass takes `&mut R`.
//!
//! Invariants:
//! - `required` is checked against the decoded value, before any default;
//!   a required field with a default still fails when absent.
//! - The first error aborts the pass; defaults already applied to earlier
//!   fields stay applied.

use crate::directive::{DirectiveError, parse_directive};
use crate::error::Error;
use crate::loader::Options;
use crate::record::Record;

/// Enforce required fields and fill defaults on `record`.
pub fn process<R>(record: &mut R, options: &Options) -> Result<(), Error>
where
    R: Record,
{
    for (index, field) in R::FIELDS.iter().enumerate() {
        let directive = field.directive(&options.directive_keyword);
        let parsed = parse_directive(directive, &options.delimiter).map_err(|e| match e {
            DirectiveError::UnsupportedOption(option) => Error::UnsupportedOption {
                field: field.name.to_string(),
                option,
            },
        })?;

        tracing::trace!(field = field.name, directive, "Processing field");

        if !parsed.required && !parsed.has_default {
            continue;
        }

        let is_zero = record.is_zero_at(index);

        if parsed.required && is_zero {
            return Err(Error::RequiredFieldMissing {
                field: field.name.to_string(),
            });
        }

        if parsed.has_default && is_zero && field.writable {
            record
                .apply_default_at(index, &parsed.default_value)
                .map_err(|source| Error::InvalidDefaultValue {
                    field: field.name.to_string(),
                    source,
                })?;
            tracing::debug!(
                field = field.name,
                literal = %parsed.default_value,
                "Applied default value"
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coerce::{Coerce, CoerceError};
    use crate::record::Field;
    use crate::zero::is_zero;

    #[derive(Debug, Default, PartialEq)]
    struct Service {
        name: String,
        port: i32,
        debug: bool,
        token: String,
        retries: u8,
    }

    impl Record for Service {
        const FIELDS: &'static [Field] = &[
            Field::new("name", &[]),
            Field::new("port", &[("config", "default=80"), ("alt", "default=8080")]),
            Field::new("debug", &[("config", "default=true")]),
            Field::new("token", &[("config", "required"), ("alt", "required|default=x")]),
            Field::new("retries", &[("config", "default=-"), ("alt", "default=3")]),
        ];

        fn is_zero_at(&self, index: usize) -> bool {
            match index {
                1 => is_zero(&self.port),
                2 => is_zero(&self.debug),
                3 => is_zero(&self.token),
                4 => is_zero(&self.retries),
                _ => false,
            }
        }

        fn apply_default_at(&mut self, index: usize, literal: &str) -> Result<(), CoerceError> {
            match index {
                1 => self.port.coerce_default(literal),
                2 => self.debug.coerce_default(literal),
                3 => self.token.coerce_default(literal),
                4 => self.retries.coerce_default(literal),
                _ => Ok(()),
            }
        }
    }

    #[derive(Debug, Default)]
    struct Broken {
        first: u32,
        second: u32,
        third: String,
    }

    impl Record for Broken {
        const FIELDS: &'static [Field] = &[
            Field::new("first", &[("config", "default=7")]),
            Field::new("second", &[("config", "default=lots")]),
            Field::new("third", &[("config", "frobnicate")]),
        ];

        fn is_zero_at(&self, index: usize) -> bool {
            match index {
                0 => is_zero(&self.first),
                1 => is_zero(&self.second),
                2 => is_zero(&self.third),
                _ => false,
            }
        }

        fn apply_default_at(&mut self, index: usize, literal: &str) -> Result<(), CoerceError> {
            match index {
                0 => self.first.coerce_default(literal),
                1 => self.second.coerce_default(literal),
                2 => self.third.coerce_default(literal),
                _ => Ok(()),
            }
        }
    }

    #[derive(Debug, Default)]
    struct Locked {
        id: u64,
    }

    impl Record for Locked {
        const FIELDS: &'static [Field] = &[Field::new("id", &[("config", "default=5")]).read_only()];

        fn is_zero_at(&self, index: usize) -> bool {
            index == 0 && is_zero(&self.id)
        }

        fn apply_default_at(&mut self, index: usize, literal: &str) -> Result<(), CoerceError> {
            match index {
                0 => self.id.coerce_default(literal),
                _ => Ok(()),
            }
        }
    }

    fn service_with_token() -> Service {
        Service {
            token: "secret".to_string(),
            ..Service::default()
        }
    }

    #[test]
    fn test_defaults_fill_zero_fields() {
        let mut service = service_with_token();
        process(&mut service, &Options::default()).unwrap();
        assert_eq!(service.port, 80);
        assert!(service.debug);
        assert_eq!(service.retries, 0, "default=- must not apply");
    }

    #[test]
    fn test_present_values_are_preserved() {
        let mut service = Service {
            port: 443,
            ..service_with_token()
        };
        process(&mut service, &Options::default()).unwrap();
        assert_eq!(service.port, 443);
    }

    #[test]
    fn test_required_zero_field_fails() {
        let mut service = Service::default();
        let err = process(&mut service, &Options::default()).unwrap_err();
        assert!(matches!(err, Error::RequiredFieldMissing { ref field } if field == "token"));
        // Fields before the failing one keep their defaults.
        assert_eq!(service.port, 80);
        assert!(service.debug);
    }

    #[test]
    fn test_required_wins_over_default() {
        let options = Options::default().with_directive_keyword("alt").with_delimiter("|");
        let mut service = Service::default();
        let err = process(&mut service, &options).unwrap_err();
        assert!(matches!(err, Error::RequiredFieldMissing { .. }));
        assert!(service.token.is_empty());
    }

    #[test]
    fn test_keyword_selects_directives() {
        let options = Options::default().with_directive_keyword("alt").with_delimiter("|");
        let mut service = service_with_token();
        process(&mut service, &options).unwrap();
        assert_eq!(service.port, 8080);
        assert!(!service.debug, "no directive under the alt keyword");
        assert_eq!(service.retries, 3);
    }

    #[test]
    fn test_invalid_default_aborts_after_earlier_fields() {
        let mut broken = Broken::default();
        let err = process(&mut broken, &Options::default()).unwrap_err();
        match err {
            Error::InvalidDefaultValue { field, source } => {
                assert_eq!(field, "second");
                assert!(matches!(source, CoerceError::InvalidSyntax { .. }));
            }
            other => panic!("expected invalid default, got {other:?}"),
        }
        assert_eq!(broken.first, 7);
        assert_eq!(broken.second, 0);
    }

    #[test]
    fn test_unsupported_option_names_field() {
        let mut broken = Broken {
            first: 1,
            second: 2,
            ..Broken::default()
        };
        let err = process(&mut broken, &Options::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::UnsupportedOption { ref field, ref option } if field == "third" && option == "frobnicate"
        ));
    }

    #[test]
    fn test_unsupported_option_fails_even_when_value_present() {
        let mut broken = Broken {
            first: 1,
            second: 2,
            third: "set".to_string(),
        };
        assert!(matches!(
            process(&mut broken, &Options::default()),
            Err(Error::UnsupportedOption { .. })
        ));
    }

    #[test]
    fn test_read_only_field_skips_default() {
        let mut locked = Locked::default();
        process(&mut locked, &Options::default()).unwrap();
        assert_eq!(locked.id, 0);
    }
}
