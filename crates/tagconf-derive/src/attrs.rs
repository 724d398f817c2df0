//! Attribute parsing for `#[tag(...)]`.
//!
//! Uses `parse_nested_meta` for both container and field attributes.

use syn::ext::IdentExt;
use syn::{Attribute, LitStr};

/// Struct-level options from `#[tag(...)]`.
#[derive(Debug, Default)]
pub struct ContainerAttrs {
    /// Skip the generated `Coerce` impl (nested-record defaults).
    pub no_coerce: bool,
}

/// Field-level options from `#[tag(...)]`.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// `(keyword, directive)` pairs in declaration order.
    pub directives: Vec<(String, String)>,
    /// Field is checked for `required` but never receives defaults.
    pub read_only: bool,
}

impl FieldAttrs {
    /// Whether the field carries any directive at all.
    pub fn is_tagged(&self) -> bool {
        !self.directives.is_empty()
    }

    /// Whether any directive can carry a default literal.
    ///
    /// The clause delimiter is only known at runtime, so every `default=` counts
    /// except a trailing `default=-` with nothing after it.
    pub fn may_default(&self) -> bool {
        const CLAUSE: &str = "default=";
        self.directives.iter().any(|(_, directive)| {
            directive
                .match_indices(CLAUSE)
                .any(|(at, _)| &directive[at + CLAUSE.len()..] != "-")
        })
    }
}

/// Parse struct-level attributes from `#[tag(...)]`.
pub fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
    let mut result = ContainerAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("tag") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("no_coerce") {
                result.no_coerce = true;
                Ok(())
            } else {
                Err(meta.error("unsupported container attribute, expected `no_coerce`"))
            }
        })?;
    }

    Ok(result)
}

/// Parse field-level attributes from `#[tag(keyword = "directive", read_only)]`.
pub fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut result = FieldAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("tag") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("read_only") {
                result.read_only = true;
                return Ok(());
            }

            let keyword = match meta.path.get_ident() {
                Some(ident) => ident.unraw().to_string(),
                None => return Err(meta.error("expected `keyword = \"directive\"`")),
            };
            let directive: LitStr = meta.value()?.parse()?;
            result.directives.push((keyword, directive.value()));
            Ok(())
        })?;
    }

    Ok(result)
}
