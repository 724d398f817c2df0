//! Derive macro for `tagconf::Record`.
//!
//! `#[derive(Record)]` generates the field descriptor table for a struct with
//! named fields, plus a `Coerce` impl so the struct can itself take a
//! `default=` literal when nested inside another record.
//!
//! Field types only need `Default + PartialEq` to be checked; `Coerce` is
//! required only of fields whose directives carry a `default=` clause.

mod attrs;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, parse_macro_input, parse_quote};

use attrs::{parse_container_attrs, parse_field_attrs};

#[proc_macro_derive(Record, attributes(tag))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match derive_record_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_record_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;

    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    struct_name,
                    "Record requires a struct with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                struct_name,
                "Record can only be derived for structs",
            ));
        }
    };

    let container = parse_container_attrs(&input.attrs)?;

    let mut descriptors = Vec::new();
    let mut zero_arms = Vec::new();
    let mut default_arms = Vec::new();

    for (index, field) in named.iter().enumerate() {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let attrs = parse_field_attrs(&field.attrs)?;
        let name = ident.unraw().to_string();
        let keywords = attrs.directives.iter().map(|(keyword, _)| keyword);
        let directives = attrs.directives.iter().map(|(_, directive)| directive);

        let descriptor = quote! {
            ::tagconf::Field::new(#name, &[#((#keywords, #directives)),*])
        };
        descriptors.push(if attrs.read_only {
            quote! { #descriptor.read_only() }
        } else {
            descriptor
        });

        if !attrs.is_tagged() {
            continue;
        }
        zero_arms.push(quote! {
            #index => ::tagconf::is_zero(&self.#ident),
        });
        // Only fields that can receive a default need a `Coerce` impl.
        if !attrs.read_only && attrs.may_default() {
            default_arms.push(quote! {
                #index => ::tagconf::Coerce::coerce_default(&mut self.#ident, literal),
            });
        }
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let record_impl = quote! {
        #[automatically_derived]
        impl #impl_generics ::tagconf::Record for #struct_name #ty_generics #where_clause {
            const FIELDS: &'static [::tagconf::Field] = &[#(#descriptors),*];

            fn is_zero_at(&self, index: usize) -> bool {
                match index {
                    #(#zero_arms)*
                    _ => false,
                }
            }

            #[allow(unused_variables)]
            fn apply_default_at(
                &mut self,
                index: usize,
                literal: &str,
            ) -> ::core::result::Result<(), ::tagconf::CoerceError> {
                match index {
                    #(#default_arms)*
                    _ => ::core::result::Result::Ok(()),
                }
            }
        }
    };

    if container.no_coerce {
        return Ok(record_impl);
    }

    let mut coerce_generics = input.generics.clone();
    if !input.generics.params.is_empty() {
        coerce_generics.make_where_clause().predicates.push(parse_quote! {
            #struct_name #ty_generics: ::tagconf::__private::serde::Serialize
                + ::tagconf::__private::serde::de::DeserializeOwned
        });
    }
    let (_, _, coerce_where) = coerce_generics.split_for_impl();

    Ok(quote! {
        #record_impl

        #[automatically_derived]
        impl #impl_generics ::tagconf::Coerce for #struct_name #ty_generics #coerce_where {
            fn coerce_default(
                &mut self,
                literal: &str,
            ) -> ::core::result::Result<(), ::tagconf::CoerceError> {
                ::tagconf::coerce_record(self, literal)
            }
        }
    })
}
