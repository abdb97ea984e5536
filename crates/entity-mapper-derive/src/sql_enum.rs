// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(SqlEnum)]` implementation.
//!
//! Maps every unit variant to a constant name. The name is the variant
//! identifier, transformed by `rename_all` when given, and replaced outright
//! by a per-variant `rename`.

mod rename;

use darling::{FromDeriveInput, FromVariant, ast::Data};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Ident, parse_macro_input};

use self::rename::RenameRule;

#[derive(Debug, FromVariant)]
#[darling(attributes(sql_enum))]
struct VariantDef {
    ident: Ident,

    #[darling(default)]
    rename: Option<String>
}

#[derive(Debug, FromDeriveInput)]
#[darling(attributes(sql_enum), supports(enum_unit))]
struct SqlEnumDef {
    ident: Ident,

    data: Data<VariantDef, ()>,

    #[darling(default)]
    rename_all: Option<RenameRule>
}

/// Main entry point for the SqlEnum derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match SqlEnumDef::from_derive_input(&input).and_then(|def| generate(&def)) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

/// Constant names in declaration order, paired with their variants.
fn constants(def: &SqlEnumDef) -> darling::Result<Vec<(&Ident, String)>> {
    let variants = match &def.data {
        Data::Enum(variants) => variants,
        Data::Struct(_) => {
            return Err(darling::Error::custom("SqlEnum can only be derived for enums")
                .with_span(&def.ident));
        }
    };
    if variants.is_empty() {
        return Err(darling::Error::custom("SqlEnum requires at least one variant")
            .with_span(&def.ident));
    }

    let mut errors = darling::Error::accumulator();
    let mut seen: Vec<(&Ident, String)> = Vec::with_capacity(variants.len());
    for variant in variants {
        let name = match (&variant.rename, def.rename_all) {
            (Some(rename), _) => rename.clone(),
            (None, Some(rule)) => rule.apply(&variant.ident.to_string()),
            (None, None) => variant.ident.to_string()
        };
        if seen.iter().any(|(_, other)| *other == name) {
            errors.push(
                darling::Error::custom(format!("duplicate constant name `{name}`"))
                    .with_span(&variant.ident)
            );
        }
        seen.push((&variant.ident, name));
    }
    errors.finish_with(seen)
}

fn generate(def: &SqlEnumDef) -> darling::Result<TokenStream2> {
    let ident = &def.ident;
    let constants = constants(def)?;
    let names: Vec<&String> = constants.iter().map(|(_, name)| name).collect();
    let variants: Vec<&Ident> = constants.iter().map(|(variant, _)| *variant).collect();

    Ok(quote! {
        impl ::entity_mapper::SqlEnum for #ident {
            const CONSTANTS: &'static [&'static str] = &[#(#names),*];

            fn name(&self) -> &'static str {
                match self {
                    #(Self::#variants => #names,)*
                }
            }

            fn from_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    #(#names => ::core::option::Option::Some(Self::#variants),)*
                    _ => ::core::option::Option::None
                }
            }
        }

        impl ::entity_mapper::SqlValue for #ident {
            fn value_type() -> ::entity_mapper::ValueType {
                ::entity_mapper::ValueType::enumeration(
                    <Self as ::entity_mapper::SqlEnum>::CONSTANTS
                )
            }

            fn to_value(&self) -> ::entity_mapper::Value {
                ::entity_mapper::Value::Enum(::entity_mapper::SqlEnum::name(self))
            }

            fn from_value(
                value: ::entity_mapper::Value
            ) -> ::core::result::Result<Self, ::entity_mapper::ConversionError> {
                ::entity_mapper::value::enum_from_value(value)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: DeriveInput) -> darling::Result<SqlEnumDef> {
        SqlEnumDef::from_derive_input(&input)
    }

    fn names(input: DeriveInput) -> Vec<String> {
        let def = parse(input).unwrap();
        constants(&def)
            .unwrap()
            .into_iter()
            .map(|(_, name)| name)
            .collect()
    }

    #[test]
    fn names_default_to_variant_identifiers() {
        let names = names(syn::parse_quote! {
            enum Color { Red, DarkBlue }
        });
        assert_eq!(names, ["Red", "DarkBlue"]);
    }

    #[test]
    fn rename_all_and_rename() {
        let names = names(syn::parse_quote! {
            #[sql_enum(rename_all = "SCREAMING_SNAKE_CASE")]
            enum Status {
                Active,
                OnHold,
                #[sql_enum(rename = "gone")]
                Deleted
            }
        });
        assert_eq!(names, ["ACTIVE", "ON_HOLD", "gone"]);
    }

    #[test]
    fn duplicate_names_fail() {
        let def = parse(syn::parse_quote! {
            enum Clash {
                #[sql_enum(rename = "X")]
                A,
                #[sql_enum(rename = "X")]
                B
            }
        })
        .unwrap();
        assert!(constants(&def).is_err());
    }

    #[test]
    fn data_carrying_variants_fail() {
        assert!(parse(syn::parse_quote! { enum Shape { Circle(f64) } }).is_err());
        assert!(parse(syn::parse_quote! { struct NotEnum { a: i32 } }).is_err());
    }

    #[test]
    fn empty_enum_fails() {
        if let Ok(def) = parse(syn::parse_quote! { enum Never {} }) {
            assert!(constants(&def).is_err());
        }
    }

    #[test]
    fn generates_both_impls() {
        let def = parse(syn::parse_quote! {
            enum Tier { Basic, Gold }
        })
        .unwrap();
        let code = generate(&def).unwrap().to_string();
        assert!(code.contains("impl :: entity_mapper :: SqlEnum for Tier"));
        assert!(code.contains("impl :: entity_mapper :: SqlValue for Tier"));
        assert!(code.contains("& [\"Basic\" , \"Gold\"]"));
    }
}
