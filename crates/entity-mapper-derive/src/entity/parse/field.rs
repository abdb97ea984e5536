// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! # Recognized Attributes
//!
//! | Attribute | Stored in |
//! |-----------|-----------|
//! | `#[id]` | [`FieldDef::id`] |
//! | `#[column(...)]` | [`FieldDef::column`] |
//! | `#[transient]` | [`FieldDef::transient`] |
//! | `#[many_to_one]` / `#[one_to_one]` / `#[one_to_many]` | [`FieldDef::relation`] |
//! | `#[join_column(name = "..")]` | [`FieldDef::join_column`] |
//! | `#[inherit]` | [`FieldDef::inherit`] |

mod column;

pub use column::ColumnDef;
use column::parse_join_column;
use quote::{ToTokens, quote};
use syn::{Field, GenericArgument, Ident, PathArguments, Type};

/// Relation attribute on a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    ManyToOne,
    OneToOne,
    OneToMany
}

impl Relation {
    /// Whether the relation is populated from a single foreign key.
    #[must_use]
    pub fn is_to_one(self) -> bool {
        matches!(self, Self::ManyToOne | Self::OneToOne)
    }
}

impl ToTokens for Relation {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        let variant = match self {
            Self::ManyToOne => quote!(ManyToOne),
            Self::OneToOne => quote!(OneToOne),
            Self::OneToMany => quote!(OneToMany)
        };
        tokens.extend(quote!(::entity_mapper::RelationKind::#variant));
    }
}

/// Field definition with all parsed attributes.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// Identity marker.
    pub id: bool,

    /// Column annotation, if present.
    pub column: Option<ColumnDef>,

    /// Transient marker.
    pub transient: bool,

    /// Relation annotation, if present.
    pub relation: Option<Relation>,

    /// Foreign-key column override.
    pub join_column: Option<String>,

    /// Field holds a supertype whose members are spliced in.
    pub inherit: bool
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// - unnamed field
    /// - malformed `#[column]` or `#[join_column]`
    /// - more than one relation attribute
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Entity fields must be named").with_span(field)
        })?;

        let mut def = Self {
            ident,
            ty: field.ty.clone(),
            id: false,
            column: None,
            transient: false,
            relation: None,
            join_column: None,
            inherit: false
        };

        for attr in &field.attrs {
            let relation = if attr.path().is_ident("id") {
                def.id = true;
                None
            } else if attr.path().is_ident("column") {
                def.column = Some(ColumnDef::from_attr(attr)?);
                None
            } else if attr.path().is_ident("transient") {
                def.transient = true;
                None
            } else if attr.path().is_ident("join_column") {
                def.join_column = Some(parse_join_column(attr)?);
                None
            } else if attr.path().is_ident("inherit") {
                def.inherit = true;
                None
            } else if attr.path().is_ident("many_to_one") {
                Some(Relation::ManyToOne)
            } else if attr.path().is_ident("one_to_one") {
                Some(Relation::OneToOne)
            } else if attr.path().is_ident("one_to_many") {
                Some(Relation::OneToMany)
            } else {
                None
            };

            if let Some(relation) = relation {
                if def.relation.is_some() {
                    return Err(
                        darling::Error::custom("a field can carry only one relation attribute")
                            .with_span(attr)
                    );
                }
                def.relation = Some(relation);
            }
        }

        Ok(def)
    }

    /// Field name as a string.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Inner type of an `Option<T>` field.
    #[must_use]
    pub fn option_inner(&self) -> Option<&Type> {
        if let Type::Path(type_path) = &self.ty
            && type_path.qself.is_none()
            && let Some(segment) = type_path.path.segments.last()
            && segment.ident == "Option"
            && let PathArguments::AngleBracketed(args) = &segment.arguments
            && let Some(GenericArgument::Type(inner)) = args.args.first()
        {
            return Some(inner);
        }
        None
    }

    /// Check if the field type is `bool`.
    ///
    /// Property access names the getter of such a field `is_x`.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(&self.ty, Type::Path(p) if p.qself.is_none() && p.path.is_ident("bool"))
    }

    /// Relation populated from a single foreign key.
    #[must_use]
    pub fn to_one(&self) -> Option<Relation> {
        self.relation.filter(|r| r.is_to_one())
    }
}
