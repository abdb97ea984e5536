// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generation of the `Entity::declare` implementation.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl ::entity_mapper::Entity for Order {
//!     fn declare(decl: &mut ::entity_mapper::Declaration<Self>) {
//!         decl.entity().table("orders");
//!         decl.field("id", |e| &e.id, |e| &mut e.id).id();
//!         decl.to_one("buyer", ::entity_mapper::RelationKind::ManyToOne, |e| &mut e.buyer)
//!             .join_column("buyer_fk");
//!     }
//! }
//! ```
//!
//! With `access = "property"` every field `x: T` becomes a getter
//! (`get_x`, or `is_x` for `bool`) carrying the annotations, plus a `set_x`
//! setter taking `T`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::parse::{AccessStyle, EntityDef, FieldDef, MappingDef, Relation};

/// Generate the `Entity` implementation.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let ident = &entity.ident;
    let header = header(entity);
    let members = entity.fields.iter().map(|field| match entity.access {
        AccessStyle::Field => field_member(field),
        AccessStyle::Property => property_members(field)
    });

    quote! {
        impl ::entity_mapper::Entity for #ident {
            fn declare(decl: &mut ::entity_mapper::Declaration<Self>) {
                #header
                #(#members)*
            }
        }
    }
}

fn header(entity: &EntityDef) -> TokenStream {
    let mapping = match entity.mapping {
        MappingDef::Entity => quote!(decl.entity();),
        MappingDef::MappedSuperclass => quote!(decl.mapped_superclass();),
        MappingDef::Unmapped => TokenStream::new()
    };
    let table = entity
        .table
        .as_ref()
        .map(|table| quote!(decl.table(#table);));
    quote! {
        #mapping
        #table
    }
}

fn inherit(field: &FieldDef) -> TokenStream {
    let ident = &field.ident;
    quote! {
        decl.inherit(|e| &e.#ident, |e| &mut e.#ident);
    }
}

fn field_member(field: &FieldDef) -> TokenStream {
    if field.inherit {
        return inherit(field);
    }

    let ident = &field.ident;
    let name = field.name_str();
    let annotations = annotations(field);

    let declared = if field.transient {
        quote!(decl.opaque_field(#name))
    } else {
        match field.relation {
            Some(Relation::OneToMany) => quote!(decl.to_many(#name)),
            Some(kind) => quote!(decl.to_one(#name, #kind, |e| &mut e.#ident)),
            None => quote!(decl.field(#name, |e| &e.#ident, |e| &mut e.#ident))
        }
    };

    quote! {
        #declared #annotations;
    }
}

fn property_members(field: &FieldDef) -> TokenStream {
    if field.inherit {
        return inherit(field);
    }

    let name = field.name_str();
    let getter = if field.is_bool() {
        format_ident!("is_{}", name)
    } else {
        format_ident!("get_{}", name)
    };
    let setter = format_ident!("set_{}", name);
    let getter_name = getter.to_string();
    let setter_name = setter.to_string();
    let annotations = annotations(field);

    if field.transient {
        return quote! {
            decl.opaque_getter(#getter_name) #annotations;
        };
    }

    match (field.relation, field.option_inner()) {
        (Some(Relation::OneToMany), _) => quote! {
            decl.to_many_getter(#getter_name) #annotations;
        },
        (Some(kind), Some(inner)) => quote! {
            decl.to_one_getter(#getter_name, #kind) #annotations;
            decl.to_one_setter(#setter_name, |e: &mut Self, v: #inner| {
                e.#setter(::core::option::Option::Some(v))
            });
        },
        _ => {
            let ty = &field.ty;
            quote! {
                decl.getter(#getter_name, |e: &Self| e.#getter()) #annotations;
                decl.setter(#setter_name, |e: &mut Self, v: #ty| e.#setter(v));
            }
        }
    }
}

fn annotations(field: &FieldDef) -> TokenStream {
    let mut chain = TokenStream::new();
    if field.id {
        chain.extend(quote!(.id()));
    }
    if let Some(column) = &field.column {
        let name = &column.name;
        let insertable = column.insertable;
        let updatable = column.updatable;
        chain.extend(quote! {
            .column(::entity_mapper::Column {
                name: #name,
                insertable: #insertable,
                updatable: #updatable
            })
        });
    }
    if field.transient {
        chain.extend(quote!(.transient()));
    }
    if let Some(join) = &field.join_column {
        chain.extend(quote!(.join_column(#join)));
    }
    chain
}
