// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(Entity)]` implementation.
//!
//! # Architecture
//!
//! ```text
//! entity.rs (entry point)
//! ├── parse.rs        - EntityDef: struct + field attributes, validation
//! │   ├── access.rs   - field / property access style
//! │   ├── attrs.rs    - darling #[entity(...)] parsing
//! │   └── field.rs    - per-field attributes
//! │       └── column.rs - #[column(...)] and #[join_column(...)]
//! └── declare.rs      - impl Entity { fn declare(..) }
//! ```

mod declare;
pub mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::EntityDef;

/// Main entry point for the Entity derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match EntityDef::from_derive_input(&input) {
        Ok(entity) => declare::generate(&entity).into(),
        Err(err) => err.write_errors().into()
    }
}
