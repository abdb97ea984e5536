// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Access style selection.
//!
//! | Value | Declared members |
//! |-------|------------------|
//! | `"field"` | struct fields, through direct references |
//! | `"property"` | `get_x` / `is_x` getters and `set_x` setters |

use darling::FromMeta;

/// How members of the struct are declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessStyle {
    /// Declare the struct fields.
    #[default]
    Field,

    /// Declare bean-style accessor methods named after the fields.
    Property
}

impl FromMeta for AccessStyle {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value.to_lowercase().as_str() {
            "field" => Ok(Self::Field),
            "property" => Ok(Self::Property),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_field() {
        assert_eq!(AccessStyle::default(), AccessStyle::Field);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(
            AccessStyle::from_string("Property").unwrap(),
            AccessStyle::Property
        );
        assert_eq!(AccessStyle::from_string("field").unwrap(), AccessStyle::Field);
    }

    #[test]
    fn rejects_unknown_style() {
        assert!(AccessStyle::from_string("method").is_err());
    }
}
