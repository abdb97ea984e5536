// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapper configuration.
//!
//! With the `serde` feature enabled, [`MapperConfig`] can be loaded from any
//! serde format. Missing fields take their defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Suffix appended to a to-one relation's column name to form its
/// foreign-key column.
pub const DEFAULT_FOREIGN_KEY_SUFFIX: &str = "_id";

/// Row materialization settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MapperConfig {
    /// Appended to relation column names unless a join column is declared.
    pub foreign_key_suffix: String
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            foreign_key_suffix: DEFAULT_FOREIGN_KEY_SUFFIX.to_owned()
        }
    }
}

impl MapperConfig {
    /// Replace the foreign-key suffix.
    #[must_use]
    pub fn with_foreign_key_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.foreign_key_suffix = suffix.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_suffix() {
        assert_eq!(MapperConfig::default().foreign_key_suffix, "_id");
    }

    #[test]
    fn custom_suffix() {
        let config = MapperConfig::default().with_foreign_key_suffix("_fk");
        assert_eq!(config.foreign_key_suffix, "_fk");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_fills_defaults() {
        let config: MapperConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MapperConfig::default());

        let config: MapperConfig =
            serde_json::from_str(r#"{"foreign_key_suffix":"Ref"}"#).unwrap();
        assert_eq!(config.foreign_key_suffix, "Ref");
    }
}
