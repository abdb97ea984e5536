// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types.
//!
//! Each layer has its own error enum and the outer layers wrap the inner
//! ones through `#[from]`:
//!
//! ```text
//! PersistenceError
//! ├── MetadataError
//! ├── AccessError ── ConversionError
//! ├── MaterializationError ── AccessError, MetadataError
//! └── Execution(executor error)
//! ```

use std::error::Error;

use thiserror::Error;

use crate::value::{Value, ValueKind};

/// Entity declaration cannot answer a metadata question.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// No member carries the identity marker.
    #[error("entity `{entity}` declares no identity member")]
    MissingIdentity {
        /// Simple type name.
        entity: String
    },

    /// Method-based accessor whose name does not follow the getter
    /// convention.
    #[error("`{method}` is not a getter: expected `get_<name>` or `is_<name>`")]
    NotAGetter {
        /// Method name.
        method: String
    },

    /// Type is not declared as an entity.
    #[error("`{entity}` is not an entity")]
    NotAnEntity {
        /// Simple type name.
        entity: String
    },

    /// INSERT or UPDATE would bind no column.
    #[error("entity `{entity}` has no column eligible for {statement}")]
    NoWritableColumns {
        /// Simple type name.
        entity:    String,
        /// `INSERT` or `UPDATE`.
        statement: &'static str
    }
}

/// Value of the wrong kind handed to a typed conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, found {found}")]
pub struct ConversionError {
    /// Kind the target type accepts.
    pub expected: ValueKind,
    /// Description of the offending value.
    pub found:    String
}

impl ConversionError {
    /// Error for `found` converted into a type of kind `expected`.
    #[must_use]
    pub fn new(expected: ValueKind, found: &Value) -> Self {
        Self {
            expected,
            found: found.describe()
        }
    }
}

/// Reading or writing a member failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Property without a setter.
    #[error("property `{property}` has no setter")]
    ReadOnly {
        /// Property name.
        property: String
    },

    /// Member that cannot be read.
    #[error("member `{property}` cannot be read")]
    NotReadable {
        /// Member name.
        property: String
    },

    /// Typed write rejected the value.
    #[error("cannot assign `{property}`: {source}")]
    Conversion {
        /// Member name.
        property: String,
        /// Underlying conversion failure.
        source:   ConversionError
    }
}

/// A result row could not be turned into an entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaterializationError {
    /// Cell kind does not fit the property type.
    #[error("column value for `{property}` is {found}, property expects {expected}")]
    Incompatible {
        /// Property name.
        property: String,
        /// Declared kind of the property.
        expected: ValueKind,
        /// Description of the cell value.
        found:    String
    },

    /// Text cell names no constant of the enum.
    #[error("`{value}` is not a constant of the enum behind `{property}`")]
    UnknownEnumConstant {
        /// Property name.
        property: String,
        /// Cell text.
        value:    String
    },

    /// `NULL` cell for a non-optional, non-primitive property.
    #[error("NULL column value for required property `{property}`")]
    NullIntoRequired {
        /// Property name.
        property: String
    },

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Metadata(#[from] MetadataError)
}

/// Save, delete or find operation failed.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Materialization(#[from] MaterializationError),

    /// Executor failure.
    #[error("statement execution failed: {0}")]
    Execution(#[source] Box<dyn Error + Send + Sync>),

    /// Insert returned no generated key.
    #[error("insert of `{entity}` returned no generated key")]
    MissingGeneratedKey {
        /// Simple type name.
        entity: String
    }
}

impl PersistenceError {
    /// Wrap an executor error.
    pub fn execution<X: Error + Send + Sync + 'static>(err: X) -> Self {
        Self::Execution(Box::new(err))
    }

    /// Check if the executor failed.
    #[must_use]
    pub const fn is_execution(&self) -> bool {
        matches!(self, Self::Execution(_))
    }
}
