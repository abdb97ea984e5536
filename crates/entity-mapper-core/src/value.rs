// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Typed cell and parameter values.
//!
//! Every value that crosses the boundary to the executor, in either
//! direction, is a [`Value`]. Declared member types are described by
//! [`ValueType`], which the row materializer uses to decide null defaults,
//! conversions and compatibility.
//!
//! # Type Mapping
//!
//! | Rust type | [`ValueKind`] | Primitive |
//! |-----------|---------------|-----------|
//! | `bool` | `Bool` | yes |
//! | `char` | `Char` | yes |
//! | `i8`..`i64` | `I8`..`I64` | yes |
//! | `f32`, `f64` | `F32`, `F64` | yes |
//! | `String` | `Text` | no |
//! | `NaiveDate` | `Date` | no |
//! | `NaiveTime` | `Time` | no |
//! | `NaiveDateTime` | `Timestamp` | no |
//! | `#[derive(SqlEnum)]` enums | `Enum` | no |
//! | `Vec<T>` | `List` | no |
//! | `BTreeMap<String, T>`, `HashMap<String, T>` | `Map` | no |
//! | `Option<T>` | kind of `T`, nullable | no |

use std::{
    collections::{BTreeMap, HashMap},
    fmt
};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ConversionError;

/// A single typed cell or bound parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// SQL `NULL`.
    Null,
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Text(String),
    /// Date without time of day.
    Date(NaiveDate),
    /// Time of day without date.
    Time(NaiveTime),
    /// Date and time of day.
    Timestamp(NaiveDateTime),
    /// Enum constant, by name.
    Enum(&'static str),
    List(Vec<Value>),
    Map(Vec<(String, Value)>)
}

impl Value {
    /// Kind of this value, `None` for `NULL`.
    #[must_use]
    pub const fn kind(&self) -> Option<ValueKind> {
        Some(match self {
            Self::Null => return None,
            Self::Bool(_) => ValueKind::Bool,
            Self::Char(_) => ValueKind::Char,
            Self::I8(_) => ValueKind::I8,
            Self::I16(_) => ValueKind::I16,
            Self::I32(_) => ValueKind::I32,
            Self::I64(_) => ValueKind::I64,
            Self::F32(_) => ValueKind::F32,
            Self::F64(_) => ValueKind::F64,
            Self::Text(_) => ValueKind::Text,
            Self::Date(_) => ValueKind::Date,
            Self::Time(_) => ValueKind::Time,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::Enum(_) => ValueKind::Enum,
            Self::List(_) => ValueKind::List,
            Self::Map(_) => ValueKind::Map
        })
    }

    /// Check for SQL `NULL`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Human readable kind name, `"NULL"` for nulls.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind() {
            Some(kind) => kind.to_string(),
            None => "NULL".to_owned()
        }
    }

    /// Widen any integer value to `i64`.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::I8(v) => Some(v as i64),
            Self::I16(v) => Some(v as i64),
            Self::I32(v) => Some(v as i64),
            Self::I64(v) => Some(v),
            _ => None
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl<T: SqlValue> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.to_value()
    }
}

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => Text,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => Timestamp
}

/// Declared kind of a member.
///
/// `Entity` and `Opaque` never appear on values: they describe relation
/// members and members whose type has no column representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
    Text,
    Date,
    Time,
    Timestamp,
    Enum,
    List,
    Map,
    /// Reference to another entity.
    Entity,
    /// Declared type without a column representation.
    Opaque
}

impl ValueKind {
    /// Kinds that have a zero value and can never hold `NULL` unless
    /// declared optional.
    #[must_use]
    pub const fn is_primitive_like(self) -> bool {
        matches!(
            self,
            Self::Bool
                | Self::Char
                | Self::I8
                | Self::I16
                | Self::I32
                | Self::I64
                | Self::F32
                | Self::F64
        )
    }

    /// Sequence or mapping containers.
    #[must_use]
    pub const fn is_multi_valued(self) -> bool {
        matches!(self, Self::List | Self::Map)
    }

    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::Time | Self::Timestamp)
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    /// Name used in error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Text => "text",
            Self::Date => "date",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::Enum => "enum",
            Self::List => "list",
            Self::Map => "map",
            Self::Entity => "entity",
            Self::Opaque => "opaque"
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declared type of a member: kind, nullability and enum constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueType {
    /// Declared kind.
    pub kind:      ValueKind,
    /// Declared as `Option<T>`.
    pub nullable:  bool,
    /// Constant names when `kind` is [`ValueKind::Enum`].
    pub constants: &'static [&'static str]
}

impl ValueType {
    /// Non-nullable type of the given kind.
    #[must_use]
    pub const fn new(kind: ValueKind) -> Self {
        Self {
            kind,
            nullable: false,
            constants: &[]
        }
    }

    /// Enum type with the given constant names.
    #[must_use]
    pub const fn enumeration(constants: &'static [&'static str]) -> Self {
        Self {
            kind: ValueKind::Enum,
            nullable: false,
            constants
        }
    }

    /// Same type, declared as `Option<T>`.
    #[must_use]
    pub const fn nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    /// Primitive-like kind not wrapped in `Option`.
    ///
    /// These receive a zero default when the column is `NULL`.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        self.kind.is_primitive_like() && !self.nullable
    }

    /// Find the constant with exactly this name.
    #[must_use]
    pub fn constant(&self, name: &str) -> Option<&'static str> {
        self.constants.iter().copied().find(|c| *c == name)
    }
}

/// Zero value for primitive-like kinds.
///
/// Numeric kinds get `0`, booleans `false`, characters `'\0'`. Every other
/// kind has no default.
#[must_use]
pub const fn primitive_default(kind: ValueKind) -> Option<Value> {
    Some(match kind {
        ValueKind::Bool => Value::Bool(false),
        ValueKind::Char => Value::Char('\0'),
        ValueKind::I8 => Value::I8(0),
        ValueKind::I16 => Value::I16(0),
        ValueKind::I32 => Value::I32(0),
        ValueKind::I64 => Value::I64(0),
        ValueKind::F32 => Value::F32(0.0),
        ValueKind::F64 => Value::F64(0.0),
        _ => return None
    })
}

/// Rust types that map to a single column value.
pub trait SqlValue: Sized {
    /// Declared type of members holding this type.
    fn value_type() -> ValueType;

    /// Convert into a bindable value.
    fn to_value(&self) -> Value;

    /// Convert back from a value already checked against
    /// [`value_type`](Self::value_type).
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] if the value has a different kind.
    fn from_value(value: Value) -> Result<Self, ConversionError>;
}

/// Rust enums stored by constant name.
///
/// Implemented by `#[derive(SqlEnum)]`.
pub trait SqlEnum: Sized + 'static {
    /// All constant names, in declaration order.
    const CONSTANTS: &'static [&'static str];

    /// Name of this constant.
    fn name(&self) -> &'static str;

    /// Constant with exactly this name.
    fn from_name(name: &str) -> Option<Self>;
}

/// [`SqlValue::from_value`] for [`SqlEnum`] types.
///
/// Accepts both enum values and text holding a constant name.
///
/// # Errors
///
/// Returns [`ConversionError`] for other kinds or unknown names.
pub fn enum_from_value<T: SqlEnum>(value: Value) -> Result<T, ConversionError> {
    let name = match &value {
        Value::Enum(name) => *name,
        Value::Text(name) => name.as_str(),
        _ => return Err(ConversionError::new(ValueKind::Enum, &value))
    };
    T::from_name(name).ok_or_else(|| ConversionError::new(ValueKind::Enum, &value))
}

macro_rules! scalar_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl SqlValue for $ty {
                fn value_type() -> ValueType {
                    ValueType::new(ValueKind::$variant)
                }

                fn to_value(&self) -> Value {
                    Value::$variant(self.clone())
                }

                fn from_value(value: Value) -> Result<Self, ConversionError> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        other => Err(ConversionError::new(ValueKind::$variant, &other))
                    }
                }
            }
        )*
    };
}

scalar_value! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => Text,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => Timestamp
}

impl<T: SqlValue> SqlValue for Option<T> {
    fn value_type() -> ValueType {
        T::value_type().nullable()
    }

    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null
        }
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some)
        }
    }
}

impl<T: SqlValue> SqlValue for Vec<T> {
    fn value_type() -> ValueType {
        ValueType::new(ValueKind::List)
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(SqlValue::to_value).collect())
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(ConversionError::new(ValueKind::List, &other))
        }
    }
}

impl<T: SqlValue> SqlValue for BTreeMap<String, T> {
    fn value_type() -> ValueType {
        ValueType::new(ValueKind::Map)
    }

    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect()
        )
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| T::from_value(v).map(|v| (k, v)))
                .collect(),
            other => Err(ConversionError::new(ValueKind::Map, &other))
        }
    }
}

impl<T: SqlValue> SqlValue for HashMap<String, T> {
    fn value_type() -> ValueType {
        ValueType::new(ValueKind::Map)
    }

    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect()
        )
    }

    fn from_value(value: Value) -> Result<Self, ConversionError> {
        match value {
            Value::Map(entries) => entries
                .into_iter()
                .map(|(k, v)| T::from_value(v).map(|v| (k, v)))
                .collect(),
            other => Err(ConversionError::new(ValueKind::Map, &other))
        }
    }
}
