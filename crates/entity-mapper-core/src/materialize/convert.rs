// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Cell to property value preparation.
//!
//! A cell goes through three steps before it is assigned:
//!
//! 1. `NULL` into a primitive property becomes the zero value of its kind.
//! 2. Conversion: timestamps narrow to dates or times, dates widen to
//!    midnight timestamps, text becomes an enum constant by exact name, and
//!    integers and floats change width when no information is lost.
//! 3. Compatibility: the resulting kind must equal the declared kind, and
//!    `NULL` is only accepted by optional properties.

use chrono::NaiveTime;

use crate::{
    error::MaterializationError,
    value::{Value, ValueKind, ValueType, primitive_default}
};

/// Prepare `cell` for assignment to property `property` of type `target`.
///
/// # Errors
///
/// Returns [`MaterializationError`] naming the property when the cell cannot
/// be assigned.
pub fn prepare(property: &str, target: ValueType, cell: Value) -> Result<Value, MaterializationError> {
    if cell.is_null() {
        if target.is_primitive()
            && let Some(zero) = primitive_default(target.kind)
        {
            return Ok(zero);
        }
        if target.nullable {
            return Ok(Value::Null);
        }
        return Err(MaterializationError::NullIntoRequired {
            property: property.to_owned()
        });
    }

    let value = convert(property, target, cell)?;
    if value.kind() == Some(target.kind) {
        Ok(value)
    } else {
        Err(MaterializationError::Incompatible {
            property: property.to_owned(),
            expected: target.kind,
            found:    value.describe()
        })
    }
}

fn convert(property: &str, target: ValueType, cell: Value) -> Result<Value, MaterializationError> {
    let converted = match (target.kind, cell) {
        (ValueKind::Date, Value::Timestamp(ts)) => Value::Date(ts.date()),
        (ValueKind::Time, Value::Timestamp(ts)) => Value::Time(ts.time()),
        (ValueKind::Timestamp, Value::Date(date)) => Value::Timestamp(date.and_time(NaiveTime::MIN)),
        (ValueKind::Enum, Value::Text(name)) => match target.constant(&name) {
            Some(constant) => Value::Enum(constant),
            None => {
                return Err(MaterializationError::UnknownEnumConstant {
                    property: property.to_owned(),
                    value:    name
                });
            }
        },
        (ValueKind::Enum, Value::Enum(name)) => match target.constant(name) {
            Some(constant) => Value::Enum(constant),
            None => {
                return Err(MaterializationError::UnknownEnumConstant {
                    property: property.to_owned(),
                    value:    name.to_owned()
                });
            }
        },
        (ValueKind::Char, Value::Text(text)) => single_char(&text).map_or(Value::Text(text), Value::Char),
        (kind, cell) if kind.is_integer() => narrow_integer(kind, cell),
        (ValueKind::F64, Value::F32(v)) => Value::F64(f64::from(v)),
        (ValueKind::F64, Value::I8(v)) => Value::F64(f64::from(v)),
        (ValueKind::F64, Value::I16(v)) => Value::F64(f64::from(v)),
        (ValueKind::F64, Value::I32(v)) => Value::F64(f64::from(v)),
        (ValueKind::F32, Value::I8(v)) => Value::F32(f32::from(v)),
        (ValueKind::F32, Value::I16(v)) => Value::F32(f32::from(v)),
        (ValueKind::F32, Value::F64(v)) => narrow_float(v),
        (_, cell) => cell
    };
    Ok(converted)
}

/// Integer cell into an integer property of a possibly different width.
///
/// Out-of-range values are left unchanged and fail the compatibility check.
fn narrow_integer(kind: ValueKind, cell: Value) -> Value {
    let Some(wide) = cell.as_i64() else {
        return cell;
    };
    let converted = match kind {
        ValueKind::I8 => i8::try_from(wide).ok().map(Value::I8),
        ValueKind::I16 => i16::try_from(wide).ok().map(Value::I16),
        ValueKind::I32 => i32::try_from(wide).ok().map(Value::I32),
        ValueKind::I64 => Some(Value::I64(wide)),
        _ => None
    };
    converted.unwrap_or(cell)
}

#[allow(clippy::cast_possible_truncation)]
fn narrow_float(v: f64) -> Value {
    let narrow = v as f32;
    if f64::from(narrow) == v {
        Value::F32(narrow)
    } else {
        Value::F64(v)
    }
}

fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}
