/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Field-type dispatch.
//!
//! Maps a dictionary [`FieldType`] to the [`FieldValue`] variant an actual
//! value is read as. CHAR fields read as strings up to FIX.4.1, where the
//! QuickFIX dictionaries still declared them as text.

use fixassert_core::{FieldError, FieldMap, FieldValue};
use fixassert_dictionary::{Dictionary, FieldType};
use tracing::trace;

/// Value kind a dictionary type is read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Read as text.
    String,
    /// Read as a 64-bit integer.
    Int,
    /// Read as a decimal.
    Float,
    /// Read as Y/N.
    Bool,
    /// Read as a single character.
    Char,
    /// Read as a UTC date.
    Date,
    /// Read as a UTC time of day.
    Time,
    /// Read as a UTC timestamp.
    Timestamp,
}

/// Returns how a field of `field_type` is read for `begin_string`.
#[must_use]
pub fn value_kind(field_type: FieldType, begin_string: &str) -> ValueKind {
    match field_type {
        FieldType::Int
        | FieldType::NumInGroup
        | FieldType::SeqNum
        | FieldType::Length
        | FieldType::TagNum => ValueKind::Int,
        FieldType::Price
        | FieldType::Amt
        | FieldType::Qty
        | FieldType::Float
        | FieldType::PriceOffset
        | FieldType::Percentage => ValueKind::Float,
        FieldType::Boolean => ValueKind::Bool,
        FieldType::UtcDate | FieldType::UtcDateOnly => ValueKind::Date,
        FieldType::UtcTimeOnly => ValueKind::Time,
        FieldType::UtcTimestamp | FieldType::Time => ValueKind::Timestamp,
        FieldType::Char if begin_string > "FIX.4.1" => ValueKind::Char,
        _ => ValueKind::String,
    }
}

/// Reads `tag` from `map` as `kind`.
///
/// # Errors
/// Returns `FieldError::NotFound` if the tag is absent and
/// `FieldError::IncorrectDataFormat` if the value does not parse.
pub fn read_value(map: &FieldMap, tag: u32, kind: ValueKind) -> Result<FieldValue, FieldError> {
    Ok(match kind {
        ValueKind::String => FieldValue::String(map.get_string(tag)?),
        ValueKind::Int => FieldValue::Int(map.get_int(tag)?),
        ValueKind::Float => FieldValue::Float(map.get_decimal(tag)?),
        ValueKind::Bool => FieldValue::Bool(map.get_bool(tag)?),
        ValueKind::Char => FieldValue::Char(map.get_char(tag)?),
        ValueKind::Date => FieldValue::Date(map.get_utc_date_only(tag)?),
        ValueKind::Time => FieldValue::Time(map.get_utc_time_only(tag)?),
        ValueKind::Timestamp => FieldValue::Timestamp(map.get_utc_timestamp(tag)?),
    })
}

/// Reads the typed value of `tag` using the type declared in `dictionary`.
///
/// # Returns
/// `Ok(None)` when the dictionary does not define the tag.
///
/// # Errors
/// See [`read_value`].
pub fn typed_value(
    dictionary: &Dictionary,
    begin_string: &str,
    map: &FieldMap,
    tag: u32,
) -> Result<Option<FieldValue>, FieldError> {
    match dictionary.field_type(tag) {
        Some(field_type) => {
            let kind = value_kind(field_type, begin_string);
            trace!(tag, field_type = field_type.as_str(), ?kind, begin_string, "reading typed value");
            read_value(map, tag, kind).map(Some)
        }
        None => Ok(None),
    }
}
