/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Field types and traits for FIX protocol messages.
//!
//! This module provides:
//! - [`FieldTag`]: Type-safe wrapper for FIX field tag numbers
//! - [`Field`]: A single owned tag=value pair
//! - [`FieldValue`]: Typed value produced by the dictionary-driven dispatch
//! - [`FieldCodec`]: Conversion between FIX text and Rust values
//! - [`FixField`]: Trait for typed field access

use crate::error::FieldError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format used when writing UTCTimestamp values.
pub const UTC_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H:%M:%S%.3f";

/// Format used when writing UTCTimeOnly values.
pub const UTC_TIME_ONLY_FORMAT: &str = "%H:%M:%S%.3f";

/// Format used for UTCDateOnly values.
pub const UTC_DATE_ONLY_FORMAT: &str = "%Y%m%d";

// `%.f` accepts a missing fraction, so seconds-only values parse too.
const UTC_TIMESTAMP_PARSE: &str = "%Y%m%d-%H:%M:%S%.f";
const UTC_TIME_ONLY_PARSE: &str = "%H:%M:%S%.f";

/// FIX field tag number.
///
/// Tags are positive integers that identify fields within a FIX message.
/// Standard tags are defined in the FIX specification (1-5000 range),
/// while user-defined tags use the 5001+ range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FieldTag(u32);

impl FieldTag {
    /// Creates a new field tag.
    ///
    /// # Arguments
    /// * `tag` - The tag number (must be > 0)
    #[inline]
    #[must_use]
    pub const fn new(tag: u32) -> Self {
        Self(tag)
    }

    /// Returns the raw tag number.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns true if the tag is a usable field number.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 > 0
    }

    /// Returns true if this is a user-defined tag (5001+).
    #[inline]
    #[must_use]
    pub const fn is_user_defined(self) -> bool {
        self.0 > 5000
    }
}

impl From<u32> for FieldTag {
    fn from(tag: u32) -> Self {
        Self(tag)
    }
}

impl From<FieldTag> for u32 {
    fn from(tag: FieldTag) -> Self {
        tag.0
    }
}

impl fmt::Display for FieldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single tag=value pair as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    tag: u32,
    value: String,
}

impl Field {
    /// Creates a new field.
    ///
    /// # Arguments
    /// * `tag` - The field tag number
    /// * `value` - The field text, without delimiters
    #[must_use]
    pub fn new(tag: u32, value: impl Into<String>) -> Self {
        Self {
            tag,
            value: value.into(),
        }
    }

    /// Returns the tag number.
    #[inline]
    #[must_use]
    pub const fn tag(&self) -> u32 {
        self.tag
    }

    /// Returns the raw field text.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Number of bytes this field takes on the wire, delimiter included.
    #[must_use]
    pub fn wire_len(&self) -> usize {
        let mut digits = 1;
        let mut tag = self.tag / 10;
        while tag > 0 {
            digits += 1;
            tag /= 10;
        }
        digits + 1 + self.value.len() + 1
    }

    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

/// Typed FIX field value.
///
/// Which variant a field decodes to is decided by its dictionary type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Text value.
    String(String),
    /// Integer value.
    Int(i64),
    /// Decimal value (FLOAT, PRICE, QTY, AMT, ...).
    Float(Decimal),
    /// Boolean value (Y/N).
    Bool(bool),
    /// Single character value.
    Char(char),
    /// UTC date only.
    Date(NaiveDate),
    /// UTC time only.
    Time(NaiveTime),
    /// UTC timestamp.
    Timestamp(NaiveDateTime),
}

impl FieldValue {
    /// Returns the FIX wire text for this value.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Int(v) => v.to_string(),
            Self::Float(v) => v.normalize().to_string(),
            Self::Bool(v) => String::from(if *v { "Y" } else { "N" }),
            Self::Char(c) => c.to_string(),
            Self::Date(d) => d.format(UTC_DATE_ONLY_FORMAT).to_string(),
            Self::Time(t) => t.format(UTC_TIME_ONLY_FORMAT).to_string(),
            Self::Timestamp(ts) => ts.format(UTC_TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Returns the text used to show this value in assertion failures.
    ///
    /// Strings are double-quoted, characters single-quoted, decimals always
    /// carry a fractional part and dates use ISO-8601.
    #[must_use]
    pub fn representation(&self) -> String {
        match self {
            Self::String(s) => format!("\"{s}\""),
            Self::Int(v) => v.to_string(),
            Self::Float(v) => {
                let normalized = v.normalize();
                if normalized.scale() == 0 {
                    format!("{normalized}.0")
                } else {
                    normalized.to_string()
                }
            }
            Self::Bool(v) => v.to_string(),
            Self::Char(c) => format!("'{c}'"),
            Self::Date(d) => d.format("%Y-%m-%d").to_string(),
            Self::Time(t) => t.to_string(),
            Self::Timestamp(ts) => ts.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
        }
    }

    /// Compares two values.
    ///
    /// Decimals compare numerically. With `lenient_numeric`, an `Int` also
    /// matches a `Float` of the same numeric value.
    #[must_use]
    pub fn matches(&self, other: &Self, lenient_numeric: bool) -> bool {
        match (self, other) {
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(i), Self::Float(d)) | (Self::Float(d), Self::Int(i)) if lenient_numeric => {
                Decimal::from(*i) == *d
            }
            _ => self == other,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<char> for FieldValue {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Decimal::from_f64(value).map_or_else(|| Self::String(value.to_string()), Self::Float)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<NaiveTime> for FieldValue {
    fn from(value: NaiveTime) -> Self {
        Self::Time(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        Self::Timestamp(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value.naive_utc())
    }
}

/// Conversion between FIX field text and a Rust value.
pub trait FieldCodec: Sized + Clone + PartialEq + fmt::Debug {
    /// Parses the FIX text of field `tag`.
    ///
    /// # Errors
    /// Returns `FieldError::IncorrectDataFormat` if the text does not parse.
    fn decode_fix(tag: u32, value: &str) -> Result<Self, FieldError>;

    /// Writes the value as FIX text.
    fn encode_fix(&self) -> String;

    /// Converts the value into its dynamically typed form.
    fn to_field_value(&self) -> FieldValue;
}

fn incorrect(tag: u32, value: &str, expected: &'static str) -> FieldError {
    FieldError::IncorrectDataFormat {
        tag,
        value: value.to_string(),
        expected,
    }
}

impl FieldCodec for String {
    fn decode_fix(_tag: u32, value: &str) -> Result<Self, FieldError> {
        Ok(value.to_string())
    }

    fn encode_fix(&self) -> String {
        self.clone()
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.clone())
    }
}

impl FieldCodec for i64 {
    fn decode_fix(tag: u32, value: &str) -> Result<Self, FieldError> {
        value.parse().map_err(|_| incorrect(tag, value, "integer"))
    }

    fn encode_fix(&self) -> String {
        self.to_string()
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Int(*self)
    }
}

impl FieldCodec for u64 {
    fn decode_fix(tag: u32, value: &str) -> Result<Self, FieldError> {
        value
            .parse()
            .map_err(|_| incorrect(tag, value, "unsigned integer"))
    }

    fn encode_fix(&self) -> String {
        self.to_string()
    }

    fn to_field_value(&self) -> FieldValue {
        i64::try_from(*self).map_or_else(|_| FieldValue::String(self.to_string()), FieldValue::Int)
    }
}

impl FieldCodec for Decimal {
    fn decode_fix(tag: u32, value: &str) -> Result<Self, FieldError> {
        value.parse().map_err(|_| incorrect(tag, value, "decimal"))
    }

    fn encode_fix(&self) -> String {
        self.normalize().to_string()
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }
}

impl FieldCodec for bool {
    fn decode_fix(tag: u32, value: &str) -> Result<Self, FieldError> {
        match value {
            "Y" => Ok(true),
            "N" => Ok(false),
            _ => Err(incorrect(tag, value, "boolean (Y/N)")),
        }
    }

    fn encode_fix(&self) -> String {
        String::from(if *self { "Y" } else { "N" })
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Bool(*self)
    }
}

impl FieldCodec for char {
    fn decode_fix(tag: u32, value: &str) -> Result<Self, FieldError> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(incorrect(tag, value, "single character")),
        }
    }

    fn encode_fix(&self) -> String {
        self.to_string()
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Char(*self)
    }
}

impl FieldCodec for NaiveDateTime {
    fn decode_fix(tag: u32, value: &str) -> Result<Self, FieldError> {
        NaiveDateTime::parse_from_str(value, UTC_TIMESTAMP_PARSE)
            .map_err(|_| incorrect(tag, value, "UTC timestamp"))
    }

    fn encode_fix(&self) -> String {
        self.format(UTC_TIMESTAMP_FORMAT).to_string()
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Timestamp(*self)
    }
}

impl FieldCodec for NaiveTime {
    fn decode_fix(tag: u32, value: &str) -> Result<Self, FieldError> {
        NaiveTime::parse_from_str(value, UTC_TIME_ONLY_PARSE)
            .map_err(|_| incorrect(tag, value, "UTC time"))
    }

    fn encode_fix(&self) -> String {
        self.format(UTC_TIME_ONLY_FORMAT).to_string()
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Time(*self)
    }
}

impl FieldCodec for NaiveDate {
    fn decode_fix(tag: u32, value: &str) -> Result<Self, FieldError> {
        NaiveDate::parse_from_str(value, UTC_DATE_ONLY_FORMAT)
            .map_err(|_| incorrect(tag, value, "UTC date"))
    }

    fn encode_fix(&self) -> String {
        self.format(UTC_DATE_ONLY_FORMAT).to_string()
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Date(*self)
    }
}

/// Trait for typed FIX field access.
///
/// Implemented by the field markers in [`crate::fields`]. The value type
/// is fixed per field, independent of any dictionary.
pub trait FixField {
    /// The tag number for this field.
    const TAG: u32;

    /// The FIX name of this field.
    const NAME: &'static str;

    /// The Rust type for this field's value.
    type Value: FieldCodec;

    /// Decodes the field value from its FIX text.
    ///
    /// # Errors
    /// Returns `FieldError::IncorrectDataFormat` if the value cannot be decoded.
    fn decode(value: &str) -> Result<Self::Value, FieldError> {
        Self::Value::decode_fix(Self::TAG, value)
    }

    /// Encodes the field value as FIX text.
    fn encode(value: &Self::Value) -> String {
        value.encode_fix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_field_tag() {
        let tag = FieldTag::new(35);
        assert_eq!(tag.value(), 35);
        assert!(tag.is_valid());
        assert!(!tag.is_user_defined());
        assert!(!FieldTag::new(0).is_valid());
        assert!(FieldTag::new(5001).is_user_defined());
    }

    #[test]
    fn test_field_wire_len() {
        assert_eq!(Field::new(8, "FIX.4.4").wire_len(), "8=FIX.4.4\x01".len());
        assert_eq!(Field::new(1128, "9").wire_len(), "1128=9\x01".len());
    }

    #[test]
    fn test_field_value_encode() {
        assert_eq!(FieldValue::from("test").encode(), "test");
        assert_eq!(FieldValue::Int(42).encode(), "42");
        assert_eq!(FieldValue::Bool(true).encode(), "Y");
        assert_eq!(FieldValue::Bool(false).encode(), "N");
        assert_eq!(FieldValue::Float(dec("300.00")).encode(), "300");
        let ts = NaiveDate::from_ymd_opt(2010, 2, 25)
            .unwrap()
            .and_hms_milli_opt(19, 39, 52, 20)
            .unwrap();
        assert_eq!(FieldValue::from(ts).encode(), "20100225-19:39:52.020");
    }

    #[test]
    fn test_field_value_representation() {
        assert_eq!(FieldValue::from("13346").representation(), "\"13346\"");
        assert_eq!(FieldValue::from('1').representation(), "'1'");
        assert_eq!(FieldValue::from(1000.0).representation(), "1000.0");
        assert_eq!(FieldValue::from(5.25).representation(), "5.25");
        assert_eq!(FieldValue::Int(60).representation(), "60");
        let ts = NaiveDate::from_ymd_opt(2010, 2, 25)
            .unwrap()
            .and_hms_milli_opt(19, 39, 52, 20)
            .unwrap();
        assert_eq!(
            FieldValue::from(ts).representation(),
            "2010-02-25T19:39:52.020"
        );
    }

    #[test]
    fn test_field_value_matches() {
        let float = FieldValue::Float(dec("1000.00"));
        assert!(float.matches(&FieldValue::from(1000.0), false));
        assert!(float.matches(&FieldValue::Int(1000), true));
        assert!(!float.matches(&FieldValue::Int(1000), false));
        assert!(!FieldValue::from("1").matches(&FieldValue::from('1'), true));
    }

    #[test]
    fn test_codec_timestamp_with_and_without_millis() {
        let with = NaiveDateTime::decode_fix(52, "20190605-17:09:11.495").unwrap();
        let without = NaiveDateTime::decode_fix(52, "20200408-06:49:07").unwrap();
        assert_eq!(with.format("%H:%M:%S%.3f").to_string(), "17:09:11.495");
        assert_eq!(without.encode_fix(), "20200408-06:49:07.000");
    }

    #[test]
    fn test_codec_rejects_bad_values() {
        assert!(matches!(
            i64::decode_fix(34, "x1"),
            Err(FieldError::IncorrectDataFormat { tag: 34, .. })
        ));
        assert!(bool::decode_fix(43, "T").is_err());
        assert!(char::decode_fix(54, "12").is_err());
        assert!(char::decode_fix(54, "").is_err());
        assert!(NaiveDate::decode_fix(75, "2020-01-01").is_err());
    }

    #[test]
    fn test_codec_time_and_date() {
        let time = NaiveTime::decode_fix(273, "06:49:07").unwrap();
        assert_eq!(time.encode_fix(), "06:49:07.000");
        let date = NaiveDate::decode_fix(272, "20200408").unwrap();
        assert_eq!(date.to_field_value(), FieldValue::Date(date));
    }
}
