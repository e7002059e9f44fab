/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Message types for FIX protocol.
//!
//! This module provides:
//! - [`MsgType`]: Enumeration of FIX message types
//! - [`FieldMap`]: Ordered container of tag=value pairs
//! - [`Message`]: Header, body and trailer field maps

use crate::checksum::{calculate_checksum, format_checksum};
use crate::error::FieldError;
use crate::field::{Field, FieldCodec, FieldValue, FixField};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// SOH (Start of Header) delimiter used in FIX messages.
pub const SOH: char = '\x01';

/// Header tags recognised when no data dictionary is available.
pub const STANDARD_HEADER_TAGS: &[u32] = &[
    8, 9, 35, 34, 43, 49, 50, 52, 56, 57, 90, 91, 97, 115, 116, 122, 128, 129, 142, 143, 144, 145,
    212, 213, 347, 369, 627, 628, 629, 630, 1128, 1129, 1156,
];

/// Trailer tags recognised when no data dictionary is available.
pub const STANDARD_TRAILER_TAGS: &[u32] = &[93, 89, 10];

/// Returns true if `tag` belongs to the standard header.
#[must_use]
pub fn is_standard_header_field(tag: u32) -> bool {
    STANDARD_HEADER_TAGS.contains(&tag)
}

/// Returns true if `tag` belongs to the standard trailer.
#[must_use]
pub fn is_standard_trailer_field(tag: u32) -> bool {
    STANDARD_TRAILER_TAGS.contains(&tag)
}

macro_rules! msg_types {
    ($($(#[$doc:meta])* $variant:ident = $value:literal, $admin:literal;)*) => {
        /// Standard FIX message types.
        ///
        /// Less common message types are represented as `Custom(String)`.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum MsgType {
            $($(#[$doc])* $variant,)*
            /// Custom or unknown message type.
            Custom(String),
        }

        impl MsgType {
            /// Returns the tag 35 value of this message type.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)*
                    Self::Custom(s) => s.as_str(),
                }
            }

            /// Returns the message name, e.g. `NewOrderSingle`.
            #[must_use]
            pub fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                    Self::Custom(s) => s.as_str(),
                }
            }

            /// Returns true if this is an administrative (session) message.
            #[must_use]
            pub fn is_admin(&self) -> bool {
                match self {
                    $(Self::$variant => $admin,)*
                    Self::Custom(_) => false,
                }
            }
        }

        impl std::str::FromStr for MsgType {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(match s {
                    $($value => Self::$variant,)*
                    other => Self::Custom(other.to_string()),
                })
            }
        }
    };
}

msg_types! {
    /// Heartbeat (0).
    Heartbeat = "0", true;
    /// Test Request (1).
    TestRequest = "1", true;
    /// Resend Request (2).
    ResendRequest = "2", true;
    /// Reject (3).
    Reject = "3", true;
    /// Sequence Reset (4).
    SequenceReset = "4", true;
    /// Logout (5).
    Logout = "5", true;
    /// Indication of Interest (6).
    IndicationOfInterest = "6", false;
    /// Advertisement (7).
    Advertisement = "7", false;
    /// Execution Report (8).
    ExecutionReport = "8", false;
    /// Order Cancel Reject (9).
    OrderCancelReject = "9", false;
    /// Logon (A).
    Logon = "A", true;
    /// News (B).
    News = "B", false;
    /// Email (C).
    Email = "C", false;
    /// New Order Single (D).
    NewOrderSingle = "D", false;
    /// New Order List (E).
    NewOrderList = "E", false;
    /// Order Cancel Request (F).
    OrderCancelRequest = "F", false;
    /// Order Cancel/Replace Request (G).
    OrderCancelReplaceRequest = "G", false;
    /// Order Status Request (H).
    OrderStatusRequest = "H", false;
    /// Market Data Request (V).
    MarketDataRequest = "V", false;
    /// Market Data Snapshot/Full Refresh (W).
    MarketDataSnapshotFullRefresh = "W", false;
    /// Market Data Incremental Refresh (X).
    MarketDataIncrementalRefresh = "X", false;
    /// Business Message Reject (j).
    BusinessMessageReject = "j", false;
}

impl MsgType {
    /// Returns true if this is an application message.
    #[must_use]
    pub fn is_app(&self) -> bool {
        !self.is_admin()
    }
}

impl fmt::Display for MsgType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered container of tag=value pairs.
///
/// Insertion order is preserved. [`FieldMap::set_field`] replaces the first
/// occurrence of a tag, while [`FieldMap::push_field`] appends unconditionally
/// so that repeating-group entries survive decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    fields: SmallVec<[Field; 16]>,
}

impl FieldMap {
    /// Creates an empty field map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the raw text of `tag`, replacing an existing value in place.
    pub fn set_field(&mut self, tag: u32, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|f| f.tag() == tag) {
            Some(field) => field.set_value(value),
            None => self.fields.push(Field::new(tag, value)),
        }
    }

    /// Sets `tag` from a typed value.
    pub fn set_value(&mut self, tag: u32, value: impl Into<FieldValue>) {
        self.set_field(tag, value.into().encode());
    }

    /// Sets a typed field.
    pub fn set<F: FixField>(&mut self, value: impl Into<F::Value>) {
        self.set_field(F::TAG, F::encode(&value.into()));
    }

    /// Appends a field, keeping any earlier occurrence of the same tag.
    pub fn push_field(&mut self, tag: u32, value: impl Into<String>) {
        self.fields.push(Field::new(tag, value));
    }

    /// Removes every occurrence of `tag`, returning the first value.
    pub fn remove_field(&mut self, tag: u32) -> Option<String> {
        let first = self.get_str(tag).map(str::to_string);
        self.fields.retain(|f| f.tag() != tag);
        first
    }

    /// Returns true if `tag` is present.
    #[must_use]
    pub fn is_set_field(&self, tag: u32) -> bool {
        self.fields.iter().any(|f| f.tag() == tag)
    }

    /// Returns the raw text of the first occurrence of `tag`.
    #[must_use]
    pub fn get_str(&self, tag: u32) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.tag() == tag)
            .map(Field::value)
    }

    /// Returns the raw text of `tag`.
    ///
    /// # Errors
    /// Returns `FieldError::NotFound` if the field is absent.
    pub fn get_field(&self, tag: u32) -> Result<&str, FieldError> {
        self.get_str(tag).ok_or(FieldError::NotFound { tag })
    }

    /// Parses `tag` with the given codec.
    ///
    /// # Errors
    /// Returns `FieldError` if the field is absent or does not parse.
    pub fn get_as<T: FieldCodec>(&self, tag: u32) -> Result<T, FieldError> {
        T::decode_fix(tag, self.get_field(tag)?)
    }

    /// Reads a typed field.
    ///
    /// # Errors
    /// Returns `FieldError` if the field is absent or does not parse.
    pub fn get<F: FixField>(&self) -> Result<F::Value, FieldError> {
        F::decode(self.get_field(F::TAG)?)
    }

    /// Reads `tag` as text.
    ///
    /// # Errors
    /// Returns `FieldError::NotFound` if the field is absent.
    pub fn get_string(&self, tag: u32) -> Result<String, FieldError> {
        self.get_as(tag)
    }

    /// Reads `tag` as an integer.
    ///
    /// # Errors
    /// Returns `FieldError` if the field is absent or not an integer.
    pub fn get_int(&self, tag: u32) -> Result<i64, FieldError> {
        self.get_as(tag)
    }

    /// Reads `tag` as a decimal.
    ///
    /// # Errors
    /// Returns `FieldError` if the field is absent or not a decimal.
    pub fn get_decimal(&self, tag: u32) -> Result<Decimal, FieldError> {
        self.get_as(tag)
    }

    /// Reads `tag` as a Y/N boolean.
    ///
    /// # Errors
    /// Returns `FieldError` if the field is absent or not Y/N.
    pub fn get_bool(&self, tag: u32) -> Result<bool, FieldError> {
        self.get_as(tag)
    }

    /// Reads `tag` as a single character.
    ///
    /// # Errors
    /// Returns `FieldError` if the field is absent or not one character.
    pub fn get_char(&self, tag: u32) -> Result<char, FieldError> {
        self.get_as(tag)
    }

    /// Reads `tag` as a UTC timestamp.
    ///
    /// # Errors
    /// Returns `FieldError` if the field is absent or malformed.
    pub fn get_utc_timestamp(&self, tag: u32) -> Result<NaiveDateTime, FieldError> {
        self.get_as(tag)
    }

    /// Reads `tag` as a UTC time of day.
    ///
    /// # Errors
    /// Returns `FieldError` if the field is absent or malformed.
    pub fn get_utc_time_only(&self, tag: u32) -> Result<NaiveTime, FieldError> {
        self.get_as(tag)
    }

    /// Reads `tag` as a UTC date.
    ///
    /// # Errors
    /// Returns `FieldError` if the field is absent or malformed.
    pub fn get_utc_date_only(&self, tag: u32) -> Result<NaiveDate, FieldError> {
        self.get_as(tag)
    }

    /// Returns an iterator over all fields in order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Removes all fields.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Renders the fields as `tag=value` pairs, each followed by `delimiter`.
    #[must_use]
    pub fn render(&self, delimiter: char) -> String {
        let mut out = String::new();
        for field in &self.fields {
            push_field(&mut out, field.tag(), field.value(), delimiter);
        }
        out
    }

    fn wire_len_excluding(&self, excluded: &[u32]) -> usize {
        self.fields
            .iter()
            .filter(|f| !excluded.contains(&f.tag()))
            .map(Field::wire_len)
            .sum()
    }
}

impl fmt::Display for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(SOH))
    }
}

fn push_field(out: &mut String, tag: u32, value: &str, delimiter: char) {
    out.push_str(&tag.to_string());
    out.push('=');
    out.push_str(value);
    out.push(delimiter);
}

/// An owned FIX message split into header, body and trailer.
///
/// BodyLength (9) and CheckSum (10) are always recomputed when the message
/// is rendered, so a message built field by field renders as valid FIX.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    header: FieldMap,
    body: FieldMap,
    trailer: FieldMap,
}

impl Message {
    /// Creates an empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a message from its three sections.
    #[must_use]
    pub fn from_parts(header: FieldMap, body: FieldMap, trailer: FieldMap) -> Self {
        Self {
            header,
            body,
            trailer,
        }
    }

    /// Returns the header fields.
    #[inline]
    #[must_use]
    pub const fn header(&self) -> &FieldMap {
        &self.header
    }

    /// Returns the header fields mutably.
    #[inline]
    pub fn header_mut(&mut self) -> &mut FieldMap {
        &mut self.header
    }

    /// Returns the body fields.
    #[inline]
    #[must_use]
    pub const fn body(&self) -> &FieldMap {
        &self.body
    }

    /// Returns the body fields mutably.
    #[inline]
    pub fn body_mut(&mut self) -> &mut FieldMap {
        &mut self.body
    }

    /// Returns the trailer fields.
    #[inline]
    #[must_use]
    pub const fn trailer(&self) -> &FieldMap {
        &self.trailer
    }

    /// Returns the trailer fields mutably.
    #[inline]
    pub fn trailer_mut(&mut self) -> &mut FieldMap {
        &mut self.trailer
    }

    /// Returns the BeginString (tag 8), if present.
    #[must_use]
    pub fn begin_string(&self) -> Option<&str> {
        self.header.get_str(8)
    }

    /// Returns the raw MsgType (tag 35), if present.
    #[must_use]
    pub fn msg_type_str(&self) -> Option<&str> {
        self.header.get_str(35)
    }

    /// Returns the MsgType (tag 35), if present.
    #[must_use]
    pub fn msg_type(&self) -> Option<MsgType> {
        self.msg_type_str()
            .and_then(|s| s.parse::<MsgType>().ok())
    }

    /// Returns true if the header carries an administrative MsgType.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.msg_type().is_some_and(|t| t.is_admin())
    }

    /// Returns true if the header carries an application MsgType.
    #[must_use]
    pub fn is_app(&self) -> bool {
        self.msg_type().is_some_and(|t| t.is_app())
    }

    /// Returns true if header, body and trailer are all empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.body.is_empty() && self.trailer.is_empty()
    }

    /// Computes BodyLength: every byte after the `9=` field up to the `10=` field.
    #[must_use]
    pub fn body_length(&self) -> usize {
        self.header.wire_len_excluding(&[8, 9, 10])
            + self.body.wire_len_excluding(&[])
            + self.trailer.wire_len_excluding(&[10])
    }

    /// Computes the checksum of the rendered message.
    #[must_use]
    pub fn checksum(&self) -> u8 {
        calculate_checksum(self.render_unchecked(SOH).as_bytes())
    }

    /// Renders the message using `delimiter` in place of SOH.
    ///
    /// BodyLength and CheckSum are recomputed; the checksum always refers
    /// to the SOH-delimited form.
    #[must_use]
    pub fn render(&self, delimiter: char) -> String {
        let checksum = self.checksum();
        let mut out = self.render_unchecked(delimiter);
        push_field(&mut out, 10, &format_checksum(checksum), delimiter);
        out
    }

    fn render_unchecked(&self, delimiter: char) -> String {
        let mut out = String::with_capacity(self.body_length() + 32);
        if let Some(begin_string) = self.begin_string() {
            push_field(&mut out, 8, begin_string, delimiter);
        }
        push_field(&mut out, 9, &self.body_length().to_string(), delimiter);
        if let Some(msg_type) = self.msg_type_str() {
            push_field(&mut out, 35, msg_type, delimiter);
        }
        for field in self
            .header
            .iter()
            .filter(|f| !matches!(f.tag(), 8 | 9 | 10 | 35))
        {
            push_field(&mut out, field.tag(), field.value(), delimiter);
        }
        for field in self.body.iter() {
            push_field(&mut out, field.tag(), field.value(), delimiter);
        }
        for field in self.trailer.iter().filter(|f| f.tag() != 10) {
            push_field(&mut out, field.tag(), field.value(), delimiter);
        }
        out
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(SOH))
    }
}
