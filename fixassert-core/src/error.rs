/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for FixAssert.
//!
//! Typed, domain-specific errors built with `thiserror`. Assertion failures are
//! not errors in this sense: they live in `fixassert-api` and are reported as
//! panics or collected by soft assertions.

use thiserror::Error;

/// Errors that occur while decoding a FIX message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ended in the middle of a field.
    #[error("incomplete message, need more data")]
    Incomplete,

    /// First field is not BeginString (tag 8).
    #[error("invalid begin string: expected 8=FIX.x.y")]
    InvalidBeginString,

    /// Second field is not BodyLength (tag 9).
    #[error("missing body length field (tag 9)")]
    MissingBodyLength,

    /// BodyLength value is not a number.
    #[error("invalid body length value")]
    InvalidBodyLength,

    /// Declared BodyLength differs from the bytes actually present.
    #[error("body length mismatch: declared {declared}, calculated {calculated}")]
    BodyLengthMismatch {
        /// Value carried in tag 9.
        declared: usize,
        /// Length computed from the message bytes.
        calculated: usize,
    },

    /// Third field is not MsgType (tag 35).
    #[error("missing msg type field (tag 35)")]
    MissingMsgType,

    /// The message does not end with a CheckSum field (tag 10).
    #[error("missing checksum field (tag 10)")]
    MissingChecksum,

    /// CheckSum value is not three digits.
    #[error("invalid checksum format: {0}")]
    InvalidChecksum(String),

    /// Checksum mismatch between calculated and declared values.
    #[error("checksum mismatch: calculated {calculated}, declared {declared}")]
    ChecksumMismatch {
        /// Calculated checksum value.
        calculated: u8,
        /// Declared checksum value in message.
        declared: u8,
    },

    /// Tag is not a positive integer.
    #[error("invalid tag format: {0}")]
    InvalidTag(String),

    /// Bytes found after the CheckSum field.
    #[error("unexpected data after checksum at offset {offset}")]
    TrailingData {
        /// Offset of the first unexpected byte.
        offset: usize,
    },

    /// Invalid UTF-8 in a field value.
    #[error("invalid utf-8 in field: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// Message exceeds maximum allowed size.
    #[error("message too large: {size} bytes exceeds maximum {max_size}")]
    MessageTooLarge {
        /// Actual message size in bytes.
        size: usize,
        /// Maximum allowed size in bytes.
        max_size: usize,
    },
}

/// Errors that occur while building or rendering a message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// No BeginString could be derived for the message.
    #[error("missing begin string")]
    MissingBeginString,

    /// Field value cannot be written in tag=value form.
    #[error("invalid field value for tag {tag}: {reason}")]
    InvalidFieldValue {
        /// The tag number of the field.
        tag: u32,
        /// Description of why the value is invalid.
        reason: String,
    },
}

/// Errors raised when reading a field out of a field map.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field is not present.
    #[error("field not found: tag {tag}")]
    NotFound {
        /// Tag number that was looked up.
        tag: u32,
    },

    /// The field is present but its text does not parse as the expected type.
    #[error("incorrect data format for tag {tag}: '{value}' is not a valid {expected}")]
    IncorrectDataFormat {
        /// Tag number of the field.
        tag: u32,
        /// Raw field text.
        value: String,
        /// Name of the expected type.
        expected: &'static str,
    },
}

impl FieldError {
    /// Returns the tag this error refers to.
    #[must_use]
    pub const fn tag(&self) -> u32 {
        match self {
            Self::NotFound { tag } | Self::IncorrectDataFormat { tag, .. } => *tag,
        }
    }
}
