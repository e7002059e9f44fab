/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! FIX tag=value message decoder.
//!
//! This module parses a SOH-delimited FIX message into an owned
//! [`Message`], placing each field in the header, body or trailer. Field
//! boundaries are located with `memchr`.

use fixassert_core::checksum::{calculate_checksum, parse_checksum};
use fixassert_core::error::DecodeError;
use fixassert_core::message::{
    FieldMap, Message, is_standard_header_field, is_standard_trailer_field,
};
use fixassert_dictionary::Dictionary;
use memchr::memchr;
use tracing::trace;

/// SOH (Start of Header) delimiter used in FIX messages.
pub const SOH: u8 = 0x01;

/// Equals sign delimiter between tag and value.
pub const EQUALS: u8 = b'=';

/// Default upper bound on the size of a decoded message.
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Body,
    Trailer,
}

/// FIX tag=value message decoder.
///
/// Field placement follows the dictionary given with
/// [`Decoder::with_dictionary`], or the standard header and trailer tag sets
/// otherwise. Header fields are accepted until the first body field; the
/// trailer starts at the first trailer field.
#[derive(Debug)]
pub struct Decoder<'a> {
    /// Input buffer.
    input: &'a [u8],
    /// Current position in the buffer.
    offset: usize,
    /// Whether to validate checksums.
    validate_checksum: bool,
    /// Whether to validate the declared body length.
    validate_body_length: bool,
    /// Maximum accepted input size.
    max_message_size: usize,
    /// Dictionary used to classify header and trailer fields.
    dictionary: Option<&'a Dictionary>,
}

impl<'a> Decoder<'a> {
    /// Creates a new decoder for the given input buffer.
    ///
    /// # Arguments
    /// * `input` - The FIX message bytes to decode
    #[inline]
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            offset: 0,
            validate_checksum: true,
            validate_body_length: true,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
            dictionary: None,
        }
    }

    /// Sets whether to validate checksums during decoding.
    #[inline]
    #[must_use]
    pub const fn with_checksum_validation(mut self, validate: bool) -> Self {
        self.validate_checksum = validate;
        self
    }

    /// Sets whether to check the declared BodyLength against the input.
    #[inline]
    #[must_use]
    pub const fn with_body_length_validation(mut self, validate: bool) -> Self {
        self.validate_body_length = validate;
        self
    }

    /// Sets the maximum accepted message size in bytes.
    #[inline]
    #[must_use]
    pub const fn with_max_message_size(mut self, max_message_size: usize) -> Self {
        self.max_message_size = max_message_size;
        self
    }

    /// Classifies header and trailer fields with `dictionary`.
    #[inline]
    #[must_use]
    pub const fn with_dictionary(mut self, dictionary: &'a Dictionary) -> Self {
        self.dictionary = Some(dictionary);
        self
    }

    fn is_header_field(&self, tag: u32) -> bool {
        match self.dictionary {
            Some(dictionary) if !dictionary.header().is_empty() => dictionary.is_header_field(tag),
            _ => is_standard_header_field(tag),
        }
    }

    fn is_trailer_field(&self, tag: u32) -> bool {
        match self.dictionary {
            Some(dictionary) if !dictionary.trailer().is_empty() => {
                dictionary.is_trailer_field(tag)
            }
            _ => is_standard_trailer_field(tag),
        }
    }

    /// Decodes one complete FIX message from the buffer.
    ///
    /// # Errors
    /// Returns `DecodeError` if the message is malformed, incomplete, too
    /// large, followed by extra bytes, or fails checksum or body length
    /// validation.
    pub fn decode(&mut self) -> Result<Message, DecodeError> {
        if self.input.len() > self.max_message_size {
            return Err(DecodeError::MessageTooLarge {
                size: self.input.len(),
                max_size: self.max_message_size,
            });
        }

        let start_offset = self.offset;
        let mut header = FieldMap::new();
        let mut body = FieldMap::new();
        let mut trailer = FieldMap::new();

        // BeginString (tag 8)
        match self.next_field()? {
            Some((8, value)) => header.push_field(8, value),
            Some(_) => return Err(DecodeError::InvalidBeginString),
            None => return Err(DecodeError::Incomplete),
        }

        // BodyLength (tag 9)
        let declared = match self.next_field()? {
            Some((9, value)) => {
                header.push_field(9, value);
                value
                    .parse::<usize>()
                    .map_err(|_| DecodeError::InvalidBodyLength)?
            }
            _ => return Err(DecodeError::MissingBodyLength),
        };
        let body_start = self.offset;

        // MsgType (tag 35)
        match self.next_field()? {
            Some((35, value)) => header.push_field(35, value),
            _ => return Err(DecodeError::MissingMsgType),
        }

        let mut section = Section::Header;
        let mut checksum: Option<(usize, &'a str)> = None;
        loop {
            let field_start = self.offset;
            let Some((tag, value)) = self.next_field()? else {
                break;
            };
            if tag == 10 {
                trailer.push_field(10, value);
                checksum = Some((field_start, value));
                break;
            }

            if section == Section::Header && !self.is_header_field(tag) {
                section = Section::Body;
            }
            if section != Section::Trailer && self.is_trailer_field(tag) {
                section = Section::Trailer;
            }
            match section {
                Section::Header => header.push_field(tag, value),
                Section::Body => body.push_field(tag, value),
                Section::Trailer => trailer.push_field(tag, value),
            }
        }

        let (checksum_start, checksum_text) = checksum.ok_or(DecodeError::MissingChecksum)?;

        if self.validate_body_length {
            let calculated = checksum_start - body_start;
            if calculated != declared {
                return Err(DecodeError::BodyLengthMismatch {
                    declared,
                    calculated,
                });
            }
        }

        if self.validate_checksum {
            let declared = parse_checksum(checksum_text)
                .ok_or_else(|| DecodeError::InvalidChecksum(checksum_text.to_string()))?;
            let calculated = calculate_checksum(&self.input[start_offset..checksum_start]);
            if calculated != declared {
                return Err(DecodeError::ChecksumMismatch {
                    calculated,
                    declared,
                });
            }
        }

        if !self.is_empty() {
            return Err(DecodeError::TrailingData {
                offset: self.offset,
            });
        }

        trace!(
            header = header.len(),
            body = body.len(),
            trailer = trailer.len(),
            "decoded message"
        );
        Ok(Message::from_parts(header, body, trailer))
    }

    /// Parses the next field from the buffer.
    ///
    /// # Returns
    /// The next tag and value, or `None` if the buffer is exhausted.
    ///
    /// # Errors
    /// Returns `DecodeError::Incomplete` if a field is not terminated,
    /// `DecodeError::InvalidTag` for a non-numeric tag, or
    /// `DecodeError::InvalidUtf8` for a value that is not UTF-8.
    pub fn next_field(&mut self) -> Result<Option<(u32, &'a str)>, DecodeError> {
        if self.is_empty() {
            return Ok(None);
        }

        let remaining = &self.input[self.offset..];
        let eq_pos = memchr(EQUALS, remaining).ok_or(DecodeError::Incomplete)?;
        let tag_bytes = &remaining[..eq_pos];
        let tag = parse_tag(tag_bytes).ok_or_else(|| {
            DecodeError::InvalidTag(String::from_utf8_lossy(tag_bytes).into_owned())
        })?;

        let value_start = eq_pos + 1;
        let soh_pos = memchr(SOH, &remaining[value_start..]).ok_or(DecodeError::Incomplete)?;
        let value = std::str::from_utf8(&remaining[value_start..value_start + soh_pos])?;

        self.offset += value_start + soh_pos + 1;
        Ok(Some((tag, value)))
    }

    /// Returns the current offset in the buffer.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns true if the buffer has been fully consumed.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.offset >= self.input.len()
    }
}

/// Parses a tag number from ASCII bytes.
///
/// # Returns
/// The parsed tag number, or `None` if empty, non-numeric, zero or out of range.
#[inline]
fn parse_tag(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || bytes.len() > 10 {
        return None;
    }

    let mut result: u32 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        result = result.checked_mul(10)?.checked_add(u32::from(b - b'0'))?;
    }

    (result > 0).then_some(result)
}

/// Decodes `raw` with default options.
///
/// # Errors
/// Returns `DecodeError` if the message does not decode; see [`Decoder::decode`].
pub fn parse(raw: &str) -> Result<Message, DecodeError> {
    Decoder::new(raw.as_bytes()).decode()
}
