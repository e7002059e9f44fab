/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Per-chain state shared by every assertion on one message.

use crate::dispatch::typed_value;
use crate::failure::{AssertionInfo, Failure};
use fixassert_core::{FieldError, FieldMap, FieldValue, Message};
use fixassert_dictionary::{Dictionary, DictionaryProvider, begin_string_for_appl_ver_id};
use std::sync::Arc;

/// BeginString carried by FIX 5.0+ messages.
pub const FIXT11: &str = "FIXT.1.1";

/// Part of a message an assertion looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Standard header.
    Header,
    /// Message body.
    Body,
    /// Standard trailer.
    Trailer,
}

impl Section {
    /// Returns the fields of this section of `message`.
    #[must_use]
    pub const fn of(self, message: &Message) -> &FieldMap {
        match self {
            Self::Header => message.header(),
            Self::Body => message.body(),
            Self::Trailer => message.trailer(),
        }
    }
}

/// Returns the version identifier a message is checked against.
///
/// For FIXT.1.1 messages this is the identifier mapped from ApplVerID, or
/// `FIXT.1.1` itself when ApplVerID is absent or unknown.
#[must_use]
pub fn resolve_begin_string(message: &Message) -> Option<String> {
    let begin_string = message.begin_string()?;
    if begin_string == FIXT11 {
        let mapped = message
            .header()
            .get_str(1128)
            .and_then(begin_string_for_appl_ver_id);
        return Some(mapped.unwrap_or(FIXT11).to_string());
    }
    Some(begin_string.to_string())
}

/// Failure reporting, dictionaries and the resolved begin string of a chain.
#[derive(Debug, Clone)]
pub struct AssertContext {
    pub(crate) info: AssertionInfo,
    pub(crate) dictionaries: DictionaryProvider,
    begin_string: Option<String>,
}

impl AssertContext {
    /// Creates the context for `message`.
    #[must_use]
    pub fn new(message: Option<&Message>, info: AssertionInfo) -> Self {
        Self {
            info,
            dictionaries: DictionaryProvider::scoped(),
            begin_string: message.and_then(resolve_begin_string),
        }
    }

    /// Returns the failure reporting info.
    #[inline]
    #[must_use]
    pub const fn info(&self) -> &AssertionInfo {
        &self.info
    }

    /// Returns the resolved begin string.
    #[must_use]
    pub fn begin_string(&self) -> Option<&str> {
        self.begin_string.as_deref()
    }

    /// Renders a message or a section with the configured delimiter.
    #[must_use]
    pub fn render(&self, map: &FieldMap) -> String {
        map.render(self.info.config().delimiter)
    }

    /// Renders a whole message with the configured delimiter.
    #[must_use]
    pub fn render_message(&self, message: Option<&Message>) -> String {
        message.map_or_else(
            || "null".to_string(),
            |m| m.render(self.info.config().delimiter),
        )
    }

    /// Resolves the dictionary for one section of `message`.
    ///
    /// Header and trailer of a FIXT.1.1 message use the transport
    /// dictionary. Everything else uses the resolved begin string.
    ///
    /// # Errors
    /// Fails when BeginString is missing or no dictionary exists.
    pub fn dictionary(&self, message: &Message, section: Section) -> Result<Arc<Dictionary>, Failure> {
        let resolved = self
            .begin_string
            .as_deref()
            .ok_or_else(Failure::missing_begin_string)?;
        let key = match section {
            Section::Header | Section::Trailer if message.begin_string() == Some(FIXT11) => FIXT11,
            _ => resolved,
        };
        self.dictionaries
            .session_dictionary(key)
            .ok_or_else(|| Failure::NoDictionary {
                begin_string: key.to_string(),
            })
    }

    /// Reads the typed value of `tag` in `section`.
    ///
    /// # Returns
    /// `Ok(None)` when the dictionary does not define the tag.
    ///
    /// # Errors
    /// Fails on a missing dictionary or a value that does not parse.
    pub fn field_value(
        &self,
        message: &Message,
        section: Section,
        tag: u32,
    ) -> Result<Option<FieldValue>, Failure> {
        let dictionary = self.dictionary(message, section)?;
        let begin_string = self.begin_string.as_deref().unwrap_or_default();
        typed_value(&dictionary, begin_string, section.of(message), tag).map_err(Failure::from)
    }
}

impl From<FieldError> for Failure {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::NotFound { tag } => Self::ShouldHaveField {
                container: "Message",
                message: String::new(),
                tag,
            },
            FieldError::IncorrectDataFormat {
                tag,
                value,
                expected,
            } => Self::IncorrectDataFormat {
                tag,
                value,
                expected: expected.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixassert_dictionary::Version;

    fn message(begin_string: &str, appl_ver_id: Option<&str>) -> Message {
        let mut message = Message::new();
        message.header_mut().set_field(8, begin_string);
        message.header_mut().set_field(35, "D");
        if let Some(id) = appl_ver_id {
            message.header_mut().set_field(1128, id);
        }
        message.body_mut().set_field(54, "1");
        message
    }

    #[test]
    fn test_resolve_plain_begin_string() {
        assert_eq!(
            resolve_begin_string(&message("FIX.4.2", None)).as_deref(),
            Some("FIX.4.2")
        );
    }

    #[test]
    fn test_resolve_fixt_with_appl_ver_id() {
        assert_eq!(
            resolve_begin_string(&message(FIXT11, Some("9"))).as_deref(),
            Some("FIX.5.0SP2")
        );
        assert_eq!(
            resolve_begin_string(&message(FIXT11, Some("42"))).as_deref(),
            Some(FIXT11)
        );
        assert_eq!(
            resolve_begin_string(&message(FIXT11, None)).as_deref(),
            Some(FIXT11)
        );
    }

    #[test]
    fn test_resolve_without_begin_string() {
        assert_eq!(resolve_begin_string(&Message::new()), None);
    }

    #[test]
    fn test_fixt_sections_use_different_dictionaries() {
        let msg = message(FIXT11, Some("8"));
        let context = AssertContext::new(Some(&msg), AssertionInfo::new());
        let header = context.dictionary(&msg, Section::Header).unwrap();
        let body = context.dictionary(&msg, Section::Body).unwrap();
        assert_eq!(header.version(), Some(Version::Fixt11));
        assert_eq!(body.version(), Some(Version::Fix50Sp1));
    }

    #[test]
    fn test_missing_begin_string_fails() {
        let msg = Message::new();
        let context = AssertContext::new(Some(&msg), AssertionInfo::new());
        assert_eq!(
            context.dictionary(&msg, Section::Body).unwrap_err(),
            Failure::missing_begin_string()
        );
    }

    #[test]
    fn test_unknown_version_has_no_dictionary() {
        let msg = message("FIX.9.9", None);
        let context = AssertContext::new(Some(&msg), AssertionInfo::new());
        assert!(matches!(
            context.dictionary(&msg, Section::Body),
            Err(Failure::NoDictionary { .. })
        ));
    }

    #[test]
    fn test_field_value_through_context() {
        let msg = message("FIX.4.4", None);
        let context = AssertContext::new(Some(&msg), AssertionInfo::new());
        assert_eq!(
            context.field_value(&msg, Section::Body, 54).unwrap(),
            Some(FieldValue::Char('1'))
        );
    }
}
