/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Assertion failures and how they are reported.
//!
//! Every check that does not hold produces a [`Failure`]. Its `Display` text is
//! the message a test author sees. [`AssertionInfo`] decides whether the
//! failure panics right away or is collected by a soft-assertion scope.

use crate::config::AssertConfig;
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// A failed assertion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// The assertion was created without a message.
    #[error("\nExpecting actual not to be null")]
    ActualIsNull,

    /// BeginString or ApplVerID did not name the expected version.
    #[error("Expecting Message:\n <{message}>\nto have version:\n <\"{expected}\">\nbut was:\n <\"{actual}\">")]
    ShouldHaveVersion {
        /// Rendered message.
        message: String,
        /// Expected version.
        expected: String,
        /// Actual version.
        actual: String,
    },

    /// A [`VersionAssert`](crate::VersionAssert) check did not hold.
    #[error("\nExpecting:\n  <{message}>\nto have FIX version:\n  <\"{expected}\">\nbut was:\n  <\"{actual}\">")]
    ShouldHaveFixVersion {
        /// Rendered message.
        message: String,
        /// Expected version.
        expected: String,
        /// Actual version.
        actual: String,
    },

    /// MsgType did not match.
    #[error("Expecting Message:\n <{message}>\nto be of type <\"{expected}\">\nbut was:\n <\"{actual}\">")]
    ShouldBeOfType {
        /// Rendered message.
        message: String,
        /// Expected MsgType.
        expected: String,
        /// Actual MsgType.
        actual: String,
    },

    /// A named header value did not equal the expected one.
    #[error("Expecting value for field <{name}> (tag=<{tag}>) in Message:\n <{message}>\nto be:\n <{expected}>\nbut was:\n <{actual}>")]
    ShouldBeEqual {
        /// Field name.
        name: String,
        /// Field tag.
        tag: u32,
        /// Rendered message.
        message: String,
        /// Expected value representation.
        expected: String,
        /// Actual value representation.
        actual: String,
    },

    /// A typed field did not hold the expected value.
    #[error("Expecting field <{name}> with tag <{tag}> in Message:\n <{message}>\nto have value:\n <{expected}>\nbut was:\n <{actual}>")]
    FieldShouldHaveValue {
        /// Field name.
        name: String,
        /// Field tag.
        tag: u32,
        /// Rendered message.
        message: String,
        /// Expected value representation.
        expected: String,
        /// Actual value representation.
        actual: String,
    },

    /// A field looked up by tag did not hold the expected value.
    #[error("Expecting field with tag <{tag}> in Message:\n <{message}>\nto have value:\n <{expected}>\nbut was:\n <{actual}>")]
    TagShouldHaveValue {
        /// Field tag.
        tag: u32,
        /// Rendered message.
        message: String,
        /// Expected value representation.
        expected: String,
        /// Actual value representation, `null` when the tag is unknown.
        actual: String,
    },

    /// A header field needed to run the check is missing.
    #[error("\nExpecting Message to have header field <{name}> (field number {tag}), but did not.")]
    ShouldHaveHeaderField {
        /// Field name.
        name: String,
        /// Field tag.
        tag: u32,
    },

    /// A field is absent from the checked section.
    #[error("\nExpecting {container}:\n <{message}>\nto have field with tag <{tag}>\nbut did not.")]
    ShouldHaveField {
        /// `Message`, `Header` or `Trailer`.
        container: &'static str,
        /// Rendered section.
        message: String,
        /// Missing tag.
        tag: u32,
    },

    /// The version is outside the supported range.
    #[error("\nExpecting Message version to be one of:\n <{supported}>\nbut was:\n <{actual}>")]
    ShouldBeValidVersion {
        /// Comma-separated supported versions.
        supported: String,
        /// Actual version.
        actual: String,
    },

    /// The message is not an application message.
    #[error("Expecting Message:\n <{message}>\nto be an Application message but was not")]
    ShouldBeApp {
        /// Rendered message.
        message: String,
    },

    /// The message is not an administrative message.
    #[error("Expecting Message:\n <{message}>\nto be an Admin message but was not")]
    ShouldBeAdmin {
        /// Rendered message.
        message: String,
    },

    /// The message has fields.
    #[error("Expecting Message:\n <{message}>\nto be empty but was not")]
    ShouldBeEmpty {
        /// Rendered message.
        message: String,
    },

    /// Two messages render differently.
    #[error("Expecting Message:\n <{actual}>\nto be equal to:\n <{expected}>\nbut was not")]
    ShouldBeEqualMessage {
        /// Rendered actual message.
        actual: String,
        /// Rendered expected message.
        expected: String,
    },

    /// The message does not conform to its data dictionary.
    #[error("\nExpecting message:\n <{message}>\nto be valid but was not:\n <{reason}>")]
    ShouldBeValidMessage {
        /// Rendered message.
        message: String,
        /// First violation found.
        reason: String,
    },

    /// A message type name is not defined for the version.
    #[error("Expecting message type name <\"{name}\"> to be defined for version <\"{begin_string}\"> but it was not")]
    UnknownMessageTypeName {
        /// The looked-up name.
        name: String,
        /// Resolved begin string.
        begin_string: String,
    },

    /// No dictionary exists for the resolved version.
    #[error("Expecting a data dictionary for version <\"{begin_string}\"> but none was found")]
    NoDictionary {
        /// Resolved begin string.
        begin_string: String,
    },

    /// A field value does not parse as its declared type.
    #[error("Expecting field with tag <{tag}> to hold a valid {expected} but was <\"{value}\">")]
    IncorrectDataFormat {
        /// Field tag.
        tag: u32,
        /// Raw value.
        value: String,
        /// Expected type.
        expected: String,
    },
}

impl Failure {
    /// Creates the failure for a missing BeginString.
    #[must_use]
    pub fn missing_begin_string() -> Self {
        Self::ShouldHaveHeaderField {
            name: "BeginString".to_string(),
            tag: 8,
        }
    }
}

/// Where failures go and how they are labelled.
///
/// Shared by every assertion in a chain.
#[derive(Debug, Clone, Default)]
pub struct AssertionInfo {
    description: Option<String>,
    collector: Option<Arc<Mutex<Vec<String>>>>,
    config: AssertConfig,
}

impl AssertionInfo {
    /// Creates info that panics on failure, using the process configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            description: None,
            collector: None,
            config: AssertConfig::process_default().clone(),
        }
    }

    pub(crate) fn collecting(collector: Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            collector: Some(collector),
            ..Self::new()
        }
    }

    /// Returns the configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &AssertConfig {
        &self.config
    }

    /// Returns the description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.description = Some(description);
    }

    pub(crate) fn set_config(&mut self, config: AssertConfig) {
        self.config = config;
    }

    /// Returns true if failures are collected instead of raised.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        self.collector.is_some()
    }

    /// Formats `failure` with the description prefix.
    #[must_use]
    pub fn format(&self, failure: &Failure) -> String {
        match &self.description {
            Some(description) => format!("[{description}] {failure}"),
            None => failure.to_string(),
        }
    }

    /// Reports a failure.
    ///
    /// # Panics
    /// Panics with the failure text unless failures are being collected.
    #[track_caller]
    pub fn fail(&self, failure: Failure) {
        let text = self.format(&failure);
        debug!(failure = %text, soft = self.is_soft(), "assertion failed");
        match &self.collector {
            Some(collector) => collector.lock().push(text),
            None => panic!("{text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_header_field_text() {
        assert_eq!(
            Failure::missing_begin_string().to_string(),
            "\nExpecting Message to have header field <BeginString> (field number 8), but did not."
        );
    }

    #[test]
    fn test_should_be_equal_text() {
        let failure = Failure::ShouldBeEqual {
            name: "BodyLength".to_string(),
            tag: 9,
            message: "8=FIX.4.0|9=61|".to_string(),
            expected: "60".to_string(),
            actual: "61".to_string(),
        };
        assert_eq!(
            failure.to_string(),
            "Expecting value for field <BodyLength> (tag=<9>) in Message:\n <8=FIX.4.0|9=61|>\nto be:\n <60>\nbut was:\n <61>"
        );
    }

    #[test]
    fn test_should_have_field_text() {
        let failure = Failure::ShouldHaveField {
            container: "Header",
            message: "8=FIX.4.4|".to_string(),
            tag: 49,
        };
        assert_eq!(
            failure.to_string(),
            "\nExpecting Header:\n <8=FIX.4.4|>\nto have field with tag <49>\nbut did not."
        );
    }

    #[test]
    fn test_description_prefix() {
        let mut info = AssertionInfo::new();
        info.set_description("logon".to_string());
        assert_eq!(
            info.format(&Failure::ActualIsNull),
            "[logon] \nExpecting actual not to be null"
        );
    }

    #[test]
    fn test_collecting_info_does_not_panic() {
        let collector = Arc::new(Mutex::new(Vec::new()));
        let info = AssertionInfo::collecting(Arc::clone(&collector));
        info.fail(Failure::ActualIsNull);
        info.fail(Failure::missing_begin_string());
        assert_eq!(collector.lock().len(), 2);
    }

    #[test]
    #[should_panic(expected = "Expecting actual not to be null")]
    fn test_hard_info_panics() {
        AssertionInfo::new().fail(Failure::ActualIsNull);
    }
}
