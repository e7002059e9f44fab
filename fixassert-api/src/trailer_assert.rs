/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Assertions on the standard trailer.

use crate::context::{AssertContext, Section};
use crate::failure::Failure;
use crate::field_map_assert::FieldMapAssert;
use crate::message_assert::MessageAssert;
use fixassert_core::checksum::format_checksum;
use fixassert_core::{FieldValue, Message, fields};

/// Fluent assertions on the trailer of a message.
#[derive(Debug, Clone)]
pub struct MessageTrailerAssert<'a> {
    parent: MessageAssert<'a>,
}

impl FieldMapAssert for MessageTrailerAssert<'_> {
    const CONTAINER: &'static str = "Trailer";
    const SECTION: Section = Section::Trailer;

    fn actual(&self) -> Option<&Message> {
        self.parent.actual()
    }

    fn context(&self) -> &AssertContext {
        self.parent.context()
    }
}

impl<'a> MessageTrailerAssert<'a> {
    pub(crate) fn new(parent: MessageAssert<'a>) -> Self {
        Self { parent }
    }

    /// Returns to the message assertions.
    #[must_use]
    pub fn and(self) -> MessageAssert<'a> {
        self.parent
    }

    /// Verifies Signature (89).
    #[track_caller]
    #[must_use]
    pub fn has_signature(self, expected: impl Into<String>) -> Self {
        self.has::<fields::Signature>(expected)
    }

    /// Verifies SignatureLength (93).
    #[track_caller]
    #[must_use]
    pub fn has_signature_length(self, expected: i64) -> Self {
        self.has::<fields::SignatureLength>(expected)
    }

    /// Verifies CheckSum (10).
    ///
    /// A message built in memory carries no CheckSum field; its computed
    /// checksum is used instead.
    #[track_caller]
    #[must_use]
    pub fn has_checksum(self, expected: &str) -> Self {
        let Some(message) = self.actual() else {
            self.context().info().fail(Failure::ActualIsNull);
            return self;
        };
        let actual = message
            .trailer()
            .get_str(10)
            .map_or_else(|| format_checksum(message.checksum()), str::to_string);
        if actual != expected {
            self.context().info().fail(Failure::FieldShouldHaveValue {
                name: "CheckSum".to_string(),
                tag: 10,
                message: self.rendered(),
                expected: FieldValue::from(expected).representation(),
                actual: FieldValue::from(actual).representation(),
            });
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_that;
    use crate::field_map_assert::FieldMapAssert;
    use crate::support::NewOrderSingleBuilder;
    use crate::testing::{failure_of, logon, piped};
    use fixassert_dictionary::Version;

    #[test]
    fn test_decoded_checksum() {
        let message = logon();
        let _ = assert_that(&message)
            .trailer()
            .has_checksum("015")
            .has_field(10)
            .and()
            .is_logon();
    }

    #[test]
    fn test_checksum_mismatch() {
        let message = logon();
        let failure = failure_of(|| assert_that(&message).with_config(piped()).trailer().has_checksum("016"));
        assert_eq!(
            failure,
            "Expecting field <CheckSum> with tag <10> in Message:\n <10=015|>\nto have value:\n <\"016\">\nbut was:\n <\"015\">"
        );
    }

    #[test]
    fn test_computed_checksum() {
        let message = NewOrderSingleBuilder::with_defaults(Version::Fix44)
            .build()
            .unwrap();
        let expected = fixassert_core::checksum::format_checksum(message.checksum());
        let _ = assert_that(&message).trailer().has_checksum(&expected);
    }

    #[test]
    fn test_signature() {
        let message = NewOrderSingleBuilder::with_defaults(Version::Fix42)
            .with_signature("SIGNED")
            .build()
            .unwrap();
        let _ = assert_that(&message)
            .trailer()
            .has_signature("SIGNED")
            .has_signature_length(6)
            .has_fields(&[93, 89])
            .has_field_value(93, 6);
    }

    #[test]
    fn test_missing_signature() {
        let message = logon();
        let failure = failure_of(|| assert_that(&message).with_config(piped()).trailer().has_signature("X"));
        assert_eq!(
            failure,
            "\nExpecting Trailer:\n <10=015|>\nto have field with tag <89>\nbut did not."
        );
    }
}
