/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Assertions on a whole FIX message.
//!
//! [`MessageAssert`] is the entry point returned by
//! [`assert_that`](crate::assert_that). Field checks come from
//! [`FieldMapAssert`] and look at the body. [`MessageAssert::header`] and
//! [`MessageAssert::trailer`] switch to the other sections.

use crate::config::AssertConfig;
use crate::context::{AssertContext, Section};
use crate::failure::{AssertionInfo, Failure};
use crate::field_map_assert::FieldMapAssert;
use crate::header_assert::MessageHeaderAssert;
use crate::new_order_single::NewOrderSingleAssert;
use crate::trailer_assert::MessageTrailerAssert;
use crate::validation::validate;
use crate::version_assert::VersionAssert;
use fixassert_core::{Message, MsgType, SOH};
use fixassert_dictionary::{Dictionary, Version, begin_string_for_appl_ver_id};
use std::borrow::Cow;

/// Fluent assertions on a [`Message`].
#[derive(Debug, Clone)]
pub struct MessageAssert<'a> {
    actual: Option<Cow<'a, Message>>,
    context: AssertContext,
}

impl FieldMapAssert for MessageAssert<'_> {
    const CONTAINER: &'static str = "Message";
    const SECTION: Section = Section::Body;

    fn actual(&self) -> Option<&Message> {
        self.actual.as_deref()
    }

    fn context(&self) -> &AssertContext {
        &self.context
    }
}

impl<'a> MessageAssert<'a> {
    /// Creates an assertion on `actual` reporting through `info`.
    #[must_use]
    pub fn new(actual: Option<Cow<'a, Message>>, info: AssertionInfo) -> Self {
        let context = AssertContext::new(actual.as_deref(), info);
        Self { actual, context }
    }

    /// Prefixes every failure of this chain with `[description] `.
    #[must_use]
    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.context.info.set_description(description.into());
        self
    }

    /// Replaces the configuration of this chain.
    #[must_use]
    pub fn with_config(mut self, config: AssertConfig) -> Self {
        self.context.info.set_config(config);
        self
    }

    /// Registers `dictionary` for `begin_string`, for this chain only.
    #[must_use]
    pub fn using_data_dictionary(self, begin_string: impl Into<String>, dictionary: Dictionary) -> Self {
        self.context.dictionaries.add_dictionary(begin_string, dictionary);
        self
    }

    #[track_caller]
    fn fail(&self, failure: Failure) {
        self.context.info.fail(failure);
    }

    #[track_caller]
    fn actual_or_fail(&self) -> Option<&Message> {
        let actual = self.actual.as_deref();
        if actual.is_none() {
            self.fail(Failure::ActualIsNull);
        }
        actual
    }

    fn rendered_message(&self) -> String {
        self.context.render_message(self.actual.as_deref())
    }

    /// Verifies that there is a message.
    #[track_caller]
    #[must_use]
    pub fn is_not_null(self) -> Self {
        self.check_not_null();
        self
    }

    /// Verifies BeginString, and ApplVerID for FIX 5.0 and later.
    #[track_caller]
    #[must_use]
    pub fn is_version(self, version: Version) -> Self {
        self.check_version(version);
        self
    }

    #[track_caller]
    fn check_version(&self, version: Version) {
        let Some(message) = self.actual_or_fail() else {
            return;
        };
        let Some(begin_string) = message.begin_string() else {
            self.fail(Failure::missing_begin_string());
            return;
        };
        if begin_string != version.begin_string() {
            self.fail(Failure::ShouldHaveVersion {
                message: self.rendered_message(),
                expected: version.begin_string().to_string(),
                actual: begin_string.to_string(),
            });
            return;
        }
        let Some(expected) = version.appl_ver_id() else {
            return;
        };
        match message.header().get_str(1128) {
            None => self.fail(Failure::ShouldHaveHeaderField {
                name: "ApplVerID".to_string(),
                tag: 1128,
            }),
            Some(actual) if actual != expected => self.fail(Failure::ShouldHaveVersion {
                message: self.rendered_message(),
                expected: version.identifier().to_string(),
                actual: begin_string_for_appl_ver_id(actual)
                    .unwrap_or(actual)
                    .to_string(),
            }),
            Some(_) => {}
        }
    }

    /// Verifies the message is FIX.4.0.
    #[track_caller]
    #[must_use]
    pub fn is_version_40(self) -> Self {
        self.is_version(Version::Fix40)
    }

    /// Verifies the message is FIX.4.1.
    #[track_caller]
    #[must_use]
    pub fn is_version_41(self) -> Self {
        self.is_version(Version::Fix41)
    }

    /// Verifies the message is FIX.4.2.
    #[track_caller]
    #[must_use]
    pub fn is_version_42(self) -> Self {
        self.is_version(Version::Fix42)
    }

    /// Verifies the message is FIX.4.3.
    #[track_caller]
    #[must_use]
    pub fn is_version_43(self) -> Self {
        self.is_version(Version::Fix43)
    }

    /// Verifies the message is FIX.4.4.
    #[track_caller]
    #[must_use]
    pub fn is_version_44(self) -> Self {
        self.is_version(Version::Fix44)
    }

    /// Verifies the message is FIXT.1.1 with ApplVerID 7.
    #[track_caller]
    #[must_use]
    pub fn is_version_50(self) -> Self {
        self.is_version(Version::Fix50)
    }

    /// Verifies the message is FIXT.1.1 with ApplVerID 8.
    #[track_caller]
    #[must_use]
    pub fn is_version_50_sp1(self) -> Self {
        self.is_version(Version::Fix50Sp1)
    }

    /// Verifies the message is FIXT.1.1 with ApplVerID 9.
    #[track_caller]
    #[must_use]
    pub fn is_version_50_sp2(self) -> Self {
        self.is_version(Version::Fix50Sp2)
    }

    /// Verifies the message is administrative.
    #[track_caller]
    #[must_use]
    pub fn is_admin(self) -> Self {
        if let Some(message) = self.actual_or_fail() {
            if !message.is_admin() {
                self.fail(Failure::ShouldBeAdmin {
                    message: self.rendered_message(),
                });
            }
        }
        self
    }

    /// Verifies the message is an application message.
    #[track_caller]
    #[must_use]
    pub fn is_app(self) -> Self {
        if let Some(message) = self.actual_or_fail() {
            if !message.is_app() {
                self.fail(Failure::ShouldBeApp {
                    message: self.rendered_message(),
                });
            }
        }
        self
    }

    /// Verifies the message has no fields at all.
    #[track_caller]
    #[must_use]
    pub fn is_empty(self) -> Self {
        if let Some(message) = self.actual_or_fail() {
            if !message.is_empty() {
                self.fail(Failure::ShouldBeEmpty {
                    message: self.rendered_message(),
                });
            }
        }
        self
    }

    /// Verifies MsgType (tag 35).
    #[track_caller]
    #[must_use]
    pub fn has_msg_type(self, msg_type: impl AsRef<str>) -> Self {
        self.check_msg_type(msg_type.as_ref());
        self
    }

    /// Alias of [`MessageAssert::has_msg_type`].
    #[track_caller]
    #[must_use]
    pub fn is_of_type(self, msg_type: impl AsRef<str>) -> Self {
        self.has_msg_type(msg_type)
    }

    #[track_caller]
    fn check_msg_type(&self, expected: &str) {
        let Some(message) = self.actual_or_fail() else {
            return;
        };
        match message.msg_type_str() {
            None => self.fail(Failure::ShouldHaveField {
                container: Self::CONTAINER,
                message: self.rendered_message(),
                tag: 35,
            }),
            Some(actual) if actual != expected => self.fail(Failure::ShouldBeOfType {
                message: self.rendered_message(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            }),
            Some(_) => {}
        }
    }

    /// Verifies MsgType by message name, e.g. `"NewOrderSingle"`.
    ///
    /// The name is resolved through the dictionary of the message's version.
    #[track_caller]
    #[must_use]
    pub fn has_msg_type_name(self, name: &str) -> Self {
        let Some(message) = self.actual_or_fail() else {
            return self;
        };
        let lookup = |section| {
            self.context
                .dictionary(message, section)
                .map(|dict| dict.msg_type_for_name(name).map(str::to_string))
        };
        let msg_type = match lookup(Section::Body) {
            Ok(Some(msg_type)) => Some(msg_type),
            Ok(None) => lookup(Section::Header).ok().flatten(),
            Err(failure) => {
                self.fail(failure);
                return self;
            }
        };
        match msg_type {
            Some(msg_type) => self.check_msg_type(&msg_type),
            None => self.fail(Failure::UnknownMessageTypeName {
                name: name.to_string(),
                begin_string: self.context.begin_string().unwrap_or_default().to_string(),
            }),
        }
        self
    }

    /// Alias of [`MessageAssert::has_msg_type_name`].
    #[track_caller]
    #[must_use]
    pub fn is_of_type_name(self, name: &str) -> Self {
        self.has_msg_type_name(name)
    }

    /// Verifies the message is a Heartbeat (0).
    #[track_caller]
    #[must_use]
    pub fn is_heartbeat(self) -> Self {
        self.has_msg_type(MsgType::Heartbeat.as_str())
    }

    /// Verifies the message is a TestRequest (1).
    #[track_caller]
    #[must_use]
    pub fn is_test_request(self) -> Self {
        self.has_msg_type(MsgType::TestRequest.as_str())
    }

    /// Verifies the message is a ResendRequest (2).
    #[track_caller]
    #[must_use]
    pub fn is_resend_request(self) -> Self {
        self.has_msg_type(MsgType::ResendRequest.as_str())
    }

    /// Verifies the message is a Reject (3).
    #[track_caller]
    #[must_use]
    pub fn is_reject(self) -> Self {
        self.has_msg_type(MsgType::Reject.as_str())
    }

    /// Verifies the message is a SequenceReset (4).
    #[track_caller]
    #[must_use]
    pub fn is_sequence_reset(self) -> Self {
        self.has_msg_type(MsgType::SequenceReset.as_str())
    }

    /// Verifies the message is a Logout (5).
    #[track_caller]
    #[must_use]
    pub fn is_logout(self) -> Self {
        self.has_msg_type(MsgType::Logout.as_str())
    }

    /// Verifies the message is a Logon (A).
    #[track_caller]
    #[must_use]
    pub fn is_logon(self) -> Self {
        self.has_msg_type(MsgType::Logon.as_str())
    }

    /// Verifies the message is a NewOrderSingle (D).
    #[track_caller]
    #[must_use]
    pub fn is_new_order_single(self) -> Self {
        self.has_msg_type(MsgType::NewOrderSingle.as_str())
    }

    /// Verifies the message is an ExecutionReport (8).
    #[track_caller]
    #[must_use]
    pub fn is_execution_report(self) -> Self {
        self.has_msg_type(MsgType::ExecutionReport.as_str())
    }

    /// Verifies the message is an OrderCancelRequest (F).
    #[track_caller]
    #[must_use]
    pub fn is_order_cancel_request(self) -> Self {
        self.has_msg_type(MsgType::OrderCancelRequest.as_str())
    }

    /// Verifies the message is an OrderCancelReplaceRequest (G).
    #[track_caller]
    #[must_use]
    pub fn is_order_cancel_replace_request(self) -> Self {
        self.has_msg_type(MsgType::OrderCancelReplaceRequest.as_str())
    }

    /// Verifies the message is an Advertisement (7).
    #[track_caller]
    #[must_use]
    pub fn is_advertisement(self) -> Self {
        self.has_msg_type(MsgType::Advertisement.as_str())
    }

    /// Verifies the message is a News (B).
    #[track_caller]
    #[must_use]
    pub fn is_news(self) -> Self {
        self.has_msg_type(MsgType::News.as_str())
    }

    /// Verifies the computed BodyLength.
    #[track_caller]
    #[must_use]
    pub fn has_body_length(self, expected: usize) -> Self {
        if let Some(message) = self.actual_or_fail() {
            let actual = message.body_length();
            if actual != expected {
                self.fail(Failure::ShouldBeEqual {
                    name: "BodyLength".to_string(),
                    tag: 9,
                    message: self.rendered_message(),
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
        }
        self
    }

    /// Verifies that both messages render to the same wire form.
    #[track_caller]
    #[must_use]
    pub fn is_equal_to(self, expected: &Message) -> Self {
        if let Some(message) = self.actual_or_fail() {
            if message.render(SOH) != expected.render(SOH) {
                let delimiter = self.context.info.config().delimiter;
                self.fail(Failure::ShouldBeEqualMessage {
                    actual: message.render(delimiter),
                    expected: expected.render(delimiter),
                });
            }
        }
        self
    }

    /// Verifies the message against its data dictionaries.
    ///
    /// Checks required header, body and trailer fields, the message type and
    /// that every known field parses as its declared type. BodyLength and
    /// CheckSum are not required since they are computed.
    #[track_caller]
    #[must_use]
    pub fn is_valid(self) -> Self {
        if let Some(message) = self.actual_or_fail() {
            if let Err(reason) = validate(message, &self.context) {
                self.fail(Failure::ShouldBeValidMessage {
                    message: self.rendered_message(),
                    reason,
                });
            }
        }
        self
    }

    /// Returns assertions on the BeginString.
    #[track_caller]
    #[must_use]
    pub fn has_version(self) -> VersionAssert<'a> {
        let actual = self.actual_or_fail().and_then(|m| m.begin_string()).map(str::to_string);
        VersionAssert::new(self, actual)
    }

    /// Verifies the BeginString is exactly `version` and returns the
    /// version assertions for further checks.
    #[track_caller]
    #[must_use]
    pub fn has_version_str(self, version: &str) -> VersionAssert<'a> {
        self.has_version().fix(version)
    }

    /// Switches to assertions on the standard header.
    #[must_use]
    pub fn header(self) -> MessageHeaderAssert<'a> {
        MessageHeaderAssert::new(self)
    }

    /// Switches to assertions on the standard trailer.
    #[must_use]
    pub fn trailer(self) -> MessageTrailerAssert<'a> {
        MessageTrailerAssert::new(self)
    }

    /// Verifies the message is a NewOrderSingle of a supported version and
    /// switches to its typed assertions.
    #[track_caller]
    #[must_use]
    pub fn as_new_order_single(self) -> NewOrderSingleAssert<'a> {
        NewOrderSingleAssert::from_message_assert(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_that;
    use crate::support::NewOrderSingleBuilder;
    use crate::testing::{LOGON_FIX40, failure_of, init_tracing, logon, pipe, piped};
    use fixassert_dictionary::{FieldDef, FieldType};

    #[test]
    fn test_passing_chain() {
        init_tracing();
        let message = logon();
        let _ = assert_that(&message)
            .is_not_null()
            .is_version_40()
            .is_admin()
            .is_logon()
            .has_msg_type("A")
            .has_msg_type_name("Logon")
            .has_body_length(61)
            .has_field(98)
            .has_fields(&[98, 108])
            .has_field_value(108, 30)
            .has_field_value(98, 0)
            .is_valid();
    }

    #[test]
    fn test_null_actual() {
        let failure = failure_of(|| assert_that(None::<&Message>).is_not_null());
        assert_eq!(failure, "\nExpecting actual not to be null");
    }

    #[test]
    fn test_version_mismatch() {
        let message = logon();
        let failure = failure_of(|| assert_that(&message).with_config(piped()).is_version_42());
        assert_eq!(
            failure,
            format!(
                "Expecting Message:\n <{}>\nto have version:\n <\"FIX.4.2\">\nbut was:\n <\"FIX.4.0\">",
                pipe(LOGON_FIX40)
            )
        );
    }

    #[test]
    fn test_version_without_begin_string() {
        let mut message = logon();
        message.header_mut().remove_field(8);
        let failure = failure_of(|| assert_that(&message).is_version_40());
        assert_eq!(
            failure,
            "\nExpecting Message to have header field <BeginString> (field number 8), but did not."
        );
    }

    #[test]
    fn test_fix50_versions() {
        let message = NewOrderSingleBuilder::with_defaults(Version::Fix50Sp2)
            .build()
            .unwrap();
        let _ = assert_that(&message).is_version_50_sp2().is_version(Version::Fix50Sp2);

        let failure = failure_of(|| assert_that(&message).is_version_50_sp1());
        assert!(failure.contains("to have version:\n <\"FIX.5.0SP1\">\nbut was:\n <\"FIX.5.0SP2\">"));

        let failure = failure_of(|| assert_that(&message).is_version_44());
        assert!(failure.ends_with("to have version:\n <\"FIX.4.4\">\nbut was:\n <\"FIXT.1.1\">"));
    }

    #[test]
    fn test_fix50_without_appl_ver_id() {
        let mut message = NewOrderSingleBuilder::with_defaults(Version::Fix50)
            .build()
            .unwrap();
        message.header_mut().remove_field(1128);
        let failure = failure_of(|| assert_that(&message).is_version_50());
        assert_eq!(
            failure,
            "\nExpecting Message to have header field <ApplVerID> (field number 1128), but did not."
        );
    }

    #[test]
    fn test_body_length_mismatch() {
        let message = logon();
        let failure = failure_of(|| assert_that(&message).with_config(piped()).has_body_length(60));
        assert_eq!(
            failure,
            format!(
                "Expecting value for field <BodyLength> (tag=<9>) in Message:\n <{}>\nto be:\n <60>\nbut was:\n <61>",
                pipe(LOGON_FIX40)
            )
        );
    }

    #[test]
    fn test_missing_body_field() {
        let message = logon();
        let failure = failure_of(|| assert_that(&message).with_config(piped()).has_field(11));
        assert_eq!(
            failure,
            format!(
                "\nExpecting Message:\n <{}>\nto have field with tag <11>\nbut did not.",
                pipe(LOGON_FIX40)
            )
        );
    }

    #[test]
    fn test_header_tag_is_not_a_body_field() {
        let message = logon();
        let failure = failure_of(|| assert_that(&message).has_field(49));
        assert!(failure.contains("to have field with tag <49>"));
    }

    #[test]
    fn test_field_value_mismatch() {
        let message = logon();
        let failure = failure_of(|| assert_that(&message).with_config(piped()).has_field_value(98, 1));
        assert_eq!(
            failure,
            format!(
                "Expecting field with tag <98> in Message:\n <{}>\nto have value:\n <1>\nbut was:\n <0>",
                pipe(LOGON_FIX40)
            )
        );
    }

    #[test]
    fn test_field_value_with_legacy_char() {
        let message = NewOrderSingleBuilder::with_defaults(Version::Fix40)
            .build()
            .unwrap();
        let _ = assert_that(&message).has_field_value(54, "1");
        let failure = failure_of(|| assert_that(&message).has_field_value(54, '1'));
        assert!(failure.ends_with("to have value:\n <'1'>\nbut was:\n <\"1\">"));
    }

    #[test]
    fn test_field_value_numeric_leniency() {
        let message = NewOrderSingleBuilder::with_defaults(Version::Fix44)
            .build()
            .unwrap();
        let _ = assert_that(&message).has_field_value(38, 1000);
        let strict = crate::AssertConfig::new().with_lenient_numeric(false);
        let failure = failure_of(|| assert_that(&message).with_config(strict).has_field_value(38, 1000));
        assert!(failure.ends_with("to have value:\n <1000>\nbut was:\n <1000.0>"));
    }

    #[test]
    fn test_unknown_tag_shows_null() {
        let mut message = NewOrderSingleBuilder::with_defaults(Version::Fix44)
            .build()
            .unwrap();
        message.body_mut().set_field(9999, "custom");
        let failure = failure_of(|| assert_that(&message).has_field_value(9999, "custom"));
        assert!(failure.ends_with("to have value:\n <\"custom\">\nbut was:\n <null>"));
    }

    #[test]
    fn test_incorrect_data_format() {
        let mut message = NewOrderSingleBuilder::with_defaults(Version::Fix44)
            .build()
            .unwrap();
        message.body_mut().set_field(38, "lots");
        let failure = failure_of(|| assert_that(&message).has_field_value(38, 1000));
        assert!(failure.starts_with("Expecting field with tag <38> to hold a valid"));
    }

    #[test]
    #[should_panic(expected = "'expectedFieldTag' must be greater than 0.")]
    fn test_field_value_rejects_tag_zero() {
        let message = logon();
        let _ = assert_that(&message).has_field_value(0, "x");
    }

    #[test]
    fn test_category_failures() {
        let message = logon();
        let failure = failure_of(|| assert_that(&message).with_config(piped()).is_app());
        assert_eq!(
            failure,
            format!(
                "Expecting Message:\n <{}>\nto be an Application message but was not",
                pipe(LOGON_FIX40)
            )
        );
        let failure = failure_of(|| assert_that(&message).is_empty());
        assert!(failure.ends_with("to be empty but was not"));
        let _ = assert_that(&Message::new()).is_empty();
    }

    #[test]
    fn test_type_mismatch() {
        let message = logon();
        let failure = failure_of(|| assert_that(&message).with_config(piped()).is_heartbeat());
        assert_eq!(
            failure,
            format!(
                "Expecting Message:\n <{}>\nto be of type <\"0\">\nbut was:\n <\"A\">",
                pipe(LOGON_FIX40)
            )
        );
    }

    const MSG_TYPES: [&str; 13] = ["0", "1", "2", "3", "4", "5", "A", "D", "8", "F", "G", "7", "B"];

    fn assert_type<'a>(chain: MessageAssert<'a>, msg_type: &str) -> MessageAssert<'a> {
        match msg_type {
            "0" => chain.is_heartbeat(),
            "1" => chain.is_test_request(),
            "2" => chain.is_resend_request(),
            "3" => chain.is_reject(),
            "4" => chain.is_sequence_reset(),
            "5" => chain.is_logout(),
            "A" => chain.is_logon(),
            "D" => chain.is_new_order_single(),
            "8" => chain.is_execution_report(),
            "F" => chain.is_order_cancel_request(),
            "G" => chain.is_order_cancel_replace_request(),
            "7" => chain.is_advertisement(),
            "B" => chain.is_news(),
            other => panic!("no type check for {other}"),
        }
    }

    #[test]
    fn test_every_type_check() {
        for (index, msg_type) in MSG_TYPES.iter().enumerate() {
            let mut message = Message::new();
            message.header_mut().set_field(8, "FIX.4.4");
            message.header_mut().set_field(35, *msg_type);
            let _ = assert_type(assert_that(&message), msg_type);

            let other = MSG_TYPES[(index + 1) % MSG_TYPES.len()];
            let failure = failure_of(|| assert_type(assert_that(&message), other));
            assert!(
                failure.ends_with(&format!("to be of type <\"{other}\">\nbut was:\n <\"{msg_type}\">")),
                "{failure}"
            );
        }
    }

    #[test]
    fn test_msg_type_name() {
        let message = NewOrderSingleBuilder::with_defaults(Version::Fix50Sp1)
            .build()
            .unwrap();
        let _ = assert_that(&message).is_of_type_name("NewOrderSingle");
        let failure = failure_of(|| assert_that(&message).has_msg_type_name("Logon"));
        assert!(failure.contains("to be of type <\"A\">"));
        let failure = failure_of(|| assert_that(&message).has_msg_type_name("NoSuchMessage"));
        assert_eq!(
            failure,
            "Expecting message type name <\"NoSuchMessage\"> to be defined for version <\"FIX.5.0SP1\"> but it was not"
        );
    }

    #[test]
    fn test_described_as() {
        let message = logon();
        let failure = failure_of(|| assert_that(&message).described_as("logon").has_field(11));
        assert!(failure.starts_with("[logon] \nExpecting Message:"));
    }

    #[test]
    fn test_is_equal_to() {
        let message = logon();
        let _ = assert_that(&message).is_equal_to(&logon());
        let mut other = logon();
        other.body_mut().set_field(108, "60");
        let failure = failure_of(|| assert_that(&message).is_equal_to(&other));
        assert!(failure.starts_with("Expecting Message:\n <8=FIX.4.0\u{1}9=61"));
        assert!(failure.ends_with("but was not"));
    }

    #[test]
    fn test_is_valid_failure() {
        let mut message = NewOrderSingleBuilder::with_defaults(Version::Fix42)
            .build()
            .unwrap();
        message.body_mut().remove_field(11);
        let failure = failure_of(|| assert_that(&message).is_valid());
        assert!(failure.starts_with("\nExpecting message:\n <"));
        assert!(failure.ends_with("to be valid but was not:\n <Required tag missing, field=11>"));
    }

    #[test]
    fn test_using_data_dictionary() {
        let mut message = logon();
        message.body_mut().set_field(5001, "42");
        let mut dictionary = fixassert_dictionary::builtin_dictionary(Version::Fix40).as_ref().clone();
        dictionary.add_field(FieldDef::new(5001, "CustomQty", FieldType::Int));

        let _ = assert_that(&message)
            .using_data_dictionary("FIX.4.0", dictionary)
            .has_field_value(5001, 42);

        let failure = failure_of(|| assert_that(&message).has_field_value(5001, 42));
        assert!(failure.ends_with("but was:\n <null>"));
    }

    #[test]
    fn test_cloned_chain_keeps_its_own_dictionaries() {
        let mut message = logon();
        message.body_mut().set_field(5001, "42");
        let mut dictionary = fixassert_dictionary::builtin_dictionary(Version::Fix40).as_ref().clone();
        dictionary.add_field(FieldDef::new(5001, "CustomQty", FieldType::Int));

        let original = assert_that(&message);
        let _ = original
            .clone()
            .using_data_dictionary("FIX.4.0", dictionary)
            .has_field_value(5001, 42);

        let failure = failure_of(|| original.has_field_value(5001, 42));
        assert!(failure.ends_with("but was:\n <null>"));
    }

    #[test]
    fn test_no_dictionary_for_version() {
        let mut message = logon();
        message.header_mut().set_field(8, "FIX.9.9");
        let failure = failure_of(|| assert_that(&message).has_field_value(98, 0));
        assert_eq!(
            failure,
            "Expecting a data dictionary for version <\"FIX.9.9\"> but none was found"
        );
    }
}
