/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Assertions on the standard header.

use crate::context::{AssertContext, Section};
use crate::failure::Failure;
use crate::field_map_assert::FieldMapAssert;
use crate::message_assert::MessageAssert;
use chrono::NaiveDateTime;
use fixassert_core::{FieldValue, Message, fields};

/// Fluent assertions on the header of a message.
#[derive(Debug, Clone)]
pub struct MessageHeaderAssert<'a> {
    parent: MessageAssert<'a>,
}

impl FieldMapAssert for MessageHeaderAssert<'_> {
    const CONTAINER: &'static str = "Header";
    const SECTION: Section = Section::Header;

    fn actual(&self) -> Option<&Message> {
        self.parent.actual()
    }

    fn context(&self) -> &AssertContext {
        self.parent.context()
    }
}

impl<'a> MessageHeaderAssert<'a> {
    pub(crate) fn new(parent: MessageAssert<'a>) -> Self {
        Self { parent }
    }

    /// Returns to the message assertions.
    #[must_use]
    pub fn and(self) -> MessageAssert<'a> {
        self.parent
    }

    /// Verifies BeginString (8).
    #[track_caller]
    #[must_use]
    pub fn has_begin_string(self, expected: &str) -> Self {
        let Some(map) = self.field_map() else {
            self.context().info().fail(Failure::ActualIsNull);
            return self;
        };
        match map.get_str(8) {
            None => self.context().info().fail(Failure::ShouldHaveField {
                container: Self::CONTAINER,
                message: self.rendered(),
                tag: 8,
            }),
            Some(actual) if actual != expected => self.context().info().fail(Failure::ShouldBeEqual {
                name: "BeginString".to_string(),
                tag: 8,
                message: self.rendered(),
                expected: FieldValue::from(expected).representation(),
                actual: FieldValue::from(actual).representation(),
            }),
            Some(_) => {}
        }
        self
    }

    /// Verifies SenderCompID (49).
    #[track_caller]
    #[must_use]
    pub fn has_sender_comp_id(self, expected: impl Into<String>) -> Self {
        self.has::<fields::SenderCompId>(expected)
    }

    /// Verifies TargetCompID (56).
    #[track_caller]
    #[must_use]
    pub fn has_target_comp_id(self, expected: impl Into<String>) -> Self {
        self.has::<fields::TargetCompId>(expected)
    }

    /// Verifies OnBehalfOfCompID (115).
    #[track_caller]
    #[must_use]
    pub fn has_on_behalf_of_comp_id(self, expected: impl Into<String>) -> Self {
        self.has::<fields::OnBehalfOfCompId>(expected)
    }

    /// Verifies DeliverToCompID (128).
    #[track_caller]
    #[must_use]
    pub fn has_deliver_to_comp_id(self, expected: impl Into<String>) -> Self {
        self.has::<fields::DeliverToCompId>(expected)
    }

    /// Verifies SenderSubID (50).
    #[track_caller]
    #[must_use]
    pub fn has_sender_sub_id(self, expected: impl Into<String>) -> Self {
        self.has::<fields::SenderSubId>(expected)
    }

    /// Verifies TargetSubID (57).
    #[track_caller]
    #[must_use]
    pub fn has_target_sub_id(self, expected: impl Into<String>) -> Self {
        self.has::<fields::TargetSubId>(expected)
    }

    /// Verifies OnBehalfOfSubID (116).
    #[track_caller]
    #[must_use]
    pub fn has_on_behalf_of_sub_id(self, expected: impl Into<String>) -> Self {
        self.has::<fields::OnBehalfOfSubId>(expected)
    }

    /// Verifies DeliverToSubID (129).
    #[track_caller]
    #[must_use]
    pub fn has_deliver_to_sub_id(self, expected: impl Into<String>) -> Self {
        self.has::<fields::DeliverToSubId>(expected)
    }

    /// Verifies MsgSeqNum (34).
    #[track_caller]
    #[must_use]
    pub fn has_msg_seq_num(self, expected: i64) -> Self {
        self.has::<fields::MsgSeqNum>(expected)
    }

    /// Verifies SendingTime (52).
    #[track_caller]
    #[must_use]
    pub fn has_sending_time(self, expected: NaiveDateTime) -> Self {
        self.has::<fields::SendingTime>(expected)
    }

    /// Verifies PossDupFlag (43).
    #[track_caller]
    #[must_use]
    pub fn has_poss_dup_flag(self, expected: bool) -> Self {
        self.has::<fields::PossDupFlag>(expected)
    }

    /// Verifies ApplVerID (1128).
    #[track_caller]
    #[must_use]
    pub fn has_appl_ver_id(self, expected: impl Into<String>) -> Self {
        self.has::<fields::ApplVerId>(expected)
    }

    /// Verifies the declared entry count of a header repeating group, such
    /// as NoHops (627).
    #[track_caller]
    #[must_use]
    pub fn has_group(self, count_tag: u32, expected_entries: usize) -> Self {
        if !self.check_field(count_tag) {
            return self;
        }
        let Some(map) = self.field_map() else {
            return self;
        };
        let failure = match map.get_int(count_tag) {
            Ok(count) if usize::try_from(count).is_ok_and(|c| c == expected_entries) => None,
            Ok(count) => Some(Failure::TagShouldHaveValue {
                tag: count_tag,
                message: self.rendered(),
                expected: expected_entries.to_string(),
                actual: count.to_string(),
            }),
            Err(err) => Some(Failure::from(err)),
        };
        if let Some(failure) = failure {
            self.context().info().fail(failure);
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
    use chrono::NaiveDate;
    use fixassert_dictionary::Version;

    #[test]
    fn test_header_fields() {
        let message = logon();
        let sending_time = NaiveDate::from_ymd_opt(2020, 4, 8)
            .unwrap()
            .and_hms_opt(6, 49, 7)
            .unwrap();
        let _ = assert_that(&message)
            .header()
            .has_begin_string("FIX.4.0")
            .has_sender_comp_id("BANZAI")
            .has_target_comp_id("EXEC")
            .has_msg_seq_num(1)
            .has_sending_time(sending_time)
            .has_fields(&[8, 9, 35, 34, 49, 52, 56])
            .has_field_value(49, "BANZAI")
            .and()
            .is_logon();
    }

    #[test]
    fn test_begin_string_mismatch() {
        let message = logon();
        let failure = failure_of(|| {
            assert_that(&message)
                .with_config(piped())
                .header()
                .has_begin_string("FIX.4.4")
        });
        assert_eq!(
            failure,
            "Expecting value for field <BeginString> (tag=<8>) in Message:\n <8=FIX.4.0|9=61|35=A|34=1|49=BANZAI|52=20200408-06:49:07|56=EXEC|>\nto be:\n <\"FIX.4.4\">\nbut was:\n <\"FIX.4.0\">"
        );
    }

    #[test]
    fn test_typed_header_mismatch() {
        let message = logon();
        let failure = failure_of(|| {
            assert_that(&message)
                .with_config(piped())
                .header()
                .has_sender_comp_id("OTHER")
        });
        assert_eq!(
            failure,
            "Expecting field <SenderCompID> with tag <49> in Message:\n <8=FIX.4.0|9=61|35=A|34=1|49=BANZAI|52=20200408-06:49:07|56=EXEC|>\nto have value:\n <\"OTHER\">\nbut was:\n <\"BANZAI\">"
        );
    }

    #[test]
    fn test_missing_header_field() {
        let message = logon();
        let failure = failure_of(|| {
            assert_that(&message)
                .with_config(piped())
                .header()
                .has_on_behalf_of_comp_id("DESK")
        });
        assert_eq!(
            failure,
            "\nExpecting Header:\n <8=FIX.4.0|9=61|35=A|34=1|49=BANZAI|52=20200408-06:49:07|56=EXEC|>\nto have field with tag <115>\nbut did not."
        );
    }

    #[test]
    fn test_sub_ids() {
        let mut message = logon();
        message.header_mut().set_field(50, "TRADER1");
        message.header_mut().set_field(57, "DESK2");
        message.header_mut().set_field(116, "BOOK3");
        message.header_mut().set_field(129, "ROUTE4");
        let _ = assert_that(&message)
            .header()
            .has_sender_sub_id("TRADER1")
            .has_target_sub_id("DESK2")
            .has_on_behalf_of_sub_id("BOOK3")
            .has_deliver_to_sub_id("ROUTE4");

        let failure = failure_of(|| assert_that(&message).header().has_sender_sub_id("TRADER9"));
        assert!(failure.starts_with("Expecting field <SenderSubID> with tag <50> in Message:"));
        assert!(failure.ends_with("to have value:\n <\"TRADER9\">\nbut was:\n <\"TRADER1\">"));
        let failure = failure_of(|| assert_that(&message).header().has_target_sub_id("DESK9"));
        assert!(failure.starts_with("Expecting field <TargetSubID> with tag <57> in Message:"));
        let failure = failure_of(|| assert_that(&message).header().has_deliver_to_sub_id("ROUTE9"));
        assert!(failure.starts_with("Expecting field <DeliverToSubID> with tag <129> in Message:"));
    }

    #[test]
    fn test_missing_sub_id() {
        let message = logon();
        let failure = failure_of(|| {
            assert_that(&message)
                .with_config(piped())
                .header()
                .has_deliver_to_sub_id("ROUTE4")
        });
        assert_eq!(
            failure,
            "\nExpecting Header:\n <8=FIX.4.0|9=61|35=A|34=1|49=BANZAI|52=20200408-06:49:07|56=EXEC|>\nto have field with tag <129>\nbut did not."
        );
        let failure = failure_of(|| assert_that(&message).header().has_target_sub_id("DESK2"));
        assert!(failure.ends_with("to have field with tag <57>\nbut did not."));
    }

    #[test]
    fn test_fixt_header_uses_transport_dictionary() {
        let message = NewOrderSingleBuilder::with_defaults(Version::Fix50Sp2)
            .build()
            .unwrap();
        let _ = assert_that(&message)
            .header()
            .has_begin_string("FIXT.1.1")
            .has_appl_ver_id("9")
            .has_field_value(34, 1)
            .has_field_value(1128, "9");
    }

    #[test]
    fn test_group_count() {
        let mut message = logon();
        message.header_mut().set_field(627, "2");
        message.header_mut().push_field(628, "HOP1");
        message.header_mut().push_field(628, "HOP2");
        let _ = assert_that(&message).header().has_group(627, 2);
        let failure = failure_of(|| assert_that(&message).header().has_group(627, 3));
        assert!(failure.ends_with("to have value:\n <3>\nbut was:\n <2>"));
    }

    #[test]
    fn test_poss_dup_flag() {
        let mut message = NewOrderSingleBuilder::with_defaults(Version::Fix44)
            .build()
            .unwrap();
        message.header_mut().set_field(43, "Y");
        let _ = assert_that(&message).header().has_poss_dup_flag(true);
        let failure = failure_of(|| assert_that(&message).header().has_poss_dup_flag(false));
        assert!(failure.ends_with("to have value:\n <false>\nbut was:\n <true>"));
    }
}
