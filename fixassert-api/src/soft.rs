/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Soft assertions.
//!
//! Chains created from a [`SoftAssertions`] record their failures instead of
//! panicking. [`SoftAssertions::assert_all`] then reports all of them at once.

use crate::assertions::ActualMessage;
use crate::failure::AssertionInfo;
use crate::message_assert::MessageAssert;
use crate::new_order_single::NewOrderSingleAssert;
use fixassert_core::Message;
use parking_lot::Mutex;
use std::fmt::Write;
use std::sync::Arc;

/// Collects failures from every chain it creates.
#[derive(Debug, Clone, Default)]
pub struct SoftAssertions {
    errors: Arc<Mutex<Vec<String>>>,
}

impl SoftAssertions {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a soft assertion chain on `message`.
    #[must_use]
    pub fn assert_that<'a>(&self, message: impl ActualMessage<'a>) -> MessageAssert<'a> {
        MessageAssert::new(message.into_actual(), self.info())
    }

    /// Starts a soft NewOrderSingle chain on `message`.
    #[must_use]
    pub fn assert_new_order_single<'a>(&self, message: &'a Message) -> NewOrderSingleAssert<'a> {
        self.assert_that(message).as_new_order_single()
    }

    /// Returns the info soft chains report through.
    #[must_use]
    pub fn info(&self) -> AssertionInfo {
        AssertionInfo::collecting(Arc::clone(&self.errors))
    }

    /// Returns the failures recorded so far.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().clone()
    }

    /// Returns true if nothing failed.
    #[must_use]
    pub fn was_success(&self) -> bool {
        self.errors.lock().is_empty()
    }

    /// Panics with every recorded failure, numbered, if any.
    ///
    /// # Panics
    /// Panics when at least one failure was recorded.
    #[track_caller]
    pub fn assert_all(&self) {
        let errors = self.errors();
        if errors.is_empty() {
            return;
        }
        let noun = if errors.len() == 1 { "failure" } else { "failures" };
        let mut report = format!("\nMultiple Failures ({} {noun})", errors.len());
        for (index, error) in errors.iter().enumerate() {
            let _ = write!(report, "\n-- failure {} --\n{error}", index + 1);
        }
        panic!("{report}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_map_assert::FieldMapAssert;
    use crate::testing::{failure_of, logon};

    #[test]
    fn test_no_failures() {
        let softly = SoftAssertions::new();
        let message = logon();
        let _ = softly.assert_that(&message).is_logon().has_field(98);
        assert!(softly.was_success());
        softly.assert_all();
    }

    #[test]
    fn test_collects_every_failure() {
        let softly = SoftAssertions::new();
        let message = logon();
        let _ = softly
            .assert_that(&message)
            .is_heartbeat()
            .has_fields(&[11, 55])
            .is_version_44();
        let _ = softly.assert_that(None::<&Message>).is_not_null();

        let errors = softly.errors();
        assert_eq!(errors.len(), 5);
        assert!(errors[0].contains("to be of type <\"0\">"));
        assert!(errors[1].contains("to have field with tag <11>"));
        assert!(errors[2].contains("to have field with tag <55>"));
        assert!(errors[3].contains("to have version:"));
        assert_eq!(errors[4], "\nExpecting actual not to be null");
    }

    #[test]
    fn test_assert_all_reports_numbered_failures() {
        let softly = SoftAssertions::new();
        let message = logon();
        let _ = softly.assert_that(&message).described_as("first").is_app();
        let _ = softly.assert_that(&message).header().has_sender_comp_id("OTHER");

        let report = failure_of(|| softly.assert_all());
        assert!(report.starts_with("\nMultiple Failures (2 failures)\n-- failure 1 --\n[first] Expecting Message:"));
        assert!(report.contains("\n-- failure 2 --\nExpecting field <SenderCompID> with tag <49>"));
    }

    #[test]
    fn test_soft_new_order_single() {
        let softly = SoftAssertions::new();
        let message = logon();
        let _ = softly.assert_new_order_single(&message).has_cl_ord_id("1");
        let errors = softly.errors();
        assert!(errors[0].contains("to be of type <\"D\">"));
        assert!(errors.iter().any(|e| e.contains("to have field with tag <11>")));
    }
}
