/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Entry points.

use crate::failure::AssertionInfo;
use crate::message_assert::MessageAssert;
use crate::new_order_single::NewOrderSingleAssert;
use fixassert_core::Message;
use std::borrow::Cow;

/// Something an assertion chain can be started on.
///
/// Implemented for `&Message`, `Option<&Message>` and owned `Message`.
pub trait ActualMessage<'a> {
    /// Converts into the message under test.
    fn into_actual(self) -> Option<Cow<'a, Message>>;
}

impl<'a> ActualMessage<'a> for &'a Message {
    fn into_actual(self) -> Option<Cow<'a, Message>> {
        Some(Cow::Borrowed(self))
    }
}

impl<'a> ActualMessage<'a> for Option<&'a Message> {
    fn into_actual(self) -> Option<Cow<'a, Message>> {
        self.map(Cow::Borrowed)
    }
}

impl ActualMessage<'static> for Message {
    fn into_actual(self) -> Option<Cow<'static, Message>> {
        Some(Cow::Owned(self))
    }
}

/// Starts an assertion chain on `message`.
///
/// # Examples
/// ```
/// use fixassert_api::{FieldMapAssert, assert_that};
///
/// let message = fixassert_tagvalue::parse(
///     "8=FIX.4.0\x019=61\x0135=A\x0134=1\x0149=BANZAI\x0152=20200408-06:49:07\x0156=EXEC\x0198=0\x01108=30\x0110=015\x01",
/// )
/// .unwrap();
/// let _ = assert_that(&message)
///     .is_version_40()
///     .is_logon()
///     .has_field_value(108, 30);
/// ```
#[must_use]
pub fn assert_that<'a>(message: impl ActualMessage<'a>) -> MessageAssert<'a> {
    MessageAssert::new(message.into_actual(), AssertionInfo::new())
}

/// Starts a NewOrderSingle assertion chain on `message`.
#[track_caller]
#[must_use]
pub fn assert_new_order_single(message: &Message) -> NewOrderSingleAssert<'_> {
    assert_that(message).as_new_order_single()
}
