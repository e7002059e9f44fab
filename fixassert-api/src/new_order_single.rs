/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Typed assertions for NewOrderSingle (35=D), FIX.4.0 through FIX.5.0SP2.

use crate::context::{AssertContext, Section, resolve_begin_string};
use crate::failure::{AssertionInfo, Failure};
use crate::field_map_assert::FieldMapAssert;
use crate::message_assert::MessageAssert;
use crate::validation::validate;
use chrono::NaiveDateTime;
use fixassert_core::{Message, MsgType, fields};
use fixassert_dictionary::{DictionaryProvider, Version};
use fixassert_tagvalue::Decoder;
use rust_decimal::Decimal;
use std::borrow::Cow;
use tracing::debug;

/// Versions a NewOrderSingle assertion supports, oldest first.
pub const SUPPORTED_VERSIONS: [Version; 8] = [
    Version::Fix40,
    Version::Fix41,
    Version::Fix42,
    Version::Fix43,
    Version::Fix44,
    Version::Fix50,
    Version::Fix50Sp1,
    Version::Fix50Sp2,
];

/// Returns the supported version named by `identifier`.
#[must_use]
pub fn supported_version(identifier: &str) -> Option<Version> {
    SUPPORTED_VERSIONS
        .into_iter()
        .find(|version| version.identifier() == identifier)
}

fn unsupported(actual: &str) -> Failure {
    Failure::ShouldBeValidVersion {
        supported: SUPPORTED_VERSIONS
            .iter()
            .map(Version::identifier)
            .collect::<Vec<_>>()
            .join(", "),
        actual: actual.to_string(),
    }
}

/// Fluent assertions on the fields of a NewOrderSingle.
#[derive(Debug, Clone)]
pub struct NewOrderSingleAssert<'a> {
    parent: MessageAssert<'a>,
    version: Option<Version>,
}

impl FieldMapAssert for NewOrderSingleAssert<'_> {
    const CONTAINER: &'static str = "Message";
    const SECTION: Section = Section::Body;

    fn actual(&self) -> Option<&Message> {
        self.parent.actual()
    }

    fn context(&self) -> &AssertContext {
        self.parent.context()
    }
}

impl<'a> NewOrderSingleAssert<'a> {
    #[track_caller]
    pub(crate) fn from_message_assert(parent: MessageAssert<'a>) -> Self {
        let parent = parent.is_new_order_single();
        let resolved = parent.context().begin_string().map(str::to_string);
        let version = resolved.as_deref().and_then(supported_version);
        if parent.actual().is_some() && version.is_none() {
            parent
                .context()
                .info()
                .fail(unsupported(resolved.as_deref().unwrap_or("null")));
        }
        Self { parent, version }
    }

    /// Returns the version this assertion covers.
    #[must_use]
    pub const fn version(&self) -> Option<Version> {
        self.version
    }

    /// Returns to the message assertions.
    #[must_use]
    pub fn and(self) -> MessageAssert<'a> {
        self.parent
    }

    /// Verifies ClOrdID (11).
    #[track_caller]
    #[must_use]
    pub fn has_cl_ord_id(self, expected: impl Into<String>) -> Self {
        self.has::<fields::ClOrdId>(expected)
    }

    /// Verifies HandlInst (21).
    #[track_caller]
    #[must_use]
    pub fn has_handl_inst(self, expected: impl Into<char>) -> Self {
        self.has::<fields::HandlInst>(expected.into())
    }

    /// Verifies Symbol (55).
    #[track_caller]
    #[must_use]
    pub fn has_symbol(self, expected: impl Into<String>) -> Self {
        self.has::<fields::Symbol>(expected)
    }

    /// Verifies Side (54).
    #[track_caller]
    #[must_use]
    pub fn has_side(self, expected: impl Into<char>) -> Self {
        self.has::<fields::Side>(expected.into())
    }

    /// Verifies OrderQty (38).
    #[track_caller]
    #[must_use]
    pub fn has_order_qty(self, expected: impl Into<Decimal>) -> Self {
        self.has::<fields::OrderQty>(expected)
    }

    /// Verifies OrdType (40).
    #[track_caller]
    #[must_use]
    pub fn has_ord_type(self, expected: impl Into<char>) -> Self {
        self.has::<fields::OrdType>(expected.into())
    }

    /// Verifies TransactTime (60).
    #[track_caller]
    #[must_use]
    pub fn has_transact_time(self, expected: NaiveDateTime) -> Self {
        self.has::<fields::TransactTime>(expected)
    }

    /// Verifies Account (1).
    #[track_caller]
    #[must_use]
    pub fn has_account(self, expected: impl Into<String>) -> Self {
        self.has::<fields::Account>(expected)
    }

    /// Verifies Price (44).
    #[track_caller]
    #[must_use]
    pub fn has_price(self, expected: impl Into<Decimal>) -> Self {
        self.has::<fields::Price>(expected)
    }
}

/// Creates [`NewOrderSingleAssert`]s from raw FIX text.
#[derive(Debug, Clone, Default)]
pub struct NewOrderSingleAssertFactory {
    info: AssertionInfo,
}

impl NewOrderSingleAssertFactory {
    /// Creates a factory whose assertions panic on failure.
    #[must_use]
    pub fn new() -> Self {
        Self {
            info: AssertionInfo::new(),
        }
    }

    /// Creates a factory reporting through `info`.
    #[must_use]
    pub const fn with_info(info: AssertionInfo) -> Self {
        Self { info }
    }

    /// Decodes `raw` as a NewOrderSingle of version `begin_string`.
    ///
    /// # Arguments
    /// * `begin_string` - A version identifier, `"FIX.4.0"` through `"FIX.5.0SP2"`
    /// * `raw` - SOH-delimited tag=value text
    ///
    /// # Returns
    /// An assertion over the decoded message. On failure the assertion has
    /// no message, so every later check reports a null actual.
    #[track_caller]
    #[must_use]
    pub fn message_from_fix_version(&self, begin_string: &str, raw: &str) -> NewOrderSingleAssert<'static> {
        let Some(version) = supported_version(begin_string) else {
            self.info.fail(unsupported(begin_string));
            return self.empty(None);
        };
        match self.decode(version, raw) {
            Ok(message) => NewOrderSingleAssert {
                parent: MessageAssert::new(Some(Cow::Owned(message)), self.info.clone()),
                version: Some(version),
            },
            Err(reason) => {
                debug!(begin_string, reason = %reason, "rejecting NewOrderSingle");
                self.info.fail(Failure::ShouldBeValidMessage {
                    message: raw.replace(fixassert_core::SOH, &self.info.config().delimiter.to_string()),
                    reason,
                });
                self.empty(Some(version))
            }
        }
    }

    fn empty(&self, version: Option<Version>) -> NewOrderSingleAssert<'static> {
        NewOrderSingleAssert {
            parent: MessageAssert::new(None, self.info.clone()),
            version,
        }
    }

    fn decode(&self, version: Version, raw: &str) -> Result<Message, String> {
        let transport = DictionaryProvider::global()
            .session_dictionary(version.begin_string())
            .ok_or_else(|| format!("no dictionary for {}", version.begin_string()))?;
        let message = Decoder::new(raw.as_bytes())
            .with_dictionary(&transport)
            .decode()
            .map_err(|err| err.to_string())?;

        let resolved = resolve_begin_string(&message).unwrap_or_default();
        if resolved != version.identifier() {
            return Err(format!(
                "Expected version {} but was {}",
                version.identifier(),
                resolved
            ));
        }
        if message.msg_type_str() != Some(MsgType::NewOrderSingle.as_str()) {
            return Err(format!(
                "Expected MsgType D but was {}",
                message.msg_type_str().unwrap_or("null")
            ));
        }
        let context = AssertContext::new(Some(&message), self.info.clone());
        validate(&message, &context)?;
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_new_order_single;
    use crate::assert_that;
    use crate::support::NewOrderSingleBuilder;
    use crate::testing::{failure_of, logon};
    use chrono::NaiveDate;
    use fixassert_core::{HandlInst, OrdType, Side};

    fn transact_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 4, 8)
            .unwrap()
            .and_hms_milli_opt(6, 49, 7, 250)
            .unwrap()
    }

    fn order(version: Version) -> Message {
        NewOrderSingleBuilder::with_defaults(version)
            .with_transact_time(transact_time())
            .build()
            .unwrap()
    }

    #[test]
    fn test_every_supported_version() {
        for version in SUPPORTED_VERSIONS {
            let message = order(version);
            let assert = assert_new_order_single(&message)
                .has_cl_ord_id("13346")
                .has_handl_inst(HandlInst::AutomatedExecutionOrderPrivate)
                .has_symbol("GBP/USD")
                .has_side(Side::Buy)
                .has_order_qty(Decimal::from(1000))
                .has_ord_type(OrdType::Limit)
                .has_price(Decimal::from(300))
                .has_account("Marcel")
                .has_transact_time(transact_time());
            assert_eq!(assert.version(), Some(version));
        }
    }

    #[test]
    fn test_typed_mismatch() {
        let message = order(Version::Fix44);
        let failure = failure_of(|| assert_new_order_single(&message).has_side(Side::Sell));
        assert!(failure.starts_with("Expecting field <Side> with tag <54> in Message:"));
        assert!(failure.ends_with("to have value:\n <'2'>\nbut was:\n <'1'>"));

        let failure = failure_of(|| assert_new_order_single(&message).has_price(Decimal::new(30025, 2)));
        assert!(failure.ends_with("to have value:\n <300.25>\nbut was:\n <300.0>"));
    }

    #[test]
    fn test_not_a_new_order_single() {
        let message = logon();
        let failure = failure_of(|| assert_that(&message).as_new_order_single());
        assert!(failure.contains("to be of type <\"D\">"));
    }

    #[test]
    fn test_unsupported_version() {
        let mut message = order(Version::Fix44);
        message.header_mut().set_field(8, "FIX.9.9");
        let failure = failure_of(|| assert_new_order_single(&message));
        assert_eq!(
            failure,
            "\nExpecting Message version to be one of:\n <FIX.4.0, FIX.4.1, FIX.4.2, FIX.4.3, FIX.4.4, FIX.5.0, FIX.5.0SP1, FIX.5.0SP2>\nbut was:\n <FIX.9.9>"
        );
    }

    #[test]
    fn test_factory_decodes_raw_message() {
        let raw = order(Version::Fix42).to_string();
        let _ = NewOrderSingleAssertFactory::new()
            .message_from_fix_version("FIX.4.2", &raw)
            .has_cl_ord_id("13346")
            .has_side('1')
            .and()
            .is_version_42();
    }

    #[test]
    fn test_factory_fixt() {
        let raw = order(Version::Fix50Sp2).to_string();
        let assert = NewOrderSingleAssertFactory::new().message_from_fix_version("FIX.5.0SP2", &raw);
        assert_eq!(assert.version(), Some(Version::Fix50Sp2));
        let _ = assert.has_symbol("GBP/USD").and().is_version_50_sp2();
    }

    #[test]
    fn test_factory_rejects_unsupported_version() {
        let failure = failure_of(|| NewOrderSingleAssertFactory::new().message_from_fix_version("FIXT.1.1", ""));
        assert!(failure.ends_with("but was:\n <FIXT.1.1>"));
    }

    #[test]
    fn test_factory_rejects_version_mismatch() {
        let raw = order(Version::Fix44).to_string();
        let failure = failure_of(|| NewOrderSingleAssertFactory::new().message_from_fix_version("FIX.4.2", &raw));
        assert!(failure.starts_with("\nExpecting message:\n <8=FIX.4.4"));
        assert!(failure.ends_with("to be valid but was not:\n <Expected version FIX.4.2 but was FIX.4.4>"));
    }

    #[test]
    fn test_factory_rejects_bad_checksum() {
        let raw = order(Version::Fix43).to_string();
        let tampered = format!("{}000\u{1}", &raw[..raw.len() - 4]);
        let failure = failure_of(|| NewOrderSingleAssertFactory::new().message_from_fix_version("FIX.4.3", &tampered));
        assert!(failure.contains("to be valid but was not:"));
    }

    #[test]
    fn test_factory_rejects_invalid_message() {
        let mut message = order(Version::Fix44);
        message.body_mut().remove_field(55);
        let raw = message.to_string();
        let failure = failure_of(|| NewOrderSingleAssertFactory::new().message_from_fix_version("FIX.4.4", &raw));
        assert!(failure.ends_with("<Required tag missing, field=55>"));
    }
}
