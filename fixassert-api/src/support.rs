/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Message fixtures for tests.
//!
//! [`NewOrderSingleBuilder`] builds a NewOrderSingle for any supported
//! version. FIX 5.0+ orders are written as FIXT.1.1 with ApplVerID.

use chrono::{NaiveDateTime, SubsecRound, Utc};
use fixassert_core::{EncodeError, FixField, HandlInst, Message, MsgType, OrdType, Side, fields};
use fixassert_dictionary::Version;
use rust_decimal::Decimal;

/// Builder for NewOrderSingle (35=D) messages.
#[derive(Debug, Clone)]
pub struct NewOrderSingleBuilder {
    begin_string: Option<String>,
    sender_comp_id: String,
    target_comp_id: String,
    msg_seq_num: i64,
    sending_time: NaiveDateTime,
    cl_ord_id: Option<String>,
    handl_inst: Option<char>,
    symbol: Option<String>,
    side: Option<char>,
    order_qty: Option<Decimal>,
    ord_type: Option<char>,
    price: Option<Decimal>,
    account: Option<String>,
    transact_time: Option<NaiveDateTime>,
    signature: Option<String>,
}

impl Default for NewOrderSingleBuilder {
    fn default() -> Self {
        Self {
            begin_string: None,
            sender_comp_id: "BANZAI".to_string(),
            target_comp_id: "EXEC".to_string(),
            msg_seq_num: 1,
            sending_time: now(),
            cl_ord_id: None,
            handl_inst: None,
            symbol: None,
            side: None,
            order_qty: None,
            ord_type: None,
            price: None,
            account: None,
            transact_time: None,
            signature: None,
        }
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(3)
}

impl NewOrderSingleBuilder {
    /// Creates a builder with no version and no order fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder for `version` with a complete limit order:
    /// ClOrdID 13346, buy 1000 GBP/USD at 300 for account Marcel.
    #[must_use]
    pub fn with_defaults(version: Version) -> Self {
        Self::new()
            .with_version(version)
            .with_cl_ord_id("13346")
            .with_handl_inst(HandlInst::AutomatedExecutionOrderPrivate)
            .with_symbol("GBP/USD")
            .with_side(Side::Buy)
            .with_order_qty(Decimal::from(1000))
            .with_ord_type(OrdType::Limit)
            .with_price(Decimal::from(300))
            .with_account("Marcel")
            .with_transact_time(now())
    }

    /// Sets the version.
    #[must_use]
    pub fn with_version(self, version: Version) -> Self {
        self.with_begin_string(version.identifier())
    }

    /// Sets a version identifier, which may name a custom version.
    #[must_use]
    pub fn with_begin_string(mut self, begin_string: impl Into<String>) -> Self {
        self.begin_string = Some(begin_string.into());
        self
    }

    /// Sets SenderCompID.
    #[must_use]
    pub fn with_sender_comp_id(mut self, sender: impl Into<String>) -> Self {
        self.sender_comp_id = sender.into();
        self
    }

    /// Sets TargetCompID.
    #[must_use]
    pub fn with_target_comp_id(mut self, target: impl Into<String>) -> Self {
        self.target_comp_id = target.into();
        self
    }

    /// Sets MsgSeqNum.
    #[must_use]
    pub const fn with_msg_seq_num(mut self, msg_seq_num: i64) -> Self {
        self.msg_seq_num = msg_seq_num;
        self
    }

    /// Sets SendingTime.
    #[must_use]
    pub const fn with_sending_time(mut self, sending_time: NaiveDateTime) -> Self {
        self.sending_time = sending_time;
        self
    }

    /// Sets ClOrdID.
    #[must_use]
    pub fn with_cl_ord_id(mut self, cl_ord_id: impl Into<String>) -> Self {
        self.cl_ord_id = Some(cl_ord_id.into());
        self
    }

    /// Sets HandlInst.
    #[must_use]
    pub fn with_handl_inst(mut self, handl_inst: impl Into<char>) -> Self {
        self.handl_inst = Some(handl_inst.into());
        self
    }

    /// Sets Symbol.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Sets Side.
    #[must_use]
    pub fn with_side(mut self, side: impl Into<char>) -> Self {
        self.side = Some(side.into());
        self
    }

    /// Sets OrderQty.
    #[must_use]
    pub fn with_order_qty(mut self, order_qty: impl Into<Decimal>) -> Self {
        self.order_qty = Some(order_qty.into());
        self
    }

    /// Sets OrdType.
    #[must_use]
    pub fn with_ord_type(mut self, ord_type: impl Into<char>) -> Self {
        self.ord_type = Some(ord_type.into());
        self
    }

    /// Sets Price.
    #[must_use]
    pub fn with_price(mut self, price: impl Into<Decimal>) -> Self {
        self.price = Some(price.into());
        self
    }

    /// Sets Account.
    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Sets TransactTime.
    #[must_use]
    pub const fn with_transact_time(mut self, transact_time: NaiveDateTime) -> Self {
        self.transact_time = Some(transact_time);
        self
    }

    /// Adds a Signature and its SignatureLength to the trailer.
    #[must_use]
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Builds the message.
    ///
    /// # Errors
    /// Returns `EncodeError::MissingBeginString` if no version was set.
    pub fn build(self) -> Result<Message, EncodeError> {
        let identifier = self.begin_string.ok_or(EncodeError::MissingBeginString)?;
        let version = Version::from_identifier(&identifier);

        let mut message = Message::new();
        let header = message.header_mut();
        match version.and_then(|v| v.appl_ver_id()) {
            Some(appl_ver_id) => {
                header.set::<fields::BeginString>(Version::Fixt11.begin_string());
                header.set::<fields::MsgType>(MsgType::NewOrderSingle.as_str());
                header.set::<fields::ApplVerId>(appl_ver_id);
            }
            None => {
                header.set::<fields::BeginString>(identifier);
                header.set::<fields::MsgType>(MsgType::NewOrderSingle.as_str());
            }
        }
        header.set::<fields::SenderCompId>(self.sender_comp_id);
        header.set::<fields::TargetCompId>(self.target_comp_id);
        header.set::<fields::MsgSeqNum>(self.msg_seq_num);
        header.set::<fields::SendingTime>(self.sending_time);

        let body = message.body_mut();
        if let Some(value) = self.cl_ord_id {
            body.set::<fields::ClOrdId>(value);
        }
        if let Some(value) = self.handl_inst {
            body.set::<fields::HandlInst>(value);
        }
        if let Some(value) = self.symbol {
            body.set::<fields::Symbol>(value);
        }
        if let Some(value) = self.side {
            body.set::<fields::Side>(value);
        }
        if let Some(value) = self.order_qty {
            body.set::<fields::OrderQty>(value);
        }
        if let Some(value) = self.ord_type {
            body.set::<fields::OrdType>(value);
        }
        if let Some(value) = self.price {
            body.set::<fields::Price>(value);
        }
        if let Some(value) = self.account {
            body.set::<fields::Account>(value);
        }
        if let Some(value) = self.transact_time {
            body.set::<fields::TransactTime>(value);
        }

        if let Some(signature) = self.signature {
            let length = i64::try_from(signature.len()).map_err(|_| EncodeError::InvalidFieldValue {
                tag: fields::Signature::TAG,
                reason: "signature too long".to_string(),
            })?;
            let trailer = message.trailer_mut();
            trailer.set::<fields::SignatureLength>(length);
            trailer.set::<fields::Signature>(signature);
        }

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_fix44() {
        let message = NewOrderSingleBuilder::with_defaults(Version::Fix44)
            .build()
            .unwrap();
        assert_eq!(message.begin_string(), Some("FIX.4.4"));
        assert_eq!(message.msg_type(), Some(MsgType::NewOrderSingle));
        assert_eq!(message.body().get_str(11), Some("13346"));
        assert_eq!(message.body().get_str(38), Some("1000"));
        assert_eq!(message.body().get_str(54), Some("1"));
        assert!(!message.header().is_set_field(1128));
    }

    #[test]
    fn test_build_fixt() {
        let message = NewOrderSingleBuilder::with_defaults(Version::Fix50Sp1)
            .build()
            .unwrap();
        assert_eq!(message.begin_string(), Some("FIXT.1.1"));
        assert_eq!(message.header().get_str(1128), Some("8"));
    }

    #[test]
    fn test_build_round_trips_through_decoder() {
        let message = NewOrderSingleBuilder::with_defaults(Version::Fix42)
            .with_signature("SIG")
            .build()
            .unwrap();
        let decoded = fixassert_tagvalue::parse(&message.to_string()).unwrap();
        assert_eq!(decoded.to_string(), message.to_string());
        assert_eq!(decoded.trailer().get_str(fields::Signature::TAG), Some("SIG"));
    }

    #[test]
    fn test_missing_version() {
        assert!(matches!(
            NewOrderSingleBuilder::new().build(),
            Err(EncodeError::MissingBeginString)
        ));
    }
}
