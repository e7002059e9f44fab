/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Embedded dictionaries for FIX 4.0 through FIX 5.0 SP2 and FIXT 1.1.
//!
//! The tables cover the standard header and trailer, the session messages
//! and the common order-flow messages. Field types follow the version: up to
//! FIX 4.1 quantities are INT, prices FLOAT, timestamps TIME and flags CHAR.
//! FIXT 1.1 carries only session fields and admin messages, while the FIX
//! 5.0 dictionaries carry application messages.

use crate::schema::{
    Dictionary, FieldDef, FieldRef, FieldType, MessageCategory, MessageDef, Version,
};

use FieldType as T;
use Version::*;

/// A field row: tag, name, type up to FIX 4.1, type from FIX 4.2, first
/// version, and whether FIXT 1.1 carries it.
struct FieldSpec {
    tag: u32,
    name: &'static str,
    legacy: FieldType,
    modern: FieldType,
    since: Version,
    session: bool,
}

const fn s(tag: u32, name: &'static str, legacy: FieldType, modern: FieldType) -> FieldSpec {
    FieldSpec {
        tag,
        name,
        legacy,
        modern,
        since: Fix40,
        session: true,
    }
}

const fn a(tag: u32, name: &'static str, legacy: FieldType, modern: FieldType) -> FieldSpec {
    FieldSpec {
        tag,
        name,
        legacy,
        modern,
        since: Fix40,
        session: false,
    }
}

impl FieldSpec {
    const fn since(mut self, version: Version) -> Self {
        self.since = version;
        self
    }

    fn field_type(&self, version: Version) -> FieldType {
        if version <= Fix41 {
            self.legacy
        } else {
            self.modern
        }
    }

    fn included_in(&self, version: Version) -> bool {
        version >= self.since && (version != Fixt11 || self.session)
    }
}

const FIELDS: &[FieldSpec] = &[
    // Standard header
    s(8, "BeginString", T::String, T::String),
    s(9, "BodyLength", T::Int, T::Length),
    s(35, "MsgType", T::String, T::String),
    s(34, "MsgSeqNum", T::Int, T::SeqNum),
    s(49, "SenderCompID", T::String, T::String),
    s(56, "TargetCompID", T::String, T::String),
    s(115, "OnBehalfOfCompID", T::String, T::String),
    s(128, "DeliverToCompID", T::String, T::String),
    s(90, "SecureDataLen", T::Int, T::Length),
    s(91, "SecureData", T::Data, T::Data),
    s(50, "SenderSubID", T::String, T::String),
    s(57, "TargetSubID", T::String, T::String),
    s(116, "OnBehalfOfSubID", T::String, T::String),
    s(129, "DeliverToSubID", T::String, T::String),
    s(142, "SenderLocationID", T::String, T::String).since(Fix41),
    s(143, "TargetLocationID", T::String, T::String).since(Fix41),
    s(144, "OnBehalfOfLocationID", T::String, T::String).since(Fix41),
    s(145, "DeliverToLocationID", T::String, T::String).since(Fix41),
    s(43, "PossDupFlag", T::Char, T::Boolean),
    s(97, "PossResend", T::Char, T::Boolean),
    s(52, "SendingTime", T::Time, T::UtcTimestamp),
    s(122, "OrigSendingTime", T::Time, T::UtcTimestamp),
    s(212, "XmlDataLen", T::Length, T::Length).since(Fix42),
    s(213, "XmlData", T::Data, T::Data).since(Fix42),
    s(347, "MessageEncoding", T::String, T::String).since(Fix42),
    s(369, "LastMsgSeqNumProcessed", T::SeqNum, T::SeqNum).since(Fix42),
    s(627, "NoHops", T::NumInGroup, T::NumInGroup).since(Fix43),
    s(628, "HopCompID", T::String, T::String).since(Fix43),
    s(629, "HopSendingTime", T::UtcTimestamp, T::UtcTimestamp).since(Fix43),
    s(630, "HopRefID", T::SeqNum, T::SeqNum).since(Fix43),
    s(1128, "ApplVerID", T::String, T::String).since(Fix50),
    s(1129, "CstmApplVerID", T::String, T::String).since(Fix50),
    s(1156, "ApplExtID", T::Int, T::Int).since(Fix50),
    // Standard trailer
    s(93, "SignatureLength", T::Int, T::Length),
    s(89, "Signature", T::Data, T::Data),
    s(10, "CheckSum", T::String, T::String),
    // Session messages
    s(7, "BeginSeqNo", T::Int, T::SeqNum),
    s(16, "EndSeqNo", T::Int, T::SeqNum),
    s(36, "NewSeqNo", T::Int, T::SeqNum),
    s(45, "RefSeqNum", T::Int, T::SeqNum),
    s(58, "Text", T::String, T::String),
    s(98, "EncryptMethod", T::Int, T::Int),
    s(108, "HeartBtInt", T::Int, T::Int),
    s(112, "TestReqID", T::String, T::String),
    s(123, "GapFillFlag", T::Char, T::Boolean),
    s(141, "ResetSeqNumFlag", T::Char, T::Boolean).since(Fix41),
    s(371, "RefTagID", T::Int, T::Int).since(Fix42),
    s(372, "RefMsgType", T::String, T::String).since(Fix42),
    s(373, "SessionRejectReason", T::Int, T::Int).since(Fix42),
    s(383, "MaxMessageSize", T::Length, T::Length).since(Fix42),
    s(553, "Username", T::String, T::String).since(Fix43),
    s(554, "Password", T::String, T::String).since(Fix43),
    s(1137, "DefaultApplVerID", T::String, T::String).since(Fix50),
    // Application fields
    a(1, "Account", T::String, T::String),
    a(2, "AdvId", T::String, T::String),
    a(3, "AdvRefID", T::String, T::String),
    a(4, "AdvSide", T::Char, T::Char),
    a(5, "AdvTransType", T::String, T::String),
    a(6, "AvgPx", T::Float, T::Price),
    a(11, "ClOrdID", T::String, T::String),
    a(12, "Commission", T::Float, T::Amt),
    a(13, "CommType", T::Char, T::Char),
    a(14, "CumQty", T::Int, T::Qty),
    a(15, "Currency", T::String, T::Currency),
    a(17, "ExecID", T::String, T::String),
    a(18, "ExecInst", T::Char, T::MultipleValueString),
    a(20, "ExecTransType", T::Char, T::Char),
    a(21, "HandlInst", T::Char, T::Char),
    a(22, "IDSource", T::Char, T::String),
    a(23, "IOIid", T::String, T::String),
    a(31, "LastPx", T::Float, T::Price),
    a(32, "LastShares", T::Int, T::Qty),
    a(33, "LinesOfText", T::Int, T::NumInGroup),
    a(37, "OrderID", T::String, T::String),
    a(38, "OrderQty", T::Int, T::Qty),
    a(39, "OrdStatus", T::Char, T::Char),
    a(40, "OrdType", T::Char, T::Char),
    a(41, "OrigClOrdID", T::String, T::String),
    a(44, "Price", T::Float, T::Price),
    a(47, "Rule80A", T::Char, T::Char),
    a(48, "SecurityID", T::String, T::String),
    a(53, "Shares", T::Int, T::Qty),
    a(54, "Side", T::Char, T::Char),
    a(55, "Symbol", T::String, T::String),
    a(59, "TimeInForce", T::Char, T::Char),
    a(60, "TransactTime", T::Time, T::UtcTimestamp),
    a(63, "SettlmntTyp", T::Char, T::Char),
    a(64, "FutSettDate", T::LocalMktDate, T::LocalMktDate),
    a(65, "SymbolSfx", T::String, T::String),
    a(66, "ListID", T::String, T::String),
    a(75, "TradeDate", T::LocalMktDate, T::LocalMktDate),
    a(76, "ExecBroker", T::String, T::String),
    a(99, "StopPx", T::Float, T::Price),
    a(100, "ExDestination", T::String, T::Exchange),
    a(106, "Issuer", T::String, T::String),
    a(107, "SecurityDesc", T::String, T::String),
    a(109, "ClientID", T::String, T::String),
    a(110, "MinQty", T::Int, T::Qty),
    a(111, "MaxFloor", T::Int, T::Qty),
    a(114, "LocateReqd", T::Char, T::Boolean),
    a(117, "QuoteID", T::String, T::String),
    a(120, "SettlCurrency", T::String, T::Currency),
    a(121, "ForexReq", T::Char, T::Boolean),
    a(126, "ExpireTime", T::Time, T::UtcTimestamp),
    a(148, "Headline", T::String, T::String),
    a(150, "ExecType", T::Char, T::Char).since(Fix41),
    a(151, "LeavesQty", T::Int, T::Qty).since(Fix41),
    a(167, "SecurityType", T::String, T::String).since(Fix41),
    a(168, "EffectiveTime", T::Time, T::UtcTimestamp).since(Fix41),
    a(200, "MaturityMonthYear", T::MonthYear, T::MonthYear).since(Fix41),
    a(201, "PutOrCall", T::Int, T::Int).since(Fix41),
    a(202, "StrikePrice", T::Float, T::Price).since(Fix41),
    a(205, "MaturityDay", T::DayOfMonth, T::DayOfMonth).since(Fix41),
    a(207, "SecurityExchange", T::String, T::Exchange).since(Fix41),
    a(146, "NoRelatedSym", T::NumInGroup, T::NumInGroup).since(Fix42),
    a(152, "CashOrderQty", T::Qty, T::Qty).since(Fix42),
    a(210, "MaxShow", T::Qty, T::Qty).since(Fix42),
    a(211, "PegDifference", T::PriceOffset, T::PriceOffset).since(Fix42),
    a(262, "MDReqID", T::String, T::String).since(Fix42),
    a(263, "SubscriptionRequestType", T::Char, T::Char).since(Fix42),
    a(264, "MarketDepth", T::Int, T::Int).since(Fix42),
    a(267, "NoMDEntryTypes", T::NumInGroup, T::NumInGroup).since(Fix42),
    a(268, "NoMDEntries", T::NumInGroup, T::NumInGroup).since(Fix42),
    a(269, "MDEntryType", T::Char, T::Char).since(Fix42),
    a(270, "MDEntryPx", T::Price, T::Price).since(Fix42),
    a(271, "MDEntrySize", T::Qty, T::Qty).since(Fix42),
    a(272, "MDEntryDate", T::UtcDate, T::UtcDate).since(Fix42),
    a(273, "MDEntryTime", T::UtcTimeOnly, T::UtcTimeOnly).since(Fix42),
    a(336, "TradingSessionID", T::String, T::String).since(Fix42),
    a(377, "SolicitedFlag", T::Boolean, T::Boolean).since(Fix42),
    a(379, "BusinessRejectRefID", T::String, T::String).since(Fix42),
    a(380, "BusinessRejectReason", T::Int, T::Int).since(Fix42),
    a(386, "NoTradingSessions", T::NumInGroup, T::NumInGroup).since(Fix42),
    a(421, "Country", T::Country, T::Country).since(Fix42),
    a(432, "ExpireDate", T::LocalMktDate, T::LocalMktDate).since(Fix42),
    a(434, "CxlRejResponseTo", T::Char, T::Char).since(Fix42),
    a(447, "PartyIDSource", T::Char, T::Char).since(Fix43),
    a(448, "PartyID", T::String, T::String).since(Fix43),
    a(452, "PartyRole", T::Int, T::Int).since(Fix43),
    a(453, "NoPartyIDs", T::NumInGroup, T::NumInGroup).since(Fix43),
    a(460, "Product", T::Int, T::Int).since(Fix43),
    a(528, "OrderCapacity", T::Char, T::Char).since(Fix43),
    a(581, "AccountType", T::Int, T::Int).since(Fix43),
    a(849, "ParticipationRate", T::Percentage, T::Percentage).since(Fix44),
];

/// Header tags in wire order, with the required flag.
const HEADER: &[(u32, bool)] = &[
    (8, true),
    (9, true),
    (35, true),
    (1128, false),
    (1129, false),
    (1156, false),
    (49, true),
    (56, true),
    (115, false),
    (128, false),
    (90, false),
    (91, false),
    (34, true),
    (50, false),
    (142, false),
    (57, false),
    (143, false),
    (116, false),
    (144, false),
    (129, false),
    (145, false),
    (43, false),
    (97, false),
    (52, true),
    (122, false),
    (212, false),
    (213, false),
    (347, false),
    (369, false),
    (627, false),
];

const TRAILER: &[(u32, bool)] = &[(93, false), (89, false), (10, true)];

/// Message rows: MsgType, name, category, first version.
const MESSAGES: &[(&str, &str, MessageCategory, Version)] = &[
    ("0", "Heartbeat", MessageCategory::Admin, Fix40),
    ("1", "TestRequest", MessageCategory::Admin, Fix40),
    ("2", "ResendRequest", MessageCategory::Admin, Fix40),
    ("3", "Reject", MessageCategory::Admin, Fix40),
    ("4", "SequenceReset", MessageCategory::Admin, Fix40),
    ("5", "Logout", MessageCategory::Admin, Fix40),
    ("A", "Logon", MessageCategory::Admin, Fix40),
    ("7", "Advertisement", MessageCategory::App, Fix40),
    ("8", "ExecutionReport", MessageCategory::App, Fix40),
    ("9", "OrderCancelReject", MessageCategory::App, Fix40),
    ("B", "News", MessageCategory::App, Fix40),
    ("D", "NewOrderSingle", MessageCategory::App, Fix40),
    ("F", "OrderCancelRequest", MessageCategory::App, Fix40),
    ("G", "OrderCancelReplaceRequest", MessageCategory::App, Fix40),
    ("H", "OrderStatusRequest", MessageCategory::App, Fix40),
    ("V", "MarketDataRequest", MessageCategory::App, Fix42),
    ("W", "MarketDataSnapshotFullRefresh", MessageCategory::App, Fix42),
    ("j", "BusinessMessageReject", MessageCategory::App, Fix42),
];

/// Required body fields of a message in a given version.
fn required_fields(msg_type: &str, version: Version) -> &'static [u32] {
    match (msg_type, version) {
        ("1", _) => &[112],
        ("2", _) => &[7, 16],
        ("3", _) => &[45],
        ("4", _) => &[36],
        ("A", Fixt11) => &[98, 108, 1137],
        ("A", _) => &[98, 108],
        ("7", _) => &[2, 5, 4, 53, 55],
        ("8", Fix40) => &[37, 17, 20, 39, 55, 54, 38, 32, 31, 14, 6],
        ("8", Fix41) => &[37, 17, 20, 150, 39, 55, 54, 38, 32, 31, 151, 14, 6],
        ("8", Fix42 | Fix43) => &[37, 17, 20, 150, 39, 55, 54, 151, 14, 6],
        ("8", Fix44) => &[37, 17, 150, 39, 55, 54, 151, 14, 6],
        ("8", _) => &[37, 17, 150, 39, 54, 151, 14],
        ("9", Fix40 | Fix41) => &[37, 11, 41, 39],
        ("9", _) => &[37, 11, 41, 39, 434],
        ("B", _) => &[148, 33],
        ("D", Fix40 | Fix41) => &[11, 21, 55, 54, 38, 40],
        ("D", Fix42 | Fix43) => &[11, 21, 55, 54, 60, 40],
        ("D", Fix44) => &[11, 55, 54, 60, 40],
        ("D", _) => &[11, 54, 60, 40],
        ("F", Fix40 | Fix41) => &[41, 11, 55, 54],
        ("F", Fix42 | Fix43 | Fix44) => &[41, 11, 55, 54, 60],
        ("F", _) => &[41, 11, 54, 60],
        ("G", Fix40 | Fix41) => &[41, 11, 21, 55, 54, 38, 40],
        ("G", Fix42 | Fix43) => &[41, 11, 21, 55, 54, 60, 40],
        ("G", Fix44) => &[41, 11, 55, 54, 60, 40],
        ("G", _) => &[41, 11, 54, 60, 40],
        ("H", Fix50 | Fix50Sp1 | Fix50Sp2) => &[11, 54],
        ("H", _) => &[11, 55, 54],
        ("j", _) => &[372, 380],
        ("V", _) => &[262, 263, 264],
        ("W", _) => &[268],
        _ => &[],
    }
}

fn carries_message(version: Version, category: MessageCategory, since: Version) -> bool {
    match version {
        Fixt11 => category == MessageCategory::Admin,
        Fix50 | Fix50Sp1 | Fix50Sp2 => category == MessageCategory::App && version >= since,
        _ => version >= since,
    }
}

/// Builds the embedded dictionary for `version`.
#[must_use]
pub fn build(version: Version) -> Dictionary {
    let mut dictionary = Dictionary::new(version.identifier());

    for spec in FIELDS.iter().filter(|spec| spec.included_in(version)) {
        dictionary.add_field(FieldDef::new(spec.tag, spec.name, spec.field_type(version)));
    }

    let field_ref = |dictionary: &Dictionary, tag: u32, required: bool| {
        dictionary
            .field_name(tag)
            .map(|name| FieldRef::new(tag, name, required))
    };

    for &(tag, required) in HEADER {
        if let Some(field) = field_ref(&dictionary, tag, required) {
            dictionary.add_header_field(field);
        }
    }
    for &(tag, required) in TRAILER {
        if let Some(field) = field_ref(&dictionary, tag, required) {
            dictionary.add_trailer_field(field);
        }
    }

    for &(msg_type, name, category, since) in MESSAGES {
        if !carries_message(version, category, since) {
            continue;
        }
        let mut message = MessageDef::new(msg_type, name, category);
        for &tag in required_fields(msg_type, version) {
            if let Some(field) = field_ref(&dictionary, tag, true) {
                message = message.with_field(field);
            }
        }
        dictionary.add_message(message);
    }

    dictionary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_and_modern_types() {
        let fix40 = build(Fix40);
        let fix42 = build(Fix42);
        assert_eq!(fix40.field_type(38), Some(T::Int));
        assert_eq!(fix42.field_type(38), Some(T::Qty));
        assert_eq!(fix40.field_type(44), Some(T::Float));
        assert_eq!(fix42.field_type(44), Some(T::Price));
        assert_eq!(fix40.field_type(52), Some(T::Time));
        assert_eq!(fix42.field_type(52), Some(T::UtcTimestamp));
        assert_eq!(fix40.field_type(43), Some(T::Char));
        assert_eq!(fix42.field_type(43), Some(T::Boolean));
    }

    #[test]
    fn test_fields_follow_version() {
        assert!(build(Fix40).get_field(150).is_none());
        assert!(build(Fix41).get_field(150).is_some());
        assert!(build(Fix44).get_field(1128).is_none());
        assert!(build(Fix50).get_field(1128).is_some());
        assert!(build(Fix42).is_header_field(369));
        assert!(!build(Fix41).is_header_field(369));
    }

    #[test]
    fn test_fixt_carries_session_only() {
        let fixt = build(Fixt11);
        assert!(fixt.is_header_field(1128));
        assert!(fixt.get_message("A").is_some());
        assert!(fixt.get_message("D").is_none());
        assert!(fixt.get_field(38).is_none());
        let logon = fixt.get_message("A").unwrap();
        assert!(logon.required_tags().any(|tag| tag == 1137));
    }

    #[test]
    fn test_fix50_carries_app_only() {
        let fix50 = build(Fix50Sp2);
        assert_eq!(fix50.msg_type_for_name("NewOrderSingle"), Some("D"));
        assert_eq!(fix50.msg_type_for_name("Logon"), None);
        assert!(fix50.is_header_field(49));
        assert!(fix50.is_trailer_field(10));
    }

    #[test]
    fn test_new_order_single_required_fields() {
        let required = |version| -> Vec<u32> {
            build(version)
                .get_message("D")
                .map(|m| m.required_tags().collect())
                .unwrap_or_default()
        };
        assert_eq!(required(Fix40), vec![11, 21, 55, 54, 38, 40]);
        assert_eq!(required(Fix42), vec![11, 21, 55, 54, 60, 40]);
        assert_eq!(required(Fix50), vec![11, 54, 60, 40]);
    }

    #[test]
    fn test_messages_follow_version() {
        assert!(build(Fix41).get_message("j").is_none());
        assert!(build(Fix42).get_message("j").is_some());
        assert_eq!(build(Fix40).msg_type_for_name("Heartbeat"), Some("0"));
    }
}
