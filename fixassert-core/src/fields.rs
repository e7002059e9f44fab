/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Typed field markers.
//!
//! Each marker implements [`FixField`] with a fixed tag, FIX name and value
//! type. Assertions that name a field (`has_sender_comp_id`, `has_price`, ...)
//! go through these markers rather than through the data dictionary.

use crate::field::FixField;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;

macro_rules! fix_fields {
    ($($(#[$doc:meta])* $ident:ident($tag:literal, $name:literal): $value:ty;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $ident;

            impl FixField for $ident {
                const TAG: u32 = $tag;
                const NAME: &'static str = $name;
                type Value = $value;
            }
        )*
    };
}

fix_fields! {
    /// Account (1).
    Account(1, "Account"): String;
    /// BeginString (8).
    BeginString(8, "BeginString"): String;
    /// BodyLength (9).
    BodyLength(9, "BodyLength"): i64;
    /// CheckSum (10).
    CheckSum(10, "CheckSum"): String;
    /// ClOrdID (11).
    ClOrdId(11, "ClOrdID"): String;
    /// HandlInst (21).
    HandlInst(21, "HandlInst"): char;
    /// MsgSeqNum (34).
    MsgSeqNum(34, "MsgSeqNum"): i64;
    /// MsgType (35).
    MsgType(35, "MsgType"): String;
    /// OrderQty (38).
    OrderQty(38, "OrderQty"): Decimal;
    /// OrdType (40).
    OrdType(40, "OrdType"): char;
    /// PossDupFlag (43).
    PossDupFlag(43, "PossDupFlag"): bool;
    /// Price (44).
    Price(44, "Price"): Decimal;
    /// SenderCompID (49).
    SenderCompId(49, "SenderCompID"): String;
    /// SenderSubID (50).
    SenderSubId(50, "SenderSubID"): String;
    /// SendingTime (52).
    SendingTime(52, "SendingTime"): NaiveDateTime;
    /// Side (54).
    Side(54, "Side"): char;
    /// Symbol (55).
    Symbol(55, "Symbol"): String;
    /// TargetCompID (56).
    TargetCompId(56, "TargetCompID"): String;
    /// TargetSubID (57).
    TargetSubId(57, "TargetSubID"): String;
    /// TransactTime (60).
    TransactTime(60, "TransactTime"): NaiveDateTime;
    /// Signature (89).
    Signature(89, "Signature"): String;
    /// SignatureLength (93).
    SignatureLength(93, "SignatureLength"): i64;
    /// EncryptMethod (98).
    EncryptMethod(98, "EncryptMethod"): i64;
    /// HeartBtInt (108).
    HeartBtInt(108, "HeartBtInt"): i64;
    /// OnBehalfOfCompID (115).
    OnBehalfOfCompId(115, "OnBehalfOfCompID"): String;
    /// OnBehalfOfSubID (116).
    OnBehalfOfSubId(116, "OnBehalfOfSubID"): String;
    /// DeliverToCompID (128).
    DeliverToCompId(128, "DeliverToCompID"): String;
    /// DeliverToSubID (129).
    DeliverToSubId(129, "DeliverToSubID"): String;
    /// NoHops (627).
    NoHops(627, "NoHops"): i64;
    /// ApplVerID (1128).
    ApplVerId(1128, "ApplVerID"): String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_markers() {
        assert_eq!(SenderCompId::TAG, 49);
        assert_eq!(SenderCompId::NAME, "SenderCompID");
        assert_eq!(ApplVerId::NAME, "ApplVerID");
        assert_eq!(Price::decode("5.25").unwrap(), Decimal::new(525, 2));
        assert_eq!(Side::decode("1").unwrap(), '1');
        assert!(PossDupFlag::decode("Y").unwrap());
    }

    #[test]
    fn test_field_marker_encode() {
        assert_eq!(OrderQty::encode(&Decimal::from(1000)), "1000");
        assert_eq!(HandlInst::encode(&'1'), "1");
        assert!(TransactTime::decode("2010022519:39:52").is_err());
    }
}
