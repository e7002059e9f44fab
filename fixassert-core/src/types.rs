/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Enumerated order field values.
//!
//! - [`Side`]: Order side (tag 54)
//! - [`OrdType`]: Order type (tag 40)
//! - [`HandlInst`]: Handling instructions (tag 21)
//!
//! Each converts to the `char` carried on the wire, so it can be passed
//! anywhere a `char` expectation is accepted.

use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! char_enum_impls {
    ($ty:ident) => {
        impl $ty {
            /// Creates a value from its wire character.
            ///
            /// # Returns
            /// `Some` if the character maps to a known variant, `None` otherwise.
            #[must_use]
            pub fn from_char(c: char) -> Option<Self> {
                u8::try_from(c).ok().and_then(Self::from_u8)
            }

            /// Returns the wire character.
            #[must_use]
            pub const fn as_char(self) -> char {
                self as u8 as char
            }
        }

        impl From<$ty> for char {
            fn from(value: $ty) -> Self {
                value.as_char()
            }
        }

        impl From<$ty> for crate::field::FieldValue {
            fn from(value: $ty) -> Self {
                Self::Char(value.as_char())
            }
        }

        impl TryFrom<char> for $ty {
            type Error = char;

            fn try_from(value: char) -> Result<Self, Self::Error> {
                Self::from_char(value).ok_or(value)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_char())
            }
        }
    };
}

/// Order side enumeration (tag 54).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order.
    Buy = b'1',
    /// Sell order.
    Sell = b'2',
    /// Buy minus.
    BuyMinus = b'3',
    /// Sell plus.
    SellPlus = b'4',
    /// Sell short.
    SellShort = b'5',
    /// Sell short exempt.
    SellShortExempt = b'6',
    /// Undisclosed.
    Undisclosed = b'7',
    /// Cross (both sides).
    Cross = b'8',
    /// Cross short.
    CrossShort = b'9',
}

impl Side {
    /// Returns true if this is a buy-side order.
    #[must_use]
    pub const fn is_buy(self) -> bool {
        matches!(self, Self::Buy | Self::BuyMinus)
    }

    /// Returns true if this is a sell-side order.
    #[must_use]
    pub const fn is_sell(self) -> bool {
        matches!(
            self,
            Self::Sell | Self::SellPlus | Self::SellShort | Self::SellShortExempt
        )
    }
}

char_enum_impls!(Side);

/// Order type enumeration (tag 40).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrdType {
    /// Market order.
    Market = b'1',
    /// Limit order.
    Limit = b'2',
    /// Stop order.
    Stop = b'3',
    /// Stop limit order.
    StopLimit = b'4',
    /// Market on close.
    MarketOnClose = b'5',
    /// With or without.
    WithOrWithout = b'6',
    /// Limit or better.
    LimitOrBetter = b'7',
    /// Limit with or without.
    LimitWithOrWithout = b'8',
    /// On basis.
    OnBasis = b'9',
    /// Previously quoted.
    PreviouslyQuoted = b'D',
    /// Previously indicated.
    PreviouslyIndicated = b'E',
    /// Pegged.
    Pegged = b'P',
}

char_enum_impls!(OrdType);

/// Handling instructions (tag 21).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
#[repr(u8)]
#[serde(rename_all = "UPPERCASE")]
pub enum HandlInst {
    /// Automated execution, private, no broker intervention.
    AutomatedExecutionOrderPrivate = b'1',
    /// Automated execution, public, broker intervention OK.
    AutomatedExecutionOrderPublic = b'2',
    /// Manual order, best execution.
    ManualOrder = b'3',
}

char_enum_impls!(HandlInst);
