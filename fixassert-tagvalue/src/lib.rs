/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixAssert Tag-Value
//!
//! FIX tag=value decoding for the FixAssert assertion library.
//!
//! Parses SOH-delimited messages into owned [`Message`] values with the
//! header, body and trailer separated, so raw captures can be asserted on
//! like built messages.
//!
//! ## Features
//!
//! - **Validation**: BodyLength and CheckSum are checked by default
//! - **Dictionary aware**: Header and trailer placement can follow a data dictionary
//! - **SIMD-accelerated**: Uses `memchr` for fast delimiter search

pub mod decoder;

pub use decoder::{Decoder, parse};
pub use fixassert_core::message::Message;
