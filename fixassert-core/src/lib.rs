/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixAssert Core
//!
//! Core types, traits, and error definitions for the FixAssert FIX assertion
//! library.
//!
//! This crate provides the message model every other FixAssert crate builds on:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Field types**: `FieldTag`, `Field`, `FieldValue`, `FieldCodec` and the `FixField` trait
//! - **Message types**: `FieldMap`, `Message` and `MsgType`
//! - **Typed fields**: Markers such as `fields::SenderCompId` with fixed value types
//! - **Enumerations**: `Side`, `OrdType`, `HandlInst`
//!
//! ## Owned Design
//!
//! Messages are owned and split into header, body and trailer, the shape
//! assertions navigate. BodyLength and CheckSum are derived on render rather
//! than stored.

pub mod checksum;
pub mod error;
pub mod field;
pub mod fields;
pub mod message;
pub mod types;

pub use error::{DecodeError, EncodeError, FieldError};
pub use field::{Field, FieldCodec, FieldTag, FieldValue, FixField};
pub use message::{FieldMap, Message, MsgType, SOH};
pub use types::{HandlInst, OrdType, Side};
