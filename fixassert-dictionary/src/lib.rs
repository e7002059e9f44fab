/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixAssert Dictionary
//!
//! FIX data dictionaries for the FixAssert assertion library.
//!
//! This crate provides:
//! - **Schema definitions**: Versions, field types, field and message definitions
//! - **Embedded dictionaries**: FIX 4.0 through 5.0 SP2 plus FIXT 1.1
//! - **Resolution**: [`DictionaryProvider`] maps BeginString and ApplVerID to dictionaries
//! - **Dictionary parsing**: QuickFIX XML format loader

pub mod builtin;
pub mod error;
pub mod provider;
pub mod schema;
pub mod xml;

pub use error::DictionaryError;
pub use provider::{DictionaryProvider, builtin_dictionary};
pub use schema::{
    Dictionary, FieldDef, FieldRef, FieldType, MessageCategory, MessageDef, Version,
    begin_string_for_appl_ver_id,
};
