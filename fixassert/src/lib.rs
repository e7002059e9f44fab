/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixAssert
//!
//! Fluent assertions for FIX protocol messages.
//!
//! FixAssert checks decoded FIX messages in tests. Values are read with the
//! type their data dictionary declares, and FIX 5.0+ messages are resolved
//! through ApplVerID, so one assertion style covers FIX 4.0 through FIX 5.0 SP2.
//!
//! ## Features
//!
//! - **Fluent chains**: `assert_that(&msg).is_version_44().has_field_value(38, 100)`
//! - **Version aware**: Header and trailer use FIXT.1.1, the body its application version
//! - **Readable failures**: Messages rendered with a configurable delimiter
//! - **Soft assertions**: Collect every failure and report them together
//! - **Custom dictionaries**: QuickFIX XML dictionaries, registered per chain or globally
//!
//! ## Quick Start
//!
//! ```rust
//! use fixassert::prelude::*;
//!
//! let raw = "8=FIX.4.0\x019=61\x0135=A\x0134=1\x0149=BANZAI\x0152=20200408-06:49:07\x0156=EXEC\x0198=0\x01108=30\x0110=015\x01";
//! let message = parse(raw).unwrap();
//!
//! let _ = assert_that(&message)
//!     .is_version_40()
//!     .is_logon()
//!     .has_field_value(108, 30)
//!     .header()
//!     .has_sender_comp_id("BANZAI");
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Message model, field values and error definitions
//! - [`dictionary`]: Versions, data dictionaries and the XML loader
//! - [`tagvalue`]: tag=value decoding
//! - [`api`]: The assertion DSL

pub mod core {
    //! Message model, field values and error definitions.
    pub use fixassert_core::*;
}

pub mod dictionary {
    //! Versions, data dictionaries and the XML loader.
    pub use fixassert_dictionary::*;
}

pub mod tagvalue {
    //! tag=value decoding.
    pub use fixassert_tagvalue::*;
}

pub mod api {
    //! The assertion DSL.
    pub use fixassert_api::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fixassert_core::{
        DecodeError, EncodeError, FieldError, FieldMap, FieldValue, FixField, HandlInst,
        Message, MsgType, OrdType, Side, fields,
    };

    // Dictionary
    pub use fixassert_dictionary::{Dictionary, DictionaryProvider, FieldDef, FieldType, Version};

    // Tag-value decoding
    pub use fixassert_tagvalue::{Decoder, parse};

    // Assertions
    pub use fixassert_api::{
        AssertConfig, FieldMapAssert, MessageAssert, NewOrderSingleAssertFactory,
        NewOrderSingleBuilder, SoftAssertions, assert_new_order_single, assert_that,
    };
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let message = NewOrderSingleBuilder::with_defaults(Version::Fix44)
            .build()
            .unwrap();
        let _ = assert_that(&message)
            .is_new_order_single()
            .has_field_value(54, Side::Buy);
    }

    #[test]
    fn test_version() {
        let version = Version::Fix50Sp2;
        assert_eq!(version.begin_string(), "FIXT.1.1");
        assert_eq!(version.identifier(), "FIX.5.0SP2");
    }
}
