/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # FixAssert API
//!
//! Fluent assertions for FIX messages.
//!
//! This crate provides:
//! - [`assert_that`]: Entry point returning a [`MessageAssert`]
//! - Header, trailer, version and NewOrderSingle assertions
//! - [`FieldMapAssert`]: Field checks shared by every section
//! - [`SoftAssertions`]: Collect failures and report them together
//! - [`AssertConfig`]: Rendering delimiter and numeric comparison
//!
//! Actual values are read with the type their data dictionary declares, so
//! the same check works across FIX 4.0 through FIX 5.0 SP2.

pub mod assertions;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod failure;
pub mod field_map_assert;
pub mod header_assert;
pub mod message_assert;
pub mod new_order_single;
pub mod soft;
pub mod support;
pub mod trailer_assert;
pub mod validation;
pub mod version_assert;

#[cfg(test)]
mod testing;

pub use assertions::{ActualMessage, assert_new_order_single, assert_that};
pub use config::AssertConfig;
pub use context::{AssertContext, Section};
pub use failure::{AssertionInfo, Failure};
pub use field_map_assert::FieldMapAssert;
pub use header_assert::MessageHeaderAssert;
pub use message_assert::MessageAssert;
pub use new_order_single::{NewOrderSingleAssert, NewOrderSingleAssertFactory, SUPPORTED_VERSIONS};
pub use soft::SoftAssertions;
pub use support::NewOrderSingleBuilder;
pub use trailer_assert::MessageTrailerAssert;
pub use version_assert::VersionAssert;
