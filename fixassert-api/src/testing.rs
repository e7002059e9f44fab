/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Shared test helpers.

use crate::config::AssertConfig;
use fixassert_core::Message;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Logon, FIX.4.0, 9=61, 10=015.
pub const LOGON_FIX40: &str = "8=FIX.4.0\x019=61\x0135=A\x0134=1\x0149=BANZAI\x0152=20200408-06:49:07\x0156=EXEC\x0198=0\x01108=30\x0110=015\x01";

pub fn logon() -> Message {
    fixassert_tagvalue::parse(LOGON_FIX40).unwrap()
}

/// Renders failures with `|` so expected texts stay readable.
pub fn piped() -> AssertConfig {
    AssertConfig::new().with_delimiter('|')
}

pub fn pipe(raw: &str) -> String {
    raw.replace('\x01', "|")
}

/// Runs `f` and returns the message it panicked with.
pub fn failure_of<R>(f: impl FnOnce() -> R) -> String {
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => panic!("expected an assertion failure"),
        Err(payload) => payload
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| payload.downcast_ref::<&str>().map(|s| (*s).to_string()))
            .unwrap_or_default(),
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_test_writer()
        .try_init();
}
