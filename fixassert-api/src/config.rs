/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Assertion configuration.
//!
//! This module provides the options that shape failure messages and value
//! comparison.

use fixassert_core::SOH;
use std::sync::OnceLock;
use tracing::warn;

/// Environment variable selecting the delimiter used to render messages.
pub const DELIMITER_ENV: &str = "FIXASSERT_DELIMITER";

/// Environment variable toggling lenient numeric comparison.
pub const LENIENT_NUMERIC_ENV: &str = "FIXASSERT_LENIENT_NUMERIC";

/// Configuration for an assertion chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertConfig {
    /// Character written between fields when a message appears in a failure.
    pub delimiter: char,
    /// Whether integer and decimal values compare by numeric value.
    pub lenient_numeric: bool,
}

impl Default for AssertConfig {
    fn default() -> Self {
        Self {
            delimiter: SOH,
            lenient_numeric: true,
        }
    }
}

impl AssertConfig {
    /// Creates the default configuration: SOH delimiter, lenient numerics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the rendering delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether integers and decimals compare numerically.
    #[must_use]
    pub const fn with_lenient_numeric(mut self, lenient: bool) -> Self {
        self.lenient_numeric = lenient;
        self
    }

    /// Reads the configuration from `FIXASSERT_DELIMITER` and
    /// `FIXASSERT_LENIENT_NUMERIC`, keeping defaults for unset or invalid values.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Returns the process-wide configuration, read from the environment once.
    #[must_use]
    pub fn process_default() -> &'static AssertConfig {
        static CONFIG: OnceLock<AssertConfig> = OnceLock::new();
        CONFIG.get_or_init(Self::from_env)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup(DELIMITER_ENV) {
            match parse_delimiter(&value) {
                Some(delimiter) => config.delimiter = delimiter,
                None => warn!(value = %value, "ignoring invalid {DELIMITER_ENV}"),
            }
        }

        if let Some(value) = lookup(LENIENT_NUMERIC_ENV) {
            match parse_flag(&value) {
                Some(lenient) => config.lenient_numeric = lenient,
                None => warn!(value = %value, "ignoring invalid {LENIENT_NUMERIC_ENV}"),
            }
        }

        config
    }
}

fn parse_delimiter(value: &str) -> Option<char> {
    if value.eq_ignore_ascii_case("SOH") {
        return Some(SOH);
    }
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}
