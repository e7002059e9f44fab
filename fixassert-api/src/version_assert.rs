/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Assertions on the FIX version of a message.
//!
//! FIX 5.0 and later travel as BeginString FIXT.1.1. The `fix50*` checks
//! compare the identifier mapped from ApplVerID; every other check compares
//! the BeginString itself.

use crate::context::{FIXT11, resolve_begin_string};
use crate::failure::Failure;
use crate::field_map_assert::FieldMapAssert;
use crate::message_assert::MessageAssert;
use fixassert_dictionary::Version;

/// Fluent assertions on a version string.
#[derive(Debug, Clone)]
pub struct VersionAssert<'a> {
    parent: MessageAssert<'a>,
    actual: Option<String>,
}

impl<'a> VersionAssert<'a> {
    pub(crate) fn new(parent: MessageAssert<'a>, actual: Option<String>) -> Self {
        Self { parent, actual }
    }

    /// Returns to the message assertions.
    #[must_use]
    pub fn and(self) -> MessageAssert<'a> {
        self.parent
    }

    /// Verifies the version is exactly `expected`.
    #[track_caller]
    #[must_use]
    pub fn fix(self, expected: &str) -> Self {
        self.check(expected, self.actual.as_deref());
        self
    }

    /// Verifies FIXT.1.1.
    #[track_caller]
    #[must_use]
    pub fn fixt11(self) -> Self {
        self.fix(FIXT11)
    }

    /// Verifies FIX.4.0.
    #[track_caller]
    #[must_use]
    pub fn fix40(self) -> Self {
        self.fix(Version::Fix40.begin_string())
    }

    /// Verifies FIX.4.1.
    #[track_caller]
    #[must_use]
    pub fn fix41(self) -> Self {
        self.fix(Version::Fix41.begin_string())
    }

    /// Verifies FIX.4.2.
    #[track_caller]
    #[must_use]
    pub fn fix42(self) -> Self {
        self.fix(Version::Fix42.begin_string())
    }

    /// Verifies FIX.4.3.
    #[track_caller]
    #[must_use]
    pub fn fix43(self) -> Self {
        self.fix(Version::Fix43.begin_string())
    }

    /// Verifies FIX.4.4.
    #[track_caller]
    #[must_use]
    pub fn fix44(self) -> Self {
        self.fix(Version::Fix44.begin_string())
    }

    /// Verifies FIX.5.0 through ApplVerID.
    #[track_caller]
    #[must_use]
    pub fn fix50(self) -> Self {
        self.application(Version::Fix50)
    }

    /// Verifies FIX.5.0SP1 through ApplVerID.
    #[track_caller]
    #[must_use]
    pub fn fix50_sp1(self) -> Self {
        self.application(Version::Fix50Sp1)
    }

    /// Verifies FIX.5.0SP2 through ApplVerID.
    #[track_caller]
    #[must_use]
    pub fn fix50_sp2(self) -> Self {
        self.application(Version::Fix50Sp2)
    }

    #[track_caller]
    fn application(self, version: Version) -> Self {
        let resolved = match self.actual.as_deref() {
            Some(FIXT11) => self.parent.actual().and_then(resolve_begin_string),
            other => other.map(str::to_string),
        };
        self.check(version.identifier(), resolved.as_deref());
        self
    }

    #[track_caller]
    fn check(&self, expected: &str, actual: Option<&str>) {
        let info = self.parent.context().info();
        match actual {
            None => info.fail(Failure::missing_begin_string()),
            Some(actual) if actual != expected => info.fail(Failure::ShouldHaveFixVersion {
                message: self.parent.rendered(),
                expected: expected.to_string(),
                actual: actual.to_string(),
            }),
            Some(_) => {}
        }
    }
}
