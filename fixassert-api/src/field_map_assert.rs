/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Field checks shared by message, header and trailer assertions.

use crate::context::{AssertContext, Section};
use crate::failure::Failure;
use fixassert_core::{FieldCodec, FieldError, FieldMap, FieldValue, FixField, Message};

/// Field-level checks over one section of a message.
///
/// Implementors provide the message, the section and the chain context. The
/// provided methods consume and return `self` so checks can be chained.
pub trait FieldMapAssert: Sized {
    /// Word used for the section in missing-field failures.
    const CONTAINER: &'static str;

    /// Section the checks look at.
    const SECTION: Section;

    /// Returns the message under test, if any.
    fn actual(&self) -> Option<&Message>;

    /// Returns the chain context.
    fn context(&self) -> &AssertContext;

    /// Returns the fields of the checked section.
    fn field_map(&self) -> Option<&FieldMap> {
        self.actual().map(|message| Self::SECTION.of(message))
    }

    /// Renders what failures show: the whole message for the body, the
    /// section itself otherwise.
    fn rendered(&self) -> String {
        let context = self.context();
        match (Self::SECTION, self.actual()) {
            (Section::Body, actual) => context.render_message(actual),
            (section, Some(message)) => context.render(section.of(message)),
            (_, None) => "null".to_string(),
        }
    }

    /// Fails with [`Failure::ActualIsNull`] when there is no message.
    #[track_caller]
    fn check_not_null(&self) -> bool {
        if self.actual().is_some() {
            return true;
        }
        self.context().info().fail(Failure::ActualIsNull);
        false
    }

    /// Fails when `tag` is absent from the section.
    #[track_caller]
    fn check_field(&self, tag: u32) -> bool {
        let Some(map) = self.field_map() else {
            self.context().info().fail(Failure::ActualIsNull);
            return false;
        };
        if map.is_set_field(tag) {
            return true;
        }
        self.context().info().fail(Failure::ShouldHaveField {
            container: Self::CONTAINER,
            message: self.rendered(),
            tag,
        });
        false
    }

    /// Verifies that the section contains `tag`.
    #[track_caller]
    #[must_use]
    fn has_field(self, tag: u32) -> Self {
        self.check_field(tag);
        self
    }

    /// Verifies that the section contains every tag in `tags`.
    #[track_caller]
    #[must_use]
    fn has_fields(self, tags: &[u32]) -> Self {
        for &tag in tags {
            self.check_field(tag);
        }
        self
    }

    /// Verifies that `tag` holds `expected`.
    ///
    /// The actual value is read with the type the dictionary declares for
    /// the tag. A tag the dictionary does not know has no value and never
    /// matches.
    ///
    /// # Panics
    /// Panics if `tag` is 0.
    #[track_caller]
    #[must_use]
    fn has_field_value(self, tag: u32, expected: impl Into<FieldValue>) -> Self {
        assert!(tag > 0, "'expectedFieldTag' must be greater than 0.");
        if !self.check_field(tag) {
            return self;
        }
        let Some(message) = self.actual() else {
            return self;
        };
        let expected = expected.into();
        let context = self.context();
        match context.field_value(message, Self::SECTION, tag) {
            Ok(actual) => {
                let lenient = context.info().config().lenient_numeric;
                if !actual.as_ref().is_some_and(|a| expected.matches(a, lenient)) {
                    context.info().fail(Failure::TagShouldHaveValue {
                        tag,
                        message: self.rendered(),
                        expected: expected.representation(),
                        actual: actual.map_or_else(|| "null".to_string(), |a| a.representation()),
                    });
                }
            }
            Err(failure) => context.info().fail(failure),
        }
        self
    }

    /// Verifies a typed field.
    ///
    /// The value is decoded with the field's own type, independent of any
    /// dictionary.
    #[track_caller]
    #[must_use]
    fn has<F: FixField>(self, expected: impl Into<F::Value>) -> Self {
        let Some(map) = self.field_map() else {
            self.context().info().fail(Failure::ActualIsNull);
            return self;
        };
        let expected: F::Value = expected.into();
        let failure = match map.get::<F>() {
            Ok(actual) if actual == expected => None,
            Ok(actual) => Some(Failure::FieldShouldHaveValue {
                name: F::NAME.to_string(),
                tag: F::TAG,
                message: self.rendered(),
                expected: expected.to_field_value().representation(),
                actual: actual.to_field_value().representation(),
            }),
            Err(FieldError::NotFound { tag }) => Some(Failure::ShouldHaveField {
                container: Self::CONTAINER,
                message: self.rendered(),
                tag,
            }),
            Err(err) => Some(Failure::from(err)),
        };
        if let Some(failure) = failure {
            self.context().info().fail(failure);
        }
        self
    }
}
