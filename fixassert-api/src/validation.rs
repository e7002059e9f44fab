/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Dictionary validation of a whole message.
//!
//! Stops at the first violation and returns a one-line reason in the
//! QuickFIX register, e.g. `Required tag missing, field=49`.

use crate::context::{AssertContext, Section};
use crate::dispatch::{read_value, value_kind};
use fixassert_core::{FieldMap, Message};
use fixassert_dictionary::{Dictionary, FieldRef};
use tracing::trace;

/// Header and trailer tags recomputed on rendering.
const COMPUTED_TAGS: [u32; 2] = [9, 10];

/// Validates `message` against the dictionaries resolved by `context`.
///
/// # Errors
/// Returns the reason for the first violation found.
pub fn validate(message: &Message, context: &AssertContext) -> Result<(), String> {
    if message.begin_string().is_none() {
        return Err(required_missing(8));
    }
    let transport = context
        .dictionary(message, Section::Header)
        .map_err(|failure| failure.to_string())?;
    let application = context
        .dictionary(message, Section::Body)
        .map_err(|failure| failure.to_string())?;
    let begin_string = context.begin_string().unwrap_or_default();

    check_required(message.header(), transport.header())?;

    let msg_type = message.msg_type_str().ok_or_else(|| required_missing(35))?;
    let definition = application
        .get_message(msg_type)
        .or_else(|| transport.get_message(msg_type))
        .ok_or_else(|| format!("Invalid MsgType, field=35, value={msg_type}"))?;
    check_required(message.body(), &definition.fields)?;
    check_required(message.trailer(), transport.trailer())?;

    check_values(message.header(), &transport, begin_string)?;
    check_values(message.body(), &application, begin_string)?;
    check_values(message.trailer(), &transport, begin_string)?;

    trace!(msg_type, begin_string, "message is valid");
    Ok(())
}

fn required_missing(tag: u32) -> String {
    format!("Required tag missing, field={tag}")
}

fn check_required(map: &FieldMap, fields: &[FieldRef]) -> Result<(), String> {
    match fields
        .iter()
        .filter(|f| f.required && !COMPUTED_TAGS.contains(&f.tag))
        .find(|f| !map.is_set_field(f.tag))
    {
        Some(missing) => Err(required_missing(missing.tag)),
        None => Ok(()),
    }
}

fn check_values(map: &FieldMap, dictionary: &Dictionary, begin_string: &str) -> Result<(), String> {
    for field in map.iter() {
        let Some(definition) = dictionary.get_field(field.tag()) else {
            continue;
        };
        let kind = value_kind(definition.field_type, begin_string);
        if read_value(map, field.tag(), kind).is_err() {
            return Err(format!(
                "Incorrect data format for value, field={}",
                field.tag()
            ));
        }
        if !definition.allows(field.value()) {
            return Err(format!(
                "Value is incorrect (out of range) for this tag, field={}",
                field.tag()
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::AssertionInfo;
    use crate::support::NewOrderSingleBuilder;
    use fixassert_dictionary::Version;

    fn check(message: &Message) -> Result<(), String> {
        let context = AssertContext::new(Some(message), AssertionInfo::new());
        validate(message, &context)
    }

    #[test]
    fn test_built_orders_are_valid_for_every_version() {
        for version in Version::ALL.into_iter().filter(|v| *v != Version::Fixt11) {
            let message = NewOrderSingleBuilder::with_defaults(version).build().unwrap();
            assert_eq!(check(&message), Ok(()), "{version}");
        }
    }

    #[test]
    fn test_missing_header_field() {
        let mut message = NewOrderSingleBuilder::with_defaults(Version::Fix44)
            .build()
            .unwrap();
        message.header_mut().remove_field(49);
        assert_eq!(check(&message), Err("Required tag missing, field=49".to_string()));
    }

    #[test]
    fn test_missing_body_field() {
        let mut message = NewOrderSingleBuilder::with_defaults(Version::Fix42)
            .build()
            .unwrap();
        message.body_mut().remove_field(60);
        assert_eq!(check(&message), Err("Required tag missing, field=60".to_string()));
    }

    #[test]
    fn test_unknown_msg_type() {
        let mut message = NewOrderSingleBuilder::with_defaults(Version::Fix44)
            .build()
            .unwrap();
        message.header_mut().set_field(35, "ZZ");
        assert_eq!(
            check(&message),
            Err("Invalid MsgType, field=35, value=ZZ".to_string())
        );
    }

    #[test]
    fn test_incorrect_data_format() {
        let mut message = NewOrderSingleBuilder::with_defaults(Version::Fix44)
            .build()
            .unwrap();
        message.body_mut().set_field(38, "a lot");
        assert_eq!(
            check(&message),
            Err("Incorrect data format for value, field=38".to_string())
        );
    }

    #[test]
    fn test_missing_begin_string() {
        assert_eq!(check(&Message::new()), Err("Required tag missing, field=8".to_string()));
    }
}
