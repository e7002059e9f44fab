/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for dictionary loading.

use thiserror::Error;

/// Errors raised while loading a data dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The XML document could not be deserialized.
    #[error("invalid dictionary XML: {0}")]
    Xml(#[from] quick_xml::de::DeError),

    /// The dictionary file could not be read.
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),

    /// A message, component, header or trailer names an undefined field.
    #[error("unknown field '{name}' referenced in {context}")]
    UnknownField {
        /// The field name.
        name: String,
        /// Where the reference was found.
        context: String,
    },

    /// A component reference names an undefined component.
    #[error("unknown component '{name}' referenced in {context}")]
    UnknownComponent {
        /// The component name.
        name: String,
        /// Where the reference was found.
        context: String,
    },

    /// A component contains itself, directly or through other components.
    #[error("component '{0}' is recursive")]
    RecursiveComponent(String),

    /// The root element carries no usable version attributes.
    #[error("invalid dictionary version: {0}")]
    InvalidVersion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DictionaryError::UnknownField {
            name: "Foo".to_string(),
            context: "message NewOrderSingle".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown field 'Foo' referenced in message NewOrderSingle"
        );
        assert_eq!(
            DictionaryError::InvalidVersion("FIX..".to_string()).to_string(),
            "invalid dictionary version: FIX.."
        );
    }
}
