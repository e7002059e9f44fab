/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! QuickFIX XML data dictionary loader.
//!
//! Reads the `<fix type major minor servicepack>` format used by QuickFIX
//! dictionaries such as `FIX44.xml` or `FIXT11.xml`. Components are
//! flattened into the field lists of the messages, header and trailer that
//! reference them. A repeating group contributes its NumInGroup field.

use crate::error::DictionaryError;
use crate::schema::{Dictionary, FieldDef, FieldRef, FieldType, MessageCategory, MessageDef};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct XmlDoc {
    #[serde(rename = "@type")]
    kind: String,
    #[serde(rename = "@major")]
    major: String,
    #[serde(rename = "@minor")]
    minor: String,
    #[serde(rename = "@servicepack", default)]
    servicepack: Option<String>,
    #[serde(default)]
    header: XmlMembers,
    #[serde(default)]
    trailer: XmlMembers,
    #[serde(default)]
    messages: XmlMessages,
    #[serde(default)]
    components: XmlComponents,
    #[serde(default)]
    fields: XmlFields,
}

#[derive(Debug, Default, Deserialize)]
struct XmlMembers {
    #[serde(rename = "$value", default)]
    members: Vec<XmlMember>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum XmlMember {
    Field(XmlReference),
    Group(XmlGroup),
    Component(XmlReference),
}

#[derive(Debug, Deserialize)]
struct XmlReference {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@required", default)]
    required: String,
}

#[derive(Debug, Deserialize)]
struct XmlGroup {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@required", default)]
    required: String,
    #[serde(rename = "$value", default)]
    #[allow(dead_code)]
    members: Vec<XmlMember>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlMessages {
    #[serde(rename = "message", default)]
    messages: Vec<XmlMessage>,
}

#[derive(Debug, Deserialize)]
struct XmlMessage {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@msgtype")]
    msg_type: String,
    #[serde(rename = "@msgcat", default)]
    msg_cat: String,
    #[serde(rename = "$value", default)]
    members: Vec<XmlMember>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlComponents {
    #[serde(rename = "component", default)]
    components: Vec<XmlComponent>,
}

#[derive(Debug, Deserialize)]
struct XmlComponent {
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "$value", default)]
    members: Vec<XmlMember>,
}

#[derive(Debug, Default, Deserialize)]
struct XmlFields {
    #[serde(rename = "field", default)]
    fields: Vec<XmlField>,
}

#[derive(Debug, Deserialize)]
struct XmlField {
    #[serde(rename = "@number")]
    number: u32,
    #[serde(rename = "@name")]
    name: String,
    #[serde(rename = "@type")]
    field_type: String,
    #[serde(rename = "value", default)]
    values: Vec<XmlValue>,
}

#[derive(Debug, Deserialize)]
struct XmlValue {
    #[serde(rename = "@enum")]
    value: String,
    #[serde(rename = "@description", default)]
    description: String,
}

fn is_required(flag: &str) -> bool {
    flag.eq_ignore_ascii_case("Y")
}

impl XmlDoc {
    fn identifier(&self) -> Result<String, DictionaryError> {
        let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if self.kind.is_empty() || !numeric(&self.major) || !numeric(&self.minor) {
            return Err(DictionaryError::InvalidVersion(format!(
                "{}.{}.{}",
                self.kind, self.major, self.minor
            )));
        }

        let mut identifier = format!("{}.{}.{}", self.kind, self.major, self.minor);
        match self.servicepack.as_deref() {
            None | Some("") | Some("0") => {}
            Some(sp) => identifier.push_str(&format!("SP{sp}")),
        }
        Ok(identifier)
    }
}

/// Flattens member lists into field references.
struct Flattener<'a> {
    dictionary: &'a Dictionary,
    components: HashMap<&'a str, &'a [XmlMember]>,
}

impl Flattener<'_> {
    fn flatten(
        &self,
        members: &[XmlMember],
        required: bool,
        context: &str,
        visiting: &mut Vec<String>,
        out: &mut Vec<FieldRef>,
    ) -> Result<(), DictionaryError> {
        for member in members {
            match member {
                XmlMember::Field(reference) => {
                    out.push(self.field_ref(
                        &reference.name,
                        required && is_required(&reference.required),
                        context,
                    )?);
                }
                XmlMember::Group(group) => {
                    out.push(self.field_ref(
                        &group.name,
                        required && is_required(&group.required),
                        context,
                    )?);
                }
                XmlMember::Component(reference) => {
                    let nested = self.components.get(reference.name.as_str()).ok_or_else(|| {
                        DictionaryError::UnknownComponent {
                            name: reference.name.clone(),
                            context: context.to_string(),
                        }
                    })?;
                    if visiting.contains(&reference.name) {
                        return Err(DictionaryError::RecursiveComponent(reference.name.clone()));
                    }
                    visiting.push(reference.name.clone());
                    self.flatten(
                        nested,
                        required && is_required(&reference.required),
                        context,
                        visiting,
                        out,
                    )?;
                    visiting.pop();
                }
            }
        }
        Ok(())
    }

    fn field_ref(
        &self,
        name: &str,
        required: bool,
        context: &str,
    ) -> Result<FieldRef, DictionaryError> {
        self.dictionary
            .get_field_by_name(name)
            .map(|def| FieldRef::new(def.tag, name, required))
            .ok_or_else(|| DictionaryError::UnknownField {
                name: name.to_string(),
                context: context.to_string(),
            })
    }

    fn collect(&self, members: &[XmlMember], context: &str) -> Result<Vec<FieldRef>, DictionaryError> {
        let mut out = Vec::new();
        self.flatten(members, true, context, &mut Vec::new(), &mut out)?;
        Ok(out)
    }
}

impl Dictionary {
    /// Parses a QuickFIX XML data dictionary.
    ///
    /// # Arguments
    /// * `xml` - The dictionary document
    ///
    /// # Errors
    /// Returns `DictionaryError` if the document is malformed, its version
    /// attributes are invalid, or it references undefined fields or components.
    pub fn from_xml(xml: &str) -> Result<Self, DictionaryError> {
        let doc: XmlDoc = quick_xml::de::from_str(xml)?;
        let identifier = doc.identifier()?;
        debug!(
            identifier = %identifier,
            fields = doc.fields.fields.len(),
            messages = doc.messages.messages.len(),
            "parsing dictionary"
        );

        let mut dictionary = Dictionary::new(identifier);
        for field in &doc.fields.fields {
            let field_type = field
                .field_type
                .parse::<FieldType>()
                .unwrap_or(FieldType::String);
            let mut def = FieldDef::new(field.number, field.name.as_str(), field_type);
            if !field.values.is_empty() {
                def = def.with_values(
                    field
                        .values
                        .iter()
                        .map(|v| (v.value.clone(), v.description.clone()))
                        .collect(),
                );
            }
            dictionary.add_field(def);
        }

        let (header, trailer, messages) = {
            let flattener = Flattener {
                dictionary: &dictionary,
                components: doc
                    .components
                    .components
                    .iter()
                    .map(|c| (c.name.as_str(), c.members.as_slice()))
                    .collect(),
            };

            let header = flattener.collect(&doc.header.members, "header")?;
            let trailer = flattener.collect(&doc.trailer.members, "trailer")?;
            let mut messages = Vec::with_capacity(doc.messages.messages.len());
            for message in &doc.messages.messages {
                let context = format!("message {}", message.name);
                let category = if message.msg_cat.eq_ignore_ascii_case("admin") {
                    MessageCategory::Admin
                } else {
                    MessageCategory::App
                };
                let mut def = MessageDef::new(message.msg_type.as_str(), message.name.as_str(), category);
                def.fields = flattener.collect(&message.members, &context)?;
                messages.push(def);
            }
            (header, trailer, messages)
        };

        header.into_iter().for_each(|f| dictionary.add_header_field(f));
        trailer.into_iter().for_each(|f| dictionary.add_trailer_field(f));
        messages.into_iter().for_each(|m| dictionary.add_message(m));

        info!(identifier = dictionary.begin_string(), "loaded dictionary");
        Ok(dictionary)
    }

    /// Reads and parses a QuickFIX XML data dictionary file.
    ///
    /// # Errors
    /// Returns `DictionaryError::Io` if the file cannot be read, or any
    /// error of [`Dictionary::from_xml`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let xml = std::fs::read_to_string(path.as_ref())?;
        Self::from_xml(&xml)
    }
}
