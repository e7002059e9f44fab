/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Schema definitions for FIX dictionaries.
//!
//! This module defines the structures that represent FIX protocol specifications:
//! - [`Version`]: Supported FIX versions and their wire identifiers
//! - [`FieldType`]: QuickFIX field type names
//! - [`FieldDef`]: Field definitions with tag, name, and type
//! - [`MessageDef`]: Message definitions with their field references
//! - [`Dictionary`]: Complete dictionary for one BeginString

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// FIX protocol version.
///
/// Ordered by release, with FIXT 1.1 last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Version {
    /// FIX 4.0
    Fix40,
    /// FIX 4.1
    Fix41,
    /// FIX 4.2
    Fix42,
    /// FIX 4.3
    Fix43,
    /// FIX 4.4
    Fix44,
    /// FIX 5.0
    Fix50,
    /// FIX 5.0 SP1
    Fix50Sp1,
    /// FIX 5.0 SP2
    Fix50Sp2,
    /// FIXT 1.1 (transport layer for FIX 5.0+)
    Fixt11,
}

/// Application versions indexed by ApplVerID (tag 1128).
const APPL_VER_IDS: [&str; 10] = [
    "FIX.2.7",
    "FIX.3.0",
    "FIX.4.0",
    "FIX.4.1",
    "FIX.4.2",
    "FIX.4.3",
    "FIX.4.4",
    "FIX.5.0",
    "FIX.5.0SP1",
    "FIX.5.0SP2",
];

/// Maps an ApplVerID (tag 1128) value to its version identifier.
///
/// # Returns
/// The identifier, e.g. `"FIX.5.0SP1"` for `"8"`, or `None` for unknown values.
#[must_use]
pub fn begin_string_for_appl_ver_id(appl_ver_id: &str) -> Option<&'static str> {
    appl_ver_id
        .parse::<usize>()
        .ok()
        .and_then(|index| APPL_VER_IDS.get(index).copied())
}

impl Version {
    /// Every supported version, oldest first.
    pub const ALL: [Self; 9] = [
        Self::Fix40,
        Self::Fix41,
        Self::Fix42,
        Self::Fix43,
        Self::Fix44,
        Self::Fix50,
        Self::Fix50Sp1,
        Self::Fix50Sp2,
        Self::Fixt11,
    ];

    /// Returns the BeginString value sent on the wire for this version.
    #[must_use]
    pub const fn begin_string(&self) -> &'static str {
        match self {
            Self::Fix40 => "FIX.4.0",
            Self::Fix41 => "FIX.4.1",
            Self::Fix42 => "FIX.4.2",
            Self::Fix43 => "FIX.4.3",
            Self::Fix44 => "FIX.4.4",
            Self::Fix50 | Self::Fix50Sp1 | Self::Fix50Sp2 | Self::Fixt11 => "FIXT.1.1",
        }
    }

    /// Returns the identifier naming this version, e.g. `"FIX.5.0SP2"`.
    ///
    /// Equal to [`Version::begin_string`] up to FIX 4.4.
    #[must_use]
    pub const fn identifier(&self) -> &'static str {
        match self {
            Self::Fix50 => "FIX.5.0",
            Self::Fix50Sp1 => "FIX.5.0SP1",
            Self::Fix50Sp2 => "FIX.5.0SP2",
            other => other.begin_string(),
        }
    }

    /// Parses a version identifier such as `"FIX.4.2"` or `"FIXT.1.1"`.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|version| version.identifier() == identifier)
    }

    /// Returns the version named by an ApplVerID (tag 1128) value.
    #[must_use]
    pub fn from_appl_ver_id(appl_ver_id: &str) -> Option<Self> {
        begin_string_for_appl_ver_id(appl_ver_id).and_then(Self::from_identifier)
    }

    /// Returns the ApplVerID for FIX 5.0+ versions.
    #[must_use]
    pub const fn appl_ver_id(&self) -> Option<&'static str> {
        match self {
            Self::Fix50 => Some("7"),
            Self::Fix50Sp1 => Some("8"),
            Self::Fix50Sp2 => Some("9"),
            _ => None,
        }
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

/// FIX field data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// Integer value.
    Int,
    /// Length field (for data fields).
    Length,
    /// Sequence number.
    SeqNum,
    /// Number of entries in a repeating group.
    NumInGroup,
    /// Tag number reference.
    TagNum,
    /// Day of month (1-31).
    DayOfMonth,
    /// Floating point number.
    Float,
    /// Quantity.
    Qty,
    /// Price.
    Price,
    /// Price offset.
    PriceOffset,
    /// Amount (price * quantity).
    Amt,
    /// Percentage.
    Percentage,
    /// Single character.
    Char,
    /// Boolean (Y/N).
    Boolean,
    /// String.
    String,
    /// Space-separated values (FIX 4.2 to 4.4 name).
    MultipleValueString,
    /// Multiple character value (space-separated).
    MultipleCharValue,
    /// Multiple string value (space-separated).
    MultipleStringValue,
    /// Country code (ISO 3166).
    Country,
    /// Currency code (ISO 4217).
    Currency,
    /// Exchange code (ISO 10383 MIC).
    Exchange,
    /// Month-year (YYYYMM or YYYYMMDD or YYYYMMWW).
    MonthYear,
    /// UTC timestamp.
    UtcTimestamp,
    /// UTC time only.
    UtcTimeOnly,
    /// UTC date only.
    UtcDateOnly,
    /// UTC date (FIX 4.2 name of UTCDATEONLY).
    UtcDate,
    /// Time of day with date (FIX 4.0/4.1 name of UTCTIMESTAMP).
    Time,
    /// Local market date.
    LocalMktDate,
    /// Local market time.
    LocalMktTime,
    /// Timezone.
    TzTimeOnly,
    /// Timezone with timestamp.
    TzTimestamp,
    /// Raw data (binary).
    Data,
    /// XML data.
    XmlData,
    /// Language code (ISO 639-1).
    Language,
    /// Pattern (regex).
    Pattern,
    /// Tenor (e.g., "1M", "3M").
    Tenor,
    /// Reserved for future use.
    Reserved,
}

impl FieldType {
    /// Returns the QuickFIX name of this type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "INT",
            Self::Length => "LENGTH",
            Self::SeqNum => "SEQNUM",
            Self::NumInGroup => "NUMINGROUP",
            Self::TagNum => "TAGNUM",
            Self::DayOfMonth => "DAYOFMONTH",
            Self::Float => "FLOAT",
            Self::Qty => "QTY",
            Self::Price => "PRICE",
            Self::PriceOffset => "PRICEOFFSET",
            Self::Amt => "AMT",
            Self::Percentage => "PERCENTAGE",
            Self::Char => "CHAR",
            Self::Boolean => "BOOLEAN",
            Self::String => "STRING",
            Self::MultipleValueString => "MULTIPLEVALUESTRING",
            Self::MultipleCharValue => "MULTIPLECHARVALUE",
            Self::MultipleStringValue => "MULTIPLESTRINGVALUE",
            Self::Country => "COUNTRY",
            Self::Currency => "CURRENCY",
            Self::Exchange => "EXCHANGE",
            Self::MonthYear => "MONTHYEAR",
            Self::UtcTimestamp => "UTCTIMESTAMP",
            Self::UtcTimeOnly => "UTCTIMEONLY",
            Self::UtcDateOnly => "UTCDATEONLY",
            Self::UtcDate => "UTCDATE",
            Self::Time => "TIME",
            Self::LocalMktDate => "LOCALMKTDATE",
            Self::LocalMktTime => "LOCALMKTTIME",
            Self::TzTimeOnly => "TZTIMEONLY",
            Self::TzTimestamp => "TZTIMESTAMP",
            Self::Data => "DATA",
            Self::XmlData => "XMLDATA",
            Self::Language => "LANGUAGE",
            Self::Pattern => "PATTERN",
            Self::Tenor => "TENOR",
            Self::Reserved => "RESERVED",
        }
    }
}

impl std::str::FromStr for FieldType {
    type Err = std::convert::Infallible;

    /// Creates a FieldType from a string name.
    ///
    /// Unknown names map to `String`.
    ///
    /// # Arguments
    /// * `s` - The type name from the FIX dictionary
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_uppercase().as_str() {
            "INT" => Self::Int,
            "LENGTH" => Self::Length,
            "SEQNUM" => Self::SeqNum,
            "NUMINGROUP" => Self::NumInGroup,
            "TAGNUM" => Self::TagNum,
            "DAYOFMONTH" => Self::DayOfMonth,
            "FLOAT" => Self::Float,
            "QTY" | "QUANTITY" => Self::Qty,
            "PRICE" => Self::Price,
            "PRICEOFFSET" => Self::PriceOffset,
            "AMT" | "AMOUNT" => Self::Amt,
            "PERCENTAGE" => Self::Percentage,
            "CHAR" => Self::Char,
            "BOOLEAN" => Self::Boolean,
            "STRING" => Self::String,
            "MULTIPLEVALUESTRING" => Self::MultipleValueString,
            "MULTIPLECHARVALUE" => Self::MultipleCharValue,
            "MULTIPLESTRINGVALUE" => Self::MultipleStringValue,
            "COUNTRY" => Self::Country,
            "CURRENCY" => Self::Currency,
            "EXCHANGE" => Self::Exchange,
            "MONTHYEAR" => Self::MonthYear,
            "UTCTIMESTAMP" => Self::UtcTimestamp,
            "UTCTIMEONLY" => Self::UtcTimeOnly,
            "UTCDATEONLY" => Self::UtcDateOnly,
            "UTCDATE" => Self::UtcDate,
            "TIME" => Self::Time,
            "LOCALMKTDATE" | "DATE" => Self::LocalMktDate,
            "LOCALMKTTIME" => Self::LocalMktTime,
            "TZTIMEONLY" => Self::TzTimeOnly,
            "TZTIMESTAMP" => Self::TzTimestamp,
            "DATA" => Self::Data,
            "XMLDATA" => Self::XmlData,
            "LANGUAGE" => Self::Language,
            "PATTERN" => Self::Pattern,
            "TENOR" => Self::Tenor,
            "RESERVED" => Self::Reserved,
            _ => Self::String,
        })
    }
}

/// Definition of a FIX field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field tag number.
    pub tag: u32,
    /// Field name.
    pub name: String,
    /// Field data type.
    pub field_type: FieldType,
    /// Valid values for enumerated fields.
    pub values: Option<HashMap<String, String>>,
}

impl FieldDef {
    /// Creates a new field definition.
    ///
    /// # Arguments
    /// * `tag` - The field tag number
    /// * `name` - The field name
    /// * `field_type` - The field data type
    #[must_use]
    pub fn new(tag: u32, name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            tag,
            name: name.into(),
            field_type,
            values: None,
        }
    }

    /// Adds valid values for an enumerated field.
    #[must_use]
    pub fn with_values(mut self, values: HashMap<String, String>) -> Self {
        self.values = Some(values);
        self
    }

    /// Returns true if `value` is allowed, or if the field is not enumerated.
    #[must_use]
    pub fn allows(&self, value: &str) -> bool {
        self.values
            .as_ref()
            .is_none_or(|values| values.contains_key(value))
    }
}

/// Reference to a field within a message, header or trailer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRef {
    /// Field tag number.
    pub tag: u32,
    /// Field name.
    pub name: String,
    /// Whether the field is required.
    pub required: bool,
}

impl FieldRef {
    /// Creates a field reference.
    #[must_use]
    pub fn new(tag: u32, name: impl Into<String>, required: bool) -> Self {
        Self {
            tag,
            name: name.into(),
            required,
        }
    }
}

/// Message category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageCategory {
    /// Administrative message (session level).
    Admin,
    /// Application message.
    App,
}

/// Definition of a FIX message.
///
/// Components are flattened into `fields`; a repeating group contributes
/// its NumInGroup field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDef {
    /// Message type value (tag 35).
    pub msg_type: String,
    /// Message name.
    pub name: String,
    /// Message category (admin or app).
    pub category: MessageCategory,
    /// Fields in this message.
    pub fields: Vec<FieldRef>,
}

impl MessageDef {
    /// Creates a message definition without fields.
    #[must_use]
    pub fn new(
        msg_type: impl Into<String>,
        name: impl Into<String>,
        category: MessageCategory,
    ) -> Self {
        Self {
            msg_type: msg_type.into(),
            name: name.into(),
            category,
            fields: Vec::new(),
        }
    }

    /// Adds a field reference.
    #[must_use]
    pub fn with_field(mut self, field: FieldRef) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the tags of the required fields.
    pub fn required_tags(&self) -> impl Iterator<Item = u32> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.tag)
    }
}

/// Complete FIX dictionary for a specific BeginString.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dictionary {
    /// Version identifier, e.g. `"FIX.4.4"`, `"FIX.5.0SP2"` or `"FIXT.1.1"`.
    begin_string: String,
    /// Field definitions indexed by tag.
    fields: HashMap<u32, FieldDef>,
    /// Field tags indexed by name.
    fields_by_name: HashMap<String, u32>,
    /// Message definitions indexed by msg_type.
    messages: HashMap<String, MessageDef>,
    /// Message types indexed by message name.
    messages_by_name: HashMap<String, String>,
    /// Header fields.
    header: Vec<FieldRef>,
    /// Trailer fields.
    trailer: Vec<FieldRef>,
}

impl Dictionary {
    /// Creates a new empty dictionary.
    ///
    /// # Arguments
    /// * `begin_string` - The version identifier this dictionary describes
    #[must_use]
    pub fn new(begin_string: impl Into<String>) -> Self {
        Self {
            begin_string: begin_string.into(),
            fields: HashMap::new(),
            fields_by_name: HashMap::new(),
            messages: HashMap::new(),
            messages_by_name: HashMap::new(),
            header: Vec::new(),
            trailer: Vec::new(),
        }
    }

    /// Returns the version identifier.
    #[must_use]
    pub fn begin_string(&self) -> &str {
        &self.begin_string
    }

    /// Returns the known version this dictionary describes, if any.
    #[must_use]
    pub fn version(&self) -> Option<Version> {
        Version::from_identifier(&self.begin_string)
    }

    /// Adds a field definition.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields_by_name.insert(field.name.clone(), field.tag);
        self.fields.insert(field.tag, field);
    }

    /// Adds a message definition.
    pub fn add_message(&mut self, message: MessageDef) {
        self.messages_by_name
            .insert(message.name.clone(), message.msg_type.clone());
        self.messages.insert(message.msg_type.clone(), message);
    }

    /// Adds a header field reference.
    pub fn add_header_field(&mut self, field: FieldRef) {
        self.header.push(field);
    }

    /// Adds a trailer field reference.
    pub fn add_trailer_field(&mut self, field: FieldRef) {
        self.trailer.push(field);
    }

    /// Gets a field definition by tag.
    #[must_use]
    pub fn get_field(&self, tag: u32) -> Option<&FieldDef> {
        self.fields.get(&tag)
    }

    /// Gets a field definition by name.
    #[must_use]
    pub fn get_field_by_name(&self, name: &str) -> Option<&FieldDef> {
        self.fields_by_name
            .get(name)
            .and_then(|tag| self.fields.get(tag))
    }

    /// Returns the type of field `tag`.
    #[must_use]
    pub fn field_type(&self, tag: u32) -> Option<FieldType> {
        self.get_field(tag).map(|f| f.field_type)
    }

    /// Returns the name of field `tag`.
    #[must_use]
    pub fn field_name(&self, tag: u32) -> Option<&str> {
        self.get_field(tag).map(|f| f.name.as_str())
    }

    /// Gets a message definition by type.
    #[must_use]
    pub fn get_message(&self, msg_type: &str) -> Option<&MessageDef> {
        self.messages.get(msg_type)
    }

    /// Returns the required body fields of `msg_type`, empty if the type is
    /// unknown.
    #[must_use]
    pub fn required_fields(&self, msg_type: &str) -> Vec<u32> {
        self.get_message(msg_type)
            .map(|m| m.required_tags().collect())
            .unwrap_or_default()
    }

    /// Resolves a message name such as `"NewOrderSingle"` to its MsgType.
    #[must_use]
    pub fn msg_type_for_name(&self, name: &str) -> Option<&str> {
        self.messages_by_name.get(name).map(String::as_str)
    }

    /// Returns true if `tag` is declared in the header.
    #[must_use]
    pub fn is_header_field(&self, tag: u32) -> bool {
        self.header.iter().any(|f| f.tag == tag)
    }

    /// Returns true if `tag` is declared in the trailer.
    #[must_use]
    pub fn is_trailer_field(&self, tag: u32) -> bool {
        self.trailer.iter().any(|f| f.tag == tag)
    }

    /// Returns the header field references.
    #[must_use]
    pub fn header(&self) -> &[FieldRef] {
        &self.header
    }

    /// Returns the trailer field references.
    #[must_use]
    pub fn trailer(&self) -> &[FieldRef] {
        &self.trailer
    }

    /// Returns an iterator over all field definitions.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.values()
    }

    /// Returns an iterator over all message definitions.
    pub fn messages(&self) -> impl Iterator<Item = &MessageDef> {
        self.messages.values()
    }
}
