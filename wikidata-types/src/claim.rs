use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The kind of value a claim carries.
///
/// Serialized with the Wikidata datatype names so output stays compatible
/// with consumers that already understand the API vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Reference to another item (`Q…`). Rewritten to [`ValueKind::String`]
    /// once the value has been resolved to a label.
    #[serde(rename = "wikibase-item")]
    ItemReference,
    #[serde(rename = "string")]
    String,
    #[serde(rename = "url")]
    Url,
    /// Raw timestamp, e.g. `+1952-03-11T00:00:00Z`.
    #[serde(rename = "time")]
    Time,
    /// `"<longitude>,<latitude>"`.
    #[serde(rename = "globe-coordinate")]
    Coordinate,
    /// Amount with the unit appended when it is not dimensionless.
    #[serde(rename = "quantity")]
    Quantity,
}

impl ValueKind {
    /// Maps a snak `datatype` to a supported kind. Unsupported datatypes
    /// (`external-id`, `commonsMedia`, `monolingualtext`, …) yield `None`.
    #[must_use]
    pub fn from_datatype(datatype: &str) -> Option<Self> {
        match datatype {
            "wikibase-item" => Some(Self::ItemReference),
            "string" => Some(Self::String),
            "url" => Some(Self::Url),
            "time" => Some(Self::Time),
            "globe-coordinate" => Some(Self::Coordinate),
            "quantity" => Some(Self::Quantity),
            _ => None,
        }
    }

    /// The Wikidata datatype name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ItemReference => "wikibase-item",
            Self::String => "string",
            Self::Url => "url",
            Self::Time => "time",
            Self::Coordinate => "globe-coordinate",
            Self::Quantity => "quantity",
        }
    }

    /// Whether values of this kind are identifiers that can be resolved
    /// to a label.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(self, Self::ItemReference)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_datatype(s).ok_or_else(|| Error::UnknownValueKind(s.to_string()))
    }
}

/// One fact about an entity: a property, its value and the value's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Property identifier (`P31`) or its label after resolution.
    pub property: String,
    /// Decoded value, or the item label after resolution.
    pub value: String,
    #[serde(rename = "type")]
    pub kind: ValueKind,
}

impl Claim {
    pub fn new(property: impl Into<String>, value: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            kind,
        }
    }
}
