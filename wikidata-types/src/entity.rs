use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Claim, Error};

/// A fully extracted entity record.
///
/// Only entities with a label, a description and at least one claim in the
/// requested language are ever produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub label: String,
    pub description: String,
    pub claims: Vec<Claim>,
}

/// A single hit returned by an entity search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub url: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The kind of entity a search looks for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    #[default]
    Item,
    Property,
}

impl EntityType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Property => "property",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "item" => Ok(Self::Item),
            "property" => Ok(Self::Property),
            other => Err(Error::UnknownEntityType(other.to_string())),
        }
    }
}
