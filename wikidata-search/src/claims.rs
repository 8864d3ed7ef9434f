//! Claim extraction from raw `wbgetentities` records.
//!
//! Every claim group is reduced to a single `(property, value, kind)`
//! triplet taken from the first statement whose main snak carries a value
//! this crate knows how to decode. Qualifiers, references and later
//! statements are ignored.
//!
//! Decoding is typed: a statement is parsed into [`Snak`], the declared
//! datatype is mapped to a [`ValueKind`], and the datavalue is decoded into
//! the matching [`ClaimValue`] variant. Any shape that does not fit is
//! skipped rather than partially emitted.

use serde::Deserialize;
use serde_json::{Number, Value};
use tracing::trace;
use wikidata_types::{item_id, Claim, Entity, ValueKind};

/// Unit the API reports for dimensionless quantities.
pub const DIMENSIONLESS_UNIT: &str = "1";

#[derive(Debug, Deserialize)]
struct Statement {
    mainsnak: Snak,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "snaktype", rename_all = "lowercase")]
enum Snak {
    Value(ValueSnak),
    /// `somevalue` and `novalue` snaks have nothing to decode.
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
struct ValueSnak {
    #[serde(default)]
    property: Option<String>,
    datatype: String,
    datavalue: DataValue,
}

#[derive(Debug, Deserialize)]
struct DataValue {
    value: Value,
}

#[derive(Debug, Deserialize)]
struct EntityIdValue {
    #[serde(rename = "numeric-id")]
    numeric_id: u64,
}

#[derive(Debug, Deserialize)]
struct TimeValue {
    time: String,
}

#[derive(Debug, Deserialize)]
struct CoordinateValue {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Amount {
    Text(String),
    Number(Number),
}

#[derive(Debug, Deserialize)]
struct QuantityValue {
    amount: Amount,
    unit: String,
}

/// A decoded claim value.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimValue {
    /// Numeric id of the referenced item.
    Item(u64),
    /// Plain string or URL.
    Text(String),
    /// Timestamp exactly as the API returned it.
    Time(String),
    Coordinate { longitude: f64, latitude: f64 },
    Quantity { amount: String, unit: String },
}

impl ClaimValue {
    /// Decodes a datavalue `value` according to `kind`. Returns `None` when
    /// the value does not have the shape `kind` requires.
    pub fn decode(kind: ValueKind, value: &Value) -> Option<Self> {
        match kind {
            ValueKind::ItemReference => EntityIdValue::deserialize(value)
                .ok()
                .map(|v| Self::Item(v.numeric_id)),
            ValueKind::String | ValueKind::Url => value.as_str().map(|s| Self::Text(s.to_string())),
            ValueKind::Time => TimeValue::deserialize(value).ok().map(|v| Self::Time(v.time)),
            ValueKind::Coordinate => CoordinateValue::deserialize(value).ok().map(|v| {
                Self::Coordinate {
                    longitude: v.longitude,
                    latitude: v.latitude,
                }
            }),
            ValueKind::Quantity => QuantityValue::deserialize(value).ok().map(|v| {
                let amount = match v.amount {
                    Amount::Text(text) => text,
                    Amount::Number(number) => number.to_string(),
                };
                Self::Quantity {
                    amount,
                    unit: v.unit,
                }
            }),
        }
    }

    /// Renders the compact string form used in claim output.
    pub fn render(&self) -> String {
        match self {
            Self::Item(numeric_id) => item_id(*numeric_id),
            Self::Text(text) | Self::Time(text) => text.clone(),
            // Longitude first.
            Self::Coordinate {
                longitude,
                latitude,
            } => format!("{longitude},{latitude}"),
            Self::Quantity { amount, unit } if unit == DIMENSIONLESS_UNIT => amount.clone(),
            Self::Quantity { amount, unit } => format!("{amount}{unit}"),
        }
    }
}

/// Decodes a datavalue `value` declared with `datatype` into its kind and
/// rendered string. Unsupported datatypes and malformed values yield `None`.
pub fn decode_value(datatype: &str, value: &Value) -> Option<(ValueKind, String)> {
    let kind = ValueKind::from_datatype(datatype)?;
    let decoded = ClaimValue::decode(kind, value)?;
    Some((kind, decoded.render()))
}

/// Reads `field[language].value`, as used by `labels` and `descriptions`.
pub(crate) fn language_value<'a>(field: Option<&'a Value>, language: &str) -> Option<&'a str> {
    field?.get(language)?.get("value")?.as_str()
}

fn decode_statement(group_key: &str, statement: &Value) -> Option<Claim> {
    let statement = Statement::deserialize(statement).ok()?;
    let Snak::Value(snak) = statement.mainsnak else {
        return None;
    };
    let (kind, value) = decode_value(&snak.datatype, &snak.datavalue.value)?;
    let property = snak
        .property
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| group_key.to_string());

    if property.is_empty() || value.is_empty() {
        return None;
    }
    Some(Claim::new(property, value, kind))
}

/// Extracts the claim for one property group: the first statement that
/// decodes wins.
pub fn extract_claim(group_key: &str, statements: &Value) -> Option<Claim> {
    statements
        .as_array()?
        .iter()
        .find_map(|statement| decode_statement(group_key, statement))
}

/// Extracts label, description and claims from a raw entity record.
///
/// Returns `None` unless the entity has a label and a description in
/// `language` and at least one decodable claim.
pub fn extract_entity(raw: &Value, language: &str) -> Option<Entity> {
    let id = raw.get("id").and_then(Value::as_str).unwrap_or("?");

    let label = language_value(raw.get("labels"), language).filter(|s| !s.is_empty());
    let description = language_value(raw.get("descriptions"), language).filter(|s| !s.is_empty());
    let (Some(label), Some(description)) = (label, description) else {
        trace!("Dropping {}: no label or description in {}", id, language);
        return None;
    };

    let claims: Vec<Claim> = raw
        .get("claims")
        .and_then(Value::as_object)
        .map(|groups| {
            groups
                .iter()
                .filter_map(|(key, statements)| extract_claim(key, statements))
                .collect()
        })
        .unwrap_or_default();

    if claims.is_empty() {
        trace!("Dropping {}: no decodable claims", id);
        return None;
    }

    Some(Entity {
        label: label.to_string(),
        description: description.to_string(),
        claims,
    })
}
