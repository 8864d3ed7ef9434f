//! Shared fixtures for Wikidata client tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::collections::HashSet;
use std::sync::Arc;
use wikidata_search::{PropertyCache, ReqwestTransport, WikidataClient, WikidataConfig};
use wiremock::{MockServer, Request, Respond, ResponseTemplate};

pub const API_PATH: &str = "/w/api.php";

/// Config pointing at the mock server.
pub fn mock_config(server: &MockServer) -> WikidataConfig {
    WikidataConfig {
        api_base_url: server.uri(),
        timeout_secs: 5,
        ..Default::default()
    }
}

/// Client against the mock server with its own empty cache.
pub fn mock_client(server: &MockServer) -> WikidataClient {
    mock_client_with_cache(server, PropertyCache::new())
}

pub fn mock_client_with_cache(server: &MockServer, cache: PropertyCache) -> WikidataClient {
    let transport = ReqwestTransport::new(std::time::Duration::from_secs(5)).unwrap();
    WikidataClient::with_transport(mock_config(server), Arc::new(transport), cache)
}

// ── Raw wire fixtures ───────────────────────────────────────────

/// A statement whose main snak carries a value.
pub fn statement(property: &str, datatype: &str, value: Value) -> Value {
    json!({
        "mainsnak": {
            "snaktype": "value",
            "property": property,
            "datatype": datatype,
            "datavalue": { "value": value, "type": "ignored" }
        },
        "type": "statement",
        "rank": "normal"
    })
}

pub fn item_statement(property: &str, numeric_id: u64) -> Value {
    statement(
        property,
        "wikibase-item",
        json!({ "entity-type": "item", "numeric-id": numeric_id, "id": format!("Q{numeric_id}") }),
    )
}

pub fn string_statement(property: &str, value: &str) -> Value {
    statement(property, "string", json!(value))
}

/// A statement with an unknown or no value.
pub fn novalue_statement(property: &str) -> Value {
    json!({
        "mainsnak": { "snaktype": "novalue", "property": property, "datatype": "wikibase-item" },
        "type": "statement"
    })
}

/// A raw entity as returned by `wbgetentities` in English.
pub fn raw_entity(id: &str, label: &str, description: &str, claims: Value) -> Value {
    json!({
        "type": "item",
        "id": id,
        "labels": { "en": { "language": "en", "value": label } },
        "descriptions": { "en": { "language": "en", "value": description } },
        "claims": claims
    })
}

/// The New York Mets, trimmed to a handful of claims.
pub fn mets_entity() -> Value {
    raw_entity(
        "Q846007",
        "New York Mets",
        "baseball team and Major League Baseball franchise in Queens, New York, United States",
        json!({
            "P31": [item_statement("P31", 13027888)],
            "P856": [statement("P856", "url", json!("https://www.mlb.com/mets"))],
            "P571": [statement("P571", "time", json!({
                "time": "+1962-00-00T00:00:00Z",
                "timezone": 0,
                "precision": 9,
                "calendarmodel": "http://www.wikidata.org/entity/Q1985727"
            }))],
            "P625": [statement("P625", "globe-coordinate", json!({
                "latitude": -73.84,
                "longitude": 40.75,
                "precision": 0.01,
                "globe": "http://www.wikidata.org/entity/Q2"
            }))],
            "P118": [item_statement("P118", 1163715)],
            "P2048": [statement("P2048", "quantity", json!({ "amount": "+12", "unit": "1" }))],
            "P373": [statement("P373", "commonsMedia", json!("Mets logo.svg"))]
        }),
    )
}

/// Wraps records in the `wbgetentities` envelope.
pub fn entities_payload(records: Vec<Value>) -> Value {
    let mut entities = serde_json::Map::new();
    for record in records {
        let id = record["id"].as_str().unwrap().to_string();
        entities.insert(id, record);
    }
    json!({ "entities": entities, "success": 1 })
}

/// A label-only record for property resolution.
pub fn label_record(id: &str, label: &str) -> Value {
    let kind = if id.starts_with('P') { "property" } else { "item" };
    json!({
        "type": kind,
        "id": id,
        "labels": { "en": { "language": "en", "value": label } }
    })
}

/// Label text the echo responder produces for `id`.
pub fn echo_label(id: &str) -> String {
    format!("label of {id}")
}

/// Answers label lookups with a label for every requested id, except the
/// ids listed in `missing`, which come back without an English label.
pub struct LabelEcho {
    pub missing: HashSet<String>,
}

impl LabelEcho {
    pub fn all() -> Self {
        Self {
            missing: HashSet::new(),
        }
    }

    pub fn without(ids: &[&str]) -> Self {
        Self {
            missing: ids.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Respond for LabelEcho {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let records = requested_ids(request)
            .into_iter()
            .map(|id| {
                if self.missing.contains(&id) {
                    json!({ "type": "item", "id": id, "labels": {} })
                } else {
                    label_record(&id, &echo_label(&id))
                }
            })
            .collect();
        ResponseTemplate::new(200).set_body_json(entities_payload(records))
    }
}

/// The decoded `ids` parameter of a request, split on `|`.
pub fn requested_ids(request: &Request) -> Vec<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == "ids")
        .map(|(_, v)| v.split('|').map(str::to_string).collect())
        .unwrap_or_default()
}

/// Value of query parameter `key`, if present.
pub fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
