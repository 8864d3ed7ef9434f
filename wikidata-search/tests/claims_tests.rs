mod common;

use common::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::json;
use wikidata_search::{decode_value, extract_entity, Claim, ClaimValue, ValueKind};

// ── Value decoding ──────────────────────────────────────────────

#[test]
fn item_reference_rebuilds_q_id() {
    let value = json!({ "entity-type": "item", "numeric-id": 5 });
    assert_eq!(
        decode_value("wikibase-item", &value),
        Some((ValueKind::ItemReference, "Q5".to_string()))
    );
}

#[test]
fn item_reference_uses_numeric_id_over_id_field() {
    let value = json!({ "entity-type": "item", "numeric-id": 42, "id": "Q999" });
    assert_eq!(decode_value("wikibase-item", &value).unwrap().1, "Q42");
}

#[test]
fn string_and_url_pass_through() {
    assert_eq!(
        decode_value("string", &json!("Mets")),
        Some((ValueKind::String, "Mets".to_string()))
    );
    assert_eq!(
        decode_value("url", &json!("https://www.mlb.com/mets")),
        Some((ValueKind::Url, "https://www.mlb.com/mets".to_string()))
    );
}

#[test]
fn time_is_left_unparsed() {
    let value = json!({ "time": "+1962-00-00T00:00:00Z", "precision": 9 });
    assert_eq!(
        decode_value("time", &value),
        Some((ValueKind::Time, "+1962-00-00T00:00:00Z".to_string()))
    );
}

#[test]
fn coordinate_is_longitude_first() {
    let value = json!({ "longitude": 40.75, "latitude": -73.84 });
    assert_eq!(
        decode_value("globe-coordinate", &value),
        Some((ValueKind::Coordinate, "40.75,-73.84".to_string()))
    );
}

#[test]
fn dimensionless_quantity_is_bare_amount() {
    let value = json!({ "amount": "12", "unit": "1" });
    assert_eq!(
        decode_value("quantity", &value),
        Some((ValueKind::Quantity, "12".to_string()))
    );
}

#[test]
fn quantity_unit_is_appended_without_separator() {
    let value = json!({ "amount": "12", "unit": "Q11573" });
    assert_eq!(decode_value("quantity", &value).unwrap().1, "12Q11573");
}

#[test]
fn numeric_quantity_amount_is_accepted() {
    let value = json!({ "amount": 12, "unit": "1" });
    assert_eq!(decode_value("quantity", &value).unwrap().1, "12");
}

#[test]
fn unsupported_datatype_is_rejected() {
    assert_eq!(decode_value("external-id", &json!("0000 0001")), None);
    assert_eq!(decode_value("monolingualtext", &json!({ "text": "x", "language": "en" })), None);
}

#[test]
fn wrong_shapes_fail_closed() {
    assert_eq!(decode_value("wikibase-item", &json!("Q5")), None);
    assert_eq!(decode_value("string", &json!({ "text": "x" })), None);
    assert_eq!(decode_value("time", &json!("+2001-01-01T00:00:00Z")), None);
    assert_eq!(decode_value("globe-coordinate", &json!({ "latitude": 1.0 })), None);
    assert_eq!(decode_value("quantity", &json!({ "amount": "5" })), None);
}

#[test]
fn claim_value_decode_matches_kind() {
    let value = ClaimValue::decode(ValueKind::Quantity, &json!({ "amount": "+3", "unit": "1" }));
    assert_eq!(
        value,
        Some(ClaimValue::Quantity {
            amount: "+3".to_string(),
            unit: "1".to_string()
        })
    );
}

proptest! {
    #[test]
    fn coordinate_render_splits_back(lon in -180.0f64..180.0, lat in -90.0f64..90.0) {
        let rendered = ClaimValue::Coordinate { longitude: lon, latitude: lat }.render();
        let (a, b) = rendered.split_once(',').unwrap();
        prop_assert_eq!(a.parse::<f64>().unwrap(), lon);
        prop_assert_eq!(b.parse::<f64>().unwrap(), lat);
    }

    #[test]
    fn dimensionless_quantity_never_gains_suffix(amount in "[+-]?[0-9]{1,6}(\\.[0-9]{1,3})?") {
        let value = json!({ "amount": amount.clone(), "unit": "1" });
        prop_assert_eq!(decode_value("quantity", &value).unwrap().1, amount);
    }
}

// ── Entity extraction ───────────────────────────────────────────

#[test]
fn extracts_supported_claims_in_order() {
    let entity = extract_entity(&mets_entity(), "en").unwrap();

    assert_eq!(entity.label, "New York Mets");
    assert!(entity.description.starts_with("baseball team"));
    assert_eq!(
        entity.claims,
        vec![
            Claim::new("P31", "Q13027888", ValueKind::ItemReference),
            Claim::new("P856", "https://www.mlb.com/mets", ValueKind::Url),
            Claim::new("P571", "+1962-00-00T00:00:00Z", ValueKind::Time),
            Claim::new("P625", "40.75,-73.84", ValueKind::Coordinate),
            Claim::new("P118", "Q1163715", ValueKind::ItemReference),
            Claim::new("P2048", "+12", ValueKind::Quantity),
        ]
    );
}

#[test]
fn first_decodable_statement_wins() {
    let raw = raw_entity(
        "Q1",
        "label",
        "description",
        json!({
            "P40": [
                novalue_statement("P40"),
                statement("P40", "external-id", json!("abc")),
                item_statement("P40", 7),
                item_statement("P40", 8)
            ]
        }),
    );
    let entity = extract_entity(&raw, "en").unwrap();
    assert_eq!(entity.claims, vec![Claim::new("P40", "Q7", ValueKind::ItemReference)]);
}

#[test]
fn group_without_decodable_statement_contributes_nothing() {
    let raw = raw_entity(
        "Q1",
        "label",
        "description",
        json!({
            "P213": [statement("P213", "external-id", json!("0000 0001"))],
            "P1476": [string_statement("P1476", "title")]
        }),
    );
    let entity = extract_entity(&raw, "en").unwrap();
    assert_eq!(entity.claims.len(), 1);
    assert_eq!(entity.claims[0].property, "P1476");
}

#[test]
fn entity_without_claims_is_dropped() {
    let raw = raw_entity(
        "Q1",
        "label",
        "description",
        json!({ "P213": [statement("P213", "external-id", json!("0000 0001"))] }),
    );
    assert_eq!(extract_entity(&raw, "en"), None);

    let bare = raw_entity("Q2", "label", "description", json!({}));
    assert_eq!(extract_entity(&bare, "en"), None);
}

#[test]
fn entity_without_label_or_description_is_dropped() {
    let claims = json!({ "P1476": [string_statement("P1476", "title")] });

    let mut no_label = raw_entity("Q1", "label", "description", claims.clone());
    no_label["labels"] = json!({});
    assert_eq!(extract_entity(&no_label, "en"), None);

    let mut no_description = raw_entity("Q1", "label", "description", claims.clone());
    no_description["descriptions"] = json!({ "de": { "language": "de", "value": "Beschreibung" } });
    assert_eq!(extract_entity(&no_description, "en"), None);

    let blank = raw_entity("Q1", "", "description", claims);
    assert_eq!(extract_entity(&blank, "en"), None);
}

#[test]
fn selected_language_is_used() {
    let mut raw = raw_entity(
        "Q1",
        "label",
        "description",
        json!({ "P1476": [string_statement("P1476", "title")] }),
    );
    raw["labels"]["fr"] = json!({ "language": "fr", "value": "étiquette" });
    raw["descriptions"]["fr"] = json!({ "language": "fr", "value": "description fr" });

    let entity = extract_entity(&raw, "fr").unwrap();
    assert_eq!(entity.label, "étiquette");
    assert_eq!(entity.description, "description fr");
}

#[test]
fn missing_entity_record_is_dropped() {
    let raw = json!({ "id": "Q404", "missing": "" });
    assert_eq!(extract_entity(&raw, "en"), None);
}

#[test]
fn malformed_claim_group_is_ignored() {
    let raw = raw_entity(
        "Q1",
        "label",
        "description",
        json!({
            "P1": "not a list",
            "P2": [{ "mainsnak": "not an object" }],
            "P3": [string_statement("P3", "ok")]
        }),
    );
    let entity = extract_entity(&raw, "en").unwrap();
    assert_eq!(entity.claims, vec![Claim::new("P3", "ok", ValueKind::String)]);
}
