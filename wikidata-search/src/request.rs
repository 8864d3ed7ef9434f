//! Query parameters for the two API actions.

use crate::config::SearchOptions;

/// `props` for full entity lookups.
pub const ENTITY_PROPS: &str = "claims|descriptions|labels";

/// `props` for label-only lookups during property resolution.
pub const LABEL_PROPS: &str = "labels";

/// Query for the search action (`wbsearchentities`).
pub(crate) fn search_query(action: &str, options: &SearchOptions) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("action", action.to_string()),
        ("language", options.language.clone()),
        ("search", options.term.clone()),
        ("type", options.entity_type.as_str().to_string()),
        ("limit", options.limit.to_string()),
    ];
    // Boolean flag: presence disables language fallback.
    if options.strict_language {
        query.push(("strictlanguage", "1".to_string()));
    }
    query.push(("format", "json".to_string()));
    query
}

/// Query for the entity-fetch action (`wbgetentities`).
pub(crate) fn entities_query(
    action: &str,
    language: &str,
    ids: &[String],
    props: &str,
) -> Vec<(&'static str, String)> {
    vec![
        ("action", action.to_string()),
        ("languages", language.to_string()),
        ("redirects", "yes".to_string()),
        ("props", props.to_string()),
        ("ids", ids.join("|")),
        ("format", "json".to_string()),
    ]
}
