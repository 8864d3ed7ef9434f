//! Client configuration and per-search options.

use serde::{Deserialize, Serialize};
use wikidata_types::EntityType;

use crate::error::{WikidataError, WikidataResult};

/// Upper bound the API places on both search `limit` and `ids` per request.
pub const MAX_IDS_PER_REQUEST: usize = 50;

/// Configuration shared by every request a client makes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WikidataConfig {
    /// Language for search, labels, descriptions and resolved claims.
    pub language: String,
    /// Disable the API's language fallback for searches.
    pub strict_language: bool,
    /// Default entity type for searches.
    pub entity_type: EntityType,
    /// Default search result limit (1–50).
    pub limit: u32,
    /// Base URL of the API host (e.g. `https://www.wikidata.org`).
    pub api_base_url: String,
    /// Path of the API script on the host.
    pub api_path: String,
    /// Action used to search entities.
    pub search_action: String,
    /// Action used to fetch entity details and labels.
    pub get_action: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for WikidataConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            strict_language: true,
            entity_type: EntityType::Item,
            limit: 7,
            api_base_url: "https://www.wikidata.org".to_string(),
            api_path: "/w/api.php".to_string(),
            search_action: "wbsearchentities".to_string(),
            get_action: "wbgetentities".to_string(),
            timeout_secs: 30,
        }
    }
}

impl WikidataConfig {
    /// Full URL of the API endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.api_base_url.trim_end_matches('/'), self.api_path)
    }
}

/// Options for a single entity search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    pub term: String,
    pub language: String,
    pub strict_language: bool,
    pub entity_type: EntityType,
    pub limit: u32,
}

impl SearchOptions {
    /// Builds options for `term` using the defaults from `config`.
    pub fn from_config(config: &WikidataConfig, term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            language: config.language.clone(),
            strict_language: config.strict_language,
            entity_type: config.entity_type,
            limit: config.limit,
        }
    }

    /// Checks the options before anything is sent.
    pub fn validate(&self) -> WikidataResult<()> {
        if self.term.is_empty() {
            return Err(WikidataError::InvalidOptions("search term is empty".to_string()));
        }
        if self.language.is_empty() {
            return Err(WikidataError::InvalidOptions("language is empty".to_string()));
        }
        if self.limit < 1 || self.limit as usize > MAX_IDS_PER_REQUEST {
            return Err(WikidataError::InvalidOptions(format!(
                "limit must be between 1 and {MAX_IDS_PER_REQUEST}, got {}",
                self.limit
            )));
        }
        Ok(())
    }
}
