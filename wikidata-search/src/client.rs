//! Wikidata API client.
//!
//! Exposes entity search and entity lookup. Lookups can optionally resolve
//! property and item ids inside claims into labels via the
//! [`PropertyResolver`], sharing one [`PropertyCache`] across calls.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use wikidata_types::{Entity, SearchResult};

use crate::cache::PropertyCache;
use crate::claims::extract_entity;
use crate::config::{SearchOptions, WikidataConfig, MAX_IDS_PER_REQUEST};
use crate::error::{WikidataError, WikidataResult};
use crate::request::{entities_query, search_query, ENTITY_PROPS};
use crate::resolver::{PendingEntity, PropertyResolver, ReferenceSet};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Result of [`WikidataClient::search`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// Result of [`WikidataClient::get_entities`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitiesResponse {
    pub entities: Vec<Entity>,
}

/// A search hit as returned on the wire; any field may be missing.
#[derive(Debug, Deserialize)]
struct SearchHit {
    id: Option<String>,
    url: Option<String>,
    label: Option<String>,
    description: Option<String>,
}

impl SearchHit {
    fn into_result(self) -> Option<SearchResult> {
        Some(SearchResult {
            id: self.id?,
            url: self.url?,
            label: self.label?,
            description: self.description,
        })
    }
}

/// Builds a malformed-response error, preferring the API's own message.
fn malformed(payload: &Value, missing: &str) -> WikidataError {
    let detail = payload
        .get("error")
        .and_then(|e| e.get("info"))
        .and_then(Value::as_str)
        .map(|info| format!("missing `{missing}` field: {info}"))
        .unwrap_or_else(|| format!("missing `{missing}` field"));
    WikidataError::MalformedResponse(detail)
}

/// Client for the Wikidata search and entity APIs.
pub struct WikidataClient {
    config: WikidataConfig,
    transport: Arc<dyn HttpTransport>,
    resolver: PropertyResolver,
}

impl WikidataClient {
    /// Creates a client using `reqwest` and the process-wide property cache.
    pub fn new(config: WikidataConfig) -> WikidataResult<Self> {
        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::with_transport(
            config,
            Arc::new(transport),
            PropertyCache::shared(),
        ))
    }

    /// Creates a client with an explicit transport and cache.
    pub fn with_transport(
        config: WikidataConfig,
        transport: Arc<dyn HttpTransport>,
        cache: PropertyCache,
    ) -> Self {
        let resolver = PropertyResolver::new(Arc::clone(&transport), &config, cache);
        Self {
            config,
            transport,
            resolver,
        }
    }

    pub fn config(&self) -> &WikidataConfig {
        &self.config
    }

    /// The cache used for property resolution.
    pub fn property_cache(&self) -> &PropertyCache {
        self.resolver.cache()
    }

    /// Search options for `term` with this client's defaults.
    pub fn search_options(&self, term: impl Into<String>) -> SearchOptions {
        SearchOptions::from_config(&self.config, term)
    }

    /// Searches entities by text.
    ///
    /// Options are validated before anything is sent. Hits lacking an id,
    /// URL or label are left out.
    pub async fn search(&self, options: &SearchOptions) -> WikidataResult<SearchResponse> {
        options.validate()?;

        debug!("Searching for {:?} ({})", options.term, options.language);
        let query = search_query(&self.config.search_action, options);
        let payload = self
            .transport
            .get(&self.config.endpoint(), &query)
            .await?
            .into_json()?;

        let hits = payload
            .get("search")
            .ok_or_else(|| malformed(&payload, "search"))?;
        let hits = Vec::<SearchHit>::deserialize(hits)?;

        let results: Vec<SearchResult> = hits.into_iter().filter_map(SearchHit::into_result).collect();
        debug!("Search returned {} results", results.len());
        Ok(SearchResponse { results })
    }

    /// Fetches labels, descriptions and claims for up to 50 entities.
    ///
    /// Ids past the 50th are dropped. Entities without a label, description
    /// or any decodable claim are left out. With `resolve_properties`,
    /// property ids and item-reference values are replaced by their labels
    /// where one exists in the configured language.
    pub async fn get_entities<S: AsRef<str>>(
        &self,
        ids: &[S],
        resolve_properties: bool,
    ) -> WikidataResult<EntitiesResponse> {
        if ids.is_empty() {
            return Ok(EntitiesResponse::default());
        }
        if ids.len() > MAX_IDS_PER_REQUEST {
            debug!(
                "Truncating entity lookup from {} to {} ids",
                ids.len(),
                MAX_IDS_PER_REQUEST
            );
        }

        let ids: Vec<String> = ids
            .iter()
            .take(MAX_IDS_PER_REQUEST)
            .map(|id| id.as_ref().to_string())
            .collect();
        if let Some(bad) = ids.iter().find(|id| id.is_empty() || id.contains('|')) {
            return Err(WikidataError::InvalidArgument(format!(
                "entity ids must be non-empty strings without '|', got {bad:?}"
            )));
        }

        let language = self.config.language.as_str();
        let query = entities_query(&self.config.get_action, language, &ids, ENTITY_PROPS);
        let payload = self
            .transport
            .get(&self.config.endpoint(), &query)
            .await?
            .into_json()?;

        let records = payload
            .get("entities")
            .and_then(Value::as_object)
            .ok_or_else(|| malformed(&payload, "entities"))?;

        let entities: Vec<Entity> = records
            .values()
            .filter_map(|raw| extract_entity(raw, language))
            .collect();

        if !resolve_properties {
            return Ok(EntitiesResponse { entities });
        }

        let cache = self.resolver.cache();
        let mut refs = ReferenceSet::new();
        let pending: Vec<PendingEntity> = entities
            .into_iter()
            .map(|entity| PendingEntity::prepare(entity, cache, &mut refs))
            .collect();

        if refs.is_empty() {
            debug!("All claim references served from cache");
        } else {
            info!("Resolving {} property/item ids", refs.len());
            self.resolver.resolve(&mut refs, language).await?;
        }

        let entities = pending.into_iter().map(|p| p.finish(cache)).collect();
        Ok(EntitiesResponse { entities })
    }

    /// Empties the property cache.
    pub fn clear_property_cache(&self) {
        self.resolver.cache().clear();
    }
}
