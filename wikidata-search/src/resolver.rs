//! Property resolution: turning property and item ids inside claims into
//! labels.
//!
//! Resolution runs in three steps:
//!
//! 1. [`PendingEntity::prepare`] checks every claim against the cache. Hits
//!    are recorded in a per-claim [`ClaimStatus`]; misses go into a shared
//!    [`ReferenceSet`].
//! 2. [`PropertyResolver::resolve`] drains the reference set in batches of
//!    at most [`MAX_IDS_PER_REQUEST`], one request at a time, writing every
//!    returned label into the cache.
//! 3. [`PendingEntity::finish`] merges the status table and the cache into
//!    the final claims.
//!
//! Ids without a label in the requested language stay as raw ids.

use serde_json::Value;
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use tracing::{debug, warn};
use wikidata_types::{Claim, Entity, ValueKind};

use crate::cache::PropertyCache;
use crate::claims::language_value;
use crate::config::{WikidataConfig, MAX_IDS_PER_REQUEST};
use crate::error::WikidataResult;
use crate::request::{entities_query, LABEL_PROPS};
use crate::transport::HttpTransport;

/// Distinct ids awaiting resolution, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceSet {
    pending: VecDeque<String>,
    seen: HashSet<String>,
}

impl ReferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` unless it has already been added. Returns whether it was new.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if !self.seen.insert(id.clone()) {
            return false;
        }
        self.pending.push_back(id);
        true
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes and returns up to `max` ids from the front.
    pub fn take_batch(&mut self, max: usize) -> Vec<String> {
        let n = max.min(self.pending.len());
        self.pending.drain(..n).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

/// Where one side of a claim stands after the cache check.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Side {
    /// Label was already cached when the claim was prepared.
    Cached(String),
    /// Id was queued for lookup.
    Pending,
    /// Not an identifier; kept verbatim.
    Literal,
}

impl Side {
    fn check(id: &str, cache: &PropertyCache, refs: &mut ReferenceSet) -> Self {
        match cache.get(id) {
            Some(label) => Self::Cached(label),
            None => {
                refs.insert(id);
                Self::Pending
            }
        }
    }

    fn is_resolved(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Final text for this side, or `None` to keep the raw id.
    fn into_label(self, id: &str, cache: &PropertyCache) -> Option<String> {
        match self {
            Self::Cached(label) => Some(label),
            Self::Pending => cache.get(id),
            Self::Literal => None,
        }
    }
}

/// Resolution bookkeeping for one claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimStatus {
    property: Side,
    value: Side,
}

impl ClaimStatus {
    /// Whether the property label was available without a lookup.
    pub fn property_resolved(&self) -> bool {
        self.property.is_resolved()
    }

    /// Whether the value needed no lookup: either it was cached or it is
    /// not an item reference.
    pub fn value_resolved(&self) -> bool {
        self.value.is_resolved()
    }
}

/// An extracted entity whose claims still carry raw ids, plus the status
/// table saying which of them resolution has to fill in.
#[derive(Debug, Clone)]
pub struct PendingEntity {
    entity: Entity,
    statuses: Vec<ClaimStatus>,
}

impl PendingEntity {
    /// Checks each claim against `cache`, queueing misses into `refs`.
    pub fn prepare(entity: Entity, cache: &PropertyCache, refs: &mut ReferenceSet) -> Self {
        let statuses = entity
            .claims
            .iter()
            .map(|claim| ClaimStatus {
                property: Side::check(&claim.property, cache, refs),
                value: if claim.kind.is_reference() {
                    Side::check(&claim.value, cache, refs)
                } else {
                    Side::Literal
                },
            })
            .collect();

        Self { entity, statuses }
    }

    /// Status of each claim, in claim order.
    pub fn statuses(&self) -> &[ClaimStatus] {
        &self.statuses
    }

    /// Produces the output entity, substituting every label that was cached
    /// at preparation time or has been resolved since.
    pub fn finish(self, cache: &PropertyCache) -> Entity {
        let Entity {
            label,
            description,
            claims,
        } = self.entity;

        let claims = claims
            .into_iter()
            .zip(self.statuses)
            .map(|(claim, status)| {
                let Claim {
                    property,
                    value,
                    mut kind,
                } = claim;

                let property = status.property.into_label(&property, cache).unwrap_or(property);
                let value = match status.value.into_label(&value, cache) {
                    Some(label) => {
                        kind = ValueKind::String;
                        label
                    }
                    None => value,
                };

                Claim {
                    property,
                    value,
                    kind,
                }
            })
            .collect();

        Entity {
            label,
            description,
            claims,
        }
    }
}

/// Fetches labels for ids in batches and stores them in the cache.
pub struct PropertyResolver {
    transport: Arc<dyn HttpTransport>,
    endpoint: String,
    action: String,
    cache: PropertyCache,
}

impl PropertyResolver {
    pub fn new(transport: Arc<dyn HttpTransport>, config: &WikidataConfig, cache: PropertyCache) -> Self {
        Self {
            transport,
            endpoint: config.endpoint(),
            action: config.get_action.clone(),
            cache,
        }
    }

    pub fn cache(&self) -> &PropertyCache {
        &self.cache
    }

    /// Resolves every id in `refs`, consuming it.
    ///
    /// Batches are sent one after another. The first failing batch aborts
    /// the loop; labels written by earlier batches stay in the cache.
    pub async fn resolve(&self, refs: &mut ReferenceSet, language: &str) -> WikidataResult<()> {
        let total = refs.len();
        let mut batches = 0usize;

        while !refs.is_empty() {
            let batch = refs.take_batch(MAX_IDS_PER_REQUEST);
            let written = self.resolve_batch(&batch, language).await?;
            batches += 1;
            debug!(
                "Resolved {}/{} labels in batch {} ({} remaining)",
                written,
                batch.len(),
                batches,
                refs.len()
            );
        }

        debug!("Resolved {} ids in {} batches", total, batches);
        Ok(())
    }

    async fn resolve_batch(&self, ids: &[String], language: &str) -> WikidataResult<usize> {
        let query = entities_query(&self.action, language, ids, LABEL_PROPS);
        let payload = self.transport.get(&self.endpoint, &query).await?.into_json()?;

        let Some(records) = payload.get("entities").and_then(Value::as_object) else {
            warn!("Label lookup returned no entities for {} ids", ids.len());
            return Ok(0);
        };

        let mut written = 0;
        for record in records.values() {
            let id = record.get("id").and_then(Value::as_str).filter(|s| !s.is_empty());
            let label = language_value(record.get("labels"), language).filter(|s| !s.is_empty());
            if let (Some(id), Some(label)) = (id, label) {
                self.cache.insert(id, label);
                written += 1;
            }
        }
        Ok(written)
    }
}
