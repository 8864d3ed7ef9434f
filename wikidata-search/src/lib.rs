//! Wikidata entity search and lookup client.
//!
//! Search entities by text, then fetch their labels, descriptions and
//! claims, optionally resolving the property and item ids inside claims
//! into human-readable labels.
//!
//! # Components
//!
//! - **Claims**: decodes raw claim groups into `(property, value, type)` triplets
//! - **Resolver**: batches unresolved ids (50 per request) and rewrites claims
//! - **Cache**: id → label map shared across calls, never invalidated
//! - **Transport**: HTTP GET seam, `reqwest` by default
//!
//! # Example
//!
//! ```no_run
//! use wikidata_search::{WikidataClient, WikidataConfig};
//!
//! # async fn run() -> wikidata_search::WikidataResult<()> {
//! let client = WikidataClient::new(WikidataConfig::default())?;
//!
//! let found = client.search(&client.search_options("New York Mets")).await?;
//! let ids: Vec<&str> = found.results.iter().map(|r| r.id.as_str()).take(1).collect();
//!
//! let details = client.get_entities(&ids, true).await?;
//! for entity in details.entities {
//!     println!("{}: {} claims", entity.label, entity.claims.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod claims;
mod client;
mod config;
mod error;
mod request;
pub mod resolver;
pub mod transport;

pub use cache::PropertyCache;
pub use claims::{decode_value, extract_entity, ClaimValue, DIMENSIONLESS_UNIT};
pub use client::{EntitiesResponse, SearchResponse, WikidataClient};
pub use config::{SearchOptions, WikidataConfig, MAX_IDS_PER_REQUEST};
pub use error::{WikidataError, WikidataResult};
pub use request::{ENTITY_PROPS, LABEL_PROPS};
pub use resolver::{ClaimStatus, PendingEntity, PropertyResolver, ReferenceSet};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport, ResponseBody};

pub use wikidata_types::{Claim, Entity, EntityType, SearchResult, ValueKind};
