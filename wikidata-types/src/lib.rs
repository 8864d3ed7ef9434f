//! Core type definitions for the Wikidata search client.
//!
//! This crate defines the public data model returned to callers:
//! - Search hits and the entity type being searched for
//! - Resolved entities and their claims
//! - The value kinds a claim can carry
//! - Identifier helpers for item references
//!
//! Wire-level shapes (raw snaks, statements, API envelopes) are private to
//! `wikidata-search` and never cross this boundary.

mod claim;
mod entity;
mod ids;

pub use claim::{Claim, ValueKind};
pub use entity::{Entity, EntityType, SearchResult};
pub use ids::{item_id, ITEM_PREFIX};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing model types from strings.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown value kind: {0}")]
    UnknownValueKind(String),

    #[error("unknown entity type: {0}")]
    UnknownEntityType(String),
}
