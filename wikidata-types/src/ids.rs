//! Identifier helpers for Wikidata items.

/// Letter prefix of item identifiers (`Q42`).
pub const ITEM_PREFIX: char = 'Q';

/// Rebuilds an item identifier from the `numeric-id` of a
/// `wikibase-entityid` value.
///
/// The API discourages this reconstruction, but it holds for items, which
/// are the only entities `wikibase-item` claims point at.
#[must_use]
pub fn item_id(numeric_id: u64) -> String {
    format!("{ITEM_PREFIX}{numeric_id}")
}
