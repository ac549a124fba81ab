//! Process-wide scrape cache keyed by token address.
//!
//! Entries never expire: a cached error suppresses retries exactly like a
//! cached description. Growth is unbounded, so long-lived servers should call
//! [`TokenCache::evict`] / [`TokenCache::clear`] themselves.

use crate::types::{CacheStats, ScrapeResult, TokenId};
use dashmap::DashMap;

#[derive(Debug, Default)]
pub struct TokenCache {
    entries: DashMap<TokenId, ScrapeResult>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<ScrapeResult> {
        self.entries.get(id).map(|entry| entry.value().clone())
    }

    /// Store a result; a second write for the same id replaces the first.
    pub fn put(&self, id: impl Into<TokenId>, result: ScrapeResult) {
        self.entries.insert(id.into(), result);
    }

    pub fn evict(&self, id: &str) -> Option<ScrapeResult> {
        self.entries.remove(id).map(|(_, result)| result)
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry count and cached ids, sorted for stable output.
    pub fn stats(&self) -> CacheStats {
        let mut ids: Vec<TokenId> = self.entries.iter().map(|e| e.key().clone()).collect();
        ids.sort();
        CacheStats {
            count: ids.len(),
            ids,
        }
    }
}
