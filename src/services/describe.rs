//! Token description scraping: fetch the token page, extract, cache.

use crate::config::{millis, ScraperConfig};
use crate::services::cache::TokenCache;
use crate::tools::batch::batch_settled;
use crate::tools::extract::{extract_description_with, DescriptionFilter};
use crate::tools::fetch::{token_page_url, PageFetcher};
use crate::types::*;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Recorded for pages that loaded but held no acceptable description.
pub const NOT_FOUND_MESSAGE: &str = "no description found";

/// Fills in descriptions for a set of tokens.
///
/// Every requested id appears in the returned map, either with a description or
/// with [`NO_DESCRIPTION`]. Implementations never fail as a whole.
#[async_trait]
pub trait DescriptionBatch: Send + Sync {
    async fn describe_many(&self, ids: &[TokenId]) -> HashMap<TokenId, String>;
}

pub struct TokenScraper {
    fetcher: Arc<dyn PageFetcher>,
    cache: Arc<TokenCache>,
    page_base_url: String,
    request_timeout: Duration,
    batch_size: Option<usize>,
    batch_delay: Duration,
    filter: DescriptionFilter,
}

impl TokenScraper {
    pub fn new(fetcher: Arc<dyn PageFetcher>, cache: Arc<TokenCache>, cfg: &ScraperConfig) -> Self {
        Self {
            fetcher,
            cache,
            page_base_url: cfg.page_base_url.clone(),
            request_timeout: cfg.request_timeout(),
            batch_size: cfg.batch_size,
            batch_delay: cfg.batch_delay(),
            filter: cfg.description_filter(),
        }
    }

    pub fn cache(&self) -> &TokenCache {
        &self.cache
    }

    /// Scrape one token, consulting the cache first.
    ///
    /// At most one page fetch happens per id until the entry is evicted.
    pub async fn scrape(&self, id: &str) -> ScrapeResult {
        if let Some(cached) = self.cache.get(id) {
            debug!(token = id, failed = cached.is_error(), "scrape cache hit");
            return cached;
        }

        let result = self.scrape_uncached(id).await;
        self.cache.put(id, result.clone());
        result
    }

    async fn scrape_uncached(&self, id: &str) -> ScrapeResult {
        let url = match token_page_url(&self.page_base_url, id) {
            Ok(url) => url,
            Err(e) => {
                warn!(token = id, error = %e, "cannot build token page url");
                return ScrapeResult::Error(e);
            }
        };

        let fetched = tokio::time::timeout(self.request_timeout, self.fetcher.fetch_html(&url)).await;
        let html = match fetched {
            Ok(Ok(html)) => html,
            Ok(Err(e)) => {
                warn!(token = id, error = %e, "token page fetch failed");
                return ScrapeResult::Error(e.to_string());
            }
            Err(_) => {
                let e = FetchError::Timeout {
                    url,
                    timeout_ms: millis(self.request_timeout),
                };
                warn!(token = id, error = %e, "token page fetch timed out");
                return ScrapeResult::Error(e.to_string());
            }
        };

        match extract_description_with(&html, &self.filter) {
            Some(description) => {
                debug!(token = id, chars = description.chars().count(), "description found");
                ScrapeResult::Description(description)
            }
            None => {
                debug!(token = id, "no description on page");
                ScrapeResult::Error(NOT_FOUND_MESSAGE.to_string())
            }
        }
    }
}

#[async_trait]
impl DescriptionBatch for TokenScraper {
    async fn describe_many(&self, ids: &[TokenId]) -> HashMap<TokenId, String> {
        let ids: Vec<TokenId> = crate::dedupe!(ids.iter().cloned());
        if ids.is_empty() {
            return HashMap::new();
        }

        let total = ids.len();
        let batch_size = self.batch_size.unwrap_or(total);
        let start = Instant::now();

        let results = batch_settled(ids, batch_size, self.batch_delay, |id| async move {
            let result = self.scrape(&id).await;
            (id, result)
        })
        .await;

        let found = results
            .iter()
            .filter(|(_, r)| r.description().is_some())
            .count();
        info!(
            processed = total,
            found,
            elapsed_ms = millis(start.elapsed()),
            "token descriptions scraped"
        );

        results
            .into_iter()
            .map(|(id, result)| (id, result.into_display()))
            .collect()
    }
}
