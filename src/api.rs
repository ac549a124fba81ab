use crate::config::ScraperConfig;
use crate::services::{
    ActivityLogger, AggregatorClient, DescriptionBatch, EnrichOutcome, EnrichState, ListEnricher,
    ListSource, TokenCache, TokenScraper,
};
use crate::tools::fetch::{PageFetcher, ReqwestFetcher};
use crate::types::*;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

/* ------------ composition root ------------ */

/// One fetcher, one cache, one scraper, one upstream client, one enricher.
pub struct Pipeline {
    config: ScraperConfig,
    cache: Arc<TokenCache>,
    scraper: Arc<TokenScraper>,
    source: Arc<dyn ListSource>,
    enricher: ListEnricher,
    activity: Option<ActivityLogger>,
}

impl Pipeline {
    pub fn new(config: ScraperConfig) -> Result<Self> {
        config.validate()?;
        let fetcher: Arc<dyn PageFetcher> = Arc::new(ReqwestFetcher::new(config.request_timeout())?);
        let source: Arc<dyn ListSource> = Arc::new(AggregatorClient::new(&config.aggregator_base_url)?);
        Ok(Self::with_parts(config, fetcher, source).with_activity_log(ActivityLogger::new().ok()))
    }

    /// Assemble a pipeline around caller-supplied page and list sources.
    pub fn with_parts(
        config: ScraperConfig,
        fetcher: Arc<dyn PageFetcher>,
        source: Arc<dyn ListSource>,
    ) -> Self {
        let cache = Arc::new(TokenCache::new());
        let scraper = Arc::new(TokenScraper::new(fetcher, Arc::clone(&cache), &config));
        let enricher = ListEnricher::new(
            Arc::clone(&source),
            Arc::clone(&scraper) as Arc<dyn DescriptionBatch>,
            config.enrich_timeout(),
        );
        Self {
            config,
            cache,
            scraper,
            source,
            enricher,
            activity: None,
        }
    }

    /// Record facade calls in `logger`; `None` disables the activity log.
    pub fn with_activity_log(mut self, logger: Option<ActivityLogger>) -> Self {
        self.activity = logger;
        self
    }

    // Activity log writes are best effort; a broken log never fails a call.
    fn log_info(&self, token: Option<&str>, event: &str, details: Option<&str>) {
        if let Some(logger) = &self.activity {
            let _ = logger.info(token, event, details);
        }
    }

    fn log_error(&self, token: Option<&str>, event: &str, details: Option<&str>) {
        if let Some(logger) = &self.activity {
            let _ = logger.error(token, event, details);
        }
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /* ------------ list + descriptions ------------ */

    /// Upstream ranked list with missing descriptions filled in. Never fails.
    pub async fn enriched_list(&self) -> Vec<RankedToken> {
        let (tokens, outcome) = self.enricher.get_enriched_list_with_outcome().await;
        self.log_outcome(&outcome);
        tokens
    }

    /// Descriptions for `ids`; failed tokens map to the placeholder text.
    pub async fn describe(&self, ids: &[TokenId]) -> HashMap<TokenId, String> {
        let start_time = Instant::now();
        let described = self.scraper.describe_many(ids).await;
        let found = described.values().filter(|d| *d != NO_DESCRIPTION).count();
        let details = format!(
            "{found}/{} described in {}ms",
            described.len(),
            start_time.elapsed().as_millis()
        );
        let token = match ids {
            [only] => Some(only.as_str()),
            _ => None,
        };
        self.log_info(token, "describe", Some(&details));
        described
    }

    /// Upstream detail record, passed through untouched.
    pub async fn token_detail(&self, address: &str) -> Result<Value> {
        let start_time = Instant::now();
        let result = self.source.fetch_detail(address).await;
        let elapsed = start_time.elapsed().as_millis();
        match &result {
            Ok(_) => self.log_info(
                Some(address),
                "token_detail",
                Some(&format!("succeeded in {elapsed}ms")),
            ),
            Err(e) => self.log_error(
                Some(address),
                "token_detail",
                Some(&format!("failed in {elapsed}ms: {e}")),
            ),
        }
        Ok(result?)
    }

    /* ------------ cache maintenance ------------ */

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Drop one cached result so the next request scrapes again.
    pub fn evict(&self, id: &str) -> Option<ScrapeResult> {
        let evicted = self.cache.evict(id);
        if evicted.is_some() {
            self.log_info(Some(id), "evict", None);
        }
        evicted
    }

    pub fn clear_cache(&self) {
        let count = self.cache.len();
        self.cache.clear();
        self.log_info(None, "clear_cache", Some(&format!("{count} entries")));
    }

    fn log_outcome(&self, outcome: &EnrichOutcome) {
        let details = format!(
            "{:?}: {} tokens, {} missing, {} enriched in {}ms",
            outcome.state, outcome.tokens, outcome.missing, outcome.enriched, outcome.elapsed_ms
        );
        match outcome.state {
            EnrichState::UpstreamFailed | EnrichState::TimedOut => {
                self.log_error(None, "enriched_list", Some(&details))
            }
            EnrichState::Enriched | EnrichState::Skipped => {
                self.log_info(None, "enriched_list", Some(&details))
            }
        }
    }
}
