//! Best-effort enrichment of the upstream ranked list.
//!
//! A request moves `Fetching → (EnrichingBestEffort | EnrichmentSkipped) → Returned`
//! and never fails: an unreachable upstream yields an empty list, a slow
//! scraper yields the list as upstream sent it.

use crate::config::millis;
use crate::services::describe::DescriptionBatch;
use crate::services::upstream::ListSource;
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How one enrichment request ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichState {
    /// Upstream list could not be fetched; an empty list was returned.
    UpstreamFailed,
    /// Every token already had a description.
    Skipped,
    /// Scraping finished within the deadline.
    Enriched,
    /// Scraping missed the deadline; the list was returned unenriched.
    TimedOut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichOutcome {
    pub state: EnrichState,
    pub tokens: usize,
    pub missing: usize,
    pub enriched: usize,
    pub elapsed_ms: u64,
}

pub struct ListEnricher {
    source: Arc<dyn ListSource>,
    describer: Arc<dyn DescriptionBatch>,
    timeout: Duration,
}

impl ListEnricher {
    pub fn new(
        source: Arc<dyn ListSource>,
        describer: Arc<dyn DescriptionBatch>,
        timeout: Duration,
    ) -> Self {
        Self {
            source,
            describer,
            timeout,
        }
    }

    /// Ranked list with missing descriptions filled in where scraping succeeded.
    pub async fn get_enriched_list(&self) -> Vec<RankedToken> {
        self.get_enriched_list_with_outcome().await.0
    }

    pub async fn get_enriched_list_with_outcome(&self) -> (Vec<RankedToken>, EnrichOutcome) {
        let start = Instant::now();
        let outcome = |state, tokens, missing, enriched| EnrichOutcome {
            state,
            tokens,
            missing,
            enriched,
            elapsed_ms: millis(start.elapsed()),
        };

        let mut tokens = match self.source.fetch_list().await {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(error = %e, "ranked list unavailable, returning empty list");
                return (Vec::new(), outcome(EnrichState::UpstreamFailed, 0, 0, 0));
            }
        };

        let missing: Vec<TokenId> = tokens
            .iter()
            .filter(|t| t.needs_description())
            .map(|t| t.address.clone())
            .collect();

        if missing.is_empty() {
            let total = tokens.len();
            info!(tokens = total, "all tokens described, enrichment skipped");
            return (tokens, outcome(EnrichState::Skipped, total, 0, 0));
        }

        let described =
            match tokio::time::timeout(self.timeout, self.describer.describe_many(&missing)).await {
                Ok(described) => described,
                Err(_) => {
                    warn!(
                        missing = missing.len(),
                        timeout_ms = millis(self.timeout),
                        "description scraping timed out, returning unenriched list"
                    );
                    let total = tokens.len();
                    return (
                        tokens,
                        outcome(EnrichState::TimedOut, total, missing.len(), 0),
                    );
                }
            };

        let enriched = apply_descriptions(&mut tokens, &described);
        info!(
            tokens = tokens.len(),
            missing = missing.len(),
            enriched,
            "ranked list enriched"
        );
        let total = tokens.len();
        (
            tokens,
            outcome(EnrichState::Enriched, total, missing.len(), enriched),
        )
    }
}

/// Attach scraped descriptions to tokens lacking one. Returns how many were filled.
fn apply_descriptions(
    tokens: &mut [RankedToken],
    described: &std::collections::HashMap<TokenId, String>,
) -> usize {
    let mut filled = 0;
    for token in tokens.iter_mut().filter(|t| t.needs_description()) {
        if let Some(text) = described.get(&token.address) {
            if text != NO_DESCRIPTION && !text.trim().is_empty() {
                token.description = Some(text.clone());
                filled += 1;
            }
        }
    }
    filled
}
