//! Heuristics deciding whether scraped text reads like a token description.

use crate::config::DEFAULT_MAX_DESCRIPTION_LEN;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Relative timestamps ("5 minutes ago", "3h ago", "just now") are the bulk of
/// the noise on token pages.
static RELATIVE_TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:\d+|an?|a few|few|several)\s*(?:s|secs?|seconds?|m|mins?|minutes?|h|hrs?|hours?|d|days?|w|wks?|weeks?|mo|months?|y|yrs?|years?)\s+ago\b|\bjust now\b|\byesterday\b",
    )
    .expect("valid regex")
});

static MARKET_VOCAB_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:market cap|mkt cap|mcap|volume|bonding curve|holders?|liquidity|replies|ath|24h|price|king of the hill|created by|dev sold)\b|\$\s?\d",
    )
    .expect("valid regex")
});

static NUMERIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\d\s.,:%+\-$]+[kmbKMB]?$").expect("valid regex"));

/// Placeholder strings the page renders in place of a real description.
const EXACT_EXCLUSIONS: [&str; 3] = ["default description", "time since creation", "creation time"];

/// Interface text that never belongs to a description. Skipped for curated meta tags.
const UI_CHROME: [&str; 14] = [
    "connect wallet",
    "loading",
    "try again",
    "page not found",
    "something went wrong",
    "sign in",
    "log in",
    "sign up",
    "enable javascript",
    "accept cookies",
    "privacy policy",
    "terms of service",
    "start a new coin",
    "how it works",
];

/// Length bounds (in characters) for an acceptable description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionFilter {
    pub min_len: usize,
    pub max_len: usize,
}

impl Default for DescriptionFilter {
    fn default() -> Self {
        Self {
            min_len: 0,
            max_len: DEFAULT_MAX_DESCRIPTION_LEN,
        }
    }
}

/// Validity check with default length bounds.
///
/// `lenient` skips the UI-chrome check; use it for meta tag content only.
pub fn is_valid_description(text: &str, lenient: bool) -> bool {
    is_valid_description_with(text, lenient, &DescriptionFilter::default())
}

pub fn is_valid_description_with(text: &str, lenient: bool, filter: &DescriptionFilter) -> bool {
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    let len = text.chars().count();
    if len < filter.min_len || len > filter.max_len {
        return false;
    }

    if RELATIVE_TIME_REGEX.is_match(text) {
        return false;
    }

    let lower = text.to_lowercase();
    if EXACT_EXCLUSIONS.contains(&lower.as_str()) {
        return false;
    }

    if !lenient && UI_CHROME.iter().any(|phrase| lower.contains(phrase)) {
        return false;
    }

    true
}

/// Stricter check for free page text: must also read like a sentence.
pub fn is_valid_text_block(text: &str) -> bool {
    is_valid_text_block_with(text, &DescriptionFilter::default())
}

pub fn is_valid_text_block_with(text: &str, filter: &DescriptionFilter) -> bool {
    if !is_valid_description_with(text, false, filter) {
        return false;
    }

    let text = text.trim();
    if text.split_whitespace().count() <= 2 {
        return false;
    }
    if NUMERIC_REGEX.is_match(text) {
        return false;
    }
    !MARKET_VOCAB_REGEX.is_match(text)
}
