use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use crate::error::*;

/// Blockchain address identifying one listed token.
pub type TokenId = String;

/// Shown in place of a description when scraping produced nothing usable.
pub const NO_DESCRIPTION: &str = "No description available";

/// Outcome of one scrape, cached per token for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeResult {
    Description(String),
    Error(String),
}

impl ScrapeResult {
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Description(d) => Some(d.as_str()),
            Self::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Description text, or the placeholder for any error outcome.
    pub fn into_display(self) -> String {
        match self {
            Self::Description(d) => d,
            Self::Error(_) => NO_DESCRIPTION.to_string(),
        }
    }
}

/// One entry of the upstream ranked list.
///
/// Fields not modelled here are kept in `extra` so the record serializes back
/// out unchanged apart from an attached description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedToken {
    pub address: TokenId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_timestamp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd_market_cap: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RankedToken {
    pub fn new(address: impl Into<TokenId>) -> Self {
        Self {
            address: address.into(),
            name: String::new(),
            symbol: String::new(),
            created_timestamp: None,
            usd_market_cap: None,
            description: None,
            image_uri: None,
            twitter: None,
            telegram: None,
            website: None,
            extra: Map::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when upstream sent no description or only whitespace.
    pub fn needs_description(&self) -> bool {
        self.description
            .as_deref()
            .map(|d| d.trim().is_empty())
            .unwrap_or(true)
    }
}

/// Snapshot of the scrape cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub count: usize,
    pub ids: Vec<TokenId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }
    pub fn err(msg: impl Into<String>) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranked_token_keeps_unknown_fields() {
        let raw = r#"{
            "address": "X1",
            "name": "Cat",
            "symbol": "CAT",
            "created_timestamp": 1700000000000,
            "usd_market_cap": 4200.5,
            "description": "",
            "twitter": "https://x.com/cat",
            "reply_count": 12
        }"#;
        let token: RankedToken = serde_json::from_str(raw).unwrap();
        assert_eq!(token.address, "X1");
        assert_eq!(token.usd_market_cap, Some(4200.5));
        assert_eq!(token.extra.get("reply_count"), Some(&Value::from(12)));

        let back = serde_json::to_value(&token).unwrap();
        assert_eq!(back["reply_count"], Value::from(12));
        assert_eq!(back["twitter"], Value::from("https://x.com/cat"));
    }

    #[test]
    fn needs_description_for_missing_or_blank() {
        assert!(RankedToken::new("a").needs_description());
        assert!(RankedToken::new("a").with_description("").needs_description());
        assert!(RankedToken::new("a").with_description("   ").needs_description());
        assert!(!RankedToken::new("a").with_description("text").needs_description());
    }

    #[test]
    fn scrape_result_serializes_as_single_key_object() {
        let ok = serde_json::to_value(ScrapeResult::Description("hi".into())).unwrap();
        assert_eq!(ok, serde_json::json!({ "description": "hi" }));
        let err = serde_json::to_value(ScrapeResult::Error("boom".into())).unwrap();
        assert_eq!(err, serde_json::json!({ "error": "boom" }));
    }

    #[test]
    fn description_only_for_successful_scrapes() {
        let found = ScrapeResult::Description("cats".into());
        let failed = ScrapeResult::Error("no description found".into());
        assert_eq!(found.description(), Some("cats"));
        assert!(!found.is_error());
        assert_eq!(failed.description(), None);
        assert!(failed.is_error());
    }

    #[test]
    fn error_result_displays_placeholder() {
        assert_eq!(
            ScrapeResult::Error("timeout".into()).into_display(),
            NO_DESCRIPTION
        );
        assert_eq!(
            ScrapeResult::Description("real".into()).into_display(),
            "real"
        );
    }
}
