//! Client for the ranked-list aggregation API.

use crate::error::UpstreamListError;
use crate::types::RankedToken;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL, PRAGMA};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

const LIST_TIMEOUT_MS: u64 = 10_000;

/// Where ranked token lists come from.
#[async_trait]
pub trait ListSource: Send + Sync {
    /// Current ranked list. Never served from a cache.
    async fn fetch_list(&self) -> Result<Vec<RankedToken>, UpstreamListError>;

    /// Raw detail record for one token, passed through untouched.
    async fn fetch_detail(&self, address: &str) -> Result<Value, UpstreamListError>;
}

#[derive(Debug, Deserialize)]
struct RankResponse {
    rank: Vec<RankedToken>,
}

#[derive(Clone)]
pub struct AggregatorClient {
    client: Client,
    base_url: String,
}

impl AggregatorClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .gzip(true)
            .timeout(Duration::from_millis(LIST_TIMEOUT_MS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json(&self, url: &str, query: &[(&str, &str)]) -> Result<Value, UpstreamListError> {
        let response = self
            .client
            .get(url)
            .headers(no_cache_headers())
            .query(query)
            .send()
            .await
            .map_err(|e| UpstreamListError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamListError::Status(status.as_u16()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| UpstreamListError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ListSource for AggregatorClient {
    async fn fetch_list(&self) -> Result<Vec<RankedToken>, UpstreamListError> {
        let body = self.get_json(&self.endpoint("list"), &[]).await?;
        parse_rank(body)
    }

    async fn fetch_detail(&self, address: &str) -> Result<Value, UpstreamListError> {
        self.get_json(&self.endpoint("detail"), &[("address", address)])
            .await
    }
}

/// Decode `{"rank": [...]}` into tokens.
pub fn parse_rank(body: Value) -> Result<Vec<RankedToken>, UpstreamListError> {
    serde_json::from_value::<RankResponse>(body)
        .map(|r| r.rank)
        .map_err(|e| UpstreamListError::Decode(e.to_string()))
}

fn no_cache_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::fetch::test_server::{json_response, serve_once, Reply};
    use serde_json::json;

    #[test]
    fn parse_rank_reads_tokens() {
        let body = json!({
            "rank": [
                { "address": "X", "name": "Ex", "symbol": "X", "description": "" },
                { "address": "Y", "name": "Why", "symbol": "Y", "description": "Existing text",
                  "usd_market_cap": 1234.5, "telegram": "https://t.me/y" }
            ]
        });
        let tokens = parse_rank(body).unwrap();
        assert_eq!(tokens.len(), 2);
        assert!(tokens[0].needs_description());
        assert_eq!(tokens[1].description.as_deref(), Some("Existing text"));
        assert_eq!(tokens[1].telegram.as_deref(), Some("https://t.me/y"));
    }

    #[test]
    fn parse_rank_rejects_wrong_shape() {
        assert!(matches!(
            parse_rank(json!({ "tokens": [] })),
            Err(UpstreamListError::Decode(_))
        ));
        assert!(matches!(
            parse_rank(json!({ "rank": [{ "name": "no address" }] })),
            Err(UpstreamListError::Decode(_))
        ));
        assert!(matches!(parse_rank(json!([])), Err(UpstreamListError::Decode(_))));
    }

    #[test]
    fn endpoints_join_cleanly() {
        let client = AggregatorClient::new("https://agg.example.com/api/").unwrap();
        assert_eq!(client.endpoint("list"), "https://agg.example.com/api/list");
        assert_eq!(client.endpoint("detail"), "https://agg.example.com/api/detail");
    }

    #[test]
    fn requests_disable_caching() {
        let headers = no_cache_headers();
        assert_eq!(headers.get(CACHE_CONTROL).unwrap(), "no-cache");
        assert_eq!(headers.get(PRAGMA).unwrap(), "no-cache");
    }

    #[tokio::test]
    async fn fetch_list_reads_rank_and_disables_caching() {
        let body = r#"{"rank":[{"address":"X","name":"Ex","symbol":"X","description":""}]}"#;
        let (base, server) = serve_once(Reply::Raw(json_response("200 OK", body))).await;
        let client = AggregatorClient::new(format!("{base}/api")).unwrap();

        let tokens = client.fetch_list().await.unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].address, "X");

        let request = server.await.unwrap();
        assert!(request.starts_with("get /api/list http/1.1"));
        assert!(request.contains("cache-control: no-cache"));
        assert!(request.contains("pragma: no-cache"));
    }

    #[tokio::test]
    async fn fetch_list_maps_server_error_to_status() {
        let (base, _server) =
            serve_once(Reply::Raw(json_response("500 Internal Server Error", "{}"))).await;
        let client = AggregatorClient::new(base).unwrap();

        assert_eq!(
            client.fetch_list().await,
            Err(UpstreamListError::Status(500))
        );
    }

    #[tokio::test]
    async fn fetch_list_rejects_body_without_rank() {
        let (base, _server) =
            serve_once(Reply::Raw(json_response("200 OK", r#"{"tokens":[]}"#))).await;
        let client = AggregatorClient::new(base).unwrap();

        assert!(matches!(
            client.fetch_list().await,
            Err(UpstreamListError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn fetch_list_rejects_non_json_body() {
        let (base, _server) =
            serve_once(Reply::Raw(json_response("200 OK", "<html>oops</html>"))).await;
        let client = AggregatorClient::new(base).unwrap();

        assert!(matches!(
            client.fetch_list().await,
            Err(UpstreamListError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn fetch_detail_passes_address_as_query() {
        let body = r#"{"address":"Cat111","holders":7}"#;
        let (base, server) = serve_once(Reply::Raw(json_response("200 OK", body))).await;
        let client = AggregatorClient::new(base).unwrap();

        let detail = client.fetch_detail("Cat111").await.unwrap();
        assert_eq!(detail["holders"], 7);

        let request = server.await.unwrap();
        assert!(request.starts_with("get /detail?address=cat111 http/1.1"));
    }
}
