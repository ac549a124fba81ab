mod client;
mod headers;
#[cfg(test)]
pub(crate) mod test_server;
mod utils;

pub(crate) use utils::token_page_url;

use crate::config::millis;
use crate::error::FetchError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Source of raw token page HTML.
///
/// The scraper depends on this seam rather than on reqwest directly so that
/// tests can stand in a fake page server.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches pages over HTTP with browser-like headers.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
    timeout: Duration,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: client::build_client()?,
            timeout,
        })
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch_html(&self, url: &str) -> Result<String, FetchError> {
        fetch_with_client(&self.client, url, self.timeout).await
    }
}

/// Fetch HTML from a URL, failing on non-2xx or when nothing arrives in `timeout`.
///
/// Builds a fresh client; long-lived callers should hold a [`ReqwestFetcher`].
///
/// # Examples
/// ```no_run
/// use pumpscrape::tools::fetch::fetch_page;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), pumpscrape::FetchError> {
/// let html = fetch_page("https://pump.fun/So11111111111111111111111111111111111111112", Duration::from_secs(4)).await?;
/// # Ok(())
/// # }
/// ```
pub async fn fetch_page(url: &str, timeout: Duration) -> Result<String, FetchError> {
    let client = client::build_client().map_err(|e| FetchError::Request {
        url: url.to_string(),
        message: format!("failed to build client: {e}"),
    })?;
    fetch_with_client(&client, url, timeout).await
}

/// Dropping the request future on timeout aborts the in-flight request.
async fn fetch_with_client(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<String, FetchError> {
    match tokio::time::timeout(timeout, send(client, url)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout {
            url: url.to_string(),
            timeout_ms: millis(timeout),
        }),
    }
}

async fn send(client: &Client, url: &str) -> Result<String, FetchError> {
    let parsed = url::Url::parse(url).map_err(|_| FetchError::InvalidUrl(url.to_string()))?;

    let response = client
        .get(parsed)
        .headers(headers::browser_headers())
        .send()
        .await
        .map_err(|e| FetchError::Request {
            url: url.to_string(),
            message: format!("HTTP request failed: {e}"),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            reason: utils::status_reason(status),
        });
    }

    response.text().await.map_err(|e| FetchError::Request {
        url: url.to_string(),
        message: format!("failed to read response: {e}"),
    })
}
