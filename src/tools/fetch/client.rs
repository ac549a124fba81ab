use reqwest::{redirect, Client};
use std::time::Duration;

const CONNECT_TIMEOUT_MS: u64 = 3_000;
const REDIRECT_LIMIT: usize = 10;
const POOL_IDLE_TIMEOUT_SEC: u64 = 90;
const POOL_MAX_IDLE_PER_HOST: usize = 32;

/// Build the shared client used for token pages.
///
/// No overall request timeout is set here: callers bound each request
/// themselves so the deadline also covers reading the body.
pub(crate) fn build_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .cookie_store(true)
        .redirect(redirect::Policy::limited(REDIRECT_LIMIT))
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .connect_timeout(Duration::from_millis(CONNECT_TIMEOUT_MS))
        .pool_idle_timeout(Duration::from_secs(POOL_IDLE_TIMEOUT_SEC))
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .build()
}
