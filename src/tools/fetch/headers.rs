use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

/// Chrome on Windows, the most common desktop fingerprint.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Header pairs a desktop Chrome sends on a top-level navigation (without User-Agent).
///
/// Accept-Encoding is left to reqwest so responses are still decompressed.
///
/// Token pages serve a reduced bot-facing document without these.
const BROWSER_HEADERS: [(&str, &str); 11] = [
    ("accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7"),
    ("accept-language", "en-US,en;q=0.9"),
    ("cache-control", "no-cache"),
    ("upgrade-insecure-requests", "1"),
    ("sec-fetch-dest", "document"),
    ("sec-fetch-mode", "navigate"),
    ("sec-fetch-site", "none"),
    ("sec-fetch-user", "?1"),
    ("sec-ch-ua", "\"Google Chrome\";v=\"131\", \"Chromium\";v=\"131\", \"Not_A Brand\";v=\"24\""),
    ("sec-ch-ua-mobile", "?0"),
    ("sec-ch-ua-platform", "\"Windows\""),
];

/// Build the full browser header map, including User-Agent.
pub(crate) fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    for (k, v) in BROWSER_HEADERS {
        if let Ok(val) = HeaderValue::from_str(v) {
            headers.insert(HeaderName::from_static(k), val);
        }
    }

    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers
}
