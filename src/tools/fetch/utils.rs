use reqwest::StatusCode;

/// Short human reason for a non-success status.
pub(crate) fn status_reason(status: StatusCode) -> &'static str {
    match status {
        StatusCode::TOO_MANY_REQUESTS => "rate limited",
        StatusCode::FORBIDDEN => "forbidden",
        StatusCode::NOT_FOUND => "not found",
        StatusCode::UNAUTHORIZED => "unauthorized",
        StatusCode::BAD_REQUEST => "bad request",
        s if s.is_server_error() => "server error",
        s if s.is_redirection() => "unfollowed redirect",
        _ => "unexpected status",
    }
}

/// Token page URL for an address: `<base>/<address>`.
pub(crate) fn token_page_url(base: &str, address: &str) -> Result<String, String> {
    let address = address.trim().trim_matches('/');
    if address.is_empty() {
        return Err("empty token address".into());
    }
    let joined = if base.ends_with('/') {
        format!("{base}{address}")
    } else {
        format!("{base}/{address}")
    };
    url::Url::parse(&joined)
        .map(|u| u.to_string())
        .map_err(|e| format!("{joined}: {e}"))
}
