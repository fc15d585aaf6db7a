//! HTTP client construction, auth headers, and status mapping.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::LensError;

/// Build a reqwest client whose per-request timeout is `timeout`.
pub fn build_client(timeout: Duration) -> Result<reqwest::Client, LensError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| LensError::Configuration(format!("Failed to build HTTP client: {e}")))
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {token}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Map a non-success HTTP status to an error.
pub fn status_to_error(status: u16, body: &str) -> LensError {
    match status {
        401 | 403 => LensError::Authentication(error_message(body)),
        429 => LensError::RateLimited {
            retry_after_ms: extract_retry_after(body),
        },
        _ => LensError::api(status, error_message(body)),
    }
}

/// Map a send failure, surfacing client timeouts as `Timeout`.
pub fn transport_error(error: reqwest::Error, timeout: Duration) -> LensError {
    if error.is_timeout() {
        LensError::Timeout(timeout.as_millis() as u64)
    } else {
        LensError::Network(error)
    }
}

pub fn trim_trailing_slash(url: &str) -> &str {
    url.trim_end_matches('/')
}

// Google errors look like {"error": {"code": 400, "message": "...", "status": "..."}}
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

fn extract_retry_after(body: &str) -> Option<u64> {
    // RetryInfo detail carries e.g. "retryDelay": "1.5s"
    let value = serde_json::from_str::<serde_json::Value>(body).ok()?;
    value
        .get("error")?
        .get("details")?
        .as_array()?
        .iter()
        .find_map(|detail| detail.get("retryDelay")?.as_str())
        .and_then(|delay| delay.strip_suffix('s')?.parse::<f64>().ok())
        .map(|secs| (secs * 1000.0) as u64)
}
