//! Shared HTTP response helpers for the search provider.

use crate::error::EvidenceError;

/// Map 429 to [`EvidenceError::RateLimited`] (with `Retry-After`, default
/// 60 s) and any other non-success status to [`EvidenceError::Api`].
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, EvidenceError> {
    if resp.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after_secs = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60);
        return Err(EvidenceError::RateLimited { retry_after_secs });
    }
    if !resp.status().is_success() {
        return Err(EvidenceError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}
