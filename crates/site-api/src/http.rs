//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks so endpoint modules only build requests
//! and map bodies. A 403 whose message mentions "READ access" becomes
//! [`ApiError::ReadPermissionDenied`]; every other non-success status
//! becomes [`ApiError::Api`].

use serde::Deserialize;

use crate::error::ApiError;

const READ_DENIED_MARKER: &str = "READ access";

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Check an HTTP response for error statuses, returning it unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    let message = extract_message(&body);
    Err(classify(status.as_u16(), message))
}

/// Pull `message` out of a JSON error body, falling back to the raw text.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| body.trim().to_string())
}

fn classify(status: u16, message: String) -> ApiError {
    if status == 403 && message.contains(READ_DENIED_MARKER) {
        ApiError::ReadPermissionDenied { message }
    } else {
        ApiError::Api { status, message }
    }
}
