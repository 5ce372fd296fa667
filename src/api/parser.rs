//! Applies the endpoint's status policy to a raw response.

use super::client::ApiResponse;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::FetchError;
use serde_json::Value;

/// Parses a page response body.
///
/// A success status yields the parsed JSON body. Any other status is a
/// rejection carrying the body as the endpoint sent it: parsed JSON when it
/// is JSON, otherwise the raw text as a JSON string.
pub fn parse_page_response(result: ApiResponse<String>) -> Result<Value, FetchError> {
    if result.status.is_success() {
        serde_json::from_str(&result.data).map_err(|source| {
            log::error!(
                "Failed to parse response from {}: {} (body: {})",
                result.url,
                source,
                preview(&result.data)
            );
            FetchError::UnreadableBody {
                status: result.status,
                source,
            }
        })
    } else {
        log::warn!("{} answered {}", result.url, result.status);
        let payload = serde_json::from_str(&result.data)
            .unwrap_or_else(|_| Value::String(result.data.clone()));
        Err(FetchError::Rejected {
            status: result.status,
            payload,
        })
    }
}

fn preview(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_PREVIEW_LENGTH) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
