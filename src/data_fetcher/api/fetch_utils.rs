//! Generic HTTP fetching with status mapping and apifootball error detection

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use super::urls::redact_api_key;
use crate::data_fetcher::models::UpstreamError;
use crate::error::AppError;

/// Issues one GET request and parses the JSON body.
///
/// There is no retry and no caching: a failure is logged and returned as is.
/// Errors carry the redacted URL, never the API key.
///
/// # Errors
/// * HTTP status codes map to `ApiNotFound`, `ApiRateLimit`, `ApiClientError`,
///   `ApiServerError` or `ApiServiceUnavailable`
/// * A `{"error": .., "message": ..}` body maps to `ApiUpstream`
/// * An empty body, non-JSON, or JSON of the wrong shape map to `ApiNoData`,
///   `ApiMalformedJson` and `ApiUnexpectedStructure`
#[instrument(skip(client, url), fields(url = %redact_api_key(url)))]
pub(super) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    let safe_url = redact_api_key(url);
    info!("Fetching data from URL: {safe_url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            let e = e.without_url();
            error!("Request failed for URL {}: {}", safe_url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(safe_url)
            } else if e.is_connect() {
                AppError::network_connection(safe_url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {} - {} (URL: {})", status_code, reason, safe_url);

        return Err(match status_code {
            404 => AppError::api_not_found(safe_url),
            429 => AppError::api_rate_limit(reason, safe_url),
            400..=499 => AppError::api_client_error(status_code, reason, safe_url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, safe_url),
            _ => AppError::api_server_error(status_code, reason, safe_url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            let e = e.without_url();
            error!("Failed to read response text from URL {}: {}", safe_url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    parse_body(&response_text, &safe_url)
}

/// Parses a response body, recognising the apifootball error object first.
pub(super) fn parse_body<T: DeserializeOwned>(body: &str, safe_url: &str) -> Result<T, AppError> {
    let trimmed = body.trim_start();

    if trimmed.starts_with('{')
        && let Ok(upstream) = serde_json::from_str::<UpstreamError>(trimmed)
    {
        error!(
            "API reported error {}: {} (URL: {})",
            upstream.error, upstream.message, safe_url
        );
        return Err(AppError::api_upstream(upstream.error, upstream.message, safe_url));
    }

    match serde_json::from_str::<T>(body) {
        Ok(parsed) => Ok(parsed),
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, safe_url);
            error!(
                "Response text (first 200 chars): {}",
                body.chars().take(200).collect::<String>()
            );

            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", safe_url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json("Response is not valid JSON", safe_url))
            } else {
                Err(AppError::api_unexpected_structure(e.to_string(), safe_url))
            }
        }
    }
}
