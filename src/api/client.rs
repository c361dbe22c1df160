//! HTTP API Client
//!
//! One function against the Fake Store API: fetch the product catalog.
//! A single attempt per call; no retry, no backoff, no timeout tuning.
//! Every failure mode (network error, non-2xx status, malformed body)
//! collapses into one user-visible error string.

use gloo_net::http::Request;

use crate::catalog::Product;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://fakestoreapi.com";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("storefront_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Fetch the full product catalog.
///
/// No headers, no auth. The response is expected to be a JSON array of
/// product objects; fields the dashboard does not consume (`rating`) are
/// dropped during deserialization.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/products", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Request failed with status {} {}",
            response.status(),
            response.status_text()
        ));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
