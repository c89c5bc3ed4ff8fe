//! API utilities for talking to the commerce backend.
//!
//! The backend is an external REST service, so the base URL is a deploy-time
//! concern: a value stored under `admin_api_base` in localStorage overrides
//! the built-in default.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

const DEFAULT_API_BASE: &str = "http://localhost:8080";
const API_BASE_STORAGE_KEY: &str = "admin_api_base";

/// Get the base URL for API requests.
pub fn api_base() -> String {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_BASE_STORAGE_KEY).ok().flatten());

    match stored {
        Some(base) if !base.trim().is_empty() => base.trim().trim_end_matches('/').to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}

/// Build a full API URL from a path.
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET a JSON payload.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST a JSON body and parse a JSON response.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST an empty body (used by endpoints that take everything from the path).
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form<T: DeserializeOwned>(path: &str, body: String) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .header("Accept", "application/json")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// PUT with no body, parsing a JSON response.
pub async fn put_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::put(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// PUT with no body, ignoring the response payload.
pub async fn put_unit(path: &str) -> Result<(), String> {
    let response = Request::put(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}

/// PATCH with no body, parsing a JSON response.
pub async fn patch_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::patch(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
