//! HTTP client for the dashboard backend.
//!
//! One request core attaches the bearer token from the session accessor,
//! serializes JSON bodies (the bulk upload path goes through multipart
//! instead), and normalizes every non-success response into [`ApiError`].
//! Endpoint wrappers live in the submodules, grouped by backend surface.

pub mod auth;
pub mod bulk;
pub mod jobs;
pub mod pages;
pub mod templates;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use common::errors::error_detail;

use crate::session;

/// Normalized failure of a backend call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered with a non-success status. The payload already
    /// carries the extracted detail and status code.
    #[error("{0}")]
    Status(String),
    /// The request never produced a response (network unreachable, CORS,
    /// aborted).
    #[error("request failed: {0}")]
    Network(String),
    /// The response body did not decode into the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Compile-time override for deployments serving the API from another
/// origin; relative same-origin paths otherwise.
fn api_url(path: &str) -> String {
    format!("{}{}", option_env!("DASHBOARD_API_URL").unwrap_or(""), path)
}

fn authorize(builder: RequestBuilder) -> RequestBuilder {
    match session::access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

pub(crate) async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    log_request("GET", path);
    let response = authorize(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    decode("GET", path, response).await
}

pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send_with_body(Request::post(&api_url(path)), "POST", path, body).await
}

pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send_with_body(Request::put(&api_url(path)), "PUT", path, body).await
}

pub(crate) async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    log_request("DELETE", path);
    let response = authorize(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    decode("DELETE", path, response).await
}

/// Multipart upload path; the body is a prepared `FormData` and is never
/// JSON-serialized.
pub(crate) async fn post_multipart<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
) -> Result<T, ApiError> {
    log_request("POST", path);
    let request = authorize(Request::post(&api_url(path)))
        .body(form)
        .map_err(|err| ApiError::Network(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    decode("POST", path, response).await
}

async fn send_with_body<B: Serialize, T: DeserializeOwned>(
    builder: RequestBuilder,
    method: &str,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    log_request(method, path);
    let request = authorize(builder)
        .json(body)
        .map_err(|err| ApiError::Network(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    decode(method, path, response).await
}

async fn decode<T: DeserializeOwned>(
    method: &str,
    path: &str,
    response: Response,
) -> Result<T, ApiError> {
    log_response(method, path, &response);
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status(error_detail(
            response.status(),
            &response.status_text(),
            &body,
        )));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

// Redacted request/response diagnostics, debug builds only.

#[cfg(debug_assertions)]
fn log_request(method: &str, path: &str) {
    let auth = if session::access_token().is_some() {
        "Bearer [redacted]"
    } else {
        "none"
    };
    gloo_console::debug!(format!("[api] {method} {path} auth={auth}"));
}

#[cfg(not(debug_assertions))]
fn log_request(_method: &str, _path: &str) {}

#[cfg(debug_assertions)]
fn log_response(method: &str, path: &str, response: &Response) {
    gloo_console::debug!(format!(
        "[api] {method} {path} -> {} {}",
        response.status(),
        response.status_text()
    ));
}

#[cfg(not(debug_assertions))]
fn log_response(_method: &str, _path: &str, _response: &Response) {}
