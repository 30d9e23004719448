//! HTTP client for the external results backend.
//!
//! All dashboard data lives in a separate backend service; this module is
//! the only place that talks to it. Authenticated calls take an explicit
//! [`BackendToken`] rather than reading any ambient token store, so the
//! client stays testable without a simulated session environment.

mod admin;
mod auth;
mod results;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::BackendToken;
use crate::config::Config;
use crate::error::{AppError, AppResult};

/// HTTP connect timeout applied when the config carries no override.
const DEFAULT_CONNECT_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(5);
/// HTTP total timeout applied when the config carries no override.
const DEFAULT_REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

/// Client for the results backend REST API.
///
/// Cheap to clone; the underlying `reqwest::Client` is reference-counted.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Build a client from configuration.
    pub fn new(config: &Config) -> AppResult<Self> {
        let connect_timeout = if config.connect_timeout_secs > 0 {
            std::time::Duration::from_secs(config.connect_timeout_secs)
        } else {
            DEFAULT_CONNECT_TIMEOUT
        };
        let request_timeout = if config.request_timeout_secs > 0 {
            std::time::Duration::from_secs(config.request_timeout_secs)
        } else {
            DEFAULT_REQUEST_TIMEOUT
        };

        let http = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| AppError::Backend(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.backend_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client directly from a base URL (tests, readiness probes).
    pub fn with_base_url(base_url: &str) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .timeout(DEFAULT_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Backend(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Check that the backend is reachable at all.
    ///
    /// Any HTTP response counts as reachable; only transport failures are
    /// reported.
    pub async fn ping(&self) -> AppResult<()> {
        self.http.get(&self.base_url).send().await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` and decode the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        token: &BackendToken,
    ) -> AppResult<T> {
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .bearer_auth(token.expose())
            .send()
            .await?;
        decode_response(response).await
    }

    /// POST `body` as JSON to `path` and decode the JSON response.
    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&BackendToken>,
    ) -> AppResult<T> {
        let mut request = self.http.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token.expose());
        }
        decode_response(request.send().await?).await
    }

    /// DELETE `path` with a JSON body and decode the JSON response.
    pub(crate) async fn delete_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: &BackendToken,
    ) -> AppResult<T> {
        let response = self
            .http
            .delete(self.url(path))
            .json(body)
            .bearer_auth(token.expose())
            .send()
            .await?;
        decode_response(response).await
    }
}

/// Decode a backend response, mapping non-2xx statuses to [`AppError`].
async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }
    Err(error_from_response(status, response).await)
}

/// Extract an error message from a backend error body.
///
/// The backend reports errors as `{"message": ...}` or `{"detail": ...}`;
/// anything else falls back to the HTTP status. A 401 becomes
/// [`AppError::Unauthorized`] so callers can drop the browser session.
async fn error_from_response(status: StatusCode, response: reqwest::Response) -> AppError {
    let message = response
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|body| {
            body.get("message")
                .or_else(|| body.get("detail"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

    if status == StatusCode::UNAUTHORIZED {
        AppError::Unauthorized(message)
    } else {
        AppError::Upstream(status.as_u16(), message)
    }
}
