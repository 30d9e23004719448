//! Authentication endpoints of the results backend.

use serde_json::Value as JsonValue;

use crate::error::AppResult;
use crate::models::{Credentials, LoginResponse};

use super::BackendClient;

impl BackendClient {
    /// Register a new account.
    ///
    /// The backend's response body is passed through untouched; the UI
    /// only cares that the call succeeded.
    pub async fn register(&self, credentials: &Credentials) -> AppResult<JsonValue> {
        self.post_json("/auth/register", credentials, None).await
    }

    /// Exchange credentials for an access token.
    pub async fn login(&self, credentials: &Credentials) -> AppResult<LoginResponse> {
        self.post_json("/auth/login", credentials, None).await
    }
}
