//! User and session models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user account as reported by the backend admin listing.
///
/// The role string is display-only; authorization decisions belong to the
/// backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserAccount {
    pub id: String,
    pub username: String,
    pub role: String,
    pub is_active: bool,
    pub created_at: String,
}

/// Credentials for login and registration.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login response from the backend.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Session state reported to the browser by GET /auth/me.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionInfo {
    pub authenticated: bool,
}
