//! Actix-web extractor for the browser session.
//!
//! # Security
//! - The token from the session cookie is wrapped in `SecretString`
//!   immediately and never logged or exposed in debug output
//! - Memory is zeroized when the request completes

use actix_web::dev::Payload;
use actix_web::http::StatusCode;
use actix_web::{FromRequest, HttpRequest, HttpResponse, ResponseError};
use std::future::{ready, Ready};

use super::BackendToken;
use crate::config::SESSION_COOKIE;
use crate::error::ErrorResponse;

/// Authentication error for the extractor.
#[derive(Debug)]
pub struct AuthError {
    message: String,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl ResponseError for AuthError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(StatusCode::UNAUTHORIZED).json(ErrorResponse {
            error: "UNAUTHORIZED".to_string(),
            message: self.message.clone(),
        })
    }
}

/// Extractor that requires a live browser session.
///
/// Use this in handlers that call the backend:
/// ```ignore
/// async fn protected_handler(auth: SessionAuth) -> impl Responder {
///     // auth.token is passed explicitly to the backend client
/// }
/// ```
///
/// Whether the token is still valid is the backend's call; a stale token
/// surfaces as an upstream 401 on the next request, at which point the UI
/// drops the session.
pub struct SessionAuth {
    pub token: BackendToken,
}

impl FromRequest for SessionAuth {
    type Error = AuthError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match req.cookie(SESSION_COOKIE) {
            Some(cookie) if !cookie.value().is_empty() => ready(Ok(SessionAuth {
                token: BackendToken::new(cookie.value().to_string()),
            })),
            _ => ready(Err(AuthError {
                message: "Not authenticated. Log in to continue.".to_string(),
            })),
        }
    }
}
