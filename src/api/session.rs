//! Browser session routes proxying the backend's credential auth.
//!
//! The backend issues an opaque access token on login. That token is kept
//! in an HttpOnly cookie so browser scripts never see it, and every
//! backend call made on the session's behalf attaches it explicitly.
//!
//! Endpoints:
//! 1. POST /auth/register — forward registration to the backend
//! 2. POST /auth/login — exchange credentials, set the session cookie
//! 3. POST /auth/logout — clear the session cookie
//! 4. GET /auth/me — report whether a session cookie is present

use actix_web::cookie::{Cookie, SameSite};
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use tracing::info;

use crate::backend::BackendClient;
use crate::config::{Config, SESSION_COOKIE};
use crate::error::{AppError, AppResult};
use crate::models::{Credentials, SessionInfo};

/// Configure session routes.
pub fn configure_session_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(register)
        .service(login)
        .service(logout)
        .service(me);
}

/// Build the session cookie carrying the backend token.
fn session_cookie(value: String, is_production: bool) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, value);
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Lax);
    cookie.set_secure(is_production);
    cookie
}

/// Register a new account on the backend.
///
/// POST /api/v1/auth/register
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "Session",
    request_body = Credentials,
    responses(
        (status = 200, description = "Account created"),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
    )
)]
#[post("/auth/register")]
pub async fn register(
    client: web::Data<BackendClient>,
    body: web::Json<Credentials>,
) -> AppResult<HttpResponse> {
    let credentials = body.into_inner();
    if credentials.username.trim().is_empty() || credentials.password.is_empty() {
        return Err(AppError::InvalidInput(
            "username and password are required".to_string(),
        ));
    }

    let response = client.register(&credentials).await?;
    info!("Account registered: username='{}'", credentials.username);

    Ok(HttpResponse::Ok().json(response))
}

/// Log in and start a browser session.
///
/// POST /api/v1/auth/login
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "Session",
    request_body = Credentials,
    responses(
        (status = 200, description = "Session started", body = SessionInfo),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse),
    )
)]
#[post("/auth/login")]
pub async fn login(
    client: web::Data<BackendClient>,
    config: web::Data<Config>,
    body: web::Json<Credentials>,
) -> AppResult<HttpResponse> {
    let credentials = body.into_inner();
    let login = client.login(&credentials).await?;
    info!("Session started: username='{}'", credentials.username);

    let cookie = session_cookie(login.access_token, config.environment.is_production());

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(SessionInfo { authenticated: true }))
}

/// End the browser session.
///
/// The backend token is opaque and expires on its own; logout only
/// removes it from the browser.
///
/// POST /api/v1/auth/logout
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = "Session",
    responses(
        (status = 200, description = "Session cleared", body = SessionInfo),
    )
)]
#[post("/auth/logout")]
pub async fn logout(config: web::Data<Config>) -> HttpResponse {
    let cookie = session_cookie(String::new(), config.environment.is_production());

    HttpResponse::Ok()
        .cookie(cookie)
        .json(SessionInfo {
            authenticated: false,
        })
}

/// Report the current session state.
///
/// GET /api/v1/auth/me
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = "Session",
    responses(
        (status = 200, description = "Session state", body = SessionInfo),
    )
)]
#[get("/auth/me")]
pub async fn me(req: HttpRequest) -> HttpResponse {
    let authenticated = req
        .cookie(SESSION_COOKIE)
        .map(|c| !c.value().is_empty())
        .unwrap_or(false);

    HttpResponse::Ok().json(SessionInfo { authenticated })
}
