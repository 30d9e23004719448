//! Mock results backend for E2E tests.
//!
//! Starts an in-process HTTP server replicating the backend's REST
//! surface with a small fixed dataset, plus switches to inject failures
//! for individual projects and releases.

use actix_web::{delete, get, post, web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

/// The access token the mock backend accepts.
pub const ACCESS_TOKEN: &str = "e2e-access-token";

/// Credentials the mock backend's login accepts.
pub const USERNAME: &str = "jane.smith";
pub const PASSWORD: &str = "s3cret";

/// Failure injection switches.
#[derive(Default)]
pub struct MockBackendState {
    /// Project key whose release listing returns 500.
    pub fail_releases_for: Option<String>,
    /// Release id whose run listing returns 500.
    pub fail_runs_for: Option<String>,
}

/// Handle to a running mock backend.
pub struct MockBackend {
    pub base_url: String,
    state: Arc<Mutex<MockBackendState>>,
}

impl MockBackend {
    /// Start the mock backend on an ephemeral port.
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(MockBackendState::default()));

        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind");
        let port = listener.local_addr().unwrap().port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let state_data = state.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(state_data.clone()))
                .service(login)
                .service(register)
                .service(projects)
                .service(releases)
                .service(release_runs)
                .service(run_by_id)
                .service(pytest_results)
                .service(admin_create_project)
                .service(admin_projects)
                .service(admin_project_users)
                .service(admin_add_project_user)
                .service(admin_remove_project_user)
                .service(admin_create_release)
                .service(admin_releases)
                .service(admin_release_runs)
                .service(admin_users)
        })
        .listen(listener)
        .expect("failed to listen")
        .disable_signals()
        .run();

        // Fire and forget — server lives for the process lifetime
        tokio::spawn(server);

        MockBackend { base_url, state }
    }

    /// Make the release listing of one project fail with a 500.
    pub fn fail_releases_for(&self, project_key: &str) {
        self.state.lock().unwrap().fail_releases_for = Some(project_key.to_string());
    }

    /// Make the run listing of one release fail with a 500.
    pub fn fail_runs_for(&self, release_id: &str) {
        self.state.lock().unwrap().fail_runs_for = Some(release_id.to_string());
    }
}

fn authorized(req: &HttpRequest) -> bool {
    req.headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", ACCESS_TOKEN))
        .unwrap_or(false)
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({ "detail": "Not authenticated" }))
}

// ============================================================================
// Fixtures
// ============================================================================

fn project_fixtures() -> Value {
    json!([
        { "project_key": "payment-gateway", "name": "Payment Gateway" },
        { "project_key": "user-auth", "name": "User Auth Service" },
    ])
}

fn releases_for(project_key: &str) -> Value {
    match project_key {
        "payment-gateway" => json!([
            { "id": "rel-1-1", "name": "Release 3.2.0", "created_at": "2026-02-05" },
            { "id": "rel-1-2", "name": "Release 3.1.0", "created_at": "2026-01-15" },
        ]),
        "user-auth" => json!([
            { "id": "rel-2-1", "name": "Release 2.5.0", "created_at": "2026-02-08" },
        ]),
        _ => json!([]),
    }
}

fn run_fixture(
    id: &str,
    name: &str,
    run_status: &str,
    started_at: &str,
    release: &str,
    script_name: &str,
    project_key: &str,
) -> Value {
    json!({
        "id": id,
        "name": name,
        "run_status": run_status,
        "started_by": "ci-pipeline",
        "started_at": started_at,
        "release": release,
        "report_url": "#",
        "script_name": script_name,
        "duration": "15m 32s",
        "v_users": 500,
        "avg_response_time": "245ms",
        "error_rate": "0.12%",
        "throughput": "1,250 req/s",
        "project_key": project_key,
    })
}

fn runs_for(release_id: &str) -> Option<Value> {
    match release_id {
        "rel-1-1" => Some(json!([
            run_fixture(
                "run-1-1-1",
                "Checkout Flow - Peak Load",
                "passed",
                "2026-02-05T14:32:00Z",
                "rel-1-1",
                "checkout_peak_load.jmx",
                "payment-gateway",
            ),
            run_fixture(
                "run-1-1-2",
                "Payment Processing - Stress Test",
                "warning",
                "2026-02-05T15:10:00Z",
                "rel-1-1",
                "payment_stress.jmx",
                "payment-gateway",
            ),
        ])),
        "rel-1-2" => Some(json!([run_fixture(
            "run-1-2-1",
            "Checkout Flow - Baseline",
            "passed",
            "2026-01-15T10:00:00Z",
            "rel-1-2",
            "checkout_baseline.jmx",
            "payment-gateway",
        )])),
        "rel-2-1" => Some(json!([run_fixture(
            "run-2-1-1",
            "Login Flow - Spike Test",
            "failed",
            "2026-02-08T11:00:00Z",
            "rel-2-1",
            "login_spike.k6.js",
            "user-auth",
        )])),
        _ => None,
    }
}

fn all_runs() -> Vec<Value> {
    ["rel-1-1", "rel-1-2", "rel-2-1"]
        .iter()
        .filter_map(|id| runs_for(id))
        .flat_map(|v| v.as_array().unwrap().clone())
        .collect()
}

fn pytest_fixtures() -> Value {
    json!([
        {
            "id": "pytest-1",
            "name": "API Contract Suite",
            "test_status": "passed",
            "started_by": "ci-pipeline",
            "started_at": "2026-02-05T16:00:00Z",
            "release": "rel-1-1",
            "project_key": "payment-gateway",
            "total_tests": 120,
            "passed_tests": 118,
            "failed_tests": 0,
            "skipped_tests": 2,
            "success_rate": 98.3,
            "duration": "4m 12s",
            "test_cases": [
                { "name": "test_checkout_total", "status": "passed", "duration": 0.42 },
                { "name": "test_refund_flow", "status": "skipped", "duration": 0.0 },
            ],
        },
        {
            "id": "pytest-2",
            "name": "Auth Regression Suite",
            "test_status": "failed",
            "started_by": "jane.smith",
            "started_at": "2026-02-08T12:00:00Z",
            "release": "rel-2-1",
            "project_key": "user-auth",
            "total_tests": 80,
            "passed_tests": 74,
            "failed_tests": 6,
            "skipped_tests": 0,
            "success_rate": 92.5,
            "duration": "2m 40s",
            "test_cases": [
                {
                    "name": "test_token_refresh",
                    "status": "failed",
                    "duration": 1.8,
                    "error": "AssertionError: expected 200, got 401",
                },
            ],
        },
    ])
}

fn user_fixtures() -> Value {
    json!([
        {
            "id": "u-1",
            "username": "jane.smith",
            "role": "admin",
            "is_active": true,
            "created_at": "2025-11-02T09:00:00Z",
        },
        {
            "id": "u-2",
            "username": "john.doe",
            "role": "member",
            "is_active": true,
            "created_at": "2025-12-14T09:00:00Z",
        },
    ])
}

// ============================================================================
// Endpoints
// ============================================================================

#[post("/auth/login")]
async fn login(body: web::Json<Value>) -> HttpResponse {
    let username = body.get("username").and_then(Value::as_str).unwrap_or_default();
    let password = body.get("password").and_then(Value::as_str).unwrap_or_default();

    if username == USERNAME && password == PASSWORD {
        HttpResponse::Ok().json(json!({
            "access_token": ACCESS_TOKEN,
            "token_type": "bearer",
        }))
    } else {
        HttpResponse::Unauthorized().json(json!({ "detail": "Invalid credentials" }))
    }
}

#[post("/auth/register")]
async fn register(body: web::Json<Value>) -> HttpResponse {
    let username = body.get("username").and_then(Value::as_str).unwrap_or_default();
    if username == "taken" {
        return HttpResponse::BadRequest().json(json!({ "detail": "Username already registered" }));
    }
    HttpResponse::Ok().json(json!({ "id": "u-new", "username": username }))
}

#[get("/projects")]
async fn projects(req: HttpRequest) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(project_fixtures())
}

#[get("/releases")]
async fn releases(
    req: HttpRequest,
    state: web::Data<Arc<Mutex<MockBackendState>>>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    let project_key = query.get("project").cloned().unwrap_or_default();
    if state.lock().unwrap().fail_releases_for.as_deref() == Some(project_key.as_str()) {
        return HttpResponse::InternalServerError()
            .json(json!({ "message": "release store exploded" }));
    }
    HttpResponse::Ok().json(releases_for(&project_key))
}

#[get("/releases/{release_id}")]
async fn release_runs(
    req: HttpRequest,
    state: web::Data<Arc<Mutex<MockBackendState>>>,
    path: web::Path<String>,
) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    let release_id = path.into_inner();
    if state.lock().unwrap().fail_runs_for.as_deref() == Some(release_id.as_str()) {
        return HttpResponse::InternalServerError().json(json!({ "message": "run store exploded" }));
    }
    match runs_for(&release_id) {
        Some(runs) => HttpResponse::Ok().json(runs),
        None => HttpResponse::NotFound().json(json!({ "detail": "Release not found" })),
    }
}

#[get("/runs/{run_id}")]
async fn run_by_id(req: HttpRequest, path: web::Path<String>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    let run_id = path.into_inner();
    match all_runs().into_iter().find(|r| r["id"] == run_id.as_str()) {
        Some(run) => HttpResponse::Ok().json(run),
        None => HttpResponse::NotFound().json(json!({ "detail": "Run not found" })),
    }
}

#[get("/pytest/results")]
async fn pytest_results(req: HttpRequest) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(pytest_fixtures())
}

#[post("/admin/projects")]
async fn admin_create_project(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Created().json(json!({
        "project_key": body.get("project_key").cloned().unwrap_or_default(),
        "name": body.get("name").cloned().unwrap_or_default(),
    }))
}

#[get("/admin/projects")]
async fn admin_projects(req: HttpRequest) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(project_fixtures())
}

#[get("/admin/projects/{project_key}/users")]
async fn admin_project_users(req: HttpRequest, _path: web::Path<String>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(user_fixtures())
}

#[post("/admin/projects/users")]
async fn admin_add_project_user(req: HttpRequest, _body: web::Json<Value>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(json!({ "message": "User added to project" }))
}

#[delete("/admin/projects/users")]
async fn admin_remove_project_user(req: HttpRequest, _body: web::Json<Value>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(json!({ "message": "User removed from project" }))
}

#[post("/admin/releases")]
async fn admin_create_release(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Created().json(json!({
        "id": "rel-new",
        "name": body.get("name").cloned().unwrap_or_default(),
        "created_at": "2026-02-10",
        "project_key": body.get("project_key").cloned().unwrap_or_default(),
    }))
}

#[get("/admin/releases")]
async fn admin_releases(req: HttpRequest) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    let mut all = Vec::new();
    for (key, _) in [("payment-gateway", ()), ("user-auth", ())] {
        for mut release in releases_for(key).as_array().unwrap().clone() {
            release["project_key"] = json!(key);
            all.push(release);
        }
    }
    HttpResponse::Ok().json(all)
}

#[get("/admin/releases/{release_id}")]
async fn admin_release_runs(req: HttpRequest, path: web::Path<String>) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    match runs_for(&path.into_inner()) {
        Some(runs) => HttpResponse::Ok().json(runs),
        None => HttpResponse::NotFound().json(json!({ "detail": "Release not found" })),
    }
}

#[get("/admin/users")]
async fn admin_users(req: HttpRequest) -> HttpResponse {
    if !authorized(&req) {
        return unauthorized();
    }
    HttpResponse::Ok().json(user_fixtures())
}
