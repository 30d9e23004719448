//! Dashboard API handlers: navigation tree, run detail, overview stats,
//! and pytest results.

use actix_web::{get, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::SessionAuth;
use crate::backend::BackendClient;
use crate::error::{AppError, AppResult};
use crate::models::{Project, PytestResult, Release, Run, RunStatus};
use crate::services::collect_dashboard_data;
use crate::tree::{build_project_tree, filter_tree, ProjectTree};

/// Query parameters for the tree endpoint.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TreeQuery {
    /// Free-text search query; empty or absent returns the full tree.
    #[serde(default)]
    pub q: String,
}

/// Response for the tree endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct TreeResponse {
    /// The search query that was applied (may be empty).
    pub query: String,
    /// The filtered navigation tree, ready to render.
    pub tree: Vec<ProjectTree>,
}

/// Response for the run detail endpoint.
///
/// Bundles the run with its project/release context and the sibling runs
/// of the same release so the detail page needs no further joins.
#[derive(Debug, Serialize, ToSchema)]
pub struct RunDetailResponse {
    pub run: Run,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<Project>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<Release>,
    /// All runs of the same release, as returned by the backend.
    pub release_runs: Vec<Run>,
}

/// Aggregate load-test statistics.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoadTestStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub warning: usize,
    /// Mean of the runs' error rates, in percent.
    pub avg_error_rate: f64,
}

/// Aggregate pytest statistics.
#[derive(Debug, Serialize, ToSchema)]
pub struct PytestStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Mean of the suites' success rates, in percent.
    pub avg_success_rate: f64,
}

/// Response for the overview endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct OverviewResponse {
    pub load_tests: LoadTestStats,
    pub pytest: PytestStats,
}

/// Get the navigation tree, optionally filtered by a search query.
///
/// Aggregates projects, releases, and runs from the backend, builds the
/// project → release → run tree, and applies the search filter.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/tree",
    tag = "Dashboard",
    params(
        ("q" = Option<String>, Query, description = "Free-text search query")
    ),
    responses(
        (status = 200, description = "Navigation tree", body = TreeResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
    )
)]
#[get("/dashboard/tree")]
pub async fn get_tree(
    auth: SessionAuth,
    client: web::Data<BackendClient>,
    query: web::Query<TreeQuery>,
) -> AppResult<HttpResponse> {
    let TreeQuery { q } = query.into_inner();

    let data = collect_dashboard_data(client.get_ref(), &auth.token).await?;
    let tree = build_project_tree(&data.projects, &data.runs, &data.releases_by_project);
    let tree = filter_tree(&tree, &q);

    Ok(HttpResponse::Ok().json(TreeResponse { query: q, tree }))
}

/// Get aggregate statistics for the overview page.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard/overview",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Aggregate statistics", body = OverviewResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
    )
)]
#[get("/dashboard/overview")]
pub async fn get_overview(
    auth: SessionAuth,
    client: web::Data<BackendClient>,
) -> AppResult<HttpResponse> {
    let (data, pytest_results) = futures_util::join!(
        collect_dashboard_data(client.get_ref(), &auth.token),
        client.pytest_results(&auth.token),
    );
    let data = data?;
    let pytest_results = pytest_results?;

    Ok(HttpResponse::Ok().json(OverviewResponse {
        load_tests: load_test_stats(&data.runs),
        pytest: pytest_stats(&pytest_results),
    }))
}

/// Get a run with its project/release context and sibling runs.
#[utoipa::path(
    get,
    path = "/api/v1/runs/{run_id}",
    tag = "Dashboard",
    params(
        ("run_id" = String, Path, description = "Run id")
    ),
    responses(
        (status = 200, description = "Run detail", body = RunDetailResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Run not found", body = crate::error::ErrorResponse),
    )
)]
#[get("/runs/{run_id}")]
pub async fn get_run_detail(
    auth: SessionAuth,
    client: web::Data<BackendClient>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let run_id = path.into_inner();
    let run = client.get_run(&auth.token, &run_id).await?;

    // Context lookups are independent of each other; a failure in any of
    // them still leaves a renderable run.
    let (projects, releases, release_runs) = futures_util::join!(
        client.list_projects(&auth.token),
        client.project_releases(&auth.token, &run.project_key),
        client.release_runs(&auth.token, &run.release),
    );

    let project = projects
        .unwrap_or_default()
        .into_iter()
        .find(|p| p.project_key == run.project_key);
    let release = releases
        .unwrap_or_default()
        .into_iter()
        .find(|r| r.id == run.release);
    let release_runs = release_runs.unwrap_or_default();

    Ok(HttpResponse::Ok().json(RunDetailResponse {
        run,
        project,
        release,
        release_runs,
    }))
}

/// List pytest suite results.
#[utoipa::path(
    get,
    path = "/api/v1/pytest/results",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Pytest suite results", body = [PytestResult]),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
    )
)]
#[get("/pytest/results")]
pub async fn list_pytest_results(
    auth: SessionAuth,
    client: web::Data<BackendClient>,
) -> AppResult<HttpResponse> {
    let results = client.pytest_results(&auth.token).await?;
    Ok(HttpResponse::Ok().json(results))
}

/// Get a single pytest suite result by id.
#[utoipa::path(
    get,
    path = "/api/v1/pytest/results/{result_id}",
    tag = "Dashboard",
    params(
        ("result_id" = String, Path, description = "Pytest result id")
    ),
    responses(
        (status = 200, description = "Pytest suite result", body = PytestResult),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 404, description = "Result not found", body = crate::error::ErrorResponse),
    )
)]
#[get("/pytest/results/{result_id}")]
pub async fn get_pytest_result(
    auth: SessionAuth,
    client: web::Data<BackendClient>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let result_id = path.into_inner();
    let result = client
        .pytest_results(&auth.token)
        .await?
        .into_iter()
        .find(|r| r.id == result_id)
        .ok_or_else(|| AppError::NotFound(format!("Pytest result {}", result_id)))?;

    Ok(HttpResponse::Ok().json(result))
}

/// Compute load-test statistics over all runs.
fn load_test_stats(runs: &[Run]) -> LoadTestStats {
    let count = |status: RunStatus| runs.iter().filter(|r| r.run_status == status).count();

    let avg_error_rate = if runs.is_empty() {
        0.0
    } else {
        let sum: f64 = runs.iter().map(|r| leading_float(&r.error_rate)).sum();
        round2(sum / runs.len() as f64)
    };

    LoadTestStats {
        total: runs.len(),
        passed: count(RunStatus::Passed),
        failed: count(RunStatus::Failed),
        warning: count(RunStatus::Warning),
        avg_error_rate,
    }
}

/// Compute pytest statistics over all suite results.
fn pytest_stats(results: &[PytestResult]) -> PytestStats {
    let count = |status: RunStatus| {
        results.iter().filter(|r| r.test_status == status).count()
    };

    let avg_success_rate = if results.is_empty() {
        0.0
    } else {
        let sum: f64 = results.iter().map(|r| r.success_rate).sum();
        round2(sum / results.len() as f64)
    };

    PytestStats {
        total: results.len(),
        passed: count(RunStatus::Passed),
        failed: count(RunStatus::Failed),
        avg_success_rate,
    }
}

/// Parse the leading float of a display-formatted metric ("0.12%" → 0.12).
///
/// Metrics arrive display-formatted from the backend; a value with no
/// leading number contributes 0.
fn leading_float(s: &str) -> f64 {
    let s = s.trim();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '-' | '+' if i == 0 => end = i + c.len_utf8(),
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    s[..end].parse::<f64>().unwrap_or(0.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Configure dashboard routes.
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_tree)
        .service(get_overview)
        .service(get_run_detail)
        .service(list_pytest_results)
        .service(get_pytest_result);
}
