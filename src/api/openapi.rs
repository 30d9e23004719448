//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models, tree};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Load Test Hub",
        version = "0.3.0",
        description = "Dashboard server for browsing load-test and pytest run results by project, release, and run"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Session endpoints
        api::session::register,
        api::session::login,
        api::session::logout,
        api::session::me,
        // Dashboard endpoints
        api::dashboard::get_tree,
        api::dashboard::get_overview,
        api::dashboard::get_run_detail,
        api::dashboard::list_pytest_results,
        api::dashboard::get_pytest_result,
        // Admin endpoints
        api::admin::create_project,
        api::admin::list_projects,
        api::admin::list_project_users,
        api::admin::add_project_user,
        api::admin::remove_project_user,
        api::admin::create_release,
        api::admin::list_releases,
        api::admin::list_release_runs,
        api::admin::list_users,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Session
            models::Credentials,
            models::SessionInfo,
            // Domain
            models::Project,
            models::Release,
            models::Run,
            models::RunStatus,
            models::PytestResult,
            models::PytestCase,
            models::PytestCaseStatus,
            models::UserAccount,
            // Tree
            tree::ProjectTree,
            tree::ReleaseNode,
            // Dashboard
            api::dashboard::TreeResponse,
            api::dashboard::RunDetailResponse,
            api::dashboard::OverviewResponse,
            api::dashboard::LoadTestStats,
            api::dashboard::PytestStats,
            // Admin
            models::CreateProjectRequest,
            models::CreateReleaseRequest,
            models::ProjectUserRequest,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Session", description = "Browser session management"),
        (name = "Dashboard", description = "Navigation tree, run detail, and statistics"),
        (name = "Admin", description = "Project, release, and user administration")
    )
)]
pub struct ApiDoc;
