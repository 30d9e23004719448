//! Admin proxy handlers for managing projects, releases, and users.
//!
//! These forward to the backend's admin surface. Authorization lives
//! there; a non-admin session gets the backend's own 401/403 passed
//! through.

use actix_web::{delete, get, post, web, HttpResponse};

use crate::auth::SessionAuth;
use crate::backend::BackendClient;
use crate::error::{AppError, AppResult};
use crate::models::{CreateProjectRequest, CreateReleaseRequest, ProjectUserRequest};

/// Configure admin routes.
pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create_project)
        .service(list_projects)
        .service(list_project_users)
        .service(add_project_user)
        .service(remove_project_user)
        .service(create_release)
        .service(list_releases)
        .service(list_release_runs)
        .service(list_users);
}

/// Create a project.
///
/// POST /api/v1/admin/projects
#[utoipa::path(
    post,
    path = "/api/v1/admin/projects",
    tag = "Admin",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = crate::models::Project),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
    )
)]
#[post("/admin/projects")]
pub async fn create_project(
    auth: SessionAuth,
    client: web::Data<BackendClient>,
    body: web::Json<CreateProjectRequest>,
) -> AppResult<HttpResponse> {
    let request = body.into_inner();
    if request.project_key.trim().is_empty() || request.name.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "project_key and name are required".to_string(),
        ));
    }

    let project = client.create_project(&auth.token, &request).await?;
    Ok(HttpResponse::Created().json(project))
}

/// List all projects.
///
/// GET /api/v1/admin/projects
#[utoipa::path(
    get,
    path = "/api/v1/admin/projects",
    tag = "Admin",
    responses(
        (status = 200, description = "All projects", body = [crate::models::Project]),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
    )
)]
#[get("/admin/projects")]
pub async fn list_projects(
    auth: SessionAuth,
    client: web::Data<BackendClient>,
) -> AppResult<HttpResponse> {
    let projects = client.admin_projects(&auth.token).await?;
    Ok(HttpResponse::Ok().json(projects))
}

/// List the users assigned to a project.
///
/// GET /api/v1/admin/projects/{project_key}/users
#[utoipa::path(
    get,
    path = "/api/v1/admin/projects/{project_key}/users",
    tag = "Admin",
    params(
        ("project_key" = String, Path, description = "Project key")
    ),
    responses(
        (status = 200, description = "Project users", body = [crate::models::UserAccount]),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
    )
)]
#[get("/admin/projects/{project_key}/users")]
pub async fn list_project_users(
    auth: SessionAuth,
    client: web::Data<BackendClient>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let project_key = path.into_inner();
    let users = client.project_users(&auth.token, &project_key).await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Assign a user to a project.
///
/// POST /api/v1/admin/projects/users
#[utoipa::path(
    post,
    path = "/api/v1/admin/projects/users",
    tag = "Admin",
    request_body = ProjectUserRequest,
    responses(
        (status = 200, description = "User assigned"),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
    )
)]
#[post("/admin/projects/users")]
pub async fn add_project_user(
    auth: SessionAuth,
    client: web::Data<BackendClient>,
    body: web::Json<ProjectUserRequest>,
) -> AppResult<HttpResponse> {
    let response = client.add_project_user(&auth.token, &body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Remove a user from a project.
///
/// DELETE /api/v1/admin/projects/users
#[utoipa::path(
    delete,
    path = "/api/v1/admin/projects/users",
    tag = "Admin",
    request_body = ProjectUserRequest,
    responses(
        (status = 200, description = "User removed"),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
    )
)]
#[delete("/admin/projects/users")]
pub async fn remove_project_user(
    auth: SessionAuth,
    client: web::Data<BackendClient>,
    body: web::Json<ProjectUserRequest>,
) -> AppResult<HttpResponse> {
    let response = client
        .remove_project_user(&auth.token, &body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Create a release under a project.
///
/// POST /api/v1/admin/releases
#[utoipa::path(
    post,
    path = "/api/v1/admin/releases",
    tag = "Admin",
    request_body = CreateReleaseRequest,
    responses(
        (status = 201, description = "Release created", body = crate::models::Release),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
    )
)]
#[post("/admin/releases")]
pub async fn create_release(
    auth: SessionAuth,
    client: web::Data<BackendClient>,
    body: web::Json<CreateReleaseRequest>,
) -> AppResult<HttpResponse> {
    let request = body.into_inner();
    if request.project_key.trim().is_empty() || request.name.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "project_key and name are required".to_string(),
        ));
    }

    let release = client.create_release(&auth.token, &request).await?;
    Ok(HttpResponse::Created().json(release))
}

/// List all releases across projects.
///
/// GET /api/v1/admin/releases
#[utoipa::path(
    get,
    path = "/api/v1/admin/releases",
    tag = "Admin",
    responses(
        (status = 200, description = "All releases", body = [crate::models::Release]),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
    )
)]
#[get("/admin/releases")]
pub async fn list_releases(
    auth: SessionAuth,
    client: web::Data<BackendClient>,
) -> AppResult<HttpResponse> {
    let releases = client.admin_releases(&auth.token).await?;
    Ok(HttpResponse::Ok().json(releases))
}

/// List the runs of a release.
///
/// GET /api/v1/admin/releases/{release_id}
#[utoipa::path(
    get,
    path = "/api/v1/admin/releases/{release_id}",
    tag = "Admin",
    params(
        ("release_id" = String, Path, description = "Release id")
    ),
    responses(
        (status = 200, description = "Runs of the release", body = [crate::models::Run]),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
    )
)]
#[get("/admin/releases/{release_id}")]
pub async fn list_release_runs(
    auth: SessionAuth,
    client: web::Data<BackendClient>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let release_id = path.into_inner();
    let runs = client.admin_release_runs(&auth.token, &release_id).await?;
    Ok(HttpResponse::Ok().json(runs))
}

/// List all user accounts.
///
/// GET /api/v1/admin/users
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    tag = "Admin",
    responses(
        (status = 200, description = "All users", body = [crate::models::UserAccount]),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
    )
)]
#[get("/admin/users")]
pub async fn list_users(
    auth: SessionAuth,
    client: web::Data<BackendClient>,
) -> AppResult<HttpResponse> {
    let users = client.list_users(&auth.token).await?;
    Ok(HttpResponse::Ok().json(users))
}
