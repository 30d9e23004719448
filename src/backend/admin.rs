//! Admin endpoints of the results backend.
//!
//! The backend enforces who may call these; this client only forwards.

use serde_json::Value as JsonValue;

use crate::auth::BackendToken;
use crate::error::AppResult;
use crate::models::{
    CreateProjectRequest, CreateReleaseRequest, Project, ProjectUserRequest, Release, Run,
    UserAccount,
};

use super::BackendClient;

impl BackendClient {
    /// Create a project.
    pub async fn create_project(
        &self,
        token: &BackendToken,
        request: &CreateProjectRequest,
    ) -> AppResult<Project> {
        self.post_json("/admin/projects", request, Some(token)).await
    }

    /// List all projects, including ones the caller is not a member of.
    pub async fn admin_projects(&self, token: &BackendToken) -> AppResult<Vec<Project>> {
        self.get_json("/admin/projects", &[], token).await
    }

    /// List the users assigned to a project.
    pub async fn project_users(
        &self,
        token: &BackendToken,
        project_key: &str,
    ) -> AppResult<Vec<UserAccount>> {
        self.get_json(&format!("/admin/projects/{}/users", project_key), &[], token)
            .await
    }

    /// Assign a user to a project.
    pub async fn add_project_user(
        &self,
        token: &BackendToken,
        request: &ProjectUserRequest,
    ) -> AppResult<JsonValue> {
        self.post_json("/admin/projects/users", request, Some(token))
            .await
    }

    /// Remove a user from a project.
    pub async fn remove_project_user(
        &self,
        token: &BackendToken,
        request: &ProjectUserRequest,
    ) -> AppResult<JsonValue> {
        self.delete_json("/admin/projects/users", request, token)
            .await
    }

    /// Create a release under a project.
    pub async fn create_release(
        &self,
        token: &BackendToken,
        request: &CreateReleaseRequest,
    ) -> AppResult<Release> {
        self.post_json("/admin/releases", request, Some(token)).await
    }

    /// List all releases across projects.
    pub async fn admin_releases(&self, token: &BackendToken) -> AppResult<Vec<Release>> {
        self.get_json("/admin/releases", &[], token).await
    }

    /// List the runs of a release via the admin surface.
    pub async fn admin_release_runs(
        &self,
        token: &BackendToken,
        release_id: &str,
    ) -> AppResult<Vec<Run>> {
        self.get_json(&format!("/admin/releases/{}", release_id), &[], token)
            .await
    }

    /// List all user accounts.
    pub async fn list_users(&self, token: &BackendToken) -> AppResult<Vec<UserAccount>> {
        self.get_json("/admin/users", &[], token).await
    }
}
