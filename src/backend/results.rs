//! Read endpoints for projects, releases, runs, and pytest results.

use crate::auth::BackendToken;
use crate::error::AppResult;
use crate::models::{Project, PytestResult, Release, Run};

use super::BackendClient;

impl BackendClient {
    /// List all projects visible to the caller.
    pub async fn list_projects(&self, token: &BackendToken) -> AppResult<Vec<Project>> {
        self.get_json("/projects", &[], token).await
    }

    /// List the releases of one project.
    pub async fn project_releases(
        &self,
        token: &BackendToken,
        project_key: &str,
    ) -> AppResult<Vec<Release>> {
        self.get_json("/releases", &[("project", project_key)], token)
            .await
    }

    /// List the runs of one release.
    pub async fn release_runs(
        &self,
        token: &BackendToken,
        release_id: &str,
    ) -> AppResult<Vec<Run>> {
        self.get_json(&format!("/releases/{}", release_id), &[], token)
            .await
    }

    /// Fetch a single run by id.
    pub async fn get_run(&self, token: &BackendToken, run_id: &str) -> AppResult<Run> {
        self.get_json(&format!("/runs/{}", run_id), &[], token).await
    }

    /// List pytest suite results across all projects.
    pub async fn pytest_results(&self, token: &BackendToken) -> AppResult<Vec<PytestResult>> {
        self.get_json("/pytest/results", &[], token).await
    }
}
