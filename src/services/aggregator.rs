//! Aggregation of dashboard data from the results backend.
//!
//! Releases are fetched per project and runs per release as concurrent
//! fan-outs, joined before the tree is built. A failed fetch for one
//! project or release logs a warning and leaves that node empty; it never
//! aborts the rest of the aggregation.

use std::collections::HashMap;

use futures_util::future::join_all;
use tracing::warn;

use crate::auth::BackendToken;
use crate::backend::BackendClient;
use crate::error::AppResult;
use crate::models::{Project, Release, Run};

/// The flat collections the tree builder consumes.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    /// Projects in backend order.
    pub projects: Vec<Project>,
    /// All releases, grouped flat in project order.
    pub releases: Vec<Release>,
    /// All runs, in project/release fetch order.
    pub runs: Vec<Run>,
    /// Authoritative project → releases grouping.
    pub releases_by_project: HashMap<String, Vec<Release>>,
}

/// Fetch projects, their releases, and their runs.
///
/// The initial project listing is the one call that must succeed: without
/// it there is nothing to render, and a stale session should surface as
/// an auth error here rather than as a silently empty dashboard.
pub async fn collect_dashboard_data(
    client: &BackendClient,
    token: &BackendToken,
) -> AppResult<DashboardData> {
    let projects = client.list_projects(token).await?;

    // Releases for every project, fetched concurrently.
    let release_fetches = projects.iter().map(|project| async move {
        match client.project_releases(token, &project.project_key).await {
            Ok(releases) => Some((project.project_key.clone(), releases)),
            Err(e) => {
                warn!(
                    project_key = %project.project_key,
                    "Failed to fetch releases: {}", e
                );
                None
            }
        }
    });
    let releases_by_project: HashMap<String, Vec<Release>> = join_all(release_fetches)
        .await
        .into_iter()
        .flatten()
        .collect();

    // Flatten in project order so downstream stable sorts see a
    // deterministic input sequence.
    let releases: Vec<Release> = projects
        .iter()
        .filter_map(|p| releases_by_project.get(&p.project_key))
        .flatten()
        .cloned()
        .collect();

    // Runs for every release, fetched concurrently.
    let run_fetches = releases.iter().map(|release| async move {
        match client.release_runs(token, &release.id).await {
            Ok(runs) => runs,
            Err(e) => {
                warn!(release_id = %release.id, "Failed to fetch runs: {}", e);
                Vec::new()
            }
        }
    });
    let runs: Vec<Run> = join_all(run_fetches).await.into_iter().flatten().collect();

    Ok(DashboardData {
        projects,
        releases,
        runs,
        releases_by_project,
    })
}
