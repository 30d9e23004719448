//! Assembles the project → release → run tree from flat collections.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::models::{Project, Release, Run};

use super::{timestamp_millis, ProjectTree, ReleaseNode};

/// Build the navigation tree from flat backend collections.
///
/// Produces one [`ProjectTree`] per input project, preserving project
/// order. Per-project release membership comes from `releases_by_project`
/// (a project absent from the map simply gets no releases). Releases are
/// ordered newest-first by `created_at`, runs newest-first by
/// `started_at`; both sorts are stable, so records with equal timestamps
/// keep their input order.
///
/// A run is attached to a release only when BOTH its `release` and
/// `project_key` foreign keys match, which keeps a run id collision in
/// another project from leaking runs across projects. A run whose release
/// is not present in its project's list is left out of the tree entirely.
pub fn build_project_tree(
    projects: &[Project],
    runs: &[Run],
    releases_by_project: &HashMap<String, Vec<Release>>,
) -> Vec<ProjectTree> {
    projects
        .iter()
        .map(|project| {
            let mut project_releases: Vec<Release> = releases_by_project
                .get(&project.project_key)
                .cloned()
                .unwrap_or_default();
            project_releases.sort_by_key(|r| Reverse(timestamp_millis(&r.created_at)));

            let releases = project_releases
                .into_iter()
                .map(|release| {
                    let mut release_runs: Vec<Run> = runs
                        .iter()
                        .filter(|r| {
                            r.release == release.id && r.project_key == project.project_key
                        })
                        .cloned()
                        .collect();
                    release_runs.sort_by_key(|r| Reverse(timestamp_millis(&r.started_at)));

                    ReleaseNode {
                        release,
                        runs: release_runs,
                    }
                })
                .collect();

            ProjectTree {
                project: project.clone(),
                releases,
            }
        })
        .collect()
}
