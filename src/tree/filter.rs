//! Search filtering over the navigation tree.

use crate::models::Run;

use super::{ProjectTree, ReleaseNode};

/// Prune the tree to nodes matching a free-text query.
///
/// Matching is case-insensitive substring containment, applied top-down:
///
/// 1. A project whose name matches keeps its entire subtree unfiltered.
/// 2. Otherwise, a release whose name matches keeps all of its runs.
/// 3. Otherwise, the release keeps only runs whose name or script name
///    matches, and is dropped when none do.
/// 4. A project with no surviving releases is dropped.
///
/// An empty or whitespace-only query returns the tree unchanged. Ordering
/// is never altered, only pruned, so the output is a subsequence of the
/// input at every level and filtering is idempotent.
pub fn filter_tree(tree: &[ProjectTree], query: &str) -> Vec<ProjectTree> {
    if query.trim().is_empty() {
        return tree.to_vec();
    }

    let q = query.to_lowercase();
    tree.iter()
        .filter_map(|node| {
            let matches_project = node.project.name.to_lowercase().contains(&q);
            if matches_project {
                return Some(node.clone());
            }

            let releases: Vec<ReleaseNode> = node
                .releases
                .iter()
                .filter_map(|release_node| filter_release(release_node, &q))
                .collect();

            if releases.is_empty() {
                None
            } else {
                Some(ProjectTree {
                    project: node.project.clone(),
                    releases,
                })
            }
        })
        .collect()
}

/// Apply steps 2-3 of the filter policy to a single release node.
fn filter_release(release_node: &ReleaseNode, q: &str) -> Option<ReleaseNode> {
    if release_node.release.name.to_lowercase().contains(q) {
        return Some(release_node.clone());
    }

    let runs: Vec<Run> = release_node
        .runs
        .iter()
        .filter(|run| {
            run.name.to_lowercase().contains(q) || run.script_name.to_lowercase().contains(q)
        })
        .cloned()
        .collect();

    if runs.is_empty() {
        None
    } else {
        Some(ReleaseNode {
            release: release_node.release.clone(),
            runs,
        })
    }
}
