//! Sidebar navigation tree: projects → releases → runs.
//!
//! The tree is a derived view model assembled from the flat collections
//! fetched from the results backend. Both operations here are pure and
//! deterministic: they read their inputs without mutation and allocate
//! fresh output structures on every call, so they are safe to re-invoke
//! wholesale whenever any source collection or the search query changes.

mod builder;
mod filter;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::{Project, Release, Run};

pub use builder::build_project_tree;
pub use filter::filter_tree;

/// A release paired with its runs, newest run first.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ReleaseNode {
    pub release: Release,
    pub runs: Vec<Run>,
}

/// A project paired with its releases, newest release first.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProjectTree {
    pub project: Project,
    pub releases: Vec<ReleaseNode>,
}

/// Sort key for backend timestamps, in milliseconds since the Unix epoch.
///
/// The backend emits both full RFC 3339 instants ("2026-02-05T14:32:00Z")
/// and bare dates ("2026-02-05"); both are accepted. An unparseable
/// timestamp sorts as the epoch, so malformed records group at the old end
/// of the ordering instead of failing the build.
pub(crate) fn timestamp_millis(raw: &str) -> i64 {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.timestamp_millis();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.and_utc().timestamp_millis();
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or(0);
    }
    0
}
