//! Release domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A named grouping of runs under a project.
///
/// The project association is supplied externally (query parameter or
/// admin listing), not stored on every payload, so `project_key` is
/// optional here and only present where the backend includes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Release {
    /// Unique release id.
    pub id: String,
    /// Display name (e.g. "Release 3.2.0").
    pub name: String,
    /// Creation timestamp, ISO-8601 as returned by the backend.
    pub created_at: String,
    /// Owning project key, when the backend includes it (admin listings).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_key: Option<String>,
}
