//! Request shapes for the admin proxy surface.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request to create a project.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    pub project_key: String,
    pub name: String,
}

/// Request to create a release under a project.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateReleaseRequest {
    pub project_key: String,
    pub name: String,
}

/// Request to add or remove a user on a project.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProjectUserRequest {
    pub project_key: String,
    pub username: String,
}
