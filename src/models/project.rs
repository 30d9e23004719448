//! Project domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A top-level project grouping, identified by a stable key.
///
/// Created by an admin action on the results backend; read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Project {
    /// Globally unique, stable identifier (e.g. "payment-gateway").
    pub project_key: String,
    /// Display name.
    pub name: String,
}
