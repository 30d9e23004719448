//! Load-test run domain model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a load-test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Passed,
    Failed,
    Warning,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Warning => "warning",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "passed" => Some(Self::Passed),
            "failed" => Some(Self::Failed),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One execution record of a load test.
///
/// Produced by the external test-execution system; this application only
/// reads it. The metric fields (`duration`, `avg_response_time`,
/// `error_rate`, `throughput`) are display-formatted by the backend and
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Run {
    /// Unique run id.
    pub id: String,
    /// Display name (e.g. "Checkout Flow - Peak Load").
    pub name: String,
    /// Run outcome.
    pub run_status: RunStatus,
    /// Username that triggered the run.
    pub started_by: String,
    /// Start timestamp, ISO-8601 as returned by the backend.
    pub started_at: String,
    /// Foreign key to the owning release id.
    pub release: String,
    /// Link to the full external report.
    pub report_url: String,
    /// Test script filename (e.g. "checkout_peak_load.jmx").
    pub script_name: String,
    /// Display-formatted total duration (e.g. "15m 32s").
    pub duration: String,
    /// Number of virtual users.
    pub v_users: u32,
    /// Display-formatted average response time (e.g. "245ms").
    pub avg_response_time: String,
    /// Display-formatted error rate (e.g. "0.12%").
    pub error_rate: String,
    /// Display-formatted throughput (e.g. "1,250 req/s").
    pub throughput: String,
    /// Foreign key to the owning project. Redundant with the release's
    /// project, kept for fast filtering and to defend against run id
    /// collisions across projects.
    pub project_key: String,
}
