//! Pytest suite result domain models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::run::RunStatus;

/// Status of a single pytest test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PytestCaseStatus {
    Passed,
    Failed,
    Skipped,
}

impl PytestCaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
        }
    }
}

/// One test case within a pytest suite result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PytestCase {
    /// Test name (e.g. "test_checkout_total").
    pub name: String,
    /// Case outcome.
    pub status: PytestCaseStatus,
    /// Duration in seconds.
    pub duration: f64,
    /// Failure message, present for failed cases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One pytest suite execution, associated with a release like a load-test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PytestResult {
    /// Unique result id.
    pub id: String,
    /// Display name of the suite.
    pub name: String,
    /// Overall suite outcome.
    pub test_status: RunStatus,
    /// Username that triggered the run.
    pub started_by: String,
    /// Start timestamp, ISO-8601 as returned by the backend.
    pub started_at: String,
    /// Foreign key to the owning release id.
    pub release: String,
    /// Foreign key to the owning project.
    pub project_key: String,
    /// Total number of tests in the suite.
    pub total_tests: u32,
    /// Number of passed tests.
    pub passed_tests: u32,
    /// Number of failed tests.
    pub failed_tests: u32,
    /// Number of skipped tests.
    pub skipped_tests: u32,
    /// Success rate as a percentage (0-100).
    pub success_rate: f64,
    /// Display-formatted total duration.
    pub duration: String,
    /// Individual test cases.
    #[serde(default)]
    pub test_cases: Vec<PytestCase>,
}
