use common::jobs::{JobStats, JobSummary};

use super::{get_json, ApiError};

pub async fn stats() -> Result<JobStats, ApiError> {
    get_json("/api/jobs/stats").await
}

pub async fn recent(limit: u32) -> Result<Vec<JobSummary>, ApiError> {
    get_json(&format!("/api/jobs/recent?limit={limit}")).await
}
