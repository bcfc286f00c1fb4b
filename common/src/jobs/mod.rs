//! Bulk-job wire types.
//!
//! A bulk job is created by uploading a CSV against a template and is owned
//! and mutated exclusively by the backend queue; the client only reads
//! snapshots of it while polling. Status values progress forward only:
//! `queued -> processing -> (completed | completed_with_errors | failed)`.

use serde::{Deserialize, Serialize};

pub mod poll;

/// Lifecycle state of a bulk generation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Queued,
    Processing,
    Completed,
    CompletedWithErrors,
    Failed,
}

impl JobStatus {
    /// Terminal states admit no further transition; polling stops here.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            JobStatus::Completed | JobStatus::CompletedWithErrors | JobStatus::Failed
        )
    }

    /// Uppercased display form, underscores spaced out.
    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Queued => "QUEUED",
            JobStatus::Processing => "PROCESSING",
            JobStatus::Completed => "COMPLETED",
            JobStatus::CompletedWithErrors => "COMPLETED WITH ERRORS",
            JobStatus::Failed => "FAILED",
        }
    }
}

/// One downloadable artifact of a finished job.
///
/// `kind` is the backend's `type` discriminator; bulk jobs publish one
/// `"zip"` entry alongside per-page entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultUrl {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
}

/// A per-row failure reported by the worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowError {
    #[serde(default)]
    pub row: u32,
    #[serde(default)]
    pub error: String,
}

/// Snapshot of a bulk job as returned by `GET /api/bulk/{id}`.
///
/// The row counters are rendered exactly as received; the backend is
/// expected to keep `processed_rows + failed_rows <= total_rows` but the
/// client does not rely on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkJob {
    pub id: String,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub csv_filename: Option<String>,
    #[serde(default)]
    pub total_rows: u32,
    #[serde(default)]
    pub processed_rows: u32,
    #[serde(default)]
    pub failed_rows: u32,
    pub status: JobStatus,
    /// Populated only once the job reaches `completed` or
    /// `completed_with_errors`.
    #[serde(default)]
    pub result_urls: Vec<ResultUrl>,
    /// Populated only when `failed_rows > 0`.
    #[serde(default)]
    pub errors: Vec<RowError>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl BulkJob {
    /// Display progress in percent, clamped to 0..=100 and guarded against
    /// a zero row total.
    pub fn progress_percent(&self) -> u32 {
        if self.total_rows == 0 {
            return 0;
        }
        let done = self.processed_rows.saturating_add(self.failed_rows);
        (u64::from(done) * 100 / u64::from(self.total_rows)).min(100) as u32
    }
}

/// Aggregate counters from `GET /api/jobs/stats`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobStats {
    #[serde(default)]
    pub total_jobs: u32,
    #[serde(default)]
    pub queued: u32,
    #[serde(default)]
    pub processing: u32,
    #[serde(default)]
    pub completed: u32,
    #[serde(default)]
    pub failed: u32,
}

/// Trimmed job record from `GET /api/jobs/recent`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: String,
    #[serde(default)]
    pub csv_filename: Option<String>,
    #[serde(default)]
    pub total_rows: u32,
    #[serde(default)]
    pub processed_rows: u32,
    #[serde(default)]
    pub failed_rows: u32,
    pub status: JobStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_snake_case() {
        for (raw, status) in [
            ("\"queued\"", JobStatus::Queued),
            ("\"processing\"", JobStatus::Processing),
            ("\"completed\"", JobStatus::Completed),
            ("\"completed_with_errors\"", JobStatus::CompletedWithErrors),
            ("\"failed\"", JobStatus::Failed),
        ] {
            let parsed: JobStatus = serde_json::from_str(raw).unwrap();
            assert_eq!(parsed, status);
            assert_eq!(serde_json::to_string(&status).unwrap(), raw);
        }
    }

    #[test]
    fn only_final_states_are_terminal() {
        assert!(!JobStatus::Queued.is_terminal());
        assert!(!JobStatus::Processing.is_terminal());
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::CompletedWithErrors.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
    }

    #[test]
    fn job_deserializes_with_sparse_payload() {
        // Pending jobs come back without result_urls or errors.
        let job: BulkJob = serde_json::from_str(
            r#"{"id": "j-1", "status": "processing", "total_rows": 10, "processed_rows": 3}"#,
        )
        .unwrap();
        assert_eq!(job.status, JobStatus::Processing);
        assert!(job.result_urls.is_empty());
        assert!(job.errors.is_empty());
        assert_eq!(job.failed_rows, 0);
    }

    #[test]
    fn result_url_maps_type_field() {
        let entry: ResultUrl = serde_json::from_str(
            r#"{"type": "zip", "url": "https://cdn.example.com/out.zip"}"#,
        )
        .unwrap();
        assert_eq!(entry.kind, "zip");
        assert!(entry.title.is_none());
    }

    #[test]
    fn progress_percent_is_guarded() {
        let mut job: BulkJob =
            serde_json::from_str(r#"{"id": "j-1", "status": "queued"}"#).unwrap();
        assert_eq!(job.progress_percent(), 0);

        job.total_rows = 10;
        job.processed_rows = 3;
        assert_eq!(job.progress_percent(), 30);

        // Counters the backend should never send still stay displayable.
        job.processed_rows = 12;
        job.failed_rows = 5;
        assert_eq!(job.progress_percent(), 100);
    }
}
