//! Decision core of the job-status poller.
//!
//! The waiting view feeds every fetched job snapshot through a
//! [`PollTracker`]; the tracker decides whether to keep polling, navigate to
//! a download, fall back to the summary view, or pin a failure message. It
//! settles exactly once, so a late in-flight response observed after the
//! terminal transition can never trigger a second navigation.

use super::{BulkJob, ResultUrl};

/// Which generation flow produced the job being watched.
///
/// Travels between views as the `mode` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Single,
    Bulk,
}

impl GenerationMode {
    pub fn as_param(self) -> &'static str {
        match self {
            GenerationMode::Single => "single",
            GenerationMode::Bulk => "bulk",
        }
    }

    /// Anything that is not exactly `bulk` falls back to single mode.
    pub fn from_param(raw: &str) -> Self {
        if raw == "bulk" {
            GenerationMode::Bulk
        } else {
            GenerationMode::Single
        }
    }
}

/// Picks the download URL for a finished job, if any.
///
/// Bulk jobs prefer the archive entry (`type == "zip"`) regardless of where
/// it sits in the list; single jobs take the first entry carrying a
/// non-empty URL. `None` sends the user to the result-summary view instead.
pub fn select_download_url(urls: &[ResultUrl], mode: GenerationMode) -> Option<&str> {
    let entry = match mode {
        GenerationMode::Bulk => urls.iter().find(|r| r.kind == "zip"),
        GenerationMode::Single => urls.iter().find(|r| !r.url.is_empty()),
    };
    entry.map(|r| r.url.as_str()).filter(|url| !url.is_empty())
}

/// What the poller should do after one status observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollStep {
    /// Job still queued or processing; keep the timer running.
    Pending,
    /// Job finished and produced a downloadable artifact.
    Download { url: String },
    /// Job finished without a usable URL; show the summary view.
    Summary,
    /// Job reported `failed`; stop polling and pin the failure message.
    Failed,
}

/// Settle-once observer for a single poll subscription.
#[derive(Debug, Default)]
pub struct PollTracker {
    settled: bool,
}

impl PollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a terminal status has been observed.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Classifies one job snapshot.
    ///
    /// Returns `None` when the tracker already settled; callers must treat
    /// that as "ignore this response entirely".
    pub fn observe(&mut self, job: &BulkJob, mode: GenerationMode) -> Option<PollStep> {
        use super::JobStatus::*;

        if self.settled {
            return None;
        }
        let step = match job.status {
            Queued | Processing => PollStep::Pending,
            Failed => PollStep::Failed,
            Completed | CompletedWithErrors => match select_download_url(&job.result_urls, mode) {
                Some(url) => PollStep::Download {
                    url: url.to_string(),
                },
                None => PollStep::Summary,
            },
        };
        if step != PollStep::Pending {
            self.settled = true;
        }
        Some(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::JobStatus;

    fn job(status: JobStatus, urls: Vec<ResultUrl>) -> BulkJob {
        BulkJob {
            id: "job-1".into(),
            template_id: None,
            csv_filename: None,
            total_rows: 4,
            processed_rows: 4,
            failed_rows: 0,
            status,
            result_urls: urls,
            errors: Vec::new(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    fn url(kind: &str, url: &str) -> ResultUrl {
        ResultUrl {
            kind: kind.into(),
            url: url.into(),
            title: None,
            slug: None,
        }
    }

    #[test]
    fn bulk_mode_prefers_zip_regardless_of_order() {
        let urls = vec![
            url("page", "https://cdn.example.com/a.html"),
            url("page", "https://cdn.example.com/b.html"),
            url("zip", "https://cdn.example.com/batch.zip"),
        ];
        assert_eq!(
            select_download_url(&urls, GenerationMode::Bulk),
            Some("https://cdn.example.com/batch.zip")
        );
    }

    #[test]
    fn bulk_mode_without_zip_yields_none() {
        let urls = vec![url("page", "https://cdn.example.com/a.html")];
        assert_eq!(select_download_url(&urls, GenerationMode::Bulk), None);
    }

    #[test]
    fn single_mode_takes_first_non_empty_url() {
        let urls = vec![
            url("page", ""),
            url("page", "https://cdn.example.com/real.html"),
            url("page", "https://cdn.example.com/later.html"),
        ];
        assert_eq!(
            select_download_url(&urls, GenerationMode::Single),
            Some("https://cdn.example.com/real.html")
        );
    }

    #[test]
    fn tracker_keeps_pending_through_forward_progression() {
        let mut tracker = PollTracker::new();
        let queued = job(JobStatus::Queued, Vec::new());
        let processing = job(JobStatus::Processing, Vec::new());

        assert_eq!(
            tracker.observe(&queued, GenerationMode::Bulk),
            Some(PollStep::Pending)
        );
        assert_eq!(
            tracker.observe(&processing, GenerationMode::Bulk),
            Some(PollStep::Pending)
        );
        assert!(!tracker.is_settled());
    }

    #[test]
    fn tracker_navigates_exactly_once_on_terminal_status() {
        let mut tracker = PollTracker::new();
        let done = job(
            JobStatus::Completed,
            vec![url("zip", "https://cdn.example.com/batch.zip")],
        );

        assert_eq!(
            tracker.observe(&done, GenerationMode::Bulk),
            Some(PollStep::Download {
                url: "https://cdn.example.com/batch.zip".into()
            })
        );
        // A late response that also observes the terminal status is ignored.
        assert_eq!(tracker.observe(&done, GenerationMode::Bulk), None);
        assert!(tracker.is_settled());
    }

    #[test]
    fn completed_with_errors_still_counts_as_success() {
        let mut tracker = PollTracker::new();
        let done = job(
            JobStatus::CompletedWithErrors,
            vec![url("zip", "https://cdn.example.com/partial.zip")],
        );
        assert!(matches!(
            tracker.observe(&done, GenerationMode::Bulk),
            Some(PollStep::Download { .. })
        ));
    }

    #[test]
    fn completed_without_urls_falls_back_to_summary() {
        let mut tracker = PollTracker::new();
        let done = job(JobStatus::Completed, Vec::new());
        assert_eq!(
            tracker.observe(&done, GenerationMode::Single),
            Some(PollStep::Summary)
        );
        assert!(tracker.is_settled());
    }

    #[test]
    fn failed_settles_without_navigation() {
        let mut tracker = PollTracker::new();
        let failed = job(JobStatus::Failed, Vec::new());
        assert_eq!(
            tracker.observe(&failed, GenerationMode::Bulk),
            Some(PollStep::Failed)
        );
        assert_eq!(tracker.observe(&failed, GenerationMode::Bulk), None);
    }

    #[test]
    fn mode_parses_query_parameter() {
        assert_eq!(GenerationMode::from_param("bulk"), GenerationMode::Bulk);
        assert_eq!(GenerationMode::from_param("single"), GenerationMode::Single);
        assert_eq!(GenerationMode::from_param(""), GenerationMode::Single);
        assert_eq!(GenerationMode::Bulk.as_param(), "bulk");
    }
}
