//! Small display helpers shared by the dashboard views.

use url::Url;

/// Default name used when nothing usable can be derived from a URL path.
pub const DEFAULT_DOWNLOAD_NAME: &str = "download.html";

/// Renders a `processed/total (percent%)` progress label.
///
/// A zero total renders as `0/0 (0%)` rather than dividing by zero.
pub fn format_progress_label(processed: u32, total: u32) -> String {
    let percent = if total > 0 {
        ((f64::from(processed) / f64::from(total)) * 100.0).round() as u32
    } else {
        0
    };
    format!("{processed}/{total} ({percent}%)")
}

/// Derives a client-side filename from the last path segment of a URL.
///
/// Falls back to [`DEFAULT_DOWNLOAD_NAME`] when the URL does not parse or
/// its path has no non-empty segment.
pub fn filename_from_url(raw: &str) -> String {
    Url::parse(raw)
        .ok()
        .and_then(|url| {
            url.path_segments()?
                .filter(|segment| !segment.is_empty())
                .next_back()
                .map(str::to_string)
        })
        .unwrap_or_else(|| DEFAULT_DOWNLOAD_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_label_rounds_percentage() {
        assert_eq!(format_progress_label(3, 10), "3/10 (30%)");
        assert_eq!(format_progress_label(1, 3), "1/3 (33%)");
        assert_eq!(format_progress_label(2, 3), "2/3 (67%)");
    }

    #[test]
    fn progress_label_guards_zero_total() {
        assert_eq!(format_progress_label(0, 0), "0/0 (0%)");
    }

    #[test]
    fn filename_takes_last_path_segment() {
        assert_eq!(
            filename_from_url("https://cdn.example.com/pages/plumber-austin.html"),
            "plumber-austin.html"
        );
        // Trailing slash leaves the last non-empty segment.
        assert_eq!(
            filename_from_url("https://cdn.example.com/pages/batch.zip/"),
            "batch.zip"
        );
    }

    #[test]
    fn filename_falls_back_on_bad_input() {
        assert_eq!(filename_from_url("not a url"), DEFAULT_DOWNLOAD_NAME);
        assert_eq!(filename_from_url("https://cdn.example.com"), DEFAULT_DOWNLOAD_NAME);
        assert_eq!(filename_from_url("https://cdn.example.com/"), DEFAULT_DOWNLOAD_NAME);
    }
}
