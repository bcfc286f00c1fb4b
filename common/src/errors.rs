//! Normalization of backend error responses.

use serde_json::Value;

/// Extracts a human-readable message from a non-success HTTP response.
///
/// Priority order, matching the backend's FastAPI error shape:
/// 1. a JSON body with a string `detail` field,
/// 2. a JSON body with an array `detail` field, entries joined with `"; "`,
/// 3. the raw response body if non-empty,
/// 4. the HTTP status text,
/// 5. a generic fallback.
///
/// The result always carries the status code: `"<detail> (HTTP <status>)"`.
pub fn error_detail(status: u16, status_text: &str, body: &str) -> String {
    let detail = json_detail(body)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .or_else(|| (!status_text.is_empty()).then(|| status_text.to_string()))
        .unwrap_or_else(|| "API request failed".to_string());

    format!("{detail} (HTTP {status})")
}

fn json_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect();
            Some(parts.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_wins() {
        assert_eq!(
            error_detail(404, "Not Found", r#"{"detail": "Job not found"}"#),
            "Job not found (HTTP 404)"
        );
    }

    #[test]
    fn array_detail_joins_entries() {
        assert_eq!(
            error_detail(
                422,
                "Unprocessable Entity",
                r#"{"detail": ["name is required", "html_content too short"]}"#
            ),
            "name is required; html_content too short (HTTP 422)"
        );
    }

    #[test]
    fn raw_body_beats_status_text() {
        assert_eq!(
            error_detail(502, "Bad Gateway", "upstream exploded"),
            "upstream exploded (HTTP 502)"
        );
    }

    #[test]
    fn falls_back_to_status_text_then_generic() {
        assert_eq!(error_detail(500, "Internal Server Error", ""), "Internal Server Error (HTTP 500)");
        assert_eq!(error_detail(500, "", ""), "API request failed (HTTP 500)");
    }

    #[test]
    fn non_string_detail_is_ignored() {
        // A numeric detail is not a message; the body text itself is used.
        assert_eq!(
            error_detail(400, "Bad Request", r#"{"detail": 7}"#),
            r#"{"detail": 7} (HTTP 400)"#
        );
    }
}
