use common::jobs::BulkJob;

use super::{delete_json, get_json, post_multipart, ApiError};

/// Submits a CSV for bulk generation. Multipart, not JSON.
pub async fn create(template_id: &str, file: &web_sys::File) -> Result<BulkJob, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build form data".to_string()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Network("could not attach file".to_string()))?;
    post_multipart(&format!("/api/bulk/?template_id={template_id}"), form).await
}

pub async fn status(job_id: &str) -> Result<BulkJob, ApiError> {
    get_json(&format!("/api/bulk/{job_id}")).await
}

pub async fn delete(job_id: &str) -> Result<(), ApiError> {
    delete_json::<serde_json::Value>(&format!("/api/bulk/{job_id}"))
        .await
        .map(|_| ())
}
