use common::model::page::{GeneratedPage, PageSummary};
use common::requests::CreatePageRequest;

use super::{delete_json, get_json, post_json, ApiError};

pub async fn list() -> Result<Vec<PageSummary>, ApiError> {
    get_json("/api/pages/").await
}

pub async fn create(request: &CreatePageRequest) -> Result<GeneratedPage, ApiError> {
    post_json("/api/pages/", request).await
}

pub async fn delete(page_id: &str) -> Result<(), ApiError> {
    delete_json::<serde_json::Value>(&format!("/api/pages/{page_id}"))
        .await
        .map(|_| ())
}
