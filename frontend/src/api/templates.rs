use common::model::template::{Template, TemplateSummary, TemplateValidation};
use common::requests::{CreateTemplateRequest, UpdateTemplateRequest, ValidateTemplateRequest};

use super::{delete_json, get_json, post_json, put_json, ApiError};

pub async fn list() -> Result<Vec<TemplateSummary>, ApiError> {
    get_json("/api/templates/").await
}

pub async fn get(template_id: &str) -> Result<Template, ApiError> {
    get_json(&format!("/api/templates/{template_id}")).await
}

pub async fn create(request: &CreateTemplateRequest) -> Result<Template, ApiError> {
    post_json("/api/templates/", request).await
}

pub async fn update(template_id: &str, request: &UpdateTemplateRequest) -> Result<Template, ApiError> {
    put_json(&format!("/api/templates/{template_id}"), request).await
}

pub async fn delete(template_id: &str) -> Result<(), ApiError> {
    delete_json::<serde_json::Value>(&format!("/api/templates/{template_id}"))
        .await
        .map(|_| ())
}

/// Backend-side placeholder extraction over raw HTML content.
pub async fn extract_variables(html_content: &str) -> Result<TemplateValidation, ApiError> {
    let request = ValidateTemplateRequest {
        html_content: html_content.to_string(),
    };
    post_json("/api/templates/validate", &request).await
}
