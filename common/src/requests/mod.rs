//! Request payloads for the backend REST endpoints.

use serde::Serialize;
use std::collections::BTreeMap;

/// Body of `POST /api/templates/`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTemplateRequest {
    pub name: String,
    pub html_content: String,
}

/// Body of `PUT /api/templates/{id}`; omitted fields stay unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTemplateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
}

/// Body of `POST /api/templates/validate` (variable extraction).
#[derive(Debug, Clone, Serialize)]
pub struct ValidateTemplateRequest {
    pub html_content: String,
}

/// Body of `POST /api/pages/` (single-page generation).
///
/// `BTreeMap` keeps the serialized variable order stable, which makes the
/// debug request logs readable.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePageRequest {
    pub template_id: String,
    pub variables: BTreeMap<String, String>,
}
