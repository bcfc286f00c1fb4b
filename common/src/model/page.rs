use serde::{Deserialize, Serialize};

/// A generated page record as returned by `POST /api/pages/`.
///
/// Immutable from the client's perspective except for deletion. The
/// `storage_url` points at the rendered file in object storage and must be
/// non-empty for a generation to count as successful.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPage {
    pub id: String,
    #[serde(default)]
    pub template_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub meta_description: String,
    pub slug: String,
    #[serde(default)]
    pub storage_url: String,
    #[serde(default)]
    pub word_count: u32,
    #[serde(default)]
    pub seo_score: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub is_bulk: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Trimmed page record used by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSummary {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub seo_score: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created_at: String,
}
