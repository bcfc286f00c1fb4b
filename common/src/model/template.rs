use serde::{Deserialize, Serialize};

/// A stored HTML template as returned by `GET /api/templates/{id}`.
///
/// `variables` is derived by the backend from `{{name}}` placeholders in
/// `html_content`; the client treats it as read-only and never extracts
/// placeholders itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub html_content: String,
    #[serde(default)]
    pub variables: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Trimmed template record used by the list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSummary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub variables: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Result of `POST /api/templates/validate` over raw HTML content.
///
/// Besides the extracted variable names the backend reports structural
/// issues and SEO hints; the editor only surfaces what it needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateValidation {
    #[serde(default)]
    pub variables: Vec<String>,
    #[serde(default)]
    pub word_count: u32,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub sanitized_html: String,
}
