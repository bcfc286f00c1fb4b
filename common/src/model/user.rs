use serde::{Deserialize, Serialize};

/// The authenticated account as reported by `GET /api/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
}
