use common::model::user::User;

use super::{get_json, ApiError};

pub async fn me() -> Result<User, ApiError> {
    get_json("/api/auth/me").await
}
