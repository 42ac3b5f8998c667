use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api_utils::post_json;
use crate::shared::error::FetchError;

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, FetchError> {
    if email.trim().is_empty() {
        return Err(FetchError::MissingParameter("email"));
    }
    let request = LoginRequest { email, password };
    post_json("/login", &request).await
}
