use contracts::shared::list::ApiErrorBody;
use contracts::system::auth::{CurrentUserEnvelope, LoginRequest, LoginResponse, UserInfo};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiErrorBody::message_from(&body)
            .unwrap_or_else(|| format!("Login failed: {}", response.status())));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Validate a stored token by fetching the signed-in user
pub async fn current_user(token: &str) -> Result<UserInfo, String> {
    let response = Request::get(&api_url("/api/auth/me"))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }

    response
        .json::<CurrentUserEnvelope>()
        .await
        .map(CurrentUserEnvelope::into_user)
        .map_err(|e| format!("Failed to parse response: {}", e))
}
