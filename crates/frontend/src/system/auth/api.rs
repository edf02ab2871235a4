use contracts::shared::api_error::ApiError;
use contracts::system::auth::{LoginRequest, LoginResponse, LOGIN_PATH};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Exchange username and password for a session token
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url(LOGIN_PATH))
        .json(&request)
        .map_err(|e| ApiError::Parse(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(response.status(), &body));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}
