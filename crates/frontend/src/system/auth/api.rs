use contracts::system::auth::CurrentUser;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::shared::api_utils::api_url;
use crate::shared::errors::ApiError;

/// Current user of the session cookie; `Unauthorized` when there is none.
pub async fn get_current_user() -> Result<CurrentUser, ApiError> {
    let response = Request::get(&api_url("auth/me"))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }

    response
        .json::<CurrentUser>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
