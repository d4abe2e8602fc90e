use serde_json::json;

use crate::api::ApiClient;
use crate::auth::session::CurrentUser;
use crate::errors::AppError;

/// Exchange credentials for an identity. Verification happens upstream; a
/// wrong password simply comes back as an empty result set.
pub async fn sign_in(
    api: &ApiClient,
    employee_id: &str,
    password: &str,
) -> Result<Option<CurrentUser>, AppError> {
    let body = json!({
        "EmployeeId": employee_id,
        "Password": password,
    });
    let response = api
        .http
        .post(api.url("auth/sign-in"))
        .json(&body)
        .send()
        .await?;
    let status = response.status();
    if status.as_u16() == 401 {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(AppError::ApiStatus(status.as_u16(), "auth/sign-in".into()));
    }
    let user: Option<CurrentUser> = response.json().await.ok();
    Ok(user)
}
