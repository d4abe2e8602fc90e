use actix_session::Session;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Identity returned by the upstream sign-in endpoint and kept in the session.
/// Every page reads this context; nothing here is writable after sign-in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    #[serde(rename = "UID")]
    pub uid: i64,
    #[serde(rename = "RoleId")]
    pub role_id: i64,
    #[serde(rename = "UserName")]
    pub username: String,
    #[serde(rename = "RoleName")]
    pub role_name: String,
    /// Home cost center, when the role is scoped to one. Used as the
    /// role-derived default for report filters.
    #[serde(rename = "CCode", default)]
    pub cost_center: Option<String>,
}

pub fn sign_in(session: &Session, user: &CurrentUser) -> Result<(), AppError> {
    session.renew();
    session
        .insert("current_user", user)
        .map_err(|e| AppError::Session(format!("Failed to store identity: {e}")))
}

pub fn current_user(session: &Session) -> Result<CurrentUser, AppError> {
    session
        .get::<CurrentUser>("current_user")
        .map_err(|e| AppError::Session(format!("Session error: {e}")))?
        .ok_or_else(|| AppError::Session("Not signed in".into()))
}

pub fn get_user_id(session: &Session) -> Option<i64> {
    session
        .get::<CurrentUser>("current_user")
        .unwrap_or(None)
        .map(|u| u.uid)
}

/// One-shot notice shown on the next rendered page.
pub fn flash(session: &Session, message: &str) {
    let _ = session.insert("flash", message);
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>("flash").unwrap_or(None);
    if flash.is_some() {
        session.remove("flash");
    }
    flash
}
