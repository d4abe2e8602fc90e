use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::{ApiClient, identity};
use crate::auth::session::{self, get_user_id};
use crate::errors::{AppError, render};
use crate::handlers::see_other;
use crate::templates_structs::auth::LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    pub employee_id: String,
    pub password: String,
}

pub async fn login_page(session: Session) -> Result<HttpResponse, AppError> {
    if get_user_id(&session).is_some() {
        return Ok(see_other("/dashboard"));
    }
    render(LoginTemplate { error: None })
}

pub async fn login_submit(
    api: web::Data<ApiClient>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    if form.employee_id.trim().is_empty() || form.password.is_empty() {
        return render(LoginTemplate {
            error: Some("Employee ID and password are required".into()),
        });
    }

    match identity::sign_in(&api, form.employee_id.trim(), &form.password).await {
        Ok(Some(user)) => {
            session::sign_in(&session, &user)?;
            log::info!("{} signed in as role {}", user.username, user.role_name);
            Ok(see_other("/dashboard"))
        }
        Ok(None) => render(LoginTemplate {
            error: Some("Invalid employee ID or password".into()),
        }),
        Err(e) => {
            log::error!("Sign-in failed: {e}");
            render(LoginTemplate {
                error: Some("Sign-in service is unavailable — try again later".into()),
            })
        }
    }
}

pub async fn logout(session: Session) -> HttpResponse {
    session.purge();
    see_other("/login")
}
