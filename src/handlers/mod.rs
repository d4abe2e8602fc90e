pub mod approvals;
pub mod auth_handlers;
pub mod dashboard;
pub mod reports;

use actix_web::HttpResponse;

/// Redirect-after-POST helper used by every mutating handler.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", location.to_string()))
        .finish()
}
