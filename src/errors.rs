use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure talking to the upstream ERP API.
    Api(reqwest::Error),
    /// The upstream API answered with a non-success status.
    ApiStatus(u16, String),
    /// The upstream API answered with a body we could not decode.
    Decode(String),
    Template(askama::Error),
    Csv(String),
    Session(String),
    Forbidden(String),
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Api(e) => write!(f, "API request failed: {e}"),
            AppError::ApiStatus(status, path) => {
                write!(f, "API returned HTTP {status} for {path}")
            }
            AppError::Decode(e) => write!(f, "API response decode error: {e}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Csv(e) => write!(f, "CSV export error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::Forbidden(e) => write!(f, "Forbidden: {e}"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound().body("Not Found"),
            AppError::Forbidden(_) => HttpResponse::Forbidden().body("Forbidden"),
            AppError::Session(_) => HttpResponse::SeeOther()
                .insert_header(("Location", "/login"))
                .finish(),
            AppError::Api(_) | AppError::ApiStatus(..) | AppError::Decode(_) => {
                log::error!("{self}");
                HttpResponse::BadGateway().body("Upstream ERP API is unavailable")
            }
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Api(e)
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::Csv(e.to_string())
    }
}

/// Render an Askama template into a 200 HTML response.
pub fn render<T: Template>(tmpl: T) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
