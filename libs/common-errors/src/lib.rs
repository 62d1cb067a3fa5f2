use std::fmt;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

/// Failure that aborts a request before any page is rendered.
///
/// Recoverable problems (validation, failed statements) never become an
/// `AppError`; they are collected into the page banner instead.
#[derive(Debug)]
pub enum AppError {
    InternalServerError { message: String },
}

impl AppError {
    pub fn internal_server_error(message: &str) -> Self {
        Self::InternalServerError {
            message: message.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InternalServerError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::InternalServerError { message } => message,
        }
    }

    // The message stays in the logs; the page only names the status.
    fn to_html(&self) -> String {
        let status = self.status_code();
        format!(
            "<!doctype html>\n<html lang=\"en\">\n<head><meta \
             charset=\"utf-8\"><title>{code} {reason}</title></head>\n\
             <body><h1>{code} {reason}</h1><p>The request could not be \
             completed. Please try again later.</p></body>\n</html>\n",
            code = status.as_u16(),
            reason = status.canonical_reason().unwrap_or("Error"),
        )
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        error!(status = status.as_u16(), "{}", self.message());
        (status, Html(self.to_html())).into_response()
    }
}
