//! Error handling - failures rendered as HTML error pages.

use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use askama::Template;
use blog_core::RepoError;
use blog_shared::ErrorPage;
use std::fmt;

use crate::observability::RequestId;
use crate::views::ErrorTemplate;

/// Application-level error type that converts to an error page.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    /// The message is logged, never shown.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    fn page(&self) -> ErrorPage {
        let page = match self {
            AppError::NotFound(detail) => ErrorPage::not_found(detail),
            AppError::Internal(_) => ErrorPage::internal_error(),
        };
        match RequestId::current() {
            Some(id) => page.with_request_id(id.as_str()),
            None => page,
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // The request span carries the request id.
        if let AppError::Internal(detail) = self {
            tracing::error!("Internal error: {}", detail);
        }

        let page = self.page();
        let mut response = HttpResponse::build(self.status_code());
        match (ErrorTemplate { page: &page }).render() {
            Ok(body) => response.content_type(ContentType::html()).body(body),
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                response
                    .content_type(ContentType::plaintext())
                    .body(format!("{} {}", page.status, page.title))
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            // The create flow turns duplicates into a form warning before
            // they get here.
            RepoError::DuplicateKey { field, value } => {
                AppError::Internal(format!("Unhandled duplicate {} '{}'", field, value))
            }
            RepoError::Connection(msg) => {
                AppError::Internal(format!("Database connection error: {}", msg))
            }
            RepoError::Query(msg) => AppError::Internal(format!("Database query error: {}", msg)),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Internal(format!("Template rendering failed: {}", err))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
