//! Page-level error handling
//!
//! Handlers return `Result<_, PageError>`; the error renders the dedicated
//! 404 or 500 page. Underlying causes are logged server-side only.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::error;

const NOT_FOUND_HTML: &str = include_str!("../templates/404.html");
const SERVER_ERROR_HTML: &str = include_str!("../templates/500.html");

/// Errors a page handler can surface to the browser
#[derive(Debug)]
pub enum PageError {
    /// Resource does not exist; renders the 404 page
    NotFound,
    /// Anything else; renders the generic 500 page
    Internal(String),
}

impl From<showbill_common::Error> for PageError {
    fn from(err: showbill_common::Error) -> Self {
        match err {
            showbill_common::Error::NotFound(_) => PageError::NotFound,
            other => PageError::Internal(other.to_string()),
        }
    }
}

impl From<tera::Error> for PageError {
    fn from(err: tera::Error) -> Self {
        PageError::Internal(format!("template error: {}", err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound => {
                (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML)).into_response()
            }
            PageError::Internal(cause) => {
                // Cause stays in the server log; the browser gets a generic page
                error!("Request failed: {}", cause);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(SERVER_ERROR_HTML)).into_response()
            }
        }
    }
}

/// Fallback handler for unknown paths
pub async fn not_found_page() -> Response {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_HTML)).into_response()
}
