//! HTTP handlers for showbill-web

pub mod artists;
pub mod error;
pub mod health;
pub mod home;
pub mod shows;
pub mod venues;

use axum::response::{Html, Redirect};
use serde::Deserialize;

use crate::AppState;
use error::PageError;

/// Post-redirect notice carried in the query string.
///
/// Stateless replacement for session-backed flash messages: mutation handlers
/// redirect with `?notice=...` and every page renders it when present.
#[derive(Debug, Deserialize)]
pub(crate) struct NoticeQuery {
    pub notice: Option<String>,
}

/// Render a named template into a page response.
pub(crate) fn render(
    state: &AppState,
    template: &str,
    ctx: &tera::Context,
) -> Result<Html<String>, PageError> {
    let body = state.templates.render(template, ctx)?;
    Ok(Html(body))
}

/// Redirect to `path` with a user-visible notice in the query string.
pub(crate) fn redirect_with_notice(path: &str, notice: &str) -> Redirect {
    let query = serde_urlencoded::to_string([("notice", notice)]).unwrap_or_default();
    Redirect::to(&format!("{}?{}", path, query))
}
