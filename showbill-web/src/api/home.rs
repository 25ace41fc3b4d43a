//! Landing page

use axum::extract::{Query, State};
use axum::response::Html;

use super::{render, NoticeQuery};
use crate::api::error::PageError;
use crate::AppState;

/// GET / - landing page
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Html<String>, PageError> {
    let mut ctx = tera::Context::new();
    ctx.insert("notice", &query.notice);
    render(&state, "home.html", &ctx)
}
