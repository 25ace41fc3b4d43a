//! Show pages: flat listing and create-only form

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Form;
use tracing::{error, info};

use showbill_common::db::shows;

use super::{redirect_with_notice, render, NoticeQuery};
use crate::api::error::PageError;
use crate::forms::{FieldError, ShowForm};
use crate::views::ShowRow;
use crate::AppState;

/// GET /shows - all shows with joined artist/venue names
pub async fn listing(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Response, PageError> {
    let rows: Vec<ShowRow> = shows::list_shows(&state.db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let mut ctx = tera::Context::new();
    ctx.insert("shows", &rows);
    ctx.insert("notice", &query.notice);
    Ok(render(&state, "shows.html", &ctx)?.into_response())
}

/// GET /shows/create - blank form
pub async fn create_form(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Response, PageError> {
    render_form(&state, &ShowForm::default(), &[], query.notice.as_deref())
}

/// POST /shows/create - validate and insert
///
/// A venue or artist id pointing at no row passes validation but fails the
/// foreign key check at commit, which lands in the generic failure path.
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Result<Response, PageError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => return render_form(&state, &form, &errors, None),
    };

    match shows::insert_show(&state.db, &input).await {
        Ok(id) => {
            info!("Created show {}", id);
            Ok(redirect_with_notice("/", "Show was successfully listed!").into_response())
        }
        Err(e) => {
            error!("Failed to create show: {}", e);
            Ok(redirect_with_notice(
                "/shows/create",
                "An error occurred. Show could not be listed.",
            )
            .into_response())
        }
    }
}

fn render_form(
    state: &AppState,
    form: &ShowForm,
    errors: &[FieldError],
    notice: Option<&str>,
) -> Result<Response, PageError> {
    let mut ctx = tera::Context::new();
    ctx.insert("heading", "List a new show");
    ctx.insert("action", "/shows/create");
    ctx.insert("form", form);
    ctx.insert("errors", errors);
    ctx.insert("notice", &notice);
    Ok(render(state, "show_form.html", &ctx)?.into_response())
}
