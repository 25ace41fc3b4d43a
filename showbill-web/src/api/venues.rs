//! Venue pages: directory, search, detail, create, edit, delete

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Form;
use chrono::Utc;
use tracing::{error, info};

use showbill_common::db::{shows, venues};

use super::{redirect_with_notice, render, NoticeQuery};
use crate::api::error::PageError;
use crate::forms::{FieldError, SearchForm, VenueForm};
use crate::views::{SearchResults, VenueDetail};
use crate::AppState;

/// GET /venues - grouped directory by (state, city)
pub async fn directory(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Response, PageError> {
    let areas = venues::venue_directory(&state.db, Utc::now().naive_utc()).await?;

    let mut ctx = tera::Context::new();
    ctx.insert("areas", &areas);
    ctx.insert("notice", &query.notice);
    Ok(render(&state, "venues.html", &ctx)?.into_response())
}

/// POST /venues/search - case-insensitive name search
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Response, PageError> {
    let matches = venues::search_venues(&state.db, &form.search_term).await?;
    let results = SearchResults::new(&form.search_term, matches, "/venues");

    let mut ctx = tera::Context::from_serialize(&results)?;
    ctx.insert("heading", "Venues");
    Ok(render(&state, "search_results.html", &ctx)?.into_response())
}

/// GET /venues/:id - detail page with past/upcoming shows
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<NoticeQuery>,
) -> Result<Response, PageError> {
    let venue = venues::get_venue(&state.db, id).await?;
    let (past, upcoming) = shows::venue_shows(&state.db, id, Utc::now().naive_utc()).await?;

    let view = VenueDetail::new(venue, past, upcoming);
    let mut ctx = tera::Context::new();
    ctx.insert("venue", &view);
    ctx.insert("notice", &query.notice);
    Ok(render(&state, "venue_detail.html", &ctx)?.into_response())
}

/// GET /venues/create - blank form
pub async fn create_form(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Response, PageError> {
    render_form(
        &state,
        "List a new venue",
        "/venues/create",
        &VenueForm::default(),
        &[],
        query.notice.as_deref(),
    )
}

/// POST /venues/create - validate and insert
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Result<Response, PageError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return render_form(&state, "List a new venue", "/venues/create", &form, &errors, None);
        }
    };

    match venues::insert_venue(&state.db, &input).await {
        Ok(id) => {
            info!("Created venue {} ({})", id, input.name);
            Ok(redirect_with_notice(
                "/",
                &format!("Venue {} was successfully listed!", input.name),
            )
            .into_response())
        }
        Err(e) => {
            error!("Failed to create venue: {}", e);
            Ok(redirect_with_notice(
                "/venues/create",
                &format!("An error occurred. Venue {} could not be listed.", input.name),
            )
            .into_response())
        }
    }
}

/// GET /venues/:id/edit - form prefilled from the existing row
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<NoticeQuery>,
) -> Result<Response, PageError> {
    let venue = venues::get_venue(&state.db, id).await?;
    render_form(
        &state,
        &format!("Edit venue {}", venue.name),
        &format!("/venues/{}/edit", id),
        &VenueForm::from_venue(&venue),
        &[],
        query.notice.as_deref(),
    )
}

/// POST /venues/:id/edit - validate and update
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<VenueForm>,
) -> Result<Response, PageError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return render_form(
                &state,
                "Edit venue",
                &format!("/venues/{}/edit", id),
                &form,
                &errors,
                None,
            );
        }
    };

    match venues::update_venue(&state.db, id, &input).await {
        Ok(()) => {
            info!("Updated venue {}", id);
            Ok(redirect_with_notice(
                &format!("/venues/{}", id),
                &format!("Venue {} was successfully updated!", input.name),
            )
            .into_response())
        }
        Err(showbill_common::Error::NotFound(_)) => Err(PageError::NotFound),
        Err(e) => {
            error!("Failed to update venue {}: {}", id, e);
            Ok(redirect_with_notice(
                &format!("/venues/{}/edit", id),
                &format!("An error occurred. Venue {} could not be updated.", input.name),
            )
            .into_response())
        }
    }
}

/// DELETE /venues/:id - remove a venue and its shows
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, PageError> {
    match venues::delete_venue(&state.db, id).await {
        Ok(()) => {
            info!("Deleted venue {}", id);
            Ok(redirect_with_notice("/venues", "Venue was successfully removed!").into_response())
        }
        Err(showbill_common::Error::NotFound(_)) => Err(PageError::NotFound),
        Err(e) => {
            error!("Failed to delete venue {}: {}", id, e);
            Ok(redirect_with_notice("/venues", "An error occurred. Venue could not be removed.")
                .into_response())
        }
    }
}

fn render_form(
    state: &AppState,
    heading: &str,
    action: &str,
    form: &VenueForm,
    errors: &[FieldError],
    notice: Option<&str>,
) -> Result<Response, PageError> {
    let mut ctx = tera::Context::new();
    ctx.insert("heading", heading);
    ctx.insert("action", action);
    ctx.insert("form", form);
    ctx.insert("errors", errors);
    ctx.insert("notice", &notice);
    Ok(render(state, "venue_form.html", &ctx)?.into_response())
}
