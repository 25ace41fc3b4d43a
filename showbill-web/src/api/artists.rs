//! Artist pages: listing, search, detail, create, edit (no delete path)

use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Form;
use chrono::Utc;
use tracing::{error, info};

use showbill_common::db::{artists, shows};

use super::{redirect_with_notice, render, NoticeQuery};
use crate::api::error::PageError;
use crate::forms::{ArtistForm, FieldError, SearchForm};
use crate::views::{ArtistDetail, SearchResults};
use crate::AppState;

/// GET /artists - full listing ordered by id
pub async fn listing(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Response, PageError> {
    let artists = artists::list_artists(&state.db).await?;

    let mut ctx = tera::Context::new();
    ctx.insert("artists", &artists);
    ctx.insert("notice", &query.notice);
    Ok(render(&state, "artists.html", &ctx)?.into_response())
}

/// POST /artists/search - case-insensitive name search
pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<Response, PageError> {
    let matches = artists::search_artists(&state.db, &form.search_term).await?;
    let results = SearchResults::new(&form.search_term, matches, "/artists");

    let mut ctx = tera::Context::from_serialize(&results)?;
    ctx.insert("heading", "Artists");
    Ok(render(&state, "search_results.html", &ctx)?.into_response())
}

/// GET /artists/:id - detail page with past/upcoming shows
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<NoticeQuery>,
) -> Result<Response, PageError> {
    let artist = artists::get_artist(&state.db, id).await?;
    let (past, upcoming) = shows::artist_shows(&state.db, id, Utc::now().naive_utc()).await?;

    let view = ArtistDetail::new(artist, past, upcoming);
    let mut ctx = tera::Context::new();
    ctx.insert("artist", &view);
    ctx.insert("notice", &query.notice);
    Ok(render(&state, "artist_detail.html", &ctx)?.into_response())
}

/// GET /artists/create - blank form
pub async fn create_form(
    State(state): State<AppState>,
    Query(query): Query<NoticeQuery>,
) -> Result<Response, PageError> {
    render_form(
        &state,
        "List a new artist",
        "/artists/create",
        &ArtistForm::default(),
        &[],
        query.notice.as_deref(),
    )
}

/// POST /artists/create - validate and insert
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Result<Response, PageError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return render_form(&state, "List a new artist", "/artists/create", &form, &errors, None);
        }
    };

    match artists::insert_artist(&state.db, &input).await {
        Ok(id) => {
            info!("Created artist {} ({})", id, input.name);
            Ok(redirect_with_notice(
                "/",
                &format!("Artist {} was successfully listed!", input.name),
            )
            .into_response())
        }
        Err(e) => {
            error!("Failed to create artist: {}", e);
            Ok(redirect_with_notice(
                "/artists/create",
                &format!("An error occurred. Artist {} could not be listed.", input.name),
            )
            .into_response())
        }
    }
}

/// GET /artists/:id/edit - form prefilled from the existing row
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<NoticeQuery>,
) -> Result<Response, PageError> {
    let artist = artists::get_artist(&state.db, id).await?;
    render_form(
        &state,
        &format!("Edit artist {}", artist.name),
        &format!("/artists/{}/edit", id),
        &ArtistForm::from_artist(&artist),
        &[],
        query.notice.as_deref(),
    )
}

/// POST /artists/:id/edit - validate and update
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ArtistForm>,
) -> Result<Response, PageError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(errors) => {
            return render_form(
                &state,
                "Edit artist",
                &format!("/artists/{}/edit", id),
                &form,
                &errors,
                None,
            );
        }
    };

    match artists::update_artist(&state.db, id, &input).await {
        Ok(()) => {
            info!("Updated artist {}", id);
            Ok(redirect_with_notice(
                &format!("/artists/{}", id),
                &format!("Artist {} was successfully updated!", input.name),
            )
            .into_response())
        }
        Err(showbill_common::Error::NotFound(_)) => Err(PageError::NotFound),
        Err(e) => {
            error!("Failed to update artist {}: {}", id, e);
            Ok(redirect_with_notice(
                &format!("/artists/{}/edit", id),
                &format!("An error occurred. Artist {} could not be updated.", input.name),
            )
            .into_response())
        }
    }
}

fn render_form(
    state: &AppState,
    heading: &str,
    action: &str,
    form: &ArtistForm,
    errors: &[FieldError],
    notice: Option<&str>,
) -> Result<Response, PageError> {
    let mut ctx = tera::Context::new();
    ctx.insert("heading", heading);
    ctx.insert("action", action);
    ctx.insert("form", form);
    ctx.insert("errors", errors);
    ctx.insert("notice", &notice);
    Ok(render(state, "artist_form.html", &ctx)?.into_response())
}
