//! showbill-web library - HTTP surface of the booking directory

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use sqlx::SqlitePool;
use tera::Tera;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod forms;
pub mod views;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Compiled page templates
    pub templates: Arc<Tera>,
}

impl AppState {
    /// Create new application state with the built-in templates
    pub fn new(db: SqlitePool) -> Self {
        Self {
            db,
            templates: Arc::new(build_templates()),
        }
    }
}

/// Compile the embedded page templates.
///
/// Templates ship inside the binary; a parse failure is a build defect, not a
/// runtime condition.
fn build_templates() -> Tera {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("templates/base.html")),
        ("home.html", include_str!("templates/home.html")),
        ("venues.html", include_str!("templates/venues.html")),
        ("venue_detail.html", include_str!("templates/venue_detail.html")),
        ("venue_form.html", include_str!("templates/venue_form.html")),
        ("artists.html", include_str!("templates/artists.html")),
        ("artist_detail.html", include_str!("templates/artist_detail.html")),
        ("artist_form.html", include_str!("templates/artist_form.html")),
        ("search_results.html", include_str!("templates/search_results.html")),
        ("shows.html", include_str!("templates/shows.html")),
        ("show_form.html", include_str!("templates/show_form.html")),
    ])
    .expect("embedded templates failed to parse");
    tera
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::home::index))
        .route("/health", get(api::health::health))
        // Venues
        .route("/venues", get(api::venues::directory))
        .route("/venues/search", post(api::venues::search))
        .route("/venues/create", get(api::venues::create_form))
        .route("/venues/create", post(api::venues::create))
        .route("/venues/:id", get(api::venues::detail))
        .route("/venues/:id", delete(api::venues::remove))
        .route("/venues/:id/edit", get(api::venues::edit_form))
        .route("/venues/:id/edit", post(api::venues::edit))
        // Artists
        .route("/artists", get(api::artists::listing))
        .route("/artists/search", post(api::artists::search))
        .route("/artists/create", get(api::artists::create_form))
        .route("/artists/create", post(api::artists::create))
        .route("/artists/:id", get(api::artists::detail))
        .route("/artists/:id/edit", get(api::artists::edit_form))
        .route("/artists/:id/edit", post(api::artists::edit))
        // Shows
        .route("/shows", get(api::shows::listing))
        .route("/shows/create", get(api::shows::create_form))
        .route("/shows/create", post(api::shows::create))
        .fallback(api::error::not_found_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
