//! Integration tests for the showbill-web HTTP surface
//!
//! Drives the full router against an in-memory database:
//! - listing, search, and detail pages
//! - create/edit/delete round trips
//! - validation failures and 404 handling

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::util::ServiceExt; // for `oneshot` method

use showbill_common::db::init_memory_database;
use showbill_web::{build_router, AppState};

/// Test helper: app over a fresh in-memory database
async fn setup_app() -> axum::Router {
    let pool = init_memory_database().await.expect("in-memory database");
    build_router(AppState::new(pool))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Should be UTF-8")
}

const VENUE_FORM: &str = "name=The+Musical+Hop&city=San+Francisco&state=CA\
    &address=1015+Folsom+Street&phone=(415)+000-1234\
    &image_link=https%3A%2F%2Fexample.com%2Fhop.jpg\
    &genres=Jazz%2C+Reggae&seeking_talent=y\
    &seeking_description=Looking+for+local+artists";

const ARTIST_FORM: &str = "name=Guns+N+Petals&city=San+Francisco&state=CA\
    &image_link=https%3A%2F%2Fexample.com%2Fgnp.jpg&genres=Rock+n+Roll";

// =============================================================================
// Health and landing page
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app().await;

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value =
        serde_json::from_str(&body_string(response.into_body()).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "showbill-web");
}

#[tokio::test]
async fn test_home_page_renders() {
    let app = setup_app().await;

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    assert!(body.contains("Showbill"));
}

#[tokio::test]
async fn test_home_page_shows_notice() {
    let app = setup_app().await;

    let response = app
        .oneshot(get("/?notice=Venue%20was%20successfully%20listed!"))
        .await
        .unwrap();
    let body = body_string(response.into_body()).await;
    assert!(body.contains("Venue was successfully listed!"));
}

// =============================================================================
// Venue pages
// =============================================================================

#[tokio::test]
async fn test_empty_venue_directory() {
    let app = setup_app().await;

    let response = app.oneshot(get("/venues")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    assert!(body.contains("No venues listed yet"));
}

#[tokio::test]
async fn test_create_venue_then_directory_and_detail() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(post_form("/venues/create", VENUE_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert!(location.starts_with("/?notice="));

    let response = app.clone().oneshot(get("/venues")).await.unwrap();
    let body = body_string(response.into_body()).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("San Francisco, CA"));
    assert!(body.contains("0 upcoming shows"));

    let response = app.oneshot(get("/venues/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Currently seeking talent"));
    assert!(body.contains("Jazz"));
}

#[tokio::test]
async fn test_venue_detail_missing_id_is_404() {
    let app = setup_app().await;

    let response = app.oneshot(get("/venues/999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response.into_body()).await;
    assert!(body.contains("404"));
}

#[tokio::test]
async fn test_venue_create_validation_failure_renders_field_errors() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(post_form("/venues/create", "city=San+Francisco&state=CA"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    assert!(body.contains("name is required"));
    assert!(body.contains("image_link is required"));
    assert!(body.contains("genres is required"));

    // Nothing was persisted
    let response = app.oneshot(get("/venues")).await.unwrap();
    let body = body_string(response.into_body()).await;
    assert!(body.contains("No venues listed yet"));
}

#[tokio::test]
async fn test_venue_search_is_case_insensitive() {
    let app = setup_app().await;
    app.clone()
        .oneshot(post_form("/venues/create", VENUE_FORM))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_form("/venues/search", "search_term=hop"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("1 result"));
    assert!(body.contains("The Musical Hop"));

    let response = app
        .oneshot(post_form("/venues/search", "search_term=Pianos"))
        .await
        .unwrap();
    let body = body_string(response.into_body()).await;
    assert!(body.contains("0 results"));
}

#[tokio::test]
async fn test_failure_notice_renders_on_form_pages() {
    let app = setup_app().await;
    app.clone()
        .oneshot(post_form("/venues/create", VENUE_FORM))
        .await
        .unwrap();

    // Failed mutations redirect back to these pages with a notice
    for uri in [
        "/venues/create?notice=An%20error%20occurred.",
        "/venues/1/edit?notice=An%20error%20occurred.",
        "/artists/create?notice=An%20error%20occurred.",
        "/shows/create?notice=An%20error%20occurred.",
    ] {
        let response = app.clone().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response.into_body()).await;
        assert!(body.contains("An error occurred."), "no notice on {}", uri);
    }
}

#[tokio::test]
async fn test_venue_edit_round_trip() {
    let app = setup_app().await;
    app.clone()
        .oneshot(post_form("/venues/create", VENUE_FORM))
        .await
        .unwrap();

    // Edit form is prefilled
    let response = app.clone().oneshot(get("/venues/1/edit")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("The Musical Hop"));

    let updated = VENUE_FORM.replace("The+Musical+Hop", "The+Musical+Hop+II");
    let response = app
        .clone()
        .oneshot(post_form("/venues/1/edit", &updated))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app.oneshot(get("/venues/1")).await.unwrap();
    let body = body_string(response.into_body()).await;
    assert!(body.contains("The Musical Hop II"));
}

#[tokio::test]
async fn test_venue_delete() {
    let app = setup_app().await;
    app.clone()
        .oneshot(post_form("/venues/create", VENUE_FORM))
        .await
        .unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri("/venues/1")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app.oneshot(get("/venues/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Artist pages
// =============================================================================

#[tokio::test]
async fn test_create_artist_then_listing_and_detail() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(post_form("/artists/create", ARTIST_FORM))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app.clone().oneshot(get("/artists")).await.unwrap();
    let body = body_string(response.into_body()).await;
    assert!(body.contains("Guns N Petals"));

    let response = app.oneshot(get("/artists/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("Rock n Roll"));
    assert!(body.contains("Not currently seeking a venue"));
}

#[tokio::test]
async fn test_artist_detail_missing_id_is_404() {
    let app = setup_app().await;

    let response = app.oneshot(get("/artists/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_artist_search_empty_term_matches_all() {
    let app = setup_app().await;
    app.clone()
        .oneshot(post_form("/artists/create", ARTIST_FORM))
        .await
        .unwrap();

    let response = app
        .oneshot(post_form("/artists/search", "search_term="))
        .await
        .unwrap();
    let body = body_string(response.into_body()).await;
    assert!(body.contains("1 result"));
    assert!(body.contains("Guns N Petals"));
}

#[tokio::test]
async fn test_artist_edit_round_trip() {
    let app = setup_app().await;
    app.clone()
        .oneshot(post_form("/artists/create", ARTIST_FORM))
        .await
        .unwrap();

    let updated = ARTIST_FORM.replace("San+Francisco", "Oakland");
    let response = app
        .clone()
        .oneshot(post_form("/artists/1/edit", &updated))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app.oneshot(get("/artists/1")).await.unwrap();
    let body = body_string(response.into_body()).await;
    assert!(body.contains("Oakland, CA"));
}

// =============================================================================
// Show pages
// =============================================================================

#[tokio::test]
async fn test_create_show_and_listing() {
    let app = setup_app().await;
    app.clone()
        .oneshot(post_form("/venues/create", VENUE_FORM))
        .await
        .unwrap();
    app.clone()
        .oneshot(post_form("/artists/create", ARTIST_FORM))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(post_form(
            "/shows/create",
            "venue_id=1&artist_id=1&start_time=2030-06-20T20%3A00",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert!(location.contains("successfully"));

    let response = app.clone().oneshot(get("/shows")).await.unwrap();
    let body = body_string(response.into_body()).await;
    assert!(body.contains("Guns N Petals"));
    assert!(body.contains("The Musical Hop"));

    // The far-future show counts as upcoming on the venue page
    let response = app.oneshot(get("/venues/1")).await.unwrap();
    let body = body_string(response.into_body()).await;
    assert!(body.contains("1 upcoming show"));
}

#[tokio::test]
async fn test_create_show_with_dangling_reference_fails() {
    let app = setup_app().await;

    let response = app
        .clone()
        .oneshot(post_form("/shows/create", "venue_id=7&artist_id=7"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response.headers()[header::LOCATION].to_str().unwrap();
    assert!(location.starts_with("/shows/create?notice="));

    let response = app.oneshot(get("/shows")).await.unwrap();
    let body = body_string(response.into_body()).await;
    assert!(body.contains("No shows listed yet"));
}

#[tokio::test]
async fn test_create_show_validation_failure() {
    let app = setup_app().await;

    let response = app
        .oneshot(post_form("/shows/create", "venue_id=abc&artist_id=1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response.into_body()).await;
    assert!(body.contains("venue_id must be a positive integer id"));
}

// =============================================================================
// Error pages
// =============================================================================

#[tokio::test]
async fn test_unknown_path_renders_404_page() {
    let app = setup_app().await;

    let response = app.oneshot(get("/no/such/page")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_string(response.into_body()).await;
    assert!(body.contains("Page not found"));
}
