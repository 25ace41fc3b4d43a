//! Show queries and mutations
//!
//! Shows are create-only. The past/upcoming partition rule is total:
//! a show starting exactly at the evaluation instant counts as upcoming
//! (`start_time >= now`), past is `start_time < now`.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};

use super::ShowInput;
use crate::Result;

/// A show on a venue page, decorated with the performing artist.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ArtistAppearance {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

/// A show on an artist page, decorated with the hosting venue.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct VenueBooking {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: String,
    pub start_time: NaiveDateTime,
}

/// One row of the flat /shows listing with both counterpart names joined in.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: NaiveDateTime,
}

/// Insert a new show, returning its assigned id.
///
/// A missing start time defaults to the insertion instant. A venue or artist
/// id that resolves to no row fails the foreign key check and nothing is
/// written.
pub async fn insert_show(pool: &SqlitePool, input: &ShowInput) -> Result<i64> {
    let start_time = input
        .start_time
        .unwrap_or_else(|| Utc::now().naive_utc());

    let mut tx = pool.begin().await?;

    let result = sqlx::query("INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?)")
        .bind(input.venue_id)
        .bind(input.artist_id)
        .bind(start_time)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(result.last_insert_rowid())
}

/// Flat listing of all shows with joined venue/artist names, ordered by id.
pub async fn list_shows(pool: &SqlitePool) -> Result<Vec<ShowListing>> {
    let listings = sqlx::query_as::<_, ShowListing>(
        "SELECT s.venue_id, v.name AS venue_name,
                s.artist_id, a.name AS artist_name,
                a.image_link AS artist_image_link, s.start_time
         FROM shows s
         JOIN venues v ON v.id = s.venue_id
         JOIN artists a ON a.id = s.artist_id
         ORDER BY s.id",
    )
    .fetch_all(pool)
    .await?;

    Ok(listings)
}

/// Shows at one venue, partitioned into (past, upcoming) relative to `now`.
pub async fn venue_shows(
    pool: &SqlitePool,
    venue_id: i64,
    now: NaiveDateTime,
) -> Result<(Vec<ArtistAppearance>, Vec<ArtistAppearance>)> {
    let past = sqlx::query_as::<_, ArtistAppearance>(
        "SELECT s.artist_id, a.name AS artist_name,
                a.image_link AS artist_image_link, s.start_time
         FROM shows s
         JOIN artists a ON a.id = s.artist_id
         WHERE s.venue_id = ? AND s.start_time < ?
         ORDER BY s.start_time",
    )
    .bind(venue_id)
    .bind(now)
    .fetch_all(pool)
    .await?;

    let upcoming = sqlx::query_as::<_, ArtistAppearance>(
        "SELECT s.artist_id, a.name AS artist_name,
                a.image_link AS artist_image_link, s.start_time
         FROM shows s
         JOIN artists a ON a.id = s.artist_id
         WHERE s.venue_id = ? AND s.start_time >= ?
         ORDER BY s.start_time",
    )
    .bind(venue_id)
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok((past, upcoming))
}

/// Shows played by one artist, partitioned into (past, upcoming) relative to `now`.
pub async fn artist_shows(
    pool: &SqlitePool,
    artist_id: i64,
    now: NaiveDateTime,
) -> Result<(Vec<VenueBooking>, Vec<VenueBooking>)> {
    let past = sqlx::query_as::<_, VenueBooking>(
        "SELECT s.venue_id, v.name AS venue_name,
                v.image_link AS venue_image_link, s.start_time
         FROM shows s
         JOIN venues v ON v.id = s.venue_id
         WHERE s.artist_id = ? AND s.start_time < ?
         ORDER BY s.start_time",
    )
    .bind(artist_id)
    .bind(now)
    .fetch_all(pool)
    .await?;

    let upcoming = sqlx::query_as::<_, VenueBooking>(
        "SELECT s.venue_id, v.name AS venue_name,
                v.image_link AS venue_image_link, s.start_time
         FROM shows s
         JOIN venues v ON v.id = s.venue_id
         WHERE s.artist_id = ? AND s.start_time >= ?
         ORDER BY s.start_time",
    )
    .bind(artist_id)
    .bind(now)
    .fetch_all(pool)
    .await?;

    Ok((past, upcoming))
}
