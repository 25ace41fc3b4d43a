//! Venue queries and mutations
//!
//! Covers the grouped (state, city) directory, name search, detail lookup,
//! and the create/update/delete paths. Every mutation runs inside its own
//! transaction; a failed commit leaves the table untouched.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::SqlitePool;
use std::collections::{BTreeSet, HashMap};

use super::{like_pattern, NameMatch, Venue, VenueInput};
use crate::{Error, Result};

/// One venue entry within a directory group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// All venues sharing one (city, state) location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// Grouped venue directory: distinct (city, state) pairs ordered by state
/// then city, each listing its venues in insertion order with the count of
/// shows starting at or after `now`.
pub async fn venue_directory(pool: &SqlitePool, now: NaiveDateTime) -> Result<Vec<CityGroup>> {
    let venues: Vec<(i64, String, String, String)> =
        sqlx::query_as("SELECT id, name, city, state FROM venues ORDER BY id")
            .fetch_all(pool)
            .await?;

    // One aggregate query for all upcoming counts instead of a query per venue
    let counts: HashMap<i64, i64> = sqlx::query_as::<_, (i64, i64)>(
        "SELECT venue_id, COUNT(*) FROM shows WHERE start_time >= ? GROUP BY venue_id",
    )
    .bind(now)
    .fetch_all(pool)
    .await?
    .into_iter()
    .collect();

    // BTreeSet of (state, city) yields the required ordering for free
    let locations: BTreeSet<(String, String)> = venues
        .iter()
        .map(|(_, _, city, state)| (state.clone(), city.clone()))
        .collect();

    let groups = locations
        .into_iter()
        .map(|(state, city)| {
            let members = venues
                .iter()
                .filter(|(_, _, c, s)| *c == city && *s == state)
                .map(|(id, name, _, _)| VenueSummary {
                    id: *id,
                    name: name.clone(),
                    num_upcoming_shows: counts.get(id).copied().unwrap_or(0),
                })
                .collect();
            CityGroup {
                city,
                state,
                venues: members,
            }
        })
        .collect();

    Ok(groups)
}

/// Case-insensitive substring search on venue name.
///
/// The term is trimmed first; an empty term matches every venue.
pub async fn search_venues(pool: &SqlitePool, term: &str) -> Result<Vec<NameMatch>> {
    let pattern = like_pattern(term.trim());

    let matches = sqlx::query_as::<_, NameMatch>(
        "SELECT id, name FROM venues
         WHERE lower(name) LIKE lower(?) ESCAPE '\\'
         ORDER BY id",
    )
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    Ok(matches)
}

/// Fetch one venue by id.
pub async fn get_venue(pool: &SqlitePool, id: i64) -> Result<Venue> {
    sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("venue {}", id)))
}

/// Insert a new venue, returning its assigned id.
pub async fn insert_venue(pool: &SqlitePool, input: &VenueInput) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO venues
            (name, city, state, address, phone, image_link, facebook_link,
             website, genres, seeking_talent, seeking_description)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(&input.website)
    .bind(json!(input.genres).to_string())
    .bind(input.seeking_talent)
    .bind(&input.seeking_description)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite all editable fields of an existing venue.
pub async fn update_venue(pool: &SqlitePool, id: i64, input: &VenueInput) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "UPDATE venues SET
            name = ?, city = ?, state = ?, address = ?, phone = ?,
            image_link = ?, facebook_link = ?, website = ?, genres = ?,
            seeking_talent = ?, seeking_description = ?
         WHERE id = ?",
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.address)
    .bind(&input.phone)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(&input.website)
    .bind(json!(input.genres).to_string())
    .bind(input.seeking_talent)
    .bind(&input.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;

    Ok(())
}

/// Remove a venue; its shows go with it (ON DELETE CASCADE).
pub async fn delete_venue(pool: &SqlitePool, id: i64) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("venue {}", id)));
    }

    tx.commit().await?;

    Ok(())
}
