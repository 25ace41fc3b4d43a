//! Artist queries and mutations
//!
//! Artists support create and update but no delete path.

use serde_json::json;
use sqlx::SqlitePool;

use super::{like_pattern, Artist, ArtistInput, NameMatch};
use crate::{Error, Result};

/// Full artist listing ordered by id.
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<NameMatch>> {
    let artists = sqlx::query_as::<_, NameMatch>("SELECT id, name FROM artists ORDER BY id")
        .fetch_all(pool)
        .await?;

    Ok(artists)
}

/// Case-insensitive substring search on artist name.
///
/// The term is trimmed first; an empty term matches every artist.
pub async fn search_artists(pool: &SqlitePool, term: &str) -> Result<Vec<NameMatch>> {
    let pattern = like_pattern(term.trim());

    let matches = sqlx::query_as::<_, NameMatch>(
        "SELECT id, name FROM artists
         WHERE lower(name) LIKE lower(?) ESCAPE '\\'
         ORDER BY id",
    )
    .bind(&pattern)
    .fetch_all(pool)
    .await?;

    Ok(matches)
}

/// Fetch one artist by id.
pub async fn get_artist(pool: &SqlitePool, id: i64) -> Result<Artist> {
    sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("artist {}", id)))
}

/// Insert a new artist, returning its assigned id.
pub async fn insert_artist(pool: &SqlitePool, input: &ArtistInput) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "INSERT INTO artists
            (name, city, state, phone, image_link, facebook_link, website,
             genres, seeking_venue, seeking_description)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(&input.website)
    .bind(json!(input.genres).to_string())
    .bind(input.seeking_venue)
    .bind(&input.seeking_description)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite all editable fields of an existing artist.
pub async fn update_artist(pool: &SqlitePool, id: i64, input: &ArtistInput) -> Result<()> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        "UPDATE artists SET
            name = ?, city = ?, state = ?, phone = ?, image_link = ?,
            facebook_link = ?, website = ?, genres = ?, seeking_venue = ?,
            seeking_description = ?
         WHERE id = ?",
    )
    .bind(&input.name)
    .bind(&input.city)
    .bind(&input.state)
    .bind(&input.phone)
    .bind(&input.image_link)
    .bind(&input.facebook_link)
    .bind(&input.website)
    .bind(json!(input.genres).to_string())
    .bind(input.seeking_venue)
    .bind(&input.seeking_description)
    .bind(id)
    .execute(&mut *tx)
    .await?;

    if result.rows_affected() == 0 {
        return Err(Error::NotFound(format!("artist {}", id)));
    }

    tx.commit().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_memory_database;

    fn artist(name: &str) -> ArtistInput {
        ArtistInput {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("4155559999".to_string()),
            image_link: "https://example.com/artist.jpg".to_string(),
            facebook_link: None,
            website: Some("https://example.com".to_string()),
            genres: vec!["Rock".to_string()],
            seeking_venue: true,
            seeking_description: Some("Looking for shows".to_string()),
        }
    }

    #[tokio::test]
    async fn listing_is_ordered_by_id() {
        let pool = init_memory_database().await.unwrap();
        insert_artist(&pool, &artist("The Wild Sax Band")).await.unwrap();
        insert_artist(&pool, &artist("Guns N Petals")).await.unwrap();

        let listed = list_artists(&pool).await.unwrap();
        let names: Vec<&str> = listed.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["The Wild Sax Band", "Guns N Petals"]);
    }

    #[tokio::test]
    async fn search_matches_substring_case_insensitively() {
        let pool = init_memory_database().await.unwrap();
        insert_artist(&pool, &artist("Guns N Petals")).await.unwrap();
        insert_artist(&pool, &artist("Matt Quevado")).await.unwrap();
        insert_artist(&pool, &artist("The Wild Sax Band")).await.unwrap();

        let matches = search_artists(&pool, "band").await.unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "The Wild Sax Band");

        let matches = search_artists(&pool, "a").await.unwrap();
        assert_eq!(matches.len(), 3);
    }

    #[tokio::test]
    async fn round_trip_preserves_fields() {
        let pool = init_memory_database().await.unwrap();
        let id = insert_artist(&pool, &artist("Guns N Petals")).await.unwrap();

        let fetched = get_artist(&pool, id).await.unwrap();
        assert_eq!(fetched.name, "Guns N Petals");
        assert!(fetched.seeking_venue);
        assert_eq!(fetched.genres.0, vec!["Rock"]);
    }

    #[tokio::test]
    async fn missing_artist_is_not_found() {
        let pool = init_memory_database().await.unwrap();
        assert!(matches!(
            get_artist(&pool, 7).await.unwrap_err(),
            Error::NotFound(_)
        ));
        assert!(matches!(
            update_artist(&pool, 7, &artist("X")).await.unwrap_err(),
            Error::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn update_overwrites_fields() {
        let pool = init_memory_database().await.unwrap();
        let id = insert_artist(&pool, &artist("Guns N Petals")).await.unwrap();

        let mut changed = artist("Guns N Petals");
        changed.phone = Some("5105550000".to_string());
        changed.seeking_venue = false;
        update_artist(&pool, id, &changed).await.unwrap();

        let fetched = get_artist(&pool, id).await.unwrap();
        assert_eq!(fetched.phone.as_deref(), Some("5105550000"));
        assert!(!fetched.seeking_venue);
    }
}
