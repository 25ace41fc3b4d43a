//! Typed view models for page rendering
//!
//! Each page gets an explicit struct instead of a loose attribute bag, so the
//! template contract is visible in one place.

use serde::Serialize;

use showbill_common::db::shows::{ArtistAppearance, ShowListing, VenueBooking};
use showbill_common::db::{Artist, NameMatch, Venue};
use showbill_common::human_time::format_start_time;

/// One show on a detail page, decorated with the counterpart entity
/// (the artist on a venue page, the venue on an artist page).
#[derive(Debug, Clone, Serialize)]
pub struct ShowCard {
    pub counterpart_id: i64,
    pub counterpart_name: String,
    pub counterpart_image: String,
    pub start_time: String,
}

impl From<ArtistAppearance> for ShowCard {
    fn from(show: ArtistAppearance) -> Self {
        Self {
            counterpart_id: show.artist_id,
            counterpart_name: show.artist_name,
            counterpart_image: show.artist_image_link,
            start_time: format_start_time(show.start_time),
        }
    }
}

impl From<VenueBooking> for ShowCard {
    fn from(show: VenueBooking) -> Self {
        Self {
            counterpart_id: show.venue_id,
            counterpart_name: show.venue_name,
            counterpart_image: show.venue_image_link,
            start_time: format_start_time(show.start_time),
        }
    }
}

/// Venue detail page
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: String,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub past_shows: Vec<ShowCard>,
    pub upcoming_shows: Vec<ShowCard>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl VenueDetail {
    pub fn new(venue: Venue, past: Vec<ArtistAppearance>, upcoming: Vec<ArtistAppearance>) -> Self {
        let past_shows: Vec<ShowCard> = past.into_iter().map(Into::into).collect();
        let upcoming_shows: Vec<ShowCard> = upcoming.into_iter().map(Into::into).collect();
        Self {
            id: venue.id,
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            image_link: venue.image_link,
            facebook_link: venue.facebook_link,
            website: venue.website,
            genres: venue.genres.0,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

/// Artist detail page
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub image_link: String,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub past_shows: Vec<ShowCard>,
    pub upcoming_shows: Vec<ShowCard>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

impl ArtistDetail {
    pub fn new(artist: Artist, past: Vec<VenueBooking>, upcoming: Vec<VenueBooking>) -> Self {
        let past_shows: Vec<ShowCard> = past.into_iter().map(Into::into).collect();
        let upcoming_shows: Vec<ShowCard> = upcoming.into_iter().map(Into::into).collect();
        Self {
            id: artist.id,
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            image_link: artist.image_link,
            facebook_link: artist.facebook_link,
            website: artist.website,
            genres: artist.genres.0,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            past_shows_count: past_shows.len(),
            upcoming_shows_count: upcoming_shows.len(),
            past_shows,
            upcoming_shows,
        }
    }
}

/// Name search result page (venues or artists)
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<NameMatch>,
    /// Link prefix for result rows: "/venues" or "/artists"
    pub entity_path: String,
}

impl SearchResults {
    pub fn new(search_term: &str, data: Vec<NameMatch>, entity_path: &str) -> Self {
        Self {
            search_term: search_term.trim().to_string(),
            count: data.len(),
            data,
            entity_path: entity_path.to_string(),
        }
    }
}

/// One row of the flat /shows listing
#[derive(Debug, Clone, Serialize)]
pub struct ShowRow {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
}

impl From<ShowListing> for ShowRow {
    fn from(show: ShowListing) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: format_start_time(show.start_time),
        }
    }
}
