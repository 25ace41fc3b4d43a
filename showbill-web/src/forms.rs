//! Typed form structs and field validation
//!
//! Validation runs before any persistence attempt: required fields must be
//! non-empty after trimming, phone numbers are stripped to digits only, and
//! genre tags are parsed from one comma-separated field. A failed validation
//! re-renders the form with field-level messages and changes no state.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use showbill_common::db::{Artist, ArtistInput, ShowInput, Venue, VenueInput};

/// One field-level validation message
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn required(field: &str) -> Self {
        Self {
            field: field.to_string(),
            message: "is required".to_string(),
        }
    }
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

/// Empty-after-trim fields become NULL columns
fn optional(value: &str) -> Option<String> {
    let cleaned = value.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Strip a phone number to digits only; all-noise input becomes NULL
fn optional_phone(value: &str) -> Option<String> {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// Parse comma-separated genre tags, dropping empty entries
fn parse_genres(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse an optional start time from the form.
///
/// Accepts the `datetime-local` wire format (`2026-06-20T20:00`) and its
/// space-separated variant, with or without seconds. Empty means "now".
fn parse_start_time(value: &str) -> Result<Option<NaiveDateTime>, FieldError> {
    let cleaned = value.trim();
    if cleaned.is_empty() {
        return Ok(None);
    }

    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for format in FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(cleaned, format) {
            return Ok(Some(parsed));
        }
    }

    Err(FieldError {
        field: "start_time".to_string(),
        message: "is not a valid date and time".to_string(),
    })
}

fn parse_id(field: &str, value: &str) -> Result<i64, FieldError> {
    value.trim().parse::<i64>().ok().filter(|id| *id > 0).ok_or_else(|| FieldError {
        field: field.to_string(),
        message: "must be a positive integer id".to_string(),
    })
}

/// Venue create/edit form fields as submitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub genres: String,
    /// Checkbox: present when checked, absent otherwise
    #[serde(default)]
    pub seeking_talent: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

impl VenueForm {
    /// Prefill the edit form from an existing row
    pub fn from_venue(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone().unwrap_or_default(),
            phone: venue.phone.clone().unwrap_or_default(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone().unwrap_or_default(),
            website: venue.website.clone().unwrap_or_default(),
            genres: venue.genres.0.join(", "),
            seeking_talent: venue.seeking_talent.then(|| "y".to_string()),
            seeking_description: venue.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<VenueInput, Vec<FieldError>> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("name", &self.name),
            ("city", &self.city),
            ("state", &self.state),
            ("image_link", &self.image_link),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError::required(field));
            }
        }

        let genres = parse_genres(&self.genres);
        if genres.is_empty() {
            errors.push(FieldError::required("genres"));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(VenueInput {
            name: trimmed(&self.name),
            city: trimmed(&self.city),
            state: trimmed(&self.state),
            address: optional(&self.address),
            phone: optional_phone(&self.phone),
            image_link: trimmed(&self.image_link),
            facebook_link: optional(&self.facebook_link),
            website: optional(&self.website),
            genres,
            seeking_talent: self.seeking_talent.is_some(),
            seeking_description: optional(&self.seeking_description),
        })
    }
}

/// Artist create/edit form fields as submitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub seeking_venue: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

impl ArtistForm {
    /// Prefill the edit form from an existing row
    pub fn from_artist(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone().unwrap_or_default(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone().unwrap_or_default(),
            website: artist.website.clone().unwrap_or_default(),
            genres: artist.genres.0.join(", "),
            seeking_venue: artist.seeking_venue.then(|| "y".to_string()),
            seeking_description: artist.seeking_description.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ArtistInput, Vec<FieldError>> {
        let mut errors = Vec::new();

        for (field, value) in [
            ("name", &self.name),
            ("city", &self.city),
            ("state", &self.state),
            ("image_link", &self.image_link),
        ] {
            if value.trim().is_empty() {
                errors.push(FieldError::required(field));
            }
        }

        let genres = parse_genres(&self.genres);
        if genres.is_empty() {
            errors.push(FieldError::required("genres"));
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ArtistInput {
            name: trimmed(&self.name),
            city: trimmed(&self.city),
            state: trimmed(&self.state),
            phone: optional_phone(&self.phone),
            image_link: trimmed(&self.image_link),
            facebook_link: optional(&self.facebook_link),
            website: optional(&self.website),
            genres,
            seeking_venue: self.seeking_venue.is_some(),
            seeking_description: optional(&self.seeking_description),
        })
    }
}

/// Show create form fields as submitted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub start_time: String,
}

impl ShowForm {
    pub fn validate(&self) -> Result<ShowInput, Vec<FieldError>> {
        let mut errors = Vec::new();

        let venue_id = parse_id("venue_id", &self.venue_id)
            .map_err(|e| errors.push(e))
            .ok();
        let artist_id = parse_id("artist_id", &self.artist_id)
            .map_err(|e| errors.push(e))
            .ok();
        let start_time = parse_start_time(&self.start_time)
            .map_err(|e| errors.push(e))
            .ok();

        match (venue_id, artist_id, start_time) {
            (Some(venue_id), Some(artist_id), Some(start_time)) if errors.is_empty() => {
                Ok(ShowInput {
                    venue_id,
                    artist_id,
                    start_time,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Search form shared by /venues/search and /artists/search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}
