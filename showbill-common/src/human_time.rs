//! Human-readable start-time formatting
//!
//! Provides the display format used on venue, artist, and show pages,
//! e.g. `Sat 06/20/2026 at 8:00 PM`.

use chrono::NaiveDateTime;

/// Format a show start time for page display.
pub fn format_start_time(start_time: NaiveDateTime) -> String {
    // %l is space-padded 12-hour clock; trim the padding it leaves behind
    start_time
        .format("%a %m/%d/%Y at %l:%M %p")
        .to_string()
        .replace("at  ", "at ")
}
