//! Display formatting for API data

use chrono::{DateTime, NaiveDate};

/// Meters as kilometers with two decimals, e.g. `"5.00 km"`.
pub fn format_distance(meters: f64) -> String {
    format!("{:.2} km", meters / 1000.0)
}

/// `m:ss` below an hour, `h:mm:ss` above.
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Pace in minutes per kilometer, or `None` for zero distance.
pub fn format_pace(meters: f64, seconds: i64) -> Option<String> {
    if meters <= 0.0 || seconds <= 0 {
        return None;
    }
    let secs_per_km = (seconds as f64 / (meters / 1000.0)).round() as i64;
    Some(format!("{}/km", format_duration(secs_per_km)))
}

/// `1st`, `2nd`, `3rd`, `4th`, ... with the teens handled.
pub fn format_placement(placement: i32) -> String {
    let suffix = match (placement % 10, placement % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{placement}{suffix}")
}

/// Human-readable date for RFC 3339 timestamps or plain `YYYY-MM-DD` dates.
/// Anything else is shown unchanged.
pub fn format_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%b %-d, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}
