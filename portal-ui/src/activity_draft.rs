//! Form state for logging a new activity

use chrono::NaiveDate;
use portal_client::NewActivity;
use thiserror::Error;

/// Activity types offered by the form.
pub const ACTIVITY_TYPES: &[&str] = &["run", "ride", "swim", "walk", "hike"];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DraftError {
    #[error("Distance must be a non-negative number of kilometers")]
    Distance,
    #[error("Duration must be a non-negative number of minutes")]
    Duration,
    #[error("Date must look like YYYY-MM-DD")]
    Date,
    #[error("Pick an activity type")]
    ActivityType,
}

/// Raw form input, as typed by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDraft {
    pub activity_type: String,
    pub distance_km: String,
    pub duration_minutes: String,
    pub date: String,
}

impl Default for ActivityDraft {
    fn default() -> Self {
        Self {
            activity_type: ACTIVITY_TYPES[0].to_string(),
            distance_km: String::new(),
            duration_minutes: String::new(),
            date: String::new(),
        }
    }
}

impl ActivityDraft {
    /// Convert to the API request body. Kilometers become meters, minutes become
    /// seconds, and the date becomes midnight UTC.
    pub fn to_new_activity(&self) -> Result<NewActivity, DraftError> {
        let activity_type = self.activity_type.trim();
        if activity_type.is_empty() {
            return Err(DraftError::ActivityType);
        }

        let distance_km = parse_non_negative(&self.distance_km).ok_or(DraftError::Distance)?;
        let minutes = parse_non_negative(&self.duration_minutes).ok_or(DraftError::Duration)?;
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| DraftError::Date)?;

        Ok(NewActivity {
            activity_type: activity_type.to_string(),
            distance_meters: distance_km * 1000.0,
            duration_seconds: (minutes * 60.0).round() as i64,
            activity_date: format!("{}T00:00:00Z", date.format("%Y-%m-%d")),
        })
    }
}

fn parse_non_negative(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
