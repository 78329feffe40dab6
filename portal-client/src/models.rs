use serde::{Deserialize, Serialize};

/// A recorded workout, as listed by `GET /activities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub activity_type: String,
    pub distance_meters: f64,
    pub duration_seconds: i64,
    /// RFC 3339 timestamp
    pub activity_date: String,
}

/// Body for `POST /activities`. The backend echoes it back on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewActivity {
    pub activity_type: String,
    pub distance_meters: f64,
    pub duration_seconds: i64,
    pub activity_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: i64,
    pub tournament_name: String,
    pub game: String,
    pub placement: i32,
    /// `YYYY-MM-DD`
    pub tournament_date: String,
}

/// Random piece from the museum collection, via `GET /art/random`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub title: String,
    pub artist: String,
    pub date_display: String,
    pub image_url: String,
}
