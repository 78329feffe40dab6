use std::fmt;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::models::{Activity, Artwork, NewActivity, Tournament};

/// The four calls the portal backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchActivities,
    FetchTournaments,
    FetchArtwork,
    CreateActivity,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Operation::FetchActivities => "fetch activities",
            Operation::FetchTournaments => "fetch tournaments",
            Operation::FetchArtwork => "fetch artwork",
            Operation::CreateActivity => "create activity",
        };
        f.write_str(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to {operation} (status {status})")]
    Status { operation: Operation, status: u16 },
    #[error("Invalid API URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// Client for the portal backend.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    http: Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn fetch_activities(&self) -> Result<Vec<Activity>, ApiError> {
        self.get_json("activities", Operation::FetchActivities).await
    }

    pub async fn fetch_tournaments(&self) -> Result<Vec<Tournament>, ApiError> {
        self.get_json("tournaments", Operation::FetchTournaments).await
    }

    pub async fn fetch_artwork(&self) -> Result<Artwork, ApiError> {
        self.get_json("art/random", Operation::FetchArtwork).await
    }

    pub async fn create_activity(&self, activity: &NewActivity) -> Result<NewActivity, ApiError> {
        let url = self.config.endpoint("activities")?;
        debug!("POST {url}");
        let resp = self.http.post(url).json(activity).send().await?;
        read_json(resp, Operation::CreateActivity).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        operation: Operation,
    ) -> Result<T, ApiError> {
        let url = self.config.endpoint(path)?;
        debug!("GET {url}");
        let resp = self.http.get(url).send().await?;
        read_json(resp, operation).await
    }
}

async fn read_json<T: DeserializeOwned>(
    resp: Response,
    operation: Operation,
) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        warn!("Failed to {operation}: server returned {status}");
        return Err(ApiError::Status {
            operation,
            status: status.as_u16(),
        });
    }
    Ok(resp.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PROD_API_BASE;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn tracing_init() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_line_number(true)
            .with_target(false)
            .with_file(true)
            .try_init();
    }

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(ApiConfig::with_origin(format!("{}/api", server.uri()), None))
    }

    fn json_response(body: serde_json::Value) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json")
    }

    #[tokio::test]
    async fn test_fetch_activities() {
        tracing_init();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/activities"))
            .respond_with(json_response(serde_json::json!([
                {
                    "id": 1,
                    "activity_type": "run",
                    "distance_meters": 5000.0,
                    "duration_seconds": 1800,
                    "activity_date": "2025-11-01T08:00:00Z"
                }
            ])))
            .mount(&server)
            .await;

        let activities = client_for(&server).fetch_activities().await.unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].activity_type, "run");
        assert_eq!(activities[0].distance_meters, 5000.0);
        assert_eq!(activities[0].duration_seconds, 1800);
    }

    #[tokio::test]
    async fn test_fetch_tournaments_ignores_unknown_fields() {
        tracing_init();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tournaments"))
            .respond_with(json_response(serde_json::json!([
                {
                    "id": 1,
                    "tournament_name": "Genesis 10",
                    "game": "Super Smash Bros. Ultimate",
                    "placement": 25,
                    "tournament_date": "2025-10-15",
                    "entrants": 2048
                }
            ])))
            .mount(&server)
            .await;

        let tournaments = client_for(&server).fetch_tournaments().await.unwrap();
        assert_eq!(tournaments[0].tournament_name, "Genesis 10");
        assert_eq!(tournaments[0].placement, 25);
    }

    #[tokio::test]
    async fn test_fetch_artwork() {
        tracing_init();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/art/random"))
            .respond_with(json_response(serde_json::json!({
                "title": "A Sunday on La Grande Jatte",
                "artist": "Georges Seurat",
                "date_display": "1884-1886",
                "image_url": "https://www.artic.edu/iiif/2/abc/full/843,/0/default.jpg"
            })))
            .mount(&server)
            .await;

        let artwork = client_for(&server).fetch_artwork().await.unwrap();
        assert_eq!(artwork.artist, "Georges Seurat");
        assert_eq!(artwork.date_display, "1884-1886");
    }

    #[tokio::test]
    async fn test_create_activity_posts_json() {
        tracing_init();
        let server = MockServer::start().await;
        let activity = NewActivity {
            activity_type: "ride".to_string(),
            distance_meters: 20000.0,
            duration_seconds: 3600,
            activity_date: "2025-11-02T09:30:00Z".to_string(),
        };
        let body = serde_json::to_value(&activity).unwrap();

        Mock::given(method("POST"))
            .and(path("/api/activities"))
            .and(header("content-type", "application/json"))
            .and(body_json(&body))
            .respond_with(
                ResponseTemplate::new(201).set_body_raw(body.to_string(), "application/json"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let created = client_for(&server).create_activity(&activity).await.unwrap();
        assert_eq!(created, activity);
    }

    #[tokio::test]
    async fn test_server_error_reports_operation() {
        tracing_init();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/activities"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_activities().await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Status {
                operation: Operation::FetchActivities,
                status: 500
            }
        ));
        assert!(err.to_string().contains("Failed to fetch activities"));
    }

    #[tokio::test]
    async fn test_create_rejected() {
        tracing_init();
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/activities"))
            .respond_with(ResponseTemplate::new(400).set_body_raw(
                r#"{"error":"Invalid request"}"#,
                "application/json",
            ))
            .mount(&server)
            .await;

        let activity = NewActivity {
            activity_type: "swim".to_string(),
            distance_meters: 1500.0,
            duration_seconds: 2400,
            activity_date: "2025-11-03T07:00:00Z".to_string(),
        };
        let err = client_for(&server)
            .create_activity(&activity)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to create activity"));
    }

    #[tokio::test]
    async fn test_not_found_artwork() {
        tracing_init();
        let server = MockServer::start().await;

        let err = client_for(&server).fetch_artwork().await.unwrap_err();
        assert!(err.to_string().contains("Failed to fetch artwork"));
    }

    #[tokio::test]
    async fn test_relative_base_sends_to_origin() {
        tracing_init();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tournaments"))
            .respond_with(json_response(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let config = ApiConfig::with_origin(PROD_API_BASE, Some(server.uri()));
        let tournaments = ApiClient::new(config).fetch_tournaments().await.unwrap();
        assert!(tournaments.is_empty());
    }

    #[tokio::test]
    async fn test_relative_base_without_origin_fails_before_sending() {
        tracing_init();
        let client = ApiClient::new(ApiConfig::with_origin(PROD_API_BASE, None));

        let err = client.fetch_activities().await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl { .. }));
        assert!(err.to_string().contains("/api/activities"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_http_error() {
        tracing_init();
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tournaments"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw("not json", "application/json"),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_tournaments().await.unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
    }
}
