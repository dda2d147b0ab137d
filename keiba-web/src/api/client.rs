//! reqwest-backed race API client.

use std::time::Duration;

use async_trait::async_trait;
use keiba_common::{HorseEntry, PredictRequest, PredictResponse, Prediction, Race};
use reqwest::header::CACHE_CONTROL;
use reqwest::{Client, Response};
use serde::Deserialize;

use super::RaceApi;
use crate::error::{Error, Result};

/// Client for the race API's `/api/races` and `/api/predict` endpoints.
pub struct HttpRaceApi {
    http_client: Client,
    base_url: String,
}

/// Body the service sends alongside a failing status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl HttpRaceApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Turn a non-2xx response into `Error::Backend`, preferring the service's own message.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(err) => err.error,
        Err(_) => format!("HTTP {}", status),
    };
    tracing::warn!(status = %status.as_u16(), "Race API returned error: {}", message);
    Err(Error::Backend(message))
}

fn invalid_response(err: reqwest::Error) -> Error {
    tracing::warn!("Race API response could not be decoded: {}", err);
    Error::InvalidResponse(err.to_string())
}

fn communication_error(err: reqwest::Error) -> Error {
    tracing::warn!("Race API request failed: {}", err);
    Error::Communication(err.to_string())
}

#[async_trait]
impl RaceApi for HttpRaceApi {
    async fn list_races(&self) -> Result<Vec<Race>> {
        let url = format!("{}/api/races", self.base_url);
        tracing::debug!("Fetching races from {}", url);

        let response = self
            .http_client
            .get(&url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await
            .map_err(communication_error)?;

        let races: Vec<Race> = check_status(response)
            .await?
            .json()
            .await
            .map_err(invalid_response)?;

        tracing::debug!("Received {} races", races.len());
        Ok(races)
    }

    async fn predict(&self, horses: &[HorseEntry]) -> Result<Vec<Prediction>> {
        let url = format!("{}/api/predict", self.base_url);
        tracing::debug!("Requesting predictions for {} horses from {}", horses.len(), url);

        let request = PredictRequest {
            horses: horses.to_vec(),
        };

        let response = self
            .http_client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(communication_error)?;

        let body: PredictResponse = check_status(response)
            .await?
            .json()
            .await
            .map_err(invalid_response)?;

        body.into_result().map_err(|message| {
            tracing::warn!("Prediction rejected: {}", message);
            Error::Backend(message)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keiba_common::Sex;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> HttpRaceApi {
        HttpRaceApi::new(&server.uri(), Duration::from_secs(5)).unwrap()
    }

    fn horse(umaban: u32) -> HorseEntry {
        HorseEntry {
            waku: 1,
            umaban,
            jockey_weight: 57.0,
            horse_weight: 480.0,
            sex: Sex::Male,
            age: 4,
        }
    }

    #[test]
    fn test_base_url_normalization() {
        let api = HttpRaceApi::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(api.base_url(), "http://localhost:5000");
    }

    #[tokio::test]
    async fn test_list_races() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/races"))
            .and(header("cache-control", "no-cache"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "name": "ジャパンカップ", "venue": "東京", "date": "2023-11-26"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let races = client(&server).list_races().await.unwrap();
        assert_eq!(races.len(), 1);
        assert_eq!(races[0].id, 1);
        assert_eq!(races[0].venue, "東京");
    }

    #[tokio::test]
    async fn test_list_races_invalid_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/races"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"races": []})))
            .mount(&server)
            .await;

        let err = client(&server).list_races().await.unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_list_races_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/races"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let err = client(&server).list_races().await.unwrap_err();
        match err {
            Error::Backend(message) => assert_eq!(message, "HTTP 500 Internal Server Error"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_predict_sends_full_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/predict"))
            .and(body_json(json!({
                "horses": [
                    {"waku": 1, "umaban": 1, "jockey_weight": 57.0, "horse_weight": 480.0, "sex": 0, "age": 4},
                    {"waku": 1, "umaban": 2, "jockey_weight": 57.0, "horse_weight": 480.0, "sex": 0, "age": 4}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "predictions": [
                    {"umaban": 1, "probability": 0.2},
                    {"umaban": 2, "probability": 0.6}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let predictions = client(&server).predict(&[horse(1), horse(2)]).await.unwrap();
        // Order is left to the caller.
        assert_eq!(predictions[0].umaban, 1);
        assert_eq!(predictions[1].probability, 0.6);
    }

    #[tokio::test]
    async fn test_predict_error_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/predict"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"error": "model not loaded"})),
            )
            .mount(&server)
            .await;

        let err = client(&server).predict(&[horse(1)]).await.unwrap_err();
        match err {
            Error::Backend(message) => assert_eq!(message, "model not loaded"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_predict_undecodable_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/predict"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client(&server).predict(&[horse(1)]).await.unwrap_err();
        assert!(matches!(err, Error::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_predict_error_status_with_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/predict"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": "missing feature: age"})),
            )
            .mount(&server)
            .await;

        let err = client(&server).predict(&[horse(1)]).await.unwrap_err();
        match err {
            Error::Backend(message) => assert_eq!(message, "missing feature: age"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_service() {
        // Nothing listens on port 9 (discard) in the test environment.
        let api = HttpRaceApi::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        let err = api.list_races().await.unwrap_err();
        assert!(matches!(err, Error::Communication(_)));
    }
}
