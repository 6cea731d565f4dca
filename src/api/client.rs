use crate::api::error::ApiError;
use crate::types::measurement::Measurement;
use crate::types::station::{Station, StationId};
use log::{debug, warn};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const STATIONS_PATH: &str = "getallstations";
const MEASUREMENTS_PATH: &str = "getlatestmeasurements";

/// Paged envelope the APEX service wraps every collection response in.
/// Only `items` is consumed; `hasMore` is checked so a truncated listing
/// is not mistaken for the complete set.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    items: Vec<T>,
    #[serde(default, rename = "hasMore")]
    has_more: bool,
}

/// Thin wrapper around the two read-only operations the weather-station
/// service exposes.
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(http: Client, base_url: String) -> Self {
        ApiClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the full station directory.
    pub async fn get_all_stations(&self) -> Result<Vec<Station>, ApiError> {
        let url = format!("{}/{}", self.base_url, STATIONS_PATH);
        self.get_items(&url).await
    }

    /// Fetches the latest measurement records reported by one station.
    pub async fn get_latest_measurements(
        &self,
        station: StationId,
    ) -> Result<Vec<Measurement>, ApiError> {
        let url = format!("{}/{}/{}", self.base_url, MEASUREMENTS_PATH, station);
        self.get_items(&url).await
    }

    /// Issues a GET and decodes the `items` envelope. Transport, HTTP
    /// status, body, and decode failures each map onto their own
    /// [`ApiError`] variant.
    async fn get_items<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, ApiError> {
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::NetworkRequest(url.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    ApiError::HttpStatus {
                        url: url.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    ApiError::NetworkRequest(url.to_string(), e)
                });
            }
        };

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::BodyRead(url.to_string(), e))?;

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            ApiError::MalformedResponse {
                url: url.to_string(),
                source: e,
            }
        })?;

        if envelope.has_more {
            warn!(
                "Response from {} is paginated; only the first page ({} items) was consumed",
                url,
                envelope.items.len()
            );
        }

        Ok(envelope.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const STATIONS_BODY: &str = r#"{
        "items": [
            {"weather_stn_id": 255541, "weather_stn_name": "GAIA_HQ", "weather_stn_lat": 52.197834, "weather_stn_long": 0.126139},
            {"weather_stn_id": 511059, "weather_stn_lat": 43.76544, "weather_stn_long": 11.2563426}
        ],
        "hasMore": false,
        "limit": 500,
        "offset": 0,
        "count": 2
    }"#;

    #[test]
    fn test_decodes_station_envelope() {
        let envelope: Envelope<Station> = serde_json::from_str(STATIONS_BODY).unwrap();

        assert!(!envelope.has_more);
        assert_eq!(envelope.items.len(), 2);

        let first = &envelope.items[0];
        assert_eq!(first.id, 255541);
        assert_eq!(first.name.as_deref(), Some("GAIA_HQ"));
        assert_eq!(first.latitude, 52.197834);
        assert_eq!(first.longitude, 0.126139);

        assert_eq!(envelope.items[1].name, None);
    }

    #[test]
    fn test_decodes_measurement_envelope() {
        let body = r#"{
            "items": [{"ambient_temp": 12.3, "air_pressure": 998.2, "humidity": 57.0, "reading_timestamp": "2020-02-17T13:15:01Z"}],
            "hasMore": true
        }"#;
        let envelope: Envelope<Measurement> = serde_json::from_str(body).unwrap();

        assert!(envelope.has_more);
        assert_eq!(envelope.items.len(), 1);
        assert_eq!(envelope.items[0].get("ambient_temp"), Some(&json!(12.3)));
    }

    #[test]
    fn test_rejects_body_without_items_array() {
        assert!(serde_json::from_str::<Envelope<Station>>(r#"{"rows": []}"#).is_err());
        assert!(serde_json::from_str::<Envelope<Station>>("not json").is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new(Client::new(), "https://example.test/ws/".to_string());
        assert_eq!(client.base_url, "https://example.test/ws");
    }
}
