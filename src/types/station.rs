//! Data structures for the weather stations returned by the station
//! directory endpoint.

use crate::weatherstation::LatLon;
use serde::Deserialize;

/// Numeric identifier assigned to a station by the weather-station service
/// (the `weather_stn_id` column).
pub type StationId = u64;

/// A single weather station from the directory listing.
///
/// Fields map the `weather_stn_*` columns of the `getallstations`
/// response. Coordinates are decimal degrees; the service is trusted to
/// keep them in range.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Station {
    /// The unique station identifier (e.g. `511059`).
    #[serde(rename = "weather_stn_id")]
    pub id: StationId,
    /// Human-readable station name, when the owner registered one.
    #[serde(rename = "weather_stn_name", default)]
    pub name: Option<String>,
    /// Latitude in decimal degrees (positive for North, negative for South).
    #[serde(rename = "weather_stn_lat")]
    pub latitude: f64,
    /// Longitude in decimal degrees (positive for East, negative for West).
    #[serde(rename = "weather_stn_long")]
    pub longitude: f64,
}

impl Station {
    /// The station position as a [`LatLon`] pair.
    pub fn location(&self) -> LatLon {
        LatLon(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_directory_columns() {
        let station: Station = serde_json::from_str(
            r#"{"weather_stn_id": 511059, "weather_stn_name": "PIOTTOLO", "weather_stn_lat": 43.76544, "weather_stn_long": 11.2563426}"#,
        )
        .unwrap();

        assert_eq!(station.id, 511059);
        assert_eq!(station.name.as_deref(), Some("PIOTTOLO"));
        assert_eq!(station.location(), LatLon(43.76544, 11.2563426));
    }

    #[test]
    fn test_tolerates_unknown_and_missing_columns() {
        let station: Station = serde_json::from_str(
            r#"{"weather_stn_id": 1, "weather_stn_lat": 0.5, "weather_stn_long": -0.5, "elevation": 3}"#,
        )
        .unwrap();

        assert_eq!(station.name, None);
        assert_eq!(station.latitude, 0.5);
        assert_eq!(station.longitude, -0.5);
    }

    #[test]
    fn test_rejects_record_without_coordinates() {
        let result = serde_json::from_str::<Station>(r#"{"weather_stn_id": 1}"#);
        assert!(result.is_err());
    }
}
