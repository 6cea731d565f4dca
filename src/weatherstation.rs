//! This module provides the main entry point for interacting with the
//! weather-station API client. It allows fetching measurements either by
//! specifying a station ID or by providing geographical coordinates
//! (latitude/longitude).

use crate::api::client::ApiClient;
use crate::error::WeatherStationError;
use crate::stations::select_nearest::{select_nearest, SelectionResult};
use crate::types::measurement::Measurement;
use crate::types::station::{Station, StationId};
use bon::bon;

/// Base URL of the public Raspberry Pi Foundation weather-station API.
pub const DEFAULT_BASE_URL: &str =
    "https://apex.oracle.com/pls/apex/raspberrypi/weatherstation";

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second
/// (index 1). Both values are represented as `f64` decimal degrees.
///
/// # Examples
///
/// ```
/// use rpi_weatherstation::LatLon;
///
/// let florence = LatLon(43.798135, 11.238411);
/// assert_eq!(florence.0, 43.798135); // Latitude
/// assert_eq!(florence.1, 11.238411); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

/// The outcome of the nearest-station flow: which station was selected,
/// how far away it is, and the latest measurements it reported.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyMeasurements {
    /// The selected station and its distance from the reference point.
    pub selection: SelectionResult,
    /// The latest measurements reported by the selected station.
    pub measurements: Vec<Measurement>,
}

/// The main client struct for accessing weather-station data.
///
/// Wraps the two read-only operations of the remote service (the station
/// directory and the latest-measurements listing) and combines them with
/// the nearest-station selection.
///
/// Create an instance with [`WeatherStation::builder()`]; with no
/// arguments it talks to the public service at [`DEFAULT_BASE_URL`].
///
/// # Examples
///
/// ```rust
/// # use rpi_weatherstation::{WeatherStation, WeatherStationError};
/// # async fn run() -> Result<(), WeatherStationError> {
/// let client = WeatherStation::builder().build();
/// let stations = client.stations().await?;
/// println!("The directory lists {} stations", stations.len());
/// # Ok(())
/// # }
/// ```
pub struct WeatherStation {
    api: ApiClient,
}

#[bon]
impl WeatherStation {
    /// Creates a new `WeatherStation` client.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.base_url(String)`: Optional. The service root to send requests
    ///   to. Defaults to [`DEFAULT_BASE_URL`]. Injecting it is the
    ///   substitution point for tests and mirrors of the service.
    /// * `.http_client(reqwest::Client)`: Optional. The HTTP client to
    ///   issue requests with. Defaults to a fresh [`reqwest::Client`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rpi_weatherstation::WeatherStation;
    ///
    /// // Talk to the public service
    /// let client = WeatherStation::builder().build();
    ///
    /// // Talk to a local mirror
    /// let local = WeatherStation::builder()
    ///     .base_url("http://localhost:8080/weatherstation".to_string())
    ///     .build();
    /// ```
    #[builder]
    pub fn new(base_url: Option<String>, http_client: Option<reqwest::Client>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let http_client = http_client.unwrap_or_default();
        Self {
            api: ApiClient::new(http_client, base_url),
        }
    }

    /// Fetches the full station directory.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherStationError::Api`] if the request fails or the
    /// response body is not the expected JSON shape.
    pub async fn stations(&self) -> Result<Vec<Station>, WeatherStationError> {
        Ok(self.api.get_all_stations().await?)
    }

    /// Fetches the latest measurements reported by a specific station.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherStationError::Api`] if the request fails or the
    /// response body is not the expected JSON shape.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rpi_weatherstation::{WeatherStation, WeatherStationError};
    /// # async fn run() -> Result<(), WeatherStationError> {
    /// let client = WeatherStation::builder().build();
    /// for measurement in client.latest_measurements(511059).await? {
    ///     println!("{measurement}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn latest_measurements(
        &self,
        station: StationId,
    ) -> Result<Vec<Measurement>, WeatherStationError> {
        Ok(self.api.get_latest_measurements(station).await?)
    }

    /// Finds the station nearest to `location`.
    ///
    /// Fetches the directory and runs the nearest-station selection over
    /// it, returning the chosen station together with its great-circle
    /// distance in kilometers.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherStationError::Api`] if the directory fetch fails,
    /// or [`WeatherStationError::SelectStation`] if the directory is empty.
    pub async fn nearest_station(
        &self,
        location: LatLon,
    ) -> Result<SelectionResult, WeatherStationError> {
        let stations = self.stations().await?;
        Ok(select_nearest(location, &stations)?)
    }

    /// Fetches the latest measurements from the station nearest to
    /// `location`.
    ///
    /// The measurement request is only issued once a station has been
    /// selected; with an empty directory the selection error is returned
    /// and no second request is made.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherStationError::Api`] if either request fails, or
    /// [`WeatherStationError::SelectStation`] if the directory is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use rpi_weatherstation::{LatLon, WeatherStation, WeatherStationError};
    /// # async fn run() -> Result<(), WeatherStationError> {
    /// let client = WeatherStation::builder().build();
    /// let nearby = client.measurements_near(LatLon(43.798135, 11.238411)).await?;
    /// println!(
    ///     "Station {} is {:.3} km away",
    ///     nearby.selection.station.id, nearby.selection.distance_km
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub async fn measurements_near(
        &self,
        location: LatLon,
    ) -> Result<NearbyMeasurements, WeatherStationError> {
        let selection = self.nearest_station(location).await?;
        let measurements = self.latest_measurements(selection.station.id).await?;
        Ok(NearbyMeasurements {
            selection,
            measurements,
        })
    }
}

impl Default for WeatherStation {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::ApiError;

    #[tokio::test]
    async fn test_unreachable_base_url_is_a_transport_error() {
        // Port 0 is never connectable, so the request fails before any
        // HTTP status exists.
        let client = WeatherStation::builder()
            .base_url("http://127.0.0.1:0/weatherstation".to_string())
            .build();

        let err = client.stations().await.unwrap_err();
        assert!(matches!(
            err,
            WeatherStationError::Api(ApiError::NetworkRequest(_, _))
        ));
    }
}
