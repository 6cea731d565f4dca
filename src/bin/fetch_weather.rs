use rpi_weatherstation::{StationId, WeatherStation, WeatherStationError};

/// Station to read from, as registered with the weather-station service.
const STATION_ID: StationId = 511059;

#[tokio::main]
async fn main() -> Result<(), WeatherStationError> {
    env_logger::init();

    let client = WeatherStation::builder().build();
    let measurements = client.latest_measurements(STATION_ID).await?;

    for measurement in &measurements {
        println!("{measurement}");
    }

    Ok(())
}
