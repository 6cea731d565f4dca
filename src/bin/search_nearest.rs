use rpi_weatherstation::{LatLon, WeatherStation, WeatherStationError};

/// Reference point the nearest-station search starts from.
const MY_LOCATION: LatLon = LatLon(43.798135, 11.238411);

#[tokio::main]
async fn main() -> Result<(), WeatherStationError> {
    env_logger::init();

    let client = WeatherStation::builder().build();
    let nearby = client.measurements_near(MY_LOCATION).await?;

    let station = &nearby.selection.station;
    println!(
        "Nearest station found at {:.3} km with ID = {}",
        nearby.selection.distance_km, station.id
    );
    println!(
        "Latitude = {} - Longitude = {}",
        station.latitude, station.longitude
    );

    println!("\nWeather data:");
    for measurement in &nearby.measurements {
        println!("{measurement}");
    }

    Ok(())
}
