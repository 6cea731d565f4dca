mod api;
mod error;
mod stations;
mod types;
mod weatherstation;

pub use error::WeatherStationError;
pub use weatherstation::*;

pub use stations::select_nearest::{distance_km, select_nearest, SelectionResult};

pub use types::measurement::Measurement;
pub use types::station::{Station, StationId};

pub use api::error::ApiError;
pub use stations::error::SelectStationError;
