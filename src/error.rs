use crate::api::error::ApiError;
use crate::stations::error::SelectStationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherStationError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    SelectStation(#[from] SelectStationError),
}
