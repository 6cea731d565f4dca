use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelectStationError {
    #[error("No stations available to select from")]
    EmptyStationList,
}
