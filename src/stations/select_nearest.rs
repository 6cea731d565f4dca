use crate::stations::error::SelectStationError;
use crate::types::station::Station;
use crate::weatherstation::LatLon;
use haversine::{distance, Location as HaversineLocation, Units};

/// The station chosen by [`select_nearest`], together with its
/// great-circle distance from the reference point in kilometers.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionResult {
    pub station: Station,
    pub distance_km: f64,
}

/// Great-circle distance between two coordinates in kilometers.
pub fn distance_km(a: LatLon, b: LatLon) -> f64 {
    distance(
        HaversineLocation {
            latitude: a.0,
            longitude: a.1,
        },
        HaversineLocation {
            latitude: b.0,
            longitude: b.1,
        },
        Units::Kilometers,
    )
}

/// Selects the station closest to `reference`.
///
/// Single pass over `stations`. The running best is only replaced on a
/// strictly smaller distance, so of several equidistant minima the first
/// one in input order wins; callers relying on reproducible output depend
/// on that ordering.
///
/// Pure computation over its inputs: no I/O, no validation of the
/// coordinates beyond what the distance formula needs.
///
/// # Errors
///
/// Returns [`SelectStationError::EmptyStationList`] when `stations` is
/// empty.
pub fn select_nearest(
    reference: LatLon,
    stations: &[Station],
) -> Result<SelectionResult, SelectStationError> {
    let mut nearest: Option<&Station> = None;
    let mut best_km = f64::INFINITY;

    for station in stations {
        let dist_km = distance_km(reference, station.location());
        if dist_km < best_km {
            best_km = dist_km;
            nearest = Some(station);
        }
    }

    let station = nearest.ok_or(SelectStationError::EmptyStationList)?;
    Ok(SelectionResult {
        station: station.clone(),
        distance_km: best_km,
    })
}
