//! Great-circle distance with road inflation

use frakt_types::{Coordinate, Error, Result};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance underestimates routed distance; freight tariffs
/// are calibrated against this fixed inflation factor.
const ROAD_INFLATION_FACTOR: f64 = 1.2;

/// Road distance in km between two coordinates.
///
/// Haversine great-circle distance multiplied by the fixed road inflation
/// factor. Callers round to whole km before feeding price formulas.
pub fn distance_km(a: Coordinate, b: Coordinate) -> Result<f64> {
    if !a.is_finite() || !b.is_finite() {
        return Err(Error::InvalidInput(format!(
            "non-finite coordinate: ({}, {}) -> ({}, {})",
            a.lat, a.lon, b.lat, b.lon
        )));
    }

    let lat_a = a.lat.to_radians();
    let lat_b = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    let great_circle = 2.0 * EARTH_RADIUS_KM * h.sqrt().asin();

    Ok(great_circle * ROAD_INFLATION_FACTOR)
}
