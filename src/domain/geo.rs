//! Great-circle distance on a spherical Earth

use crate::domain::Coordinate;

/// Mean Earth radius used for all placement distances.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Haversine distance in meters between two points given in degrees.
///
/// Inputs are not range-checked; out-of-range degrees give meaningless results.
pub fn haversine_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Distance in meters between two coordinates.
pub fn distance_meters(from: Coordinate, to: Coordinate) -> f64 {
    haversine_meters(from.latitude, from.longitude, to.latitude, to.longitude)
}

/// Round a distance to two decimal places (centimeters).
pub fn round_centimeters(meters: f64) -> f64 {
    (meters * 100.0).round() / 100.0
}
