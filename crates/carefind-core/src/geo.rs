//! Great-circle distance math and display formatting.

use crate::types::Coordinate;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates, in kilometers.
///
/// Symmetric and non-negative; zero (within floating tolerance) iff the
/// coordinates are equal. Callers validate coordinate ranges upstream.
#[must_use]
pub fn haversine_distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Formats a distance for display: meters below 1 km, otherwise kilometers
/// with one decimal. Exactly 1.0 km formats as `"1.0 km"`.
#[must_use]
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        #[allow(clippy::cast_possible_truncation)]
        let meters = (km * 1000.0).round() as i64;
        format!("{meters} m")
    } else {
        format!("{km:.1} km")
    }
}
