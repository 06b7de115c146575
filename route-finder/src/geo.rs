/// Mean Earth radius, in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_008.0;

/// Approximate great-circle distance between two positions, in meters.
///
/// Inputs are radians. This is the central-angle approximation
///
/// ```text
/// 2 * R * sqrt( sin²((lat2-lat1)/2) + cos(lat1)*cos(lat2)*sin²((lon2-lon1)/2) )
/// ```
///
/// not the full haversine (no `atan2` term). It is symmetric and returns 0
/// for identical positions. NaN inputs propagate silently; there are no
/// defensive guards.
pub fn distance(lat1: f64, lat2: f64, lon1: f64, lon2: f64) -> f64 {
    let lat_term = ((lat2 - lat1) / 2.0).sin().powi(2);
    let lon_term = lat1.cos() * lat2.cos() * ((lon2 - lon1) / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * (lat_term + lon_term).sqrt()
}
