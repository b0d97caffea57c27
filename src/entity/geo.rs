//! Great-circle distance.

/// Mean Earth radius used by [`haversine_miles`].
pub const EARTH_RADIUS_MILES: f64 = 3958.0;

/// Haversine distance in miles between two `(lat, lng)` points in degrees.
///
/// # Examples
///
/// ```
/// use u_ranking::entity::haversine_miles;
///
/// let d = haversine_miles(41.9296, -87.7076, 41.9296, -87.7076);
/// assert!(d.abs() < 1e-9);
/// ```
pub fn haversine_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_MILES * c
}
