//! Great-circle distance between coordinate pairs.
//!
//! Used by the proximity filter to decide which users fall inside a search
//! radius. The earth is treated as a sphere of mean radius; that is accurate
//! to well under 0.5% at the distances this service cares about (a few km).

use serde::Serialize;

/// Mean earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Haversine distance between two points, in kilometers.
///
/// Deterministic and symmetric. Callers are responsible for ensuring both
/// coordinates are present and numeric; garbage in, garbage out.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Format a distance for display: one decimal place with a `km` suffix,
/// e.g. `"2.3km"`.
///
/// Presentation only. Radius comparisons always use the raw distance, never
/// the rounded string.
pub fn format_distance(km: f64) -> String {
    format!("{km:.1}km")
}
