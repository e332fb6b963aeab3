//! Radius filtering over a set of located candidates.
//!
//! The directory is scanned in full and filtered here; this is a
//! correctness-first design at moderate scale, not a spatial index. The
//! contract is `nearby(origin, radius, candidates) -> hits with distance`,
//! so a grid or R-tree could replace the scan later without changing
//! callers, as long as the exact-radius boundary stays inclusive.

use crate::geo::{haversine_km, GeoPoint};

/// Default search radius for nearby queries, in kilometers.
///
/// Not client-configurable in the current HTTP contract.
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// Something that may have a last-known position.
///
/// `None` means the candidate has never reported a location and is skipped
/// silently by [`nearby`]. A position at `(0.0, 0.0)` is a real position,
/// not an absence.
pub trait Positioned {
    fn position(&self) -> Option<GeoPoint>;
}

/// Filter `candidates` to those within `radius_km` of `origin`, annotated
/// with their raw distance in kilometers.
///
/// Candidates exactly on the radius boundary are included. Result order is
/// scan order; callers must not rely on it.
pub fn nearby<'a, T: Positioned>(
    origin: GeoPoint,
    radius_km: f64,
    candidates: impl IntoIterator<Item = &'a T>,
) -> Vec<(&'a T, f64)> {
    candidates
        .into_iter()
        .filter_map(|candidate| {
            let position = candidate.position()?;
            let distance = haversine_km(origin, position);
            (distance <= radius_km).then_some((candidate, distance))
        })
        .collect()
}
