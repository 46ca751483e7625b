use crate::core::geo::haversine_miles;
use crate::core::natural::sort_key;
use crate::domain::model::Detachment;

/// Retains every detachment within `radius_miles` of the origin, boundary
/// inclusive. Scan order follows input order; callers apply
/// [`sort_by_number`] before presenting results.
pub fn within_radius(
    detachments: &[Detachment],
    origin_lat: f64,
    origin_lon: f64,
    radius_miles: f64,
) -> Vec<Detachment> {
    detachments
        .iter()
        .filter(|d| haversine_miles(origin_lat, origin_lon, d.latitude, d.longitude) <= radius_miles)
        .cloned()
        .collect()
}

/// Ascending natural order over the `number` field.
pub fn sort_by_number(detachments: &mut [Detachment]) {
    detachments.sort_by_key(|d| sort_key(&d.number));
}
