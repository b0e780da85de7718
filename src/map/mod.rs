// src/map/mod.rs v1
//! Shareable map URL generation

use crate::gps::data::FixRecord;

const GOOGLE_MAPS_BASE: &str = "https://www.google.com/maps/dir";

/// Build a Google Maps directions URL from an ordered route.
/// Format: https://www.google.com/maps/dir/lat1,lon1/lat2,lon2/...
/// Returns None for an empty route.
pub fn google_maps_url(route: &[FixRecord]) -> Option<String> {
    if route.is_empty() {
        return None;
    }

    let mut url = String::from(GOOGLE_MAPS_BASE);
    for point in route {
        url.push('/');
        url.push_str(&point.waypoint());
    }
    Some(url)
}
