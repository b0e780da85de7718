// src/dedup.rs
//! Temporal and spatial deduplication of fix records

use crate::gps::data::FixRecord;
use std::collections::BTreeMap;

/// Apply last-write-wins on the timestamp key.
///
/// Records arriving later in the input silently overwrite earlier records
/// with the same timestamp. The survivors come back in ascending timestamp
/// order; lexicographic order on the HHMMSS.sss key is chronological
/// because the format is fixed-width.
pub fn dedup_by_timestamp(records: Vec<FixRecord>) -> Vec<FixRecord> {
    let mut seen: BTreeMap<String, FixRecord> = BTreeMap::new();
    for record in records {
        // last write wins
        seen.insert(record.timestamp.clone(), record);
    }
    seen.into_values().collect()
}

/// Remove spatially-duplicate points (jitter suppression).
///
/// The first record is always kept. Every later record is kept only if it
/// is farther than `epsilon` degrees from the previously *kept* point in
/// either latitude or longitude, so sustained jitter around one location
/// collapses to a single point. Input order is preserved.
pub fn dedup_spatial(records: Vec<FixRecord>, epsilon: f64) -> Vec<FixRecord> {
    let mut kept: Vec<FixRecord> = Vec::with_capacity(records.len());
    for record in records {
        match kept.last() {
            Some(prev)
                if (record.latitude - prev.latitude).abs() <= epsilon
                    && (record.longitude - prev.longitude).abs() <= epsilon => {}
            _ => kept.push(record),
        }
    }
    kept
}
