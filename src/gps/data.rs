// src/gps/data.rs
//! GPS fix record produced by the NMEA pipeline

/// One validated, decoded GPS position.
///
/// A `FixRecord` only exists if its source sentence passed checksum
/// verification and full field extraction; it is never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FixRecord {
    /// UTC time of day, `HHMMSS.sss`, kept verbatim from the sentence.
    /// Lexicographic order is chronological because the width is fixed,
    /// so this doubles as the temporal dedup key.
    pub timestamp: String,
    /// Decimal degrees, WGS84, +N/-S.
    pub latitude: f64,
    /// Decimal degrees, WGS84, +E/-W.
    pub longitude: f64,
    /// Speed over ground in metres per second.
    pub speed_mps: f64,
}

impl FixRecord {
    /// Format as a "lat,lon" waypoint with 6 decimal places
    pub fn waypoint(&self) -> String {
        format!("{:.6},{:.6}", self.latitude, self.longitude)
    }
}
