// src/gps/nmea.rs
//! NMEA sentence validation and $GPRMC extraction

use super::data::FixRecord;

/// Sentence IDs accepted for extraction.
const RMC_SENTENCE_IDS: [&str; 2] = ["$GPRMC", "$GNRMC"];

/// Recognized position/DOP sentence types that are deliberately skipped.
/// Bucketing these separately keeps them out of the parse-failure count.
const SKIPPED_SENTENCE_IDS: [&str; 4] = ["$GPGGA", "$GNGGA", "$GPGSA", "$GNGSA"];

// $GPRMC field indices (0-based, after splitting on ','):
//   0  - sentence ID ($GPRMC / $GNRMC)
//   1  - UTC time (HHMMSS.sss)
//   2  - Status ('A' = active, 'V' = void)
//   3  - Latitude (DDMM.MMMM)
//   4  - N/S
//   5  - Longitude (DDDMM.MMMM)
//   6  - E/W
//   7  - Speed over ground (knots)
//   8+ - Track angle, date, magnetic variation (unused here)
const FIELD_TIME: usize = 1;
const FIELD_STATUS: usize = 2;
const FIELD_LAT: usize = 3;
const FIELD_LAT_HEM: usize = 4;
const FIELD_LON: usize = 5;
const FIELD_LON_HEM: usize = 6;
const FIELD_SPEED: usize = 7;

/// Minimum field count: indices 0-7 must be present.
const MIN_RMC_FIELDS: usize = 8;

/// Outcome of checksum verification (pass 1 of the pipeline)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumStatus {
    /// Well-formed sentence, checksum matches
    Valid,
    /// Structurally incomplete: missing '$', '*', or the two hex digits
    Incomplete,
    /// Well-formed but the declared checksum doesn't match the computed one
    Mismatch,
}

/// Verify the NMEA checksum. Expected format: `$....*HH`
///
/// Distinguishes structurally incomplete lines from lines whose checksum
/// simply doesn't match, so the caller can bucket them separately.
pub fn verify_checksum(sentence: &str) -> ChecksumStatus {
    let bytes = sentence.as_bytes();
    if bytes.first() != Some(&b'$') {
        return ChecksumStatus::Incomplete;
    }

    let star = match bytes.iter().rposition(|&b| b == b'*') {
        Some(pos) => pos,
        None => return ChecksumStatus::Incomplete,
    };
    let declared_hex = match sentence.get(star + 1..star + 3) {
        Some(hex) if hex.chars().all(|c| c.is_ascii_hexdigit()) => hex,
        _ => return ChecksumStatus::Incomplete,
    };
    let declared = match u8::from_str_radix(declared_hex, 16) {
        Ok(value) => value,
        Err(_) => return ChecksumStatus::Incomplete,
    };

    // XOR of every byte strictly between '$' and '*'.
    let computed = bytes[1..star].iter().fold(0u8, |acc, &b| acc ^ b);

    if computed == declared {
        ChecksumStatus::Valid
    } else {
        ChecksumStatus::Mismatch
    }
}

/// Classify the sentence ID (text up to the first ',').
///
/// Returns true for recognized sentence types that are not extracted, so
/// they get their own counter. Runs after checksum, before extraction.
pub fn is_recognized_skip(sentence: &str) -> bool {
    match sentence.split_once(',') {
        Some((id, _)) => SKIPPED_SENTENCE_IDS.contains(&id),
        None => false,
    }
}

/// Convert NMEA coordinate format DDMM.MMMM(...) to decimal degrees.
///
/// `raw` is e.g. "4807.038" or "01131.000"; `hemisphere` is 'N', 'S', 'E',
/// or 'W'. Returns None when the string is empty, has no decimal point,
/// has fewer than two digits before the point (no room for a minutes
/// field), or either segment is not a number.
pub fn nmea_to_decimal(raw: &str, hemisphere: char) -> Option<f64> {
    let dot = raw.find('.')?;
    if dot < 2 {
        return None;
    }

    // Everything before (dot - 2) is degrees; the rest is minutes.
    let degrees: f64 = raw.get(..dot - 2)?.parse().ok()?;
    let minutes: f64 = raw.get(dot - 2..)?.parse().ok()?;

    let mut dd = degrees + minutes / 60.0;
    if hemisphere == 'S' || hemisphere == 'W' {
        dd = -dd;
    }
    Some(dd)
}

/// Parse a $GPRMC/$GNRMC sentence that already passed the checksum test.
///
/// Returns a fix record on success, None when any field-level invariant
/// fails. The one lenient field is speed: missing or malformed speed
/// degrades to zero instead of rejecting the sentence.
pub fn parse_rmc(sentence: &str, knots_to_mps: f64) -> Option<FixRecord> {
    // Strip the checksum tail (*HH) before splitting so the last real
    // field is not polluted.
    let body = match sentence.rfind('*') {
        Some(star) => &sentence[..star],
        None => sentence,
    };

    let fields: Vec<&str> = body.split(',').collect();

    if fields.len() < MIN_RMC_FIELDS {
        return None;
    }
    if !RMC_SENTENCE_IDS.contains(&fields[0]) {
        return None;
    }
    // Status must be 'A' (active fix); empty or 'V' (void) is unusable.
    if !fields[FIELD_STATUS].starts_with('A') {
        return None;
    }
    if fields[FIELD_TIME].is_empty() {
        return None;
    }

    // Hemisphere indicators must be single characters.
    let lat_hem = single_char(fields[FIELD_LAT_HEM])?;
    let lon_hem = single_char(fields[FIELD_LON_HEM])?;

    let latitude = nmea_to_decimal(fields[FIELD_LAT], lat_hem)?;
    let longitude = nmea_to_decimal(fields[FIELD_LON], lon_hem)?;

    let speed_knots: f64 = fields[FIELD_SPEED].parse().unwrap_or(0.0);

    Some(FixRecord {
        timestamp: fields[FIELD_TIME].to_string(),
        latitude,
        longitude,
        speed_mps: speed_knots * knots_to_mps,
    })
}

fn single_char(field: &str) -> Option<char> {
    let mut chars = field.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOTS_TO_MPS: f64 = 0.514444;

    #[test]
    fn test_checksum_valid() {
        let sentence = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";
        assert_eq!(verify_checksum(sentence), ChecksumStatus::Valid);
    }

    #[test]
    fn test_checksum_hex_case_insensitive() {
        let sentence = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6a";
        assert_eq!(verify_checksum(sentence), ChecksumStatus::Valid);
    }

    #[test]
    fn test_checksum_mismatch() {
        // Same sentence with one checksum digit flipped.
        let sentence = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6B";
        assert_eq!(verify_checksum(sentence), ChecksumStatus::Mismatch);
    }

    #[test]
    fn test_checksum_incomplete_missing_dollar() {
        let sentence = "GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";
        assert_eq!(verify_checksum(sentence), ChecksumStatus::Incomplete);
    }

    #[test]
    fn test_checksum_incomplete_missing_star() {
        let sentence = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W";
        assert_eq!(verify_checksum(sentence), ChecksumStatus::Incomplete);
    }

    #[test]
    fn test_checksum_incomplete_short_trailer() {
        // Only one hex digit after '*' - incomplete, never a mismatch.
        assert_eq!(verify_checksum("$GPRMC,123519,A*6"), ChecksumStatus::Incomplete);
        assert_eq!(verify_checksum("$GPRMC,123519,A*"), ChecksumStatus::Incomplete);
    }

    #[test]
    fn test_checksum_incomplete_non_hex_trailer() {
        assert_eq!(verify_checksum("$GPRMC,123519,A*ZZ"), ChecksumStatus::Incomplete);
    }

    #[test]
    fn test_checksum_empty_line() {
        assert_eq!(verify_checksum(""), ChecksumStatus::Incomplete);
    }

    #[test]
    fn test_classifier_recognizes_gga_and_gsa() {
        assert!(is_recognized_skip("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47"));
        assert!(is_recognized_skip("$GNGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,"));
        assert!(is_recognized_skip("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39"));
        assert!(is_recognized_skip("$GNGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1"));
    }

    #[test]
    fn test_classifier_passes_rmc_and_unknown() {
        assert!(!is_recognized_skip("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A"));
        assert!(!is_recognized_skip("$GPGLL,4916.45,N,12311.12,W,225444,A,*1D"));
        assert!(!is_recognized_skip("no-comma-at-all"));
    }

    #[test]
    fn test_nmea_to_decimal_north() {
        // 4807.038,N -> 48 degrees + 7.038/60 minutes
        let dd = nmea_to_decimal("4807.038", 'N').unwrap();
        assert!((dd - 48.1173).abs() < 1e-9);
    }

    #[test]
    fn test_nmea_to_decimal_east_longitude() {
        let dd = nmea_to_decimal("01131.000", 'E').unwrap();
        assert!((dd - 11.516666666666667).abs() < 1e-9);
    }

    #[test]
    fn test_nmea_to_decimal_southern_western_negation() {
        let lat = nmea_to_decimal("3751.65", 'S').unwrap();
        assert!((lat + 37.860833333333332).abs() < 1e-9);

        let lon = nmea_to_decimal("12311.12", 'W').unwrap();
        assert!((lon + 123.18533333333333).abs() < 1e-9);
    }

    #[test]
    fn test_nmea_to_decimal_rejects_bad_input() {
        assert_eq!(nmea_to_decimal("", 'N'), None);
        assert_eq!(nmea_to_decimal("4807", 'N'), None); // no decimal point
        assert_eq!(nmea_to_decimal(".038", 'N'), None); // dot before index 2
        assert_eq!(nmea_to_decimal("7.038", 'N'), None); // one digit before dot
        assert_eq!(nmea_to_decimal("07.038", 'N'), None); // empty degrees segment
        assert_eq!(nmea_to_decimal("48ab.038", 'N'), None);
        assert_eq!(nmea_to_decimal("4807.03x", 'N'), None);
    }

    #[test]
    fn test_parse_rmc_valid_sentence() {
        let sentence = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";
        let record = parse_rmc(sentence, KNOTS_TO_MPS).unwrap();

        assert_eq!(record.timestamp, "123519");
        assert!((record.latitude - 48.1173).abs() < 1e-6);
        assert!((record.longitude - 11.516667).abs() < 1e-6);
        // 22.4 knots -> ~11.52 m/s
        assert!((record.speed_mps - 22.4 * KNOTS_TO_MPS).abs() < 1e-9);
    }

    #[test]
    fn test_parse_rmc_accepts_gnrmc() {
        let sentence = "$GNRMC,081836,A,3751.65,S,14507.36,E,000.0,360.0,130998,011.3,E*7C";
        let record = parse_rmc(sentence, KNOTS_TO_MPS).unwrap();
        assert!(record.latitude < 0.0);
        assert!(record.longitude > 0.0);
        assert_eq!(record.speed_mps, 0.0);
    }

    #[test]
    fn test_parse_rmc_rejects_wrong_sentence_id() {
        let sentence = "$GPGLL,4916.45,N,12311.12,W,225444,A,*1D";
        assert_eq!(parse_rmc(sentence, KNOTS_TO_MPS), None);
    }

    #[test]
    fn test_parse_rmc_rejects_too_few_fields() {
        assert_eq!(parse_rmc("$GPRMC,123519,A,4807.038,N*4F", KNOTS_TO_MPS), None);
    }

    #[test]
    fn test_parse_rmc_rejects_void_status() {
        let sentence = "$GPRMC,123523,V,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*74";
        assert_eq!(parse_rmc(sentence, KNOTS_TO_MPS), None);
    }

    #[test]
    fn test_parse_rmc_rejects_empty_timestamp() {
        let sentence = "$GPRMC,,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";
        assert_eq!(parse_rmc(sentence, KNOTS_TO_MPS), None);
    }

    #[test]
    fn test_parse_rmc_rejects_bad_hemisphere_field() {
        let sentence = "$GPRMC,123519,A,4807.038,NN,01131.000,E,022.4,084.4,230394,003.1,W*6A";
        assert_eq!(parse_rmc(sentence, KNOTS_TO_MPS), None);
    }

    #[test]
    fn test_parse_rmc_rejects_empty_coordinates() {
        let sentence = "$GPRMC,123519,A,,N,,E,022.4,084.4,230394,003.1,W*58";
        assert_eq!(parse_rmc(sentence, KNOTS_TO_MPS), None);
    }

    #[test]
    fn test_parse_rmc_empty_speed_degrades_to_zero() {
        let sentence = "$GPRMC,123522,A,4807.039,N,01131.001,E,,084.4,230394,003.1,W*48";
        let record = parse_rmc(sentence, KNOTS_TO_MPS).unwrap();
        assert_eq!(record.speed_mps, 0.0);
    }

    #[test]
    fn test_parse_rmc_without_checksum_trailer() {
        // Extraction itself does not require a trailer; checksum handling
        // is the previous pass's job.
        let sentence = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W";
        assert!(parse_rmc(sentence, KNOTS_TO_MPS).is_some());
    }
}
