// src/pipeline.rs
//! Per-line classification and route assembly

use crate::{
    config::PipelineConfig,
    dedup,
    gps::{
        data::FixRecord,
        nmea::{self, ChecksumStatus},
    },
};

/// Classification of one input line.
///
/// Every line lands in exactly one bucket, and none of them aborts the
/// run: a failed sentence is excluded and counted, never retried.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// Valid $GPRMC/$GNRMC sentence, fully extracted
    Fix(FixRecord),
    /// Structurally malformed: missing '$', '*', or the two hex digits
    ChecksumIncomplete,
    /// Well-formed sentence whose declared checksum doesn't match
    ChecksumMismatch,
    /// Recognized position/DOP sentence type that is deliberately skipped
    NotRelevant,
    /// Passed checksum and relevance but failed field-level validation
    ExtractionFailed,
}

/// Run the two validation passes plus extraction on a single line.
pub fn classify_line(line: &str, knots_to_mps: f64) -> LineOutcome {
    // Pass 1 - checksum.
    match nmea::verify_checksum(line) {
        ChecksumStatus::Incomplete => return LineOutcome::ChecksumIncomplete,
        ChecksumStatus::Mismatch => return LineOutcome::ChecksumMismatch,
        ChecksumStatus::Valid => {}
    }

    // Classify known-but-unsupported sentence types before full parsing
    // so they get their own counter instead of inflating the
    // parse-failure number.
    if nmea::is_recognized_skip(line) {
        return LineOutcome::NotRelevant;
    }

    // Pass 2 - field validation & extraction.
    match nmea::parse_rmc(line, knots_to_mps) {
        Some(record) => LineOutcome::Fix(record),
        None => LineOutcome::ExtractionFailed,
    }
}

/// Per-run counters for caller-side reporting.
///
/// Structurally incomplete lines are tallied together with extraction
/// failures; checksum mismatches and skipped sentence types each get
/// their own bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub lines_total: usize,
    pub checksum_mismatch: usize,
    pub not_relevant: usize,
    pub parse_failed: usize,
}

impl RunStats {
    /// Attribute one classified line to its counter.
    pub fn record(&mut self, outcome: &LineOutcome) {
        self.lines_total += 1;
        match outcome {
            LineOutcome::Fix(_) => {}
            LineOutcome::ChecksumIncomplete | LineOutcome::ExtractionFailed => {
                self.parse_failed += 1;
            }
            LineOutcome::ChecksumMismatch => self.checksum_mismatch += 1,
            LineOutcome::NotRelevant => self.not_relevant += 1,
        }
    }
}

/// Result of one full pipeline run.
#[derive(Debug, Clone, Default)]
pub struct RouteReport {
    /// Chronologically ordered route after both dedup stages
    pub route: Vec<FixRecord>,
    /// Per-line counters
    pub stats: RunStats,
    /// Valid records extracted before any deduplication
    pub records_parsed: usize,
    /// Record count after timestamp dedup, before spatial dedup
    pub after_temporal: usize,
}

/// Run the whole pipeline over an ordered batch of raw sentence lines.
///
/// Lines must already be stripped of trailing '\r' with blank lines
/// removed; multiple input sources are handled by concatenating their
/// lines in a deterministic order before calling this. Always produces a
/// report, possibly with an empty route.
pub fn build_route<'a, I>(lines: I, config: &PipelineConfig) -> RouteReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut records = Vec::new();
    let mut stats = RunStats::default();

    for line in lines {
        let outcome = classify_line(line, config.knots_to_mps);
        stats.record(&outcome);
        if let LineOutcome::Fix(record) = outcome {
            records.push(record);
        }
    }

    let records_parsed = records.len();
    let deduped = dedup::dedup_by_timestamp(records);
    let after_temporal = deduped.len();
    let route = dedup::dedup_spatial(deduped, config.spatial_epsilon);

    RouteReport {
        route,
        stats,
        records_parsed,
        after_temporal,
    }
}
