// src/display/terminal.rs
//! Plain-text summary and route table output

use crate::gps::data::FixRecord;
use crate::pipeline::RouteReport;

const TABLE_RULE_WIDTH: usize = 44;

/// Print the processing summary block.
pub fn print_summary(report: &RouteReport) {
    let stats = &report.stats;
    println!("=== Processing Summary ===");
    println!("  Total lines read      : {}", stats.lines_total);
    println!("  Checksum failures     : {}", stats.checksum_mismatch);
    println!("  Not relevant (skipped): {}", stats.not_relevant);
    println!("  Parse/validation fail : {}", stats.parse_failed);
    println!("  Valid records parsed  : {}", report.records_parsed);
    println!("  After timestamp dedup : {}", report.after_temporal);
    println!("  After spatial dedup   : {}", report.route.len());
    println!();
}

/// Print the route as a fixed-width table.
pub fn print_route(route: &[FixRecord]) {
    println!("=== Route Points ===");
    println!("{:<6}{:<14}{:<14}Speed (m/s)", "#", "Latitude", "Longitude");
    println!("{}", "-".repeat(TABLE_RULE_WIDTH));

    for (i, point) in route.iter().enumerate() {
        println!(
            "{:<6}{:<14.6}{:<14.6}{:.6}",
            i + 1,
            point.latitude,
            point.longitude,
            point.speed_mps
        );
    }
}
