// src/main.rs v2
//! nmea-route - Offline NMEA-0183 tracklog processor

use clap::Parser;
use nmea_route::{config::PipelineConfig, display::terminal, error::Result, map, pipeline};
use std::path::PathBuf;
use tokio::{
    fs::File,
    io::{AsyncBufReadExt, BufReader},
};

#[derive(Debug, Parser)]
#[command(
    name = "nmea-route",
    version,
    about = "Extract an ordered route from NMEA-0183 tracklog files"
)]
struct Cli {
    /// NMEA tracklog files, processed in argument order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Spatial deduplication epsilon in decimal degrees
    #[arg(long)]
    epsilon: Option<f64>,

    /// JSON config file with pipeline thresholds
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip printing the Google Maps URL
    #[arg(long)]
    no_url: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    if let Some(epsilon) = cli.epsilon {
        config.spatial_epsilon = epsilon;
    }

    let lines = read_input_lines(&cli.files).await?;
    let report = pipeline::build_route(lines.iter().map(String::as_str), &config);

    terminal::print_summary(&report);

    if report.route.is_empty() {
        println!("No valid GPS points found.");
        return Ok(());
    }

    terminal::print_route(&report.route);

    if !cli.no_url {
        if let Some(url) = map::google_maps_url(&report.route) {
            println!();
            println!("=== Google Maps URL ===");
            println!("{}", url);
        }
    }

    Ok(())
}

/// Read all input files in argument order into one batch of sentence lines.
///
/// Trailing carriage returns are stripped and blank lines skipped before
/// the lines reach the pipeline. Unreadable files produce a warning and
/// are skipped; the run continues with the remaining files.
async fn read_input_lines(files: &[PathBuf]) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    for path in files {
        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Warning: cannot open '{}', skipping: {}", path.display(), e);
                continue;
            }
        };

        let mut reader = BufReader::new(file).lines();
        while let Some(line) = reader.next_line().await? {
            // Files may use \r\n line endings.
            let line = line.trim_end_matches('\r');
            if !line.is_empty() {
                lines.push(line.to_string());
            }
        }
    }

    Ok(lines)
}
