//! Command execution for the NEM12 processor CLI
//!
//! Sets up logging, runs the ingest against the configured sink and prints
//! the upload summary.

use std::fs::File;
use std::io::BufReader;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::{debug, info};

use crate::app::services::ingest::{CsvSink, IngestStats, Ingestor, MemorySink};
use crate::cli::args::Args;
use crate::config::Config;

/// Run one ingest from the parsed CLI arguments.
pub fn run(args: Args) -> Result<IngestStats> {
    let config = args.into_config();
    setup_logging(&config)?;

    info!("Starting NEM12 processor");
    debug!("Configuration: {:?}", config);
    config.validate()?;

    let start_time = Instant::now();
    let input = File::open(&config.input)
        .with_context(|| format!("failed to open {}", config.input.display()))?;
    let reader = BufReader::new(input);

    let stats = match &config.output {
        Some(output) => {
            let sink = CsvSink::create(output)
                .with_context(|| format!("failed to stage output for {}", output.display()))?;
            Ingestor::new(sink).ingest(reader)?
        }
        // Without an output path the upload is validated and summarized only.
        None => Ingestor::new(MemorySink::new()).ingest(reader)?,
    };

    report(&config, &stats, start_time.elapsed());
    Ok(stats)
}

/// Set up structured logging based on the configuration
fn setup_logging(config: &Config) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = if config.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}

fn report(config: &Config, stats: &IngestStats, elapsed: Duration) {
    println!();
    println!("{}", "NEM12 ingest complete".bright_green().bold());
    println!(
        "  Interval records: {}",
        stats.interval_records.to_string().bright_cyan()
    );
    println!(
        "  Rows written:     {}",
        stats.readings_written.to_string().bright_cyan()
    );
    println!(
        "  Distinct NMIs:    {}",
        stats.distinct_nmis.to_string().bright_cyan()
    );
    if let Some(output) = &config.output {
        println!("  Output:           {}", output.display());
    }
    println!("  Elapsed:          {:.2?}", elapsed);
}
