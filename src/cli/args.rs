//! Command-line interface arguments

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "nem12-processor")]
#[command(about = "Parse AEMO NEM12 meter data and emit normalized kWh consumption rows")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the NEM12 input file
    #[arg(value_name = "NEM12_FILE")]
    pub input: PathBuf,

    /// Output CSV file for normalized (nmi, timestamp, consumption) rows
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_config(self) -> Config {
        Config {
            input: self.input,
            output: self.output,
            verbose: self.verbose,
        }
    }
}
