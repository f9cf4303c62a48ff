//! Configuration management and validation
//!
//! A [`Config`] is built from CLI arguments and validated before any input
//! is read.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Settings for one NEM12 ingest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// NEM12 input file
    pub input: PathBuf,

    /// Destination CSV for normalized rows; `None` validates and reports only
    pub output: Option<PathBuf>,

    /// Debug-level logging
    pub verbose: bool,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "input file not found: {}",
                self.input.display()
            )));
        }
        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.is_dir() {
                    return Err(Error::configuration(format!(
                        "output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }
        Ok(())
    }
}
