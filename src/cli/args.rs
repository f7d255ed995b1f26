//! Command-line argument definitions for normals processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::{
    DEFAULT_DATASET_NAME, DEFAULT_SCALING_FACTOR, DEFAULT_SOURCE, DEFAULT_UNIT,
};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;

/// CLI arguments for the NOAA normals processor
///
/// Parses fixed-format NOAA hourly climate normals files, filters them by
/// station identifier, and exports the decoded records as JSON.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "normals-processor",
    version,
    about = "Parse NOAA hourly climate normals files and export station records as JSON",
    long_about = "Parses fixed-format NOAA hourly climate normals data files into structured \
                  station-day records. Each record carries 24 decoded hourly values with their \
                  completeness quality flags. Lines are pre-filtered by station identifier so \
                  large files only pay tokenization cost for the stations requested."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the normals processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a normals file and export matching station records as JSON
    Parse(ParseArgs),
    /// Show the quality flag and sentinel code reference tables
    Flags,
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Input normals data file (e.g. hly-temp-normal.txt)
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input normals data file"
    )]
    pub input_path: PathBuf,

    /// Station identifiers to keep (comma-separated list)
    ///
    /// Lines whose identifier prefix is not in this list are dropped before
    /// tokenization.
    #[arg(
        short = 's',
        long = "stations",
        value_name = "LIST",
        help = "Comma-separated list of station identifiers to keep"
    )]
    pub stations: StationList,

    /// Output path for the JSON export (stdout if not specified)
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output path for the JSON export"
    )]
    pub output_path: Option<PathBuf>,

    /// Dataset name recorded in each exported record
    #[arg(long = "name", value_name = "NAME", default_value = DEFAULT_DATASET_NAME)]
    pub name: String,

    /// Unit of measure recorded in each exported record
    #[arg(long = "unit", value_name = "UNIT", default_value = DEFAULT_UNIT)]
    pub unit: String,

    /// Source folder recorded in each exported record
    #[arg(long = "source", value_name = "URL", default_value = DEFAULT_SOURCE)]
    pub source: String,

    /// Divisor applied to integer-encoded measurement values
    #[arg(
        long = "scaling-factor",
        value_name = "N",
        default_value_t = DEFAULT_SCALING_FACTOR
    )]
    pub scaling_factor: i64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Suppress all non-error log output
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl ParseArgs {
    /// Get the effective log level accounting for quiet mode
    pub fn get_log_level(&self) -> &str {
        if self.quiet { "error" } else { &self.log_level }
    }
}

/// Comma-separated list of station identifiers
#[derive(Debug, Clone)]
pub struct StationList(pub Vec<String>);

impl StationList {
    /// Get the identifiers as a slice
    pub fn identifiers(&self) -> &[String] {
        &self.0
    }
}

impl FromStr for StationList {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let identifiers: Vec<String> = s
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();

        if identifiers.is_empty() {
            return Err(Error::configuration(
                "Station list cannot be empty".to_string(),
            ));
        }

        Ok(StationList(identifiers))
    }
}
