//! Normals Processor Library
//!
//! A Rust library for parsing NOAA hourly climate normals data files into
//! structured station-day records.
//!
//! This library provides tools for:
//! - Decoding measurement tokens with scaled values, quality flags, and
//!   sentinel missing-value codes
//! - Assembling complete 24-hour station records from tokenized lines
//! - Pre-filtering raw file lines by station identifier before parsing
//! - Exporting records as a JSON-friendly schema for downstream analysis

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod normals_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{DecodedMeasure, Measure, MissingCode, QualityFlag, Record, RecordSchema};
pub use app::services::normals_parser::{LineFilter, NormalsParser, RecordFactory};
pub use config::ParserConfig;

/// Result type alias for the normals processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for normals processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Tokenized line had the wrong number of fields
    #[error(
        "Line must contain exactly {expected} fields (identifier, month, day + 24 measurements), got {actual}"
    )]
    FieldCount { expected: usize, actual: usize },

    /// Record was given the wrong number of measures
    #[error("Record must contain exactly {expected} measures, got {actual}")]
    MeasureCount { expected: usize, actual: usize },

    /// Measurement token remainder was not a signed integer
    #[error("Invalid numeric value in measurement token '{token}'")]
    InvalidNumeric {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Measurement token carried an unrecognized quality flag character
    #[error("Unknown quality flag '{flag}' in measurement token '{token}'")]
    UnknownFlag { flag: char, token: String },

    /// A date field could not be parsed as an integer at export time
    #[error("Invalid {field} value '{value}': expected an integer")]
    DateField {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// JSON serialization failed
    #[error("Serialization error: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a field count mismatch error for a tokenized line
    pub fn field_count(expected: usize, actual: usize) -> Self {
        Self::FieldCount { expected, actual }
    }

    /// Create a measure count mismatch error for a record
    pub fn measure_count(expected: usize, actual: usize) -> Self {
        Self::MeasureCount { expected, actual }
    }

    /// Create an invalid numeric token error
    pub fn invalid_numeric(token: impl Into<String>, source: std::num::ParseIntError) -> Self {
        Self::InvalidNumeric {
            token: token.into(),
            source,
        }
    }

    /// Create an unknown quality flag error
    pub fn unknown_flag(flag: char, token: impl Into<String>) -> Self {
        Self::UnknownFlag {
            flag,
            token: token.into(),
        }
    }

    /// Create a date field parsing error
    pub fn date_field(
        field: &'static str,
        value: impl Into<String>,
        source: std::num::ParseIntError,
    ) -> Self {
        Self::DateField {
            field,
            value: value.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization { source: error }
    }
}
