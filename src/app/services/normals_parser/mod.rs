//! Parser for NOAA hourly climate normals data files
//!
//! This module turns raw fixed-format file lines into exportable station-day
//! records through a simple pipeline: lines are pre-filtered by station
//! identifier and tokenized, then assembled into records of 24 hourly
//! measures.
//!
//! ## Architecture
//!
//! - [`line_filter`] - Station identifier pre-filtering and tokenization
//! - [`record_factory`] - Record assembly and field-count validation
//! - [`parser`] - Pipeline orchestration over whole files or line batches
//! - [`stats`] - Parsing statistics and result structures

pub mod line_filter;
pub mod parser;
pub mod record_factory;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use line_filter::LineFilter;
pub use parser::NormalsParser;
pub use record_factory::RecordFactory;
pub use stats::{ParseResult, ParseStats};
