//! Core normals parser orchestration
//!
//! Composes the line filter and record factory into a single pipeline over
//! raw lines or a whole file: filter by station, tokenize, assemble records.

use std::path::Path;
use tracing::{debug, info};

use super::line_filter::LineFilter;
use super::record_factory::RecordFactory;
use super::stats::{ParseResult, ParseStats};
use crate::{Error, Result};

/// Parser for NOAA hourly normals files
///
/// Holds the station filter and record factory; every parse call is a pure
/// function of its input lines and this fixed configuration.
#[derive(Debug)]
pub struct NormalsParser {
    line_filter: LineFilter,
    record_factory: RecordFactory,
}

impl NormalsParser {
    /// Create a parser from a station filter and record factory
    pub fn new(line_filter: LineFilter, record_factory: RecordFactory) -> Self {
        Self {
            line_filter,
            record_factory,
        }
    }

    /// Parse a batch of raw lines into records with statistics
    ///
    /// Lines for stations outside the filter are dropped; every retained line
    /// must assemble into a valid record or the whole parse fails.
    pub fn parse_lines<'a, I>(&self, lines: I) -> Result<ParseResult>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut stats = ParseStats::new();

        let lines: Vec<&str> = lines.into_iter().collect();
        stats.total_lines = lines.len();

        let tokenized = self.line_filter.filter(lines);
        stats.lines_matched = tokenized.len();
        debug!(
            "Filter matched {} of {} lines",
            stats.lines_matched, stats.total_lines
        );

        let records = tokenized
            .iter()
            .map(|fields| self.record_factory.create(fields))
            .collect::<Result<Vec<_>>>()?;
        stats.records_parsed = records.len();

        info!(
            "Parsed {} records from {} lines",
            stats.records_parsed, stats.total_lines
        );

        Ok(ParseResult { records, stats })
    }

    /// Read a normals file and parse it
    ///
    /// Thin I/O wrapper around [`parse_lines`](Self::parse_lines).
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing normals file: {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;

        self.parse_lines(content.lines())
    }
}
