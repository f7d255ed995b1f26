//! Parsing statistics and result structures for normals processing
//!
//! This module provides types for tracking filter hit rates and parse counts,
//! and for organizing parsed records for downstream export.

use crate::app::models::Record;

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed station-day records
    pub records: Vec<Record>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Total number of raw lines examined
    pub total_lines: usize,

    /// Number of lines whose identifier prefix matched the filter
    pub lines_matched: usize,

    /// Number of records successfully parsed
    pub records_parsed: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            total_lines: 0,
            lines_matched: 0,
            records_parsed: 0,
        }
    }

    /// Fraction of examined lines that matched the filter, as a percentage
    pub fn match_rate(&self) -> f64 {
        if self.total_lines == 0 {
            0.0
        } else {
            (self.lines_matched as f64 / self.total_lines as f64) * 100.0
        }
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
