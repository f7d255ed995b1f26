//! Record assembly from tokenized normals file lines
//!
//! The factory holds the dataset metadata shared by every record in a file
//! (name, unit, source, scaling factor) and validates field counts before
//! constructing records.

use crate::app::models::{Measure, Record};
use crate::config::ParserConfig;
use crate::constants::{FIELDS_PER_LINE, MEASURES_PER_RECORD};
use crate::{Error, Result};

/// Builds complete station-day records from tokenized lines
///
/// Configuration is fixed at construction; `create` and `assemble` are pure
/// functions of their inputs.
#[derive(Debug, Clone, Default)]
pub struct RecordFactory {
    config: ParserConfig,
}

impl RecordFactory {
    /// Create a factory with the given dataset configuration
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Get the dataset configuration this factory applies
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Build a record from a full tokenized line
    ///
    /// The line must contain exactly 27 fields: identifier, month, day, and
    /// 24 measurement tokens. Any other count is a validation failure
    /// reporting the count received.
    pub fn create(&self, fields: &[String]) -> Result<Record> {
        if fields.len() != FIELDS_PER_LINE {
            return Err(Error::field_count(FIELDS_PER_LINE, fields.len()));
        }

        self.assemble(&fields[0], &fields[1], &fields[2], &fields[3..])
    }

    /// Build a record from pre-split identifier, date, and measurement tokens
    ///
    /// Exactly 24 tokens are required, ordered by hour (hour 0 first; the
    /// hour is implied by position and not stored).
    pub fn assemble(
        &self,
        identifier: &str,
        month: &str,
        day: &str,
        tokens: &[String],
    ) -> Result<Record> {
        if tokens.len() != MEASURES_PER_RECORD {
            return Err(Error::measure_count(MEASURES_PER_RECORD, tokens.len()));
        }

        let measures = tokens
            .iter()
            .map(|token| Measure::with_scaling_factor(token, self.config.scaling_factor))
            .collect();

        Record::new(
            identifier,
            month,
            day,
            measures,
            &self.config.name,
            &self.config.unit,
            &self.config.source,
        )
    }
}
