//! Data models for normals processing
//!
//! This module contains the core data structures for representing NOAA hourly
//! climate normals: individual measurement tokens, their decoded form, and the
//! 24-hour station-day record assembled from a file line.

use crate::constants::{self, flag_descriptions, missing_codes};
use crate::{Error, Result};
use serde::{Serialize, Serializer};
use std::str::FromStr;

// =============================================================================
// Quality Flag Enumeration
// =============================================================================

/// Completeness quality flags for normals measurements
///
/// These single-letter codes indicate how complete the 30-year observation
/// record behind a value was, according to the NOAA normals documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualityFlag {
    /// All 30 years of record were used
    Complete,

    /// At most 5 years missing, at most 3 consecutive years missing
    Standard,

    /// Incomplete record scaled or filled to represent the full period
    Representative,

    /// At least 10 years used but below the standard/representative bar
    Provisional,

    /// At least 2 years per month, derived via pseudonormals
    QuasiNormal,
}

impl QualityFlag {
    /// Parse a quality flag from its single-letter code
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(QualityFlag::Complete),
            'S' => Some(QualityFlag::Standard),
            'R' => Some(QualityFlag::Representative),
            'P' => Some(QualityFlag::Provisional),
            'Q' => Some(QualityFlag::QuasiNormal),
            _ => None,
        }
    }

    /// Get the single-letter code for this flag
    pub fn as_char(self) -> char {
        match self {
            QualityFlag::Complete => 'C',
            QualityFlag::Standard => 'S',
            QualityFlag::Representative => 'R',
            QualityFlag::Provisional => 'P',
            QualityFlag::QuasiNormal => 'Q',
        }
    }

    /// Get human-readable description of this quality flag
    pub fn description(self) -> &'static str {
        match self {
            QualityFlag::Complete => flag_descriptions::COMPLETE,
            QualityFlag::Standard => flag_descriptions::STANDARD,
            QualityFlag::Representative => flag_descriptions::REPRESENTATIVE,
            QualityFlag::Provisional => flag_descriptions::PROVISIONAL,
            QualityFlag::QuasiNormal => flag_descriptions::QUASI_NORMAL,
        }
    }

    /// Get all possible quality flag values
    pub fn all_values() -> [QualityFlag; 5] {
        [
            QualityFlag::Complete,
            QualityFlag::Standard,
            QualityFlag::Representative,
            QualityFlag::Provisional,
            QualityFlag::QuasiNormal,
        ]
    }
}

impl FromStr for QualityFlag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                QualityFlag::from_char(c).ok_or_else(|| Error::unknown_flag(c, s.trim()))
            }
            _ => Err(Error::configuration(format!(
                "Invalid quality flag '{}': must be a single letter (C, S, R, P, or Q)",
                s
            ))),
        }
    }
}

impl std::fmt::Display for QualityFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// Serialized as the single-letter code so exports match the file format
impl Serialize for QualityFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_char(self.as_char())
    }
}

// =============================================================================
// Sentinel Missing-Value Codes
// =============================================================================

/// Sentinel codes used in normals files to mark absent or inapplicable values
///
/// A sentinel is recognized only by exact full-token match: a token that merely
/// starts with a sentinel's digits (for example "-7777C") is an ordinary scaled
/// value with a trailing quality flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingCode {
    /// "-9999": value missing entirely
    Missing,

    /// "-7777": non-zero value that would round to zero
    RoundsToZero,

    /// "-6666": parameter undefined for this percentile
    Undefined,

    /// "-5555": parameter inconsistent with another parameter
    Inconsistent,
}

impl MissingCode {
    /// Match a raw token against the sentinel literals (exact match only)
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            missing_codes::MISSING => Some(MissingCode::Missing),
            missing_codes::ROUNDS_TO_ZERO => Some(MissingCode::RoundsToZero),
            missing_codes::UNDEFINED => Some(MissingCode::Undefined),
            missing_codes::INCONSISTENT => Some(MissingCode::Inconsistent),
            _ => None,
        }
    }

    /// Get the literal token for this sentinel
    pub fn as_str(self) -> &'static str {
        match self {
            MissingCode::Missing => missing_codes::MISSING,
            MissingCode::RoundsToZero => missing_codes::ROUNDS_TO_ZERO,
            MissingCode::Undefined => missing_codes::UNDEFINED,
            MissingCode::Inconsistent => missing_codes::INCONSISTENT,
        }
    }

    /// Decoded value for this sentinel (only RoundsToZero yields a number)
    pub fn value(self) -> Option<f64> {
        match self {
            MissingCode::RoundsToZero => Some(0.0),
            _ => None,
        }
    }

    /// Human-readable reason the value is absent or zero
    pub fn description(self) -> &'static str {
        match self {
            MissingCode::Missing => "Missing",
            MissingCode::RoundsToZero => {
                "a non-zero value that would round to zero, for variables bound by zero."
            }
            MissingCode::Undefined => {
                "parameter undefined; used in precipitation/snowfall/snow depth percentiles \
                 when number of nonzero values is insufficient"
            }
            MissingCode::Inconsistent => {
                "parameter not available because it was inconsistent with another parameter"
            }
        }
    }
}

// =============================================================================
// Measure
// =============================================================================

/// One raw hourly measurement token from a normals file line
///
/// The token is either one of the four sentinel literals or a signed integer
/// followed by a single-letter quality flag. A `Measure` is an immutable value
/// object; decoding is pure and can be repeated at will.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measure {
    /// Original token string as read from the file
    raw: String,

    /// Divisor applied to the integer-encoded value to recover a float
    scaling_factor: i64,
}

impl Measure {
    /// Create a measure from a raw token with the default scaling factor
    pub fn new(raw: impl Into<String>) -> Self {
        Self::with_scaling_factor(raw, constants::DEFAULT_SCALING_FACTOR)
    }

    /// Create a measure from a raw token with an explicit scaling factor
    pub fn with_scaling_factor(raw: impl Into<String>, scaling_factor: i64) -> Self {
        Self {
            raw: raw.into(),
            scaling_factor,
        }
    }

    /// Get the original token string
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Get the scaling factor this measure decodes with
    pub fn scaling_factor(&self) -> i64 {
        self.scaling_factor
    }

    /// Decode the raw token into a value, optional flag, and description
    ///
    /// Sentinel codes are matched against the full token first; everything
    /// else is treated as `<signed integer><flag letter>`, with the integer
    /// divided by the scaling factor. A malformed integer or an unrecognized
    /// flag letter is an error and aborts export of the enclosing record.
    pub fn decode(&self) -> Result<DecodedMeasure> {
        if let Some(code) = MissingCode::from_token(&self.raw) {
            return Ok(DecodedMeasure {
                value: code.value(),
                flag: None,
                desc: code.description().to_string(),
            });
        }

        let flag_char = self
            .raw
            .chars()
            .next_back()
            .ok_or_else(|| Error::unknown_flag(' ', &self.raw))?;
        let flag = QualityFlag::from_char(flag_char)
            .ok_or_else(|| Error::unknown_flag(flag_char, &self.raw))?;

        let digits = &self.raw[..self.raw.len() - flag_char.len_utf8()];
        let scaled = digits
            .parse::<i64>()
            .map_err(|e| Error::invalid_numeric(&self.raw, e))?;

        Ok(DecodedMeasure {
            value: Some(scaled as f64 / self.scaling_factor as f64),
            flag: Some(flag),
            desc: flag.description().to_string(),
        })
    }
}

/// Decoded form of a measurement token, ready for export
///
/// `value` is always present in the serialized output (null when absent);
/// `flag` is omitted for sentinel-coded measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedMeasure {
    /// Decoded numeric value, or None for missing/undefined measurements
    pub value: Option<f64>,

    /// Completeness quality flag, absent for sentinel codes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag: Option<QualityFlag>,

    /// Human-readable description of the flag or missing reason
    pub desc: String,
}

// =============================================================================
// Record
// =============================================================================

/// One station's full 24-hour measurement set for one calendar date
///
/// Month and day are kept in their original string form from the file; the
/// exported schema converts them to integers. The record owns exactly 24
/// measures ordered by hour (hour 0 first) and is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    identifier: String,
    month: String,
    day: String,
    measures: Vec<Measure>,
    name: String,
    unit: String,
    source: String,
}

impl Record {
    /// Create a new record, validating the measure count
    pub fn new(
        identifier: impl Into<String>,
        month: impl Into<String>,
        day: impl Into<String>,
        measures: Vec<Measure>,
        name: impl Into<String>,
        unit: impl Into<String>,
        source: impl Into<String>,
    ) -> Result<Self> {
        if measures.len() != constants::MEASURES_PER_RECORD {
            return Err(Error::measure_count(
                constants::MEASURES_PER_RECORD,
                measures.len(),
            ));
        }

        Ok(Self {
            identifier: identifier.into(),
            month: month.into(),
            day: day.into(),
            measures,
            name: name.into(),
            unit: unit.into(),
            source: source.into(),
        })
    }

    /// Get the station identifier
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Get the month field as read from the file
    pub fn month(&self) -> &str {
        &self.month
    }

    /// Get the day field as read from the file
    pub fn day(&self) -> &str {
        &self.day
    }

    /// Get the hourly measures, ordered by hour
    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }

    /// Export the record as its serializable schema
    ///
    /// Decodes all 24 measures and parses month/day to integers. Any decode
    /// or date-parsing failure aborts the whole export; no partial schema is
    /// returned.
    pub fn export(&self) -> Result<RecordSchema> {
        let month = self
            .month
            .trim()
            .parse::<u32>()
            .map_err(|e| Error::date_field("month", &self.month, e))?;
        let day = self
            .day
            .trim()
            .parse::<u32>()
            .map_err(|e| Error::date_field("day", &self.day, e))?;

        let measurements = self
            .measures
            .iter()
            .map(Measure::decode)
            .collect::<Result<Vec<_>>>()?;

        Ok(RecordSchema {
            identifier: self.identifier.clone(),
            month,
            day,
            name: self.name.clone(),
            source: self.source.clone(),
            unit: self.unit.clone(),
            measurements,
        })
    }
}

/// Serializable export schema for a station-day record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordSchema {
    /// Station identifier string
    pub identifier: String,

    /// Calendar month (1-12 in well-formed data)
    pub month: u32,

    /// Calendar day of month
    pub day: u32,

    /// Dataset name (e.g. "hly-temp-normal")
    pub name: String,

    /// Source folder the dataset was retrieved from
    pub source: String,

    /// Unit of measure (e.g. "degrees_F")
    pub unit: String,

    /// Decoded hourly measurements, hour 0 through 23
    pub measurements: Vec<DecodedMeasure>,
}
