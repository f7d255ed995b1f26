//! Application constants for normals processor
//!
//! This module contains the fixed-format layout constants, sentinel code
//! mappings, and default dataset metadata used throughout the application.

// =============================================================================
// Line Layout Constants
// =============================================================================

/// Width of the identifier prefix used for line filtering.
///
/// The NOAA documentation gives 10 characters for the identifier itself; the
/// prefix is one wider to cover the separator position in the fixed layout.
/// Preserved literally for compatibility with real normals files.
pub const IDENTIFIER_PREFIX_WIDTH: usize = 11;

/// Number of hourly measurements per station-day record
pub const MEASURES_PER_RECORD: usize = 24;

/// Total fields per tokenized line: identifier + month + day + 24 measurements
pub const FIELDS_PER_LINE: usize = 27;

// =============================================================================
// Dataset Defaults
// =============================================================================

/// Default dataset name (hourly temperature normals)
pub const DEFAULT_DATASET_NAME: &str = "hly-temp-normal";

/// Default unit of measure for hourly temperature normals
pub const DEFAULT_UNIT: &str = "degrees_F";

/// Default FTP source folder for the 1981-2010 normals product
pub const DEFAULT_SOURCE: &str = "ftp://ftp.ncdc.noaa.gov/pub/data/normals/1981-2010/";

/// Default divisor applied to integer-encoded values to recover floats
pub const DEFAULT_SCALING_FACTOR: i64 = 10;

// =============================================================================
// Sentinel Codes and Quality Flags
// =============================================================================

/// Sentinel code literals and descriptions as defined in the NOAA normals
/// documentation
pub mod missing_codes {
    /// Value missing entirely
    pub const MISSING: &str = "-9999";

    /// Non-zero value that would round to zero, for variables bound by zero
    pub const ROUNDS_TO_ZERO: &str = "-7777";

    /// Parameter undefined (insufficient nonzero values in percentiles)
    pub const UNDEFINED: &str = "-6666";

    /// Parameter inconsistent with another parameter
    pub const INCONSISTENT: &str = "-5555";

    /// All sentinel code literals
    pub const ALL_CODES: &[&str] = &[MISSING, ROUNDS_TO_ZERO, UNDEFINED, INCONSISTENT];
}

/// Human-readable descriptions for the completeness quality flags
pub mod flag_descriptions {
    pub const COMPLETE: &str = "complete (all 30 years used)";

    pub const STANDARD: &str = "standard (no more than 5 years missing and no more than 3 \
         consecutive years missing among the sufficiently complete years)";

    pub const REPRESENTATIVE: &str = "representative (observed record utilized incomplete, but \
         value was scaled or based on filled values to be representative of the full period of \
         record)";

    pub const PROVISIONAL: &str = "provisional (at least 10 years used, but not sufficiently \
         complete to be labeled as standard or representative). Also used for parameter values \
         on February 29 as well as for interpolated daily precipitation, snowfall, and snow \
         depth percentiles.";

    pub const QUASI_NORMAL: &str = "quasi-normal (at least 2 years per month, but not \
         sufficiently complete to be labeled as provisional or any other higher flag code. The \
         associated value was computed using a pseudonormals approach or derived from monthly \
         pseudonormals.";
}
