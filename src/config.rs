//! Configuration for normals processing
//!
//! Holds the dataset metadata and decoding defaults shared by every record
//! built from one normals file. Defaults describe the 1981-2010 hourly
//! temperature normals product.

use crate::constants::{
    DEFAULT_DATASET_NAME, DEFAULT_SCALING_FACTOR, DEFAULT_SOURCE, DEFAULT_UNIT,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Dataset-level configuration applied to every parsed record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Dataset name carried into each record (e.g. "hly-temp-normal")
    pub name: String,

    /// Unit of measure for the dataset's values
    pub unit: String,

    /// Source folder the data file was retrieved from
    pub source: String,

    /// Divisor applied to integer-encoded measurement values
    pub scaling_factor: i64,
}

impl ParserConfig {
    /// Create a configuration, validating the fields
    pub fn new(
        name: impl Into<String>,
        unit: impl Into<String>,
        source: impl Into<String>,
        scaling_factor: i64,
    ) -> Result<Self> {
        let config = Self {
            name: name.into(),
            unit: unit.into(),
            source: source.into(),
            scaling_factor,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.scaling_factor == 0 {
            return Err(Error::configuration(
                "Scaling factor cannot be zero".to_string(),
            ));
        }

        if self.name.trim().is_empty() {
            return Err(Error::configuration(
                "Dataset name cannot be empty".to_string(),
            ));
        }

        if self.unit.trim().is_empty() {
            return Err(Error::configuration("Unit cannot be empty".to_string()));
        }

        Ok(())
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_DATASET_NAME.to_string(),
            unit: DEFAULT_UNIT.to_string(),
            source: DEFAULT_SOURCE.to_string(),
            scaling_factor: DEFAULT_SCALING_FACTOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.name, "hly-temp-normal");
        assert_eq!(config.unit, "degrees_F");
        assert_eq!(
            config.source,
            "ftp://ftp.ncdc.noaa.gov/pub/data/normals/1981-2010/"
        );
        assert_eq!(config.scaling_factor, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_validates() {
        assert!(ParserConfig::new("hly-wind-normal", "mph", "local", 10).is_ok());
        assert!(ParserConfig::new("hly-wind-normal", "mph", "local", 0).is_err());
        assert!(ParserConfig::new("", "mph", "local", 10).is_err());
        assert!(ParserConfig::new("hly-wind-normal", "  ", "local", 10).is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = ParserConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ParserConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
