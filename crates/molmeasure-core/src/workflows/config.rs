use crate::core::bonds::{BondCriteria, BondError, DEFAULT_MAX_BOND, DEFAULT_MIN_BOND};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    InvalidBounds(#[from] BondError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub criteria: BondCriteria,
    /// Report angles in degrees instead of radians.
    pub degrees: bool,
    pub include_angles: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            criteria: BondCriteria::default(),
            degrees: true,
            include_angles: true,
        }
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    min_bond: Option<f64>,
    max_bond: Option<f64>,
    degrees: Option<bool>,
    include_angles: Option<bool>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_bond(mut self, value: f64) -> Self {
        self.min_bond = Some(value);
        self
    }

    pub fn max_bond(mut self, value: f64) -> Self {
        self.max_bond = Some(value);
        self
    }

    pub fn degrees(mut self, value: bool) -> Self {
        self.degrees = Some(value);
        self
    }

    pub fn include_angles(mut self, value: bool) -> Self {
        self.include_angles = Some(value);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let criteria = BondCriteria::new(
            self.min_bond.unwrap_or(DEFAULT_MIN_BOND),
            self.max_bond.unwrap_or(DEFAULT_MAX_BOND),
        )?;
        Ok(AnalysisConfig {
            criteria,
            degrees: self.degrees.unwrap_or(true),
            include_angles: self.include_angles.unwrap_or(true),
        })
    }
}
