//! Error types for density-calc

use thiserror::Error;

use crate::InputField;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

/// Density is undefined because length × width × height is zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("volume cannot be zero")]
pub struct VolumeZeroError;

/// Errors that halt a single calculation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("non-numeric input in {field}: {value:?}")]
    NonNumeric { field: InputField, value: String },

    #[error("non-positive input in {field}: {value}")]
    NonPositive { field: InputField, value: f64 },

    #[error("volume cannot be zero")]
    VolumeZero,
}

impl From<VolumeZeroError> for CalcError {
    fn from(_: VolumeZeroError) -> Self {
        CalcError::VolumeZero
    }
}

impl CalcError {
    /// True for the two input-validation kinds
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CalcError::NonNumeric { .. } | CalcError::NonPositive { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Calculation error: {0}")]
    Calc(#[from] CalcError),

    #[error("Catalog error: {0}")]
    CatalogLoad(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
