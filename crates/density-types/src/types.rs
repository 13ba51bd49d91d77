//! Shared value types

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which quantity the calculator solves for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalcMode {
    /// Mass given, density computed (kg/m³)
    #[default]
    Density,
    /// Density given, mass computed (kg)
    Mass,
}

impl std::fmt::Display for CalcMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcMode::Density => write!(f, "density"),
            CalcMode::Mass => write!(f, "mass"),
        }
    }
}

/// Names of the four numeric input fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputField {
    Value,
    Length,
    Width,
    Height,
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputField::Value => write!(f, "value"),
            InputField::Length => write!(f, "length"),
            InputField::Width => write!(f, "width"),
            InputField::Height => write!(f, "height"),
        }
    }
}
