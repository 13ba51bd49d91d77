//! Calculator input and result types

use density_types::CalcMode;
use serde::{Deserialize, Serialize};

/// Unparsed field text as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub mode: CalcMode,
    /// Mass (kg) in density mode, density (kg/m³) in mass mode
    pub value: String,
    pub length: String,
    pub width: String,
    pub height: String,
}

impl RawInput {
    pub fn new(
        mode: CalcMode,
        value: impl Into<String>,
        length: impl Into<String>,
        width: impl Into<String>,
        height: impl Into<String>,
    ) -> Self {
        Self {
            mode,
            value: value.into(),
            length: length.into(),
            width: width.into(),
            height: height.into(),
        }
    }
}

/// Validated calculator input; every value is finite and > 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub mode: CalcMode,
    pub value_1: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

/// Outcome of a catalog lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "names", rename_all = "snake_case")]
pub enum ProductMatch {
    Found(Vec<String>),
    NotFound,
    CatalogUnavailable,
}

impl ProductMatch {
    pub fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() {
            ProductMatch::NotFound
        } else {
            ProductMatch::Found(names)
        }
    }
}

impl std::fmt::Display for ProductMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductMatch::Found(names) => write!(f, "{}", names.join(", ")),
            ProductMatch::NotFound => write!(f, "not found"),
            ProductMatch::CatalogUnavailable => write!(f, "catalog unavailable"),
        }
    }
}

/// Successful calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CalculationResult {
    Density {
        computed_density: f64,
        quantized_grade: f64,
        products: ProductMatch,
    },
    Mass {
        computed_mass: f64,
        products: ProductMatch,
    },
}

impl CalculationResult {
    pub fn mode(&self) -> CalcMode {
        match self {
            CalculationResult::Density { .. } => CalcMode::Density,
            CalculationResult::Mass { .. } => CalcMode::Mass,
        }
    }

    pub fn products(&self) -> &ProductMatch {
        match self {
            CalculationResult::Density { products, .. } => products,
            CalculationResult::Mass { products, .. } => products,
        }
    }
}
