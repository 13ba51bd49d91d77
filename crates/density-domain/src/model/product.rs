//! Product catalog rows

use serde::{Deserialize, Serialize};

/// One row of the reference catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRow {
    pub name: String,
    /// kg/m³
    pub density: f64,
    /// m
    pub length: f64,
    /// m
    pub width: f64,
    /// m
    pub height: f64,
}

impl ProductRow {
    pub fn new(name: impl Into<String>, density: f64, length: f64, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            density,
            length,
            width,
            height,
        }
    }

    /// Exact equality on density and all three dimensions.
    ///
    /// No tolerance is applied; NaN fields never match.
    pub fn matches(&self, query: &ProductQuery) -> bool {
        self.density == query.density
            && self.length == query.length
            && self.width == query.width
            && self.height == query.height
    }
}

/// Lookup key: density plus dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductQuery {
    pub density: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl ProductQuery {
    pub fn new(density: f64, length: f64, width: f64, height: f64) -> Self {
        Self {
            density,
            length,
            width,
            height,
        }
    }
}
