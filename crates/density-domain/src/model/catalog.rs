//! In-memory product catalog

use serde::{Deserialize, Serialize};

use super::product::{ProductQuery, ProductRow};

/// Read-only product table, or the unavailable state when no source could be loaded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    rows: Option<Vec<ProductRow>>,
}

impl Catalog {
    pub fn from_rows(rows: Vec<ProductRow>) -> Self {
        Self { rows: Some(rows) }
    }

    /// Catalog with no loadable source
    pub fn unavailable() -> Self {
        Self { rows: None }
    }

    pub fn is_available(&self) -> bool {
        self.rows.is_some()
    }

    /// All rows in source order (empty when unavailable)
    pub fn rows(&self) -> &[ProductRow] {
        self.rows.as_deref().unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.rows().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    /// Names of every row matching the query exactly, in catalog order
    pub fn query(&self, query: &ProductQuery) -> Vec<String> {
        self.rows()
            .iter()
            .filter(|row| row.matches(query))
            .map(|row| row.name.clone())
            .collect()
    }
}
