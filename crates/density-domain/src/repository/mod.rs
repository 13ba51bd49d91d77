//! Repository trait definitions for catalog access

use crate::model::{ProductMatch, ProductQuery, ProductRow};

/// Read-only access to the product reference catalog
pub trait ProductCatalogRepository {
    /// False when no catalog source could be loaded
    fn is_available(&self) -> bool;

    /// Names of rows matching the query exactly, in catalog order
    fn find_names(&self, query: &ProductQuery) -> Vec<String>;

    /// All rows in catalog order
    fn find_all(&self) -> &[ProductRow];

    /// Lookup that distinguishes an unavailable catalog from a miss
    fn lookup(&self, query: &ProductQuery) -> ProductMatch {
        if !self.is_available() {
            return ProductMatch::CatalogUnavailable;
        }
        ProductMatch::from_names(self.find_names(query))
    }
}

impl ProductCatalogRepository for crate::model::Catalog {
    fn is_available(&self) -> bool {
        crate::model::Catalog::is_available(self)
    }

    fn find_names(&self, query: &ProductQuery) -> Vec<String> {
        self.query(query)
    }

    fn find_all(&self) -> &[ProductRow] {
        self.rows()
    }
}
