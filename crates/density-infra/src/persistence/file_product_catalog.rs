//! File-based implementation of ProductCatalogRepository

use std::path::{Path, PathBuf};

use density_domain::model::{Catalog, ProductQuery, ProductRow};
use density_domain::repository::ProductCatalogRepository;
use tracing::{debug, info, warn};

use crate::catalog_loader::{load_catalog, CatalogLoadError};

/// Product catalog loaded once from a CSV or TOML file
///
/// A source that cannot be loaded leaves the catalog unavailable instead of
/// failing; the reason is kept for display.
#[derive(Debug)]
pub struct FileProductCatalog {
    source: PathBuf,
    catalog: Catalog,
    unavailable_reason: Option<String>,
}

impl FileProductCatalog {
    /// Load the catalog, degrading to unavailable on any error
    pub fn load<P: AsRef<Path>>(source: P) -> Self {
        let source = source.as_ref().to_path_buf();
        match Self::try_load(&source) {
            Ok(loaded) => loaded,
            Err(e) => {
                warn!(path = %source.display(), error = %e, "Product catalog unavailable");
                Self {
                    source,
                    catalog: Catalog::unavailable(),
                    unavailable_reason: Some(e.to_string()),
                }
            }
        }
    }

    /// Load the catalog, returning the loader error to the caller
    pub fn try_load<P: AsRef<Path>>(source: P) -> Result<Self, CatalogLoadError> {
        let source = source.as_ref().to_path_buf();
        let rows = load_catalog(&source)?;
        info!(path = %source.display(), rows = rows.len(), "Product catalog loaded");
        Ok(Self {
            source,
            catalog: Catalog::from_rows(rows),
            unavailable_reason: None,
        })
    }

    /// Get the source path
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Why the catalog could not be loaded, if it could not
    pub fn unavailable_reason(&self) -> Option<&str> {
        self.unavailable_reason.as_deref()
    }
}

impl ProductCatalogRepository for FileProductCatalog {
    fn is_available(&self) -> bool {
        self.catalog.is_available()
    }

    fn find_names(&self, query: &ProductQuery) -> Vec<String> {
        let names = self.catalog.query(query);
        debug!(?query, matches = names.len(), "Catalog lookup");
        names
    }

    fn find_all(&self) -> &[ProductRow] {
        self.catalog.rows()
    }
}
