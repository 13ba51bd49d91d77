//! Infrastructure layer - catalog source loaders and file-backed catalog

pub mod catalog_loader;
pub mod persistence;

pub use catalog_loader::{load_catalog, CatalogLoadError};
pub use persistence::FileProductCatalog;
