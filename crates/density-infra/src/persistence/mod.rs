//! Persistence implementations
//!
//! File-backed implementations of the repository traits.

mod file_product_catalog;

pub use file_product_catalog::FileProductCatalog;
