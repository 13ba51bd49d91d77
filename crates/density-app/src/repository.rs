//! Repository adapters for the catalog source

use std::path::{Path, PathBuf};

use density_infra::FileProductCatalog;

use crate::config::Config;

/// Fixed relative filename used when no catalog path is configured
pub const DEFAULT_CATALOG_FILE: &str = "tovar.xlsx";

/// Resolve the catalog path: explicit override, then config, then the default filename
pub fn resolve_catalog_path(config: &Config, override_path: Option<&Path>) -> PathBuf {
    override_path
        .map(Path::to_path_buf)
        .or_else(|| config.catalog_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_FILE))
}

/// Open the product catalog once at startup; never fails
pub fn open_catalog(config: &Config, override_path: Option<&Path>) -> FileProductCatalog {
    FileProductCatalog::load(resolve_catalog_path(config, override_path))
}
