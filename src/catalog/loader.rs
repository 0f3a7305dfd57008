//! @acp:module "Catalog Loader"
//! @acp:summary "Load the built-in or a user-supplied trait catalog"
//! @acp:domain catalog
//! @acp:layer io

use std::path::Path;

use crate::error::{FinderError, Result};

use super::types::Catalog;
use super::validate::check_catalog;

/// Load the catalog compiled into the binary
pub fn load_builtin_catalog() -> Result<Catalog> {
    let json = include_str!("../../data/catalog.json");
    let catalog: Catalog = serde_json::from_str(json)?;
    tracing::debug!("Loaded built-in catalog ({} records)", catalog.len());
    Ok(catalog)
}

/// Load a catalog from a JSON or YAML file
///
/// Loading is lenient: structural problems found by [`check_catalog`] are
/// logged as warnings and the catalog is still returned.
pub fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&content, path)?;

    for issue in check_catalog(&catalog) {
        tracing::warn!("{}: {}", path.display(), issue);
    }

    tracing::info!(
        "Loaded catalog {} ({} records)",
        path.display(),
        catalog.len()
    );
    Ok(catalog)
}

/// Resolve the catalog to use: an explicit file wins over the built-in one
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(p) => load_catalog_file(p),
        None => load_builtin_catalog(),
    }
}

fn parse_catalog(content: &str, path: &Path) -> Result<Catalog> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "json" => Ok(serde_json::from_str(content)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(content)?),
        other => Err(FinderError::UnsupportedFormat(if other.is_empty() {
            path.display().to_string()
        } else {
            other.to_string()
        })),
    }
}
