//! On-disk cache of the descriptor catalog.
//!
//! Stored as a pretty-printed JSON array of descriptors under the user's
//! config directory, so a host does not have to re-read every RDF file on
//! startup.

use std::path::{Path, PathBuf};

use crate::rdf::RdfDescriptor;

use super::catalog::DescriptorCatalog;

/// Overrides the full path of the cache file.
pub const CACHE_PATH_ENV: &str = "LADSPA_RDF_CACHE";

const CACHE_DIR: &str = "ladspa-rdf";
const CACHE_FILE: &str = "descriptors.json";

fn config_path(filename: &str) -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CACHE_DIR)
        .join(filename)
}

/// Cache location: `$LADSPA_RDF_CACHE` if set, otherwise
/// `<config dir>/ladspa-rdf/descriptors.json`.
pub fn cache_path() -> PathBuf {
    match std::env::var_os(CACHE_PATH_ENV) {
        Some(p) if !p.is_empty() => PathBuf::from(p),
        _ => config_path(CACHE_FILE),
    }
}

pub fn load_cache(path: &Path) -> Result<DescriptorCatalog, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let descriptors: Vec<RdfDescriptor> = serde_json::from_str(&text)?;
    log::debug!(
        "RDF cache: {} descriptors read from {:?}",
        descriptors.len(),
        path
    );
    Ok(DescriptorCatalog::from_descriptors(descriptors))
}

/// Like [`load_cache`], but a missing or unreadable cache gives an empty
/// catalog.
pub fn load_or_default(path: &Path) -> DescriptorCatalog {
    if !path.exists() {
        log::debug!("RDF cache: {:?} does not exist yet", path);
        return DescriptorCatalog::new();
    }
    match load_cache(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::warn!("RDF cache: ignoring {:?}: {}", path, e);
            DescriptorCatalog::new()
        }
    }
}

pub fn save_cache(
    path: &Path,
    catalog: &DescriptorCatalog,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(catalog.descriptors())?;
    std::fs::write(path, json)?;
    log::info!(
        "RDF cache: {} descriptors written to {:?}",
        catalog.len(),
        path
    );
    Ok(())
}
