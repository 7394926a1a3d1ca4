// crates/dinedb-core/src/loader/mod.rs

//! # Catalog Loader
//!
//! Handles the physical layer (files, gzip) and delegates to the payload
//! parsers (JSON vs bincode). The bundled dataset is parsed once per process
//! and cloned out of a cache.

use crate::catalog::Catalog;
use crate::error::{DineError, Result};
use std::path::Path;
use tracing::info;

pub mod binary;
pub mod common_io;

use common_io::{FileFormat, Payload};

/// The dataset shipped with the crate.
#[cfg(feature = "json")]
pub const BUNDLED_DATASET: &str = include_str!("../../data/restaurants.json");

#[cfg(feature = "json")]
static CATALOG_CACHE: once_cell::sync::OnceCell<Catalog> = once_cell::sync::OnceCell::new();

impl Catalog {
    /// Load the bundled catalog.
    ///
    /// The dataset is compiled into the crate, so this never touches the
    /// filesystem. It is parsed on first use and cloned afterwards.
    #[cfg(feature = "json")]
    pub fn load() -> Result<Self> {
        CATALOG_CACHE
            .get_or_try_init(|| {
                let catalog = Self::from_json_str(BUNDLED_DATASET)?;
                info!(restaurants = catalog.len(), "bundled catalog loaded");
                Ok::<_, DineError>(catalog)
            })
            .cloned()
    }

    /// Parse a JSON array of restaurant records.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load a catalog file.
    ///
    /// The format follows the file name: `.json`, `.json.gz`, `.bin` or
    /// `.bin.gz`. Gzip needs the `compact` feature, JSON the `json` feature.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = FileFormat::detect(path);
        let reader = common_io::open_stream(path, format.gzip)?;

        let records = match format.payload {
            Payload::Binary => binary::read_records(reader)?,
            #[cfg(feature = "json")]
            Payload::Json => serde_json::from_reader(reader)?,
            #[cfg(not(feature = "json"))]
            Payload::Json => {
                return Err(DineError::InvalidData(format!(
                    "{} is JSON but the 'json' feature is disabled",
                    path.display()
                )))
            }
        };

        let catalog = Self::new(records)?;
        info!(
            path = %path.display(),
            restaurants = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Load `source`, preferring a fresh binary cache next to it.
    ///
    /// The cache (`<source>.bin`) is used when it is at least as new as the
    /// source; otherwise the source is parsed and the cache rewritten. A cache
    /// that fails to read or write is ignored.
    pub fn load_cached(source: impl AsRef<Path>) -> Result<Self> {
        let source = source.as_ref();
        let cache = common_io::get_cache_path(source);

        if is_cache_fresh(source, &cache) {
            if let Ok(catalog) = Self::load_from_path(&cache) {
                return Ok(catalog);
            }
        }

        let catalog = Self::load_from_path(source)?;
        if let Err(e) = catalog.save_as(&cache) {
            tracing::warn!(path = %cache.display(), error = %e, "could not write catalog cache");
        }
        Ok(catalog)
    }

    /// Write the records as a bincode cache (gzip when the name ends in `.gz`).
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = FileFormat::detect(path);
        if format.payload != Payload::Binary {
            return Err(DineError::InvalidData(format!(
                "{} is not a binary cache path (*.bin or *.bin.gz)",
                path.display()
            )));
        }
        let mut writer = common_io::create_stream(path, format.gzip)?;
        binary::write_records(&mut writer, self.restaurants())?;
        writer.finish()
    }
}

fn is_cache_fresh(source: &Path, cache: &Path) -> bool {
    let cache_time = match std::fs::metadata(cache).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match std::fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => true,
    }
}
