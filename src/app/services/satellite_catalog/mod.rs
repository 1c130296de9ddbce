//! Satellite catalog lookup and observation enrichment
//!
//! The catalog is a CSV file mapping satellite numbers to names and
//! international designators. Enrichment is strictly additive: a parsed
//! observation gains a catalog identity when its filename-derived number
//! has an entry, and is left untouched otherwise. Parsing never depends
//! on the catalog being present.
//!
//! # Usage
//!
//! ```no_run
//! use photometry_processor::SatelliteCatalog;
//! use std::path::Path;
//!
//! let catalog = SatelliteCatalog::load(Path::new("satellites.csv")).unwrap();
//! println!("{} catalog entries", catalog.len());
//! ```

pub mod loader;

#[cfg(test)]
pub mod tests;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::app::models::{ParsedObservation, SatelliteIdentity};

/// One catalog row, keyed by satellite number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SatelliteEntry {
    /// Satellite number; preserves leading zeros
    pub number: String,

    /// Catalog name
    pub name: String,

    /// International designator, when the catalog carries one
    #[serde(default)]
    pub intl_designator: Option<String>,

    /// Free-form operator notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// In-memory satellite catalog loaded from a CSV file
#[derive(Debug, Clone)]
pub struct SatelliteCatalog {
    entries: HashMap<String, SatelliteEntry>,
    source_path: PathBuf,
}

impl SatelliteCatalog {
    /// Load a catalog from a CSV file
    pub fn load(path: &Path) -> Result<Self> {
        let entries = loader::load_catalog(path)?;
        Ok(Self {
            entries,
            source_path: path.to_path_buf(),
        })
    }

    /// A catalog with no entries; every lookup misses
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            source_path: PathBuf::new(),
        }
    }

    /// Look up an entry by satellite number
    pub fn get(&self, number: &str) -> Option<&SatelliteEntry> {
        self.entries.get(number)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Path the catalog was loaded from
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Entries in unspecified order, for listing commands
    pub fn entries(&self) -> impl Iterator<Item = &SatelliteEntry> {
        self.entries.values()
    }

    /// Attach a catalog identity to an observation when its satellite
    /// number has an entry. Returns whether an identity was attached.
    pub fn enrich(&self, observation: &mut ParsedObservation) -> bool {
        let Some(number) = observation.satellite_number.as_deref() else {
            return false;
        };

        let Some(entry) = self.entries.get(number) else {
            debug!("No catalog entry for satellite {}", number);
            return false;
        };

        observation.satellite = Some(SatelliteIdentity {
            number: entry.number.clone(),
            name: entry.name.clone(),
            intl_designator: entry.intl_designator.clone(),
        });

        true
    }
}
