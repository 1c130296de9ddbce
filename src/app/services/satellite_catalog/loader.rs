//! CSV catalog loading.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, warn};

use crate::{Error, Result};

use super::SatelliteEntry;

/// Read catalog rows from a headered CSV file.
///
/// Rows with an empty satellite number are rejected. When the same number
/// appears on several rows, the first row wins and later ones are logged
/// and dropped.
pub fn load_catalog(path: &Path) -> Result<HashMap<String, SatelliteEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::catalog(format!("cannot open '{}': {}", path.display(), e)))?;

    let mut entries: HashMap<String, SatelliteEntry> = HashMap::new();

    for (row, record) in reader.deserialize::<SatelliteEntry>().enumerate() {
        let entry = record.map_err(|e| {
            Error::catalog(format!(
                "bad row {} in '{}': {}",
                row + 2,
                path.display(),
                e
            ))
        })?;

        if entry.number.is_empty() {
            return Err(Error::catalog(format!(
                "row {} in '{}' has an empty satellite number",
                row + 2,
                path.display()
            )));
        }

        if entries.contains_key(&entry.number) {
            warn!(
                "Duplicate catalog entry for satellite {} in '{}', keeping the first",
                entry.number,
                path.display()
            );
            continue;
        }

        entries.insert(entry.number.clone(), entry);
    }

    debug!(
        "Loaded {} satellite catalog entries from '{}'",
        entries.len(),
        path.display()
    );

    Ok(entries)
}
