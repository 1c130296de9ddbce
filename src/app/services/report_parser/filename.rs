//! Satellite and partition metadata from the report filename
//!
//! Partitioned satellite observations are named `NNNNNNNN.SSX`: eight
//! digits of satellite identifier, two digits of partition offset in
//! seconds, one trailing letter. Anything else carries no metadata, which
//! is a normal, valid observation rather than an error.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static FILENAME_META: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{8})\.(\d{2})[A-Z]$").unwrap());

/// Metadata derived from a partition-scheme report filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameMeta {
    /// Satellite identifier; preserves leading zeros
    pub satellite_number: String,

    /// Partition time offset in seconds
    pub partition_time_sec: u32,
}

/// Extract satellite metadata from the filename, independent of content
pub fn extract_filename_meta(filename: Option<&str>) -> Option<FilenameMeta> {
    let name = filename?;
    let caps = FILENAME_META.captures(name)?;

    let partition_time_sec = caps[2].parse().ok()?;
    let meta = FilenameMeta {
        satellite_number: caps[1].to_string(),
        partition_time_sec,
    };

    debug!(
        "Filename '{}' carries satellite {} at partition offset {}s",
        name, meta.satellite_number, meta.partition_time_sec
    );

    Some(meta)
}
