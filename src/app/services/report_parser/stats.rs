//! Parse outcome and per-report diagnostics

use crate::app::models::ParsedObservation;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A successfully parsed report together with its diagnostics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub observation: ParsedObservation,
    pub stats: ParseStats,
}

/// Counters and warnings accumulated over a single parse.
///
/// Warnings record recoverable oddities, missing optional sections,
/// short numeric tables, legacy date layouts. Structural failures are
/// errors and never land here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParseStats {
    pub lines_total: usize,
    pub coordinates_found: usize,
    pub filters_found: usize,
    pub warnings: Vec<String>,
}

impl ParseStats {
    pub fn new(lines_total: usize) -> Self {
        Self {
            lines_total,
            ..Self::default()
        }
    }

    /// Record a recoverable oddity, surfacing it on the log as it happens
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        warn!("{message}");
        self.warnings.push(message);
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warn_accumulates_in_order() {
        let mut stats = ParseStats::new(10);
        assert!(!stats.has_warnings());

        stats.warn("first");
        stats.warn(String::from("second"));

        assert!(stats.has_warnings());
        assert_eq!(stats.warnings, vec!["first", "second"]);
        assert_eq!(stats.lines_total, 10);
    }
}
