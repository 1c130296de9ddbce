//! Core data structures for photometric observation records.
//!
//! Everything here is constructed fresh per parse call and never mutated
//! after the observation assembler completes; the records own all their
//! nested arrays exclusively.

pub mod filter;
pub mod observation;

pub use filter::{
    AveragedMagnitude, ExperimentParams, FilterBlock, SpectralPeak, SummaryStats,
};
pub use observation::{
    CoordinateSample, EtalonCalibration, ObservationHeader, ParsedObservation, SatelliteIdentity,
    StationInfo,
};
