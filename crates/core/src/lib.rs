//! Fishcast Core Library
//!
//! The decision core of a maritime operations dashboard: converts marine
//! weather observations (wave height, wind speed, water temperature) into
//! bounded fishing-suitability assessments with a 0-100 score, a discrete
//! label, species suggestions, and safety warnings.
//!
//! The scorer is an explainable, auditable heuristic rather than a
//! statistical model: every contributing factor is a fixed threshold band
//! with a fixed adjustment, so the assessment shown to a boat operator can
//! always be traced back to the measurements that produced it.

// Core types and utilities
pub mod core_types;

// Condition scoring and forecast aggregation
pub mod forecast;
pub mod presets;
pub mod scorer;

// Re-export core types
pub use core_types::{Celsius, Knots, Meters, WeatherObservation};

// Re-export scoring types
pub use forecast::{assess_series, ForecastSummary};
pub use presets::SeaStatePreset;
pub use scorer::{assess, SafetyWarning, Species, SuitabilityAssessment, SuitabilityLabel};
