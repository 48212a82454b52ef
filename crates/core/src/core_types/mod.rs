//! Core types and utilities

pub mod observation;
pub mod units;

pub use observation::WeatherObservation;
pub use units::*;
