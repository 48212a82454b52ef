//! Marine weather observation snapshot

use crate::core_types::units::{Celsius, Knots, Meters};
use serde::{Deserialize, Serialize};

/// A single snapshot of marine weather conditions as supplied by the
/// weather-data provider.
///
/// Values are carried through without validation: the scorer accepts
/// negative or absurd measurements and produces clamped scores, so a bad
/// sensor reading degrades the assessment rather than failing it. Any
/// fetch or sensor failure is the provider's concern, upstream of this type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Significant wave height
    pub wave_height: Meters,

    /// Sustained wind speed
    pub wind_speed: Knots,

    /// Sea surface temperature
    pub water_temperature: Celsius,

    /// Unix timestamp in seconds. Informational only; scoring never reads
    /// it, the assessment just carries it through for the caller.
    pub observed_at: i64,
}

impl WeatherObservation {
    /// Create a new observation from raw measurements
    ///
    /// # Arguments
    /// * `wave_height` - Significant wave height in meters
    /// * `wind_speed` - Sustained wind speed in knots
    /// * `water_temperature` - Sea surface temperature in °C
    /// * `observed_at` - Unix timestamp in seconds
    #[must_use]
    pub fn new(wave_height: f32, wind_speed: f32, water_temperature: f32, observed_at: i64) -> Self {
        WeatherObservation {
            wave_height: Meters::new(wave_height),
            wind_speed: Knots::new(wind_speed),
            water_temperature: Celsius::new(water_temperature),
            observed_at,
        }
    }
}
