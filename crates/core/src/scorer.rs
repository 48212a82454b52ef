//! Fishing-suitability scoring
//!
//! Converts one [`WeatherObservation`] into one [`SuitabilityAssessment`]
//! using additive, threshold-based scoring: a fixed base score plus three
//! independent band adjustments (wave height, wind speed, water
//! temperature), clamped to 0-100 and mapped to a discrete label.
//!
//! The bands are deliberately simple and explainable. The assessment is a
//! safety-adjacent recommendation shown to a boat operator, so every
//! contributing factor and its magnitude must be traceable, and band
//! boundaries must be testable exhaustively.
//!
//! # Scoring
//!
//! Starting from a base of 70, each measurement applies at most one
//! adjustment (first matching band wins):
//!
//! - **Waves**: < 0.5 m → +20 (calm seas favor fishing); > 2.5 m → −50 and a
//!   dangerous-waves warning; > 1.5 m → −20
//! - **Wind**: < 10 kn → +10; > 25 kn → −40 and a strong-wind warning if no
//!   warning was raised yet; > 15 kn → −10
//! - **Water temperature**: 18-24 °C inclusive → +10 and warm-water species
//!   suggestions; < 15 °C → cold-water species; > 25 °C → tropical species
//!
//! At most one safety warning is surfaced, waves before wind. The scorer is
//! pure and total: it never fails, never validates, and identical input
//! always yields identical output.
//!
//! # Example
//!
//! ```
//! use fishcast_core::{assess, SuitabilityLabel, WeatherObservation};
//!
//! // Calm seas, light wind, ideal water temperature
//! let obs = WeatherObservation::new(0.3, 8.0, 20.0, 0);
//! let report = assess(&obs);
//! assert_eq!(report.score, 100);
//! assert_eq!(report.label, SuitabilityLabel::Excellent);
//! assert!(report.safety_warning.is_none());
//! ```

use crate::core_types::WeatherObservation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use tracing::debug;

/// Score band constants mapping a clamped 0-100 suitability score to a
/// discrete label.
///
/// These constants define the boundaries between the five suitability labels
/// and should be used consistently for validation, testing, and
/// categorization. Note: Rust `Range` types use **inclusive lower bound and
/// exclusive upper bound** [a, b).
pub mod score_bands {
    use std::ops::{Range, RangeInclusive};

    /// "Hazardous" band `[0, 20)` - do not depart
    pub const HAZARDOUS: Range<u8> = 0..20;

    /// "Poor" band `[20, 40)`
    pub const POOR: Range<u8> = 20..40;

    /// "Fair" band `[40, 70)`
    pub const FAIR: Range<u8> = 40..70;

    /// "Good" band `[70, 90)`
    pub const GOOD: Range<u8> = 70..90;

    /// "Excellent" band `[90, 100]` (score is clamped, so 100 is the top)
    pub const EXCELLENT: RangeInclusive<u8> = 90..=100;
}

/// Base score before any adjustment is applied
const BASE_SCORE: i32 = 70;

/// Wave height below which seas count as calm (m)
const CALM_WAVE_M: f32 = 0.5;

/// Wave height above which a trip is dangerous (m, strictly greater)
const DANGEROUS_WAVE_M: f32 = 2.5;

/// Wave height above which seas count as rough (m, strictly greater)
const ROUGH_WAVE_M: f32 = 1.5;

/// Wind speed below which wind counts as light (kn)
const LIGHT_WIND_KN: f32 = 10.0;

/// Wind speed above which maneuvers are dangerous (kn, strictly greater)
const STRONG_WIND_KN: f32 = 25.0;

/// Wind speed above which wind counts as fresh (kn, strictly greater)
const FRESH_WIND_KN: f32 = 15.0;

/// Ideal water temperature band (°C, both bounds inclusive)
const IDEAL_TEMP_C: RangeInclusive<f32> = 18.0..=24.0;

/// Water temperature below which cold-water species dominate (°C)
const COLD_TEMP_C: f32 = 15.0;

/// Water temperature above which tropical species dominate (°C)
const WARM_TEMP_C: f32 = 25.0;

/// Discrete suitability rating derived from the clamped score.
///
/// A total function of the score: every integer in [0, 100] maps to exactly
/// one label via [`score_bands`], with no overlaps or gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuitabilityLabel {
    /// Score 90-100: ideal conditions
    Excellent,
    /// Score 70-89: favorable conditions
    Good,
    /// Score 40-69: usable conditions
    Fair,
    /// Score 20-39: difficult conditions
    Poor,
    /// Score 0-19: do not depart
    Hazardous,
}

impl SuitabilityLabel {
    /// Map a clamped 0-100 score to its label, highest band first
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            s if score_bands::EXCELLENT.contains(&s) => SuitabilityLabel::Excellent,
            s if score_bands::GOOD.contains(&s) => SuitabilityLabel::Good,
            s if score_bands::FAIR.contains(&s) => SuitabilityLabel::Fair,
            s if score_bands::POOR.contains(&s) => SuitabilityLabel::Poor,
            _ => SuitabilityLabel::Hazardous,
        }
    }

    /// Lowercase display name, as shown in the dashboard badge
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            SuitabilityLabel::Excellent => "excellent",
            SuitabilityLabel::Good => "good",
            SuitabilityLabel::Fair => "fair",
            SuitabilityLabel::Poor => "poor",
            SuitabilityLabel::Hazardous => "hazardous",
        }
    }

    /// Fixed recommendation template for this label
    #[must_use]
    pub fn recommendation(self) -> &'static str {
        match self {
            SuitabilityLabel::Excellent => "ideal conditions, plan a full day on the water",
            SuitabilityLabel::Good => "favorable conditions for most fishing activities",
            SuitabilityLabel::Fair => "usable conditions, stay alert for changes",
            SuitabilityLabel::Poor => "difficult conditions, short trips close to port only",
            SuitabilityLabel::Hazardous => "do not depart, wait for conditions to improve",
        }
    }
}

impl fmt::Display for SuitabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Fish species suggested for the current water temperature band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Tuna,
    Sardine,
    JackMackerel,
    Hake,
    Cod,
    MahiMahi,
    Marlin,
}

impl Species {
    /// Display name matching the dashboard strings
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Species::Tuna => "tuna",
            Species::Sardine => "sardine",
            Species::JackMackerel => "jack mackerel",
            Species::Hake => "hake",
            Species::Cod => "cod",
            Species::MahiMahi => "mahi-mahi",
            Species::Marlin => "marlin",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Safety warning raised when a measured value exceeds a hazard threshold.
///
/// Both hazards can hold simultaneously; only the first detected one is
/// surfaced, and waves are checked before wind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SafetyWarning {
    /// Wave height above 2.5 m
    DangerousWaves,
    /// Wind speed above 25 kn
    StrongWind,
}

impl SafetyWarning {
    /// Operator-facing warning message
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            SafetyWarning::DangerousWaves => "dangerous waves: return to port",
            SafetyWarning::StrongWind => "strong wind: caution during maneuvers",
        }
    }
}

impl fmt::Display for SafetyWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.message())
    }
}

/// The result of assessing one weather observation.
///
/// Built fresh on every call and never mutated or cached by the scorer; any
/// caching is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitabilityAssessment {
    /// Suitability score, always an integer in [0, 100]
    pub score: u8,

    /// Discrete rating derived from the score via [`score_bands`]
    pub label: SuitabilityLabel,

    /// One-line condition summary templated from the label
    pub summary: String,

    /// Operator recommendation templated from the label
    pub recommendation: String,

    /// Species suggested for the water temperature band; may be empty
    pub suggested_species: Vec<Species>,

    /// Present if and only if a hazard condition triggered; at most one
    pub safety_warning: Option<SafetyWarning>,

    /// Timestamp carried through from the observation
    pub observed_at: i64,
}

/// Assess one marine weather observation.
///
/// Pure and total: no validation, no side effects, no failure modes.
/// Identical input always yields identical output.
#[must_use]
pub fn assess(observation: &WeatherObservation) -> SuitabilityAssessment {
    let mut score = BASE_SCORE;
    let mut safety_warning = None;

    // Wave-height band: first match wins, dangerous waves outrank everything
    let wave = *observation.wave_height;
    if wave < CALM_WAVE_M {
        score += 20; // calm seas favor fishing
    } else if wave > DANGEROUS_WAVE_M {
        score -= 50;
        safety_warning = Some(SafetyWarning::DangerousWaves);
    } else if wave > ROUGH_WAVE_M {
        score -= 20;
    }

    // Wind-speed band: a wind warning only surfaces if waves raised none
    let wind = *observation.wind_speed;
    if wind < LIGHT_WIND_KN {
        score += 10;
    } else if wind > STRONG_WIND_KN {
        score -= 40;
        if safety_warning.is_none() {
            safety_warning = Some(SafetyWarning::StrongWind);
        }
    } else if wind > FRESH_WIND_KN {
        score -= 10;
    }

    // Temperature band and species suggestion. The 15-18 °C range
    // (exclusive on both sides) intentionally maps to nothing: the source
    // banding leaves it unmapped and that behavior is preserved as-is.
    let temp = *observation.water_temperature;
    let suggested_species: Vec<Species> = if IDEAL_TEMP_C.contains(&temp) {
        score += 10;
        vec![Species::Tuna, Species::Sardine, Species::JackMackerel]
    } else if temp < COLD_TEMP_C {
        vec![Species::Hake, Species::Cod]
    } else if temp > WARM_TEMP_C {
        vec![Species::MahiMahi, Species::Marlin]
    } else {
        Vec::new()
    };

    let score = score.clamp(0, 100) as u8;
    let label = SuitabilityLabel::from_score(score);
    debug!(score, label = label.name(), "assessed observation");

    SuitabilityAssessment {
        score,
        label,
        summary: format!("conditions are {label}"),
        recommendation: label.recommendation().to_string(),
        suggested_species,
        safety_warning,
        observed_at: observation.observed_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(wave: f32, wind: f32, temp: f32) -> WeatherObservation {
        WeatherObservation::new(wave, wind, temp, 0)
    }

    #[test]
    fn test_excellent_conditions_clamp_to_100() {
        // 70 + 20 (calm) + 10 (light wind) + 10 (ideal temp) = 110 → 100
        let report = assess(&obs(0.3, 8.0, 20.0));
        assert_eq!(report.score, 100);
        assert_eq!(report.label, SuitabilityLabel::Excellent);
        assert!(report.safety_warning.is_none());
        assert_eq!(
            report.suggested_species,
            vec![Species::Tuna, Species::Sardine, Species::JackMackerel]
        );
    }

    #[test]
    fn test_storm_conditions_clamp_to_zero() {
        // 70 - 50 (waves) - 40 (wind) + 10 (temp) = -10 → 0
        let report = assess(&obs(3.0, 30.0, 20.0));
        assert_eq!(report.score, 0);
        assert_eq!(report.label, SuitabilityLabel::Hazardous);
        // Waves are checked before wind, so the wave warning wins
        assert_eq!(report.safety_warning, Some(SafetyWarning::DangerousWaves));
    }

    #[test]
    fn test_good_conditions_middle_bands() {
        // 70 + 0 + 0 + 10 = 80
        let report = assess(&obs(1.0, 12.0, 20.0));
        assert_eq!(report.score, 80);
        assert_eq!(report.label, SuitabilityLabel::Good);
        assert!(report.safety_warning.is_none());
        assert_eq!(
            report.suggested_species,
            vec![Species::Tuna, Species::Sardine, Species::JackMackerel]
        );
    }

    #[test]
    fn test_fair_conditions_cold_water() {
        // 70 - 20 (rough) - 10 (fresh wind) + 0 = 40
        let report = assess(&obs(2.0, 18.0, 12.0));
        assert_eq!(report.score, 40);
        assert_eq!(report.label, SuitabilityLabel::Fair);
        assert!(report.safety_warning.is_none());
        assert_eq!(report.suggested_species, vec![Species::Hake, Species::Cod]);
    }

    #[test]
    fn test_boundaries_are_exclusive_for_wave_and_wind() {
        // Exactly 0.5 m is not calm, exactly 10 kn is not light, but 18 °C
        // is inside the inclusive ideal band: 70 + 0 + 0 + 10 = 80
        let report = assess(&obs(0.5, 10.0, 18.0));
        assert_eq!(report.score, 80);
        assert_eq!(report.label, SuitabilityLabel::Good);
        assert_eq!(
            report.suggested_species,
            vec![Species::Tuna, Species::Sardine, Species::JackMackerel]
        );
    }

    #[test]
    fn test_hazard_thresholds_are_strictly_greater() {
        // Exactly 2.5 m waves and 25 kn wind draw the moderate penalties,
        // not the hazard ones, and no warning surfaces
        let report = assess(&obs(2.5, 25.0, 20.0));
        assert_eq!(report.score, 50); // 70 - 20 - 10 + 10
        assert!(report.safety_warning.is_none());

        // Exactly 1.5 m and 15 kn draw no penalty at all
        let report = assess(&obs(1.5, 15.0, 20.0));
        assert_eq!(report.score, 80);
    }

    #[test]
    fn test_wind_warning_surfaces_without_wave_hazard() {
        let report = assess(&obs(1.0, 30.0, 20.0));
        assert_eq!(report.safety_warning, Some(SafetyWarning::StrongWind));
    }

    #[test]
    fn test_temperature_boundaries_inclusive() {
        // 24 °C is still ideal, 24.1 °C is not
        assert_eq!(assess(&obs(1.0, 12.0, 24.0)).score, 80);
        assert_eq!(assess(&obs(1.0, 12.0, 24.1)).score, 70);
    }

    #[test]
    fn test_temperate_gap_yields_no_species() {
        // The 15-18 °C exclusive gap maps to no bonus and no species
        let report = assess(&obs(1.0, 12.0, 16.5));
        assert_eq!(report.score, 70);
        assert!(report.suggested_species.is_empty());
    }

    #[test]
    fn test_warm_water_species() {
        let report = assess(&obs(1.0, 12.0, 27.0));
        assert_eq!(report.score, 70);
        assert_eq!(
            report.suggested_species,
            vec![Species::MahiMahi, Species::Marlin]
        );
    }

    #[test]
    fn test_score_clamped_for_absurd_inputs() {
        for (wave, wind, temp) in [
            (-5.0, -10.0, -40.0),
            (1000.0, 500.0, 90.0),
            (f32::MAX, f32::MAX, f32::MAX),
            (0.0, 0.0, 0.0),
        ] {
            let report = assess(&obs(wave, wind, temp));
            assert!(report.score <= 100, "score out of range for {wave}/{wind}/{temp}");
        }
    }

    #[test]
    fn test_labels_total_over_all_clamped_scores() {
        // Every integer score maps to exactly one band
        for score in 0..=100u8 {
            let in_bands = usize::from(score_bands::HAZARDOUS.contains(&score))
                + usize::from(score_bands::POOR.contains(&score))
                + usize::from(score_bands::FAIR.contains(&score))
                + usize::from(score_bands::GOOD.contains(&score))
                + usize::from(score_bands::EXCELLENT.contains(&score));
            assert_eq!(in_bands, 1, "score {score} not in exactly one band");
        }
        assert_eq!(SuitabilityLabel::from_score(19), SuitabilityLabel::Hazardous);
        assert_eq!(SuitabilityLabel::from_score(20), SuitabilityLabel::Poor);
        assert_eq!(SuitabilityLabel::from_score(39), SuitabilityLabel::Poor);
        assert_eq!(SuitabilityLabel::from_score(40), SuitabilityLabel::Fair);
        assert_eq!(SuitabilityLabel::from_score(69), SuitabilityLabel::Fair);
        assert_eq!(SuitabilityLabel::from_score(70), SuitabilityLabel::Good);
        assert_eq!(SuitabilityLabel::from_score(89), SuitabilityLabel::Good);
        assert_eq!(SuitabilityLabel::from_score(90), SuitabilityLabel::Excellent);
    }

    #[test]
    fn test_assessment_is_reproducible() {
        let observation = obs(1.8, 22.0, 14.0);
        assert_eq!(assess(&observation), assess(&observation));
    }

    #[test]
    fn test_summary_and_recommendation_templates() {
        let report = assess(&obs(0.3, 8.0, 20.0));
        assert_eq!(report.summary, "conditions are excellent");
        assert_eq!(
            report.recommendation,
            "ideal conditions, plan a full day on the water"
        );

        let report = assess(&obs(3.0, 30.0, 20.0));
        assert_eq!(report.summary, "conditions are hazardous");
        assert_eq!(
            report.recommendation,
            "do not depart, wait for conditions to improve"
        );
    }

    #[test]
    fn test_observed_at_passes_through() {
        let observation = WeatherObservation::new(1.0, 12.0, 20.0, 1_700_000_000);
        assert_eq!(assess(&observation).observed_at, 1_700_000_000);
    }
}
