//! Forecast-series assessment and aggregation
//!
//! The dashboard scores an hourly forecast series to surface the best
//! fishing windows. This module assesses a whole series (in parallel for
//! long series) and aggregates the results into a [`ForecastSummary`].

use crate::core_types::WeatherObservation;
use crate::scorer::{assess, SuitabilityAssessment, SuitabilityLabel};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use serde::Serialize;

/// Series length below which the rayon fan-out costs more than it saves
const PARALLEL_THRESHOLD: usize = 64;

/// Assess every observation in a series, preserving input order.
///
/// Each assessment is independent (the scorer is pure), so long series are
/// scored in parallel.
#[must_use]
pub fn assess_series(observations: &[WeatherObservation]) -> Vec<SuitabilityAssessment> {
    if observations.len() < PARALLEL_THRESHOLD {
        observations.iter().map(assess).collect()
    } else {
        observations.par_iter().map(assess).collect()
    }
}

/// Aggregate view over an assessed forecast series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSummary {
    /// How many hours of the series fall in each label band
    pub label_counts: FxHashMap<SuitabilityLabel, usize>,

    /// Index of the highest-scoring assessment; earliest wins ties.
    /// `None` for an empty series.
    pub best_index: Option<usize>,

    /// How many assessments carry a safety warning
    pub hazard_hours: usize,
}

impl ForecastSummary {
    /// Summarize an assessed series
    #[must_use]
    pub fn from_assessments(assessments: &[SuitabilityAssessment]) -> Self {
        let mut label_counts = FxHashMap::default();
        let mut best_index = None;
        let mut best_score = 0u8;
        let mut hazard_hours = 0;

        for (index, assessment) in assessments.iter().enumerate() {
            *label_counts.entry(assessment.label).or_insert(0) += 1;
            if assessment.safety_warning.is_some() {
                hazard_hours += 1;
            }
            // Strictly greater keeps the earliest of equal scores
            if best_index.is_none() || assessment.score > best_score {
                best_index = Some(index);
                best_score = assessment.score;
            }
        }

        ForecastSummary {
            label_counts,
            best_index,
            hazard_hours,
        }
    }

    /// Count of hours that fell in the given label band
    #[must_use]
    pub fn count_for(&self, label: SuitabilityLabel) -> usize {
        self.label_counts.get(&label).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> Vec<WeatherObservation> {
        vec![
            WeatherObservation::new(0.3, 8.0, 20.0, 0),    // 100 excellent
            WeatherObservation::new(1.0, 12.0, 20.0, 3600), // 80 good
            WeatherObservation::new(2.0, 18.0, 12.0, 7200), // 40 fair
            WeatherObservation::new(3.0, 30.0, 20.0, 10800), // 0 hazardous + warning
        ]
    }

    #[test]
    fn test_series_preserves_order() {
        let assessments = assess_series(&series());
        let scores: Vec<u8> = assessments.iter().map(|a| a.score).collect();
        assert_eq!(scores, vec![100, 80, 40, 0]);
        let stamps: Vec<i64> = assessments.iter().map(|a| a.observed_at).collect();
        assert_eq!(stamps, vec![0, 3600, 7200, 10800]);
    }

    #[test]
    fn test_long_series_matches_sequential_scoring() {
        // Above the parallel threshold the results must be identical
        let observations: Vec<WeatherObservation> = (0..200)
            .map(|h| WeatherObservation::new(0.2 + 0.02 * h as f32, 12.0, 19.0, i64::from(h) * 3600))
            .collect();
        let parallel = assess_series(&observations);
        let sequential: Vec<_> = observations.iter().map(assess).collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_summary_counts_and_best_index() {
        let summary = ForecastSummary::from_assessments(&assess_series(&series()));
        assert_eq!(summary.count_for(SuitabilityLabel::Excellent), 1);
        assert_eq!(summary.count_for(SuitabilityLabel::Good), 1);
        assert_eq!(summary.count_for(SuitabilityLabel::Fair), 1);
        assert_eq!(summary.count_for(SuitabilityLabel::Hazardous), 1);
        assert_eq!(summary.count_for(SuitabilityLabel::Poor), 0);
        assert_eq!(summary.best_index, Some(0));
        assert_eq!(summary.hazard_hours, 1);
    }

    #[test]
    fn test_best_index_prefers_earliest_tie() {
        let observations = vec![
            WeatherObservation::new(1.0, 12.0, 20.0, 0),    // 80
            WeatherObservation::new(1.0, 12.0, 20.0, 3600), // 80, same score
        ];
        let summary = ForecastSummary::from_assessments(&assess_series(&observations));
        assert_eq!(summary.best_index, Some(0));
    }

    #[test]
    fn test_empty_series() {
        let summary = ForecastSummary::from_assessments(&[]);
        assert!(summary.label_counts.is_empty());
        assert_eq!(summary.best_index, None);
        assert_eq!(summary.hazard_hours, 0);
    }
}
