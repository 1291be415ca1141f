//! Whisper amplification: sliding-window trend extraction that boosts
//! sub-threshold drifts so weak early trends surface as predictions.

use crate::config::AnalysisConfig;
use crate::signal::trend_strength;
use crate::snapshot::InputStreamData;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Sub-windows whose mean |sample| is at or below this are treated as noise.
const NOISE_FLOOR: f64 = 0.05;

/// Boost applied to trend strengths below the sensitivity threshold.
const AMPLIFICATION_FACTOR: f64 = 2.5;

/// Amplified strength beyond ±this maps to a rising/falling direction.
const DIRECTION_THRESHOLD: f64 = 0.5;

/// Predicted trend direction for one sub-window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Rising,
    Falling,
    Stable,
}

/// One amplified trend prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPrediction {
    pub direction: TrendDirection,
    /// Amplified trend strength, signed
    pub magnitude: f64,
    /// `min(1, 2|magnitude|)`
    pub probability: f64,
    /// Prediction horizon, scaling with |magnitude|
    pub time_horizon_hours: f64,
}

/// Output of one whisper amplification run.
///
/// `confidence_scores` and `amplification_factors` are parallel to
/// `predictions`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WhisperResults {
    pub predictions: Vec<TrendPrediction>,
    pub confidence_scores: Vec<f64>,
    pub amplification_factors: Vec<f64>,
}

pub fn amplify(data: &InputStreamData, config: &AnalysisConfig) -> WhisperResults {
    let series = &data.primary_series;
    if series.len() < 2 {
        return WhisperResults::default();
    }

    // Nominal window is 2 hours of samples; clamp so short captures still
    // produce a single full-length window.
    let nominal = (config.whisper_window_secs * data.sample_rate) as usize;
    let window = nominal.clamp(2, series.len());
    let step = (window / 10).max(1);

    let mut results = WhisperResults::default();
    let mut start = 0;
    while start + window <= series.len() {
        let sub = &series[start..start + window];
        start += step;

        let mean_magnitude = sub.iter().map(|x| x.abs()).mean();
        if mean_magnitude <= NOISE_FLOOR {
            continue;
        }

        let raw = trend_strength(sub);
        let factor = if raw.abs() < config.sensitivity {
            AMPLIFICATION_FACTOR
        } else {
            1.0
        };
        let amplified = raw * factor;

        let direction = if amplified > DIRECTION_THRESHOLD {
            TrendDirection::Rising
        } else if amplified < -DIRECTION_THRESHOLD {
            TrendDirection::Falling
        } else {
            TrendDirection::Stable
        };

        results.predictions.push(TrendPrediction {
            direction,
            magnitude: amplified,
            probability: (amplified.abs() * 2.0).min(1.0),
            time_horizon_hours: amplified.abs() * 24.0,
        });
        // Amplified windows are less trustworthy than ones that stood on
        // their own; the guard keeps the ratio defined for flat windows.
        results.confidence_scores.push((1.0 / factor).max(0.1));
        results.amplification_factors.push(factor);
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Config whose whisper window resolves to `window` samples at 1 Hz.
    fn config_with_window(window: usize) -> AnalysisConfig {
        AnalysisConfig::default().with_whisper_window_secs(window as f64)
    }

    fn snapshot(series: Vec<f64>) -> InputStreamData {
        InputStreamData::new("whisper", series, 1.0)
    }

    #[test]
    fn test_empty_series_no_predictions() {
        let results = amplify(&snapshot(vec![]), &AnalysisConfig::default());
        assert!(results.predictions.is_empty());
    }

    #[test]
    fn test_below_noise_floor_skipped() {
        let series = vec![0.01; 100];
        let results = amplify(&snapshot(series), &config_with_window(20));
        assert!(results.predictions.is_empty());
    }

    #[test]
    fn test_strong_rising_trend_detected() {
        // Monotone ramp well above the noise floor; raw strength 1.0 is
        // above the default sensitivity, so no amplification applies.
        let series: Vec<f64> = (0..100).map(|i| 0.2 + i as f64 * 0.01).collect();
        let results = amplify(&snapshot(series), &config_with_window(50));

        assert!(!results.predictions.is_empty());
        for prediction in &results.predictions {
            assert_eq!(prediction.direction, TrendDirection::Rising);
            assert!((prediction.probability - 1.0).abs() < 1e-9);
        }
        assert!(results.amplification_factors.iter().all(|&f| f == 1.0));
        assert!(results.confidence_scores.iter().all(|&c| c == 1.0));
    }

    #[test]
    fn test_weak_trend_is_amplified() {
        // Gentle drift on a noisy-looking carrier: raw strength stays below
        // the sensitivity threshold and gets the 2.5x boost.
        let series: Vec<f64> = (0..200)
            .map(|i| 0.2 + 0.1 * ((i % 5) as f64 - 2.0) + i as f64 * 0.0004)
            .collect();
        let config = config_with_window(100).with_sensitivity(0.3);
        let results = amplify(&snapshot(series), &config);

        assert!(!results.predictions.is_empty());
        assert!(results
            .amplification_factors
            .iter()
            .any(|&f| (f - 2.5).abs() < 1e-9));
        // Amplified windows carry the reduced confidence 1/2.5.
        assert!(results
            .confidence_scores
            .iter()
            .any(|&c| (c - 0.4).abs() < 1e-9));
    }

    #[test]
    fn test_falling_trend_direction() {
        let series: Vec<f64> = (0..100).map(|i| 1.2 - i as f64 * 0.01).collect();
        let results = amplify(&snapshot(series), &config_with_window(50));
        assert!(!results.predictions.is_empty());
        assert!(results
            .predictions
            .iter()
            .all(|p| p.direction == TrendDirection::Falling));
    }

    #[test]
    fn test_flat_window_confidence_floor() {
        // Constant series above the noise floor: raw strength 0, amplified 0,
        // direction stable, confidence defined via the guard.
        let series = vec![0.2; 60];
        let results = amplify(&snapshot(series), &config_with_window(30));
        assert!(!results.predictions.is_empty());
        for (prediction, &confidence) in results
            .predictions
            .iter()
            .zip(results.confidence_scores.iter())
        {
            assert_eq!(prediction.direction, TrendDirection::Stable);
            assert!(confidence >= 0.1);
        }
    }

    #[test]
    fn test_parallel_outputs_same_length() {
        let series: Vec<f64> = (0..300).map(|i| 0.3 + (i as f64 * 0.2).sin() * 0.1).collect();
        let results = amplify(&snapshot(series), &config_with_window(60));
        assert_eq!(results.predictions.len(), results.confidence_scores.len());
        assert_eq!(
            results.predictions.len(),
            results.amplification_factors.len()
        );
    }
}
