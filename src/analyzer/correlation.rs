//! Cross-stream correlation and causality analysis.
//!
//! The primary series is partitioned into equal contiguous chunks that act
//! as named streams; pairwise and time-lagged correlations over those chunks
//! yield causality candidates.

use crate::config::AnalysisConfig;
use crate::signal::{lagged_correlation, pearson_correlation};
use crate::snapshot::InputStreamData;
use serde::{Deserialize, Serialize};

/// Number of contiguous chunks the primary series is split into.
const STREAM_COUNT: usize = 5;

/// Largest lag scanned for notable correlations and causality strength.
const MAX_LAG: usize = 24;

/// Causality strength above this records an indicator.
const CAUSALITY_THRESHOLD: f64 = 0.7;

/// Matrix entries above this receive feedback weighting.
const FEEDBACK_TRIGGER: f64 = 0.5;

/// Feedback weight applied as `(1 + weight)`.
const FEEDBACK_WEIGHT: f64 = 0.8;

/// One statistically notable time-lagged correlation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaggedCorrelation {
    pub source: String,
    pub target: String,
    pub lag: usize,
    pub correlation: f64,
}

/// A directional cause→effect pair with a strength score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalityIndicator {
    pub cause: String,
    pub effect: String,
    pub strength: f64,
}

/// Output of one correlation analysis run.
///
/// The matrix is feedback-weighted: entries above 0.5 are multiplied by 1.8
/// and may exceed the usual [-1, 1] bound of a correlation coefficient. This
/// mirrors the engine's observed behavior and is deliberately not clamped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrelationResults {
    /// Names of the derived streams, in matrix order
    pub stream_names: Vec<String>,
    /// Feedback-weighted pairwise correlation matrix
    pub matrix: Vec<Vec<f64>>,
    pub lagged_correlations: Vec<LaggedCorrelation>,
    pub causality_indicators: Vec<CausalityIndicator>,
}

pub fn analyze(data: &InputStreamData, config: &AnalysisConfig) -> CorrelationResults {
    let series = &data.primary_series;
    let chunk_len = series.len() / STREAM_COUNT;
    if chunk_len < 2 {
        return CorrelationResults::default();
    }

    let chunks: Vec<&[f64]> = (0..STREAM_COUNT)
        .map(|i| &series[i * chunk_len..(i + 1) * chunk_len])
        .collect();
    let stream_names: Vec<String> = (1..=STREAM_COUNT).map(|i| format!("stream_{i}")).collect();

    let mut matrix = pairwise_matrix(&chunks);

    let mut lagged_correlations = Vec::new();
    let mut causality_indicators = Vec::new();
    for (i, source) in stream_names.iter().enumerate() {
        for (j, target) in stream_names.iter().enumerate() {
            for lag in 1..=MAX_LAG {
                let correlation = lagged_correlation(chunks[i], chunks[j], lag);
                if correlation.abs() > config.significance_level {
                    lagged_correlations.push(LaggedCorrelation {
                        source: source.clone(),
                        target: target.clone(),
                        lag,
                        correlation,
                    });
                }
            }

            let strength = causality_strength(chunks[i], chunks[j]);
            if strength > CAUSALITY_THRESHOLD {
                causality_indicators.push(CausalityIndicator {
                    cause: source.clone(),
                    effect: target.clone(),
                    strength,
                });
            }
        }
    }

    // Feedback weighting: strong entries are boosted and intentionally not
    // clamped back into [-1, 1].
    for row in matrix.iter_mut() {
        for entry in row.iter_mut() {
            if *entry > FEEDBACK_TRIGGER {
                *entry *= 1.0 + FEEDBACK_WEIGHT;
            }
        }
    }

    CorrelationResults {
        stream_names,
        matrix,
        lagged_correlations,
        causality_indicators,
    }
}

/// Raw (un-weighted) pairwise Pearson matrix over the chunks.
///
/// Symmetric by construction: both orderings apply the same formula to the
/// same pair, and the diagonal is the self-correlation.
pub(crate) fn pairwise_matrix(chunks: &[&[f64]]) -> Vec<Vec<f64>> {
    chunks
        .iter()
        .map(|a| chunks.iter().map(|b| pearson_correlation(a, b)).collect())
        .collect()
}

/// Mean of `|laggedCorrelation(lag)| / lag` over a lag range capped at a
/// quarter of the chunk length.
fn causality_strength(cause: &[f64], effect: &[f64]) -> f64 {
    let max_lag = MAX_LAG.min(cause.len().min(effect.len()) / 4);
    if max_lag == 0 {
        return 0.0;
    }
    (1..=max_lag)
        .map(|lag| lagged_correlation(cause, effect, lag).abs() / lag as f64)
        .sum::<f64>()
        / max_lag as f64
}
