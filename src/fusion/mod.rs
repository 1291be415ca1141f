//! Results processor: fuses the four analysis outputs into a unified result
//! set, then flags anomalies over the synthesized signals.
//!
//! Fusion is a pure transformation of [`AnalysisBundle`] values; nothing is
//! recomputed from raw data.

mod anomaly;
mod artifacts;

pub use anomaly::{detect_anomalies, Anomaly, AnomalyKind, Severity};
pub use artifacts::{
    CausalityCandidate, FutureCorrelation, ResonanceSignal, SignalKind, TrendNode,
};

use crate::analyzer::AnalysisBundle;
use crate::cluster::describe_vector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Harmonic amplitude above which a spectral peak becomes a signal.
const SPECTRAL_SIGNAL_THRESHOLD: f64 = 0.7;

/// Prediction probability above which a whisper trend becomes a signal.
const WHISPER_SIGNAL_THRESHOLD: f64 = 0.8;

/// The unified result set produced by one fusion pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessedResults {
    pub trend_nodes: Vec<TrendNode>,
    pub future_correlations: Vec<FutureCorrelation>,
    pub causality_candidates: Vec<CausalityCandidate>,
    pub resonance_signals: Vec<ResonanceSignal>,
}

/// Fuses analysis bundles into processed results.
///
/// Holds an RNG for the phase and horizon draws the fusion stage performs;
/// seed it for reproducible output.
#[derive(Debug)]
pub struct ResultsProcessor {
    rng: StdRng,
}

impl ResultsProcessor {
    /// Create a processor with entropy-seeded draws.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a processor with a fixed seed for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fuse one analysis bundle into a unified result set.
    pub fn process(&mut self, bundle: &AnalysisBundle) -> ProcessedResults {
        let trend_nodes = self.fuse_trend_nodes(bundle);
        let future_correlations = self.fuse_future_correlations(bundle);
        let causality_candidates = fuse_causality_candidates(bundle);
        let resonance_signals = synthesize_signals(bundle);

        debug!(
            trend_nodes = trend_nodes.len(),
            future_correlations = future_correlations.len(),
            causality_candidates = causality_candidates.len(),
            resonance_signals = resonance_signals.len(),
            "fusion pass complete"
        );

        ProcessedResults {
            trend_nodes,
            future_correlations,
            causality_candidates,
            resonance_signals,
        }
    }

    /// One trend node per dominant frequency.
    ///
    /// Confidence grows with frequency; phase is a fresh random draw rather
    /// than the transform's phase component (preserved as observed).
    fn fuse_trend_nodes(&mut self, bundle: &AnalysisBundle) -> Vec<TrendNode> {
        bundle
            .spectral
            .dominant_frequencies
            .iter()
            .enumerate()
            .map(|(i, &frequency)| TrendNode {
                frequency,
                amplitude: bundle
                    .spectral
                    .harmonic_amplitudes
                    .get(i)
                    .copied()
                    .unwrap_or(0.0),
                phase: self.rng.gen_range(0.0..2.0 * PI),
                confidence: (frequency * 0.8 + 0.2).min(1.0),
            })
            .collect()
    }

    /// One future correlation per whisper trend prediction.
    fn fuse_future_correlations(&mut self, bundle: &AnalysisBundle) -> Vec<FutureCorrelation> {
        bundle
            .whisper
            .predictions
            .iter()
            .enumerate()
            .map(|(i, prediction)| FutureCorrelation {
                source_signal: format!("whisper_window_{}", i + 1),
                target_signal: "primary_stream".to_string(),
                strength: bundle
                    .whisper
                    .confidence_scores
                    .get(i)
                    .copied()
                    .unwrap_or(0.0),
                // 1 hour to 3 days
                time_horizon_hours: self.rng.gen_range(1.0..=72.0),
                probability: prediction.probability,
            })
            .collect()
    }
}

impl Default for ResultsProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Causality candidates from clusters and from correlation indicators.
fn fuse_causality_candidates(bundle: &AnalysisBundle) -> Vec<CausalityCandidate> {
    let mut candidates = Vec::new();

    for (i, cluster) in bundle.clusters.clusters.iter().enumerate() {
        candidates.push(CausalityCandidate {
            cause: describe_vector(&cluster.centroid),
            effect: format!("emergent_pattern_{}", i + 1),
            strength: bundle.clusters.stability.get(i).copied().unwrap_or(0.0),
            confidence: bundle
                .clusters
                .characteristics
                .get(i)
                .map(|c| c.confidence)
                .unwrap_or(0.0),
            evidence: cluster.members.iter().map(describe_vector).collect(),
        });
    }

    for indicator in &bundle.correlation.causality_indicators {
        candidates.push(CausalityCandidate {
            cause: indicator.cause.clone(),
            effect: indicator.effect.clone(),
            strength: indicator.strength,
            confidence: indicator.strength,
            evidence: vec![format!(
                "lagged correlation strength {:.3} from {} to {}",
                indicator.strength, indicator.cause, indicator.effect
            )],
        });
    }

    candidates
}

/// Synthesize resonance signals from strong spectral peaks and
/// high-probability whisper predictions.
fn synthesize_signals(bundle: &AnalysisBundle) -> Vec<ResonanceSignal> {
    let mut signals = Vec::new();

    for (i, &frequency) in bundle.spectral.dominant_frequencies.iter().enumerate() {
        let amplitude = bundle
            .spectral
            .harmonic_amplitudes
            .get(i)
            .copied()
            .unwrap_or(0.0);
        if amplitude > SPECTRAL_SIGNAL_THRESHOLD {
            let mut signal =
                ResonanceSignal::new(SignalKind::Spectral, amplitude, frequency, "spectral_analysis");
            signal.metadata.insert(
                "spectral_centroid".to_string(),
                format!("{:.4}", bundle.spectral.spectral_centroid),
            );
            signals.push(signal);
        }
    }

    for prediction in &bundle.whisper.predictions {
        if prediction.probability > WHISPER_SIGNAL_THRESHOLD {
            // No frequency-domain meaning for whisper trends.
            let mut signal = ResonanceSignal::new(
                SignalKind::Whisper,
                prediction.probability,
                0.0,
                "whisper_amplification",
            );
            signal.metadata.insert(
                "magnitude".to_string(),
                format!("{:.4}", prediction.magnitude),
            );
            signals.push(signal);
        }
    }

    signals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::{
        ClusterResults, CorrelationResults, SpectralResults, TrendDirection, TrendPrediction,
        WhisperResults,
    };

    fn empty_bundle() -> AnalysisBundle {
        AnalysisBundle {
            spectral: SpectralResults::default(),
            whisper: WhisperResults::default(),
            clusters: ClusterResults::default(),
            correlation: CorrelationResults::default(),
        }
    }

    fn prediction(probability: f64) -> TrendPrediction {
        TrendPrediction {
            direction: TrendDirection::Rising,
            magnitude: probability / 2.0,
            probability,
            time_horizon_hours: 12.0,
        }
    }

    #[test]
    fn test_empty_bundle_empty_results() {
        let mut processor = ResultsProcessor::with_seed(1);
        let results = processor.process(&empty_bundle());
        assert!(results.trend_nodes.is_empty());
        assert!(results.future_correlations.is_empty());
        assert!(results.causality_candidates.is_empty());
        assert!(results.resonance_signals.is_empty());
    }

    #[test]
    fn test_trend_node_confidence_formula() {
        let mut bundle = empty_bundle();
        bundle.spectral.dominant_frequencies = vec![0.5, 10.0];
        bundle.spectral.harmonic_amplitudes = vec![0.3, 0.9];

        let mut processor = ResultsProcessor::with_seed(2);
        let results = processor.process(&bundle);

        assert_eq!(results.trend_nodes.len(), 2);
        // min(1, 0.5*0.8 + 0.2) = 0.6; min(1, 10*0.8 + 0.2) = 1.0
        assert!((results.trend_nodes[0].confidence - 0.6).abs() < 1e-9);
        assert!((results.trend_nodes[1].confidence - 1.0).abs() < 1e-9);
        for node in &results.trend_nodes {
            assert!(node.phase >= 0.0 && node.phase < 2.0 * PI);
        }
    }

    #[test]
    fn test_future_correlation_copies_prediction_fields() {
        let mut bundle = empty_bundle();
        bundle.whisper.predictions = vec![prediction(0.6)];
        bundle.whisper.confidence_scores = vec![0.4];
        bundle.whisper.amplification_factors = vec![2.5];

        let mut processor = ResultsProcessor::with_seed(3);
        let results = processor.process(&bundle);

        assert_eq!(results.future_correlations.len(), 1);
        let fc = &results.future_correlations[0];
        assert!((fc.strength - 0.4).abs() < 1e-9);
        assert!((fc.probability - 0.6).abs() < 1e-9);
        assert!(fc.time_horizon_hours >= 1.0 && fc.time_horizon_hours <= 72.0);
    }

    #[test]
    fn test_spectral_signal_threshold() {
        let mut bundle = empty_bundle();
        bundle.spectral.dominant_frequencies = vec![10.0, 20.0];
        bundle.spectral.harmonic_amplitudes = vec![0.9, 0.5];

        let mut processor = ResultsProcessor::with_seed(4);
        let results = processor.process(&bundle);

        assert_eq!(results.resonance_signals.len(), 1);
        let signal = &results.resonance_signals[0];
        assert_eq!(signal.kind, SignalKind::Spectral);
        assert!((signal.frequency - 10.0).abs() < 1e-9);
        assert!(signal.strength > 0.7);
    }

    #[test]
    fn test_whisper_signal_has_zero_frequency() {
        let mut bundle = empty_bundle();
        bundle.whisper.predictions = vec![prediction(0.9), prediction(0.7)];
        bundle.whisper.confidence_scores = vec![1.0, 1.0];
        bundle.whisper.amplification_factors = vec![1.0, 1.0];

        let mut processor = ResultsProcessor::with_seed(5);
        let results = processor.process(&bundle);

        let whispers: Vec<_> = results
            .resonance_signals
            .iter()
            .filter(|s| s.kind == SignalKind::Whisper)
            .collect();
        assert_eq!(whispers.len(), 1);
        assert_eq!(whispers[0].frequency, 0.0);
    }

    #[test]
    fn test_indicator_becomes_causality_candidate() {
        let mut bundle = empty_bundle();
        bundle.correlation.causality_indicators =
            vec![crate::analyzer::CausalityIndicator {
                cause: "stream_1".to_string(),
                effect: "stream_2".to_string(),
                strength: 0.85,
            }];

        let mut processor = ResultsProcessor::with_seed(6);
        let results = processor.process(&bundle);

        assert_eq!(results.causality_candidates.len(), 1);
        let candidate = &results.causality_candidates[0];
        assert_eq!(candidate.cause, "stream_1");
        assert_eq!(candidate.effect, "stream_2");
        assert!((candidate.strength - 0.85).abs() < 1e-9);
        assert_eq!(candidate.evidence.len(), 1);
        assert!(candidate.evidence[0].contains("lagged correlation"));
    }

    #[test]
    fn test_seeded_processor_is_reproducible() {
        let mut bundle = empty_bundle();
        bundle.spectral.dominant_frequencies = vec![5.0];
        bundle.spectral.harmonic_amplitudes = vec![0.8];

        let a = ResultsProcessor::with_seed(7).process(&bundle);
        let b = ResultsProcessor::with_seed(7).process(&bundle);
        assert_eq!(a.trend_nodes[0].phase, b.trend_nodes[0].phase);
    }
}
