//! Weak-signal clustering: samples in the pre-noise-floor band become
//! feature vectors and are grouped by the clustering engine.

use crate::cluster::{
    characteristics, k_means, select_k, stability, Cluster, ClusterCharacteristics,
    FeatureVector,
};
use crate::config::AnalysisConfig;
use crate::snapshot::InputStreamData;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Samples with |value| at or below this are plain noise.
const WEAK_BAND_LOW: f64 = 0.05;

/// Samples with |value| at or above this are established signal, not weak.
const WEAK_BAND_HIGH: f64 = 0.3;

/// Upper bound on the model-order search.
const MAX_CLUSTER_COUNT: usize = 20;

/// Output of one weak-signal clustering run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClusterResults {
    pub clusters: Vec<Cluster>,
    /// Stability score per cluster (aligned with `clusters`)
    pub stability: Vec<f64>,
    /// Descriptive metrics per cluster (aligned with `clusters`)
    pub characteristics: Vec<ClusterCharacteristics>,
}

pub fn cluster<R: Rng>(
    data: &InputStreamData,
    config: &AnalysisConfig,
    rng: &mut R,
) -> ClusterResults {
    let vectors = extract_weak_signals(&data.primary_series);
    if vectors.len() < config.min_cluster_size {
        return ClusterResults::default();
    }

    let k = select_k(&vectors, MAX_CLUSTER_COUNT, rng);
    let clusters = k_means(&vectors, k, rng);
    let stability = stability(&clusters);
    let characteristics = characteristics(&clusters);

    ClusterResults {
        clusters,
        stability,
        characteristics,
    }
}

/// Turn weak samples into feature vectors.
///
/// A sample qualifies when its magnitude lies strictly between the noise
/// floor and the established-signal bound.
fn extract_weak_signals(series: &[f64]) -> Vec<FeatureVector> {
    let n = series.len().max(1) as f64;
    series
        .iter()
        .enumerate()
        .filter(|(_, &x)| x.abs() > WEAK_BAND_LOW && x.abs() < WEAK_BAND_HIGH)
        .map(|(i, &x)| FeatureVector {
            amplitude: x.abs(),
            frequency: i as f64 / n,
            phase: x.atan2(1.0),
            duration: 1.0,
            trend: x.signum(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run(series: Vec<f64>, config: &AnalysisConfig) -> ClusterResults {
        let snapshot = InputStreamData::new("weak", series, 1.0);
        cluster(&snapshot, config, &mut StdRng::seed_from_u64(17))
    }

    #[test]
    fn test_no_values_in_band_empty_results() {
        // Everything either below the noise floor or established signal.
        let series = vec![0.01, 0.04, 0.5, 0.9, -0.02, -0.8];
        let results = run(series, &AnalysisConfig::default());
        assert!(results.clusters.is_empty());
        assert!(results.stability.is_empty());
        assert!(results.characteristics.is_empty());
    }

    #[test]
    fn test_band_bounds_are_strict() {
        // Exactly 0.05 and exactly 0.3 do not qualify.
        let vectors = extract_weak_signals(&[0.05, 0.3, -0.05, -0.3]);
        assert!(vectors.is_empty());
    }

    #[test]
    fn test_fewer_than_minimum_returns_empty() {
        let series = vec![0.1, 0.2, 0.15];
        let config = AnalysisConfig::default().with_min_cluster_size(5);
        let results = run(series, &config);
        assert!(results.clusters.is_empty());
    }

    #[test]
    fn test_feature_vector_fields() {
        let vectors = extract_weak_signals(&[0.0, -0.2, 0.1, 0.0]);
        assert_eq!(vectors.len(), 2);

        let negative = &vectors[0];
        assert!((negative.amplitude - 0.2).abs() < 1e-9);
        assert!((negative.frequency - 0.25).abs() < 1e-9);
        assert!((negative.phase - (-0.2f64).atan2(1.0)).abs() < 1e-9);
        assert_eq!(negative.duration, 1.0);
        assert_eq!(negative.trend, -1.0);

        let positive = &vectors[1];
        assert_eq!(positive.trend, 1.0);
    }

    #[test]
    fn test_clustering_reports_aligned_metrics() {
        let series: Vec<f64> = (0..60)
            .map(|i| if i % 2 == 0 { 0.1 } else { -0.25 })
            .collect();
        let results = run(series, &AnalysisConfig::default());

        assert!(!results.clusters.is_empty());
        assert_eq!(results.clusters.len(), results.stability.len());
        assert_eq!(results.clusters.len(), results.characteristics.len());
        let total_members: usize = results.clusters.iter().map(|c| c.members.len()).sum();
        assert_eq!(total_members, 60);
    }
}
