//! Post-hoc cluster quality scoring.

use crate::cluster::{Cluster, FeatureVector};
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Per-cluster descriptive metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterCharacteristics {
    /// Member count
    pub size: usize,
    /// Mean member-to-centroid distance
    pub cohesion: f64,
    /// `size / (cohesion + 1)`
    pub density: f64,
    /// `1 / (cohesion + 1)`, a simplified proxy rather than an
    /// inter-cluster measure
    pub separation: f64,
    /// `min(1, size / 10)`
    pub confidence: f64,
}

/// Stability score per cluster: inverse coefficient of variation of
/// member-to-centroid distances.
///
/// A cluster with at most one member, or with zero distance spread, scores 0.
/// Higher values indicate tighter, more consistent clusters.
pub fn stability(clusters: &[Cluster]) -> Vec<f64> {
    clusters
        .iter()
        .map(|cluster| {
            if cluster.members.len() <= 1 {
                return 0.0;
            }
            let distances = member_distances(cluster);
            let mean = (&distances).mean();
            let std_dev = (&distances).std_dev();
            if std_dev > 0.0 {
                mean / std_dev
            } else {
                0.0
            }
        })
        .collect()
}

/// Descriptive characteristics per cluster.
pub fn characteristics(clusters: &[Cluster]) -> Vec<ClusterCharacteristics> {
    clusters
        .iter()
        .map(|cluster| {
            let size = cluster.members.len();
            let cohesion = if size == 0 {
                0.0
            } else {
                member_distances(cluster).iter().sum::<f64>() / size as f64
            };
            ClusterCharacteristics {
                size,
                cohesion,
                density: size as f64 / (cohesion + 1.0),
                separation: 1.0 / (cohesion + 1.0),
                confidence: (size as f64 / 10.0).min(1.0),
            }
        })
        .collect()
}

fn member_distances(cluster: &Cluster) -> Vec<f64> {
    cluster
        .members
        .iter()
        .map(|m| m.distance(&cluster.centroid))
        .collect()
}

/// Short human-readable description of a centroid, used as causality
/// evidence downstream.
pub fn describe_vector(v: &FeatureVector) -> String {
    format!(
        "amplitude={:.3} frequency={:.3} phase={:.3} trend={:.2}",
        v.amplitude, v.frequency, v.phase, v.trend
    )
}
