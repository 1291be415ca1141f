//! k-means clustering and elbow-based model-order selection.
//!
//! Centroid initialization samples randomly from the input set, so the
//! caller supplies the RNG; tests fix the seed for determinism.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Maximum k-means refinement iterations per run.
pub const MAX_ITERATIONS: usize = 100;

/// Centroid movement below this ends a run early.
const CONVERGENCE_EPSILON: f64 = 0.001;

/// A fixed 5-dimensional point in the weak-signal feature space.
///
/// All five fields are always present; there are no partial vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub amplitude: f64,
    pub frequency: f64,
    pub phase: f64,
    pub duration: f64,
    /// Directional trend as a signed scalar
    pub trend: f64,
}

impl FeatureVector {
    /// View the vector as an array for component-wise arithmetic.
    pub fn as_array(&self) -> [f64; 5] {
        [
            self.amplitude,
            self.frequency,
            self.phase,
            self.duration,
            self.trend,
        ]
    }

    /// Euclidean distance to another vector.
    pub fn distance(&self, other: &FeatureVector) -> f64 {
        self.as_array()
            .iter()
            .zip(other.as_array().iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// Component-wise mean of a non-empty set of vectors.
    fn mean(vectors: &[FeatureVector]) -> FeatureVector {
        let n = vectors.len() as f64;
        let mut sums = [0.0; 5];
        for v in vectors {
            for (s, c) in sums.iter_mut().zip(v.as_array().iter()) {
                *s += c;
            }
        }
        FeatureVector {
            amplitude: sums[0] / n,
            frequency: sums[1] / n,
            phase: sums[2] / n,
            duration: sums[3] / n,
            trend: sums[4] / n,
        }
    }
}

/// One cluster from a single k-means run: a centroid plus its members.
///
/// Created fresh per invocation and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub centroid: FeatureVector,
    pub members: Vec<FeatureVector>,
}

/// Partition `vectors` into `k` clusters.
///
/// Centroids are initialized by sampling without replacement from the input;
/// assignment uses Euclidean distance with ties broken by first-encountered
/// index; centroids of clusters that lose all members keep their previous
/// position. Runs at most [`MAX_ITERATIONS`] iterations, stopping early when
/// every centroid moves less than 0.001.
///
/// `k == 0` or an empty input returns an empty list, never an error. The
/// result may contain empty clusters when an initial centroid attracts no
/// points for the whole run.
pub fn k_means<R: Rng>(vectors: &[FeatureVector], k: usize, rng: &mut R) -> Vec<Cluster> {
    if k == 0 || vectors.is_empty() {
        return Vec::new();
    }
    let k = k.min(vectors.len());

    let mut centroids: Vec<FeatureVector> = vectors
        .choose_multiple(rng, k)
        .copied()
        .collect();

    let mut assignments = vec![0usize; vectors.len()];
    for iteration in 0..MAX_ITERATIONS {
        // Assignment step: nearest centroid, first index wins ties.
        for (i, v) in vectors.iter().enumerate() {
            let mut best = 0;
            let mut best_dist = f64::INFINITY;
            for (c, centroid) in centroids.iter().enumerate() {
                let dist = v.distance(centroid);
                if dist < best_dist {
                    best_dist = dist;
                    best = c;
                }
            }
            assignments[i] = best;
        }

        // Update step: component-wise means; empty clusters keep their
        // previous centroid to avoid an undefined mean.
        let mut max_shift = 0.0f64;
        for c in 0..k {
            let members: Vec<FeatureVector> = vectors
                .iter()
                .zip(assignments.iter())
                .filter(|(_, &a)| a == c)
                .map(|(v, _)| *v)
                .collect();
            if members.is_empty() {
                continue;
            }
            let updated = FeatureVector::mean(&members);
            max_shift = max_shift.max(updated.distance(&centroids[c]));
            centroids[c] = updated;
        }

        if max_shift < CONVERGENCE_EPSILON {
            trace!(iteration, k, "k-means converged");
            break;
        }
    }

    centroids
        .into_iter()
        .enumerate()
        .map(|(c, centroid)| Cluster {
            centroid,
            members: vectors
                .iter()
                .zip(assignments.iter())
                .filter(|(_, &a)| a == c)
                .map(|(v, _)| *v)
                .collect(),
        })
        .collect()
}

/// Select a cluster count via the elbow heuristic.
///
/// Runs `k_means` for each `k` in `1..=min(max_k, |vectors|)`, computes the
/// within-cluster sum of squares, and picks the k with the largest discrete
/// second difference of the WCSS curve. Defaults to 1 when fewer than 3 WCSS
/// samples exist.
pub fn select_k<R: Rng>(vectors: &[FeatureVector], max_k: usize, rng: &mut R) -> usize {
    if vectors.is_empty() || max_k == 0 {
        return 1;
    }

    let upper = max_k.min(vectors.len());
    let wcss: Vec<f64> = (1..=upper)
        .map(|k| within_cluster_sum_of_squares(&k_means(vectors, k, rng)))
        .collect();

    if wcss.len() < 3 {
        return 1;
    }

    let mut best_index = 1;
    let mut best_curvature = f64::NEG_INFINITY;
    for i in 1..wcss.len() - 1 {
        let curvature = wcss[i - 1] - 2.0 * wcss[i] + wcss[i + 1];
        if curvature > best_curvature {
            best_curvature = curvature;
            best_index = i;
        }
    }

    // wcss[i] is the curve value for k = i + 1.
    best_index + 1
}

/// Sum of squared member-to-centroid distances across all clusters.
fn within_cluster_sum_of_squares(clusters: &[Cluster]) -> f64 {
    clusters
        .iter()
        .map(|cluster| {
            cluster
                .members
                .iter()
                .map(|m| {
                    let d = m.distance(&cluster.centroid);
                    d * d
                })
                .sum::<f64>()
        })
        .sum()
}
