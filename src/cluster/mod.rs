//! Clustering engine: k-means over fixed-dimension feature vectors with
//! elbow-based model-order selection and post-hoc quality scoring.

mod kmeans;
mod quality;

pub use kmeans::{k_means, select_k, Cluster, FeatureVector, MAX_ITERATIONS};
pub use quality::{characteristics, describe_vector, stability, ClusterCharacteristics};
