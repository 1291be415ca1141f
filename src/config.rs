//! Configuration for resonance analysis calls.

use serde::{Deserialize, Serialize};

/// Per-call analysis parameters.
///
/// Defaults carry the tuning the engine was calibrated with. The config is a
/// plain value; the core performs no file I/O, so loading and persisting a
/// config is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum number of dominant frequencies reported by spectral analysis
    pub spectral_resolution: usize,

    /// Whisper sensitivity: raw trend strengths below this are amplified
    pub sensitivity: f64,

    /// Whisper sliding-window length in seconds (default: 2 hours)
    pub whisper_window_secs: f64,

    /// Minimum number of weak signals required before clustering runs
    pub min_cluster_size: usize,

    /// Threshold for keeping a lagged correlation as statistically notable
    pub significance_level: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            spectral_resolution: 10,
            sensitivity: 0.3,
            whisper_window_secs: 7200.0, // 2 hours
            min_cluster_size: 5,
            significance_level: 0.05,
        }
    }
}

impl AnalysisConfig {
    /// Set the whisper sensitivity threshold.
    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    /// Set the minimum weak-signal count required for clustering.
    pub fn with_min_cluster_size(mut self, min_cluster_size: usize) -> Self {
        self.min_cluster_size = min_cluster_size;
        self
    }

    /// Set the lagged-correlation significance threshold.
    pub fn with_significance_level(mut self, significance_level: f64) -> Self {
        self.significance_level = significance_level;
        self
    }

    /// Set the whisper window length in seconds.
    pub fn with_whisper_window_secs(mut self, secs: f64) -> Self {
        self.whisper_window_secs = secs;
        self
    }
}
