//! Input data model for the resonance analysis engine.
//!
//! A snapshot is a bounded, already-collected bundle of numeric time series
//! and heterogeneous event records. The engine never mutates a snapshot;
//! every analysis consumes it by reference and returns fresh result values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A captured bundle of stream data handed to the analyzer.
///
/// The primary series drives all four analyses. Event collections are carried
/// for downstream consumers and do not participate in the numeric paths.
/// An empty primary series yields neutral/zero results, never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputStreamData {
    /// Human-readable name of the stream bundle
    pub name: String,
    /// The primary numeric time series
    pub primary_series: Vec<f64>,
    /// Sample rate of the primary series in Hz
    pub sample_rate: f64,
    /// Additional named sub-streams
    #[serde(default)]
    pub sub_streams: HashMap<String, Vec<f64>>,
    /// Behavioral trace records collected alongside the series
    #[serde(default)]
    pub behavioral_traces: Vec<BehavioralTrace>,
    /// Free-form text reflections
    #[serde(default)]
    pub reflections: Vec<TextReflection>,
    /// Caller-assigned tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Failure records observed during collection
    #[serde(default)]
    pub failures: Vec<FailureRecord>,
    /// Visual anomaly records observed during collection
    #[serde(default)]
    pub visual_anomalies: Vec<VisualAnomaly>,
    /// When this snapshot was captured
    pub captured_at: DateTime<Utc>,
}

impl InputStreamData {
    /// Create a snapshot from a primary series, with empty event collections.
    pub fn new(name: impl Into<String>, primary_series: Vec<f64>, sample_rate: f64) -> Self {
        Self {
            name: name.into(),
            primary_series,
            sample_rate,
            sub_streams: HashMap::new(),
            behavioral_traces: Vec::new(),
            reflections: Vec::new(),
            tags: Vec::new(),
            failures: Vec::new(),
            visual_anomalies: Vec::new(),
            captured_at: Utc::now(),
        }
    }

    /// Check if the snapshot has any samples to analyze.
    pub fn is_empty(&self) -> bool {
        self.primary_series.is_empty()
    }

    /// Number of samples in the primary series.
    pub fn len(&self) -> usize {
        self.primary_series.len()
    }

    /// Duration covered by the primary series in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate <= 0.0 {
            return 0.0;
        }
        self.primary_series.len() as f64 / self.sample_rate
    }
}

/// One recorded behavioral action with timing only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralTrace {
    /// When the action occurred
    pub timestamp: DateTime<Utc>,
    /// Action label
    pub action: String,
    /// How long the action lasted in milliseconds
    pub duration_ms: u64,
}

/// A free-form text reflection attached to the capture window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextReflection {
    pub timestamp: DateTime<Utc>,
    pub text: String,
}

/// A failure observed during collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureRecord {
    pub timestamp: DateTime<Utc>,
    /// Subsystem that reported the failure
    pub source: String,
    pub message: String,
}

/// A visual anomaly record with a normalized severity score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualAnomaly {
    pub timestamp: DateTime<Utc>,
    /// Region label where the anomaly was seen
    pub region: String,
    /// Severity score in [0, 1]
    pub score: f64,
}
