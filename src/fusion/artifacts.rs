//! Fused output artifacts: read-only records derived from the four analyses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// A dominant-frequency trend node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendNode {
    pub frequency: f64,
    pub amplitude: f64,
    /// Assigned randomly rather than carried from the transform's complex
    /// output; preserved as observed (a corrected implementation would
    /// derive it from the spectral bin's phase).
    pub phase: f64,
    pub confidence: f64,
}

/// A predicted future correlation between two signals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FutureCorrelation {
    pub source_signal: String,
    pub target_signal: String,
    pub strength: f64,
    pub time_horizon_hours: f64,
    pub probability: f64,
}

/// A directional cause→effect hypothesis with supporting evidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CausalityCandidate {
    pub cause: String,
    pub effect: String,
    pub strength: f64,
    pub confidence: f64,
    pub evidence: Vec<String>,
}

/// Classification of a synthesized resonance signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// Derived from a strong spectral peak
    Spectral,
    /// Derived from a high-probability whisper prediction
    Whisper,
}

/// A notable finding worth surfacing to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResonanceSignal {
    pub id: Uuid,
    pub kind: SignalKind,
    pub strength: f64,
    /// 0 for whisper signals, which have no frequency-domain meaning
    pub frequency: f64,
    /// Analysis stage that produced this signal
    pub source: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    pub timestamp: DateTime<Utc>,
}

impl ResonanceSignal {
    pub fn new(kind: SignalKind, strength: f64, frequency: f64, source: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            strength,
            frequency,
            source: source.to_string(),
            metadata: HashMap::new(),
            timestamp: Utc::now(),
        }
    }
}
