//! Anomaly flagging over synthesized resonance signals.

use crate::fusion::artifacts::ResonanceSignal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Signal strength above this is flagged as unusually high.
const STRENGTH_ANOMALY_THRESHOLD: f64 = 0.9;

/// Signal frequency above this (normalized) is flagged as a spike.
const FREQUENCY_ANOMALY_THRESHOLD: f64 = 0.8;

/// Classification of a flagged anomaly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    UnusuallyHighStrength,
    FrequencySpike,
}

/// Severity tier of an anomaly flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Medium,
    High,
}

/// A flag attached to one signal. Purely derived; discarded after the
/// caller consumes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Anomaly {
    pub signal_id: Uuid,
    pub kind: AnomalyKind,
    pub severity: Severity,
}

/// Classify anomalies over a list of synthesized signals.
///
/// A signal may receive multiple flags.
pub fn detect_anomalies(signals: &[ResonanceSignal]) -> Vec<Anomaly> {
    let mut anomalies = Vec::new();
    for signal in signals {
        if signal.strength > STRENGTH_ANOMALY_THRESHOLD {
            anomalies.push(Anomaly {
                signal_id: signal.id,
                kind: AnomalyKind::UnusuallyHighStrength,
                severity: Severity::High,
            });
        }
        if signal.frequency > FREQUENCY_ANOMALY_THRESHOLD {
            anomalies.push(Anomaly {
                signal_id: signal.id,
                kind: AnomalyKind::FrequencySpike,
                severity: Severity::Medium,
            });
        }
    }
    anomalies
}
