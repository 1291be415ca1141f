//! Resonance Core - multi-modal weak-signal analysis engine.
//!
//! This library ingests bounded windows of heterogeneous time-series data
//! and produces ranked, classified resonance artifacts: dominant-frequency
//! trend nodes, amplified weak-trend predictions, feature clusters, and
//! cross-stream causality candidates.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       Resonance Core                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌──────────┐   ┌───────────┐   ┌──────────┐   ┌──────────┐ │
//! │  │ Snapshot │──▶│ Analyzer  │──▶│  Fusion  │──▶│ Anomaly  │ │
//! │  │ (input)  │   │ (4 paths) │   │ (merge)  │   │ (flags)  │ │
//! │  └──────────┘   └───────────┘   └──────────┘   └──────────┘ │
//! │                      │    │                                  │
//! │                      ▼    ▼                                  │
//! │               ┌────────┐ ┌─────────┐                         │
//! │               │ Signal │ │ Cluster │                         │
//! │               │ prims  │ │ engine  │                         │
//! │               └────────┘ └─────────┘                         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one way: snapshot → analyses → fused results → caller. The
//! core performs no I/O, holds no state between calls, and degrades to
//! neutral values on degenerate input instead of failing.
//!
//! # Example
//!
//! ```
//! use resonance_core::{AnalysisConfig, InputStreamData, ResonanceAnalyzer, ResultsProcessor};
//!
//! let series: Vec<f64> = (0..256).map(|t| (t as f64 * 0.6).sin()).collect();
//! let snapshot = InputStreamData::new("demo", series, 100.0);
//!
//! let analyzer = ResonanceAnalyzer::with_seed(AnalysisConfig::default(), 42);
//! let bundle = analyzer.analyze_all(&snapshot);
//!
//! let mut processor = ResultsProcessor::with_seed(42);
//! let results = processor.process(&bundle);
//! let anomalies = resonance_core::detect_anomalies(&results.resonance_signals);
//! println!("{} signals, {} anomalies", results.resonance_signals.len(), anomalies.len());
//! ```

pub mod analyzer;
pub mod cluster;
pub mod config;
pub mod fusion;
pub mod signal;
pub mod snapshot;

// Re-export key types at crate root for convenience
pub use analyzer::{
    AnalysisBundle, ClusterResults, CorrelationResults, ResonanceAnalyzer, SpectralResults,
    TrendDirection, TrendPrediction, WhisperResults,
};
pub use cluster::{Cluster, FeatureVector};
pub use config::AnalysisConfig;
pub use fusion::{
    detect_anomalies, Anomaly, AnomalyKind, CausalityCandidate, FutureCorrelation,
    ProcessedResults, ResonanceSignal, ResultsProcessor, Severity, SignalKind, TrendNode,
};
pub use snapshot::InputStreamData;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
