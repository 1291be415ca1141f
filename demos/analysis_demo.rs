//! Demo: run the full resonance analysis pipeline on a synthetic snapshot.
//!
//! Usage: cargo run --example analysis_demo

use anyhow::Result;
use resonance_core::{
    detect_anomalies, AnalysisConfig, InputStreamData, ResonanceAnalyzer, ResultsProcessor,
};
use std::f64::consts::PI;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resonance_core=debug".into()),
        )
        .init();

    // A 10 Hz tone with a weak drift and a band of whisper-level samples.
    let series: Vec<f64> = (0..1024)
        .map(|t| {
            let tone = (2.0 * PI * 10.0 * t as f64 / 100.0).sin();
            let drift = t as f64 * 0.0002;
            tone * 0.6 + drift + 0.1
        })
        .collect();
    let snapshot = InputStreamData::new("demo", series, 100.0);

    let analyzer = ResonanceAnalyzer::with_seed(AnalysisConfig::default(), 42);
    let bundle = analyzer.analyze_all(&snapshot);

    println!(
        "dominant frequencies: {:?}",
        bundle.spectral.dominant_frequencies
    );
    println!("whisper predictions:  {}", bundle.whisper.predictions.len());
    println!("weak-signal clusters: {}", bundle.clusters.clusters.len());
    println!(
        "causality indicators: {}",
        bundle.correlation.causality_indicators.len()
    );

    let mut processor = ResultsProcessor::with_seed(42);
    let results = processor.process(&bundle);
    let anomalies = detect_anomalies(&results.resonance_signals);

    println!("\nprocessed results:");
    println!("{}", serde_json::to_string_pretty(&results)?);
    println!("\nanomalies: {}", serde_json::to_string_pretty(&anomalies)?);

    Ok(())
}
