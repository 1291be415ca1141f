//! Spectral analysis: dominant frequencies, harmonic content, and shape
//! statistics of the magnitude spectrum.

use crate::config::AnalysisConfig;
use crate::signal::{
    apply_window, bin_frequencies, find_peaks, harmonic_amplitudes, magnitude_spectrum,
    WindowKind,
};
use crate::snapshot::InputStreamData;
use serde::{Deserialize, Serialize};

/// Fraction of total spectral energy that defines the rolloff point.
const ROLLOFF_ENERGY_FRACTION: f64 = 0.85;

/// Output of one spectral analysis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpectralResults {
    /// Peak frequencies ordered by descending magnitude
    pub dominant_frequencies: Vec<f64>,
    /// Harmonic amplitude per dominant frequency (aligned)
    pub harmonic_amplitudes: Vec<f64>,
    /// Energy-weighted mean frequency, 0 when total magnitude is 0
    pub spectral_centroid: f64,
    /// Magnitude-weighted mean deviation of bin index from the centroid bin
    pub spectral_bandwidth: f64,
    /// Frequency below which 85% of spectral energy lies, 0 if never reached
    pub spectral_rolloff: f64,
}

pub fn analyze(data: &InputStreamData, config: &AnalysisConfig) -> SpectralResults {
    if data.is_empty() {
        return SpectralResults::default();
    }

    let n = data.primary_series.len();
    let windowed = apply_window(&data.primary_series, WindowKind::Hamming);
    let spectrum = magnitude_spectrum(&windowed);
    let frequencies = bin_frequencies(n, data.sample_rate);

    let total_magnitude: f64 = spectrum.iter().sum();
    let spectral_centroid = if total_magnitude > 0.0 {
        frequencies
            .iter()
            .zip(spectrum.iter())
            .map(|(&f, &m)| f * m)
            .sum::<f64>()
            / total_magnitude
    } else {
        0.0
    };

    let spectral_bandwidth = if total_magnitude > 0.0 {
        let bin_width = data.sample_rate / n as f64;
        let centroid_bin = spectral_centroid / bin_width;
        spectrum
            .iter()
            .enumerate()
            .map(|(i, &m)| m * (i as f64 - centroid_bin).abs())
            .sum::<f64>()
            / total_magnitude
    } else {
        0.0
    };

    let spectral_rolloff = rolloff_frequency(&spectrum, &frequencies);

    let mut dominant_frequencies = find_peaks(&spectrum, &frequencies);
    dominant_frequencies.truncate(config.spectral_resolution);
    let harmonics = harmonic_amplitudes(&dominant_frequencies, &spectrum, &frequencies);

    SpectralResults {
        dominant_frequencies,
        harmonic_amplitudes: harmonics,
        spectral_centroid,
        spectral_bandwidth,
        spectral_rolloff,
    }
}

/// First frequency at which cumulative squared-magnitude energy reaches the
/// rolloff fraction of total energy. Returns 0 when the spectrum carries no
/// energy.
fn rolloff_frequency(spectrum: &[f64], frequencies: &[f64]) -> f64 {
    let total_energy: f64 = spectrum.iter().map(|&m| m * m).sum();
    if total_energy <= 0.0 {
        return 0.0;
    }

    let target = ROLLOFF_ENERGY_FRACTION * total_energy;
    let mut cumulative = 0.0;
    for (i, &m) in spectrum.iter().enumerate() {
        cumulative += m * m;
        if cumulative >= target {
            return frequencies[i];
        }
    }
    0.0
}
