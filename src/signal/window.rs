//! Tapering windows applied before the frequency transform.
//!
//! Windowing reduces spectral leakage by smoothly tapering the signal at the
//! edges of the analysis frame.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Tapering window applied to a series before the frequency transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowKind {
    /// No tapering
    Rectangular,
    /// Hann window: 0.5 - 0.5*cos(2π*n/N)
    Hann,
    /// Hamming window: 0.54 - 0.46*cos(2π*n/N)
    Hamming,
}

impl WindowKind {
    /// Generate window coefficients for a given length.
    pub fn coefficients(&self, n: usize) -> Vec<f64> {
        match self {
            WindowKind::Rectangular => vec![1.0; n],
            WindowKind::Hann => (0..n)
                .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f64 / n as f64).cos())
                .collect(),
            WindowKind::Hamming => (0..n)
                .map(|i| 0.54 - 0.46 * (2.0 * PI * i as f64 / n as f64).cos())
                .collect(),
        }
    }
}

/// Apply a tapering window to a series, returning a same-length series.
pub fn apply_window(series: &[f64], kind: WindowKind) -> Vec<f64> {
    let coefficients = kind.coefficients(series.len());
    series
        .iter()
        .zip(coefficients.iter())
        .map(|(&x, &w)| x * w)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_is_identity() {
        let series = vec![1.0, -2.0, 3.0];
        assert_eq!(apply_window(&series, WindowKind::Rectangular), series);
    }

    #[test]
    fn test_window_preserves_length() {
        let series = vec![1.0; 64];
        assert_eq!(apply_window(&series, WindowKind::Hamming).len(), 64);
        assert_eq!(apply_window(&series, WindowKind::Hann).len(), 64);
    }

    #[test]
    fn test_hamming_edges_are_attenuated() {
        let series = vec![1.0; 32];
        let windowed = apply_window(&series, WindowKind::Hamming);
        // Hamming never reaches zero at the edges
        assert!((windowed[0] - 0.08).abs() < 1e-9);
        assert!(windowed[0] < windowed[16]);
    }

    #[test]
    fn test_hann_starts_at_zero() {
        let windowed = apply_window(&[1.0; 16], WindowKind::Hann);
        assert!(windowed[0].abs() < 1e-12);
    }

    #[test]
    fn test_empty_series() {
        assert!(apply_window(&[], WindowKind::Hann).is_empty());
    }
}
