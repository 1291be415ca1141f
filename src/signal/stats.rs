//! Trend and correlation primitives.

use statrs::statistics::Statistics;

/// Signed trend strength of one sub-window, roughly in [-1, 1].
///
/// Computed as the least-squares slope across the window, normalized by the
/// value range so a perfectly monotone linear ramp scores ±1. Returns 0 for
/// windows shorter than 2 samples or with zero range.
pub fn trend_strength(window: &[f64]) -> f64 {
    let n = window.len();
    if n < 2 {
        return 0.0;
    }

    let mean_x = (n - 1) as f64 / 2.0;
    let mean_y = window.mean();

    let mut cov = 0.0;
    let mut var_x = 0.0;
    for (i, &y) in window.iter().enumerate() {
        let dx = i as f64 - mean_x;
        cov += dx * (y - mean_y);
        var_x += dx * dx;
    }
    if var_x == 0.0 {
        return 0.0;
    }
    let slope = cov / var_x;

    let min = window.iter().copied().fold(f64::INFINITY, f64::min);
    let max = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range == 0.0 {
        return 0.0;
    }

    (slope * (n - 1) as f64 / range).clamp(-1.0, 1.0)
}

/// Standard Pearson correlation coefficient.
///
/// Returns 0 when either series has zero variance or the series are empty
/// or of mismatched length (computed over the common prefix).
pub fn pearson_correlation(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n < 2 {
        return 0.0;
    }
    let a = &a[..n];
    let b = &b[..n];

    let mean_a = a.mean();
    let mean_b = b.mean();

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for i in 0..n {
        let da = a[i] - mean_a;
        let db = b[i] - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    if var_a == 0.0 || var_b == 0.0 {
        return 0.0;
    }
    cov / (var_a.sqrt() * var_b.sqrt())
}

/// Pearson correlation between `a[0..n-lag]` and `b[lag..n]`.
///
/// Returns 0 for a zero lag or when `lag >= min(len(a), len(b))`.
pub fn lagged_correlation(a: &[f64], b: &[f64], lag: usize) -> f64 {
    let n = a.len().min(b.len());
    if lag == 0 || lag >= n {
        return 0.0;
    }
    pearson_correlation(&a[..n - lag], &b[lag..n])
}
