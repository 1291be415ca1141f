//! Magnitude spectrum, peak picking, and harmonic amplitude lookup.

use rustfft::{num_complex::Complex, FftPlanner};

/// Compute the magnitude spectrum of a (windowed) real series.
///
/// Returns magnitudes for bins `0..=N/2`; bin `k` corresponds to frequency
/// `k * sample_rate / N`. An empty input yields an empty spectrum.
pub fn magnitude_spectrum(windowed: &[f64]) -> Vec<f64> {
    let n = windowed.len();
    if n == 0 {
        return Vec::new();
    }

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(n);

    let mut buffer: Vec<Complex<f64>> =
        windowed.iter().map(|&x| Complex::new(x, 0.0)).collect();
    fft.process(&mut buffer);

    // Real input: keep the non-redundant half.
    buffer.iter().take(n / 2 + 1).map(|c| c.norm()).collect()
}

/// Frequencies corresponding to the bins of `magnitude_spectrum`.
///
/// `n` is the transform length (the windowed series length), not the
/// spectrum length.
pub fn bin_frequencies(n: usize, sample_rate: f64) -> Vec<f64> {
    if n == 0 {
        return Vec::new();
    }
    (0..=n / 2)
        .map(|k| k as f64 * sample_rate / n as f64)
        .collect()
}

/// Find local-maximum frequencies, ordered by descending magnitude.
///
/// The DC bin and the last bin are never peaks. Flat or empty spectra
/// return an empty list.
pub fn find_peaks(spectrum: &[f64], frequencies: &[f64]) -> Vec<f64> {
    if spectrum.len() < 3 || frequencies.len() != spectrum.len() {
        return Vec::new();
    }

    let mut peaks: Vec<(f64, f64)> = (1..spectrum.len() - 1)
        .filter(|&i| spectrum[i] > spectrum[i - 1] && spectrum[i] > spectrum[i + 1])
        .map(|i| (frequencies[i], spectrum[i]))
        .collect();

    peaks.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    peaks.into_iter().map(|(freq, _)| freq).collect()
}

/// Estimate harmonic energy at each peak frequency.
///
/// Looks up the magnitude at the peak bin and its immediate neighbors and
/// averages them, which tolerates peaks that straddle a bin boundary. The
/// returned list is aligned with `peaks`.
pub fn harmonic_amplitudes(peaks: &[f64], spectrum: &[f64], frequencies: &[f64]) -> Vec<f64> {
    if spectrum.is_empty() || frequencies.len() != spectrum.len() {
        return vec![0.0; peaks.len()];
    }

    peaks
        .iter()
        .map(|&peak| {
            let bin = nearest_bin(peak, frequencies);
            let lo = bin.saturating_sub(1);
            let hi = (bin + 1).min(spectrum.len() - 1);
            let slice = &spectrum[lo..=hi];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

/// Index of the bin whose frequency is closest to `target`.
fn nearest_bin(target: f64, frequencies: &[f64]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &f) in frequencies.iter().enumerate() {
        let dist = (f - target).abs();
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}
