//! Signal primitives: pure, stateless numeric functions.
//!
//! Everything in this module is side-effect free and degrades to neutral
//! values on degenerate input (empty series, zero variance, short windows).
//! The higher-level analyses are built entirely on these functions.

mod spectrum;
mod stats;
mod window;

pub use spectrum::{bin_frequencies, find_peaks, harmonic_amplitudes, magnitude_spectrum};
pub use stats::{lagged_correlation, pearson_correlation, trend_strength};
pub use window::{apply_window, WindowKind};
