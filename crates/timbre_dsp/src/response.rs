//! Frequency Response Sampling
//!
//! Samples the cascaded magnitude response across the audible range for
//! display, and exposes the log-frequency / linear-dB axis maps so any
//! renderer placing the curve stays numerically consistent with the math
//! here. Pixel drawing itself lives outside this crate.

use crate::biquad::{cascade_magnitude_db, BiquadCoefficients};
use crate::eq::Band;

/// Lower edge of the sampled and displayed range (Hz)
pub const MIN_FREQ: f32 = 20.0;
/// Upper edge of the sampled and displayed range (Hz)
pub const MAX_FREQ: f32 = 20_000.0;
/// Display floor for band gain (dB)
pub const MIN_GAIN_DB: f32 = -20.0;
/// Display ceiling for band gain (dB)
pub const MAX_GAIN_DB: f32 = 20.0;

/// One sampled point of the total response
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub freq_hz: f32,
    pub db: f32,
}

/// Sample the cascaded response at `points` log-spaced frequencies
///
/// Coefficients are derived once per band (disabled bands fall out as
/// unity sections), then the cascade magnitude is summed per frequency.
/// Pure function of its inputs; O(points x bands).
pub fn sample_curve(bands: &[Band], points: usize, sample_rate: f32) -> Vec<CurvePoint> {
    let coefficients: Vec<BiquadCoefficients> = bands
        .iter()
        .map(|band| BiquadCoefficients::for_band(band, sample_rate))
        .collect();

    let log_min = (MIN_FREQ as f64).ln();
    let log_max = (MAX_FREQ as f64).ln();

    (0..points)
        .map(|i| {
            let t = i as f64 / (points - 1).max(1) as f64;
            let freq_hz = (log_min + t * (log_max - log_min)).exp() as f32;
            CurvePoint {
                freq_hz,
                db: cascade_magnitude_db(freq_hz, &coefficients, sample_rate),
            }
        })
        .collect()
}

/// Normalized position of a frequency on the log axis
///
/// 0.0 at `MIN_FREQ`, 1.0 at `MAX_FREQ`.
pub fn freq_to_position(freq_hz: f32) -> f32 {
    (freq_hz / MIN_FREQ).ln() / (MAX_FREQ / MIN_FREQ).ln()
}

/// Frequency at a normalized position on the log axis
pub fn position_to_freq(position: f32) -> f32 {
    MIN_FREQ * (MAX_FREQ / MIN_FREQ).powf(position)
}

/// Normalized position of a gain on the linear dB axis
///
/// 0.0 at `MIN_GAIN_DB`, 1.0 at `MAX_GAIN_DB`.
pub fn gain_to_position(gain_db: f32) -> f32 {
    (gain_db - MIN_GAIN_DB) / (MAX_GAIN_DB - MIN_GAIN_DB)
}

/// Gain at a normalized position on the linear dB axis
pub fn position_to_gain(position: f32) -> f32 {
    MIN_GAIN_DB + position * (MAX_GAIN_DB - MIN_GAIN_DB)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::biquad::DEFAULT_SAMPLE_RATE;
    use crate::eq::EqState;

    #[test]
    fn test_flat_state_samples_to_zero() {
        let state = EqState::default();
        let curve = sample_curve(&state.bands, 64, DEFAULT_SAMPLE_RATE);

        assert_eq!(curve.len(), 64);
        for point in &curve {
            assert!(
                point.db.abs() < 1e-6,
                "flat EQ should be 0 dB everywhere, got {} at {} Hz",
                point.db,
                point.freq_hz
            );
        }
    }

    #[test]
    fn test_curve_spans_audible_range() {
        let state = EqState::default();
        let curve = sample_curve(&state.bands, 128, DEFAULT_SAMPLE_RATE);

        assert!((curve[0].freq_hz - MIN_FREQ).abs() < 0.01);
        assert!((curve[127].freq_hz - MAX_FREQ).abs() < 1.0);

        // Log spacing is strictly increasing
        for pair in curve.windows(2) {
            assert!(pair[1].freq_hz > pair[0].freq_hz);
        }
    }

    #[test]
    fn test_boost_shows_up_near_band_center() {
        let mut state = EqState::default();
        state.bands[5].gain_db = 6.0; // 1 kHz

        let curve = sample_curve(&state.bands, 256, DEFAULT_SAMPLE_RATE);
        let peak = curve
            .iter()
            .max_by(|a, b| a.db.total_cmp(&b.db))
            .unwrap();

        assert!(peak.db > 5.0);
        // The maximum lands within a third of an octave of the band center
        assert!((peak.freq_hz / 1000.0).log2().abs() < 0.34);
    }

    #[test]
    fn test_disabled_band_contributes_nothing() {
        let mut state = EqState::default();
        state.bands[5].gain_db = 12.0;
        state.bands[5].enabled = false;

        let curve = sample_curve(&state.bands, 64, DEFAULT_SAMPLE_RATE);
        for point in &curve {
            assert!(point.db.abs() < 1e-6);
        }
    }

    #[test]
    fn test_sampler_is_pure() {
        let state = EqState::default();
        let first = sample_curve(&state.bands, 32, DEFAULT_SAMPLE_RATE);
        let second = sample_curve(&state.bands, 32, DEFAULT_SAMPLE_RATE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_frequency_axis_roundtrip() {
        assert!(freq_to_position(MIN_FREQ).abs() < 1e-6);
        assert!((freq_to_position(MAX_FREQ) - 1.0).abs() < 1e-6);

        for freq in [31.0, 250.0, 1000.0, 16000.0] {
            let back = position_to_freq(freq_to_position(freq));
            assert!((back - freq).abs() / freq < 1e-4);
        }
    }

    #[test]
    fn test_gain_axis_roundtrip() {
        assert!(gain_to_position(MIN_GAIN_DB).abs() < 1e-6);
        assert!((gain_to_position(MAX_GAIN_DB) - 1.0).abs() < 1e-6);
        assert!((gain_to_position(0.0) - 0.5).abs() < 1e-6);

        for gain in [-20.0, -2.6, 0.0, 8.5, 20.0] {
            let back = position_to_gain(gain_to_position(gain));
            assert!((back - gain).abs() < 1e-4);
        }
    }
}
