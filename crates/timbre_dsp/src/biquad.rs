//! BiQuad Coefficient Math
//!
//! RBJ (Robert Bristow-Johnson) Audio EQ Cookbook derivations for the
//! peak and shelf bands, plus the transfer-function magnitude evaluation
//! behind the response curve. Coefficients are computed in f64 for
//! numerical stability; no audio ever passes through these filters - the
//! coefficients exist for display and for hardware programming.

use crate::eq::{Band, FilterType};

/// Sample rate assumed when the caller has no better information (Hz)
pub const DEFAULT_SAMPLE_RATE: f32 = 48_000.0;

/// Normalized biquad coefficients (a0 divided out)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiquadCoefficients {
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub a1: f64,
    pub a2: f64,
}

impl BiquadCoefficients {
    /// The unity filter: passes the signal unchanged
    pub const IDENTITY: Self = Self {
        b0: 1.0,
        b1: 0.0,
        b2: 0.0,
        a1: 0.0,
        a2: 0.0,
    };

    /// Derive coefficients for one band
    ///
    /// Disabled bands, unrecognized filter tags, and guarded inputs
    /// (`q <= 0`, `freq <= 0`, non-finite parameters) all yield
    /// `IDENTITY` rather than an error, so a malformed band can never
    /// inject NaN into a response curve.
    pub fn for_band(band: &Band, sample_rate: f32) -> Self {
        if !band.enabled {
            return Self::IDENTITY;
        }
        // NaN fails both comparisons, so this also guards non-finite input
        if !(band.freq > 0.0) || !(band.q > 0.0) || !band.gain_db.is_finite() {
            return Self::IDENTITY;
        }

        let a = 10.0_f64.powf(band.gain_db as f64 / 40.0);
        let w0 = std::f64::consts::TAU * band.freq as f64 / sample_rate as f64;
        let cos_w0 = w0.cos();
        let sin_w0 = w0.sin();
        let alpha = sin_w0 / (2.0 * band.q as f64);

        let (b0, b1, b2, a0, a1, a2) = match band.filter {
            FilterType::Peak => (
                1.0 + alpha * a,
                -2.0 * cos_w0,
                1.0 - alpha * a,
                1.0 + alpha / a,
                -2.0 * cos_w0,
                1.0 - alpha / a,
            ),
            FilterType::LowShelf => {
                let two_sqrt_a_alpha = 2.0 * a.sqrt() * alpha;
                (
                    a * ((a + 1.0) - (a - 1.0) * cos_w0 + two_sqrt_a_alpha),
                    2.0 * a * ((a - 1.0) - (a + 1.0) * cos_w0),
                    a * ((a + 1.0) - (a - 1.0) * cos_w0 - two_sqrt_a_alpha),
                    (a + 1.0) + (a - 1.0) * cos_w0 + two_sqrt_a_alpha,
                    -2.0 * ((a - 1.0) + (a + 1.0) * cos_w0),
                    (a + 1.0) + (a - 1.0) * cos_w0 - two_sqrt_a_alpha,
                )
            }
            FilterType::HighShelf => {
                let two_sqrt_a_alpha = 2.0 * a.sqrt() * alpha;
                (
                    a * ((a + 1.0) + (a - 1.0) * cos_w0 + two_sqrt_a_alpha),
                    -2.0 * a * ((a - 1.0) + (a + 1.0) * cos_w0),
                    a * ((a + 1.0) + (a - 1.0) * cos_w0 - two_sqrt_a_alpha),
                    (a + 1.0) - (a - 1.0) * cos_w0 + two_sqrt_a_alpha,
                    2.0 * ((a - 1.0) - (a + 1.0) * cos_w0),
                    (a + 1.0) - (a - 1.0) * cos_w0 - two_sqrt_a_alpha,
                )
            }
            // Tags from other tools are accepted in the data model but
            // contribute nothing to the response
            FilterType::Other(_) => return Self::IDENTITY,
        };

        Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
        }
    }

    /// Magnitude response at one frequency, in dB
    ///
    /// Evaluates `H(z) = (b0 + b1 z^-1 + b2 z^-2) / (1 + a1 z^-1 + a2 z^-2)`
    /// at `z = e^(jw)` and returns `10 * log10(|H|^2)`.
    pub fn magnitude_db_at(&self, freq_hz: f32, sample_rate: f32) -> f32 {
        let w = std::f64::consts::TAU * freq_hz as f64 / sample_rate as f64;
        let cos_w = w.cos();
        let sin_w = w.sin();
        let cos_2w = (2.0 * w).cos();
        let sin_2w = (2.0 * w).sin();

        let num_re = self.b0 + self.b1 * cos_w + self.b2 * cos_2w;
        let num_im = -(self.b1 * sin_w + self.b2 * sin_2w);
        let den_re = 1.0 + self.a1 * cos_w + self.a2 * cos_2w;
        let den_im = -(self.a1 * sin_w + self.a2 * sin_2w);

        let ratio = (num_re * num_re + num_im * num_im) / (den_re * den_re + den_im * den_im);
        (10.0 * ratio.log10()) as f32
    }
}

/// Total cascade magnitude at one frequency, in dB
///
/// dB magnitudes are additive, so the section order never affects the sum.
/// Phase is not modeled; magnitude is all the display and the hardware
/// programmer need.
pub fn cascade_magnitude_db(
    freq_hz: f32,
    coefficients: &[BiquadCoefficients],
    sample_rate: f32,
) -> f32 {
    coefficients
        .iter()
        .map(|c| c.magnitude_db_at(freq_hz, sample_rate))
        .sum()
}
