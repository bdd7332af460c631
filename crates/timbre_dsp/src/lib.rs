//! Timbre DSP - Parametric EQ Math
//!
//! Pure math for the Timbre EQ core:
//! - Band data model and the canonical 10-band state
//! - RBJ cookbook biquad coefficients for peak and shelf bands
//! - Cascaded magnitude response sampling for visualization
//! - Log-frequency / linear-dB axis maps shared with renderers
//!
//! No audio signal ever passes through this crate; it derives the
//! coefficients and curves that the display and the device programmer
//! consume. Everything here is stateless and deterministic.

mod biquad;
mod eq;
mod presets;
mod response;

pub use biquad::{cascade_magnitude_db, BiquadCoefficients, DEFAULT_SAMPLE_RATE};
pub use eq::{Band, EqState, FilterType, BAND_COUNT, DEFAULT_FREQUENCIES, DEFAULT_Q};
pub use presets::{find_preset, Preset, PRESETS};
pub use response::{
    freq_to_position, gain_to_position, position_to_freq, position_to_gain, sample_curve,
    CurvePoint, MAX_FREQ, MAX_GAIN_DB, MIN_FREQ, MIN_GAIN_DB,
};
