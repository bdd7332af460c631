//! Timbre Core - EQ State and Profiles
//!
//! This crate provides the authoring core for Timbre:
//! - The canonical EQ state store (the single mutation surface)
//! - Dual-format profile codec (JSON document + filter list)
//! - Persistent settings and saved profiles
//!
//! # Architecture
//!
//! ```text
//! Visualization ──update_band──▶ ┌──────────────┐ ◀──replace── Device Sync
//!                                │ EqStateStore │
//!      sample_curve ◀──snapshot─ └──────────────┘ ─snapshot──▶ export
//!                                        ▲
//!                                 import (JSON / text)
//! ```
//!
//! Everything is synchronous and single-threaded: a mutation runs to
//! completion before its call returns, so reads always observe a fully
//! consistent state. Continuous edit streams (drag gestures) are the
//! caller's responsibility to throttle.

mod error;
mod profile;
mod settings;
mod state;

pub use error::ProfileError;
pub use profile::{export_json, export_text, import_json, import_str, import_text, DEVICE_TAG};
pub use settings::{SavedProfile, TimbreSettings};
pub use state::{BandEdit, EqStateStore};

// Re-export DSP types for convenience
pub use timbre_dsp::{
    cascade_magnitude_db, find_preset, freq_to_position, gain_to_position, position_to_freq,
    position_to_gain, sample_curve, Band, BiquadCoefficients, CurvePoint, EqState, FilterType,
    Preset, BAND_COUNT, DEFAULT_FREQUENCIES, DEFAULT_Q, DEFAULT_SAMPLE_RATE, MAX_FREQ,
    MAX_GAIN_DB, MIN_FREQ, MIN_GAIN_DB, PRESETS,
};
