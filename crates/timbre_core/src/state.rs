//! EQ State Store
//!
//! The single owner of the canonical band sequence and preamp. All reads
//! and writes go through this object - there is no global state, and no
//! collaborator mutates bands directly. Every mutation runs synchronously
//! to completion, so a read never observes a half-applied state.

use tracing::{debug, info};

use timbre_dsp::{EqState, FilterType};

/// Single-field edit for one band
///
/// The finite field set, each variant carrying its typed payload.
/// Dispatch is by explicit matching; there is no string-keyed access.
/// Unrecognized filter tags pass through unchanged - the coefficient
/// math degrades them to a flat response.
#[derive(Debug, Clone, PartialEq)]
pub enum BandEdit {
    Frequency(f32),
    Gain(f32),
    Q(f32),
    Filter(FilterType),
    Enabled(bool),
}

/// Owner of the canonical EQ state
///
/// Device sync reads snapshots and pushes wholesale replacements; the
/// visualization layer streams `update_band` edits. Created from the
/// canonical defaults.
#[derive(Debug, Clone, Default)]
pub struct EqStateStore {
    state: EqState,
}

impl EqStateStore {
    /// Create a store holding the canonical default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the current state
    pub fn state(&self) -> &EqState {
        &self.state
    }

    /// Clone the current state (for device sync and rendering)
    pub fn snapshot(&self) -> EqState {
        self.state.clone()
    }

    /// Wholesale state replacement
    ///
    /// A single assignment: no observer can see a partially-updated
    /// sequence. Used when applying an imported profile or when a device
    /// reports its existing settings.
    pub fn replace(&mut self, state: EqState) {
        self.state = state;
    }

    /// Apply one field edit to the band at `index`
    ///
    /// An out-of-range index is a no-op, not an error; edit streams from
    /// drag gestures rely on this being safe to call blindly.
    pub fn update_band(&mut self, index: usize, edit: BandEdit) {
        let Some(band) = self.state.bands.get_mut(index) else {
            debug!(index, "ignoring edit for out-of-range band");
            return;
        };

        match edit {
            BandEdit::Frequency(freq) => band.freq = freq,
            BandEdit::Gain(gain_db) => band.gain_db = gain_db,
            BandEdit::Q(q) => band.q = q,
            BandEdit::Filter(filter) => band.filter = filter,
            BandEdit::Enabled(enabled) => band.enabled = enabled,
        }
    }

    /// Set the preamp applied ahead of the cascade
    pub fn set_preamp_db(&mut self, preamp_db: f32) {
        self.state.preamp_db = preamp_db;
    }

    /// Restore the canonical defaults (all bands flat, preamp 0)
    pub fn reset_to_defaults(&mut self) {
        info!("resetting EQ to defaults");
        self.state = EqState::default();
    }
}
