//! Parametric EQ Data Model
//!
//! Band parameters and the canonical fixed-length EQ state shared by the
//! state store, the profile codec, and the response sampler.

use serde::{Deserialize, Serialize};

/// Number of bands in the canonical EQ
pub const BAND_COUNT: usize = 10;

/// Default band frequencies (Hz) - ISO standard octave centers
pub const DEFAULT_FREQUENCIES: [f32; BAND_COUNT] = [
    31.0,    // Sub-bass
    62.0,    // Bass
    125.0,   // Low-mid
    250.0,   // Mid
    500.0,   // Mid
    1000.0,  // Upper-mid
    2000.0,  // Presence
    4000.0,  // Brilliance
    8000.0,  // High
    16000.0, // Air
];

/// Default quality factor for a freshly created band
pub const DEFAULT_Q: f32 = 0.75;

/// Filter shape for an EQ band
///
/// The closed set maps to the EqualizerAPO-style tags `PK`, `LSC`, `HSC`.
/// Tags outside the set are carried through `Other` so profiles written by
/// third-party tools survive a round trip; such bands contribute a flat
/// response in the coefficient math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterType {
    Peak,
    LowShelf,
    HighShelf,
    Other(String),
}

impl FilterType {
    /// Parse a filter tag, case-insensitively
    ///
    /// Accepts the common aliases seen in the wild; anything unrecognized
    /// is preserved verbatim in `Other`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "PK" | "PEAK" | "PEAKING" => FilterType::Peak,
            "LSC" | "LS" | "LOWSHELF" | "LOW_SHELF" => FilterType::LowShelf,
            "HSC" | "HS" | "HIGHSHELF" | "HIGH_SHELF" => FilterType::HighShelf,
            _ => FilterType::Other(tag.to_string()),
        }
    }

    /// The tag written into profiles for this shape
    pub fn tag(&self) -> &str {
        match self {
            FilterType::Peak => "PK",
            FilterType::LowShelf => "LSC",
            FilterType::HighShelf => "HSC",
            FilterType::Other(tag) => tag,
        }
    }
}

impl Default for FilterType {
    fn default() -> Self {
        FilterType::Peak
    }
}

impl From<String> for FilterType {
    fn from(tag: String) -> Self {
        FilterType::from_tag(&tag)
    }
}

impl From<FilterType> for String {
    fn from(filter: FilterType) -> Self {
        filter.tag().to_string()
    }
}

/// Single EQ band configuration
///
/// Identity is positional: a band's index is its position in the owning
/// `EqState`, never a stored field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Center/cutoff frequency in Hz (intended range 20 - 20000, not clamped)
    pub freq: f32,

    /// Gain in dB (intended range -20 - +20, not clamped)
    pub gain_db: f32,

    /// Quality factor; values <= 0 are guarded before coefficient derivation
    pub q: f32,

    /// Filter shape
    pub filter: FilterType,

    /// A disabled band contributes a flat (unity) response
    pub enabled: bool,
}

impl Band {
    /// Create a flat peaking band at the given frequency
    pub fn new(freq: f32) -> Self {
        Self {
            freq,
            gain_db: 0.0,
            q: DEFAULT_Q,
            filter: FilterType::Peak,
            enabled: true,
        }
    }
}

/// Complete EQ state: the fixed-length band cascade plus the preamp
///
/// The sequence length is fixed by the default frequency table; profile
/// import overwrites entries but never resizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqState {
    pub bands: [Band; BAND_COUNT],

    /// Flat pre-amp gain in dB applied ahead of the cascade
    pub preamp_db: f32,
}

impl Default for EqState {
    fn default() -> Self {
        Self {
            bands: core::array::from_fn(|i| Band::new(DEFAULT_FREQUENCIES[i])),
            preamp_db: 0.0,
        }
    }
}

impl EqState {
    /// Realize a gain table (e.g. a built-in preset) over the default bands
    pub fn with_gains(gains: &[f32; BAND_COUNT]) -> Self {
        let mut state = Self::default();
        for (band, gain) in state.bands.iter_mut().zip(gains) {
            band.gain_db = *gain;
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_flat() {
        let state = EqState::default();
        assert_eq!(state.preamp_db, 0.0);
        for band in &state.bands {
            assert_eq!(band.gain_db, 0.0, "Default should be flat (0dB)");
            assert_eq!(band.q, DEFAULT_Q);
            assert_eq!(band.filter, FilterType::Peak);
            assert!(band.enabled);
        }
    }

    #[test]
    fn test_band_frequencies_match_table() {
        let state = EqState::default();
        for (i, band) in state.bands.iter().enumerate() {
            assert_eq!(band.freq, DEFAULT_FREQUENCIES[i]);
        }
    }

    #[test]
    fn test_with_gains() {
        let gains = [6.0, 5.0, 3.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let state = EqState::with_gains(&gains);
        assert_eq!(state.bands[0].gain_db, 6.0);
        assert_eq!(state.bands[9].gain_db, 0.0);
        // Everything but the gains stays canonical
        assert_eq!(state.bands[0].freq, DEFAULT_FREQUENCIES[0]);
        assert_eq!(state.preamp_db, 0.0);
    }

    #[test]
    fn test_filter_tag_parsing() {
        assert_eq!(FilterType::from_tag("PK"), FilterType::Peak);
        assert_eq!(FilterType::from_tag("pk"), FilterType::Peak);
        assert_eq!(FilterType::from_tag("Peaking"), FilterType::Peak);
        assert_eq!(FilterType::from_tag("LSC"), FilterType::LowShelf);
        assert_eq!(FilterType::from_tag("ls"), FilterType::LowShelf);
        assert_eq!(FilterType::from_tag("HSC"), FilterType::HighShelf);
        assert_eq!(FilterType::from_tag("highshelf"), FilterType::HighShelf);
    }

    #[test]
    fn test_unknown_tag_preserved() {
        let filter = FilterType::from_tag("BP");
        assert_eq!(filter, FilterType::Other("BP".to_string()));
        assert_eq!(filter.tag(), "BP");
    }

    #[test]
    fn test_filter_type_serializes_as_tag() {
        let json = serde_json::to_string(&FilterType::Peak).unwrap();
        assert_eq!(json, "\"PK\"");

        let parsed: FilterType = serde_json::from_str("\"lsc\"").unwrap();
        assert_eq!(parsed, FilterType::LowShelf);

        // Unrecognized tags survive a round trip verbatim
        let parsed: FilterType = serde_json::from_str("\"NO\"").unwrap();
        let json = serde_json::to_string(&parsed).unwrap();
        assert_eq!(json, "\"NO\"");
    }

    #[test]
    fn test_band_serialization_roundtrip() {
        let band = Band {
            freq: 34.0,
            gain_db: -2.6,
            q: 0.8,
            filter: FilterType::Peak,
            enabled: true,
        };
        let json = serde_json::to_string(&band).unwrap();
        let deserialized: Band = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, band);
    }
}
