//! Built-in EQ Presets

use crate::eq::BAND_COUNT;

/// Named EQ preset with 10 band gains
pub type Preset = (&'static str, [f32; BAND_COUNT]);

/// List of built-in presets
pub const PRESETS: &[Preset] = &[
    ("Flat", [0.0; BAND_COUNT]),
    ("Bass Boost", [6.0, 5.0, 3.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    ("Treble Boost", [0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 3.0, 5.0, 6.0, 6.0]),
    ("Vocal Clarity", [-2.0, -1.0, 0.0, 2.0, 4.0, 4.0, 3.0, 2.0, 1.0, 0.0]),
    ("Bass Reduce", [-6.0, -4.0, -2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
    ("Loudness", [4.0, 3.0, 0.0, -1.0, -1.0, 0.0, 1.0, 2.0, 3.0, 4.0]),
    ("Electronic", [4.0, 3.0, 1.0, 0.0, -2.0, -2.0, 0.0, 1.0, 3.0, 4.0]),
];

/// Look up a built-in preset by name, case-insensitively
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|(n, _)| n.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eq::EqState;

    #[test]
    fn test_find_preset() {
        assert!(find_preset("Flat").is_some());
        assert!(find_preset("bass boost").is_some());
        assert!(find_preset("No Such Preset").is_none());
    }

    #[test]
    fn test_preset_realizes_over_defaults() {
        let (_, gains) = find_preset("Bass Boost").unwrap();
        let state = EqState::with_gains(gains);
        assert_eq!(state.bands[0].gain_db, 6.0);
        assert_eq!(state.bands[5].gain_db, 0.0);
    }
}
