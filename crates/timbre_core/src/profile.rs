//! Profile Import/Export
//!
//! Dual-format codec for EQ profiles: a JSON document and the
//! EqualizerAPO-convention filter list. Both importers produce a complete
//! `EqState` merged over the canonical defaults - the caller commits it
//! via `EqStateStore::replace`, so a failed import leaves live state
//! untouched.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use timbre_dsp::{Band, EqState, FilterType};

use crate::error::ProfileError;

/// Fixed identifying tag written into exported profiles
pub const DEVICE_TAG: &str = "timbre";

/// Serialized band record
///
/// `index` is written from the band's position on export; import applies
/// records positionally and accepts the field without trusting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BandRecord {
    #[serde(default)]
    index: usize,
    freq: f32,
    gain: f32,
    q: f32,
    #[serde(rename = "type", default)]
    filter: FilterType,
    #[serde(default = "default_enabled")]
    enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// JSON profile document as written by `export_json`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileDocument {
    device: &'static str,
    timestamp: String,
    global_gain: f32,
    bands: Vec<BandRecord>,
}

/// Lenient reader for the same document
///
/// `bands` is optional here so its absence maps to `MissingBands` rather
/// than a generic serde error; unknown extra fields are tolerated.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileReader {
    #[serde(default)]
    global_gain: f32,
    bands: Option<Vec<BandRecord>>,
}

/// Serialize a state to the JSON profile format
///
/// The timestamp is taken from the wall clock at export time, never from
/// device hardware.
pub fn export_json(state: &EqState) -> Result<String, ProfileError> {
    let document = ProfileDocument {
        device: DEVICE_TAG,
        timestamp: Utc::now().to_rfc3339(),
        global_gain: state.preamp_db,
        bands: state
            .bands
            .iter()
            .enumerate()
            .map(|(index, band)| BandRecord {
                index,
                freq: band.freq,
                gain: band.gain_db,
                q: band.q,
                filter: band.filter.clone(),
                enabled: band.enabled,
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

/// Parse a JSON profile
///
/// Requires the `bands` field; `globalGain` defaults to 0 when absent and
/// unknown fields are ignored. Records merge over the canonical defaults
/// positionally - extra records beyond the fixed band count are dropped,
/// and a short list leaves the remaining bands at their defaults.
pub fn import_json(text: &str) -> Result<EqState, ProfileError> {
    let reader: ProfileReader = serde_json::from_str(text)?;
    let records = reader.bands.ok_or(ProfileError::MissingBands)?;

    let mut state = EqState::default();
    state.preamp_db = reader.global_gain;
    let applied = records.len().min(state.bands.len());
    for (band, record) in state.bands.iter_mut().zip(records) {
        *band = Band {
            freq: record.freq,
            gain_db: record.gain,
            q: record.q,
            filter: record.filter,
            enabled: record.enabled,
        };
    }

    info!(bands = applied, "imported JSON profile");
    Ok(state)
}

/// Parse a filter-list profile, merging over the canonical defaults
///
/// Grammar (one directive per line, case-insensitive keywords, units
/// optional):
///
/// ```text
/// Preamp: -8.0 dB
/// Filter 1: ON PK Fc 34 Hz Gain -2.6 dB Q 0.800
/// ```
///
/// Blank, comment, or otherwise non-matching lines are ignored without
/// error. A repeated `Preamp:` line takes the last occurrence. Filter
/// numbers are 1-based; numbers outside the fixed band count are dropped.
/// Fields the grammar never sets keep their default values.
pub fn import_text(text: &str) -> EqState {
    parse_text(text).0
}

fn parse_text(text: &str) -> (EqState, usize) {
    let mut state = EqState::default();
    let mut matched = 0;

    for line in text.lines() {
        let line = line.trim();
        if let Some(rest) = strip_prefix_ignore_case(line, "preamp:") {
            if let Some(db) = parse_db_value(rest) {
                // Last occurrence wins
                state.preamp_db = db;
                matched += 1;
            }
        } else if let Some((index, band)) = parse_filter_line(line) {
            matched += 1;
            if let Some(slot) = state.bands.get_mut(index) {
                *slot = band;
            } else {
                debug!(index, "dropping filter line for out-of-range band");
            }
        }
    }

    (state, matched)
}

/// Import a profile in either supported format
///
/// Input whose first non-whitespace character is `{` takes the JSON path;
/// anything else is treated as a filter list. A filter list in which no
/// line matches the grammar at all is rejected as unrecognized.
pub fn import_str(text: &str) -> Result<EqState, ProfileError> {
    if text.trim_start().starts_with('{') {
        return import_json(text);
    }

    let (state, matched) = parse_text(text);
    if matched == 0 {
        return Err(ProfileError::UnrecognizedFormat);
    }
    info!(lines = matched, "imported filter-list profile");
    Ok(state)
}

/// Write the filter-list rendition of a state
///
/// Matches the common EqualizerAPO export convention, so the output loads
/// in third-party tools as well as back through `import_text`.
pub fn export_text(state: &EqState) -> String {
    let mut lines = Vec::with_capacity(state.bands.len() + 1);
    lines.push(format!("Preamp: {:.1} dB", state.preamp_db));

    for (i, band) in state.bands.iter().enumerate() {
        lines.push(format!(
            "Filter {}: {} {} Fc {} Hz Gain {:.1} dB Q {:.2}",
            i + 1,
            if band.enabled { "ON" } else { "OFF" },
            band.filter.tag(),
            band.freq,
            band.gain_db,
            band.q,
        ));
    }

    lines.join("\n") + "\n"
}

fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&line[prefix.len()..])
    } else {
        None
    }
}

/// Parse `<real>[ dB]`; anything else is not a grammar match
fn parse_db_value(text: &str) -> Option<f32> {
    let mut tokens = text.split_whitespace();
    let value: f32 = tokens.next()?.parse().ok()?;
    match tokens.next() {
        None => Some(value),
        Some(unit) if unit.eq_ignore_ascii_case("db") && tokens.next().is_none() => Some(value),
        Some(_) => None,
    }
}

/// Parse `Filter <n>: <ON|OFF> <TAG> Fc <real>[ Hz] Gain <real>[ dB] Q <real>`
///
/// Returns the 0-based band index and the parsed band, or `None` when the
/// line does not match the grammar.
fn parse_filter_line(line: &str) -> Option<(usize, Band)> {
    let mut tokens = line.split_whitespace();
    if !tokens.next()?.eq_ignore_ascii_case("filter") {
        return None;
    }

    // 1-based in the file
    let number: usize = tokens.next()?.trim_end_matches(':').parse().ok()?;
    let index = number.checked_sub(1)?;

    let enabled = {
        let token = tokens.next()?;
        if token.eq_ignore_ascii_case("on") {
            true
        } else if token.eq_ignore_ascii_case("off") {
            false
        } else {
            return None;
        }
    };
    let filter = FilterType::from_tag(tokens.next()?);

    let rest: Vec<&str> = tokens.collect();
    let mut freq: Option<f32> = None;
    let mut gain: Option<f32> = None;
    let mut q: Option<f32> = None;

    let mut i = 0;
    while i < rest.len() {
        let slot = if rest[i].eq_ignore_ascii_case("fc") {
            Some(&mut freq)
        } else if rest[i].eq_ignore_ascii_case("gain") {
            Some(&mut gain)
        } else if rest[i].eq_ignore_ascii_case("q") {
            Some(&mut q)
        } else {
            None
        };

        match slot {
            Some(slot) => {
                *slot = Some(rest.get(i + 1)?.parse().ok()?);
                i += 2;
            }
            // Unit token ("Hz", "dB") or an extension keyword
            None => i += 1,
        }
    }

    Some((
        index,
        Band {
            freq: freq?,
            gain_db: gain?,
            q: q?,
            filter,
            enabled,
        },
    ))
}
