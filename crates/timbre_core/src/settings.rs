//! Persistent Settings Management
//!
//! Saves the last authored EQ state and user-saved profiles to disk.
//!
//! # Storage Locations
//! - Linux: `~/.config/timbre/settings.json`
//! - Windows: `%APPDATA%\timbre\settings.json`
//! - macOS: `~/Library/Application Support/timbre/settings.json`

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use timbre_dsp::EqState;

/// User-saved EQ profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedProfile {
    pub name: String,
    pub state: EqState,
    pub created_at: DateTime<Utc>,
}

/// Root settings structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimbreSettings {
    /// EQ state restored on next launch
    #[serde(default)]
    pub last_state: EqState,

    /// Name of the preset or saved profile currently shown as active
    #[serde(default)]
    pub active_profile: Option<String>,

    /// Profiles the user has saved locally
    #[serde(default)]
    pub saved_profiles: Vec<SavedProfile>,
}

impl Default for TimbreSettings {
    fn default() -> Self {
        Self {
            last_state: EqState::default(),
            active_profile: Some("Flat".to_string()),
            saved_profiles: Vec::new(),
        }
    }
}

impl TimbreSettings {
    /// Load settings from disk, or return default if missing/corrupt
    pub fn load() -> Self {
        let path = Self::get_config_path();

        if let Some(path) = path {
            if path.exists() {
                match fs::File::open(&path) {
                    Ok(file) => match serde_json::from_reader(file) {
                        Ok(settings) => {
                            info!("Settings loaded from {:?}", path);
                            return settings;
                        }
                        Err(e) => {
                            error!("Failed to parse settings file: {}", e);
                        }
                    },
                    Err(e) => {
                        error!("Failed to open settings file: {}", e);
                    }
                }
            }
        }

        info!("Using default settings");
        Self::default()
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), String> {
        let path = Self::get_config_path().ok_or("Could not determine config path")?;

        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let file = fs::File::create(&path).map_err(|e| e.to_string())?;
        serde_json::to_writer_pretty(file, self).map_err(|e| e.to_string())?;

        info!("Settings saved to {:?}", path);
        Ok(())
    }

    /// Get the platform-specific configuration file path
    fn get_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "timbre", "timbre")
            .map(|proj| proj.config_dir().join("settings.json"))
    }
}
