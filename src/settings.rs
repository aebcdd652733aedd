//! Game settings and preferences
//!
//! Read from an optional JSON file; any missing field takes its default.
//! The difficulty table is fixed and not part of the settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{DodgeError, Result};
use crate::sim::state::Field;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play field ===
    pub field_width: i32,
    pub field_height: i32,

    // === Timing ===
    /// Simulation tick period
    pub tick_period_ms: u64,
    /// Explosion shown for this long before the game-over screen
    pub explosion_duration_ms: u64,

    // === Storage ===
    /// High-score file
    pub scores_path: PathBuf,

    /// Fixed RNG seed (None = derive from the clock)
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    // === Headless runner ===
    /// Upper bound on ticks for the demo session
    pub max_demo_ticks: u64,
    /// Pace the demo at the tick period instead of running flat out
    pub realtime_demo: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            tick_period_ms: TICK_PERIOD_MS,
            explosion_duration_ms: EXPLOSION_DURATION_MS,

            scores_path: PathBuf::from(SCORES_FILE),
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            max_demo_ticks: 3000,
            realtime_demo: false,
        }
    }
}

impl Settings {
    pub fn field(&self) -> Field {
        Field::new(self.field_width, self.field_height)
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a file
    pub fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| DodgeError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Load settings, falling back to defaults on any error
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Self::default();
        };
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file: {}", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|e| DodgeError::io(path, e))?;
        log::info!("Settings saved");
        Ok(())
    }
}
