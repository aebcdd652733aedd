//! Plane Dodge - a single-screen arcade dodger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, screen states)
//! - `tuning`: Data-driven difficulty table
//! - `highscores`: Per-difficulty best scores and their text format
//! - `persistence`: Load/save collaborators for the score table
//! - `platform`: Fixed-timestep clock and one-shot timers
//! - `app`: Single-owner driver wiring the above together
//! - `renderer`, `assets`, `audio`: Interfaces to the presentation collaborators

pub mod app;
pub mod assets;
pub mod audio;
pub mod error;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use app::App;
pub use error::{DodgeError, Result};
pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::Difficulty;

/// Game configuration constants
pub mod consts {
    /// Play-field dimensions
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;

    /// Simulation tick period (50 Hz)
    pub const TICK_PERIOD_MS: u64 = 20;
    /// Maximum ticks run per `update` call to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// How long the explosion is shown before the game-over screen
    pub const EXPLOSION_DURATION_MS: u64 = 1000;

    /// Plane spawn column (row is the vertical centre of the field)
    pub const PLANE_START_X: i32 = 100;
    /// Velocity gained per thrust key press / pointer-follow gain
    pub const ACCELERATION: f32 = 0.2;
    /// Linear velocity decay per tick
    pub const DECELERATION: f32 = 0.1;

    /// Chance rolls are drawn from `0..SPAWN_ROLL_RANGE`
    pub const SPAWN_ROLL_RANGE: u32 = 100;

    /// Default high-score file
    pub const SCORES_FILE: &str = "game_scores.txt";
}
