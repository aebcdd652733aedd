//! Data-driven game balance
//!
//! Every per-difficulty number lives in [`DIFFICULTY_TABLE`]; nothing else
//! branches on the tier.

use serde::{Deserialize, Serialize};

/// Difficulty tier, ordered by increasing challenge
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Constants for one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyParams {
    /// Horizontal drift added to the plane every tick
    pub auto_scroll: i32,
    /// Velocity clamp for player control (per axis)
    pub max_velocity: f32,
    /// Percent chance of spawning a bullet on a tick
    pub spawn_chance: u32,
    /// Bullet horizontal velocity (negative = leftward)
    pub bullet_speed: i32,
    /// Score added per playing tick
    pub score_multiplier: u32,
    /// Score at which the level is completed (None = no higher tier)
    pub advance_threshold: Option<u32>,
}

/// Number of difficulty tiers
pub const TIER_COUNT: usize = 3;

/// Indexed by `Difficulty as usize`
pub const DIFFICULTY_TABLE: [DifficultyParams; TIER_COUNT] = [
    DifficultyParams {
        auto_scroll: 2,
        max_velocity: 5.0,
        spawn_chance: 3,
        bullet_speed: -6,
        score_multiplier: 1,
        advance_threshold: Some(500),
    },
    DifficultyParams {
        auto_scroll: 3,
        max_velocity: 6.0,
        spawn_chance: 5,
        bullet_speed: -8,
        score_multiplier: 2,
        advance_threshold: Some(1000),
    },
    DifficultyParams {
        auto_scroll: 4,
        max_velocity: 7.0,
        spawn_chance: 8,
        bullet_speed: -12,
        score_multiplier: 3,
        advance_threshold: None,
    },
];

impl Difficulty {
    pub const ALL: [Difficulty; TIER_COUNT] =
        [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Name used in the score file and on screen
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    /// Parse an exact tier name (as written by `as_str`)
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == s)
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }

    pub fn params(&self) -> &'static DifficultyParams {
        &DIFFICULTY_TABLE[self.index()]
    }

    /// Next tier up, if any
    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// True when reaching `score` completes this tier
    pub fn completes_level(&self, score: u32) -> bool {
        self.params()
            .advance_threshold
            .is_some_and(|threshold| score >= threshold)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
