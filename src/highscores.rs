//! Per-difficulty high scores
//!
//! Stored as text, one `NAME:score` record per line, tiers in order.

use serde::{Deserialize, Serialize};

use crate::error::{DodgeError, Result};
use crate::tuning::{Difficulty, TIER_COUNT};

/// Best score ever reached on each difficulty (0 if never played)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HighScores {
    scores: [u32; TIER_COUNT],
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, difficulty: Difficulty) -> u32 {
        self.scores[difficulty.index()]
    }

    /// Overwrite a tier's score (used when loading)
    pub fn set(&mut self, difficulty: Difficulty, score: u32) {
        self.scores[difficulty.index()] = score;
    }

    /// Keep `score` if it beats the current best. Returns true if it did.
    pub fn record(&mut self, difficulty: Difficulty, score: u32) -> bool {
        let best = &mut self.scores[difficulty.index()];
        if score > *best {
            *best = score;
            true
        } else {
            false
        }
    }

    /// Tiers with their best scores, easiest first
    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, u32)> + '_ {
        Difficulty::ALL.into_iter().map(|d| (d, self.get(d)))
    }

    /// Parse the score file, skipping (and logging) lines that don't parse
    pub fn from_text(text: &str) -> Self {
        let mut scores = Self::new();
        for (i, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match parse_record(i + 1, line) {
                Ok((difficulty, score)) => scores.set(difficulty, score),
                Err(e) => log::warn!("Skipping high-score record: {}", e),
            }
        }
        scores
    }

    /// Render every tier, one record per line
    pub fn to_text(&self) -> String {
        self.iter()
            .map(|(d, score)| format!("{}:{}\n", d.as_str(), score))
            .collect()
    }
}

/// Parse one `NAME:score` line (1-based `line` for messages)
pub fn parse_record(line: usize, content: &str) -> Result<(Difficulty, u32)> {
    let malformed = || DodgeError::MalformedRecord {
        line,
        content: content.to_string(),
    };

    let (name, score) = content.trim().split_once(':').ok_or_else(malformed)?;
    if score.contains(':') {
        return Err(malformed());
    }
    let difficulty = Difficulty::from_name(name.trim())
        .ok_or_else(|| DodgeError::UnknownDifficulty(name.trim().to_string()))?;
    let score = score.trim().parse::<u32>().map_err(|_| malformed())?;
    Ok((difficulty, score))
}
