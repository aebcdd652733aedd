//! High-score persistence
//!
//! The score table is loaded once at startup and rewritten in full on every
//! game over. Stores report failures; the caller decides how to degrade.

mod file;
mod memory;

pub use file::FileScoreStore;
pub use memory::MemoryScoreStore;

use crate::error::Result;
use crate::highscores::HighScores;

/// Backing storage for the high-score table
pub trait ScoreStore {
    /// Load the table. A store with nothing saved yet yields all zeros.
    fn load(&mut self) -> Result<HighScores>;

    /// Replace the stored table
    fn save(&mut self, scores: &HighScores) -> Result<()>;
}

/// Load, falling back to an empty table on error
pub fn load_or_default(store: &mut dyn ScoreStore) -> HighScores {
    match store.load() {
        Ok(scores) => scores,
        Err(e) => {
            log::warn!("Could not load high scores, starting fresh: {}", e);
            HighScores::default()
        }
    }
}
