//! In-memory score store (headless runs and tests)

use super::ScoreStore;
use crate::error::{DodgeError, Result};
use crate::highscores::HighScores;

/// Keeps the serialized table in a string
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    /// Last saved text, `None` until the first save
    pub text: Option<String>,
    /// Number of successful saves
    pub saves: usize,
    /// Make every save fail
    pub fail_writes: bool,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-existing file contents
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// A store whose writes always fail
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn load(&mut self) -> Result<HighScores> {
        Ok(self
            .text
            .as_deref()
            .map(HighScores::from_text)
            .unwrap_or_default())
    }

    fn save(&mut self, scores: &HighScores) -> Result<()> {
        if self.fail_writes {
            return Err(DodgeError::io(
                "<memory>",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "writes disabled"),
            ));
        }
        self.text = Some(scores.to_text());
        self.saves += 1;
        Ok(())
    }
}
