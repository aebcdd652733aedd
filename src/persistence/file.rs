//! Text-file score store

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::ScoreStore;
use crate::error::{DodgeError, Result};
use crate::highscores::HighScores;

/// Scores kept in a `NAME:score` text file
#[derive(Debug, Clone)]
pub struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&mut self) -> Result<HighScores> {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                let scores = HighScores::from_text(&text);
                log::info!("Loaded high scores from {}", self.path.display());
                Ok(scores)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No high-score file at {}, starting fresh", self.path.display());
                Ok(HighScores::default())
            }
            Err(e) => Err(DodgeError::io(&self.path, e)),
        }
    }

    fn save(&mut self, scores: &HighScores) -> Result<()> {
        fs::write(&self.path, scores.to_text()).map_err(|e| DodgeError::io(&self.path, e))?;
        log::info!("High scores saved to {}", self.path.display());
        Ok(())
    }
}
