//! Rendering collaborator interface
//!
//! Renderers receive a read-only `Frame` each display refresh and never
//! touch the simulation. `scene` turns a frame into an ordered sprite list,
//! `hud` into text lines.

pub mod hud;
pub mod scene;

pub use hud::hud_lines;
pub use scene::{DrawSprite, scene_sprites};

use crate::highscores::HighScores;
use crate::sim::state::{Bullet, Field, GamePhase, Plane, SpriteSizes};
use crate::tuning::Difficulty;
use crate::ui::ButtonId;

/// Everything a renderer may look at for one frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub phase: GamePhase,
    pub field: Field,
    pub sprites: SpriteSizes,
    pub plane: &'a Plane,
    pub bullets: &'a [Bullet],
    pub score: u32,
    pub difficulty: Difficulty,
    pub high_scores: &'a HighScores,
    pub mouse_control: bool,
    pub hovered: Option<ButtonId>,
}

/// A presentation backend
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Writes the HUD to the log whenever the screen changes
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_phase: Option<GamePhase>,
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        if self.last_phase == Some(frame.phase) {
            return;
        }
        self.last_phase = Some(frame.phase);
        for line in hud_lines(frame) {
            log::info!("{}", line);
        }
    }
}
