//! Menu layout: named rectangular hit regions for each screen
//!
//! Only geometry lives here; drawing belongs to the renderer.

use glam::IVec2;

use crate::sim::collision::Aabb;
use crate::sim::state::{Field, GamePhase};
use crate::tuning::Difficulty;

const MENU_BUTTON_WIDTH: i32 = 300;
const MENU_BUTTON_HEIGHT: i32 = 60;
const MENU_FIRST_ROW_Y: i32 = 200;
const MENU_ROW_SPACING: i32 = 80;

const OVERLAY_BUTTON_WIDTH: i32 = 300;
const OVERLAY_BUTTON_HEIGHT: i32 = 50;
/// Row offsets from the vertical centre of the field
const OVERLAY_ROW_OFFSETS: [i32; 3] = [-20, 50, 120];

/// Clickable regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Level(Difficulty),
    Start,
    Resume,
    Menu,
    MouseToggle,
    Restart,
    NextLevel,
}

impl ButtonId {
    /// Caption shown on the button
    pub fn label(&self, mouse_control: bool) -> String {
        match self {
            ButtonId::Level(d) => d.as_str().to_string(),
            ButtonId::Start => "START GAME".to_string(),
            ButtonId::Resume => "Resume Game (P)".to_string(),
            ButtonId::Menu => "Level Select (L)".to_string(),
            ButtonId::MouseToggle => format!(
                "Toggle Mouse: {} (M)",
                if mouse_control { "ON" } else { "OFF" }
            ),
            ButtonId::Restart => "Restart (R)".to_string(),
            ButtonId::NextLevel => "Next Level (N)".to_string(),
        }
    }
}

/// A named hit region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub id: ButtonId,
    pub rect: Aabb,
}

/// Buttons shown on the given screen, top to bottom
pub fn buttons_for(phase: GamePhase, field: &Field) -> Vec<Button> {
    match phase {
        GamePhase::LevelSelect => {
            let x = (field.width - MENU_BUTTON_WIDTH) / 2;
            let ids = Difficulty::ALL
                .into_iter()
                .map(ButtonId::Level)
                .chain(std::iter::once(ButtonId::Start));
            ids.enumerate()
                .map(|(row, id)| Button {
                    id,
                    rect: Aabb::new(
                        x,
                        MENU_FIRST_ROW_Y + row as i32 * MENU_ROW_SPACING,
                        MENU_BUTTON_WIDTH,
                        MENU_BUTTON_HEIGHT,
                    ),
                })
                .collect()
        }
        GamePhase::Paused => {
            overlay(field, [ButtonId::Resume, ButtonId::Menu, ButtonId::MouseToggle])
        }
        GamePhase::GameOver => {
            overlay(field, [ButtonId::Restart, ButtonId::Menu, ButtonId::MouseToggle])
        }
        GamePhase::LevelCompleted => {
            overlay(field, [ButtonId::NextLevel, ButtonId::Restart, ButtonId::Menu])
        }
        GamePhase::Playing | GamePhase::Exploding => Vec::new(),
    }
}

fn overlay(field: &Field, ids: [ButtonId; 3]) -> Vec<Button> {
    let x = field.width / 2 - OVERLAY_BUTTON_WIDTH / 2;
    let cy = field.height / 2;
    ids.into_iter()
        .zip(OVERLAY_ROW_OFFSETS)
        .map(|(id, dy)| Button {
            id,
            rect: Aabb::new(x, cy + dy, OVERLAY_BUTTON_WIDTH, OVERLAY_BUTTON_HEIGHT),
        })
        .collect()
}

/// Button under `point` on the given screen
pub fn hit_test(phase: GamePhase, field: &Field, point: IVec2) -> Option<ButtonId> {
    buttons_for(phase, field)
        .into_iter()
        .find(|b| b.rect.contains(point))
        .map(|b| b.id)
}
