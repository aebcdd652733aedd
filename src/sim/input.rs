//! Input events and the screen transitions they drive
//!
//! Events are applied between ticks, never during one.

use glam::{IVec2, Vec2};

use super::state::{GamePhase, GameState};
use crate::consts::ACCELERATION;
use crate::tuning::Difficulty;
use crate::ui::{self, ButtonId};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Escape,
    /// Pause toggle
    P,
    /// Mouse-control toggle
    M,
    /// Restart
    R,
    /// Next level
    N,
    /// Level select
    L,
}

/// Everything the window layer can deliver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(Key),
    PointerMoved(IVec2),
    Click(IVec2),
    FocusLost,
}

/// Apply one input event to the session
pub fn apply_input(state: &mut GameState, event: InputEvent) {
    match event {
        InputEvent::Key(key) => handle_key(state, key),
        InputEvent::PointerMoved(point) => handle_pointer(state, point),
        InputEvent::Click(point) => handle_click(state, point),
        InputEvent::FocusLost => {
            if state.phase == GamePhase::Playing {
                log::info!("Auto-paused (focus lost)");
                state.pause();
            }
        }
    }
}

fn handle_key(state: &mut GameState, key: Key) {
    match state.phase {
        GamePhase::LevelSelect => match key {
            Key::Up => step_selection(state, -1),
            Key::Down => step_selection(state, 1),
            Key::Enter => state.start_session(),
            _ => {}
        },
        GamePhase::Paused => match key {
            Key::P => state.resume(),
            Key::Escape => state.return_to_menu(),
            Key::M => state.toggle_mouse_control(),
            _ => {}
        },
        GamePhase::GameOver => match key {
            Key::R => state.start_session(),
            Key::L | Key::Escape => state.return_to_menu(),
            Key::M => state.toggle_mouse_control(),
            _ => {}
        },
        GamePhase::LevelCompleted => match key {
            Key::N => state.advance_level(),
            Key::R => state.start_session(),
            Key::L | Key::Escape => state.return_to_menu(),
            _ => {}
        },
        GamePhase::Playing => match key {
            Key::P => state.pause(),
            Key::Escape => state.return_to_menu(),
            Key::M => state.toggle_mouse_control(),
            Key::Up | Key::Down | Key::Left | Key::Right if !state.mouse_control => {
                let dir = match key {
                    Key::Up => Vec2::NEG_Y,
                    Key::Down => Vec2::Y,
                    Key::Left => Vec2::NEG_X,
                    _ => Vec2::X,
                };
                let max_velocity = state.params().max_velocity;
                state.plane.thrust(dir, ACCELERATION, max_velocity);
            }
            _ => {}
        },
        GamePhase::Exploding => {}
    }
}

fn step_selection(state: &mut GameState, delta: isize) {
    let last = Difficulty::ALL.len() as isize - 1;
    let index = (state.difficulty.index() as isize + delta).clamp(0, last);
    if let Some(difficulty) = Difficulty::from_index(index as usize) {
        state.select_difficulty(difficulty);
    }
}

fn handle_pointer(state: &mut GameState, point: IVec2) {
    match state.phase {
        GamePhase::LevelSelect => {
            state.hovered = ui::hit_test(state.phase, &state.field, point);
        }
        GamePhase::Playing if state.mouse_control => {
            let max_velocity = state.params().max_velocity;
            state.plane.follow(point, ACCELERATION, max_velocity);
        }
        _ => {}
    }
}

fn handle_click(state: &mut GameState, point: IVec2) {
    let Some(button) = ui::hit_test(state.phase, &state.field, point) else {
        return;
    };
    log::debug!("Clicked {:?} on {:?}", button, state.phase);
    match button {
        ButtonId::Level(difficulty) => state.select_difficulty(difficulty),
        ButtonId::Start | ButtonId::Restart => state.start_session(),
        ButtonId::Resume => state.resume(),
        ButtonId::Menu => state.return_to_menu(),
        ButtonId::MouseToggle => state.toggle_mouse_control(),
        ButtonId::NextLevel => state.advance_level(),
    }
}
