//! Idle/demo mode steering
//!
//! Produces a pointer position that dodges the nearest bullet heading into
//! the plane's lane. Drives the headless demo; the simulation never calls it.

use glam::IVec2;

use super::state::{GamePhase, GameState};

/// Pointer target for this tick (None outside `Playing`)
pub fn steer(state: &GameState) -> Option<IVec2> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    let plane = state.plane.bounds();
    let centre = IVec2::new(plane.x + plane.width / 2, plane.y + plane.height / 2);
    // Watch a lane a bit taller than the plane itself
    let margin = (plane.height / 2) as i64;

    let threat = state
        .bullets
        .iter()
        .map(|b| b.bounds())
        .filter(|b| b.right() >= plane.x as i64)
        .filter(|b| (b.y as i64) < plane.bottom() + margin && b.bottom() > plane.y as i64 - margin)
        .min_by_key(|b| b.x);

    let Some(threat) = threat else {
        // Nothing incoming: drift back toward mid height
        return Some(IVec2::new(centre.x, state.field.height / 2));
    };

    let threat_mid = threat.y + threat.height / 2;
    let room_above = plane.y;
    let room_below = state.field.height - (plane.y + plane.height);
    let mut go_up = threat_mid >= centre.y;
    if go_up && room_above < plane.height / 4 {
        go_up = false;
    } else if !go_up && room_below < plane.height / 4 {
        go_up = true;
    }

    let target_y = if go_up {
        centre.y - state.field.height
    } else {
        centre.y + state.field.height
    };
    Some(IVec2::new(centre.x, target_y))
}
