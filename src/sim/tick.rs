//! Fixed timestep simulation tick
//!
//! Core game loop that advances one playing step. Outside `Playing` the
//! tick does nothing; every other transition is driven by input or by the
//! explosion timer.

use super::collision::plane_hit;
use super::spawner::Spawner;
use super::state::{GamePhase, GameState};
use crate::consts::DECELERATION;

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;
    let params = state.params();

    // Plane: velocity, decay, bounds, then auto-scroll
    let field = state.field;
    let plane = &mut state.plane;
    plane.integrate();
    plane.decelerate(DECELERATION);
    plane.clamp_to(&field);
    plane.pos.x += params.auto_scroll;
    if plane.pos.x > field.width {
        // Lap: re-enter from the left edge at mid height
        plane.pos.x = 0;
        plane.pos.y = (field.height / 2).min(field.max_y(plane.size.y));
    } else {
        // Otherwise the plane rides the right edge
        plane.pos.x = plane.pos.x.min(field.max_x(plane.size.x));
    }

    // Bullets
    for bullet in &mut state.bullets {
        bullet.integrate();
    }
    state.bullets.retain(|b| !b.is_off_field());

    // Collision ends the tick; it takes precedence over level completion
    if plane_hit(&state.plane.bounds(), &state.bullets) {
        state.crash();
        return;
    }

    let spawner = Spawner::from_params(params);
    let bullet_size = state.sprites.bullet;
    if let Some(bullet) = spawner.roll(state.rng_mut(), &field, bullet_size) {
        state.bullets.push(bullet);
    }

    state.score = state.score.saturating_add(params.score_multiplier);

    if state.difficulty.completes_level(state.score) {
        state.complete_level();
    }
}
