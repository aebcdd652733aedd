//! Bullet spawner
//!
//! One independent Bernoulli trial per tick: roll `0..100`, spawn when the
//! roll is below the tier's spawn chance.

use glam::IVec2;
use rand::Rng;

use super::state::{Bullet, Field};
use crate::consts::SPAWN_ROLL_RANGE;
use crate::tuning::DifficultyParams;

/// Spawn policy for one difficulty tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spawner {
    /// Percent chance per tick (0 = never, 100+ = every tick)
    pub spawn_chance: u32,
    /// Horizontal velocity given to every spawned bullet
    pub bullet_speed: i32,
}

impl Spawner {
    pub fn new(spawn_chance: u32, bullet_speed: i32) -> Self {
        Self {
            spawn_chance,
            bullet_speed,
        }
    }

    pub fn from_params(params: &DifficultyParams) -> Self {
        Self::new(params.spawn_chance, params.bullet_speed)
    }

    /// Decide whether this tick emits a bullet
    ///
    /// New bullets enter at the right edge with a uniformly random row. When
    /// the bullet is at least as tall as the field the row range falls back
    /// to `0..height - 1`.
    pub fn roll<R: Rng>(&self, rng: &mut R, field: &Field, bullet_size: IVec2) -> Option<Bullet> {
        let roll = rng.random_range(0..SPAWN_ROLL_RANGE);
        if roll >= self.spawn_chance {
            return None;
        }

        let mut max_y = field.height - bullet_size.y;
        if max_y <= 0 {
            max_y = field.height - 1;
        }
        let y = if max_y > 0 {
            rng.random_range(0..max_y)
        } else {
            0
        };

        Some(Bullet::new(
            IVec2::new(field.width, y),
            bullet_size,
            self.bullet_speed,
        ))
    }
}
