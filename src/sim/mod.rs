//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or file access; side effects are reported as
//!   `GameEvent`s for the driver to act on

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, first_hit, plane_hit};
pub use input::{InputEvent, Key, apply_input};
pub use spawner::Spawner;
pub use state::{Bullet, Field, GameEvent, GamePhase, GameState, Plane, SpriteSizes};
pub use tick::tick;
