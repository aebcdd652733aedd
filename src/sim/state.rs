//! Game state and core simulation types
//!
//! `GameState` is the whole live session: the plane, the bullets, the score,
//! the current difficulty, the screen phase and the high-score table.

use glam::{IVec2, Vec2};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::highscores::HighScores;
use crate::tuning::{Difficulty, DifficultyParams};
use crate::ui::ButtonId;

/// Current screen-level state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Difficulty menu
    LevelSelect,
    /// Active gameplay (the only phase in which `tick` does anything)
    Playing,
    /// Game is paused
    Paused,
    /// Plane was hit; explosion is shown until the one-shot timer fires
    Exploding,
    /// Run ended
    GameOver,
    /// Score threshold reached on a tier with a higher tier above it
    LevelCompleted,
}

/// Notable things that happened during a tick or input event
///
/// Drained by the driver, which owns the side effects (persistence, audio,
/// timers) the simulation must not perform itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    SessionStarted {
        difficulty: Difficulty,
        generation: u64,
    },
    Crashed {
        difficulty: Difficulty,
        score: u32,
        generation: u64,
    },
    LevelCompleted {
        difficulty: Difficulty,
        score: u32,
    },
    ExplosionFinished,
    Paused,
    Resumed,
    MenuEntered,
}

/// Play-field dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub width: i32,
    pub height: i32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl Field {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Largest x an entity of width `w` may occupy
    pub fn max_x(&self, w: i32) -> i32 {
        (self.width - w).max(0)
    }

    /// Largest y an entity of height `h` may occupy
    pub fn max_y(&self, h: i32) -> i32 {
        (self.height - h).max(0)
    }
}

/// Bounding sizes of the sprites the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSizes {
    pub plane: IVec2,
    pub bullet: IVec2,
    pub explosion: IVec2,
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            plane: IVec2::new(200, 100),
            bullet: IVec2::new(60, 30),
            explosion: IVec2::new(100, 100),
        }
    }
}

/// The player's plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub pos: IVec2,
    pub vel: Vec2,
    pub size: IVec2,
    pub exploding: bool,
}

impl Plane {
    pub fn new(pos: IVec2, size: IVec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            exploding: false,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Apply velocity to position (truncating toward zero)
    pub fn integrate(&mut self) {
        self.pos.x = (self.pos.x as f32 + self.vel.x) as i32;
        self.pos.y = (self.pos.y as f32 + self.vel.y) as i32;
    }

    /// Linear decay of each velocity component toward zero, never overshooting
    pub fn decelerate(&mut self, amount: f32) {
        self.vel.x = decay_toward_zero(self.vel.x, amount);
        self.vel.y = decay_toward_zero(self.vel.y, amount);
    }

    /// Keep the plane inside the field; a clamped axis loses its velocity
    pub fn clamp_to(&mut self, field: &Field) {
        let max_y = field.max_y(self.size.y);
        if self.pos.y < 0 {
            self.pos.y = 0;
            self.vel.y = 0.0;
        } else if self.pos.y > max_y {
            self.pos.y = max_y;
            self.vel.y = 0.0;
        }

        let max_x = field.max_x(self.size.x);
        if self.pos.x < 0 {
            self.pos.x = 0;
            self.vel.x = 0.0;
        } else if self.pos.x > max_x {
            self.pos.x = max_x;
            self.vel.x = 0.0;
        }
    }

    /// Add a thrust impulse (keyboard control), clamped per axis
    pub fn thrust(&mut self, dir: Vec2, acceleration: f32, max_velocity: f32) {
        self.vel = (self.vel + dir * acceleration).clamp(
            Vec2::splat(-max_velocity),
            Vec2::splat(max_velocity),
        );
    }

    /// Steer toward a pointer so the plane ends up centred on it
    pub fn follow(&mut self, pointer: IVec2, gain: f32, max_velocity: f32) {
        let target = pointer - self.size / 2;
        let diff = (target - self.pos).as_vec2();
        self.vel = (diff * gain).clamp(Vec2::splat(-max_velocity), Vec2::splat(max_velocity));
    }
}

fn decay_toward_zero(v: f32, amount: f32) -> f32 {
    if v > 0.0 {
        (v - amount).max(0.0)
    } else if v < 0.0 {
        (v + amount).min(0.0)
    } else {
        v
    }
}

/// A bullet crossing the field right to left
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: IVec2,
    pub size: IVec2,
    /// Fixed for the bullet's lifetime (negative)
    pub vel_x: i32,
}

impl Bullet {
    pub fn new(pos: IVec2, size: IVec2, vel_x: i32) -> Self {
        Self { pos, size, vel_x }
    }

    pub fn integrate(&mut self) {
        self.pos.x += self.vel_x;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_pos_size(self.pos, self.size)
    }

    /// Right edge has passed the left edge of the field
    pub fn is_off_field(&self) -> bool {
        self.bounds().right() < 0
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub field: Field,
    pub sprites: SpriteSizes,
    /// Active tier (also the menu cursor while in `LevelSelect`)
    pub difficulty: Difficulty,
    pub score: u32,
    pub plane: Plane,
    /// Active bullets, unordered
    pub bullets: Vec<Bullet>,
    pub phase: GamePhase,
    pub high_scores: HighScores,
    /// Pointer steers the plane (otherwise the arrow keys do)
    pub mouse_control: bool,
    /// Menu button under the pointer
    pub hovered: Option<ButtonId>,
    /// Ticks simulated in the current session
    pub time_ticks: u64,
    pub seed: u64,
    rng: Pcg32,
    /// Bumped on every reset or menu return; stale timers compare against it
    generation: u64,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a state sitting on the level-select screen
    pub fn new(seed: u64, field: Field, sprites: SpriteSizes, high_scores: HighScores) -> Self {
        Self {
            field,
            sprites,
            difficulty: Difficulty::default(),
            score: 0,
            plane: Self::spawn_plane(&field, &sprites),
            bullets: Vec::new(),
            phase: GamePhase::LevelSelect,
            high_scores,
            mouse_control: true,
            hovered: None,
            time_ticks: 0,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            generation: 0,
            events: Vec::new(),
        }
    }

    fn spawn_plane(field: &Field, sprites: &SpriteSizes) -> Plane {
        let mut plane = Plane::new(IVec2::new(PLANE_START_X, field.height / 2), sprites.plane);
        plane.clamp_to(field);
        plane
    }

    pub fn params(&self) -> &'static DifficultyParams {
        self.difficulty.params()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start a fresh run at the current difficulty
    pub fn start_session(&mut self) {
        self.plane = Self::spawn_plane(&self.field, &self.sprites);
        self.bullets.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.mouse_control = true;
        self.hovered = None;
        self.generation += 1;
        self.phase = GamePhase::Playing;
        log::info!("Starting {} session", self.difficulty);
        self.push_event(GameEvent::SessionStarted {
            difficulty: self.difficulty,
            generation: self.generation,
        });
    }

    /// Move to the next tier (if any) and start a fresh run
    pub fn advance_level(&mut self) {
        if let Some(next) = self.difficulty.next() {
            self.difficulty = next;
        }
        self.start_session();
    }

    /// Change the menu selection
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulty != difficulty {
            log::debug!("Selected {}", difficulty);
        }
        self.difficulty = difficulty;
    }

    pub fn return_to_menu(&mut self) {
        self.generation += 1;
        self.hovered = None;
        self.phase = GamePhase::LevelSelect;
        log::debug!("Returned to level select");
        self.push_event(GameEvent::MenuEntered);
    }

    pub fn pause(&mut self) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::Paused;
            log::debug!("Paused");
            self.push_event(GameEvent::Paused);
        }
    }

    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.phase = GamePhase::Playing;
            log::debug!("Resumed");
            self.push_event(GameEvent::Resumed);
        }
    }

    pub fn toggle_mouse_control(&mut self) {
        self.mouse_control = !self.mouse_control;
        log::debug!(
            "Mouse control {}",
            if self.mouse_control { "on" } else { "off" }
        );
    }

    /// Plane was hit: start the explosion window and bank the score
    pub(crate) fn crash(&mut self) {
        self.plane.exploding = true;
        self.phase = GamePhase::Exploding;
        self.high_scores.record(self.difficulty, self.score);
        log::info!("Crashed on {} with score {}", self.difficulty, self.score);
        self.push_event(GameEvent::Crashed {
            difficulty: self.difficulty,
            score: self.score,
            generation: self.generation,
        });
    }

    pub(crate) fn complete_level(&mut self) {
        self.phase = GamePhase::LevelCompleted;
        self.high_scores.record(self.difficulty, self.score);
        log::info!("{} completed with score {}", self.difficulty, self.score);
        self.push_event(GameEvent::LevelCompleted {
            difficulty: self.difficulty,
            score: self.score,
        });
    }

    /// End of the explosion window
    ///
    /// Ignored unless `generation` matches the session that crashed and the
    /// session is still exploding. Returns whether the transition happened.
    pub fn finish_explosion(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.phase != GamePhase::Exploding {
            log::debug!(
                "Ignoring stale explosion timer (generation {} vs {}, phase {:?})",
                generation,
                self.generation,
                self.phase
            );
            return false;
        }
        self.phase = GamePhase::GameOver;
        self.push_event(GameEvent::ExplosionFinished);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_state() -> GameState {
        GameState::new(
            7,
            Field::default(),
            SpriteSizes::default(),
            HighScores::default(),
        )
    }

    #[test]
    fn test_new_state_is_on_menu() {
        let state = new_state();
        assert_eq!(state.phase, GamePhase::LevelSelect);
        assert_eq!(state.difficulty, Difficulty::Easy);
        assert_eq!(state.plane.pos, IVec2::new(PLANE_START_X, FIELD_HEIGHT / 2));
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_decelerate_never_overshoots() {
        let mut plane = Plane::new(IVec2::ZERO, IVec2::new(10, 10));
        plane.vel = Vec2::new(0.15, -0.05);
        plane.decelerate(0.1);
        assert!((plane.vel.x - 0.05).abs() < 1e-6);
        assert_eq!(plane.vel.y, 0.0);
        plane.decelerate(0.1);
        assert_eq!(plane.vel, Vec2::ZERO);
    }

    #[test]
    fn test_integrate_truncates_toward_zero() {
        let mut plane = Plane::new(IVec2::new(10, 10), IVec2::new(10, 10));
        plane.vel = Vec2::new(0.9, -0.9);
        plane.integrate();
        assert_eq!(plane.pos, IVec2::new(10, 9));
    }

    #[test]
    fn test_clamp_zeroes_velocity_on_clamped_axis() {
        let field = Field::new(100, 100);
        let mut plane = Plane::new(IVec2::new(-5, 95), IVec2::new(20, 10));
        plane.vel = Vec2::new(-3.0, 2.0);
        plane.clamp_to(&field);
        assert_eq!(plane.pos, IVec2::new(0, 90));
        assert_eq!(plane.vel, Vec2::ZERO);

        let mut plane = Plane::new(IVec2::new(50, 50), IVec2::new(20, 10));
        plane.vel = Vec2::new(1.0, 1.0);
        plane.clamp_to(&field);
        assert_eq!(plane.vel, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_thrust_is_clamped() {
        let mut plane = Plane::new(IVec2::ZERO, IVec2::new(10, 10));
        for _ in 0..100 {
            plane.thrust(Vec2::X, ACCELERATION, 5.0);
        }
        assert_eq!(plane.vel.x, 5.0);
        plane.thrust(Vec2::NEG_Y, ACCELERATION, 5.0);
        assert!((plane.vel.y + ACCELERATION).abs() < 1e-6);
    }

    #[test]
    fn test_follow_centres_on_pointer() {
        let mut plane = Plane::new(IVec2::new(100, 100), IVec2::new(20, 10));
        // Pointer exactly at the plane's centre: no motion
        plane.follow(IVec2::new(110, 105), ACCELERATION, 5.0);
        assert_eq!(plane.vel, Vec2::ZERO);
        // Far pointer saturates at max velocity
        plane.follow(IVec2::new(800, 0), ACCELERATION, 5.0);
        assert_eq!(plane.vel, Vec2::new(5.0, -5.0));
        // Near pointer is proportional
        plane.follow(IVec2::new(120, 105), ACCELERATION, 5.0);
        assert!((plane.vel.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_bullet_moves_left_and_leaves() {
        let mut bullet = Bullet::new(IVec2::new(5, 0), IVec2::new(10, 5), -8);
        bullet.integrate();
        assert_eq!(bullet.pos.x, -3);
        assert!(!bullet.is_off_field());
        bullet.integrate();
        assert_eq!(bullet.pos.x, -11);
        assert!(bullet.is_off_field());
    }

    #[test]
    fn test_start_session_resets() {
        let mut state = new_state();
        state.score = 42;
        state.mouse_control = false;
        state
            .bullets
            .push(Bullet::new(IVec2::new(1, 1), IVec2::new(1, 1), -6));
        let before = state.generation();
        state.start_session();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert!(state.mouse_control);
        assert!(state.bullets.is_empty());
        assert_eq!(state.generation(), before + 1);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::SessionStarted {
                difficulty: Difficulty::Easy,
                generation: before + 1
            }]
        );
    }

    #[test]
    fn test_advance_level_stops_at_hard() {
        let mut state = new_state();
        state.advance_level();
        assert_eq!(state.difficulty, Difficulty::Medium);
        state.advance_level();
        assert_eq!(state.difficulty, Difficulty::Hard);
        state.advance_level();
        assert_eq!(state.difficulty, Difficulty::Hard);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_pause_only_from_playing() {
        let mut state = new_state();
        state.pause();
        assert_eq!(state.phase, GamePhase::LevelSelect);
        state.start_session();
        state.pause();
        assert_eq!(state.phase, GamePhase::Paused);
        state.resume();
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_finish_explosion_ignores_stale_generation() {
        let mut state = new_state();
        state.start_session();
        state.crash();
        let crashed_in = state.generation();
        assert!(!state.finish_explosion(crashed_in + 1));
        assert_eq!(state.phase, GamePhase::Exploding);
        assert!(state.finish_explosion(crashed_in));
        assert_eq!(state.phase, GamePhase::GameOver);
        // Second firing is a no-op
        assert!(!state.finish_explosion(crashed_in));
    }

    #[test]
    fn test_finish_explosion_after_reset_is_ignored() {
        let mut state = new_state();
        state.start_session();
        state.crash();
        let crashed_in = state.generation();
        state.start_session();
        assert!(!state.finish_explosion(crashed_in));
        assert_eq!(state.phase, GamePhase::Playing);
    }
}
