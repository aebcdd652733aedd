//! Single-owner game driver
//!
//! `App` owns the session and every collaborator with side effects. Input
//! and time are fed in from one thread, so a tick never sees a half-applied
//! input event and the explosion timer never fires during a tick.

use crate::assets::{AssetSource, resolve_sprites};
use crate::audio::{AudioManager, SoundEffect};
use crate::persistence::{self, ScoreStore};
use crate::platform::{FrameClock, OneShot};
use crate::renderer::{Frame, Renderer};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, InputEvent, apply_input, tick};

pub struct App {
    state: GameState,
    settings: Settings,
    store: Box<dyn ScoreStore>,
    audio: AudioManager,
    clock: FrameClock,
    explosion_timer: Option<OneShot>,
    now_ms: u64,
}

impl App {
    /// Build the app, loading high scores and resolving sprite sizes
    pub fn new(
        settings: Settings,
        mut store: Box<dyn ScoreStore>,
        assets: &dyn AssetSource,
        mut audio: AudioManager,
    ) -> Self {
        let high_scores = persistence::load_or_default(store.as_mut());
        let sprites = resolve_sprites(assets);
        let seed = settings.seed.unwrap_or_else(time_seed);
        log::info!("Seed: {}", seed);

        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        if audio.is_muted() {
            log::info!("Audio muted");
        }

        Self {
            state: GameState::new(seed, settings.field(), sprites, high_scores),
            clock: FrameClock::new(settings.tick_period_ms),
            settings,
            store,
            audio,
            explosion_timer: None,
            now_ms: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for hosts and tests that stage a situation
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Milliseconds of game time fed through `update`
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Milliseconds until the next tick is due
    pub fn until_next_tick_ms(&self) -> u64 {
        self.clock.until_next_ms()
    }

    pub fn explosion_pending(&self) -> bool {
        self.explosion_timer.is_some()
    }

    /// Apply one input event between ticks
    pub fn handle_input(&mut self, event: InputEvent) {
        apply_input(&mut self.state, event);
        self.process_events();
    }

    /// Start a fresh run at the current difficulty
    pub fn restart(&mut self) {
        self.state.start_session();
        self.process_events();
    }

    /// Advance time: run due ticks, then fire the explosion timer if due.
    /// Returns the number of ticks run.
    pub fn update(&mut self, elapsed_ms: u64) -> u32 {
        self.now_ms += elapsed_ms;
        let ticks = self.clock.advance(elapsed_ms);
        for _ in 0..ticks {
            tick(&mut self.state);
            self.process_events();
        }

        if let Some(timer) = OneShot::take_due(&mut self.explosion_timer, self.now_ms) {
            self.state.finish_explosion(timer.generation);
            self.process_events();
        }
        ticks
    }

    fn process_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Crashed { generation, .. } => {
                    self.audio.play(SoundEffect::Explosion);
                    self.save_high_scores();
                    self.explosion_timer = Some(OneShot::arm(
                        self.now_ms,
                        self.settings.explosion_duration_ms,
                        generation,
                    ));
                }
                GameEvent::SessionStarted { .. } | GameEvent::MenuEntered => {
                    if self.explosion_timer.take().is_some() {
                        log::debug!("Cancelled pending explosion timer");
                    }
                    self.clock.reset();
                }
                GameEvent::ExplosionFinished => {
                    log::info!("Game over (score {})", self.state.score);
                }
                GameEvent::LevelCompleted { .. } | GameEvent::Paused | GameEvent::Resumed => {}
            }
        }
    }

    /// Write the score table; failures are logged and play continues
    pub fn save_high_scores(&mut self) {
        if let Err(e) = self.store.save(&self.state.high_scores) {
            log::warn!("Could not save high scores: {}", e);
        }
    }

    /// Read-only view for a renderer
    pub fn frame(&self) -> Frame<'_> {
        let state = &self.state;
        Frame {
            phase: state.phase,
            field: state.field,
            sprites: state.sprites,
            plane: &state.plane,
            bullets: &state.bullets,
            score: state.score,
            difficulty: state.difficulty,
            high_scores: &state.high_scores,
            mouse_control: state.mouse_control,
            hovered: state.hovered,
        }
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        renderer.render(&self.frame());
    }

    /// Flush the score table before exit
    pub fn shutdown(&mut self) {
        log::info!("Shutting down");
        self.save_high_scores();
    }
}

fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
