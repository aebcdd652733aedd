//! Driver-level flows: events, timers, persistence and focus handling

use std::cell::RefCell;
use std::rc::Rc;

use glam::IVec2;
use plane_dodge::assets::BundledAssets;
use plane_dodge::audio::AudioManager;
use plane_dodge::persistence::{FileScoreStore, MemoryScoreStore, ScoreStore};
use plane_dodge::sim::{Bullet, GamePhase, InputEvent, Key};
use plane_dodge::{App, Difficulty, HighScores, Result, Settings};

/// Memory store the test can still inspect after handing it to the app
#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<MemoryScoreStore>>);

impl SharedStore {
    fn with(store: MemoryScoreStore) -> Self {
        Self(Rc::new(RefCell::new(store)))
    }

    fn saves(&self) -> usize {
        self.0.borrow().saves
    }

    fn text(&self) -> Option<String> {
        self.0.borrow().text.clone()
    }
}

impl ScoreStore for SharedStore {
    fn load(&mut self) -> Result<HighScores> {
        self.0.borrow_mut().load()
    }

    fn save(&mut self, scores: &HighScores) -> Result<()> {
        self.0.borrow_mut().save(scores)
    }
}

fn settings() -> Settings {
    Settings {
        seed: Some(7),
        ..Default::default()
    }
}

fn app_with(settings: Settings, store: impl ScoreStore + 'static) -> App {
    App::new(
        settings,
        Box::new(store),
        &BundledAssets::default(),
        AudioManager::default(),
    )
}

fn start(app: &mut App, difficulty: Difficulty) {
    app.state_mut().select_difficulty(difficulty);
    app.handle_input(InputEvent::Key(Key::Enter));
    assert_eq!(app.state().phase, GamePhase::Playing);
}

/// Put a bullet where the plane will be after the next tick
fn stage_crash(app: &mut App, score: u32) {
    let state = app.state_mut();
    state.score = score;
    state.plane.pos = IVec2::new(100, 300);
    state.plane.vel = glam::Vec2::ZERO;
    state.bullets.clear();
    state
        .bullets
        .push(Bullet::new(IVec2::new(200, 320), IVec2::new(60, 30), -6));
}

#[test]
fn test_startup_loads_saved_scores() {
    let store = SharedStore::with(MemoryScoreStore::with_text("EASY:120\nMEDIUM:40\nHARD:0\n"));
    let app = app_with(settings(), store);
    assert_eq!(app.state().phase, GamePhase::LevelSelect);
    assert_eq!(app.state().high_scores.get(Difficulty::Easy), 120);
    assert_eq!(app.state().high_scores.get(Difficulty::Medium), 40);
}

#[test]
fn test_crash_explodes_then_game_over() {
    let store = SharedStore::default();
    let mut app = app_with(settings(), store.clone());
    start(&mut app, Difficulty::Easy);
    stage_crash(&mut app, 120);

    assert_eq!(app.update(20), 1);
    assert_eq!(app.state().phase, GamePhase::Exploding);
    assert!(app.state().plane.exploding);
    assert!(app.explosion_pending());
    assert_eq!(app.state().score, 120);
    assert_eq!(store.saves(), 1);
    assert_eq!(store.text().as_deref(), Some("EASY:120\nMEDIUM:0\nHARD:0\n"));

    // Ticks are inert while exploding
    app.update(999);
    assert_eq!(app.state().phase, GamePhase::Exploding);
    assert_eq!(app.state().score, 120);

    app.update(1);
    assert_eq!(app.state().phase, GamePhase::GameOver);
    assert!(!app.explosion_pending());
    assert_eq!(store.saves(), 1);
}

#[test]
fn test_restart_cancels_pending_explosion() {
    let mut app = app_with(settings(), SharedStore::default());
    start(&mut app, Difficulty::Easy);
    stage_crash(&mut app, 10);
    app.update(20);
    assert_eq!(app.state().phase, GamePhase::Exploding);

    app.restart();
    assert!(!app.explosion_pending());
    assert_eq!(app.state().phase, GamePhase::Playing);
    assert_eq!(app.state().score, 0);

    app.handle_input(InputEvent::Key(Key::P));
    app.update(5000);
    assert_eq!(app.state().phase, GamePhase::Paused);
}

#[test]
fn test_stale_explosion_timer_is_ignored() {
    let mut app = app_with(settings(), SharedStore::default());
    start(&mut app, Difficulty::Medium);
    stage_crash(&mut app, 10);
    app.update(20);
    assert!(app.explosion_pending());

    // Leave without going through the driver; the timer is still armed
    app.state_mut().return_to_menu();
    app.update(2000);
    assert!(!app.explosion_pending());
    assert_eq!(app.state().phase, GamePhase::LevelSelect);
}

#[test]
fn test_level_completion_and_advance() {
    let store = SharedStore::default();
    let mut app = app_with(settings(), store.clone());
    start(&mut app, Difficulty::Easy);
    app.state_mut().score = 499;
    app.state_mut().bullets.clear();

    app.update(20);
    assert_eq!(app.state().phase, GamePhase::LevelCompleted);
    assert_eq!(app.state().score, 500);
    assert_eq!(app.state().high_scores.get(Difficulty::Easy), 500);
    // Kept in memory only until the next game over or shutdown
    assert_eq!(store.saves(), 0);

    app.update(200);
    assert_eq!(app.state().score, 500);

    app.handle_input(InputEvent::Key(Key::N));
    assert_eq!(app.state().phase, GamePhase::Playing);
    assert_eq!(app.state().difficulty, Difficulty::Medium);
    assert_eq!(app.state().score, 0);

    app.shutdown();
    assert_eq!(store.saves(), 1);
    assert_eq!(store.text().as_deref(), Some("EASY:500\nMEDIUM:0\nHARD:0\n"));
}

#[test]
fn test_focus_loss_pauses() {
    let mut app = app_with(settings(), SharedStore::default());
    start(&mut app, Difficulty::Easy);
    app.handle_input(InputEvent::FocusLost);
    assert_eq!(app.state().phase, GamePhase::Paused);

    let score = app.state().score;
    app.update(400);
    assert_eq!(app.state().score, score);

    app.handle_input(InputEvent::Key(Key::P));
    assert_eq!(app.state().phase, GamePhase::Playing);
}

#[test]
fn test_focus_loss_pauses_regardless_of_settings_file() {
    // Unknown keys in a settings file are ignored
    let settings = Settings::from_json(r#"{ "seed": 7, "pause_on_focus_loss": false }"#).unwrap();
    let mut app = app_with(settings, SharedStore::default());
    start(&mut app, Difficulty::Easy);
    app.handle_input(InputEvent::FocusLost);
    assert_eq!(app.state().phase, GamePhase::Paused);
}

#[test]
fn test_failing_store_keeps_playing() {
    let mut app = app_with(settings(), MemoryScoreStore::failing());
    start(&mut app, Difficulty::Easy);
    stage_crash(&mut app, 33);
    app.update(20);
    assert_eq!(app.state().phase, GamePhase::Exploding);
    assert_eq!(app.state().high_scores.get(Difficulty::Easy), 33);

    app.update(1000);
    assert_eq!(app.state().phase, GamePhase::GameOver);

    app.handle_input(InputEvent::Key(Key::R));
    assert_eq!(app.state().phase, GamePhase::Playing);
}

#[test]
fn test_scores_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("game_scores.txt");

    let mut app = app_with(settings(), FileScoreStore::new(&path));
    start(&mut app, Difficulty::Easy);
    stage_crash(&mut app, 120);
    app.update(20);
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "EASY:120\nMEDIUM:0\nHARD:0\n"
    );

    // A lower score never replaces the best
    app.update(1000);
    app.handle_input(InputEvent::Key(Key::R));
    stage_crash(&mut app, 50);
    app.update(20);

    let reloaded = app_with(settings(), FileScoreStore::new(&path));
    assert_eq!(reloaded.state().high_scores.get(Difficulty::Easy), 120);
}

#[test]
fn test_partial_period_reports_time_to_next_tick() {
    let mut app = app_with(settings(), SharedStore::default());
    start(&mut app, Difficulty::Easy);
    assert_eq!(app.until_next_tick_ms(), 20);
    assert_eq!(app.update(15), 0);
    assert_eq!(app.until_next_tick_ms(), 5);
    assert_eq!(app.update(5), 1);
    assert_eq!(app.until_next_tick_ms(), 20);
}

#[test]
fn test_long_stall_is_capped() {
    let mut app = app_with(settings(), SharedStore::default());
    start(&mut app, Difficulty::Hard);
    app.state_mut().bullets.clear();
    app.state_mut().plane.pos = IVec2::new(0, 0);
    // Spawned bullets cannot reach the plane within eight ticks
    assert_eq!(app.update(10_000), 8);
    assert_eq!(app.state().score, 24);
}

#[test]
fn test_autopilot_session_respects_bounds() {
    use plane_dodge::sim::autopilot;

    let mut app = app_with(settings(), SharedStore::default());
    start(&mut app, Difficulty::Medium);
    for _ in 0..2000 {
        if let Some(target) = autopilot::steer(app.state()) {
            app.handle_input(InputEvent::PointerMoved(target));
        }
        app.update(20);

        let state = app.state();
        let plane = &state.plane;
        assert!(plane.pos.x >= 0 && plane.pos.x <= state.field.max_x(plane.size.x));
        assert!(plane.pos.y >= 0 && plane.pos.y <= state.field.max_y(plane.size.y));
        if state.phase == GamePhase::GameOver {
            break;
        }
    }
}
