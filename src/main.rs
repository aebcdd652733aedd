//! Plane Dodge entry point
//!
//! Native builds run a headless demo: the autopilot flies a session on the
//! real simulation and scheduler, the HUD is logged, and the high-score file
//! is updated as in a normal game.
//!
//! Usage: `plane-dodge [settings.json]` (log level via `RUST_LOG`)

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use plane_dodge::assets::BundledAssets;
    use plane_dodge::audio::AudioManager;
    use plane_dodge::persistence::FileScoreStore;
    use plane_dodge::renderer::LogRenderer;
    use plane_dodge::sim::{InputEvent, Key};
    use plane_dodge::{App, Settings};

    env_logger::init();
    log::info!("Plane Dodge (headless) starting...");

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(settings_path.as_deref());
    let store = FileScoreStore::new(&settings.scores_path);

    let mut app = App::new(
        settings,
        Box::new(store),
        &BundledAssets::default(),
        AudioManager::default(),
    );
    let mut renderer = LogRenderer::default();

    app.render(&mut renderer);
    app.handle_input(InputEvent::Key(Key::Enter));
    run_demo(&mut app, &mut renderer);
    app.shutdown();
}

#[cfg(not(target_arch = "wasm32"))]
fn run_demo(app: &mut plane_dodge::App, renderer: &mut plane_dodge::renderer::LogRenderer) {
    use std::time::{Duration, Instant};

    use plane_dodge::sim::autopilot;
    use plane_dodge::sim::{GamePhase, InputEvent, Key};

    let period_ms = app.settings().tick_period_ms;
    let max_ticks = app.settings().max_demo_ticks;
    let realtime = app.settings().realtime_demo;

    let mut ticks = 0u64;
    let mut last = Instant::now();
    while ticks < max_ticks {
        let elapsed_ms = if realtime {
            std::thread::sleep(Duration::from_millis(app.until_next_tick_ms()));
            last.elapsed().as_millis() as u64
        } else {
            period_ms
        };
        last = Instant::now();

        if let Some(target) = autopilot::steer(app.state()) {
            app.handle_input(InputEvent::PointerMoved(target));
        }
        ticks += app.update(elapsed_ms) as u64;
        app.render(renderer);

        match app.state().phase {
            GamePhase::GameOver => break,
            GamePhase::LevelCompleted => app.handle_input(InputEvent::Key(Key::N)),
            _ => {}
        }
    }

    let state = app.state();
    log::info!(
        "Demo finished after {} ticks: {} on {} ({:?})",
        ticks,
        state.score,
        state.difficulty,
        state.phase
    );
    for (difficulty, score) in state.high_scores.iter() {
        log::info!("Best {}: {}", difficulty, score);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is the deliverable on wasm
}
