//! Coin Dash entry point
//!
//! This build ships no renderer; the binary runs a headless demo in which
//! an autopilot chases coins, exercising the simulation, feedback, and
//! persistence paths end to end.

use std::time::SystemTime;

use coin_dash::feedback::{FeedbackSink, LogFeedback};
use coin_dash::highscores::HighScoreStore;
use coin_dash::sim::{ControlEvent, GameMode, GameState, TickInput, control, tick};

/// Demo frame step (60 Hz)
const DEMO_DT: f32 = 1.0 / 60.0;
/// Cap on simulated demo time, in case the autopilot never dies
const DEMO_MAX_SECS: f32 = 180.0;

fn main() {
    env_logger::init();

    let store = HighScoreStore::at_default_path();
    let stored_best = store.load();
    log::info!("loaded high score {stored_best} from {}", store.path().display());

    let seed = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let mut state = GameState::new(seed, stored_best);
    let mut feedback = LogFeedback;
    log::info!("demo run starting with seed {seed}");

    control(&mut state, ControlEvent::Confirm);

    let mut elapsed = 0.0_f32;
    while state.mode != GameMode::GameOver && elapsed < DEMO_MAX_SECS {
        let input = chase_coin(&state);
        for event in tick(&mut state, &input, DEMO_DT) {
            feedback.on_event(event);
        }
        if state.mode == GameMode::LifeLostPause {
            control(&mut state, ControlEvent::Confirm);
        }
        elapsed += DEMO_DT;
    }

    println!(
        "demo over: score {}, level {}, best {}",
        state.score, state.level, state.high_score
    );
    if state.high_score > stored_best {
        store.save(state.high_score);
    }
}

/// Minimal autopilot: head straight for the coin, ignore everything else
fn chase_coin(state: &GameState) -> TickInput {
    let player = state.player.rect.center();
    let coin = state.coin.center();
    TickInput {
        up: coin.y < player.y - 2.0,
        down: coin.y > player.y + 2.0,
        left: coin.x < player.x - 2.0,
        right: coin.x > player.x + 2.0,
    }
}
