//! Trepadeira entry point
//!
//! Runs a headless autopilot session. Windowing, input, audio and rendering
//! belong to whatever front end embeds the library.
//!
//! Usage: `trepadeira [seed] [tuning.json]`

use trepadeira::HighScores;
use trepadeira::Tuning;
use trepadeira::sim::{GameEvent, GameState, TickInput, tick};

/// Fixed frame time for the headless run
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up after ten minutes of simulated play
const MAX_FRAMES: u32 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x7265_7061_6465_6972);
    let tuning = match args.next() {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };

    log::info!("Trepadeira (headless) starting with seed {}", seed);

    let mut state = GameState::new(seed, tuning);
    let input = TickInput {
        idle_mode: true,
        ..Default::default()
    };

    let mut final_score = None;
    for frame in 0..MAX_FRAMES {
        for event in tick(&mut state, &input, FRAME_DT) {
            match event {
                GameEvent::SessionStarted { session } => {
                    log::info!("Session {} started", session);
                }
                GameEvent::Lost { reason, score } => {
                    log::info!("Lost after {} frames: {:?}, score {}", frame, reason, score);
                    final_score = Some(score);
                }
                _ => {}
            }
        }
        if final_score.is_some() {
            break;
        }
    }

    let score = final_score.unwrap_or_else(|| {
        log::info!("Frame limit reached while still growing");
        state.record_score();
        state.score
    });

    let scores_path = std::env::temp_dir().join("trepadeira_highscores.json");
    let mut scores = HighScores::load_or_default(&scores_path);
    if let Some(rank) = scores.add_score(score, seed) {
        log::info!("New high score #{}: {}", rank, score);
        if let Err(e) = scores.save(&scores_path) {
            log::warn!("Could not save high scores: {e}");
        }
    }

    println!(
        "seed {} score {} best {}",
        seed,
        score,
        scores.top_score().unwrap_or(score)
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web front ends drive `sim::tick` themselves
}
