//! Apple Hop entry point
//!
//! Runs a headless session driven by the autopilot, logging the HUD and a
//! text rendering of each level's final frame.
//!
//! Usage: `apple-hop [seed] [config.json]` or `apple-hop [config.json]`

use std::path::PathBuf;

use apple_hop::platform::Autopilot;
use apple_hop::sim::{Command, GamePhase, GameState};
use apple_hop::ui::{LogUi, TextRenderer};
use apple_hop::{App, GameConfig};

/// Levels to attempt before stopping
const LEVELS_TO_PLAY: u32 = 5;
/// Tick budget per level
const MAX_TICKS_PER_LEVEL: u32 = 60 * 60;
const DEFAULT_SEED: u64 = 0x5eed;

/// Seed and optional config path from the command line
///
/// A first argument that is not a number is taken as the config path.
fn parse_args(mut args: impl Iterator<Item = String>) -> (u64, Option<PathBuf>) {
    let Some(first) = args.next() else {
        return (DEFAULT_SEED, None);
    };
    match first.parse::<u64>() {
        Ok(seed) => (seed, args.next().map(PathBuf::from)),
        Err(_) => {
            log::warn!(
                "'{}' is not a seed, using it as the config path with seed {:#x}",
                first,
                DEFAULT_SEED
            );
            (DEFAULT_SEED, Some(PathBuf::from(first)))
        }
    }
}

fn main() {
    env_logger::init();
    log::info!("Apple Hop starting...");

    let (seed, config_path) = parse_args(std::env::args().skip(1));
    let config = config_path
        .map(|path| GameConfig::load(&path))
        .unwrap_or_default();

    let state = GameState::new(seed, config);
    let mut app = App::new(state, Autopilot::default(), TextRenderer::default(), LogUi::default());

    for _ in 0..LEVELS_TO_PLAY {
        app.command(Command::Start);
        for _ in 0..MAX_TICKS_PER_LEVEL {
            app.step();
            if app.state().phase != GamePhase::Running {
                break;
            }
        }
        log::debug!("\n{}", app.renderer().frame);

        let phase = app.state().phase;
        match phase {
            GamePhase::LevelComplete => app.command(Command::NextLevel),
            GamePhase::GameOver => break,
            phase => {
                log::warn!("Level {} still {:?} after tick budget", app.state().level, phase);
                break;
            }
        }
    }

    let state = app.state();
    println!(
        "Finished: level {}, score {}, lives {}",
        state.level, state.score, state.lives
    );
}
