//! Arkanoid entry point
//!
//! Runs the game loop against the headless surface: an autopilot plays
//! until the wall is cleared or the frame limit is reached.

use arkanoid::platform::{HeadlessSurface, WallClock};
use arkanoid::{Game, Settings};

/// Presentation rate cap, like a window's frame-rate limit
const FRAME_RATE_LIMIT: u32 = 240;
/// One minute of frames at the capped rate
const FRAME_LIMIT: u64 = 60 * FRAME_RATE_LIMIT as u64;

fn main() {
    env_logger::init();
    log::info!("Arkanoid (headless) starting...");

    let mut surface = HeadlessSurface::new()
        .with_autopilot()
        .with_frame_rate_limit(FRAME_RATE_LIMIT)
        .with_frame_limit(FRAME_LIMIT)
        .close_when_cleared();
    let mut timer = WallClock::default();
    let mut game = Game::new(Settings::default());

    match game.run(&mut surface, &mut timer) {
        Ok(summary) => {
            log::info!(
                "Destroyed {} bricks in {} steps ({} left)",
                summary.bricks_destroyed,
                summary.steps,
                summary.bricks_remaining
            );
        }
        Err(e) => {
            log::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    }
}
