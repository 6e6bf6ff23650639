//! Arkanoid - a fixed-timestep brick breaker core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, fixed-step clock)
//! - `game`: Game loop orchestration (input, update, draw)
//! - `renderer`: Scene building and shape tessellation
//! - `platform`: Input/display surfaces and frame timers
//! - `settings`: Game configuration with documented defaults

pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, GameError, RunState, RunSummary};
pub use settings::{Settings, SettingsError};

/// Default configuration constants
///
/// Time is measured in milliseconds of wall-clock frame time; one simulation
/// step consumes one slice of it.
pub mod consts {
    /// Playfield dimensions
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Per-axis ball speed (units per step)
    pub const BALL_SPEED: f32 = 0.4;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 60.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 1.0;
    /// Distance from the bottom of the playfield to the paddle center
    pub const PADDLE_BOTTOM_OFFSET: f32 = 50.0;

    /// Brick defaults
    pub const BRICK_WIDTH: f32 = 60.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_COLUMNS: u32 = 11;
    pub const BRICK_ROWS: u32 = 4;
    /// Spacing between neighbouring bricks
    pub const BRICK_GAP: f32 = 3.0;
    /// Extra horizontal margin applied to every column
    pub const BRICK_MARGIN_X: f32 = 22.0;
    /// Empty rows above the first brick row
    pub const BRICK_ROW_OFFSET: u32 = 2;

    /// Fixed simulation step size
    pub const STEP: f32 = 1.0;
    /// Amount of frame time consumed per step
    pub const SLICE: f32 = 1.0;
}
