//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (brick collection order)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod geom;
pub mod state;
pub mod tick;

pub use clock::FixedStep;
pub use collision::{Axis, BrickHit, resolve_brick_ball, resolve_paddle_ball};
pub use geom::{Bounds, Edges, Overlap, is_intersecting};
pub use state::{Ball, Brick, GameState, Paddle, PaddleIntent, brick_grid};
pub use tick::{GameEvent, TickInput, tick};
