//! Game state and core simulation types
//!
//! Every entity exposes its bounds through [`Edges`]; nothing holds a
//! reference to another entity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Bounds, Edges};
use crate::settings::Settings;

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Each component is always `±speed`
    pub vel: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Ball {
    /// Ball at `pos` heading up and to the left
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self {
            pos,
            vel: Vec2::new(-speed, -speed),
            radius,
            speed,
        }
    }

    /// Move by one step and bounce off the left, right and top walls
    ///
    /// The bottom of the field is open: a ball that passes it keeps moving.
    /// Always returns `true`; the flag is reserved for a lost-ball signal.
    pub fn update(&mut self, step: f32, field: Vec2) -> bool {
        self.pos += self.vel * step;

        if self.left() < 0.0 || self.right() > field.x {
            self.vel.x = -self.vel.x;
        }
        if self.top() < 0.0 {
            self.vel.y = -self.vel.y;
        }

        true
    }

    /// Put the ball back at the field center heading up
    ///
    /// Horizontal direction is kept.
    pub fn reset(&mut self, field: Vec2) {
        self.pos = field / 2.0;
        self.vel.y = -self.speed;
    }
}

impl Edges for Ball {
    fn bounds(&self) -> Bounds {
        Bounds::from_circle(self.pos, self.radius)
    }
}

/// Horizontal movement requested by the player for one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleIntent {
    #[default]
    Idle,
    Left,
    Right,
    /// Both keys held: left is tried first, right when left is blocked
    Both,
}

impl PaddleIntent {
    pub fn from_keys(left: bool, right: bool) -> Self {
        match (left, right) {
            (true, true) => PaddleIntent::Both,
            (true, false) => PaddleIntent::Left,
            (false, true) => PaddleIntent::Right,
            (false, false) => PaddleIntent::Idle,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Center; `y` never changes
    pub pos: Vec2,
    /// Only `x` is ever non-zero
    pub vel: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Paddle {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            speed,
        }
    }

    /// Pick a velocity from the intent, then move
    ///
    /// A direction is only taken when the whole move stays inside
    /// `[0, field_width]`, so the paddle never leaves the field.
    pub fn update(&mut self, step: f32, intent: PaddleIntent, field_width: f32) {
        let travel = self.speed * step;

        self.vel.x = match intent {
            PaddleIntent::Left | PaddleIntent::Both if self.left() - travel >= 0.0 => -self.speed,
            PaddleIntent::Right | PaddleIntent::Both if self.right() + travel <= field_width => {
                self.speed
            }
            _ => 0.0,
        };

        self.pos.x += self.vel.x * step;
    }
}

impl Edges for Paddle {
    fn bounds(&self) -> Bounds {
        Bounds::from_size(self.pos, self.size)
    }
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub pos: Vec2,
    pub size: Vec2,
    pub destroyed: bool,
}

impl Brick {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            destroyed: false,
        }
    }
}

impl Edges for Brick {
    fn bounds(&self) -> Bounds {
        Bounds::from_size(self.pos, self.size)
    }
}

/// Lay out the brick wall column by column
///
/// The grid size must already be bounded by [`Settings::validate`].
pub fn brick_grid(settings: &Settings) -> Vec<Brick> {
    let size = Vec2::new(settings.brick_width, settings.brick_height);
    let pitch = size + Vec2::splat(settings.brick_gap);
    let count = (settings.brick_columns * settings.brick_rows) as usize;

    let mut bricks = Vec::with_capacity(count);
    for column in 0..settings.brick_columns {
        for row in 0..settings.brick_rows {
            let x = (column + 1) as f32 * pitch.x + settings.brick_margin_x;
            let y = (row + settings.brick_row_offset) as f32 * pitch.y;
            bricks.push(Brick::new(Vec2::new(x, y), size));
        }
    }
    bricks
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Playfield size
    pub field: Vec2,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Live bricks; destroyed ones are compacted out at the end of each step
    pub bricks: Vec<Brick>,
    /// Simulation steps executed so far
    pub time_steps: u64,
}

impl GameState {
    /// Ball at the center, paddle near the bottom, full brick wall
    ///
    /// Expects settings that passed [`Settings::validate`].
    pub fn new(settings: &Settings) -> Self {
        Self {
            bricks: brick_grid(settings),
            ..Self::empty(settings)
        }
    }

    /// State with no bricks, for driving the ball and paddle alone
    pub fn empty(settings: &Settings) -> Self {
        let field = settings.field();
        let ball = Ball::new(field / 2.0, settings.ball_radius, settings.ball_speed);
        let paddle = Paddle::new(
            Vec2::new(field.x / 2.0, field.y - settings.paddle_bottom_offset),
            Vec2::new(settings.paddle_width, settings.paddle_height),
            settings.paddle_speed,
        );

        Self {
            field,
            ball,
            paddle,
            bricks: Vec::new(),
            time_steps: 0,
        }
    }
}
