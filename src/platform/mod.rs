//! Platform abstraction layer
//!
//! The game core never talks to a window directly. It reads from an
//! [`InputSurface`], writes to a [`DisplaySurface`] and measures frames with
//! a [`FrameTimer`]:
//! - `headless`: windowless surface for the binary and tests
//! - `time`: wall-clock and scripted frame timers

pub mod headless;
pub mod time;

pub use headless::HeadlessSurface;
pub use time::{FrameTimer, ScriptedTimer, WallClock};

use glam::Vec2;
use thiserror::Error;

use crate::renderer::{Color, Shape};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Escape,
    Space,
}

/// Discrete window events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// The user asked to close the window
    Close,
}

/// Display surface could not be brought up
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
    #[error("display unavailable: {0}")]
    Unavailable(String),
}

/// Source of window events and key state
pub trait InputSurface {
    /// Next pending window event, if any
    fn poll_event(&mut self) -> Option<WindowEvent>;

    /// Whether `key` is held right now
    fn is_key_pressed(&self, key: Key) -> bool;
}

/// Target for one clear/draw/present cycle per frame
pub trait DisplaySurface {
    /// Bring the surface up; called once before the game starts running
    fn open(&mut self, title: &str, size: Vec2) -> Result<(), SurfaceError>;

    fn clear(&mut self, color: Color);

    fn draw(&mut self, shape: &Shape);

    /// Show everything drawn since the last clear
    fn present(&mut self);

    fn set_title(&mut self, title: &str);
}
