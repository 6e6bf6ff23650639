//! Windowless surface
//!
//! Implements both surfaces in memory. Key state comes from a per-frame
//! script or from an autopilot that reads the last presented frame, so the
//! full game loop can run without a display.

use std::collections::{HashSet, VecDeque};
use std::time::{Duration, Instant};

use glam::Vec2;

use super::{DisplaySurface, InputSurface, Key, SurfaceError, WindowEvent};
use crate::renderer::{Color, Shape, Vertex, colors, vertex_batch};

/// Horizontal distance the autopilot tolerates before moving the paddle
const AUTOPILOT_DEAD_ZONE: f32 = 2.0;

/// In-memory input and display surface
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    title: String,
    size: Vec2,
    open: bool,
    clear_color: Color,
    /// Shapes drawn since the last clear
    pending: Vec<Shape>,
    /// Shapes of the last presented frame
    frame: Vec<Shape>,
    /// Tessellated last presented frame
    vertices: Vec<Vertex>,
    frames_presented: u64,
    events: VecDeque<WindowEvent>,
    held: HashSet<Key>,
    script: VecDeque<HashSet<Key>>,
    autopilot: bool,
    frame_limit: Option<u64>,
    close_when_cleared: bool,
    /// Minimum time between presents, like a frame-rate cap
    frame_period: Option<Duration>,
    last_present: Option<Instant>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys held for each upcoming frame, in order; nothing is held afterwards
    pub fn with_script<I, K>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: IntoIterator<Item = Key>,
    {
        self.script = frames
            .into_iter()
            .map(|keys| keys.into_iter().collect())
            .collect();
        self.held = self.script.pop_front().unwrap_or_default();
        self
    }

    /// Steer the paddle toward the ball and reset a ball that fell out
    pub fn with_autopilot(mut self) -> Self {
        self.autopilot = true;
        self
    }

    /// Raise a close event once `frames` frames were presented
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    /// Raise a close event once a frame is presented without bricks
    pub fn close_when_cleared(mut self) -> Self {
        self.close_when_cleared = true;
        self
    }

    /// Cap presentation at `fps` frames per second by sleeping in `present`
    pub fn with_frame_rate_limit(mut self, fps: u32) -> Self {
        self.frame_period = (fps > 0).then(|| Duration::from_secs_f64(1.0 / fps as f64));
        self
    }

    /// Queue a window event for the next poll
    pub fn push_event(&mut self, event: WindowEvent) {
        self.events.push_back(event);
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Shapes of the last presented frame
    pub fn last_frame(&self) -> &[Shape] {
        &self.frame
    }

    /// Triangle list of the last presented frame
    pub fn last_vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes of the last vertex batch, as a GPU upload would see them
    pub fn frame_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Bricks visible in the last presented frame
    pub fn bricks_on_screen(&self) -> usize {
        self.frame
            .iter()
            .filter(|s| s.color() == colors::BRICK)
            .count()
    }

    fn find(&self, color: Color) -> Option<&Shape> {
        self.frame.iter().find(|s| s.color() == color)
    }

    fn autopilot_pressed(&self, key: Key) -> bool {
        let (Some(ball), Some(paddle)) = (self.find(colors::BALL), self.find(colors::PADDLE))
        else {
            return false;
        };
        let ball = ball.center();
        let paddle = paddle.center();

        match key {
            Key::Left => ball.x < paddle.x - AUTOPILOT_DEAD_ZONE,
            Key::Right => ball.x > paddle.x + AUTOPILOT_DEAD_ZONE,
            Key::Space => ball.y > self.size.y,
            Key::Escape => false,
        }
    }
}

impl InputSurface for HeadlessSurface {
    fn poll_event(&mut self) -> Option<WindowEvent> {
        self.events.pop_front()
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.held.contains(&key) || (self.autopilot && self.autopilot_pressed(key))
    }
}

impl DisplaySurface for HeadlessSurface {
    fn open(&mut self, title: &str, size: Vec2) -> Result<(), SurfaceError> {
        if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(SurfaceError::InvalidSize {
                width: size.x,
                height: size.y,
            });
        }

        self.title = title.to_string();
        self.size = size;
        self.open = true;
        log::info!("Headless surface opened: {} ({}x{})", title, size.x, size.y);
        Ok(())
    }

    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.pending.clear();
    }

    fn draw(&mut self, shape: &Shape) {
        self.pending.push(*shape);
    }

    fn present(&mut self) {
        if let Some(period) = self.frame_period {
            if let Some(elapsed) = self.last_present.map(|t| t.elapsed()) {
                if elapsed < period {
                    std::thread::sleep(period - elapsed);
                }
            }
            self.last_present = Some(Instant::now());
        }

        self.frame = std::mem::take(&mut self.pending);
        self.vertices = vertex_batch(&self.frame);
        self.frames_presented += 1;
        self.held = self.script.pop_front().unwrap_or_default();

        if self.frame_limit.is_some_and(|limit| self.frames_presented >= limit) {
            log::debug!("Frame limit reached after {} frames", self.frames_presented);
            self.events.push_back(WindowEvent::Close);
        } else if self.close_when_cleared && self.bricks_on_screen() == 0 {
            log::debug!("No bricks left after {} frames", self.frames_presented);
            self.events.push_back(WindowEvent::Close);
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title.clear();
        self.title.push_str(title);
    }
}
