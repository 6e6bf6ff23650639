//! Game loop orchestration
//!
//! Each iteration samples input, runs however many fixed steps the elapsed
//! time allows, then draws. The loop stops when a close event or the Escape
//! key is observed, after that iteration's draw phase.

use thiserror::Error;

use crate::platform::{DisplaySurface, FrameTimer, InputSurface, Key, SurfaceError, WindowEvent};
use crate::renderer::{colors, scene};
use crate::settings::{Settings, SettingsError};
use crate::sim::{FixedStep, GameEvent, GameState, TickInput, brick_grid, tick};

/// Window title shown before frame stats replace it
pub const TITLE: &str = "Arkanoid";

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

/// Startup failures; the loop never starts when one occurs
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("display surface failed: {0}")]
    Surface(#[from] SurfaceError),
}

/// Loop state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

/// What happened during a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub steps: u64,
    pub bricks_destroyed: u64,
    pub bricks_remaining: usize,
}

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    settings: Settings,
    state: GameState,
    clock: FixedStep,
    run_state: RunState,
    /// Key state sampled during the last input phase
    input: TickInput,
    frames: u64,
    bricks_destroyed: u64,
    // FPS tracking
    frame_times: [f32; FPS_WINDOW],
    frame_index: usize,
}

impl Game {
    /// Game with ball and paddle placed; the brick wall is laid out by `start`
    pub fn new(settings: Settings) -> Self {
        Self {
            state: GameState::empty(&settings),
            clock: FixedStep::from_settings(&settings),
            settings,
            run_state: RunState::Stopped,
            input: TickInput::default(),
            frames: 0,
            bricks_destroyed: 0,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }

    /// Validate settings, lay out the bricks, open the display and enter `Running`
    pub fn start<D: DisplaySurface>(&mut self, display: &mut D) -> Result<(), GameError> {
        self.settings.validate()?;
        self.state.bricks = brick_grid(&self.settings);
        display.open(TITLE, self.settings.field())?;

        self.run_state = RunState::Running;
        log::info!(
            "Game started: {} bricks, step {} per {} ms",
            self.state.bricks.len(),
            self.settings.step,
            self.settings.slice
        );
        Ok(())
    }

    /// Run the loop until the player quits
    pub fn run<S, T>(&mut self, surface: &mut S, timer: &mut T) -> Result<RunSummary, GameError>
    where
        S: InputSurface + DisplaySurface,
        T: FrameTimer,
    {
        self.start(surface)?;

        while self.is_running() {
            timer.start();
            self.iterate(surface);
            let frame_ms = timer.elapsed_ms();
            self.end_frame(surface, frame_ms);
        }

        let summary = self.summary();
        log::info!(
            "Game stopped after {} frames / {} steps, {} bricks left",
            summary.frames,
            summary.steps,
            summary.bricks_remaining
        );
        Ok(summary)
    }

    /// One loop iteration with an explicit frame duration
    ///
    /// The duration is consumed by the next iteration's update phase. Does
    /// nothing once the game is stopped; returns whether it is still running.
    pub fn frame<S>(&mut self, surface: &mut S, frame_ms: f32) -> bool
    where
        S: InputSurface + DisplaySurface,
    {
        if !self.is_running() {
            return false;
        }
        self.iterate(surface);
        self.end_frame(surface, frame_ms);
        self.is_running()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frames,
            steps: self.state.time_steps,
            bricks_destroyed: self.bricks_destroyed,
            bricks_remaining: self.state.bricks.len(),
        }
    }

    fn iterate<S>(&mut self, surface: &mut S)
    where
        S: InputSurface + DisplaySurface,
    {
        surface.clear(colors::BACKGROUND);
        self.input_phase(surface);
        self.update_phase();
        self.draw_phase(surface);
    }

    fn stop(&mut self, reason: &str) {
        if self.is_running() {
            log::info!("Stopping: {}", reason);
        }
        self.run_state = RunState::Stopped;
    }

    fn input_phase<I: InputSurface>(&mut self, input: &mut I) {
        while let Some(event) = input.poll_event() {
            match event {
                WindowEvent::Close => self.stop("window closed"),
            }
        }

        if input.is_key_pressed(Key::Escape) {
            self.stop("escape pressed");
        }
        if input.is_key_pressed(Key::Space) {
            self.state.ball.reset(self.state.field);
            log::debug!("Ball reset at frame {}", self.frames);
        }

        self.input = TickInput {
            left: input.is_key_pressed(Key::Left),
            right: input.is_key_pressed(Key::Right),
        };
    }

    fn update_phase(&mut self) -> u32 {
        let state = &mut self.state;
        let input = self.input;
        let mut destroyed = 0;

        let steps = self.clock.advance(|dt| {
            destroyed += tick(state, &input, dt)
                .iter()
                .filter(|e| matches!(e, GameEvent::BrickDestroyed { .. }))
                .count() as u64;
        });

        if destroyed > 0 {
            self.bricks_destroyed += destroyed;
            if self.state.bricks.is_empty() {
                log::info!("All bricks cleared after {} steps", self.state.time_steps);
            }
        }
        steps
    }

    fn draw_phase<D: DisplaySurface>(&mut self, display: &mut D) {
        for shape in scene(&self.state) {
            display.draw(&shape);
        }
        display.present();
    }

    fn end_frame<D: DisplaySurface>(&mut self, display: &mut D, frame_ms: f32) {
        self.clock.record_frame(frame_ms);
        self.frames += 1;

        self.frame_times[self.frame_index] = frame_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        if self.settings.show_frame_stats {
            let title = format!("FT: {}\tFPS: {}", frame_ms, self.fps());
            display.set_title(&title);
        }
    }

    /// Frames per second averaged over the recent frame window
    pub fn fps(&self) -> f32 {
        let samples = (self.frames as usize).min(FPS_WINDOW);
        if samples == 0 {
            return 0.0;
        }
        let total_ms: f32 = self.frame_times.iter().take(samples).sum();
        if total_ms <= 0.0 {
            return 0.0;
        }
        samples as f32 * 1000.0 / total_ms
    }
}
