//! Fixed-step scheduler
//!
//! Turns irregular frame durations into a deterministic sequence of
//! fixed-size simulation steps. Leftover time carries over between frames.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// Accumulates frame time and releases it one slice per step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixedStep {
    /// Step size handed to the simulation
    step: f32,
    /// Frame time consumed by one step
    slice: f32,
    /// Unconsumed frame time
    current_slice: f32,
    /// Duration of the last measured frame, consumed by the next `advance`
    last_frame: f32,
    /// Maximum steps per frame (`None` = unbounded)
    max_steps: Option<u32>,
}

impl FixedStep {
    pub fn new(step: f32, slice: f32) -> Self {
        Self {
            step,
            slice,
            current_slice: 0.0,
            last_frame: 0.0,
            max_steps: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.step, settings.slice).with_max_steps(settings.max_steps_per_frame)
    }

    /// Bound the steps run per frame; the backlog waits for later frames
    pub fn with_max_steps(mut self, max_steps: Option<u32>) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Store the duration of the frame that just finished
    pub fn record_frame(&mut self, frame_time: f32) {
        self.last_frame = frame_time.max(0.0);
    }

    /// Add the last frame's time and run every whole slice it covers
    ///
    /// Returns the number of steps executed (possibly zero).
    pub fn advance<F: FnMut(f32)>(&mut self, mut run_step: F) -> u32 {
        self.current_slice += self.last_frame;
        self.last_frame = 0.0;

        let mut steps = 0;
        while self.current_slice >= self.slice {
            if self.max_steps.is_some_and(|max| steps >= max) {
                log::trace!(
                    "Step cap {} reached, carrying {:.3} over",
                    steps,
                    self.current_slice
                );
                break;
            }
            self.current_slice -= self.slice;
            run_step(self.step);
            steps += 1;
        }
        steps
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Unconsumed frame time
    pub fn backlog(&self) -> f32 {
        self.current_slice
    }

    pub fn last_frame(&self) -> f32 {
        self.last_frame
    }
}
