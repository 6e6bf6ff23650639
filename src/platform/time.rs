//! Frame timers
//!
//! Frame durations are reported in milliseconds.

use std::collections::VecDeque;
use std::time::Instant;

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Measures how long one loop iteration took
pub trait FrameTimer {
    /// Mark the beginning of an iteration
    fn start(&mut self);

    /// Milliseconds since the last `start`
    fn elapsed_ms(&mut self) -> f32;
}

/// Real wall-clock timer
#[derive(Debug, Clone)]
pub struct WallClock {
    started: Instant,
}

impl Default for WallClock {
    fn default() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl FrameTimer for WallClock {
    fn start(&mut self) {
        self.started = Instant::now();
    }

    fn elapsed_ms(&mut self) -> f32 {
        self.started.elapsed().as_secs_f32() * 1000.0
    }
}

/// Timer that replays predetermined frame durations
///
/// Queued durations are used first; after that the timer falls back to a
/// fixed duration, optionally jittered by a seeded RNG.
#[derive(Debug, Clone)]
pub struct ScriptedTimer {
    queued: VecDeque<f32>,
    base_ms: f32,
    jitter: Option<(Pcg32, f32)>,
}

impl ScriptedTimer {
    /// Every frame takes exactly `frame_ms`
    pub fn fixed(frame_ms: f32) -> Self {
        Self {
            queued: VecDeque::new(),
            base_ms: frame_ms,
            jitter: None,
        }
    }

    /// Replay `frames`, then report zero-length frames
    pub fn sequence(frames: impl IntoIterator<Item = f32>) -> Self {
        Self {
            queued: frames.into_iter().collect(),
            base_ms: 0.0,
            jitter: None,
        }
    }

    /// Frames of `base_ms ± spread_ms`, reproducible from `seed`
    pub fn jittered(seed: u64, base_ms: f32, spread_ms: f32) -> Self {
        Self {
            queued: VecDeque::new(),
            base_ms,
            jitter: Some((Pcg32::seed_from_u64(seed), spread_ms.abs())),
        }
    }
}

impl FrameTimer for ScriptedTimer {
    fn start(&mut self) {}

    fn elapsed_ms(&mut self) -> f32 {
        if let Some(frame) = self.queued.pop_front() {
            return frame;
        }
        match &mut self.jitter {
            Some((rng, spread)) if *spread > 0.0 => {
                (self.base_ms + rng.random_range(-*spread..=*spread)).max(0.0)
            }
            _ => self.base_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_then_zero() {
        let mut timer = ScriptedTimer::sequence([2.0, 0.5]);
        assert_eq!(timer.elapsed_ms(), 2.0);
        assert_eq!(timer.elapsed_ms(), 0.5);
        assert_eq!(timer.elapsed_ms(), 0.0);
    }

    #[test]
    fn test_fixed() {
        let mut timer = ScriptedTimer::fixed(4.0);
        timer.start();
        assert_eq!(timer.elapsed_ms(), 4.0);
        assert_eq!(timer.elapsed_ms(), 4.0);
    }

    #[test]
    fn test_jitter_is_reproducible_and_bounded() {
        let mut a = ScriptedTimer::jittered(7, 16.0, 4.0);
        let mut b = ScriptedTimer::jittered(7, 16.0, 4.0);
        for _ in 0..100 {
            let frame = a.elapsed_ms();
            assert_eq!(frame, b.elapsed_ms());
            assert!((12.0..=20.0).contains(&frame));
        }
    }

    #[test]
    fn test_wall_clock_is_monotonic() {
        let mut clock = WallClock::default();
        clock.start();
        let first = clock.elapsed_ms();
        let second = clock.elapsed_ms();
        assert!(first >= 0.0);
        assert!(second >= first);
    }
}
