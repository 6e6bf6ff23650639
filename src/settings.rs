//! Game settings
//!
//! Every tunable constant of the game lives in one struct. Defaults match
//! the values in [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected settings, reported before the game loop starts
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("paddle width {paddle} does not fit in window width {window}")]
    PaddleTooWide { paddle: f32, window: f32 },
    #[error(
        "brick grid {columns}x{rows} (row offset {row_offset}) is empty or larger than {max} bricks",
        max = MAX_BRICKS
    )]
    BrickGrid {
        columns: u32,
        rows: u32,
        row_offset: u32,
    },
    #[error("slice {slice} is below {min} without a step cap", min = MIN_SLICE)]
    SliceTooSmall { slice: f32 },
}

/// Largest brick wall a game accepts
pub const MAX_BRICKS: u32 = 4096;

/// Smallest slice accepted when steps per frame are not capped
pub const MIN_SLICE: f32 = 0.01;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub window_width: f32,
    pub window_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis speed; only the sign of each velocity component changes
    pub ball_speed: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_bottom_offset: f32,

    // === Bricks ===
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_columns: u32,
    pub brick_rows: u32,
    pub brick_gap: f32,
    pub brick_margin_x: f32,
    pub brick_row_offset: u32,

    // === Timing ===
    /// Simulation step size handed to entity updates
    pub step: f32,
    /// Frame time consumed per simulation step
    pub slice: f32,
    /// Cap on steps per frame; `None` runs every whole slice
    pub max_steps_per_frame: Option<u32>,

    // === Diagnostics ===
    /// Show frame time and FPS in the window title
    pub show_frame_stats: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_columns: BRICK_COLUMNS,
            brick_rows: BRICK_ROWS,
            brick_gap: BRICK_GAP,
            brick_margin_x: BRICK_MARGIN_X,
            brick_row_offset: BRICK_ROW_OFFSET,

            step: STEP,
            slice: SLICE,
            max_steps_per_frame: None,

            show_frame_stats: true,
        }
    }
}

impl Settings {
    /// Playfield size as a vector
    pub fn field(&self) -> Vec2 {
        Vec2::new(self.window_width, self.window_height)
    }

    /// Check the settings can drive a game loop
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("step", self.step),
            ("slice", self.slice),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(SettingsError::NotPositive { name, value });
            }
        }

        if self.paddle_width > self.window_width {
            return Err(SettingsError::PaddleTooWide {
                paddle: self.paddle_width,
                window: self.window_width,
            });
        }

        let bricks = self.brick_columns.checked_mul(self.brick_rows);
        let rows_end = self.brick_rows.checked_add(self.brick_row_offset);
        if self.brick_columns == 0
            || self.brick_rows == 0
            || !bricks.is_some_and(|n| n <= MAX_BRICKS)
            || rows_end.is_none()
        {
            return Err(SettingsError::BrickGrid {
                columns: self.brick_columns,
                rows: self.brick_rows,
                row_offset: self.brick_row_offset,
            });
        }

        // An uncapped scheduler runs frame_time / slice steps in one frame
        if self.max_steps_per_frame.is_none() && self.slice < MIN_SLICE {
            return Err(SettingsError::SliceTooSmall { slice: self.slice });
        }

        Ok(())
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.field(), Vec2::new(800.0, 600.0));
        assert_eq!(settings.brick_columns * settings.brick_rows, 44);
    }

    #[test]
    fn test_zero_step_rejected() {
        let settings = Settings {
            step: 0.0,
            ..Default::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::NotPositive {
                name: "step",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_nan_slice_rejected() {
        let settings = Settings {
            slice: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::NotPositive { name: "slice", .. })
        ));
    }

    #[test]
    fn test_paddle_wider_than_window_rejected() {
        let settings = Settings {
            paddle_width: 900.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::PaddleTooWide { .. })
        ));
    }

    #[test]
    fn test_oversized_brick_grid_rejected() {
        let settings =
            Settings::from_json(r#"{ "brick_columns": 70000, "brick_rows": 70000 }"#).unwrap();
        assert_eq!(
            settings.validate(),
            Err(SettingsError::BrickGrid {
                columns: 70_000,
                rows: 70_000,
                row_offset: BRICK_ROW_OFFSET
            })
        );
    }

    #[test]
    fn test_brick_grid_bounds() {
        let empty = Settings {
            brick_rows: 0,
            ..Default::default()
        };
        assert!(matches!(empty.validate(), Err(SettingsError::BrickGrid { .. })));

        let largest = Settings {
            brick_columns: 64,
            brick_rows: 64,
            ..Default::default()
        };
        assert_eq!(largest.validate(), Ok(()));

        let too_many = Settings {
            brick_columns: 64,
            brick_rows: 65,
            ..Default::default()
        };
        assert!(matches!(too_many.validate(), Err(SettingsError::BrickGrid { .. })));

        let far_offset = Settings {
            brick_row_offset: u32::MAX,
            ..Default::default()
        };
        assert!(matches!(far_offset.validate(), Err(SettingsError::BrickGrid { .. })));
    }

    #[test]
    fn test_tiny_slice_needs_step_cap() {
        let uncapped = Settings {
            slice: 1e-30,
            ..Default::default()
        };
        assert_eq!(
            uncapped.validate(),
            Err(SettingsError::SliceTooSmall { slice: 1e-30 })
        );

        let capped = Settings {
            max_steps_per_frame: Some(100),
            ..uncapped
        };
        assert_eq!(capped.validate(), Ok(()));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "ball_speed": 0.8, "brick_rows": 2 }"#).unwrap();
        assert_eq!(settings.ball_speed, 0.8);
        assert_eq!(settings.brick_rows, 2);
        assert_eq!(settings.window_width, WINDOW_WIDTH);
        assert_eq!(settings.max_steps_per_frame, None);
    }

    #[test]
    fn test_json_preserves_step_cap() {
        let settings = Settings {
            max_steps_per_frame: Some(8),
            show_frame_stats: false,
            ..Default::default()
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }
}
