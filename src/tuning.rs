//! Data-driven game balance
//!
//! Every constant the simulation reads lives here so drivers can load
//! alternative balance sheets from JSON. Defaults match `crate::consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::level::{self, LevelPattern};

/// Game balance and layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_bottom_offset: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis speed of a served ball
    pub ball_speed: f32,
    pub serve_bottom_offset: f32,
    pub max_deflection: f32,
    pub max_balls: usize,

    // === Session ===
    pub starting_lives: u32,

    // === Items ===
    /// Probability in [0, 1] that a destroyed brick drops an item
    pub item_drop_chance: f64,
    pub item_width: f32,
    pub item_height: f32,
    pub item_fall_speed: f32,

    // === Item effects ===
    pub ball_grow_step: f32,
    pub ball_max_radius: f32,
    pub ball_shrink_step: f32,
    pub ball_min_radius: f32,
    pub paddle_grow_step: f32,
    pub paddle_max_width: f32,
    pub paddle_shrink_step: f32,
    pub paddle_min_width: f32,

    // === Brick grid ===
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,

    // === Progression ===
    pub level_speed_step: f32,
    pub level_speed_per_level: f32,
    /// Level grids, reused cyclically. Cells: 0 empty, 1 brick, 2 obstacle
    pub levels: Vec<Vec<Vec<u8>>>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            serve_bottom_offset: SERVE_BOTTOM_OFFSET,
            max_deflection: MAX_DEFLECTION,
            max_balls: MAX_BALLS,

            starting_lives: STARTING_LIVES,

            item_drop_chance: ITEM_DROP_CHANCE,
            item_width: ITEM_WIDTH,
            item_height: ITEM_HEIGHT,
            item_fall_speed: ITEM_FALL_SPEED,

            ball_grow_step: BALL_GROW_STEP,
            ball_max_radius: BALL_MAX_RADIUS,
            ball_shrink_step: BALL_SHRINK_STEP,
            ball_min_radius: BALL_MIN_RADIUS,
            paddle_grow_step: PADDLE_GROW_STEP,
            paddle_max_width: PADDLE_MAX_WIDTH,
            paddle_shrink_step: PADDLE_SHRINK_STEP,
            paddle_min_width: PADDLE_MIN_WIDTH,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,

            level_speed_step: LEVEL_SPEED_STEP,
            level_speed_per_level: LEVEL_SPEED_PER_LEVEL,
            levels: level::builtin_grids(),
        }
    }
}

impl Tuning {
    /// Parse a tuning sheet from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that every value is usable by the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("item_width", self.item_width),
            ("item_height", self.item_height),
            ("item_fall_speed", self.item_fall_speed),
            ("ball_min_radius", self.ball_min_radius),
            ("paddle_min_width", self.paddle_min_width),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (field, value) in positive {
            // NaN fails this check as well
            if !(value > 0.0 && value.is_finite()) {
                return Err(invalid(field, format!("must be positive, got {value}")));
            }
        }

        if !(0.0..=1.0).contains(&self.item_drop_chance) {
            return Err(invalid(
                "item_drop_chance",
                format!("must be within [0, 1], got {}", self.item_drop_chance),
            ));
        }
        if self.max_balls == 0 {
            return Err(invalid("max_balls", "must allow at least one ball".into()));
        }
        if self.starting_lives == 0 {
            return Err(invalid("starting_lives", "must be at least 1".into()));
        }
        if self.ball_min_radius > self.ball_max_radius {
            return Err(invalid(
                "ball_min_radius",
                format!("{} exceeds ball_max_radius {}", self.ball_min_radius, self.ball_max_radius),
            ));
        }
        if self.paddle_min_width > self.paddle_max_width {
            return Err(invalid(
                "paddle_min_width",
                format!("{} exceeds paddle_max_width {}", self.paddle_min_width, self.paddle_max_width),
            ));
        }
        if self.paddle_max_width > self.field_width {
            return Err(invalid(
                "paddle_max_width",
                format!("{} is wider than the field", self.paddle_max_width),
            ));
        }
        if self.paddle_width > self.field_width {
            return Err(invalid(
                "paddle_width",
                format!("{} is wider than the field", self.paddle_width),
            ));
        }
        if self.max_deflection < 0.0 {
            return Err(invalid("max_deflection", "must not be negative".into()));
        }

        self.level_patterns().map(|_| ())
    }

    /// Parse every configured level grid
    pub fn level_patterns(&self) -> Result<Vec<LevelPattern>, ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        self.levels
            .iter()
            .enumerate()
            .map(|(index, grid)| LevelPattern::parse(index + 1, grid))
            .collect()
    }

    /// Vertical position of the paddle's top edge
    pub fn paddle_y(&self) -> f32 {
        self.field_height - self.paddle_bottom_offset
    }

    /// Center of a freshly served ball
    pub fn serve_position(&self) -> glam::Vec2 {
        glam::Vec2::new(
            self.field_width / 2.0,
            self.field_height - self.serve_bottom_offset,
        )
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::InvalidTuning { field, reason }
}
