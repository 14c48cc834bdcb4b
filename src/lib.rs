//! Brickbreak - simulation core for a brick-breaker arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, items, game state)
//! - `platform`: Translation of abstract input events into per-tick intents
//! - `tuning`: Data-driven game balance
//! - `error`: Construction-time configuration errors

pub mod error;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use tuning::Tuning;

/// Default game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_SPEED: f32 = 8.0;
    /// Distance from the paddle's top edge to the bottom of the field
    pub const PADDLE_BOTTOM_OFFSET: f32 = 30.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Per-axis speed of a served ball: it leaves at (±8, −8) px/tick
    pub const BALL_SPEED: f32 = 8.0;
    /// Distance from the served ball's center to the bottom of the field
    pub const SERVE_BOTTOM_OFFSET: f32 = 50.0;
    /// Horizontal speed at the very edge of the paddle
    pub const MAX_DEFLECTION: f32 = 8.0;

    pub const STARTING_LIVES: u32 = 3;
    pub const MAX_BALLS: usize = 5;
    pub const ITEM_DROP_CHANCE: f64 = 0.15;

    /// Falling power-up geometry
    pub const ITEM_WIDTH: f32 = 30.0;
    pub const ITEM_HEIGHT: f32 = 15.0;
    pub const ITEM_FALL_SPEED: f32 = 2.0;

    /// Power-up effect steps and limits
    pub const BALL_GROW_STEP: f32 = 3.0;
    pub const BALL_MAX_RADIUS: f32 = 15.0;
    pub const BALL_SHRINK_STEP: f32 = 2.0;
    pub const BALL_MIN_RADIUS: f32 = 4.0;
    pub const PADDLE_GROW_STEP: f32 = 30.0;
    pub const PADDLE_MAX_WIDTH: f32 = 200.0;
    pub const PADDLE_SHRINK_STEP: f32 = 20.0;
    pub const PADDLE_MIN_WIDTH: f32 = 60.0;

    /// Brick grid geometry
    pub const BRICK_WIDTH: f32 = 50.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 3.0;
    pub const BRICK_OFFSET_TOP: f32 = 60.0;
    pub const BRICK_OFFSET_LEFT: f32 = 25.0;

    /// Per-axis speed gained on level advance: step + new_level * per_level
    pub const LEVEL_SPEED_STEP: f32 = 1.0;
    pub const LEVEL_SPEED_PER_LEVEL: f32 = 0.5;
}
