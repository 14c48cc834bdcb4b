//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (insertion / pattern row-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{Rect, circle_overlaps_rect};
pub use level::{Cell, LevelPattern};
pub use snapshot::{BallView, BlockView, ItemView, RenderSnapshot, Snapshot, StatusSnapshot};
pub use state::{
    Ball, Brick, Color, GameEvent, GamePhase, GameState, Item, ItemKind, Obstacle, Paddle,
    BRICK_PALETTE, OBSTACLE_COLOR,
};
pub use tick::{
    TickInput, advance_level, apply_item_effect, reset, resolve_collisions, start, tick,
    toggle_pause, update_balls, update_items, update_paddle,
};
