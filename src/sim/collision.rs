//! Collision detection and response for axis-aligned geometry
//!
//! Everything in the playfield is a rectangle except the balls, which are
//! tested through their bounding squares. Wall and block responses are pure axis
//! flips that preserve speed magnitude.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, origin at the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Bounding square of a circle
    pub fn around_circle(center: Vec2, radius: f32) -> Self {
        Self {
            pos: center - Vec2::splat(radius),
            size: Vec2::splat(radius * 2.0),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict overlap: touching edges do not count
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Ball-vs-rectangle test using the ball's bounding square
#[inline]
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    Rect::around_circle(center, radius).overlaps(rect)
}

/// Which walls of the field a ball is crossing this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

/// Check a ball against the field bounds `[0, width] x [0, height]`
pub fn wall_contact(center: Vec2, radius: f32, width: f32, height: f32) -> WallContact {
    WallContact {
        left: center.x - radius < 0.0,
        right: center.x + radius > width,
        top: center.y - radius < 0.0,
        bottom: center.y + radius > height,
    }
}

/// Reflect velocity off the side and top walls so it points back into the field.
///
/// Only components heading out of the field are flipped, so a ball still
/// overlapping a wall after last tick's bounce keeps moving inward.
pub fn reflect_off_walls(velocity: Vec2, contact: WallContact) -> Vec2 {
    let mut v = velocity;
    if contact.left {
        v.x = v.x.abs();
    }
    if contact.right {
        v.x = -v.x.abs();
    }
    if contact.top {
        v.y = v.y.abs();
    }
    v
}

/// Velocity leaving the paddle.
///
/// `hit_fraction` is where the ball struck along the paddle (0 = left edge,
/// 1 = right edge). Horizontal speed is proportional to the distance from
/// the paddle center. Vertical speed is kept, always upward.
pub fn paddle_bounce(hit_fraction: f32, velocity: Vec2, max_deflection: f32) -> Vec2 {
    Vec2::new(
        (hit_fraction - 0.5) * 2.0 * max_deflection,
        -velocity.y.abs(),
    )
}
