//! Game state and core simulation types
//!
//! The engine context owns every entity collection. Drivers hold one
//! `GameState` per session and advance it with `sim::tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::level::{self, LevelPattern};
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Top-level game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball served, waiting for the start signal
    Waiting,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// All lives lost
    GameOver,
    /// Every brick of the level destroyed
    GameWin,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Waiting => "waiting",
            GamePhase::Playing => "playing",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "gameOver",
            GamePhase::GameWin => "gameWin",
        }
    }
}

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);

    /// CSS-style hex string, e.g. `#ff6b6b`
    pub fn hex(&self) -> String {
        format!("#{:06x}", self.0 & 0xffffff)
    }
}

/// Brick colors by row (wraps after 8 rows)
pub const BRICK_PALETTE: [Color; 8] = [
    Color(0xff6b6b),
    Color(0x4ecdc4),
    Color(0x45b7d1),
    Color(0x96ceb4),
    Color(0xfeca57),
    Color(0xff9ff3),
    Color(0xf39c12),
    Color(0xe74c3c),
];

pub const OBSTACLE_COLOR: Color = Color(0x666666);

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Speed magnitude; `vel.length() == speed`. Only a paddle bounce changes it.
    pub speed: f32,
}

impl Ball {
    /// A ball launched at `(±axis_speed, −axis_speed)`. `direction` is the sign of dx.
    pub fn served(pos: Vec2, radius: f32, axis_speed: f32, direction: f32) -> Self {
        let dx = if direction < 0.0 { -axis_speed } else { axis_speed };
        let vel = Vec2::new(dx, -axis_speed);
        Self {
            pos,
            vel,
            radius,
            speed: vel.length(),
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    /// Top edge (fixed)
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Horizontal pixels per tick under keyboard control
    pub speed: f32,
}

impl Paddle {
    /// Paddle centered horizontally at its default width
    pub fn centered(tuning: &Tuning) -> Self {
        Self {
            x: (tuning.field_width - tuning.paddle_width) / 2.0,
            y: tuning.paddle_y(),
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            speed: tuning.paddle_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Keep the paddle inside `[0, field_width - width]`
    pub fn clamp_to_field(&mut self, field_width: f32) {
        self.x = self.x.clamp(0.0, (field_width - self.width).max(0.0));
    }
}

/// A destructible brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub color: Color,
    /// Cleared on hit; hidden bricks are skipped by collision and rendering
    pub visible: bool,
    pub points: u64,
}

/// An indestructible obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    pub color: Color,
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    GrowBall,
    ShrinkBall,
    MultiBall,
    GrowPaddle,
    ShrinkPaddle,
}

impl ItemKind {
    pub const ALL: [ItemKind; 5] = [
        ItemKind::GrowBall,
        ItemKind::ShrinkBall,
        ItemKind::MultiBall,
        ItemKind::GrowPaddle,
        ItemKind::ShrinkPaddle,
    ];

    pub fn color(&self) -> Color {
        match self {
            ItemKind::GrowBall => Color(0xff6b6b),
            ItemKind::ShrinkBall => Color(0x4ecdc4),
            ItemKind::MultiBall => Color(0xfeca57),
            ItemKind::GrowPaddle => Color(0x45b7d1),
            ItemKind::ShrinkPaddle => Color(0x96ceb4),
        }
    }

    /// Short on-screen label
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::GrowBall => "B+",
            ItemKind::ShrinkBall => "B-",
            ItemKind::MultiBall => "X2",
            ItemKind::GrowPaddle => "P+",
            ItemKind::ShrinkPaddle => "P-",
        }
    }
}

/// A falling power-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub rect: Rect,
    pub kind: ItemKind,
    /// Pixels per tick, downward
    pub fall_speed: f32,
    /// Cleared once the effect has been applied
    pub active: bool,
}

/// Things that happened during a tick, for renderers and sound adapters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickDestroyed { index: usize, points: u64 },
    ObstacleHit { index: usize },
    ItemDropped { kind: ItemKind },
    ItemCollected { kind: ItemKind },
    /// Multi-ball collected with the ball cap already reached
    MultiBallSkipped,
    BallLost { remaining: usize },
    LifeLost { lives: u32 },
    PhaseChanged { from: GamePhase, to: GamePhase },
    LevelStarted { level: u32 },
}

/// Complete engine context for one game session
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Parsed level grids, reused cyclically
    patterns: Vec<LevelPattern>,
    rng: Pcg32,
    /// Current level (1-based)
    pub level: u32,
    pub lives: u32,
    pub score: u64,
    pub phase: GamePhase,
    /// Per-axis speed of served and cloned balls for this level
    pub ball_speed: f32,
    /// Simulation tick counter (ticks spent in `Playing`)
    pub time_ticks: u64,
    pub paddle: Paddle,
    /// Active balls; the first one seeds serve direction and multi-ball clones
    pub balls: Vec<Ball>,
    /// Bricks in pattern row-major order
    pub bricks: Vec<Brick>,
    pub obstacles: Vec<Obstacle>,
    pub items: Vec<Item>,
    /// Events recorded during the last tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with a seeded generator
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }

    /// Create a new session with an injected generator
    pub fn with_rng(tuning: Tuning, rng: Pcg32) -> Result<Self, ConfigError> {
        tuning.validate()?;
        let patterns = tuning.level_patterns()?;

        let mut state = Self {
            paddle: Paddle::centered(&tuning),
            ball_speed: tuning.ball_speed,
            lives: tuning.starting_lives,
            tuning,
            patterns,
            rng,
            level: 1,
            score: 0,
            phase: GamePhase::Waiting,
            time_ticks: 0,
            balls: Vec::new(),
            bricks: Vec::new(),
            obstacles: Vec::new(),
            items: Vec::new(),
            events: Vec::new(),
        };
        state.load_level();
        state.serve_ball(1.0);
        Ok(state)
    }

    /// Rebuild bricks and obstacles for the current level, clear items
    pub(crate) fn load_level(&mut self) {
        let index = level::pattern_index(self.level, self.patterns.len());
        let (bricks, obstacles) = level::build_layout(&self.patterns[index], &self.tuning);
        log::info!(
            "Level {}: pattern {}, {} bricks, {} obstacles",
            self.level,
            index + 1,
            bricks.len(),
            obstacles.len()
        );
        self.bricks = bricks;
        self.obstacles = obstacles;
        self.items.clear();
        self.paddle.width = self.tuning.paddle_width;
        self.paddle.clamp_to_field(self.tuning.field_width);
        self.events.push(GameEvent::LevelStarted { level: self.level });
    }

    /// Replace all balls with a single fresh one at the serve position
    pub(crate) fn serve_ball(&mut self, direction: f32) {
        let ball = Ball::served(
            self.tuning.serve_position(),
            self.tuning.ball_radius,
            self.ball_speed,
            direction,
        );
        self.balls.clear();
        self.balls.push(ball);
    }

    /// Random horizontal direction, -1 or +1
    pub(crate) fn random_direction(&mut self) -> f32 {
        if self.rng.random_bool(0.5) { 1.0 } else { -1.0 }
    }

    /// Roll the item drop for a destroyed brick
    pub(crate) fn roll_item_drop(&mut self) -> Option<ItemKind> {
        if self.rng.random_bool(self.tuning.item_drop_chance) {
            let index = self.rng.random_range(0..ItemKind::ALL.len());
            Some(ItemKind::ALL[index])
        } else {
            None
        }
    }

    /// Change phase, logging and recording the transition
    pub(crate) fn set_phase(&mut self, to: GamePhase) {
        let from = self.phase;
        if from == to {
            return;
        }
        log::info!("Phase {} -> {}", from.as_str(), to.as_str());
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
    }

    /// Number of bricks not yet destroyed
    pub fn visible_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }
}
