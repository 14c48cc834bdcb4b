//! Read-only views of the engine for renderers and HUD widgets

use glam::Vec2;
use serde::Serialize;

use super::collision::Rect;
use super::state::{Color, GamePhase, GameState, ItemKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockView {
    pub rect: Rect,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemView {
    pub rect: Rect,
    pub kind: ItemKind,
    pub color: Color,
    pub label: &'static str,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub paddle: Rect,
    pub balls: Vec<BallView>,
    /// Visible bricks only
    pub bricks: Vec<BlockView>,
    pub obstacles: Vec<BlockView>,
    /// Active items only
    pub items: Vec<ItemView>,
    pub phase: GamePhase,
    pub level: u32,
}

/// Score/lives/level readout for UI chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusSnapshot {
    pub score: u64,
    pub lives: u32,
    pub level: u32,
    pub phase: GamePhase,
}

/// Output of one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub render: RenderSnapshot,
    pub status: StatusSnapshot,
}

impl GameState {
    pub fn render_snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            paddle: self.paddle.rect(),
            balls: self
                .balls
                .iter()
                .map(|b| BallView {
                    pos: b.pos,
                    radius: b.radius,
                })
                .collect(),
            bricks: self
                .bricks
                .iter()
                .filter(|b| b.visible)
                .map(|b| BlockView {
                    rect: b.rect,
                    color: b.color,
                })
                .collect(),
            obstacles: self
                .obstacles
                .iter()
                .map(|o| BlockView {
                    rect: o.rect,
                    color: o.color,
                })
                .collect(),
            items: self
                .items
                .iter()
                .filter(|i| i.active)
                .map(|i| ItemView {
                    rect: i.rect,
                    kind: i.kind,
                    color: i.kind.color(),
                    label: i.kind.label(),
                })
                .collect(),
            phase: self.phase,
            level: self.level,
        }
    }

    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            score: self.score,
            lives: self.lives,
            level: self.level,
            phase: self.phase,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            render: self.render_snapshot(),
            status: self.status(),
        }
    }
}
