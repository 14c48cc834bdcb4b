//! Level patterns and brick layout
//!
//! A level is a grid of cells. The grid is laid out on the field from the
//! top-left brick offset, one brick (or obstacle) per non-empty cell.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{BRICK_PALETTE, Brick, OBSTACLE_COLOR, Obstacle};
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// One cell of a level grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Brick,
    Obstacle,
}

impl Cell {
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Brick),
            2 => Some(Cell::Obstacle),
            _ => None,
        }
    }
}

/// A validated, rectangular level grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelPattern {
    rows: Vec<Vec<Cell>>,
}

impl LevelPattern {
    /// Validate a raw grid. `level` is the 1-based index used in error messages.
    pub fn parse(level: usize, grid: &[Vec<u8>]) -> Result<Self, ConfigError> {
        let expected = grid.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(ConfigError::EmptyPattern { level });
        }

        let mut rows = Vec::with_capacity(grid.len());
        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != expected {
                return Err(ConfigError::RaggedPattern {
                    level,
                    row,
                    expected,
                    found: cells.len(),
                });
            }
            let parsed = cells
                .iter()
                .enumerate()
                .map(|(col, &value)| {
                    Cell::from_value(value).ok_or(ConfigError::UnknownCell {
                        level,
                        row,
                        col,
                        value,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(parsed);
        }

        if !rows.iter().flatten().any(|&cell| cell == Cell::Brick) {
            return Err(ConfigError::NoBricks { level });
        }

        Ok(Self { rows })
    }

    /// Cells in row-major order with their grid coordinates
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &cell)| (row, col, cell))
        })
    }
}

/// Index into a pattern list for a 1-based level number (patterns repeat)
pub fn pattern_index(level: u32, pattern_count: usize) -> usize {
    (level.max(1) as usize - 1) % pattern_count.max(1)
}

/// Field rectangle of grid cell (row, col)
pub fn cell_rect(tuning: &Tuning, row: usize, col: usize) -> Rect {
    let x = tuning.brick_offset_left + col as f32 * (tuning.brick_width + tuning.brick_padding);
    let y = tuning.brick_offset_top + row as f32 * (tuning.brick_height + tuning.brick_padding);
    Rect::new(x, y, tuning.brick_width, tuning.brick_height)
}

/// Points for a brick in the given row (top rows are worth more)
pub fn row_points(row: usize) -> u64 {
    (8u64.saturating_sub(row as u64)).max(1) * 10
}

/// Build bricks and obstacles for a pattern, in row-major order
pub fn build_layout(pattern: &LevelPattern, tuning: &Tuning) -> (Vec<Brick>, Vec<Obstacle>) {
    let mut bricks = Vec::new();
    let mut obstacles = Vec::new();

    for (row, col, cell) in pattern.cells() {
        let rect = cell_rect(tuning, row, col);
        match cell {
            Cell::Empty => {}
            Cell::Brick => bricks.push(Brick {
                rect,
                color: BRICK_PALETTE[row % BRICK_PALETTE.len()],
                visible: true,
                points: row_points(row),
            }),
            Cell::Obstacle => obstacles.push(Obstacle {
                rect,
                color: OBSTACLE_COLOR,
            }),
        }
    }

    (bricks, obstacles)
}

/// The five stock levels as raw grids
pub fn builtin_grids() -> Vec<Vec<Vec<u8>>> {
    BUILTIN_LEVELS
        .iter()
        .map(|grid| grid.iter().map(|row| row.to_vec()).collect())
        .collect()
}

const BUILTIN_LEVELS: [[[u8; 14]; 6]; 5] = [
    [
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ],
    [
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ],
    [
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1],
        [1, 1, 1, 1, 2, 1, 1, 1, 1, 2, 1, 1, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 2, 1, 1, 1, 2, 2, 1, 1, 1, 2, 1, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ],
    [
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
        [1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, 1, 1],
        [1, 0, 1, 0, 1, 2, 1, 1, 2, 1, 0, 1, 0, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 1, 2, 2, 1, 1, 1, 1, 1, 1, 2, 2, 1, 1],
    ],
    [
        [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
        [0, 1, 0, 1, 2, 1, 0, 1, 0, 1, 2, 1, 0, 1],
        [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
        [0, 1, 2, 1, 0, 1, 2, 2, 1, 0, 1, 2, 1, 0],
        [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0],
        [0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    ],
];
