use serde::{Deserialize, Serialize};

/// One grid cell. A box standing on a target is stored as plain `Box`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    Empty,
    Target,
    Box,
    Player,
}

/// Row/column coordinate. `i` is the row, `j` the column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockReason {
    Wall,
    /// the pushed box would land on a wall, another box, or off the grid
    BoxObstructed,
}

/// Result of a single resolved step. A blocked move leaves the grid untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved {
        player: Vec2,
        change: GameChangeType,
    },
    Blocked {
        player: Vec2,
        reason: BlockReason,
    },
}
