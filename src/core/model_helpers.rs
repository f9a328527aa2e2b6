use std::ops::Add;

use crate::core::{BlockReason, Cell, Direction, MoveOutcome, Vec2};

impl Cell {
    pub fn symbol(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Empty => ' ',
            Cell::Target => '.',
            Cell::Box => '$',
            Cell::Player => '@',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '#' => Some(Cell::Wall),
            ' ' => Some(Cell::Empty),
            '.' => Some(Cell::Target),
            '$' => Some(Cell::Box),
            '@' => Some(Cell::Player),
            _ => None,
        }
    }

    /// Cells a pushed box may land on.
    pub fn accepts_box(&self) -> bool {
        matches!(self, Cell::Empty | Cell::Target)
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl Vec2 {
    pub fn new(i: i32, j: i32) -> Vec2 {
        Vec2 { i, j }
    }
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    pub fn delta(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

impl MoveOutcome {
    pub fn success(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }

    /// Player position after the step; unchanged when blocked.
    pub fn player(&self) -> Vec2 {
        match self {
            MoveOutcome::Moved { player, .. } | MoveOutcome::Blocked { player, .. } => *player,
        }
    }

    pub fn reason(&self) -> Option<BlockReason> {
        match self {
            MoveOutcome::Blocked { reason, .. } => Some(*reason),
            MoveOutcome::Moved { .. } => None,
        }
    }
}
