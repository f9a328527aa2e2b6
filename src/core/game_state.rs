use crate::core::{Cell, Grid, GridSnapshot, RulesError, Vec2};

/// The live level: grid plus the tracked player coordinate.
///
/// Only the move resolver mutates it, so the player coordinate always points
/// at the single `Player` cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub(crate) grid: Grid,
    pub(crate) player: Vec2,
}

impl GameState {
    /// Wraps an existing grid, locating its one player cell.
    pub fn from_grid(grid: Grid) -> Result<GameState, RulesError> {
        let players: Vec<Vec2> = grid
            .iter_positions()
            .filter(|&(_, c)| c == Cell::Player)
            .map(|(pos, _)| pos)
            .collect();
        match players.as_slice() {
            &[player] => Ok(GameState { grid, player }),
            _ => Err(RulesError::PlayerCount { found: players.len() }),
        }
    }

    pub fn player(&self) -> Vec2 {
        self.player
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    pub fn is_won(&self) -> bool {
        self.grid.is_won()
    }
}
