use crate::core::{Cell, Vec2};

/// Precondition violations. A move that is merely blocked is not one of these.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    #[error("position ({}, {}) is outside the grid", .position.i, .position.j)]
    OutOfBounds { position: Vec2 },

    #[error("grid must contain exactly one player, found {found}")]
    PlayerCount { found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid has no cells")]
    EmptyGrid,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum GenerationError {
    #[error("invalid level config: {0}")]
    InvalidConfig(String),

    /// No interior cell was left empty to hold the next placed item.
    #[error("no empty interior cell left while placing {placing:?}")]
    NoEmptyCell { placing: Cell },
}
