// Box-pushing puzzle engine.
// Tiles: '#' wall, '@' player, '$' box, '.' target, ' ' empty.
// A box pushed onto a target replaces it; the level is won once no '.' remains.

pub mod core;
pub mod session;

#[cfg(test)]
mod test;

pub use crate::core::{
    generate, score, step, BlockReason, Cell, Direction, GameChangeType, GameState,
    GenerationError, Grid, GridSnapshot, LevelConfig, MoveOutcome, RulesError, Vec2,
};
pub use crate::session::{MoveReport, Session, SessionAction, SessionError, SessionPhase};
