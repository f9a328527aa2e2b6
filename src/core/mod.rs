mod errors;
mod game_state;
mod generate;
mod grid;
mod model_helpers;
mod models;
mod scoring;
mod update;

pub use errors::{GenerationError, RulesError};
pub use game_state::GameState;
pub use generate::{
    generate, LevelConfig, DEFAULT_COLS, DEFAULT_MAX_PLACEMENT_ATTEMPTS, DEFAULT_NUM_BOXES,
    DEFAULT_ROWS, DEFAULT_WALL_PROBABILITY, MAX_DIMENSION,
};
pub use grid::{Grid, GridSnapshot};
pub use models::{BlockReason, Cell, Direction, GameChangeType, MoveOutcome, Vec2};
pub use scoring::{score, MAX_LEVEL_SCORE, MIN_LEVEL_SCORE};
pub use update::step;
