use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::core::{Cell, GameState, GenerationError, Grid, Vec2};

pub const DEFAULT_ROWS: usize = 7;
pub const DEFAULT_COLS: usize = 7;
pub const DEFAULT_NUM_BOXES: usize = 2;
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.15;
pub const DEFAULT_MAX_PLACEMENT_ATTEMPTS: u32 = 256;
/// Largest accepted row or column count.
pub const MAX_DIMENSION: usize = 4096;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub rows: usize,
    pub cols: usize,
    pub num_boxes: usize,
    /// chance that any interior cell starts as a wall
    pub wall_probability: f64,
    /// random draws per placement before falling back to scanning for empty cells
    pub max_placement_attempts: u32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        LevelConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            num_boxes: DEFAULT_NUM_BOXES,
            wall_probability: DEFAULT_WALL_PROBABILITY,
            max_placement_attempts: DEFAULT_MAX_PLACEMENT_ATTEMPTS,
        }
    }
}

impl LevelConfig {
    pub fn from_json(json: &str) -> Result<LevelConfig, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.rows < 3 || self.cols < 3 {
            return Err(GenerationError::InvalidConfig(format!(
                "grid must be at least 3x3, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION {
            return Err(GenerationError::InvalidConfig(format!(
                "grid must be at most {}x{}, got {}x{}",
                MAX_DIMENSION, MAX_DIMENSION, self.rows, self.cols
            )));
        }
        if !(0.0..=1.0).contains(&self.wall_probability) {
            return Err(GenerationError::InvalidConfig(format!(
                "wall probability must be within [0, 1], got {}",
                self.wall_probability
            )));
        }
        Ok(())
    }
}

/// Build a fresh random level.
///
/// Border cells are walls, each interior cell is a wall with
/// `wall_probability`, then the player and `num_boxes` box/target pairs are
/// dropped on distinct empty interior cells. No solvability check is made.
pub fn generate<R: Rng + ?Sized>(config: &LevelConfig, rng: &mut R) -> Result<GameState, GenerationError> {
    config.validate()?;

    let mut grid = Grid::new(config.rows, config.cols, Cell::Empty);
    for i in 0..config.rows as i32 {
        for j in 0..config.cols as i32 {
            let pos = Vec2 { i, j };
            if grid.is_border(&pos) || rng.gen_bool(config.wall_probability) {
                grid[&pos] = Cell::Wall;
            }
        }
    }

    let player = place(&mut grid, Cell::Player, config, rng)?;
    for _ in 0..config.num_boxes {
        place(&mut grid, Cell::Box, config, rng)?;
        place(&mut grid, Cell::Target, config, rng)?;
    }

    tracing::debug!(
        rows = config.rows,
        cols = config.cols,
        boxes = config.num_boxes,
        walls = grid.count(Cell::Wall),
        "generated level"
    );

    Ok(GameState { grid, player })
}

fn place<R: Rng + ?Sized>(
    grid: &mut Grid,
    cell: Cell,
    config: &LevelConfig,
    rng: &mut R,
) -> Result<Vec2, GenerationError> {
    for _ in 0..config.max_placement_attempts {
        let pos = random_interior(grid, rng);
        if grid[&pos] == Cell::Empty {
            grid[&pos] = cell;
            return Ok(pos);
        }
    }

    // rejection sampling ran dry; pick uniformly from what is actually left
    let empty: Vec<Vec2> = grid
        .iter_positions()
        .filter(|&(pos, c)| c == Cell::Empty && !grid.is_border(&pos))
        .map(|(pos, _)| pos)
        .collect();
    let Some(&pos) = empty.choose(rng) else {
        return Err(GenerationError::NoEmptyCell { placing: cell });
    };
    tracing::warn!(
        ?cell,
        attempts = config.max_placement_attempts,
        remaining = empty.len(),
        "placement fell back to scanning for empty cells"
    );
    grid[&pos] = cell;
    Ok(pos)
}

fn random_interior<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Vec2 {
    Vec2 {
        i: rng.gen_range(1..grid.rows() - 1) as i32,
        j: rng.gen_range(1..grid.cols() - 1) as i32,
    }
}
