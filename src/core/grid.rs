use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Cell, RulesError, Vec2};

/// Row-major cell storage with bounds-checked lookup.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize, default: Cell) -> Self {
        Grid {
            rows,
            cols,
            cells: vec![default; rows * cols],
        }
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, RulesError> {
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        if cols == 0 {
            return Err(RulesError::EmptyGrid);
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, r) in rows.iter().enumerate() {
            if r.len() != cols {
                return Err(RulesError::RaggedGrid {
                    row,
                    expected: cols,
                    found: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(Grid {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.j >= 0 && (pos.i as usize) < self.rows && (pos.j as usize) < self.cols
    }

    pub fn get(&self, pos: &Vec2) -> Option<Cell> {
        if !self.contains(pos) {
            return None;
        }
        Some(self[pos])
    }

    /// Outermost ring of the grid. Positions outside the grid are not border cells.
    pub fn is_border(&self, pos: &Vec2) -> bool {
        self.contains(pos)
            && (pos.i == 0
                || pos.j == 0
                || pos.i as usize + 1 == self.rows
                || pos.j as usize + 1 == self.cols)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = (Vec2, Cell)> + '_ {
        self.cells.iter().enumerate().map(|(index, &c)| {
            let pos = Vec2 {
                i: (index / self.cols) as i32,
                j: (index % self.cols) as i32,
            };
            (pos, c)
        })
    }

    /// True once no bare `Target` symbol is left anywhere.
    pub fn is_won(&self) -> bool {
        !self.cells.contains(&Cell::Target)
    }

    pub fn snapshot(&self) -> GridSnapshot {
        if self.cols == 0 {
            return GridSnapshot { rows: Vec::new() };
        }
        GridSnapshot {
            rows: self.cells.chunks(self.cols).map(|r| r.to_vec()).collect(),
        }
    }

    fn index_of(&self, pos: &Vec2) -> usize {
        if !self.contains(pos) {
            panic!(
                "position ({}, {}) out of range for {}x{} grid",
                pos.i, pos.j, self.rows, self.cols
            );
        }
        pos.i as usize * self.cols + pos.j as usize
    }
}

impl std::ops::Index<&Vec2> for Grid {
    type Output = Cell;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[self.index_of(index)]
    }
}

impl std::ops::IndexMut<&Vec2> for Grid {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.cells[index]
    }
}

/// Owned copy of the grid handed to renderers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub rows: Vec<Vec<Cell>>,
}

impl GridSnapshot {
    pub fn cell(&self, pos: &Vec2) -> Option<Cell> {
        if pos.i < 0 || pos.j < 0 {
            return None;
        }
        self.rows.get(pos.i as usize)?.get(pos.j as usize).copied()
    }
}

impl fmt::Display for GridSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let line: String = row.iter().map(Cell::symbol).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
