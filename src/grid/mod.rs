// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The board model: a rectangular matrix of cell states plus the exact
//! per-row and per-column tent counts the puzzle demands.
//!
//! The board is pure data. Everything here is a bounds-checked query or a
//! copy-producing edit; the search algorithm lives in [`crate::solver`].

pub mod cell;
pub mod position;

pub use cell::CellState;
pub use position::{Adjacency, Position};

use crate::error::{Result, TentsError};
use std::fmt;

/// A rectangular board with row/column tent targets.
///
/// Cells are stored row-major. Rows and columns are both at least 1, every
/// row has the same length, and the target vectors match the dimensions;
/// the constructor rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellState>,
    rows: usize,
    cols: usize,
    row_targets: Vec<u32>,
    col_targets: Vec<u32>,
}

impl Grid {
    /// Build a board from a matrix of cells and the two target vectors.
    pub fn from_rows(
        rows: Vec<Vec<CellState>>,
        row_targets: Vec<u32>,
        col_targets: Vec<u32>,
    ) -> Result<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(TentsError::EmptyGrid);
        }
        let cols = rows[0].len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != cols {
                return Err(TentsError::RaggedRows {
                    row,
                    expected: cols,
                    got: cells.len(),
                });
            }
        }
        if row_targets.len() != rows.len() {
            return Err(TentsError::RowTargets {
                expected: rows.len(),
                got: row_targets.len(),
            });
        }
        if col_targets.len() != cols {
            return Err(TentsError::ColTargets {
                expected: cols,
                got: col_targets.len(),
            });
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells: rows.into_iter().flatten().collect(),
            row_targets,
            col_targets,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row_targets(&self) -> &[u32] {
        &self.row_targets
    }

    pub fn col_targets(&self) -> &[u32] {
        &self.col_targets
    }

    /// Bounds check.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> usize {
        assert!(self.contains(pos), "position {pos} out of bounds");
        pos.row * self.cols + pos.col
    }

    /// State of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub fn get(&self, pos: Position) -> CellState {
        self.cells[self.index(pos)]
    }

    pub(crate) fn set(&mut self, pos: Position, state: CellState) {
        let index = self.index(pos);
        self.cells[index] = state;
    }

    /// In-bounds neighbors of `pos`, in the fixed offset-table order.
    pub fn neighbors(
        &self,
        pos: Position,
        adjacency: Adjacency,
    ) -> impl Iterator<Item = Position> + '_ {
        adjacency
            .offsets()
            .iter()
            .filter_map(move |&(d_row, d_col)| {
                pos.offset(d_row, d_col).filter(|p| self.contains(*p))
            })
    }

    /// All cells with their positions, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells.iter().enumerate().map(|(i, &state)| {
            (Position::new(i / self.cols, i % self.cols), state)
        })
    }

    /// Positions holding `state`, row-major.
    pub fn positions_of(&self, state: CellState) -> Vec<Position> {
        self.iter()
            .filter(|&(_, s)| s == state)
            .map(|(pos, _)| pos)
            .collect()
    }

    pub fn count_in_row(&self, state: CellState, row: usize) -> usize {
        (0..self.cols)
            .filter(|&col| self.get(Position::new(row, col)) == state)
            .count()
    }

    pub fn count_in_col(&self, state: CellState, col: usize) -> usize {
        (0..self.rows)
            .filter(|&row| self.get(Position::new(row, col)) == state)
            .count()
    }

    /// Copy of the board with the given tent placement merged in: trees
    /// stay, every other cell becomes grass, and the listed positions
    /// become tents.
    ///
    /// # Panics
    ///
    /// Panics if a tent position is out of bounds.
    pub fn with_solution(&self, tents: &[Position]) -> Grid {
        let mut board = self.clone();
        for cell in board.cells.iter_mut() {
            if *cell != CellState::Tree {
                *cell = CellState::Grass;
            }
        }
        for &tent in tents {
            debug_assert!(self.get(tent) != CellState::Tree);
            board.set(tent, CellState::Tent);
        }
        board
    }

    /// Copy of the board with every non-tree cell reset to empty.
    pub fn cleared(&self) -> Grid {
        let mut board = self.clone();
        for cell in board.cells.iter_mut() {
            if *cell != CellState::Tree {
                *cell = CellState::Empty;
            }
        }
        board
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self.get(Position::new(row, col)).as_char())?;
            }
            if row + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
