// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Board validation.
//!
//! A board is solved when no tent touches another tent, every tent stands
//! next to a tree, the tent and tree counts agree, and every row and
//! column holds exactly its target number of tents. These are pure
//! queries; they work equally on solver output and on a half-played board.

use crate::grid::{Adjacency, CellState, Grid, Position};
use std::fmt;

/// One way a board falls short of being solved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Two tents within each other's 8-neighborhood.
    TouchingTents { first: Position, second: Position },

    /// A tent with no orthogonally adjacent tree.
    LonelyTent { tent: Position },

    /// A row whose tent count misses its target.
    RowCount {
        row: usize,
        target: u32,
        count: usize,
    },

    /// A column whose tent count misses its target.
    ColCount {
        col: usize,
        target: u32,
        count: usize,
    },

    /// Tents and trees cannot be paired one to one.
    CountMismatch { tents: usize, trees: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::TouchingTents { first, second } => {
                write!(f, "tents {first} and {second} touch")
            }
            Violation::LonelyTent { tent } => {
                write!(f, "tent {tent} has no adjacent tree")
            }
            Violation::RowCount { row, target, count } => {
                write!(f, "row {row} has {count} tents, target is {target}")
            }
            Violation::ColCount { col, target, count } => {
                write!(f, "column {col} has {count} tents, target is {target}")
            }
            Violation::CountMismatch { tents, trees } => {
                write!(f, "{tents} tents cannot pair with {trees} trees")
            }
        }
    }
}

/// Every violation on the board, in deterministic scan order: the count
/// mismatch first, then per-tent problems row-major, then row and column
/// counts. Touching pairs are reported once each.
pub fn violations(grid: &Grid) -> Vec<Violation> {
    let mut out = Vec::new();

    let tents = grid.positions_of(CellState::Tent);
    let trees = grid.positions_of(CellState::Tree);
    if tents.len() != trees.len() {
        out.push(Violation::CountMismatch {
            tents: tents.len(),
            trees: trees.len(),
        });
    }

    for &tent in &tents {
        for neighbor in grid.neighbors(tent, Adjacency::Diagonal) {
            if grid.get(neighbor) == CellState::Tent && tent < neighbor {
                out.push(Violation::TouchingTents {
                    first: tent,
                    second: neighbor,
                });
            }
        }
        let has_tree = grid
            .neighbors(tent, Adjacency::Orthogonal)
            .any(|neighbor| grid.get(neighbor) == CellState::Tree);
        if !has_tree {
            out.push(Violation::LonelyTent { tent });
        }
    }

    for (row, &target) in grid.row_targets().iter().enumerate() {
        let count = grid.count_in_row(CellState::Tent, row);
        if count != target as usize {
            out.push(Violation::RowCount { row, target, count });
        }
    }
    for (col, &target) in grid.col_targets().iter().enumerate() {
        let count = grid.count_in_col(CellState::Tent, col);
        if count != target as usize {
            out.push(Violation::ColCount { col, target, count });
        }
    }

    out
}

/// The win condition: no violations at all.
pub fn is_solved(grid: &Grid) -> bool {
    violations(grid).is_empty()
}
