// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for board construction, solving, and puzzle parsing.

use crate::grid::{CellState, Position};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TentsError>;

#[derive(Debug, Error)]
pub enum TentsError {
    #[error("board must have at least one row and one column")]
    EmptyGrid,

    #[error("board must be rectangular: row {row} has {got} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("expected {expected} row targets, got {got}")]
    RowTargets { expected: usize, got: usize },

    #[error("expected {expected} column targets, got {got}")]
    ColTargets { expected: usize, got: usize },

    #[error("cell {position} holds {state}; solver input may only contain empty and tree cells")]
    ForbiddenCell {
        position: Position,
        state: CellState,
    },

    #[error("puzzle line {line}: {message}")]
    PuzzleFormat { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
