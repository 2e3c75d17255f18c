// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shared helpers for building boards in integration tests.

#![allow(dead_code)]

use tents_search::{CellState, Grid, Position};

/// Build a board from one string per row plus the two target vectors.
pub fn board(rows: &[&str], row_targets: &[u32], col_targets: &[u32]) -> Grid {
    let cells = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|c| CellState::from_char(c).expect("test boards use known cell chars"))
                .collect()
        })
        .collect();
    Grid::from_rows(cells, row_targets.to_vec(), col_targets.to_vec())
        .expect("test boards are well formed")
}

pub fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col)
}

/// Build a board from a planted solution: trees are placed, tents define
/// the line targets, and the returned board contains only the trees.
/// Useful for instances that are solvable by construction.
pub fn planted(rows: usize, cols: usize, trees: &[Position], tents: &[Position]) -> Grid {
    let mut cells = vec![vec![CellState::Empty; cols]; rows];
    for tree in trees {
        cells[tree.row][tree.col] = CellState::Tree;
    }
    let mut row_targets = vec![0u32; rows];
    let mut col_targets = vec![0u32; cols];
    for tent in tents {
        row_targets[tent.row] += 1;
        col_targets[tent.col] += 1;
    }
    Grid::from_rows(cells, row_targets, col_targets).expect("planted boards are well formed")
}
