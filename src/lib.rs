// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver for tents-and-trees puzzles.
//!
//! A puzzle is a rectangular board of fixed tree cells plus an exact tent
//! count for every row and column. A solution places one tent per tree so
//! that each tent stands orthogonally next to its tree, no two tents touch
//! (even diagonally), and the line counts come out exact.
//!
//! # Architecture
//!
//! - [`grid`]: the board model. Cell states, positions, neighborhoods,
//!   and the target vectors, as pure data with bounds-checked queries.
//! - [`solver`]: depth-first search with exact undo. Always expands the
//!   tree with the fewest legal tent cells; placements shadow their
//!   neighborhood with reference-counted grass so backtracking restores
//!   exactly the cells a placement changed.
//! - [`verify`]: the win condition as pure queries, usable on solver
//!   output and half-played boards alike.
//! - [`puzzle`]: a small text format so puzzles can live in files.
//!
//! Solving is deterministic: the same board always yields the same tent
//! set (or the same "no solution" verdict). Each solve call owns all of
//! its working state and never mutates the caller's board.

pub mod error;
pub mod grid;
pub mod puzzle;
pub mod solver;
pub mod verify;

pub use error::{Result, TentsError};
pub use grid::{Adjacency, CellState, Grid, Position};
pub use solver::{solve, Solver};
