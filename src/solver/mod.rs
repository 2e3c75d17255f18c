// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking tent-placement search.
//!
//! The solver owns a working copy of the caller's board and searches for a
//! placement in which every tree is paired with exactly one orthogonally
//! adjacent tent, no two tents touch (orthogonally or diagonally), and the
//! row/column tent counts match their targets exactly.
//!
//! # Algorithm
//!
//! Depth-first search over trees, one tent placement per level:
//!
//! 1. If every tree is bound, the placement succeeds once the row and
//!    column budgets are fully consumed.
//! 2. Compute each unbound tree's candidate cells: orthogonal neighbors
//!    that are empty, whose row and column still have budget, and that do
//!    not touch a placed tent.
//! 3. Expand the tree with the fewest candidates. Failing fast on the most
//!    constrained tree is what keeps larger boards tractable; ties go to
//!    discovery order so results are reproducible.
//! 4. Try the candidates in order. Each placement grasses the tent's whole
//!    8-neighborhood so later candidate sets exclude touching cells, and
//!    every placement is paired with an exact undo on backtrack (see
//!    [`coverage`] for why undo needs reference counts).
//!
//! Each solve call owns all of its working state, so separate calls never
//! share anything and a call can run on any thread the caller likes. The
//! search has no internal cancellation; callers with a deadline should run
//! it in a task they can abandon.

pub mod coverage;
pub mod statistics;

use crate::error::{Result, TentsError};
use crate::grid::{Adjacency, CellState, Grid, Position};
use coverage::Coverage;
use log::{debug, trace};
use statistics::{Counter, Statistics};

/// Find a tent placement for `grid`, or `None` when no legal placement
/// exists. The caller's board is never mutated.
pub fn solve(grid: &Grid) -> Result<Option<Vec<Position>>> {
    let mut solver = Solver::new(grid)?;
    Ok(solver.solve())
}

/// One solve invocation's working state.
#[derive(Debug)]
pub struct Solver {
    board: Grid,
    row_remaining: Vec<u32>,
    col_remaining: Vec<u32>,
    trees: Vec<Position>,
    bound: Vec<bool>,
    unbound: usize,
    tents: Vec<Position>,
    coverage: Coverage,
    stats: Statistics,
}

impl Solver {
    /// Snapshot working state from `grid`.
    ///
    /// The board may only contain empty and tree cells; a grass or tent
    /// cell means the caller handed over a board mid-edit instead of a
    /// puzzle, and is rejected.
    pub fn new(grid: &Grid) -> Result<Self> {
        let mut trees = Vec::new();
        for (position, state) in grid.iter() {
            match state {
                CellState::Tree => trees.push(position),
                CellState::Empty => {}
                CellState::Grass | CellState::Tent => {
                    return Err(TentsError::ForbiddenCell { position, state });
                }
            }
        }
        Ok(Self {
            row_remaining: grid.row_targets().to_vec(),
            col_remaining: grid.col_targets().to_vec(),
            coverage: Coverage::new(grid.rows(), grid.cols()),
            board: grid.clone(),
            bound: vec![false; trees.len()],
            unbound: trees.len(),
            trees,
            tents: Vec::new(),
            stats: Statistics::new(),
        })
    }

    /// Run the search. Returns the tent positions sorted row-major, or
    /// `None` when the puzzle has no solution.
    pub fn solve(&mut self) -> Option<Vec<Position>> {
        let trees = self.trees.len() as u64;
        let row_sum: u64 = self.board.row_targets().iter().map(|&t| u64::from(t)).sum();
        let col_sum: u64 = self.board.col_targets().iter().map(|&t| u64::from(t)).sum();
        debug!(
            "solving {}x{} board: {} trees, targets {}/{}",
            self.board.rows(),
            self.board.cols(),
            trees,
            row_sum,
            col_sum
        );
        // Tents and trees are matched one to one, so target sums that
        // disagree with the tree count can never be consumed exactly.
        if row_sum != trees || col_sum != trees {
            debug!("target sums cannot match the tree count, no search needed");
            return None;
        }
        if self.search() {
            let mut tents = self.tents.clone();
            tents.sort_unstable();
            debug!("solved: {} tents, {} nodes", tents.len(), self.stats.get(Counter::Nodes));
            Some(tents)
        } else {
            debug!("no solution after {} nodes", self.stats.get(Counter::Nodes));
            None
        }
    }

    /// Counters accumulated by the last [`solve`](Self::solve) run.
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }

    fn search(&mut self) -> bool {
        self.stats.bump(Counter::Nodes);
        let Some((tree, candidates)) = self.most_constrained() else {
            // Every tree is bound; the targets must be exactly consumed.
            return self.row_remaining.iter().all(|&r| r == 0)
                && self.col_remaining.iter().all(|&c| c == 0);
        };
        if candidates.is_empty() {
            self.stats.bump(Counter::DeadEnds);
            return false;
        }
        for tent in candidates {
            self.place(tree, tent);
            if self.search() {
                return true;
            }
            self.unplace(tree, tent);
        }
        false
    }

    /// The unbound tree with the fewest candidate cells, together with
    /// those candidates. `None` once every tree is bound. Ties keep the
    /// first tree in discovery order.
    fn most_constrained(&self) -> Option<(usize, Vec<Position>)> {
        let mut best: Option<(usize, Vec<Position>)> = None;
        for (tree, &position) in self.trees.iter().enumerate() {
            if self.bound[tree] {
                continue;
            }
            let candidates = self.candidates(position);
            let exhausted = candidates.is_empty();
            let improves = match &best {
                Some((_, current)) => candidates.len() < current.len(),
                None => true,
            };
            if improves {
                best = Some((tree, candidates));
            }
            if exhausted {
                // Nothing beats an empty candidate set.
                break;
            }
        }
        best
    }

    /// Legal tent cells for the tree at `position`, in up/down/left/right
    /// order: in bounds, empty, within both line budgets, and not touching
    /// a placed tent.
    fn candidates(&self, position: Position) -> Vec<Position> {
        let mut out = Vec::with_capacity(4);
        for cell in self.board.neighbors(position, Adjacency::Orthogonal) {
            if self.board.get(cell) != CellState::Empty {
                continue;
            }
            if self.row_remaining[cell.row] == 0 || self.col_remaining[cell.col] == 0 {
                continue;
            }
            if self.touches_tent(cell) {
                continue;
            }
            out.push(cell);
        }
        out
    }

    fn touches_tent(&self, cell: Position) -> bool {
        self.board
            .neighbors(cell, Adjacency::Diagonal)
            .any(|neighbor| self.board.get(neighbor) == CellState::Tent)
    }

    /// Put a tent at `tent`, bind it to `tree`, and grass the tent's
    /// 8-neighborhood. Exactly inverted by [`unplace`](Self::unplace).
    fn place(&mut self, tree: usize, tent: Position) {
        trace!("place tent {tent} for tree {}", self.trees[tree]);
        self.board.set(tent, CellState::Tent);
        self.row_remaining[tent.row] -= 1;
        self.col_remaining[tent.col] -= 1;
        self.bound[tree] = true;
        self.unbound -= 1;
        self.tents.push(tent);
        let shadow: Vec<Position> = self.board.neighbors(tent, Adjacency::Diagonal).collect();
        for cell in shadow {
            match self.board.get(cell) {
                CellState::Empty => {
                    self.coverage.cover(cell);
                    self.board.set(cell, CellState::Grass);
                }
                CellState::Grass => {
                    self.coverage.cover(cell);
                }
                CellState::Tree | CellState::Tent => {}
            }
        }
        self.stats.bump(Counter::Placements);
    }

    fn unplace(&mut self, tree: usize, tent: Position) {
        trace!("undo tent {tent} for tree {}", self.trees[tree]);
        let shadow: Vec<Position> = self.board.neighbors(tent, Adjacency::Diagonal).collect();
        for cell in shadow {
            if self.board.get(cell) == CellState::Grass && self.coverage.uncover(cell) {
                self.board.set(cell, CellState::Empty);
            }
        }
        self.tents.pop();
        self.bound[tree] = false;
        self.unbound += 1;
        self.row_remaining[tent.row] += 1;
        self.col_remaining[tent.col] += 1;
        self.board.set(tent, CellState::Empty);
        self.stats.bump(Counter::Undos);
    }
}
