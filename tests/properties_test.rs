// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Behavior that must hold on every solve: determinism, caller isolation,
//! and validity of everything the solver emits.

mod common;

use common::{board, planted, pos};
use tents_search::{solve, verify};

#[test]
fn test_repeated_solves_agree() {
    let grid = board(
        &["T..T", "....", "....", "T..T"],
        &[1, 1, 1, 1],
        &[1, 1, 1, 1],
    );
    let first = solve(&grid).unwrap();
    let second = solve(&grid).unwrap();
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_repeated_failures_agree() {
    let grid = board(&["T.", ".."], &[1, 0], &[1, 0]);
    assert_eq!(solve(&grid).unwrap(), None);
    assert_eq!(solve(&grid).unwrap(), None);
}

#[test]
fn test_callers_board_is_never_mutated() {
    let grid = board(&["T..", "...", "..T"], &[1, 0, 1], &[0, 2, 0]);
    let snapshot = grid.clone();
    solve(&grid).unwrap();
    assert_eq!(grid, snapshot);

    let infeasible = board(&["T"], &[1], &[1]);
    let snapshot = infeasible.clone();
    solve(&infeasible).unwrap();
    assert_eq!(infeasible, snapshot);
}

#[test]
fn test_every_success_is_a_solved_board() {
    let boards = vec![
        board(&["T.", ".."], &[1, 0], &[0, 1]),
        board(&["T..", "...", "..T"], &[1, 0, 1], &[0, 2, 0]),
        board(
            &["T..T", "....", "....", "T..T"],
            &[1, 1, 1, 1],
            &[1, 1, 1, 1],
        ),
        board(&["T.T.T", ".....", "....."], &[0, 3, 0], &[1, 0, 1, 0, 1]),
    ];
    for grid in boards {
        let tents = solve(&grid)
            .unwrap()
            .expect("every board in this list is solvable");
        let solved = grid.with_solution(&tents);
        assert_eq!(verify::violations(&solved), vec![]);
        assert_eq!(
            tents.len(),
            grid.positions_of(tents_search::CellState::Tree).len()
        );
    }
}

#[test]
fn test_planted_solutions_are_found() {
    // Boards built around a known-legal placement must come back solvable,
    // though not necessarily with the planted tents.
    let cases = vec![
        planted(
            5,
            5,
            &[pos(0, 0), pos(0, 3), pos(2, 2), pos(4, 0)],
            &[pos(0, 1), pos(0, 4), pos(3, 2), pos(3, 0)],
        ),
        planted(
            6,
            6,
            &[
                pos(0, 1),
                pos(1, 4),
                pos(2, 0),
                pos(3, 3),
                pos(5, 1),
                pos(5, 5),
            ],
            &[
                pos(0, 0),
                pos(0, 4),
                pos(3, 0),
                pos(2, 3),
                pos(5, 2),
                pos(4, 5),
            ],
        ),
        planted(
            7,
            7,
            &[
                pos(0, 0),
                pos(0, 4),
                pos(2, 2),
                pos(3, 6),
                pos(4, 0),
                pos(6, 3),
                pos(6, 6),
            ],
            &[
                pos(1, 0),
                pos(0, 5),
                pos(1, 2),
                pos(2, 6),
                pos(3, 0),
                pos(6, 2),
                pos(5, 6),
            ],
        ),
    ];
    for grid in cases {
        let tents = solve(&grid)
            .unwrap()
            .expect("planted boards are solvable by construction");
        let solved = grid.with_solution(&tents);
        assert_eq!(verify::violations(&solved), vec![]);
    }
}
