// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Plain-text puzzle format.
//!
//! The first meaningful line lists the column targets; each following line
//! is one row of cells and the row's target. Blank lines and `#` comments
//! are skipped.
//!
//! ```text
//! # a 3x3 puzzle
//! 0 2 0
//! T..  1
//! ...  0
//! ..T  1
//! ```

use crate::error::{Result, TentsError};
use crate::grid::{CellState, Grid, Position};
use std::fmt::Write;

fn format_error(line: usize, message: String) -> TentsError {
    TentsError::PuzzleFormat { line, message }
}

fn parse_target(token: &str, line: usize, what: &str) -> Result<u32> {
    token
        .parse()
        .map_err(|_| format_error(line, format!("invalid {what} {token:?}")))
}

/// Parse a puzzle from its text form.
pub fn parse_puzzle(text: &str) -> Result<Grid> {
    let mut col_targets: Option<Vec<u32>> = None;
    let mut rows: Vec<Vec<CellState>> = Vec::new();
    let mut row_targets: Vec<u32> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let number = index + 1;

        if col_targets.is_none() {
            let targets = line
                .split_whitespace()
                .map(|token| parse_target(token, number, "column target"))
                .collect::<Result<Vec<u32>>>()?;
            col_targets = Some(targets);
            continue;
        }

        let mut parts = line.split_whitespace();
        let cells_token = parts.next().expect("trimmed line is non-empty");
        let target_token = parts
            .next()
            .ok_or_else(|| format_error(number, "missing row target".to_string()))?;
        if let Some(extra) = parts.next() {
            return Err(format_error(
                number,
                format!("unexpected trailing token {extra:?}"),
            ));
        }

        let cells = cells_token
            .chars()
            .map(|c| {
                CellState::from_char(c)
                    .ok_or_else(|| format_error(number, format!("unknown cell {c:?}")))
            })
            .collect::<Result<Vec<CellState>>>()?;
        rows.push(cells);
        row_targets.push(parse_target(target_token, number, "row target")?);
    }

    let col_targets = col_targets.ok_or(TentsError::EmptyGrid)?;
    Grid::from_rows(rows, row_targets, col_targets)
}

/// Render a board in the format [`parse_puzzle`] reads.
pub fn render_puzzle(grid: &Grid) -> String {
    let mut out = String::new();
    let col_targets: Vec<String> = grid.col_targets().iter().map(u32::to_string).collect();
    let _ = writeln!(out, "{}", col_targets.join(" "));
    for (row, &target) in grid.row_targets().iter().enumerate() {
        for col in 0..grid.cols() {
            out.push(grid.get(Position::new(row, col)).as_char());
        }
        let _ = writeln!(out, "  {target}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Position;

    #[test]
    fn test_parse_basic_puzzle() {
        let grid = parse_puzzle("0 2 0\nT..  1\n...  0\n..T  1\n").unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.row_targets(), &[1, 0, 1]);
        assert_eq!(grid.col_targets(), &[0, 2, 0]);
        assert_eq!(grid.get(Position::new(0, 0)), CellState::Tree);
        assert_eq!(grid.get(Position::new(2, 2)), CellState::Tree);
        assert_eq!(grid.get(Position::new(1, 1)), CellState::Empty);
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let text = "# tents puzzle\n\n1 0\n\n# one row\nT.  1\n";
        let grid = parse_puzzle(text).unwrap();
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.col_targets(), &[1, 0]);
    }

    #[test]
    fn test_round_trip() {
        let text = "0 2 0\nT..  1\n...  0\n..T  1\n";
        let grid = parse_puzzle(text).unwrap();
        let rendered = render_puzzle(&grid);
        assert_eq!(parse_puzzle(&rendered).unwrap(), grid);
    }

    #[test]
    fn test_unknown_cell_reports_line() {
        let err = parse_puzzle("1 1\nTx  1\n..  1\n").unwrap_err();
        match err {
            TentsError::PuzzleFormat { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("unknown cell"));
            }
            other => panic!("expected PuzzleFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_row_target_reports_line() {
        let err = parse_puzzle("1 1\nT.\n").unwrap_err();
        assert!(matches!(
            err,
            TentsError::PuzzleFormat { line: 2, .. }
        ));
    }

    #[test]
    fn test_bad_column_target() {
        let err = parse_puzzle("1 x\nT.  1\n").unwrap_err();
        assert!(matches!(
            err,
            TentsError::PuzzleFormat { line: 1, .. }
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(
            parse_puzzle("# nothing here\n"),
            Err(TentsError::EmptyGrid)
        ));
    }
}
