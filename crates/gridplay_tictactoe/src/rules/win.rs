//! Win detection for K-in-a-row grids.

use super::super::{Board, Cell, Coord, Side};
use tracing::instrument;

/// Enumerates every winning line of `run_length` cells on a `size`×`size` grid.
///
/// Order is fixed: rows, then columns, then down-right diagonals, then
/// down-left diagonals. Within each group lines are listed by starting cell
/// in row-major order. On the classic board this yields the 3 rows, the 3
/// columns, `(0,0)-(2,2)`, and `(0,2)-(2,0)`.
#[instrument]
pub fn winning_lines(size: usize, run_length: usize) -> Vec<Vec<Coord>> {
    if run_length == 0 || run_length > size {
        return Vec::new();
    }
    let k = run_length;
    let span = size - k;
    let mut lines = Vec::new();

    // Rows
    for row in 0..size {
        for start in 0..=span {
            lines.push((0..k).map(|i| Coord::new(row, start + i)).collect());
        }
    }

    // Columns
    for col in 0..size {
        for start in 0..=span {
            lines.push((0..k).map(|i| Coord::new(start + i, col)).collect());
        }
    }

    // Diagonals
    for row in 0..=span {
        for col in 0..=span {
            lines.push((0..k).map(|i| Coord::new(row + i, col + i)).collect());
        }
    }
    for row in 0..=span {
        for col in (k - 1)..size {
            lines.push((0..k).map(|i| Coord::new(row + i, col - i)).collect());
        }
    }

    lines
}

/// Checks if there is a winner on the board.
///
/// Returns the side and the first completed line in [`winning_lines`] order,
/// or `None` when no line is complete. Several lines may be complete on a
/// hand-built board; only the first is reported.
#[instrument(skip(board), fields(size = board.size(), run_length = board.run_length()))]
pub fn check_winner(board: &Board) -> Option<(Side, Vec<Coord>)> {
    winning_lines(board.size(), board.run_length())
        .into_iter()
        .find_map(|line| {
            let first = board.get(*line.first()?)?;
            match first {
                Cell::Occupied(side) if line.iter().all(|c| board.get(*c) == Some(first)) => {
                    Some((side, line))
                }
                _ => None,
            }
        })
}
