//! Move evaluation helpers for the computer player.
//!
//! Both look at the board as it stands: no rotation is simulated.

use crate::board::Board;
use crate::core::{Color, Coord};
use crate::rules::WinDetector;

/// Would filling `coord` with `color` give `color` a complete segment?
#[must_use]
pub fn wins_if_placed(detector: &WinDetector, board: &Board, coord: Coord, color: Color) -> bool {
    let mut scratch = board.clone();
    scratch.set(coord, color.into());
    detector.has_winner(&scratch, color)
}

/// Pieces of `color` in the eight cells around `coord`, clipped at edges.
#[must_use]
pub fn adjacency_score(board: &Board, coord: Coord, color: Color) -> usize {
    board.neighbors_of_color(coord, color)
}
