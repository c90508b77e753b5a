//! Line segments: every straight run of `win_length` cells on the grid.
//!
//! Segments are found by sliding a window from every start cell in each of
//! four directions (right, down, down-right, up-right) and keeping only the
//! windows that stay on the board. The set depends only on the board size
//! and the win length, so an engine builds it once and reuses it.

use smallvec::SmallVec;

use crate::core::{Coord, BOARD_SIZE};

/// Direction vectors `(d_row, d_col)`.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // →
    (1, 0),  // ↓
    (1, 1),  // ↘
    (-1, 1), // ↗
];

/// Cells of one segment, in scan order. Inline for runs up to the board size.
pub type Segment = SmallVec<[Coord; BOARD_SIZE]>;

/// All segments of `win_length` cells, in start-cell row-major order.
///
/// ```
/// use orbit_five::rules::lines::all_line_segments;
///
/// assert_eq!(all_line_segments(5).len(), 12);
/// ```
#[must_use]
pub fn all_line_segments(win_length: usize) -> Vec<Segment> {
    let mut segments = Vec::new();
    if win_length == 0 {
        return segments;
    }

    for start in Coord::all() {
        for &(dr, dc) in &DIRECTIONS {
            let segment: Option<Segment> = (0..win_length as i32)
                .map(|i| {
                    Coord::checked(
                        i32::from(start.row) + i * dr,
                        i32::from(start.col) + i * dc,
                    )
                })
                .collect();
            if let Some(segment) = segment {
                segments.push(segment);
            }
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_long_segment_count() {
        // 5 rows + 5 columns + 1 per diagonal direction.
        assert_eq!(all_line_segments(5).len(), 12);
    }

    #[test]
    fn test_shorter_runs() {
        // 5*2 horizontal, 2*5 vertical, 2*2 for each diagonal.
        assert_eq!(all_line_segments(4).len(), 28);
        assert_eq!(all_line_segments(1).len(), 100);
        assert!(all_line_segments(0).is_empty());
    }

    #[test]
    fn test_segments_are_straight_and_on_grid() {
        for segment in all_line_segments(5) {
            assert_eq!(segment.len(), 5);
            let dr = i32::from(segment[1].row) - i32::from(segment[0].row);
            let dc = i32::from(segment[1].col) - i32::from(segment[0].col);
            assert!(DIRECTIONS.contains(&(dr, dc)));
            for pair in segment.windows(2) {
                assert_eq!(i32::from(pair[1].row) - i32::from(pair[0].row), dr);
                assert_eq!(i32::from(pair[1].col) - i32::from(pair[0].col), dc);
            }
            assert!(segment.iter().all(|c| c.is_on_grid()));
        }
    }

    #[test]
    fn test_diagonals_present() {
        let segments = all_line_segments(5);
        let main: Segment = (0..5u8).map(|i| Coord::new(i, i)).collect();
        let anti: Segment = (0..5u8).map(|i| Coord::new(4 - i, i)).collect();
        assert!(segments.contains(&main));
        assert!(segments.contains(&anti));
    }
}
