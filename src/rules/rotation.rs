//! Ring rotation.
//!
//! Each track is read into a buffer in track order, rotated left by one
//! (the value at index 0 wraps to the end) and written back. The tracks are
//! disjoint, so processing order between them does not matter.

use smallvec::SmallVec;

use crate::board::{Board, Track};
use crate::core::Cell;

/// Rotate one track a single counterclockwise step.
pub fn rotate_track(board: &mut Board, track: Track) {
    let coords = track.cells();
    let mut values: SmallVec<[Cell; 16]> = coords.iter().map(|&c| board.get(c)).collect();
    values.rotate_left(1);
    for (&coord, &value) in coords.iter().zip(values.iter()) {
        board.set(coord, value);
    }
}

/// Rotate both tracks one step. Valid on any board regardless of phase.
pub fn rotate_board(board: &mut Board) {
    for track in Track::ALL {
        rotate_track(board, track);
    }
}
