//! Board model and track geometry.
//!
//! - `Board`: the 5x5 occupancy grid
//! - `track`: the two rotating rings and the per-cell lookup over them

pub mod grid;
pub mod track;

pub use grid::{Board, BoardParseError};
pub use track::{Arrow, Track, TrackSlot, INNER_TRACK, OUTER_TRACK};
