//! Win and draw detection.
//!
//! A segment is won by a color when every non-neutral cell in it holds that
//! color. The neutral center is skipped during the scan: it matches any
//! color and never breaks a run, but it cannot win a segment on its own.
//!
//! Two entry points exist and stay separate:
//! - [`WinDetector::has_winner`] asks about one color and is used right
//!   after a placement, before rotation.
//! - [`WinDetector::check_win`] looks at both colors and is used after
//!   rotation, where both may complete a segment at once. The color to move
//!   takes the tie.

use tracing::debug;

use crate::board::Board;
use crate::core::{Color, Coord, EngineConfig};

use super::lines::{all_line_segments, Segment};
use super::outcome::Status;

/// Precomputed segments plus the center rule.
#[derive(Clone, Debug)]
pub struct WinDetector {
    segments: Vec<Segment>,
    neutral_center: bool,
}

impl WinDetector {
    /// Build the segment set for `config`.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            segments: all_line_segments(config.win_length),
            neutral_center: config.neutral_center,
        }
    }

    /// All candidate segments.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn is_neutral(&self, coord: Coord) -> bool {
        self.neutral_center && coord.is_center()
    }

    /// The single color owning every non-neutral cell of `segment`.
    ///
    /// `None` if a non-neutral cell is empty, two colors appear, or every
    /// cell was neutral.
    #[must_use]
    pub fn segment_winner(&self, segment: &[Coord], board: &Board) -> Option<Color> {
        let mut candidate = None;

        for &coord in segment {
            if self.is_neutral(coord) {
                continue;
            }
            let color = board.get(coord).color()?;
            match candidate {
                None => candidate = Some(color),
                Some(c) if c != color => return None,
                Some(_) => {}
            }
        }

        candidate
    }

    /// True if any segment is won by `color`.
    #[must_use]
    pub fn has_winner(&self, board: &Board, color: Color) -> bool {
        self.segments
            .iter()
            .any(|segment| self.segment_winner(segment, board) == Some(color))
    }

    /// Full check over both colors.
    ///
    /// When both colors own a segment, `to_move` (the player whose
    /// placement triggered the rotation) is the sole winner.
    #[must_use]
    pub fn check_win(&self, board: &Board, to_move: Color) -> Option<Color> {
        let mut white = false;
        let mut black = false;

        for segment in &self.segments {
            match self.segment_winner(segment, board) {
                Some(Color::White) => white = true,
                Some(Color::Black) => black = true,
                None => {}
            }
        }

        match (white, black) {
            (true, true) => {
                debug!(winner = %to_move, "both colors completed a segment; mover takes the tie");
                Some(to_move)
            }
            (true, false) => Some(Color::White),
            (false, true) => Some(Color::Black),
            (false, false) => None,
        }
    }
}

/// A match still in progress with every playable cell occupied.
#[must_use]
pub fn is_draw(status: Status, board: &Board) -> bool {
    status == Status::InProgress && board.is_full()
}
