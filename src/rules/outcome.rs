//! Match result status.

use serde::{Deserialize, Serialize};

use crate::core::Color;

/// Result status of a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[default]
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
}

impl Status {
    /// The win status for `color`.
    #[must_use]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => Status::WhiteWins,
            Color::Black => Status::BlackWins,
        }
    }

    /// The winning color, if the match was won.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Status::WhiteWins => Some(Color::White),
            Status::BlackWins => Some(Color::Black),
            Status::InProgress | Status::Draw => None,
        }
    }

    /// Check if a color won.
    #[must_use]
    pub fn is_winner(self, color: Color) -> bool {
        self.winner() == Some(color)
    }

    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}
