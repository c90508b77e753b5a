//! Rules: line segments, win/draw detection, ring rotation, result status.
//!
//! Everything here is a pure function of a board (plus the rule constants
//! captured in `WinDetector`). Sequencing these checks into a turn is the
//! job of `game::Engine`.

pub mod lines;
pub mod outcome;
pub mod rotation;
pub mod win;

pub use lines::{all_line_segments, Segment};
pub use outcome::Status;
pub use rotation::{rotate_board, rotate_track};
pub use win::{is_draw, WinDetector};
