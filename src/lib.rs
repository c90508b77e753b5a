//! # orbit-five
//!
//! Rules engine for a two-player five-in-a-row game on a 5x5 board whose
//! rings of cells rotate after every placement.
//!
//! ## Design Principles
//!
//! 1. **Caller-Owned State**: `GameState` is a plain value. The `Engine`
//!    holds only rule constants, so any number of matches can run side by
//!    side and a state can be cloned for lookahead.
//!
//! 2. **Explicit Turn Phases**: a turn is placement -> confirm -> rotate ->
//!    resolve, and `Phase` is the only coordination signal. The Rotating
//!    phase is a suspension point the caller may fill with an animation.
//!
//! 3. **Rejections Are Values**: invalid user actions return `false` or
//!    `ConfirmOutcome::Rejected` and leave the state untouched. Only caller
//!    contract breaches panic.
//!
//! ## Modules
//!
//! - `core`: colors, cells, coordinates, RNG, configuration, errors
//! - `board`: occupancy grid and ring geometry
//! - `rules`: line segments, win/draw detection, rotation
//! - `game`: state aggregate and turn state machine
//! - `ai`: computer move selection
//! - `session`: match orchestration (modes, coin toss, computer turns)

pub mod core;
pub mod board;
pub mod rules;
pub mod game;
pub mod ai;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Cell, Color, Coord, BOARD_SIZE, PLAYABLE_CELLS,
    GameRng, GameRngState,
    EngineConfig, ConfigError, PositionError, StateError,
};

pub use crate::board::{Arrow, Board, BoardParseError, Track, TrackSlot, INNER_TRACK, OUTER_TRACK};

pub use crate::rules::{all_line_segments, is_draw, rotate_board, rotate_track, Segment, Status, WinDetector};

pub use crate::game::{ConfirmOutcome, Engine, GameState, MoveRecord, Pending, Phase};

pub use crate::ai::{choose_ai_move, Choice, GreedyPolicy, MovePolicy, Tier};

pub use crate::session::{play_out, ComputerMove, MatchMode, Selection, Session};
