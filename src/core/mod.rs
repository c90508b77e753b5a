//! Core engine types: colors, cells, coordinates, RNG, configuration, errors.
//!
//! These are the leaf building blocks shared by the board, the rules and
//! the state machine.

pub mod coord;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use coord::{Coord, BOARD_SIZE, PLAYABLE_CELLS};
pub use player::{Cell, Color};
pub use rng::{GameRng, GameRngState};
pub use config::EngineConfig;
pub use error::{ConfigError, PositionError, StateError};
