//! Match state and the turn state machine that mutates it.

pub mod engine;
pub mod state;

pub use engine::{ConfirmOutcome, Engine};
pub use state::{GameState, MoveRecord, Pending, Phase};
