//! Computer opponent.
//!
//! The engine never moves on its own; a caller (usually [`Session`](crate::session::Session))
//! asks a [`MovePolicy`] for a cell and drives the normal pend/confirm/rotate
//! path with it.

pub mod heuristic;
pub mod policy;

pub use heuristic::{adjacency_score, wins_if_placed};
pub use policy::{choose_ai_move, Choice, GreedyPolicy, MovePolicy, Tier};
