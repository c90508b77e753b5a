//! Computer move selection.
//!
//! `MovePolicy` is the seam a session uses to ask "where does this color
//! play?". `GreedyPolicy` is the one fixed heuristic the engine ships:
//!
//! 1. **Win**: a cell that completes a segment for us right now.
//! 2. **Block**: a cell that would complete a segment for the opponent.
//! 3. **Adjacency**: the cell touching the most of our pieces. A score of
//!    zero still counts, so with nothing of ours on the board this is the
//!    first open cell.
//! 4. **Random**: uniform over the open cells if tier 3 produced nothing.
//!    Tier 3 scores every legal move, so this does not fire in practice.
//!
//! Ties in tiers 1-3 go to the first cell in row-major order. The lookahead
//! is one ply and ignores the rotation that follows the placement.

use tracing::trace;

use crate::core::{Color, Coord, GameRng};
use crate::game::{Engine, GameState};

use super::heuristic::{adjacency_score, wins_if_placed};

/// Which rule produced a choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
    Win,
    Block,
    Adjacency,
    Random,
}

/// A chosen cell and the rule that picked it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    pub coord: Coord,
    pub tier: Tier,
}

/// Picks a cell for a color to play.
pub trait MovePolicy: Send + Sync {
    /// An empty playable cell, or `None` when there is no legal move.
    fn choose(
        &self,
        engine: &Engine,
        state: &GameState,
        color: Color,
        rng: &mut GameRng,
    ) -> Option<Coord>;
}

/// Fixed greedy heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl MovePolicy for GreedyPolicy {
    fn choose(
        &self,
        engine: &Engine,
        state: &GameState,
        color: Color,
        rng: &mut GameRng,
    ) -> Option<Coord> {
        choose_ai_move(engine, state, color, rng).map(|choice| choice.coord)
    }
}

/// Run the greedy heuristic for `color` on `state`.
#[must_use]
pub fn choose_ai_move(
    engine: &Engine,
    state: &GameState,
    color: Color,
    rng: &mut GameRng,
) -> Option<Choice> {
    let moves = state.legal_moves();
    if moves.is_empty() {
        return None;
    }

    let detector = engine.detector();
    let board = state.board();

    for (tier, target) in [(Tier::Win, color), (Tier::Block, color.opponent())] {
        if let Some(&coord) = moves
            .iter()
            .find(|&&m| wins_if_placed(detector, board, m, target))
        {
            trace!(%coord, ?tier, "computer move");
            return Some(Choice { coord, tier });
        }
    }

    let mut best: Option<(Coord, usize)> = None;
    for &m in &moves {
        let score = adjacency_score(board, m, color);
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((m, score));
        }
    }
    if let Some((coord, score)) = best {
        trace!(%coord, score, "computer move by adjacency");
        return Some(Choice {
            coord,
            tier: Tier::Adjacency,
        });
    }

    let coord = *rng.choose(&moves)?;
    trace!(%coord, "computer move at random");
    Some(Choice {
        coord,
        tier: Tier::Random,
    })
}
