//! Session integration tests.
//!
//! A session is what a presentation layer holds: it routes cell clicks,
//! waits for the caller to finish rotations, and plays the computer's turns.

use orbit_five::ai::{GreedyPolicy, MovePolicy};
use orbit_five::core::{Color, Coord, GameRng};
use orbit_five::game::{ConfirmOutcome, Engine, GameState, Phase};
use orbit_five::session::{play_out, MatchMode, Selection, Session};

/// Always takes the first open cell in row-major order.
struct FirstOpen;

impl MovePolicy for FirstOpen {
    fn choose(
        &self,
        _engine: &Engine,
        state: &GameState,
        _color: Color,
        _rng: &mut GameRng,
    ) -> Option<Coord> {
        state.legal_moves().first().copied()
    }
}

/// Human plays the first open cell; the computer answers until the end.
fn drive_to_end<P: MovePolicy>(session: &mut Session<P>) {
    let mut guard = 0;
    while !session.state().is_over() {
        guard += 1;
        assert!(guard <= 48, "match did not terminate");

        let outcome = if session.is_computer_turn() {
            session.play_computer_turn().unwrap().outcome
        } else {
            let coord = session.state().legal_moves()[0];
            assert_eq!(session.select_cell(coord), Selection::Pending);
            match session.select_cell(Coord::CENTER) {
                Selection::Confirmed(outcome) => outcome,
                other => panic!("confirm failed: {other:?}"),
            }
        };
        if outcome == ConfirmOutcome::Rotate {
            assert!(session.finish_rotation());
        }
    }
}

// =============================================================================
// Player vs Player
// =============================================================================

#[test]
fn test_pvp_alternates_turns() {
    let mut session = Session::new(Engine::default(), MatchMode::PlayerVsPlayer, 3);
    let starter = session.start();

    assert!(!session.is_computer_turn());
    assert_eq!(session.select_cell(Coord::new(4, 2)), Selection::Pending);
    // Clicking another cell moves the earmark.
    assert_eq!(session.select_cell(Coord::new(4, 3)), Selection::Pending);
    assert_eq!(session.state().pending().map(|p| p.coord), Some(Coord::new(4, 3)));

    assert_eq!(
        session.select_cell(Coord::CENTER),
        Selection::Confirmed(ConfirmOutcome::Rotate)
    );
    // Clicks during the rotation window are ignored.
    assert_eq!(session.select_cell(Coord::new(0, 0)), Selection::Ignored);
    assert_eq!(session.state().phase(), Phase::Rotating);

    assert!(session.finish_rotation());
    assert_eq!(session.state().current_player(), starter.opponent());
    assert_eq!(session.state().move_count(), 1);
}

#[test]
fn test_pvp_match_runs_to_completion() {
    let mut session = Session::new(Engine::default(), MatchMode::PlayerVsPlayer, 8);
    session.start_with(Color::White);

    drive_to_end(&mut session);

    assert!(session.state().status().is_over());
    assert_eq!(session.select_cell(Coord::new(0, 0)), Selection::Ignored);
    assert!(!session.finish_rotation());
}

// =============================================================================
// Player vs Computer
// =============================================================================

#[test]
fn test_pvc_match_runs_to_completion() {
    for seed in 0..10 {
        let mode = MatchMode::PlayerVsComputer { computer: Color::Black };
        let mut session = Session::new(Engine::default(), mode, seed);
        session.start();

        drive_to_end(&mut session);

        let state = session.state();
        assert!(state.is_over());
        assert_eq!(state.history().len() as u32, state.move_count());
        assert!(!session.is_computer_turn());
    }
}

#[test]
fn test_custom_policy_drives_computer() {
    let mode = MatchMode::PlayerVsComputer { computer: Color::White };
    let mut session = Session::with_policy(Engine::default(), FirstOpen, mode, 0);
    session.start_with(Color::White);

    let played = session.play_computer_turn().unwrap();

    assert_eq!(played.coord, Coord::new(0, 0));
    assert_eq!(played.outcome, ConfirmOutcome::Rotate);
    assert!(session.finish_rotation());
    assert_eq!(session.state().board().count(Color::White), 1);
}

// =============================================================================
// Self-Play
// =============================================================================

#[test]
fn test_play_out_is_deterministic_per_seed() {
    let engine = Engine::default();

    let run = |seed: u64| {
        let mut state = engine.new_match(Color::Black);
        let status = play_out(&engine, &GreedyPolicy, &mut state, &mut GameRng::new(seed));
        (status, state)
    };

    let (status_a, state_a) = run(21);
    let (status_b, state_b) = run(21);
    assert_eq!(status_a, status_b);
    assert_eq!(state_a, state_b);
    assert!(status_a.is_over());
}

#[test]
fn test_play_out_first_open_policy() {
    let engine = Engine::default();
    let mut state = engine.new_match(Color::White);

    let status = play_out(&engine, &FirstOpen, &mut state, &mut GameRng::new(0));

    assert!(status.is_over());
    assert_eq!(state.phase(), Phase::Ended);
    assert_eq!(state.board().stones() as u32, state.move_count());
}
