//! Property tests over random boards and random matches.

use proptest::prelude::*;

use orbit_five::ai::MovePolicy;
use orbit_five::board::{Board, Track};
use orbit_five::core::{Cell, Color, Coord, GameRng};
use orbit_five::game::{ConfirmOutcome, Engine, GameState, Phase};
use orbit_five::rules::{rotate_board, rotate_track};
use orbit_five::session::play_out;

/// Uniform over the legal moves.
struct Uniform;

impl MovePolicy for Uniform {
    fn choose(
        &self,
        _engine: &Engine,
        state: &GameState,
        _color: Color,
        rng: &mut GameRng,
    ) -> Option<Coord> {
        rng.choose(&state.legal_moves()).copied()
    }
}

fn arb_board() -> impl Strategy<Value = Board> {
    prop::collection::vec(0u8..3, 24).prop_map(|cells| {
        let mut board = Board::new();
        for (coord, v) in Coord::playable().zip(cells) {
            let cell = match v {
                1 => Cell::White,
                2 => Cell::Black,
                _ => Cell::Empty,
            };
            board.set(coord, cell);
        }
        board
    })
}

// =============================================================================
// Rotation
// =============================================================================

proptest! {
    #[test]
    fn prop_track_rotation_order_is_track_length(board in arb_board()) {
        for track in Track::ALL {
            let mut rotated = board.clone();
            for _ in 0..track.len() {
                rotate_track(&mut rotated, track);
            }
            prop_assert_eq!(&rotated, &board);
        }
    }

    #[test]
    fn prop_rotation_preserves_piece_counts(board in arb_board()) {
        let mut rotated = board.clone();
        rotate_board(&mut rotated);

        prop_assert_eq!(rotated.count(Color::White), board.count(Color::White));
        prop_assert_eq!(rotated.count(Color::Black), board.count(Color::Black));
        prop_assert!(rotated.get(Coord::CENTER).is_empty());
    }
}

// =============================================================================
// Random Matches
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_random_self_play_terminates(seed in any::<u64>(), white_starts in any::<bool>()) {
        let engine = Engine::default();
        let starting = if white_starts { Color::White } else { Color::Black };
        let mut state = engine.new_match(starting);

        let status = play_out(&engine, &Uniform, &mut state, &mut GameRng::new(seed));

        prop_assert!(status.is_over());
        prop_assert_eq!(state.phase(), Phase::Ended);
        prop_assert!(state.move_count() <= 24);
        prop_assert_eq!(state.history().len() as u32, state.move_count());
        prop_assert_eq!(state.board().stones() as u32, state.move_count());
    }

    #[test]
    fn prop_turn_accounting_and_center(seed in any::<u64>()) {
        let engine = Engine::default();
        let mut state = engine.new_match(Color::White);
        let mut rng = GameRng::new(seed);

        while !state.is_over() {
            prop_assert!(!engine.preview(&state, Coord::CENTER));

            let mover = state.current_player();
            let mine = state.board().count(mover);
            let theirs = state.board().count(mover.opponent());

            let coord = Uniform.choose(&engine, &state, mover, &mut rng).unwrap();
            prop_assert!(engine.set_pending(&mut state, coord));
            match engine.confirm_center_activation(&mut state) {
                ConfirmOutcome::Rotate => {
                    prop_assert!(!engine.preview(&state, Coord::CENTER));
                    engine.apply_rotation(&mut state);
                }
                ConfirmOutcome::Resolved(_) => {}
                ConfirmOutcome::Rejected => {
                    prop_assert!(false, "confirm rejected");
                }
            }

            prop_assert_eq!(state.board().count(mover), mine + 1);
            prop_assert_eq!(state.board().count(mover.opponent()), theirs);
            if !state.is_over() {
                prop_assert_eq!(state.current_player(), mover.opponent());
            }
        }
        prop_assert!(!engine.preview(&state, Coord::CENTER));
    }
}
