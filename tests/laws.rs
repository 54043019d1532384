use pocketcube::prelude::*;
use proptest::prelude::*;

fn any_move() -> impl Strategy<Value = Move> {
	(0..NUM_MOVES).prop_map(|i| Move::ALL[i])
}

fn any_sequence() -> impl Strategy<Value = Vec<Move>> {
	prop::collection::vec(any_move(), 0..40)
}

/// Any state reachable from the solved cube
fn any_state() -> impl Strategy<Value = CubeState> {
	any_sequence().prop_map(|moves| CubeState::solved().apply_moves(&moves))
}

proptest! {
	#[test]
	fn move_then_opposite_is_identity(state in any_state(), mv in any_move()) {
		let there = state.apply_move(mv);
		prop_assert_eq!(there.apply_move(mv.opposite()), state.clone());
		prop_assert_eq!(state.apply_move(mv.opposite()).apply_move(mv), state);
	}

	#[test]
	fn colors_keep_their_count(moves in any_sequence()) {
		let state = CubeState::solved().apply_moves(&moves);
		prop_assert_eq!(state.color_counts(), [FACE_AREA; NUM_COLORS]);
	}

	#[test]
	fn sequence_is_stepwise(state in any_state(), a in any_move(), b in any_move()) {
		let both = state.apply(vec![a, b]).unwrap();
		prop_assert_eq!(both, state.apply(a).unwrap().apply(b).unwrap());
	}

	#[test]
	fn concatenation_composes(state in any_state(), xs in any_sequence(), ys in any_sequence()) {
		let joined: Vec<Move> = xs.iter().chain(ys.iter()).copied().collect();
		prop_assert_eq!(
			state.apply_moves(&joined),
			state.apply_moves(&xs).apply_moves(&ys)
		);
		prop_assert_eq!(
			Permutation::from(joined.as_slice()),
			Permutation::from(xs.as_slice()) * Permutation::from(ys.as_slice())
		);
	}

	#[test]
	fn undo_sequence_restores(state in any_state(), moves in any_sequence()) {
		let undo = invert_sequence(&moves);
		prop_assert_eq!(state.apply_moves(&moves).apply_moves(&undo), state);
	}

	#[test]
	fn key_is_injective(a in any_state(), b in any_state()) {
		prop_assert_eq!(a == b, a.key() == b.key());
		prop_assert_eq!(a.key().parse::<CubeState>().unwrap(), a);
	}

	#[test]
	fn token_string_round_trip(moves in prop::collection::vec(any_move(), 1..20)) {
		let parsed = parse(format_sequence(&moves)).unwrap().into_moves();
		prop_assert_eq!(parsed, moves);
	}

	#[test]
	fn apply_leaves_input_untouched(state in any_state(), moves in any_sequence()) {
		let before = state.clone();
		let _ = state.apply(moves.as_slice()).unwrap();
		prop_assert_eq!(state, before);
	}

	#[test]
	fn seeded_scramble_is_reachable(seed in any::<u64>()) {
		let s = scramble_seeded(seed);
		prop_assert!((SCRAMBLE_MIN_LEN..=SCRAMBLE_MAX_LEN).contains(&s.moves.len()));
		prop_assert_eq!(CubeState::from(s.moves.as_slice()), s.state);
	}
}
