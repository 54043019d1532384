use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::cube::{
	moves::{format_sequence, Move, MoveInput, ParseError, NUM_MOVES},
	state::CubeState,
	ApplyMove,
};

/// The shortest random scramble
pub const SCRAMBLE_MIN_LEN: usize = 5;
/// The longest random scramble
pub const SCRAMBLE_MAX_LEN: usize = 10;

/// A scrambled cube together with the moves that produced it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Scramble {
	pub moves: Vec<Move>,
	pub state: CubeState,
}

impl Scramble {
	fn from_moves(moves: Vec<Move>) -> Self {
		let state = CubeState::solved().apply_moves(&moves);
		Self { moves, state }
	}
}

/// Generate a random sequence of 5 to 10 moves.
/// Moves are drawn independently, so a move may cancel the previous one.
pub fn random_sequence<R>(rng: &mut R) -> Vec<Move>
where
	R: Rng + ?Sized,
{
	let len = rng.gen_range(SCRAMBLE_MIN_LEN..=SCRAMBLE_MAX_LEN);
	(0..len)
		.map(|_| Move::ALL[rng.gen_range(0..NUM_MOVES)])
		.collect()
}

/// Scramble the solved cube.
///
/// With explicit `moves` those are applied, otherwise a random sequence
/// is drawn from `rng`.
pub fn scramble<R>(rng: &mut R, moves: Option<MoveInput>) -> Result<CubeState, ParseError>
where
	R: Rng + ?Sized,
{
	let moves = match moves {
		Some(input) => input.parse()?.into_moves(),
		None => random_sequence(rng),
	};
	debug!("scramble: {}", format_sequence(&moves));

	Ok(CubeState::solved().apply_moves(&moves))
}

/// A reproducible random scramble.
pub fn scramble_seeded(seed: u64) -> Scramble {
	let mut rng = StdRng::seed_from_u64(seed);
	Scramble::from_moves(random_sequence(&mut rng))
}

/// Generate `count` scrambles in parallel.
/// Scramble i is `scramble_seeded(seed + i)`, independent of the scheduling.
pub fn scramble_many(seed: u64, count: usize) -> Vec<Scramble> {
	debug!("generating {} scrambles from seed {}", count, seed);

	(0..count)
		.into_par_iter()
		.map(|i| scramble_seeded(seed.wrapping_add(i as u64)))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::cube::NUM_COLORS;
	use std::error::Error;

	#[test]
	/// Random scrambles have a length in the allowed range
	fn sequence_length() {
		let mut rng = StdRng::seed_from_u64(7);
		for _ in 0..200 {
			let len = random_sequence(&mut rng).len();
			assert!((SCRAMBLE_MIN_LEN..=SCRAMBLE_MAX_LEN).contains(&len));
		}
	}

	#[test]
	/// Every length and every move shows up eventually
	fn sequence_distribution() {
		let mut rng = StdRng::seed_from_u64(42);
		let mut lengths = [false; SCRAMBLE_MAX_LEN + 1];
		let mut moves = [false; NUM_MOVES];

		for _ in 0..1000 {
			let seq = random_sequence(&mut rng);
			lengths[seq.len()] = true;
			for mv in seq {
				moves[mv.index()] = true;
			}
		}

		assert!(lengths[SCRAMBLE_MIN_LEN..].iter().all(|x| *x));
		assert!(moves.iter().all(|x| *x));
	}

	#[test]
	/// Explicit moves are applied to the solved cube
	fn explicit_scramble() -> Result<(), Box<dyn Error>> {
		let mut rng = StdRng::seed_from_u64(0);
		let cube = scramble(&mut rng, Some(MoveInput::from(vec![0i64, 1, 2, 3, 4, 5])))?;

		assert_ne!(cube.key(), CubeState::solved().key());
		assert_eq!(cube, CubeState::solved().apply("R F U R' F' U'")?);
		Ok(())
	}

	#[test]
	fn explicit_scramble_error() {
		let mut rng = StdRng::seed_from_u64(0);
		assert_eq!(
			scramble(&mut rng, Some(MoveInput::Index(6))),
			Err(ParseError::InvalidMoveIndex(6))
		);
	}

	#[test]
	/// Canceling moves like R R' are kept
	fn canceling_moves() -> Result<(), Box<dyn Error>> {
		let mut rng = StdRng::seed_from_u64(0);
		let cube = scramble(&mut rng, Some(MoveInput::from("R R'")))?;
		assert!(cube.is_solved());
		Ok(())
	}

	#[test]
	fn random_scramble() -> Result<(), Box<dyn Error>> {
		let mut rng = rand::thread_rng();
		for _ in 0..50 {
			let cube = scramble(&mut rng, None)?;
			assert_eq!(cube.color_counts(), [4; NUM_COLORS]);
		}
		Ok(())
	}

	#[test]
	/// The same seed gives the same scramble
	fn seeded_scramble() -> Result<(), Box<dyn Error>> {
		let a = scramble_seeded(1234);
		let b = scramble_seeded(1234);
		assert_eq!(a, b);

		let replay = CubeState::solved().apply(format_sequence(&a.moves))?;
		assert_eq!(replay, a.state);
		Ok(())
	}

	#[test]
	/// A parallel batch equals the scrambles generated one by one
	fn batch_scramble() {
		let batch = scramble_many(99, 64);
		assert_eq!(batch.len(), 64);

		for (i, s) in batch.iter().enumerate() {
			assert_eq!(*s, scramble_seeded(99 + i as u64));
		}
		assert!(scramble_many(0, 0).is_empty());
	}
}
