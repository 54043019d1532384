use std::str::FromStr;

use const_for::const_for;
use log::trace;

use crate::cube::{
	moves::{Move, MoveInput, ParseError},
	table::{permutation_of, Permutation},
	ApplyMove, Color, FACE_AREA, NUM_COLORS, NUM_FACELETS,
};

type StateData = [Color; NUM_FACELETS];

const fn generate_solved() -> StateData {
	let mut out = [Color::Blue; NUM_FACELETS];

	const_for!(i in 0..NUM_FACELETS => {
		out[i] = Color::ALL[i / FACE_AREA];
	});

	out
}

/// Every side colored uniformly: facelet i has color i / 4
const SOLVED: StateData = generate_solved();

/// The colors of all 24 facelets of a pocket cube.
///
/// A state is a plain value. Applying moves returns a new state and leaves
/// the old one untouched, so states can be shared between threads freely.
/// With serde, a state is written as its canonical key.
#[derive(Clone, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CubeState {
	data: StateData,
}

impl Default for CubeState {
	/// Creates a *solved* pocket cube!
	fn default() -> Self {
		Self { data: SOLVED }
	}
}

/// Reasons why a color arrangement is not a cube state
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
	#[error("The given key does not have length {}, it has length {0}", NUM_FACELETS)]
	Length(usize),
	#[error("'{0}' is not a color digit")]
	InvalidColor(char),
	#[error("Color {color} occurs {count} times instead of {}", FACE_AREA)]
	ColorCount { color: Color, count: usize },
}

impl CubeState {
	pub fn solved() -> Self {
		Self::default()
	}

	/// Build a state out of explicit colors.
	/// Every color must occur exactly 4 times, nothing else is checked.
	pub fn from_colors(data: StateData) -> Result<Self, StateError> {
		let cube = Self { data };
		let counts = cube.color_counts();

		match Color::ALL
			.into_iter()
			.find(|color| counts[color.index()] != FACE_AREA)
		{
			Some(color) => Err(StateError::ColorCount {
				color,
				count: counts[color.index()],
			}),
			None => Ok(cube),
		}
	}

	/// The colors, indexed by facelet position
	pub fn colors(&self) -> &StateData {
		&self.data
	}

	pub fn color_at(&self, pos: usize) -> Option<Color> {
		self.data.get(pos).copied()
	}

	pub fn color_counts(&self) -> [usize; NUM_COLORS] {
		let mut counts = [0; NUM_COLORS];
		for color in self.data {
			counts[color.index()] += 1;
		}
		counts
	}

	pub fn is_solved(&self) -> bool {
		self.data == SOLVED
	}

	/// Parse `moves` and apply them from left to right.
	/// If parsing fails, nothing is applied.
	pub fn apply<T>(&self, moves: T) -> Result<Self, ParseError>
	where
		T: Into<MoveInput>,
	{
		let moves = moves.into().parse()?.into_moves();
		trace!("applying {} moves", moves.len());
		Ok(self.apply_moves(&moves))
	}

	pub fn apply_permutation(&self, perm: &Permutation) -> Self {
		Self {
			data: std::array::from_fn(|i| self.data[perm.as_array()[i] as usize]),
		}
	}

	/// The canonical key of the state: the 24 color digits.
	/// Two states have the same key if and only if they are equal.
	pub fn key(&self) -> String {
		self.data.iter().map(|c| c.digit()).collect()
	}

	/// The key as raw color indices
	pub fn key_bytes(&self) -> [u8; NUM_FACELETS] {
		self.data.map(|c| c as u8)
	}
}

impl ApplyMove for CubeState {
	fn apply_move(&self, mv: Move) -> Self {
		let trans = permutation_of(mv);
		Self {
			data: std::array::from_fn(|i| self.data[trans[i] as usize]),
		}
	}
}

impl FromStr for CubeState {
	type Err = StateError;

	/// Read a state from its canonical key
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let len = s.chars().count();
		if len != NUM_FACELETS {
			return Err(StateError::Length(len));
		}

		let mut data = SOLVED;
		for (i, c) in s.chars().enumerate() {
			data[i] = Color::from_digit(c).ok_or(StateError::InvalidColor(c))?;
		}

		Self::from_colors(data)
	}
}

impl TryFrom<String> for CubeState {
	type Error = StateError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::from_str(&value)
	}
}

impl From<CubeState> for String {
	fn from(val: CubeState) -> Self {
		val.key()
	}
}

impl From<&[Move]> for CubeState {
	/// The solved cube with the moves applied
	fn from(moves: &[Move]) -> Self {
		Self::solved().apply_moves(moves)
	}
}

// ===== Tests =====
