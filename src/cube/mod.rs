pub mod moves;
pub mod state;
pub mod table;

use moves::Move;
use strum::EnumCount;

/// The number of facelets per side
pub const FACE_AREA: usize = 4;

/// The number of sides of a cube
pub const NUM_SIDES: usize = 6;

/// The number of facelets of the whole cube
pub const NUM_FACELETS: usize = FACE_AREA * NUM_SIDES;

/// The color of a single facelet.
/// The discriminant is the color digit used by the canonical key.
#[derive(
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Hash,
	Debug,
	strum::EnumIter,
	strum::EnumCount,
	strum::FromRepr,
	strum::Display,
	serde::Serialize,
	serde::Deserialize,
)]
#[repr(u8)]
pub enum Color {
	// It must only contain unit fields!
	Blue,
	Red,
	Green,
	Orange,
	Yellow,
	White,
}

pub const NUM_COLORS: usize = Color::COUNT;

impl Color {
	/// All colors, sorted by their digit
	pub const ALL: [Color; NUM_COLORS] = [
		Color::Blue,
		Color::Red,
		Color::Green,
		Color::Orange,
		Color::Yellow,
		Color::White,
	];

	pub const fn index(self) -> usize {
		self as usize
	}

	/// Parse a color out of its key digit ('0'..='5').
	pub fn from_digit(c: char) -> Option<Self> {
		let d = c.to_digit(10)?;
		Self::from_repr(d as u8)
	}

	/// The digit of the color inside the canonical key
	pub const fn digit(self) -> char {
		(b'0' + self as u8) as char
	}

	/// One-letter name of the color
	pub const fn letter(self) -> char {
		match self {
			Color::Blue => 'B',
			Color::Red => 'R',
			Color::Green => 'G',
			Color::Orange => 'O',
			Color::Yellow => 'Y',
			Color::White => 'W',
		}
	}

	/// The color as it's meant to be painted by a renderer
	pub const fn hex(self) -> &'static str {
		match self {
			Color::Blue => "#003DA5",
			Color::Red => "#BA0C2F",
			Color::Green => "#009B48",
			Color::Orange => "#FE5000",
			Color::Yellow => "#FFD700",
			Color::White => "#FFFFFF",
		}
	}
}

/// Something the generator moves act on.
///
/// Applying a move never changes the receiver, the result is a new value.
pub trait ApplyMove: Clone {
	fn apply_move(&self, mv: Move) -> Self;

	/// Apply the moves from left to right.
	fn apply_moves(&self, moves: &[Move]) -> Self {
		moves.iter().fold(self.clone(), |acc, mv| acc.apply_move(*mv))
	}
}
