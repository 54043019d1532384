use std::{fmt, str::FromStr};

use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use strum::EnumCount;

/// A generator move of the pocket cube.
///
/// The discriminant is the stable integer code of the move.
#[derive(
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	Debug,
	strum::EnumIter,
	strum::EnumCount,
	strum::FromRepr,
	serde::Serialize,
	serde::Deserialize,
)]
#[repr(u8)]
pub enum Move {
	R,
	F,
	U,
	#[serde(rename = "R'")]
	RPrime,
	#[serde(rename = "F'")]
	FPrime,
	#[serde(rename = "U'")]
	UPrime,
}

pub const NUM_MOVES: usize = Move::COUNT;

impl Move {
	/// Every move, sorted by its integer code
	pub const ALL: [Move; NUM_MOVES] = [
		Move::R,
		Move::F,
		Move::U,
		Move::RPrime,
		Move::FPrime,
		Move::UPrime,
	];

	pub const fn index(self) -> usize {
		self as usize
	}

	/// The move which negates this one.
	pub const fn opposite(self) -> Move {
		match self {
			Move::R => Move::RPrime,
			Move::F => Move::FPrime,
			Move::U => Move::UPrime,
			Move::RPrime => Move::R,
			Move::FPrime => Move::F,
			Move::UPrime => Move::U,
		}
	}

	pub const fn token(self) -> &'static str {
		match self {
			Move::R => "R",
			Move::F => "F",
			Move::U => "U",
			Move::RPrime => "R'",
			Move::FPrime => "F'",
			Move::UPrime => "U'",
		}
	}

	/// Returns the move with the integer code `idx`.
	pub fn from_index(idx: i128) -> Result<Self, ParseError> {
		u8::try_from(idx)
			.ok()
			.and_then(Self::from_repr)
			.ok_or(ParseError::InvalidMoveIndex(idx))
	}
}

impl fmt::Display for Move {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.token())
	}
}

impl FromStr for Move {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"R" => Ok(Move::R),
			"F" => Ok(Move::F),
			"U" => Ok(Move::U),
			"R'" => Ok(Move::RPrime),
			"F'" => Ok(Move::FPrime),
			"U'" => Ok(Move::UPrime),
			_ => Err(ParseError::UnrecognizedMoveToken(s.to_owned())),
		}
	}
}

/// Everything that can go wrong while reading moves.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
	#[error("Invalid move index {0}, it must be in 0..{}", NUM_MOVES)]
	InvalidMoveIndex(i128),
	#[error("Unrecognized move token \"{0}\"")]
	UnrecognizedMoveToken(String),
	#[error("Unsupported move input type: {0}")]
	UnsupportedMoveInputType(String),
}

/// The different shapes of move input the parser understands.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MoveInput {
	/// Integer code of a move, wide enough for any i64 or u64 input
	Index(i128),
	/// A single token like `R'`
	Token(String),
	/// Tokens separated by single spaces, like `R F U'`
	TokenString(String),
	Sequence(Vec<MoveInput>),
	Canonical(Move),
}

/// The result of parsing a move input.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Parsed {
	Single(Move),
	Sequence(Vec<Move>),
}

impl Parsed {
	/// Flatten into a move sequence; a single move becomes a sequence of length one.
	pub fn into_moves(self) -> Vec<Move> {
		match self {
			Parsed::Single(mv) => vec![mv],
			Parsed::Sequence(moves) => moves,
		}
	}
}

impl MoveInput {
	/// Normalize the input to canonical moves.
	/// Nested sequences are flattened, the order is kept.
	pub fn parse(&self) -> Result<Parsed, ParseError> {
		match self {
			MoveInput::Sequence(items) => {
				let mut out = Vec::with_capacity(items.len());
				for item in items {
					match item.parse()? {
						Parsed::Single(mv) => out.push(mv),
						Parsed::Sequence(moves) => out.extend(moves),
					}
				}
				Ok(Parsed::Sequence(out))
			}
			MoveInput::Index(idx) => Move::from_index(*idx).map(Parsed::Single),
			MoveInput::TokenString(s) => s
				.split(' ')
				.map(Move::from_str)
				.collect::<Result<Vec<_>, _>>()
				.map(Parsed::Sequence),
			MoveInput::Token(s) => Move::from_str(s).map(Parsed::Single),
			MoveInput::Canonical(mv) => Ok(Parsed::Single(*mv)),
		}
	}
}

/// Parse a single move or a sequence of moves.
///
/// ```
/// use pocketcube::prelude::*;
///
/// let moves = parse("R F U'").unwrap();
/// assert_eq!(moves, Parsed::Sequence(vec![Move::R, Move::F, Move::UPrime]));
/// assert_eq!(parse(7), Err(ParseError::InvalidMoveIndex(7)));
/// ```
pub fn parse<T>(input: T) -> Result<Parsed, ParseError>
where
	T: Into<MoveInput>,
{
	input.into().parse()
}

/// Join the tokens of `moves` with single spaces.
/// The empty sequence becomes "", which parses back to an empty sequence.
pub fn format_sequence(moves: &[Move]) -> String {
	moves
		.iter()
		.map(|mv| mv.token())
		.collect::<Vec<_>>()
		.join(" ")
}

/// The sequence which undoes `moves`.
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
	moves.iter().rev().map(|mv| mv.opposite()).collect()
}

impl From<Move> for MoveInput {
	fn from(mv: Move) -> Self {
		MoveInput::Canonical(mv)
	}
}

impl From<i64> for MoveInput {
	fn from(idx: i64) -> Self {
		MoveInput::Index(idx.into())
	}
}

impl From<u64> for MoveInput {
	fn from(idx: u64) -> Self {
		MoveInput::Index(idx.into())
	}
}

impl From<i32> for MoveInput {
	fn from(idx: i32) -> Self {
		MoveInput::Index(idx.into())
	}
}

impl From<usize> for MoveInput {
	fn from(idx: usize) -> Self {
		// usize is at most 64 bits wide
		MoveInput::Index(idx as i128)
	}
}

impl From<&str> for MoveInput {
	/// "" is the empty sequence
	fn from(s: &str) -> Self {
		if s.is_empty() {
			MoveInput::Sequence(Vec::new())
		} else if s.contains(' ') {
			MoveInput::TokenString(s.to_owned())
		} else {
			MoveInput::Token(s.to_owned())
		}
	}
}

impl From<String> for MoveInput {
	fn from(s: String) -> Self {
		if s.is_empty() {
			MoveInput::Sequence(Vec::new())
		} else if s.contains(' ') {
			MoveInput::TokenString(s)
		} else {
			MoveInput::Token(s)
		}
	}
}

impl From<&[Move]> for MoveInput {
	fn from(moves: &[Move]) -> Self {
		MoveInput::Sequence(moves.iter().copied().map(MoveInput::Canonical).collect())
	}
}

impl<T> From<Vec<T>> for MoveInput
where
	T: Into<MoveInput>,
{
	fn from(items: Vec<T>) -> Self {
		MoveInput::Sequence(items.into_iter().map(Into::into).collect())
	}
}

// ===== Deserialization =====
// Self-describing formats may hand us any shape, so the input type is
// decided at runtime here.

fn unsupported<E: de::Error>(kind: &str) -> E {
	E::custom(ParseError::UnsupportedMoveInputType(kind.to_owned()))
}

struct MoveInputVisitor;

impl<'de> Visitor<'de> for MoveInputVisitor {
	type Value = MoveInput;

	fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str("a move index, a move token or a sequence of moves")
	}

	fn visit_i64<E: de::Error>(self, v: i64) -> Result<MoveInput, E> {
		Ok(MoveInput::from(v))
	}

	fn visit_u64<E: de::Error>(self, v: u64) -> Result<MoveInput, E> {
		Ok(MoveInput::from(v))
	}

	fn visit_str<E: de::Error>(self, v: &str) -> Result<MoveInput, E> {
		Ok(MoveInput::from(v))
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<MoveInput, A::Error> {
		let mut items = Vec::new();
		while let Some(item) = seq.next_element::<MoveInput>()? {
			items.push(item);
		}
		Ok(MoveInput::Sequence(items))
	}

	fn visit_bool<E: de::Error>(self, _: bool) -> Result<MoveInput, E> {
		Err(unsupported("boolean"))
	}

	fn visit_f64<E: de::Error>(self, _: f64) -> Result<MoveInput, E> {
		Err(unsupported("float"))
	}

	fn visit_unit<E: de::Error>(self) -> Result<MoveInput, E> {
		Err(unsupported("null"))
	}

	fn visit_none<E: de::Error>(self) -> Result<MoveInput, E> {
		Err(unsupported("null"))
	}

	fn visit_map<A: MapAccess<'de>>(self, _: A) -> Result<MoveInput, A::Error> {
		Err(unsupported("map"))
	}
}

impl<'de> Deserialize<'de> for MoveInput {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_any(MoveInputVisitor)
	}
}
