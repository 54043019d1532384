use std::ops::Mul;

use const_for::const_for;
use strum::EnumCount;

use crate::cube::{moves::Move, ApplyMove, NUM_FACELETS};

/// One entry per facelet position
pub type Facelets = [u8; NUM_FACELETS];

/*
 * Facelet positions on the net of the cube:
 *
 *          | 16 17 |
 *          | 18 19 |
 *  | 12 13 | 00 01 | 04 05 | 08 09 |
 *  | 14 15 | 02 03 | 06 07 | 10 11 |
 *          | 20 21 |
 *          | 22 23 |
 *
 * The transformation-"matrix".
 * Let t be the transformation, s the old state and n the new state:
 * n[i] = s[ t[i] ] holds true
 */

// Neutral Transformation: Does nothing
const T_BASE: Facelets = [
	0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23,
];

#[rustfmt::skip]
const T_R: Facelets = [
	0, 21, 2, 23, // U
	6, 4, 7, 5, // R (totally changed)
	19, 9, 17, 11,
	12, 13, 14, 15, // (unchanged)
	16, 1, 18, 3,
	20, 10, 22, 8, // F
];

#[rustfmt::skip]
const T_F: Facelets = [
	0, 1, 14, 15, // U
	4, 5, 2, 3, // R
	8, 9, 6, 7,
	12, 13, 10, 11,
	16, 17, 18, 19, // (unchanged)
	22, 20, 23, 21, // F (totally changed)
];

#[rustfmt::skip]
const T_U: Facelets = [
	2, 0, 3, 1, // U (totally changed)
	18, 5, 19, 7, // R
	8, 9, 10, 11, // (unchanged)
	12, 20, 14, 21,
	16, 17, 15, 13,
	6, 4, 22, 23, // F
];

#[rustfmt::skip]
const T_R_PRIME: Facelets = [
	0, 17, 2, 19,
	5, 7, 4, 6,
	23, 9, 21, 11,
	12, 13, 14, 15,
	16, 10, 18, 8,
	20, 1, 22, 3,
];

#[rustfmt::skip]
const T_F_PRIME: Facelets = [
	0, 1, 6, 7,
	4, 5, 10, 11,
	8, 9, 14, 15,
	12, 13, 2, 3,
	16, 17, 18, 19,
	21, 23, 20, 22,
];

#[rustfmt::skip]
const T_U_PRIME: Facelets = [
	1, 3, 0, 2,
	21, 5, 20, 7,
	8, 9, 10, 11,
	12, 19, 14, 18,
	16, 17, 4, 6,
	13, 15, 22, 23,
];

/// The transformation of every generator move, sorted by `Move::index`.
pub const MOVE_TABLE: [Facelets; Move::COUNT] =
	[T_R, T_F, T_U, T_R_PRIME, T_F_PRIME, T_U_PRIME];

/// Chain 2 transformations (t1 and t2) to one transformation.
/// It returns a new transformation, in which first t1 is applied, then t2.
pub const fn chain_transform(t1: Facelets, t2: Facelets) -> Facelets {
	let mut out = [0; NUM_FACELETS];

	const_for!(i in 0..NUM_FACELETS => {
		out[i] = t1[ t2[i] as usize ];
	});

	out
}

/// The transformation undoing t
pub const fn invert_transform(t: Facelets) -> Facelets {
	let mut out = [0; NUM_FACELETS];

	const_for!(i in 0..NUM_FACELETS => {
		out[ t[i] as usize ] = i as u8;
	});

	out
}

const fn is_base(t: Facelets) -> bool {
	const_for!(i in 0..NUM_FACELETS => {
		if t[i] != i as u8 { return false; }
	});

	true
}

const fn is_permutation(t: Facelets) -> bool {
	let mut seen = [false; NUM_FACELETS];

	const_for!(i in 0..NUM_FACELETS => {
		let p = t[i] as usize;
		if p >= NUM_FACELETS || seen[p] { return false; }
		seen[p] = true;
	});

	true
}

const fn check_move_table() -> bool {
	const_for!(i in 0..Move::COUNT => {
		let mv = Move::ALL[i];
		let t = MOVE_TABLE[mv.index()];
		let inv = MOVE_TABLE[mv.opposite().index()];

		if !is_permutation(t) { return false; }
		if !is_base(chain_transform(t, inv)) || !is_base(chain_transform(inv, t)) {
			return false;
		}
	});

	true
}

// Every move and its opposite have to cancel out
const _: () = assert!(check_move_table());

static TRANSFORM: [Facelets; Move::COUNT] = MOVE_TABLE;

/// The permutation of positions performed by `mv`.
/// `result[i]` is the position whose color moves into position `i`.
pub fn permutation_of(mv: Move) -> &'static Facelets {
	&TRANSFORM[mv.index()]
}

/// A permutation of the facelet positions, e.g. a whole move sequence
/// folded into one transformation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Permutation {
	map: Facelets,
}

impl Default for Permutation {
	fn default() -> Self {
		Self::identity()
	}
}

impl Permutation {
	pub const fn identity() -> Self {
		Self { map: T_BASE }
	}

	pub const fn of(mv: Move) -> Self {
		Self {
			map: MOVE_TABLE[mv.index()],
		}
	}

	/// Returns None if `map` isn't a permutation of 0..24
	pub const fn from_array(map: Facelets) -> Option<Self> {
		if is_permutation(map) {
			Some(Self { map })
		} else {
			None
		}
	}

	/// First apply self, then next.
	pub const fn then(self, next: Self) -> Self {
		Self {
			map: chain_transform(self.map, next.map),
		}
	}

	pub const fn inverse(self) -> Self {
		Self {
			map: invert_transform(self.map),
		}
	}

	pub const fn is_identity(&self) -> bool {
		is_base(self.map)
	}

	/// The position whose color lands on `pos`, `None` past the last facelet
	pub fn source(&self, pos: usize) -> Option<usize> {
		self.map.get(pos).map(|&p| p as usize)
	}

	pub fn as_array(&self) -> &Facelets {
		&self.map
	}
}

impl ApplyMove for Permutation {
	fn apply_move(&self, mv: Move) -> Self {
		self.then(Self::of(mv))
	}
}

impl From<Move> for Permutation {
	fn from(mv: Move) -> Self {
		Self::of(mv)
	}
}

impl From<&[Move]> for Permutation {
	fn from(moves: &[Move]) -> Self {
		Self::identity().apply_moves(moves)
	}
}

impl Mul for Permutation {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self {
		self.then(rhs)
	}
}
