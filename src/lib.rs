//! This is a simple example how to turn the pocket cube.
//!
//! ```
//! use pocketcube::prelude::*;
//!
//! let cube = CubeState::solved();
//!
//! let turned = cube.apply("R F U'").unwrap();
//! let back = turned.apply(invert_sequence(&parse("R F U'").unwrap().into_moves())).unwrap();
//!
//! assert!(cube.is_solved());
//! assert!(!turned.is_solved());
//! assert_eq!(back.key(), cube.key());
//! ```
//!
//! Moves can be given as tokens (`"R'"`), integer codes (`3`), space separated
//! token strings or lists of any of those.

pub mod cube;
pub mod scramble;

pub mod prelude {
	pub use crate::cube::{moves::*, state::*, table::*, *};
	pub use crate::scramble::*;
}
