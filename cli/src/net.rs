use std::io::{Result, Write};

use pocketcube::prelude::*;

const RESET: &str = "\x1b[00m";

/// Facelet positions drawn in each row of the net, None is empty space
#[rustfmt::skip]
const NET: [[Option<usize>; 8]; 6] = [
	[None, None, Some(16), Some(17), None, None, None, None],
	[None, None, Some(18), Some(19), None, None, None, None],
	[Some(12), Some(13), Some(0), Some(1), Some(4), Some(5), Some(8), Some(9)],
	[Some(14), Some(15), Some(2), Some(3), Some(6), Some(7), Some(10), Some(11)],
	[None, None, Some(20), Some(21), None, None, None, None],
	[None, None, Some(22), Some(23), None, None, None, None],
];

/// Returns the ANSI-colorcode for the given color.
fn ansi_color(color: Color) -> &'static str {
	match color {
		Color::Blue => "\x1b[34m",
		Color::Red => "\x1b[31m",
		Color::Green => "\x1b[32m",
		Color::Orange => "\x1b[33m",
		Color::Yellow => "\x1b[93m",
		Color::White => RESET,
	}
}

/// Write the net of the cube, one letter per facelet.
pub fn write_net(out: &mut dyn Write, cube: &CubeState, colored: bool) -> Result<()> {
	let colors = cube.colors();

	for row in NET.iter() {
		let width = row.iter().rposition(Option::is_some).map_or(0, |i| i + 1);

		for cell in row.iter().take(width) {
			match cell {
				Some(pos) if colored => {
					let color = colors[*pos];
					write!(out, "{}{}", ansi_color(color), color.letter())?;
				}
				Some(pos) => write!(out, "{}", colors[*pos].letter())?,
				None => write!(out, " ")?,
			}
		}

		if colored {
			write!(out, "{}", RESET)?;
		}
		writeln!(out)?;
	}

	Ok(())
}
