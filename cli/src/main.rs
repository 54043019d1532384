use std::{error::Error, io::Write, str::FromStr};

use clap::Parser;
use log::{debug, info};

use pocketcube::prelude::*;

mod net;

/// Pocket cube (2x2x2) scrambler written in Rust
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Use a sequence to apply on the cube, e.g. "R F U'"
	#[arg(short, long, default_value_t = String::new())]
	sequence: String,

	/// Moves given as JSON, mixing codes, tokens and lists, e.g. '[0, "R", "F U"]'
	/// They are applied after the sequence
	#[arg(short, long)]
	json: Option<String>,

	/// Set the cube from a key (the same format as when you output the cube via the "-c"-flag)
	/// A key carries no history, so --invert only undoes the moves given after it
	#[arg(long, default_value_t = String::new())]
	set: String,

	/// Scramble the cube, --invert then also undoes the scramble
	#[arg(short, long, default_value_t = false, conflicts_with = "set")]
	random: bool,

	/// Seed used by --random and --batch, drawn randomly if missing
	#[arg(long)]
	seed: Option<u64>,

	/// Print that many scrambles (key and sequence) and quit
	#[arg(short, long)]
	batch: Option<usize>,

	/// Output the cube as its key rather than colored
	#[arg(short, long, default_value_t = false)]
	char_print: bool,

	/// Print the net with letters only, without ANSI-colors
	#[arg(long, default_value_t = false)]
	no_color: bool,

	/// Print the sequence undoing all applied moves, the scramble included
	#[arg(long, default_value_t = false)]
	invert: bool,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,
}

/// Set up the cube the arguments describe.
/// Returns it together with every move applied since the last known state
/// (solved, or the key given by --set).
fn build(args: &Args, seed: u64) -> Result<(CubeState, Vec<Move>), Box<dyn Error>> {
	let mut cube = CubeState::solved();
	let mut moves = Vec::new();

	if args.random {
		let s = scramble_seeded(seed);
		info!("Scrambled with seed {}: {}", seed, format_sequence(&s.moves));
		cube = s.state;
		moves = s.moves;
	}

	// Parses a cube out of the key
	if !args.set.is_empty() {
		cube = CubeState::from_str(&args.set)?;
	}

	let mut given = Vec::new();
	if !args.sequence.is_empty() {
		given.extend(parse(args.sequence.as_str())?.into_moves());
	}
	if let Some(json) = &args.json {
		let input: MoveInput = serde_json::from_str(json)?;
		given.extend(input.parse()?.into_moves());
	}

	debug!("Applying {} moves: {}", given.len(), format_sequence(&given));
	cube = cube.apply_moves(&given);
	moves.extend(given);

	Ok((cube, moves))
}

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::init();

	let args = Args::parse();
	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};

	let seed = args.seed.unwrap_or_else(rand::random);

	// Print a batch of scrambles and exit
	if let Some(count) = args.batch {
		info!("Generating {} scrambles with seed {}", count, seed);
		for s in scramble_many(seed, count) {
			writeln!(out, "{} {}", s.state.key(), format_sequence(&s.moves))?;
		}
		return Ok(());
	}

	let (cube, moves) = build(&args, seed)?;

	if args.invert {
		writeln!(out, "{}", format_sequence(&invert_sequence(&moves)))?;
	}

	// Print the resulting cube (either as its key or as a net)
	if args.char_print {
		writeln!(out, "{}", cube.key())?;
	} else {
		net::write_net(&mut *out, &cube, !args.no_color)?;
	}

	Ok(())
}
