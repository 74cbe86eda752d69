//! Rubiks Cube Solver by the layer by layer beginner's method.

use std::{error::Error, process::ExitCode, time::Instant};

use clap::{Args, Parser, Subcommand};
use log::warn;
use rand::{rng, Rng};

use layered_cube_solver::{
	moves::format_moves,
	parse_moves,
	scramble::DEFAULT_SCRAMBLE_LENGTH,
	solver::ALL_PHASES,
	stats::{solve_batch, BatchConfig, BatchError},
	Cube, SolveError, SolverLimits,
};



/// Scrambles cubes and solves them layer by layer.
#[derive(Parser)]
#[command(name = "cube-solver")]
#[command(author, version, about, long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
	/// Solve randomly scrambled cubes and print move count averages (default).
	Batch(BatchArgs),
	/// Apply a move sequence such as "U R F' D" to a solved cube and solve it.
	Solve {
		/// Space separated moves, `'` for counter-clockwise.
		moves: String,
	},
}

#[derive(Args)]
struct BatchArgs {
	/// Number of cubes to solve.
	#[arg(short, long, default_value_t = 1)]
	cubes: usize,
	/// Seed for the scrambles, random if not given.
	#[arg(short, long)]
	seed: Option<u64>,
	/// Random moves per scramble.
	#[arg(short = 'l', long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
	scramble_length: usize,
	/// Solver threads, 0 to use every core.
	#[arg(short, long, default_value_t = 0)]
	threads: usize,
	/// Print every cube before and after solving.
	#[arg(long)]
	show: bool,
}
impl Default for BatchArgs {
	fn default() -> Self {
		Self { cubes: 1, seed: None, scramble_length: DEFAULT_SCRAMBLE_LENGTH, threads: 0, show: false }
	}
}



fn main() -> ExitCode {
	pretty_env_logger::init();
	let cli = Cli::parse();

	let result = match cli.command {
		Some(Command::Batch(args)) => run_batch(args),
		Some(Command::Solve { moves }) => run_solve(&moves),
		None => run_batch(BatchArgs::default()),
	};
	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("error: {err}");
			let mut source = err.source();
			while let Some(cause) = source {
				eprintln!("  caused by: {cause}");
				source = cause.source();
			}
			ExitCode::FAILURE
		}
	}
}

fn run_batch(args: BatchArgs) -> Result<(), Box<dyn Error>> {
	let seed = args.seed.unwrap_or_else(|| rng().random());
	println!("Solving {} cubes with seed {seed}...", args.cubes);
	let config = BatchConfig {
		cubes: args.cubes,
		seed,
		scramble_length: args.scramble_length,
		threads: args.threads,
	};
	let report = solve_batch(&config, &SolverLimits::default()).inspect_err(|err| {
		if let BatchError::Cube { cube, .. } = err {
			warn!("cube #{cube} failed, rerun with --seed {seed} to reproduce");
		}
	})?;
	if args.show {
		for solved in &report.cubes {
			println!("*** Scrambled Cube #{}: {}", solved.index, format_moves(&solved.scramble));
			print!("{}", solved.scrambled);
			println!("*** Solved Cube in {} moves.", solved.solved.move_count());
			print!("{}", solved.solved);
		}
	}
	println!("{}", report.stats);
	Ok(())
}

fn run_solve(notation: &str) -> Result<(), Box<dyn Error>> {
	let moves = parse_moves(notation)?;
	let time_begin = Instant::now();
	let mut cube = Cube::new();
	cube.apply_all(&moves);
	cube.reset_counters();
	println!("*** Scrambled Cube");
	print!("{cube}");

	layered_cube_solver::solve(&mut cube).inspect_err(|err: &SolveError| warn!("solving failed: {err}"))?;
	println!("*** Solved Cube in {} moves.", cube.move_count());
	print!("{cube}");
	for phase in ALL_PHASES {
		println!("--> {:<20}: {}", phase.name(), cube.phase_moves(phase));
	}
	println!("\nElapsed time: {:?}", time_begin.elapsed());
	Ok(())
}
