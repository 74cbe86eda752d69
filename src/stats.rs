//! Batch solving and move count statistics.

use std::{
	fmt,
	time::{Duration, Instant},
};

use log::info;
use rayon::{
	iter::{IntoParallelIterator, ParallelIterator},
	ThreadPoolBuildError, ThreadPoolBuilder,
};
use thiserror::Error;

use crate::{
	cube::Cube,
	error::SolveError,
	moves::Move,
	scramble::{seeded_rng, DEFAULT_SCRAMBLE_LENGTH},
	solver::{solve_with_limits, Phase, SolverLimits, ALL_PHASES},
};



#[derive(Error, Debug)]
pub enum BatchError {
	#[error("cube #{cube} could not be solved")]
	Cube {
		cube: usize,
		#[source]
		source: SolveError,
	},
	#[error("failed to start the solver threads")]
	ThreadPool(#[from] ThreadPoolBuildError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchConfig {
	pub cubes: usize,
	pub seed: u64,
	pub scramble_length: usize,
	/// `0` lets rayon pick.
	pub threads: usize,
}
impl BatchConfig {
	pub fn new(cubes: usize, seed: u64) -> Self {
		Self { cubes, seed, scramble_length: DEFAULT_SCRAMBLE_LENGTH, threads: 0 }
	}
}

#[derive(Debug, Clone)]
pub struct SolvedCube {
	pub index: usize,
	pub scramble: Vec<Move>,
	pub scrambled: Cube,
	pub solved: Cube,
}

/// Scrambles cube number `index` from its own RNG stream and solves it.
pub fn solve_one(config: &BatchConfig, limits: &SolverLimits, index: usize) -> Result<SolvedCube, BatchError> {
	let mut rng = seeded_rng(config.seed, index as u64);
	let (scrambled, scramble) = Cube::new_scrambled(config.scramble_length, &mut rng);
	let mut solved = scrambled;
	solve_with_limits(&mut solved, limits).map_err(|source| BatchError::Cube { cube: index, source })?;
	Ok(SolvedCube { index, scramble, scrambled, solved })
}

#[derive(Debug, Clone)]
pub struct BatchReport {
	pub cubes: Vec<SolvedCube>,
	pub stats: BatchStats,
}

/// Solves `config.cubes` independent cubes in parallel. Each cube is an owned
/// value and its scramble only depends on the seed and its index.
pub fn solve_batch(config: &BatchConfig, limits: &SolverLimits) -> Result<BatchReport, BatchError> {
	let pool = ThreadPoolBuilder::new().num_threads(config.threads).build()?;
	let time_begin = Instant::now();
	let cubes: Vec<SolvedCube> = pool.install(|| {
		(0..config.cubes)
			.into_par_iter()
			.map(|index| solve_one(config, limits, index))
			.collect::<Result<_, _>>()
	})?;
	let elapsed = time_begin.elapsed();
	let stats = BatchStats::from_solved(cubes.iter().map(|c| &c.solved), elapsed);
	info!("solved {} cubes in {elapsed:?}", stats.cubes);
	Ok(BatchReport { cubes, stats })
}



#[derive(Debug, Clone, PartialEq)]
pub struct BatchStats {
	pub cubes: usize,
	pub total_moves: u64,
	pub phase_moves: [u64; 5],
	pub min_moves: Option<u32>,
	pub max_moves: Option<u32>,
	pub elapsed: Duration,
}
impl BatchStats {
	pub fn from_solved<'a>(solved: impl IntoIterator<Item = &'a Cube>, elapsed: Duration) -> Self {
		let mut stats = Self {
			cubes: 0,
			total_moves: 0,
			phase_moves: [0; 5],
			min_moves: None,
			max_moves: None,
			elapsed,
		};
		for cube in solved {
			let moves = cube.move_count();
			stats.cubes += 1;
			stats.total_moves += u64::from(moves);
			for (sum, phase_moves) in stats.phase_moves.iter_mut().zip(cube.all_phase_moves()) {
				*sum += u64::from(phase_moves);
			}
			stats.min_moves = Some(stats.min_moves.map_or(moves, |min| min.min(moves)));
			stats.max_moves = Some(stats.max_moves.map_or(moves, |max| max.max(moves)));
		}
		stats
	}

	fn average(&self, sum: u64) -> f64 {
		if self.cubes == 0 { 0.0 } else { sum as f64 / self.cubes as f64 }
	}

	pub fn average_moves(&self) -> f64 {
		self.average(self.total_moves)
	}

	pub fn average_phase_moves(&self, phase: Phase) -> f64 {
		self.average(self.phase_moves[phase.index()])
	}
}

impl fmt::Display for BatchStats {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Solved {} cubes.", self.cubes)?;
		writeln!(f, "Move count averages:")?;
		writeln!(f, "--> {:<20}: {:.6}", "Total Moves", self.average_moves())?;
		for phase in ALL_PHASES {
			writeln!(f, "--> {:<20}: {:.6}", phase.name(), self.average_phase_moves(phase))?;
		}
		if let (Some(min), Some(max)) = (self.min_moves, self.max_moves) {
			writeln!(f, "Fewest moves: {min}, most moves: {max}")?;
		}
		write!(
			f,
			"\nElapsed time: {} seconds {} usecs.",
			self.elapsed.as_secs(),
			self.elapsed.subsec_micros(),
		)
	}
}
