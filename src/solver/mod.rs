//! Layer by layer solver: five phases run strictly in order.

use std::fmt;

use log::{debug, info};

use crate::{
	cube::Cube,
	error::SolveError,
	moves::{format_moves, Move},
	slots::{CornerRing, EdgeRing, ALL_CORNER_SLOTS, ALL_EDGE_SLOTS},
};

mod first_cross;
mod first_corners;
mod middle_edges;
mod last_cross;
mod last_corners;

pub use last_cross::TopCrossState;



#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Phase { FirstCross, FirstCorners, MiddleEdges, LastCross, LastCorners }
pub const ALL_PHASES: [Phase; 5] = {use Phase::*; [FirstCross, FirstCorners, MiddleEdges, LastCross, LastCorners]};

impl Phase {
	pub const fn index(self) -> usize {
		self as usize
	}

	pub const fn name(self) -> &'static str {
		match self {
			Phase::FirstCross => "first-layer cross",
			Phase::FirstCorners => "first-layer corners",
			Phase::MiddleEdges => "middle-layer edges",
			Phase::LastCross => "last-layer cross",
			Phase::LastCorners => "last-layer corners",
		}
	}

	/// Post-condition of this phase. Each phase's post-condition includes the
	/// previous one's.
	pub fn is_complete(self, cube: &Cube) -> bool {
		let edges_solved = |ring: EdgeRing| {
			ALL_EDGE_SLOTS.into_iter().filter(|slot| slot.ring() == ring).all(|slot| slot.is_solved(cube))
		};
		let corners_solved = |ring: CornerRing| {
			ALL_CORNER_SLOTS.into_iter().filter(|slot| slot.ring() == ring).all(|slot| slot.is_solved(cube))
		};
		match self {
			Phase::FirstCross => edges_solved(EdgeRing::Cross),
			Phase::FirstCorners => Phase::FirstCross.is_complete(cube) && corners_solved(CornerRing::Bottom),
			Phase::MiddleEdges => Phase::FirstCorners.is_complete(cube) && edges_solved(EdgeRing::Middle),
			Phase::LastCross => Phase::MiddleEdges.is_complete(cube) && edges_solved(EdgeRing::Top),
			Phase::LastCorners => cube.is_solved(),
		}
	}

	fn incomplete_detail(self) -> &'static str {
		match self {
			Phase::FirstCross => "the down cross is not solved",
			Phase::FirstCorners => "the bottom layer is not solved",
			Phase::MiddleEdges => "the bottom two layers are not solved",
			Phase::LastCross => "the top edges are not solved",
			Phase::LastCorners => "the cube is not solved",
		}
	}

	/// Runs this phase alone, assuming the previous phases are complete.
	pub fn run(self, cube: &mut Cube, limits: &SolverLimits) -> Result<(), SolveError> {
		match self {
			Phase::FirstCross => first_cross::solve(cube),
			Phase::FirstCorners => first_corners::solve(cube, limits),
			Phase::MiddleEdges => middle_edges::solve(cube),
			Phase::LastCross => last_cross::solve(cube, limits),
			Phase::LastCorners => last_corners::solve(cube, limits),
		}
	}
}

impl fmt::Display for Phase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}



/// Iteration ceilings for every corrective loop. Reaching one means the cube
/// was not reachable from the solved state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverLimits {
	/// Insert sequence repeats while seating one bottom corner.
	pub corner_insert: usize,
	/// Reclassifications of the up face while forming the top cross.
	pub top_cross: usize,
	/// Single up turns while aligning the top layer.
	pub top_turns: usize,
	/// Edge swap repeats while placing the top edges.
	pub edge_cycle: usize,
	/// Corner 3-cycle repeats while placing the top corners.
	pub corner_cycle: usize,
	/// Twist sequence repeats per top corner.
	pub corner_twist: usize,
}
impl Default for SolverLimits {
	fn default() -> Self {
		// the insert, swap, cycle and twist sequences all have order 6
		Self {
			corner_insert: 6,
			top_cross: 8,
			top_turns: 4,
			edge_cycle: 6,
			corner_cycle: 6,
			corner_twist: 6,
		}
	}
}



/// Solves `cube` in place with the default ceilings.
pub fn solve(cube: &mut Cube) -> Result<(), SolveError> {
	solve_with_limits(cube, &SolverLimits::default())
}

pub fn solve_with_limits(cube: &mut Cube, limits: &SolverLimits) -> Result<(), SolveError> {
	if !cube.is_well_formed() {
		return Err(SolveError::Malformed { counts: cube.color_counts() });
	}
	for phase in ALL_PHASES {
		let moves_before = cube.move_count();
		phase.run(cube, limits)?;
		let phase_moves = cube.move_count() - moves_before;
		cube.record_phase(phase, phase_moves);
		if !phase.is_complete(cube) {
			return Err(SolveError::PostCondition { phase, detail: phase.incomplete_detail() });
		}
		debug!("{phase} done in {phase_moves} moves");
	}
	info!("solved in {} moves", cube.move_count());
	Ok(())
}



/// Applies a corrective sequence, logging which step picked it.
fn apply_sequence(cube: &mut Cube, step: &str, moves: &[Move]) {
	if !moves.is_empty() {
		debug!("{step}: {}", format_moves(moves));
	}
	cube.apply_all(moves);
}

/// Applies `fix` until `done` holds, at most `limit` times, and returns how
/// many applications it took.
fn repeat_until(
	cube: &mut Cube,
	phase: Phase,
	step: &'static str,
	limit: usize,
	mut done: impl FnMut(&Cube) -> Result<bool, SolveError>,
	mut fix: impl FnMut(&mut Cube),
) -> Result<usize, SolveError> {
	for applied in 0..limit {
		if done(cube)? {
			return Ok(applied);
		}
		fix(cube);
	}
	if done(cube)? {
		Ok(limit)
	}
	else {
		Err(SolveError::IterationLimit { phase, step, limit })
	}
}
