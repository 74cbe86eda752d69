//! Rubiks Cube Solver by the layer by layer beginner's method.
//!
//! A [`Cube`] is scrambled with [`Move`]s and solved in five phases: down
//! cross, bottom corners, middle edges, up cross and up corners. Every loop
//! of the solver is bounded, so a cube that was not reachable from the solved
//! state ends in a [`SolveError`] instead of spinning.

pub mod cube;
pub mod error;
pub mod moves;
pub mod scramble;
pub mod slots;
pub mod solver;
pub mod stats;

pub use cube::{Color, Cube, Face, Tile};
pub use error::SolveError;
pub use moves::{parse_moves, Move, ParseMoveError, ALL_MOVES};
pub use slots::{locate_corner, locate_edge, CornerSlot, EdgeSlot};
pub use solver::{solve, solve_with_limits, Phase, SolverLimits};



pub fn new_solved_cube() -> Cube {
	Cube::new()
}

/// Returns `cube` turned by `move_`, leaving the original untouched.
pub fn apply_move(mut cube: Cube, move_: Move) -> Cube {
	cube.apply(move_);
	cube
}

/// Runs all five phases on `cube` and returns the solved cube.
pub fn run_solver(mut cube: Cube) -> Result<Cube, SolveError> {
	solve(&mut cube)?;
	Ok(cube)
}

pub fn tile_color(cube: &Cube, face: Face, row: u8, col: u8) -> Color {
	cube.color_at(face, row, col)
}

pub fn move_count(cube: &Cube) -> u32 {
	cube.move_count()
}
