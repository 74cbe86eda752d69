//! Phase 2: the four bottom corners.

use log::debug;

use super::{apply_sequence, repeat_until, Phase, SolverLimits};
use crate::{
	cube::{Color, Cube},
	error::SolveError,
	moves::Move::{self, *},
	slots::{locate_corner, CornerSlot},
};

struct BottomCorner {
	colors: [Color; 2],
	target: CornerSlot,
	/// Brings the piece from each corner slot either into `target` or into
	/// the top corner right above it.
	routes: [Option<&'static [Move]>; 8],
	/// Lifts the piece out of `target` and drops it back in with a quarter
	/// twist. Repeating it eventually seats the piece.
	insert: &'static [Move],
}

const BOTTOM_CORNERS: [BottomCorner; 4] = [
	BottomCorner {
		colors: [Color::O, Color::W],
		target: CornerSlot::BottomFrontLeft,
		routes: [
			Some(&[]),
			Some(&[BackS, UpS, Back]),
			Some(&[Back, Up, Up, BackS]),
			Some(&[Right, Up, RightS]),
			Some(&[]),
			Some(&[UpS]),
			Some(&[UpS, UpS]),
			Some(&[Up]),
		],
		insert: &[LeftS, UpS, Left, Up],
	},
	BottomCorner {
		colors: [Color::O, Color::Y],
		target: CornerSlot::BottomBackLeft,
		routes: [
			None,
			Some(&[]),
			Some(&[Back, Up, BackS, Up, Up]),
			Some(&[Right, UpS, UpS, RightS]),
			Some(&[Up]),
			Some(&[]),
			Some(&[UpS]),
			Some(&[Up, Up]),
		],
		insert: &[BackS, UpS, Back, Up],
	},
	BottomCorner {
		colors: [Color::Y, Color::R],
		target: CornerSlot::BottomBackRight,
		routes: [
			None,
			None,
			Some(&[]),
			Some(&[Right, Up, Up, RightS, Up]),
			Some(&[Up, Up]),
			Some(&[Up]),
			Some(&[]),
			Some(&[UpS]),
		],
		insert: &[RightS, UpS, Right, Up],
	},
	BottomCorner {
		colors: [Color::W, Color::R],
		target: CornerSlot::BottomFrontRight,
		routes: [
			None,
			None,
			None,
			Some(&[]),
			Some(&[UpS]),
			Some(&[Up, Up]),
			Some(&[Up]),
			Some(&[]),
		],
		insert: &[FrontS, UpS, Front, Up],
	},
];

pub(super) fn solve(cube: &mut Cube, limits: &SolverLimits) -> Result<(), SolveError> {
	for corner in &BOTTOM_CORNERS {
		let [a, b] = corner.colors;
		let at = locate_corner(cube, Color::G, a, b)?;
		let route = corner.routes[at.index()]
			.ok_or(SolveError::UnroutableCorner { phase: Phase::FirstCorners, slot: at })?;
		apply_sequence(cube, "corner route", route);

		let target = corner.target;
		let inserts = repeat_until(
			cube,
			Phase::FirstCorners,
			"corner insert",
			limits.corner_insert,
			|cube| Ok(target.is_solved(cube)),
			|cube| cube.apply_all(corner.insert),
		)?;
		debug!("corner G{a}{b} placed after {inserts} inserts");
	}
	Ok(())
}
