//! Phase 5: place the top corners, then twist them in place.

use log::debug;

use super::{apply_sequence, repeat_until, Phase, SolverLimits};
use crate::{
	cube::{Color, Cube, Face},
	error::SolveError,
	moves::Move::{self, *},
	slots::{locate_corner, CornerSlot},
};

const TOP_CORNERS: [CornerSlot; 4] = [
	CornerSlot::TopFrontLeft,
	CornerSlot::TopBackLeft,
	CornerSlot::TopBackRight,
	CornerSlot::TopFrontRight,
];

/// Colors of the piece that belongs in each of `TOP_CORNERS`.
const TOP_CORNER_COLORS: [[Color; 3]; 4] = {use Color::*; [
	[B, W, O],
	[B, Y, O],
	[B, Y, R],
	[B, W, R],
]};

/// Cycles the three top corners other than the one it is named after.
const CORNER_CYCLE: [&[Move]; 4] = [
	&[Up, Front, UpS, BackS, Up, FrontS, UpS, Back],
	&[Up, Left, UpS, RightS, Up, LeftS, UpS, Right],
	&[Up, Back, UpS, FrontS, Up, BackS, UpS, Front],
	&[Up, Right, UpS, LeftS, Up, RightS, UpS, Left],
];

/// Twists the corner in the named top slot while scrambling the bottom layer.
/// Six applications restore everything.
const CORNER_TWIST: [&[Move]; 4] = [
	&[FrontS, DownS, Front, Down],
	&[LeftS, DownS, Left, Down],
	&[BackS, DownS, Back, Down],
	&[RightS, DownS, Right, Down],
];

fn corners_in_place(cube: &Cube) -> Result<[bool; 4], SolveError> {
	let mut in_place = [false; 4];
	for (k, [a, b, c]) in TOP_CORNER_COLORS.into_iter().enumerate() {
		in_place[k] = locate_corner(cube, a, b, c)? == TOP_CORNERS[k];
	}
	Ok(in_place)
}

/// Whether corner `corner` is oriented once the up face is turned back so
/// that it sits in the working slot again.
fn working_aligned(cube: &Cube, working: usize, corner: usize) -> bool {
	let mut probe = *cube;
	probe.turn_up(corner - working);
	TOP_CORNERS[corner].is_solved(&probe)
}

pub(super) fn solve(cube: &mut Cube, limits: &SolverLimits) -> Result<(), SolveError> {
	repeat_until(
		cube,
		Phase::LastCorners,
		"first corner placement",
		limits.corner_cycle,
		|cube| Ok(corners_in_place(cube)?.contains(&true)),
		|cube| apply_sequence(cube, "corner cycle", CORNER_CYCLE[3]),
	)?;
	let anchor = corners_in_place(cube)?
		.iter()
		.position(|&in_place| in_place)
		.ok_or(SolveError::PostCondition { phase: Phase::LastCorners, detail: "no top corner is in place" })?;
	debug!("anchored on {:?}", TOP_CORNERS[anchor]);

	repeat_until(
		cube,
		Phase::LastCorners,
		"corner placement",
		limits.corner_cycle,
		|cube| Ok(!corners_in_place(cube)?.contains(&false)),
		|cube| apply_sequence(cube, "corner cycle", CORNER_CYCLE[anchor]),
	)?;

	let twisted: Vec<usize> = (0..4).filter(|&k| !TOP_CORNERS[k].is_solved(cube)).collect();
	debug!("twisted corners: {twisted:?}");
	if let Some(&working) = twisted.first() {
		// each twisted corner is brought into the working slot in turn, so
		// only that slot's twist sequence is used
		for (i, &corner) in twisted.iter().enumerate() {
			repeat_until(
				cube,
				Phase::LastCorners,
				"corner twist",
				limits.corner_twist,
				|cube| Ok(working_aligned(cube, working, corner)),
				|cube| apply_sequence(cube, "corner twist", CORNER_TWIST[working]),
			)?;
			if let Some(&next) = twisted.get(i + 1) {
				for _ in corner..next {
					cube.apply(UpS);
				}
			}
		}
	}
	repeat_until(
		cube,
		Phase::LastCorners,
		"final alignment",
		limits.top_turns,
		|cube| Ok(cube.color_at(Face::Front, 0, 1) == Face::Front.home_color()),
		|cube| cube.apply(Up),
	)?;

	if !cube.is_solved() {
		return Err(SolveError::PostCondition { phase: Phase::LastCorners, detail: "the cube is not solved" });
	}
	Ok(())
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn corner_cycle_keeps_its_own_corner() {
		for (k, cycle) in CORNER_CYCLE.into_iter().enumerate() {
			let mut cube = Cube::new();
			cube.apply_all(cycle);
			assert!(Phase::LastCross.is_complete(&cube));
			let in_place = corners_in_place(&cube).unwrap();
			assert!(in_place[k]);
			assert_eq!(1, in_place.iter().filter(|&&p| p).count(), "{:?}", TOP_CORNERS[k]);
		}
	}

	#[test]
	fn corner_twist_has_order_six() {
		for twist in CORNER_TWIST {
			let mut cube = Cube::new();
			for applied in 1..=6 {
				cube.apply_all(twist);
				assert_eq!(applied == 6, cube.is_solved());
			}
		}
	}

	#[test]
	fn cycled_corners_are_put_back() {
		let mut cube = Cube::new();
		cube.apply_all(CORNER_CYCLE[0]);
		solve(&mut cube, &SolverLimits::default()).unwrap();
		assert!(cube.is_solved());
	}

	#[test]
	fn working_alignment_looks_through_an_up_turn() {
		let mut cube = Cube::new();
		cube.apply(UpS);
		let before = cube;
		assert!(working_aligned(&cube, 0, 1));
		assert!(!working_aligned(&cube, 0, 0));
		assert_eq!(before, cube);
		assert_eq!(1, cube.move_count());
	}
}
