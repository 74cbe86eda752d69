//! Phase 4: blue cross on the up face, then its edges matched to the sides.

use log::debug;

use super::{apply_sequence, repeat_until, Phase, SolverLimits};
use crate::{
	cube::{Color, Cube, Face},
	error::SolveError,
	moves::Move::{self, *},
	slots::{locate_edge, EdgeSlot, ALL_EDGE_SLOTS, EdgeRing},
};

/// Which of the four up-face edge tiles show blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopCrossState {
	None,
	LFrontLeft,
	LBackLeft,
	LBackRight,
	LFrontRight,
	LineHorizontal,
	LineVertical,
	Cross,
}

impl TopCrossState {
	/// Checks the full cross first, then the lines, then the L shapes.
	pub fn classify(cube: &Cube) -> Self {
		let blue = |row, col| cube.color_at(Face::Up, row, col) == Color::B;
		let (back, left, right, front) = (blue(0, 1), blue(1, 0), blue(1, 2), blue(2, 1));
		if back && left && right && front {
			Self::Cross
		}
		else if left && right {
			Self::LineHorizontal
		}
		else if back && front {
			Self::LineVertical
		}
		else if left && front {
			Self::LFrontLeft
		}
		else if left && back {
			Self::LBackLeft
		}
		else if back && right {
			Self::LBackRight
		}
		else if right && front {
			Self::LFrontRight
		}
		else {
			Self::None
		}
	}

	/// Sequence that moves this pattern closer to the cross. The same
	/// edge-flipping move is taken from whichever side puts the pattern in
	/// its working position.
	pub fn corrective(self) -> &'static [Move] {
		match self {
			Self::None | Self::LBackLeft | Self::LineHorizontal => &[Front, Right, Up, RightS, UpS, FrontS],
			Self::LFrontLeft => &[Right, Back, Up, BackS, UpS, RightS],
			Self::LBackRight | Self::LineVertical => &[Left, Front, Up, FrontS, UpS, LeftS],
			Self::LFrontRight => &[Back, Left, Up, LeftS, UpS, BackS],
			Self::Cross => &[],
		}
	}
}

/// Swaps the top-front and top-right edges, keeping the rest of the top
/// cross in place up to a turn of the up face.
const SWAP_FRONT_RIGHT: &[Move] = &[Right, Up, RightS, Up, Right, Up, Up, RightS];
/// Same swap done from the left face.
const SWAP_FROM_LEFT: &[Move] = &[Front, Up, FrontS, Up, Front, Up, Up, FrontS];

fn edge_at(cube: &Cube, side: Color) -> Result<EdgeSlot, SolveError> {
	locate_edge(cube, Color::B, side)
}

pub(super) fn solve(cube: &mut Cube, limits: &SolverLimits) -> Result<(), SolveError> {
	let reclassified = repeat_until(
		cube,
		Phase::LastCross,
		"top cross",
		limits.top_cross,
		|cube| Ok(TopCrossState::classify(cube) == TopCrossState::Cross),
		|cube| {
			let state = TopCrossState::classify(cube);
			debug!("top pattern {state:?}");
			apply_sequence(cube, "top cross", state.corrective());
		},
	)?;
	debug!("top cross formed after {reclassified} sequences");

	repeat_until(
		cube,
		Phase::LastCross,
		"front edge alignment",
		limits.top_turns,
		|cube| Ok(edge_at(cube, Color::W)? == EdgeSlot::TopFront),
		|cube| cube.apply(Up),
	)?;
	repeat_until(
		cube,
		Phase::LastCross,
		"right edge swap",
		limits.edge_cycle,
		|cube| Ok(edge_at(cube, Color::R)? == EdgeSlot::TopRight),
		|cube| apply_sequence(cube, "right edge swap", SWAP_FRONT_RIGHT),
	)?;

	// yellow and orange swapped around the back corner
	if edge_at(cube, Color::Y)? == EdgeSlot::TopLeft && edge_at(cube, Color::O)? == EdgeSlot::TopBack {
		debug!("top edge parity");
		repeat_until(
			cube,
			Phase::LastCross,
			"parity edge swap",
			limits.edge_cycle,
			|cube| {
				Ok(edge_at(cube, Color::O)? == EdgeSlot::TopFront
					&& edge_at(cube, Color::W)? == EdgeSlot::TopRight
					&& edge_at(cube, Color::R)? == EdgeSlot::TopBack)
			},
			|cube| apply_sequence(cube, "parity edge swap", SWAP_FROM_LEFT),
		)?;
		cube.apply(Up);
	}

	let all_top_edges_solved = ALL_EDGE_SLOTS
		.into_iter()
		.filter(|slot| slot.ring() == EdgeRing::Top)
		.all(|slot| slot.is_solved(cube));
	if !all_top_edges_solved {
		return Err(SolveError::PostCondition { phase: Phase::LastCross, detail: "the top edges are not solved" });
	}
	Ok(())
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::cube::Tile;

	fn with_blue_on(tiles: &[(u8, u8)]) -> Cube {
		let mut stickers = *Cube::new().stickers();
		for (row, col) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
			stickers[Tile::new(Face::Up, row, col).index()] = Color::G;
		}
		for &(row, col) in tiles {
			stickers[Tile::new(Face::Up, row, col).index()] = Color::B;
		}
		Cube::from_stickers(stickers)
	}

	#[test]
	fn classify_every_pattern() {
		use TopCrossState as S;
		let cases: [(&[(u8, u8)], S); 11] = [
			(&[], S::None),
			(&[(0, 1)], S::None),
			(&[(1, 0), (2, 1)], S::LFrontLeft),
			(&[(1, 0), (0, 1)], S::LBackLeft),
			(&[(0, 1), (1, 2)], S::LBackRight),
			(&[(1, 2), (2, 1)], S::LFrontRight),
			(&[(1, 0), (1, 2)], S::LineHorizontal),
			(&[(0, 1), (2, 1)], S::LineVertical),
			(&[(1, 0), (1, 2), (0, 1)], S::LineHorizontal),
			(&[(0, 1), (2, 1), (1, 2)], S::LineVertical),
			(&[(0, 1), (1, 0), (1, 2), (2, 1)], S::Cross),
		];
		for (tiles, expected) in cases {
			assert_eq!(expected, TopCrossState::classify(&with_blue_on(tiles)), "{tiles:?}");
		}
	}

	#[test]
	fn solved_cube_classifies_as_cross() {
		assert_eq!(TopCrossState::Cross, TopCrossState::classify(&Cube::new()));
		assert!(TopCrossState::Cross.corrective().is_empty());
	}

	#[test]
	fn corrective_sequence_leaves_the_bottom_two_layers() {
		use TopCrossState as S;
		for state in [S::None, S::LFrontLeft, S::LBackLeft, S::LBackRight, S::LFrontRight, S::LineHorizontal, S::LineVertical] {
			let mut cube = Cube::new();
			cube.apply_all(state.corrective());
			assert!(Phase::MiddleEdges.is_complete(&cube), "{state:?}");
		}
	}

	#[test]
	fn top_edges_turned_a_quarter_are_realigned() {
		let mut cube = Cube::new();
		cube.apply(UpS);
		solve(&mut cube, &SolverLimits::default()).unwrap();
		assert!(Phase::LastCross.is_complete(&cube));
		assert_eq!(2, cube.move_count());
	}
}
