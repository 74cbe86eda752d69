//! Phase 3: the four middle-layer edges.

use log::debug;

use super::{apply_sequence, Phase};
use crate::{
	cube::{Color, Cube},
	error::SolveError,
	moves::Move::{self, *},
	slots::{locate_edge, EdgeRing, EdgeSlot},
};

/// Lifts whatever sits in each middle slot up into the top ring, indexed by
/// ring position.
const EXTRACT: [&[Move]; 4] = [
	&[UpS, LeftS, Up, Left, Up, Front, UpS, FrontS],
	&[Up, Left, UpS, LeftS, UpS, BackS, Up, Back],
	&[UpS, RightS, Up, Right, Up, Back, UpS, BackS],
	&[Up, Right, UpS, RightS, UpS, FrontS, Up, Front],
];

struct MiddleEdge {
	/// Front or back color first.
	colors: [Color; 2],
	target: EdgeSlot,
	/// Top slot the piece is parked in before going down.
	above: EdgeSlot,
	/// Used when the first color shows on the side tile of `above`.
	insert: &'static [Move],
	/// Used when the first color shows on top.
	insert_mirror: &'static [Move],
}

const MIDDLE_EDGES: [MiddleEdge; 4] = [
	MiddleEdge {
		colors: [Color::W, Color::O],
		target: EdgeSlot::MiddleFrontLeft,
		above: EdgeSlot::TopFront,
		insert: &[UpS, LeftS, Up, Left, Up, Front, UpS, FrontS],
		insert_mirror: &[Up, Up, Front, UpS, FrontS, UpS, LeftS, Up, Left],
	},
	MiddleEdge {
		colors: [Color::W, Color::R],
		target: EdgeSlot::MiddleFrontRight,
		above: EdgeSlot::TopFront,
		insert: &[Up, Right, UpS, RightS, UpS, FrontS, Up, Front],
		insert_mirror: &[UpS, UpS, FrontS, Up, Front, Up, Right, UpS, RightS],
	},
	MiddleEdge {
		colors: [Color::Y, Color::O],
		target: EdgeSlot::MiddleBackLeft,
		above: EdgeSlot::TopBack,
		insert: &[Up, Left, UpS, LeftS, UpS, BackS, Up, Back],
		insert_mirror: &[UpS, UpS, BackS, Up, Back, Up, Left, UpS, LeftS],
	},
	MiddleEdge {
		colors: [Color::Y, Color::R],
		target: EdgeSlot::MiddleBackRight,
		above: EdgeSlot::TopBack,
		insert: &[UpS, RightS, Up, Right, Up, Back, UpS, BackS],
		insert_mirror: &[Up, Up, Back, UpS, BackS, UpS, RightS, Up, Right],
	},
];

pub(super) fn solve(cube: &mut Cube) -> Result<(), SolveError> {
	for edge in &MIDDLE_EDGES {
		if edge.target.is_solved(cube) {
			continue;
		}
		let [a, b] = edge.colors;
		let mut at = locate_edge(cube, a, b)?;
		if at.ring() == EdgeRing::Middle {
			apply_sequence(cube, "middle extract", EXTRACT[at.ring_position()]);
			at = locate_edge(cube, a, b)?;
		}
		if at.ring() != EdgeRing::Top {
			return Err(SolveError::UnroutableEdge { phase: Phase::MiddleEdges, slot: at });
		}

		let quarter_turns = (edge.above.ring_position() + 4 - at.ring_position()) % 4;
		cube.turn_up(quarter_turns);

		let [side_tile, _] = edge.above.tiles();
		if cube.tile(side_tile) == a {
			apply_sequence(cube, "middle insert", edge.insert);
		}
		else {
			apply_sequence(cube, "middle insert mirrored", edge.insert_mirror);
		}
		if !edge.target.is_solved(cube) {
			return Err(SolveError::PostCondition { phase: Phase::MiddleEdges, detail: "a middle edge was not seated" });
		}
		debug!("middle edge {a}{b} placed");
	}
	Ok(())
}
