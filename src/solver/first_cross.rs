//! Phase 1: green cross on the down face.

use log::debug;

use super::{apply_sequence, Phase};
use crate::{
	cube::{Color, Cube},
	error::SolveError,
	moves::Move::{self, *},
	slots::{locate_edge, EdgeSlot},
};

struct CrossEdge {
	side: Color,
	target: EdgeSlot,
	/// Sequence that carries the piece from each edge slot into `target`,
	/// without disturbing the cross edges already placed. `None` marks slots
	/// that only hold an already placed edge.
	routes: [Option<&'static [Move]>; 12],
	/// Turns the piece over in place.
	flip: &'static [Move],
}

const CROSS_EDGES: [CrossEdge; 4] = [
	CrossEdge {
		side: Color::W,
		target: EdgeSlot::CrossFront,
		routes: [
			Some(&[]),
			Some(&[Down]),
			Some(&[Down, Down]),
			Some(&[DownS]),
			Some(&[FrontS]),
			Some(&[LeftS, Down]),
			Some(&[Right, DownS]),
			Some(&[Front]),
			Some(&[Front, Front]),
			Some(&[Left, Left, Down]),
			Some(&[Up, Up, Front, Front]),
			Some(&[RightS, RightS, DownS]),
		],
		flip: &[FrontS, Down, RightS, DownS],
	},
	CrossEdge {
		side: Color::O,
		target: EdgeSlot::CrossLeft,
		routes: [
			None,
			Some(&[]),
			Some(&[BackS, LeftS]),
			Some(&[RightS, Back, Back, LeftS]),
			Some(&[Left]),
			Some(&[LeftS]),
			Some(&[Back, UpS, Left, Left]),
			Some(&[Right, Up, Up, Left, Left]),
			Some(&[Up, Left, Left]),
			Some(&[Left, Left]),
			Some(&[UpS, Left, Left]),
			Some(&[Up, Up, Left, Left]),
		],
		flip: &[LeftS, Down, FrontS, DownS],
	},
	CrossEdge {
		side: Color::R,
		target: EdgeSlot::CrossRight,
		routes: [
			None,
			None,
			Some(&[Back, Right]),
			Some(&[]),
			Some(&[LeftS, UpS, Left, UpS, RightS, RightS]),
			Some(&[BackS, Up, RightS, RightS]),
			Some(&[Right]),
			Some(&[RightS]),
			Some(&[UpS, RightS, RightS]),
			Some(&[UpS, UpS, RightS, RightS]),
			Some(&[Up, RightS, RightS]),
			Some(&[RightS, RightS]),
		],
		flip: &[RightS, Down, BackS, DownS],
	},
	CrossEdge {
		side: Color::Y,
		target: EdgeSlot::CrossBack,
		routes: [
			None,
			None,
			Some(&[]),
			None,
			Some(&[LeftS, Up, Left, Back, Back]),
			Some(&[Back]),
			Some(&[BackS]),
			Some(&[Right, UpS, RightS, Back, Back]),
			Some(&[Up, Up, Back, Back]),
			Some(&[Up, Back, Back]),
			Some(&[Back, Back]),
			Some(&[UpS, Back, Back]),
		],
		flip: &[BackS, Down, LeftS, DownS],
	},
];

pub(super) fn solve(cube: &mut Cube) -> Result<(), SolveError> {
	for edge in &CROSS_EDGES {
		let at = locate_edge(cube, Color::G, edge.side)?;
		let route = edge.routes[at.index()]
			.ok_or(SolveError::UnroutableEdge { phase: Phase::FirstCross, slot: at })?;
		apply_sequence(cube, "cross route", route);

		let [_, down_tile] = edge.target.tiles();
		if cube.tile(down_tile) == edge.side {
			apply_sequence(cube, "cross flip", edge.flip);
		}
		if !edge.target.is_solved(cube) {
			return Err(SolveError::PostCondition { phase: Phase::FirstCross, detail: "a cross edge was not seated" });
		}
		debug!("cross edge G{} placed", edge.side);
	}
	Ok(())
}
