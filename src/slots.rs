//! Static edge and corner slot tables, and the piece locator.

use log::debug;

use crate::{
	cube::{Color, Cube, Face, Tile},
	error::SolveError,
};

const fn t(face: Face, row: u8, col: u8) -> Tile {
	Tile::new(face, row, col)
}



#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeRing { Cross, Middle, Top }

/// The twelve edge positions. Each slot's first tile sits on a side face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum EdgeSlot {
	CrossFront, CrossLeft, CrossBack, CrossRight,
	MiddleFrontLeft, MiddleBackLeft, MiddleBackRight, MiddleFrontRight,
	TopFront, TopLeft, TopBack, TopRight,
}
pub const ALL_EDGE_SLOTS: [EdgeSlot; 12] = {use EdgeSlot::*; [
	CrossFront, CrossLeft, CrossBack, CrossRight,
	MiddleFrontLeft, MiddleBackLeft, MiddleBackRight, MiddleFrontRight,
	TopFront, TopLeft, TopBack, TopRight,
]};

const EDGE_TILES: [[Tile; 2]; 12] = {use Face::*; [
	[t(Front, 2, 1), t(Down, 0, 1)],
	[t(Left, 2, 1), t(Down, 1, 0)],
	[t(Back, 2, 1), t(Down, 2, 1)],
	[t(Right, 2, 1), t(Down, 1, 2)],
	[t(Front, 1, 0), t(Left, 1, 2)],
	[t(Back, 1, 2), t(Left, 1, 0)],
	[t(Back, 1, 0), t(Right, 1, 2)],
	[t(Front, 1, 2), t(Right, 1, 0)],
	[t(Front, 0, 1), t(Up, 2, 1)],
	[t(Left, 0, 1), t(Up, 1, 0)],
	[t(Back, 0, 1), t(Up, 0, 1)],
	[t(Right, 0, 1), t(Up, 1, 2)],
]};

impl EdgeSlot {
	pub const fn index(self) -> usize {
		self as usize
	}

	pub const fn tiles(self) -> [Tile; 2] {
		EDGE_TILES[self.index()]
	}

	pub const fn ring(self) -> EdgeRing {
		match self.index() / 4 {
			0 => EdgeRing::Cross,
			1 => EdgeRing::Middle,
			_ => EdgeRing::Top,
		}
	}

	/// Position `0..4` inside the slot's ring.
	pub const fn ring_position(self) -> usize {
		self.index() % 4
	}

	pub fn is_solved(self, cube: &Cube) -> bool {
		self.tiles().into_iter().all(|tile| tile.is_home(cube))
	}

	pub fn colors(self, cube: &Cube) -> [Color; 2] {
		self.tiles().map(|tile| cube.tile(tile))
	}
}



#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerRing { Bottom, Top }

/// The eight corner positions. The first tile of each slot sits on the
/// front or back face, the second on left or right, the third on up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum CornerSlot {
	BottomFrontLeft, BottomBackLeft, BottomBackRight, BottomFrontRight,
	TopFrontLeft, TopBackLeft, TopBackRight, TopFrontRight,
}
pub const ALL_CORNER_SLOTS: [CornerSlot; 8] = {use CornerSlot::*; [
	BottomFrontLeft, BottomBackLeft, BottomBackRight, BottomFrontRight,
	TopFrontLeft, TopBackLeft, TopBackRight, TopFrontRight,
]};

const CORNER_TILES: [[Tile; 3]; 8] = {use Face::*; [
	[t(Front, 2, 0), t(Left, 2, 2), t(Down, 0, 0)],
	[t(Back, 2, 2), t(Left, 2, 0), t(Down, 2, 0)],
	[t(Back, 2, 0), t(Right, 2, 2), t(Down, 2, 2)],
	[t(Front, 2, 2), t(Right, 2, 0), t(Down, 0, 2)],
	[t(Front, 0, 0), t(Left, 0, 2), t(Up, 2, 0)],
	[t(Back, 0, 2), t(Left, 0, 0), t(Up, 0, 0)],
	[t(Back, 0, 0), t(Right, 0, 2), t(Up, 0, 2)],
	[t(Front, 0, 2), t(Right, 0, 0), t(Up, 2, 2)],
]};

impl CornerSlot {
	pub const fn index(self) -> usize {
		self as usize
	}

	pub const fn tiles(self) -> [Tile; 3] {
		CORNER_TILES[self.index()]
	}

	pub const fn ring(self) -> CornerRing {
		if self.index() < 4 { CornerRing::Bottom } else { CornerRing::Top }
	}

	pub const fn ring_position(self) -> usize {
		self.index() % 4
	}

	pub fn is_solved(self, cube: &Cube) -> bool {
		self.tiles().into_iter().all(|tile| tile.is_home(cube))
	}

	pub fn colors(self, cube: &Cube) -> [Color; 3] {
		self.tiles().map(|tile| cube.tile(tile))
	}
}



/// Finds the one edge slot holding the piece colored `a` and `b`, in either
/// orientation.
pub fn locate_edge(cube: &Cube, a: Color, b: Color) -> Result<EdgeSlot, SolveError> {
	let mut wanted = [a, b];
	wanted.sort_unstable();
	let found = locate(ALL_EDGE_SLOTS, &wanted, |slot| {
		let mut colors = slot.colors(cube);
		colors.sort_unstable();
		colors
	})?;
	debug!("edge {a}{b} is in {found:?}");
	Ok(found)
}

/// Finds the one corner slot holding the piece colored `a`, `b` and `c`, in
/// any orientation.
pub fn locate_corner(cube: &Cube, a: Color, b: Color, c: Color) -> Result<CornerSlot, SolveError> {
	let mut wanted = [a, b, c];
	wanted.sort_unstable();
	let found = locate(ALL_CORNER_SLOTS, &wanted, |slot| {
		let mut colors = slot.colors(cube);
		colors.sort_unstable();
		colors
	})?;
	debug!("corner {a}{b}{c} is in {found:?}");
	Ok(found)
}

fn locate<S: Copy, const N: usize, const K: usize>(
	slots: [S; N],
	wanted: &[Color; K],
	sorted_colors: impl Fn(S) -> [Color; K],
) -> Result<S, SolveError> {
	let mut matches = slots.into_iter().filter(|&slot| sorted_colors(slot) == *wanted);
	let Some(first) = matches.next() else {
		return Err(SolveError::PieceMissing { colors: wanted.to_vec() });
	};
	let extra = matches.count();
	if extra > 0 {
		return Err(SolveError::PieceDuplicated { colors: wanted.to_vec(), count: extra + 1 });
	}
	Ok(first)
}
