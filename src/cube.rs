//! Cube state: six 3x3 faces stored as one flat sticker array.

use std::fmt;

use crate::solver::Phase;



#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Color { B, Y, O, W, R, G }
pub const ALL_COLORS: [Color; 6] = {use Color::*; [B, Y, O, W, R, G]};
impl Color {
	pub const fn to_u8(self) -> u8 {
		self as u8
	}
}
impl fmt::Display for Color {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let letter = match self {
			Color::B => 'B',
			Color::Y => 'Y',
			Color::O => 'O',
			Color::W => 'W',
			Color::R => 'R',
			Color::G => 'G',
		};
		write!(f, "{letter}")
	}
}

/// Faces in storage order. Viewed facing white (front) with blue on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Face { Up, Back, Left, Front, Right, Down }
pub const ALL_FACES: [Face; 6] = {use Face::*; [Up, Back, Left, Front, Right, Down]};
impl Face {
	pub const fn index(self) -> usize {
		self as usize
	}

	/// Color every tile of this face shows on a solved cube.
	pub const fn home_color(self) -> Color {
		match self {
			Face::Up => Color::B,
			Face::Back => Color::Y,
			Face::Left => Color::O,
			Face::Front => Color::W,
			Face::Right => Color::R,
			Face::Down => Color::G,
		}
	}
}

/// A sticker position: `(face, row, col)` with row and col in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
	pub face: Face,
	pub row: u8,
	pub col: u8,
}
impl Tile {
	pub const fn new(face: Face, row: u8, col: u8) -> Self {
		assert!(row < 3 && col < 3, "tile row and col must be in 0..3");
		Self { face, row, col }
	}

	/// Position in the flat sticker array.
	pub const fn index(self) -> usize {
		self.face.index() * 9 + self.row as usize * 3 + self.col as usize
	}

	pub fn is_home(self, cube: &Cube) -> bool {
		cube.tile(self) == self.face.home_color()
	}
}

//               0  1  2
//               3  4  5
//               6  7  8
//  9 10 11  18 19 20  27 28 29  36 37 38
// 12 13 14  21 22 23  30 31 32  39 40 41
// 15 16 17  24 25 26  33 34 35  42 43 44
//              45 46 47
//              48 49 50
//              51 52 53
//
// up on top, then back, left, front, right side by side, down below.
#[derive(Debug, Clone, Copy)]
pub struct Cube {
	stickers: [Color; 9*6],
	moves: u32,
	phase_moves: [u32; 5],
}
impl Cube {
	const NEW: [Color; 54] = { use Color::*; [
		B,B,B, B,B,B, B,B,B,
		Y,Y,Y, Y,Y,Y, Y,Y,Y,
		O,O,O, O,O,O, O,O,O,
		W,W,W, W,W,W, W,W,W,
		R,R,R, R,R,R, R,R,R,
		G,G,G, G,G,G, G,G,G,
	]};

	pub fn new() -> Self {
		Self::from_stickers(Self::NEW)
	}

	/// Builds a cube from raw stickers in storage order.
	///
	/// Nothing checks that the stickers describe a reachable cube; the solver
	/// reports a fault if they don't.
	pub fn from_stickers(stickers: [Color; 54]) -> Self {
		Self { stickers, moves: 0, phase_moves: [0; 5] }
	}

	pub fn stickers(&self) -> &[Color; 54] {
		&self.stickers
	}

	pub fn tile(&self, tile: Tile) -> Color {
		self.stickers[tile.index()]
	}

	pub fn color_at(&self, face: Face, row: u8, col: u8) -> Color {
		self.tile(Tile::new(face, row, col))
	}

	pub fn move_count(&self) -> u32 {
		self.moves
	}

	pub fn phase_moves(&self, phase: Phase) -> u32 {
		self.phase_moves[phase.index()]
	}

	pub fn all_phase_moves(&self) -> [u32; 5] {
		self.phase_moves
	}

	pub(crate) fn record_phase(&mut self, phase: Phase, moves: u32) {
		self.phase_moves[phase.index()] = moves;
	}

	pub fn reset_counters(&mut self) {
		self.moves = 0;
		self.phase_moves = [0; 5];
	}

	pub fn is_solved(&self) -> bool {
		self.stickers == Self::NEW
	}

	/// Number of tiles showing each color, indexed by `Color::to_u8`.
	pub fn color_counts(&self) -> [u8; 6] {
		let mut counts = [0u8; 6];
		for color in self.stickers {
			counts[color as usize] += 1;
		}
		counts
	}

	/// Every color appears exactly nine times.
	pub fn is_well_formed(&self) -> bool {
		self.color_counts() == [9; 6]
	}

	pub(crate) fn stickers_mut(&mut self) -> &mut [Color; 54] {
		&mut self.stickers
	}

	pub(crate) fn bump_moves(&mut self) {
		self.moves += 1;
	}
}

impl Default for Cube {
	fn default() -> Self {
		Self::new()
	}
}

// counters are diagnostics, two cubes are the same when their stickers are
impl PartialEq for Cube {
	fn eq(&self, other: &Self) -> bool {
		self.stickers == other.stickers
	}
}
impl Eq for Cube {}

impl fmt::Display for Cube {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let row = |face: Face, r: u8| -> String {
			(0..3).map(|c| self.color_at(face, r, c).to_string()).collect::<Vec<_>>().join(" ")
		};
		for r in 0..3 {
			writeln!(f, "      {}", row(Face::Up, r))?;
		}
		for r in 0..3 {
			let sides: Vec<String> = [Face::Back, Face::Left, Face::Front, Face::Right]
				.into_iter()
				.map(|face| row(face, r))
				.collect();
			writeln!(f, "{}", sides.join(" "))?;
		}
		for r in 0..3 {
			writeln!(f, "      {}", row(Face::Down, r))?;
		}
		Ok(())
	}
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn solved_cube_has_nine_of_each_color() {
		let cube = Cube::new();
		assert_eq!([9; 6], cube.color_counts());
		assert!(cube.is_well_formed());
		assert!(cube.is_solved());
		for face in ALL_FACES {
			for r in 0..3 {
				for c in 0..3 {
					assert_eq!(face.home_color(), cube.color_at(face, r, c));
				}
			}
		}
	}

	#[test]
	fn tile_index_matches_layout() {
		assert_eq!(0, Tile::new(Face::Up, 0, 0).index());
		assert_eq!(13, Tile::new(Face::Back, 1, 1).index());
		assert_eq!(26, Tile::new(Face::Left, 2, 2).index());
		assert_eq!(27, Tile::new(Face::Front, 0, 0).index());
		assert_eq!(44, Tile::new(Face::Right, 2, 2).index());
		assert_eq!(53, Tile::new(Face::Down, 2, 2).index());
	}

	#[test]
	fn equality_ignores_counters() {
		let mut a = Cube::new();
		a.bump_moves();
		a.record_phase(Phase::MiddleEdges, 3);
		assert_eq!(Cube::new(), a);
		assert_eq!(1, a.move_count());
		a.reset_counters();
		assert_eq!(0, a.move_count());
		assert_eq!(0, a.phase_moves(Phase::MiddleEdges));
	}

	#[test]
	fn miscolored_cube_is_not_well_formed() {
		let mut stickers = *Cube::new().stickers();
		stickers[Tile::new(Face::Front, 0, 1).index()] = Color::R;
		let cube = Cube::from_stickers(stickers);
		assert!(!cube.is_well_formed());
		assert_eq!([9, 9, 9, 8, 10, 9], cube.color_counts());
	}

	#[test]
	fn display_solved() {
		insta::assert_snapshot!(Cube::new().to_string(), @r"
		      B B B
		      B B B
		      B B B
		Y Y Y O O O W W W R R R
		Y Y Y O O O W W W R R R
		Y Y Y O O O W W W R R R
		      G G G
		      G G G
		      G G G
		");
	}
}
