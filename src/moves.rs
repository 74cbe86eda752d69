//! Rotation engine: the twelve quarter turns.

use std::{fmt, str::FromStr};

use log::trace;
use thiserror::Error;

use crate::cube::{Cube, Face};



/// A quarter turn. The `S` variants turn the same face counter-clockwise
/// (written `X'` in notation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Move { Up, UpS, Back, BackS, Left, LeftS, Front, FrontS, Right, RightS, Down, DownS }
pub const ALL_MOVES: [Move; 12] = {use Move::*; [Up, UpS, Back, BackS, Left, LeftS, Front, FrontS, Right, RightS, Down, DownS]};

impl Move {
	pub const fn face(self) -> Face {
		match self {
			Move::Up | Move::UpS => Face::Up,
			Move::Back | Move::BackS => Face::Back,
			Move::Left | Move::LeftS => Face::Left,
			Move::Front | Move::FrontS => Face::Front,
			Move::Right | Move::RightS => Face::Right,
			Move::Down | Move::DownS => Face::Down,
		}
	}

	pub const fn is_clockwise(self) -> bool {
		matches!(self, Move::Up | Move::Back | Move::Left | Move::Front | Move::Right | Move::Down)
	}

	pub const fn inverse(self) -> Self {
		match self {
			Move::Up => Move::UpS,
			Move::UpS => Move::Up,
			Move::Back => Move::BackS,
			Move::BackS => Move::Back,
			Move::Left => Move::LeftS,
			Move::LeftS => Move::Left,
			Move::Front => Move::FrontS,
			Move::FrontS => Move::Front,
			Move::Right => Move::RightS,
			Move::RightS => Move::Right,
			Move::Down => Move::DownS,
			Move::DownS => Move::Down,
		}
	}
}

/// Sticker 4-cycles of each clockwise face turn, indexed by `Face::index`.
///
/// The first two cycles spin the turned face around its center, the other
/// three carry the bordering rows of the four neighbours around the ring.
const TURN_CYCLES: [[[usize; 4]; 5]; 6] = [
	// up
	[[0, 2, 8, 6], [1, 5, 7, 3], [9, 36, 27, 18], [10, 37, 28, 19], [11, 38, 29, 20]],
	// back
	[[9, 11, 17, 15], [10, 14, 16, 12], [0, 24, 53, 38], [1, 21, 52, 41], [2, 18, 51, 44]],
	// left
	[[18, 20, 26, 24], [19, 23, 25, 21], [0, 27, 45, 17], [3, 30, 48, 14], [6, 33, 51, 11]],
	// front
	[[27, 29, 35, 33], [28, 32, 34, 30], [6, 36, 47, 26], [7, 39, 46, 23], [8, 42, 45, 20]],
	// right
	[[36, 38, 44, 42], [37, 41, 43, 39], [2, 15, 47, 29], [5, 12, 50, 32], [8, 9, 53, 35]],
	// down
	[[45, 47, 53, 51], [46, 50, 52, 48], [15, 24, 33, 42], [16, 25, 34, 43], [17, 26, 35, 44]],
];

impl Cube {
	/// Applies one quarter turn and bumps the move counter.
	pub fn apply(&mut self, move_: Move) {
		trace!("rotate: {move_}");
		let cycles = &TURN_CYCLES[move_.face().index()];
		let stickers = self.stickers_mut();
		if move_.is_clockwise() {
			for &[i1, i2, i3, i4] in cycles {
				stickers.rotate4(i1, i2, i3, i4);
			}
		}
		else {
			for &[i1, i2, i3, i4] in cycles {
				stickers.rotate4(i1, i4, i3, i2);
			}
		}
		self.bump_moves();
	}

	pub fn apply_all(&mut self, moves: &[Move]) {
		for &move_ in moves {
			self.apply(move_);
		}
	}

	/// Applies `quarter_turns` clockwise turns of the up face, using a single
	/// counter-clockwise turn in place of three.
	pub fn turn_up(&mut self, quarter_turns: usize) {
		match quarter_turns % 4 {
			0 => {}
			1 => self.apply(Move::Up),
			2 => self.apply_all(&[Move::Up, Move::Up]),
			_ => self.apply(Move::UpS),
		}
	}
}



pub(crate) trait ExtArrayRotate4 {
	fn rotate4(&mut self, i1: usize, i2: usize, i3: usize, i4: usize);
}
impl<T: Copy, const L: usize> ExtArrayRotate4 for [T; L] {
	/// Moves the value at `i1` to `i2`, `i2` to `i3`, `i3` to `i4` and `i4` to `i1`.
	fn rotate4(&mut self, i1: usize, i2: usize, i3: usize, i4: usize) {
		let temp = self[i4];
		self[i4] = self[i3];
		self[i3] = self[i2];
		self[i2] = self[i1];
		self[i1] = temp;
	}
}



impl fmt::Display for Move {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let letter = match self.face() {
			Face::Up => 'U',
			Face::Back => 'B',
			Face::Left => 'L',
			Face::Front => 'F',
			Face::Right => 'R',
			Face::Down => 'D',
		};
		if self.is_clockwise() {
			write!(f, "{letter}")
		}
		else {
			write!(f, "{letter}'")
		}
	}
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown move `{0}`, expected one of U U' B B' L L' F F' R R' D D'")]
pub struct ParseMoveError(pub String);

impl FromStr for Move {
	type Err = ParseMoveError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		use Move::*;
		Ok(match s {
			"U" => Up,
			"U'" => UpS,
			"B" => Back,
			"B'" => BackS,
			"L" => Left,
			"L'" => LeftS,
			"F" => Front,
			"F'" => FrontS,
			"R" => Right,
			"R'" => RightS,
			"D" => Down,
			"D'" => DownS,
			_ => return Err(ParseMoveError(s.to_string())),
		})
	}
}

/// Parses a whitespace separated sequence such as `"U R F' D"`.
pub fn parse_moves(notation: &str) -> Result<Vec<Move>, ParseMoveError> {
	notation.split_whitespace().map(str::parse).collect()
}

pub fn format_moves(moves: &[Move]) -> String {
	moves.iter().map(Move::to_string).collect::<Vec<_>>().join(" ")
}
