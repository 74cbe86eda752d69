//! Random scrambles from an injected, seedable RNG.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{
	cube::Cube,
	moves::{Move, ALL_MOVES},
};



/// Scramble length used when none is given.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 40;

impl Cube {
	pub fn new_scrambled<R: Rng + ?Sized>(len: usize, rng: &mut R) -> (Self, Vec<Move>) {
		let mut self_ = Self::new();
		let moves = self_.scramble(len, rng);
		(self_, moves)
	}

	/// Applies `len` random moves, then zeroes the counters so only the
	/// solver's moves get counted.
	pub fn scramble<R: Rng + ?Sized>(&mut self, len: usize, rng: &mut R) -> Vec<Move> {
		let mut moves = Vec::with_capacity(len);
		for _ in 0..len {
			let move_ = self.scramble_once(rng);
			moves.push(move_);
		}
		self.reset_counters();
		moves
	}

	fn scramble_once<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Move {
		let move_ = ALL_MOVES[rng.random_range(0..ALL_MOVES.len())];
		self.apply(move_);
		move_
	}
}

/// Deterministic RNG for cube number `stream` of a run seeded with `seed`.
/// Different streams never overlap, so cubes can be scrambled in any order
/// or in parallel and still get the same moves.
pub fn seeded_rng(seed: u64, stream: u64) -> ChaCha8Rng {
	let mut rng = ChaCha8Rng::seed_from_u64(seed);
	rng.set_stream(stream);
	rng
}
