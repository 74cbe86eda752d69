use thiserror::Error;

use crate::{
	cube::Color,
	slots::{CornerSlot, EdgeSlot},
	solver::Phase,
};

/// Invariant violations observed while solving. None of these can happen to a
/// cube that was only ever mutated through [`Cube::apply`](crate::Cube::apply).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
	#[error("malformed cube: color counts {counts:?} (B Y O W R G), expected 9 of each")]
	Malformed { counts: [u8; 6] },
	#[error("no slot holds the piece {colors:?}")]
	PieceMissing { colors: Vec<Color> },
	#[error("{count} slots hold the piece {colors:?}")]
	PieceDuplicated { colors: Vec<Color>, count: usize },
	#[error("{phase}: no route from edge slot {slot:?}")]
	UnroutableEdge { phase: Phase, slot: EdgeSlot },
	#[error("{phase}: no route from corner slot {slot:?}")]
	UnroutableCorner { phase: Phase, slot: CornerSlot },
	#[error("{phase}: {step} did not converge within {limit} iterations")]
	IterationLimit { phase: Phase, step: &'static str, limit: usize },
	#[error("{phase} finished but {detail}")]
	PostCondition { phase: Phase, detail: &'static str },
}
