//! Static evaluation.
//!
//! Every evaluator scores from White's perspective: positive favours White
//! (the maximizing side), negative favours Black, whoever is to move.

pub mod material;
pub mod pst;

use std::fmt;
use std::str::FromStr;

use dama_core::Board;

pub use material::Material;
pub use pst::Positional;

/// A static evaluation function over positions of type `P`.
///
/// Must be total and deterministic.
pub trait Evaluator<P: ?Sized> {
    /// Score `position`; positive favours the maximizing side.
    fn evaluate(&self, position: &P) -> i32;
}

/// Runtime choice between the built-in board evaluators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvaluatorKind {
    /// Piece count only; see [`Material`].
    Material,
    /// Square tables plus a king bonus; see [`Positional`].
    #[default]
    Positional,
}

impl EvaluatorKind {
    /// All selectable kinds.
    pub const ALL: [EvaluatorKind; 2] = [EvaluatorKind::Material, EvaluatorKind::Positional];

    /// The name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            EvaluatorKind::Material => "material",
            EvaluatorKind::Positional => "positional",
        }
    }
}

impl Evaluator<Board> for EvaluatorKind {
    fn evaluate(&self, board: &Board) -> i32 {
        match self {
            EvaluatorKind::Material => Material.evaluate(board),
            EvaluatorKind::Positional => Positional.evaluate(board),
        }
    }
}

impl fmt::Display for EvaluatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an evaluator name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown evaluator \"{name}\" (expected material or positional)")]
pub struct ParseEvaluatorError {
    /// The rejected name.
    pub name: String,
}

impl FromStr for EvaluatorKind {
    type Err = ParseEvaluatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EvaluatorKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEvaluatorError { name: s.to_string() })
    }
}
