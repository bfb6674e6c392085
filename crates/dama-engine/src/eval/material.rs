//! Material balance: men and kings counted with fixed weights.

use dama_core::{Board, Color, PieceKind};

use crate::eval::Evaluator;

/// Value of a man.
pub const MAN_VALUE: i32 = 1;

/// Value of a king.
pub const KING_VALUE: i32 = 3;

/// Counts material from White's perspective.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Material;

impl Evaluator<Board> for Material {
    fn evaluate(&self, board: &Board) -> i32 {
        board
            .occupants()
            .map(|(_, piece)| {
                let value = match piece.kind() {
                    PieceKind::Man => MAN_VALUE,
                    PieceKind::King => KING_VALUE,
                };
                match piece.color() {
                    Color::White => value,
                    Color::Black => -value,
                }
            })
            .sum()
    }
}
