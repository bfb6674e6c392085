//! Square tables: each piece scores by where it stands.
//!
//! Tables are indexed by square index (square number minus one), row by row
//! from White's promotion row (1-5) down to Black's (46-50). Every entry is
//! positive, so an extra piece never lowers its own side's total.

use dama_core::{Board, Color, PieceKind, Square};

use crate::eval::Evaluator;

/// Flat bonus added on top of the square weight for a king.
pub const KING_BONUS: i32 = 20;

/// White men gain value as they approach row 1-5.
#[rustfmt::skip]
const WHITE_TABLE: [i32; Square::COUNT] = [
    10, 10, 10,  9, 10,
     9,  8,  9,  7,  7,
     7,  7,  7,  6,  7,
     7,  6,  6,  5,  4,
     6,  5,  5,  6,  7,
     5,  4,  4,  5,  4,
     4,  4,  5,  5,  6,
     3,  4,  5,  4,  3,
     2,  3,  2,  2,  4,
     5,  4,  3,  4,  4,
];

/// Black men gain value as they approach row 46-50.
#[rustfmt::skip]
const BLACK_TABLE: [i32; Square::COUNT] = [
     5,  4,  3,  4,  4,
     4,  2,  2,  3,  2,
     3,  4,  5,  4,  3,
     6,  5,  5,  4,  4,
     4,  5,  4,  4,  5,
     7,  6,  5,  5,  6,
     4,  5,  6,  6,  7,
     7,  6,  7,  7,  7,
     7,  7,  9,  8,  9,
    10,  9, 10, 10, 10,
];

/// Weight of a piece of `color` and `kind` on `sq`.
#[inline]
pub fn square_value(color: Color, kind: PieceKind, sq: Square) -> i32 {
    let table = match color {
        Color::White => &WHITE_TABLE,
        Color::Black => &BLACK_TABLE,
    };
    let base = table[sq.index()];
    match kind {
        PieceKind::Man => base,
        PieceKind::King => base + KING_BONUS,
    }
}

/// Square-table evaluation, White's total minus Black's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Positional;

impl Evaluator<Board> for Positional {
    fn evaluate(&self, board: &Board) -> i32 {
        let mut white = 0;
        let mut black = 0;
        for (sq, piece) in board.occupants() {
            let value = square_value(piece.color(), piece.kind(), sq);
            match piece.color() {
                Color::White => white += value,
                Color::Black => black += value,
            }
        }
        white - black
    }
}
