//! Colored draughts pieces: the four occupant kinds an evaluator distinguishes.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A piece with its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    WhiteMan,
    WhiteKing,
    BlackMan,
    BlackKing,
}

impl Piece {
    /// All four pieces, White first.
    pub const ALL: [Piece; 4] = [
        Piece::WhiteMan,
        Piece::WhiteKing,
        Piece::BlackMan,
        Piece::BlackKing,
    ];

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        match (color, kind) {
            (Color::White, PieceKind::Man) => Piece::WhiteMan,
            (Color::White, PieceKind::King) => Piece::WhiteKing,
            (Color::Black, PieceKind::Man) => Piece::BlackMan,
            (Color::Black, PieceKind::King) => Piece::BlackKing,
        }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self {
            Piece::WhiteMan | Piece::BlackMan => PieceKind::Man,
            Piece::WhiteKing | Piece::BlackKing => PieceKind::King,
        }
    }

    /// Return the owner.
    #[inline]
    pub const fn color(self) -> Color {
        match self {
            Piece::WhiteMan | Piece::WhiteKing => Color::White,
            Piece::BlackMan | Piece::BlackKing => Color::Black,
        }
    }

    /// Diagram character: `w`/`b` for men, `W`/`B` for kings.
    pub const fn diagram_char(self) -> char {
        match self {
            Piece::WhiteMan => 'w',
            Piece::WhiteKing => 'W',
            Piece::BlackMan => 'b',
            Piece::BlackKing => 'B',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color(), self.kind())
    }
}
