//! Draughts move representation.
//!
//! A move carries everything needed to undo it in place: the captured squares,
//! which of them held kings, and whether the moving man was promoted.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::square::Square;

/// A complete move, including a whole capture sequence.
///
/// Two capture sequences with the same origin, destination and captured set
/// compare equal; the path taken in between is not part of the move.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    captured: Bitboard,
    captured_kings: Bitboard,
    promotes: bool,
}

impl Move {
    /// Create a non-capturing move.
    pub const fn quiet(from: Square, to: Square, promotes: bool) -> Move {
        Move {
            from,
            to,
            captured: Bitboard::EMPTY,
            captured_kings: Bitboard::EMPTY,
            promotes,
        }
    }

    /// Create a capture. `captured_kings` must be a subset of `captured`.
    pub const fn capture(
        from: Square,
        to: Square,
        captured: Bitboard,
        captured_kings: Bitboard,
        promotes: bool,
    ) -> Move {
        Move {
            from,
            to,
            captured,
            captured_kings,
            promotes,
        }
    }

    /// Origin square.
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// Destination square.
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// Squares of the pieces removed by this move.
    #[inline]
    pub const fn captured(self) -> Bitboard {
        self.captured
    }

    /// The subset of [`captured`](Self::captured) that held kings.
    #[inline]
    pub const fn captured_kings(self) -> Bitboard {
        self.captured_kings
    }

    /// Return `true` if this move removes at least one piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_nonempty()
    }

    /// Return `true` if the moving man becomes a king.
    #[inline]
    pub const fn promotes(self) -> bool {
        self.promotes
    }

    /// Find the legal move written as `32-28` or `28x19` in `board`.
    ///
    /// When several captures share origin and destination, the first one in
    /// generation order is returned.
    pub fn from_notation(s: &str, board: &Board) -> Option<Move> {
        let (from, to, capture) = if let Some((a, b)) = s.split_once('x') {
            (a, b, true)
        } else {
            let (a, b) = s.split_once('-')?;
            (a, b, false)
        };
        let from = Square::from_number(from.trim().parse().ok()?)?;
        let to = Square::from_number(to.trim().parse().ok()?)?;

        board
            .legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to && mv.is_capture() == capture)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}
