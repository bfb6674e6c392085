//! Legal move generation.
//!
//! Capturing is compulsory and only the sequences taking the most pieces are
//! legal. Quiet moves are generated only when no capture exists.

mod captures;
mod quiet;

use crate::board::Board;
use crate::draughts_move::Move;

use self::captures::gen_captures;
use self::quiet::gen_quiet;

/// An ordered list of legal moves.
///
/// Order is deterministic: pieces in ascending square order, then directions
/// in [`Direction::ALL`](crate::Direction::ALL) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList { moves: Vec::new() }
    }

    /// Push a move onto the list.
    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Remove every move.
    #[inline]
    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Return `true` if `mv` is in the list.
    #[inline]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    /// Iterate over the moves in generation order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.moves[index]
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

/// Generate all legal moves for the side to move.
pub fn generate_legal_moves(board: &Board) -> MoveList {
    let captures = gen_captures(board);
    if !captures.is_empty() {
        return captures;
    }
    gen_quiet(board)
}

impl Board {
    /// Legal moves for the side to move; see [`generate_legal_moves`].
    #[inline]
    pub fn legal_moves(&self) -> MoveList {
        generate_legal_moves(self)
    }

    /// Return `true` if the side to move has no legal move (it has lost).
    pub fn is_game_over(&self) -> bool {
        self.legal_moves().is_empty()
    }
}
