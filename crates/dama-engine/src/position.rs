//! The capability the search needs from a game: ordered legal moves,
//! in-place apply/undo, and whose turn it is.

use std::fmt;

use dama_core::{Board, Color, Move};

/// Which way the side to move pushes the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Prefers higher scores.
    Max,
    /// Prefers lower scores.
    Min,
}

impl Role {
    /// The other role.
    #[inline]
    pub const fn opponent(self) -> Role {
        match self {
            Role::Max => Role::Min,
            Role::Min => Role::Max,
        }
    }
}

/// A mutable game position the search can walk with apply/undo.
///
/// `undo_move(m)` must be the exact inverse of `apply_move(m)`: after the
/// pair the position compares equal to what it was before.
pub trait Position {
    /// A move in this game. The search only ever picks among enumerated moves.
    type Move: Copy + Eq + fmt::Debug;

    /// Legal moves in a fixed, deterministic order. Empty when the game is over.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Play `mv` in place.
    fn apply_move(&mut self, mv: Self::Move);

    /// Take back `mv`, the last move applied.
    fn undo_move(&mut self, mv: Self::Move);

    /// The role of the side to move.
    fn role_to_move(&self) -> Role;

    /// Return `true` if the side to move has no legal move.
    fn is_terminal(&self) -> bool {
        self.legal_moves().is_empty()
    }
}

/// White maximizes, Black minimizes.
impl Position for Board {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        Board::legal_moves(self).into_iter().collect()
    }

    #[inline]
    fn apply_move(&mut self, mv: Move) {
        Board::apply_move(self, mv);
    }

    #[inline]
    fn undo_move(&mut self, mv: Move) {
        Board::undo_move(self, mv);
    }

    #[inline]
    fn role_to_move(&self) -> Role {
        match self.side_to_move() {
            Color::White => Role::Max,
            Color::Black => Role::Min,
        }
    }

    fn is_terminal(&self) -> bool {
        self.is_game_over()
    }
}

#[cfg(test)]
mod tests {
    use super::{Position, Role};
    use dama_core::Board;

    #[test]
    fn white_maximizes() {
        let mut board = Board::starting_position();
        assert_eq!(board.role_to_move(), Role::Max);
        let mv = Position::legal_moves(&board)[0];
        Position::apply_move(&mut board, mv);
        assert_eq!(board.role_to_move(), Role::Min);
        assert_eq!(Role::Min.opponent(), Role::Max);
    }

    #[test]
    fn board_moves_match_core_order() {
        let board = Board::starting_position();
        let via_trait = Position::legal_moves(&board);
        let via_core: Vec<_> = board.legal_moves().into_iter().collect();
        assert_eq!(via_trait, via_core);
    }
}
