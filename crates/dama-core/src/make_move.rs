//! In-place move execution: apply and its exact inverse, undo.

use crate::board::Board;
use crate::draughts_move::Move;

impl Board {
    /// Play `mv` in place and pass the turn.
    ///
    /// `mv` must be legal in this position; it is not re-validated.
    pub fn apply_move(&mut self, mv: Move) {
        let us = self.side_to_move();
        let them = !us;
        debug_assert!(self.side(us).contains(mv.from()), "no piece of the side to move on {}", mv.from());

        self.toggle_pieces(mv.captured(), them, mv.captured_kings());

        let was_king = self.kings().contains(mv.from());
        self.toggle_piece(mv.from(), us, was_king);
        self.toggle_piece(mv.to(), us, was_king || mv.promotes());

        self.set_side_to_move(them);
    }

    /// Take back `mv`, which must be the last move applied to this board.
    ///
    /// Restores the position to exactly what it was before [`apply_move`](Self::apply_move).
    pub fn undo_move(&mut self, mv: Move) {
        let them = self.side_to_move();
        let us = !them;
        debug_assert!(self.side(us).contains(mv.to()), "no piece to take back on {}", mv.to());

        let is_king = self.kings().contains(mv.to());
        self.toggle_piece(mv.to(), us, is_king);
        self.toggle_piece(mv.from(), us, is_king && !mv.promotes());

        self.toggle_pieces(mv.captured(), them, mv.captured_kings());

        self.set_side_to_move(us);
    }

    /// Return a copy of the board with `mv` applied (copy-make convenience).
    pub fn make_move(&self, mv: Move) -> Board {
        let mut next = *self;
        next.apply_move(mv);
        next
    }
}
