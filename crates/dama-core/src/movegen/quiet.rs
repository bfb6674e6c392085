//! Non-capturing moves: one forward step for men, any distance for kings.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::direction::Direction;
use crate::draughts_move::Move;
use crate::movegen::MoveList;

/// Generate every non-capturing move for the side to move.
pub(super) fn gen_quiet(board: &Board) -> MoveList {
    let us = board.side_to_move();
    let empty = !board.occupied();
    let promotion_row = Bitboard::promotion_row(us);
    let mut moves = MoveList::new();

    for from in board.side(us) {
        if board.kings().contains(from) {
            for dir in Direction::ALL {
                for to in from.ray(dir).take_while(|sq| empty.contains(*sq)) {
                    moves.push(Move::quiet(from, to, false));
                }
            }
        } else {
            for dir in Direction::forward(us) {
                if let Some(to) = from.neighbor(dir)
                    && empty.contains(to)
                {
                    moves.push(Move::quiet(from, to, promotion_row.contains(to)));
                }
            }
        }
    }

    moves
}
