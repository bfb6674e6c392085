//! Capture sequences under the maximum-capture rule.
//!
//! Captured pieces stay on the board until the sequence ends, so they block
//! landing squares and cannot be jumped twice. The capturing piece's origin
//! counts as empty for the whole sequence.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::direction::Direction;
use crate::draughts_move::Move;
use crate::movegen::MoveList;
use crate::square::Square;

/// Depth-first walker collecting the longest capture sequences.
struct CaptureWalk<'a> {
    board: &'a Board,
    empty: Bitboard,
    enemies: Bitboard,
    promotion_row: Bitboard,
    best: u32,
    moves: MoveList,
}

impl CaptureWalk<'_> {
    /// Extend a man's sequence from `at`.
    fn man(&mut self, from: Square, at: Square, captured: Bitboard) {
        let mut extended = false;
        for dir in Direction::ALL {
            let Some(over) = at.neighbor(dir) else { continue };
            if !self.enemies.contains(over) || captured.contains(over) {
                continue;
            }
            let Some(land) = over.neighbor(dir) else { continue };
            if !self.empty.contains(land) {
                continue;
            }
            extended = true;
            self.man(from, land, captured.with(over));
        }
        if !extended {
            self.record(from, at, captured, self.promotion_row.contains(at));
        }
    }

    /// Extend a king's sequence from `at`.
    fn king(&mut self, from: Square, at: Square, captured: Bitboard) {
        let mut extended = false;
        for dir in Direction::ALL {
            let Some(over) = at.ray(dir).find(|sq| !self.empty.contains(*sq)) else {
                continue;
            };
            if !self.enemies.contains(over) || captured.contains(over) {
                continue;
            }
            let landings: Vec<Square> = over
                .ray(dir)
                .take_while(|sq| self.empty.contains(*sq))
                .collect();
            for land in landings {
                extended = true;
                self.king(from, land, captured.with(over));
            }
        }
        if !extended {
            self.record(from, at, captured, false);
        }
    }

    /// Keep a finished sequence if it is at least as long as the best so far.
    fn record(&mut self, from: Square, to: Square, captured: Bitboard, promotes: bool) {
        let count = captured.count();
        if count == 0 || count < self.best {
            return;
        }
        if count > self.best {
            self.best = count;
            self.moves.clear();
        }
        let mv = Move::capture(from, to, captured, captured & self.board.kings(), promotes);
        if !self.moves.contains(&mv) {
            self.moves.push(mv);
        }
    }
}

/// Generate the legal captures for the side to move (empty if none).
pub(super) fn gen_captures(board: &Board) -> MoveList {
    let us = board.side_to_move();
    let mut walk = CaptureWalk {
        board,
        empty: !board.occupied(),
        enemies: board.side(!us),
        promotion_row: Bitboard::promotion_row(us),
        best: 0,
        moves: MoveList::new(),
    };

    for from in board.side(us) {
        walk.empty = !board.occupied() | from.bitboard();
        if board.kings().contains(from) {
            walk.king(from, from, Bitboard::EMPTY);
        } else {
            walk.man(from, from, Bitboard::EMPTY);
        }
    }

    walk.moves
}
