//! Perft (performance test) for move generation correctness verification.
//!
//! Walks the tree with in-place apply/undo, so it also exercises the
//! restoration guarantee on every edge.

use crate::board::Board;
use crate::movegen::generate_legal_moves;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without descending.
pub fn perft(board: &mut Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        board.apply_move(mv);
        nodes += perft(board, depth - 1);
        board.undo_move(mv);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs in generation order.
pub fn divide(board: &mut Board, depth: usize) -> Vec<(String, u64)> {
    generate_legal_moves(board)
        .into_iter()
        .map(|mv| {
            board.apply_move(mv);
            let count = if depth <= 1 { 1 } else { perft(board, depth - 1) };
            board.undo_move(mv);
            (mv.to_string(), count)
        })
        .collect()
}
