//! Minimax search with alpha-beta pruning.
//!
//! Two mutually recursive procedures, one per role. Moves are searched in
//! the order the position enumerates them, with no reordering and no
//! transposition lookups, so results are fully determined by the position,
//! the evaluator and the depth.

use crate::eval::Evaluator;
use crate::position::{Position, Role};
use crate::search::control::StopSignal;
use crate::search::node::SearchNode;

/// Lowest possible bound, used as the root alpha.
pub const MIN_BOUND: i32 = i32::MIN;

/// Highest possible bound, used as the root beta.
pub const MAX_BOUND: i32 = i32::MAX;

/// The search was stopped before it finished.
///
/// Raised when a call observes a stop request; it unwinds the whole
/// iteration and carries no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("search cancelled by stop request")]
pub struct Cancelled;

/// Mutable state threaded through one iteration.
pub struct SearchContext<'a, E> {
    /// Engine calls made so far.
    pub nodes: u64,
    /// Static evaluator applied at the horizon.
    pub evaluator: &'a E,
    /// Checked once per call.
    pub stop: &'a StopSignal,
}

impl<'a, E> SearchContext<'a, E> {
    /// Fresh context with a zero node count.
    pub fn new(evaluator: &'a E, stop: &'a StopSignal) -> Self {
        Self {
            nodes: 0,
            evaluator,
            stop,
        }
    }
}

/// Search `node` to `depth` plies within the window `[alpha, beta]`.
///
/// Routes to [`max_value`] or [`min_value`] depending on who is to move.
/// On success the returned value is the node's alpha-beta value and the move
/// that last improved the bound is recorded on `node`.
pub fn alpha_beta<P, E>(
    node: &mut SearchNode<'_, P>,
    alpha: i32,
    beta: i32,
    depth: u8,
    ctx: &mut SearchContext<'_, E>,
) -> Result<i32, Cancelled>
where
    P: Position,
    E: Evaluator<P>,
{
    match node.position().role_to_move() {
        Role::Max => max_value(node, alpha, beta, depth, ctx),
        Role::Min => min_value(node, alpha, beta, depth, ctx),
    }
}

/// Value of `node` for the maximizing side.
pub fn max_value<P, E>(
    node: &mut SearchNode<'_, P>,
    mut alpha: i32,
    beta: i32,
    depth: u8,
    ctx: &mut SearchContext<'_, E>,
) -> Result<i32, Cancelled>
where
    P: Position,
    E: Evaluator<P>,
{
    ctx.nodes += 1;
    if ctx.stop.consume() {
        return Err(Cancelled);
    }

    // No moves: the evaluator decides, win or draw alike
    if depth == 0 || node.position().is_terminal() {
        return Ok(ctx.evaluator.evaluate(node.position()));
    }

    let moves = node.position().legal_moves();
    for mv in moves {
        let value = {
            let mut applied = node.play(mv);
            min_value(&mut applied.child(), alpha, beta, depth - 1, ctx)?
        };

        if value > alpha {
            alpha = value;
            node.set_best_move(mv);
        }
        if alpha >= beta {
            return Ok(beta);
        }
    }

    Ok(alpha)
}

/// Value of `node` for the minimizing side.
pub fn min_value<P, E>(
    node: &mut SearchNode<'_, P>,
    alpha: i32,
    mut beta: i32,
    depth: u8,
    ctx: &mut SearchContext<'_, E>,
) -> Result<i32, Cancelled>
where
    P: Position,
    E: Evaluator<P>,
{
    ctx.nodes += 1;
    if ctx.stop.consume() {
        return Err(Cancelled);
    }

    if depth == 0 || node.position().is_terminal() {
        return Ok(ctx.evaluator.evaluate(node.position()));
    }

    let moves = node.position().legal_moves();
    for mv in moves {
        let value = {
            let mut applied = node.play(mv);
            max_value(&mut applied.child(), alpha, beta, depth - 1, ctx)?
        };

        if value < beta {
            beta = value;
            node.set_best_move(mv);
        }
        if beta <= alpha {
            return Ok(alpha);
        }
    }

    Ok(beta)
}

#[cfg(test)]
mod tests {
    use dama_core::Board;

    use super::{Cancelled, MAX_BOUND, MIN_BOUND, SearchContext, alpha_beta};
    use crate::eval::{Evaluator, Material};
    use crate::position::Position;
    use crate::search::control::StopSignal;
    use crate::search::node::SearchNode;

    #[test]
    fn depth_zero_is_static_eval() {
        let mut board: Board = "W:W28,32:B12".parse().unwrap();
        let stop = StopSignal::new();
        let mut ctx = SearchContext::new(&Material, &stop);
        let mut node = SearchNode::new(&mut board);

        let value = alpha_beta(&mut node, MIN_BOUND, MAX_BOUND, 0, &mut ctx).unwrap();
        assert_eq!(value, 1);
        assert_eq!(node.best_move(), None);
        assert_eq!(ctx.nodes, 1);
    }

    #[test]
    fn takes_free_piece() {
        // 28x19 is forced and wins a man
        let mut board: Board = "W:W28,46:B23,1".parse().unwrap();
        let stop = StopSignal::new();
        let mut ctx = SearchContext::new(&Material, &stop);
        let mut node = SearchNode::new(&mut board);

        let value = alpha_beta(&mut node, MIN_BOUND, MAX_BOUND, 1, &mut ctx).unwrap();
        assert_eq!(value, 1);
        assert_eq!(node.best_move().map(|mv| mv.to_string()), Some("28x19".to_string()));
    }

    #[test]
    fn terminal_root_is_evaluated() {
        // Black to move with no pieces left
        let mut board: Board = "B:W28,32:B".parse().unwrap();
        let stop = StopSignal::new();
        let mut ctx = SearchContext::new(&Material, &stop);
        let mut node = SearchNode::new(&mut board);

        let value = alpha_beta(&mut node, MIN_BOUND, MAX_BOUND, 4, &mut ctx).unwrap();
        assert_eq!(value, Material.evaluate(node.position()));
        assert_eq!(node.best_move(), None);
    }

    #[test]
    fn pending_stop_cancels_first_call() {
        let mut board = Board::starting_position();
        let before = board;
        let stop = StopSignal::new();
        stop.begin();
        stop.request_stop();

        let mut ctx = SearchContext::new(&Material, &stop);
        let mut node = SearchNode::new(&mut board);
        assert_eq!(alpha_beta(&mut node, MIN_BOUND, MAX_BOUND, 6, &mut ctx), Err(Cancelled));
        assert_eq!(ctx.nodes, 1);
        assert_eq!(board, before);
    }

    /// Two moves everywhere, but the game ends after `end_after` plies.
    #[derive(Debug, PartialEq, Eq)]
    struct Line {
        played: Vec<u8>,
        end_after: usize,
    }

    impl Position for Line {
        type Move = u8;

        fn legal_moves(&self) -> Vec<u8> {
            vec![0, 1]
        }

        fn apply_move(&mut self, mv: u8) {
            self.played.push(mv);
        }

        fn undo_move(&mut self, _mv: u8) {
            self.played.pop();
        }

        fn role_to_move(&self) -> crate::position::Role {
            if self.played.len() % 2 == 0 {
                crate::position::Role::Max
            } else {
                crate::position::Role::Min
            }
        }

        fn is_terminal(&self) -> bool {
            self.played.len() >= self.end_after
        }
    }

    struct PliesPlayed;

    impl Evaluator<Line> for PliesPlayed {
        fn evaluate(&self, line: &Line) -> i32 {
            line.played.len() as i32
        }
    }

    #[test]
    fn terminal_positions_are_not_expanded() {
        let mut line = Line {
            played: Vec::new(),
            end_after: 2,
        };
        let stop = StopSignal::new();
        let mut ctx = SearchContext::new(&PliesPlayed, &stop);
        let mut node = SearchNode::new(&mut line);

        let value = alpha_beta(&mut node, MIN_BOUND, MAX_BOUND, 6, &mut ctx).unwrap();
        assert_eq!(value, 2);
        // Root, two replies, four terminal leaves at most
        assert!(ctx.nodes <= 7);
        assert!(line.played.is_empty());
    }

    #[test]
    fn min_side_picks_lowest() {
        // Black to move: 19x28 wins White's man
        let mut board: Board = "B:W23,50:B19,5".parse().unwrap();
        assert!(Position::legal_moves(&board).iter().all(|mv| mv.is_capture()));
        let stop = StopSignal::new();
        let mut ctx = SearchContext::new(&Material, &stop);
        let mut node = SearchNode::new(&mut board);

        let value = alpha_beta(&mut node, MIN_BOUND, MAX_BOUND, 1, &mut ctx).unwrap();
        assert_eq!(value, -1);
        assert_eq!(node.best_move().map(|mv| mv.to_string()), Some("19x28".to_string()));
    }
}
