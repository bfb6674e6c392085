//! Players: anything that picks a move for the side to move.

use dama_core::{Board, Move};
use dama_engine::{Evaluator, EvaluatorKind, Searcher, StopSignal};
use tracing::{debug, warn};

use crate::config::PlayerConfig;
use crate::fallback::{MoveFallback, RandomFallback};

/// A participant in a game.
pub trait Player {
    /// Name used in logs and game records.
    fn name(&self) -> &str;

    /// Choose a move for the side to move in `board`.
    ///
    /// Returns `None` only when the side to move has no legal move.
    fn select_move(&mut self, board: &Board) -> Option<Move>;

    /// Handle through which another thread can cut the current turn short.
    fn stop_handle(&self) -> StopSignal;

    /// Ask the current turn to finish as soon as possible.
    fn request_stop(&self) -> bool {
        self.stop_handle().request_stop()
    }

    /// The player's own assessment of the last position it moved in,
    /// positive favouring White.
    fn last_value(&self) -> i32;
}

/// A player backed by iterative-deepening alpha-beta search.
pub struct AlphaBetaPlayer<E, F = RandomFallback> {
    name: String,
    searcher: Searcher<E>,
    max_depth: u8,
    fallback: F,
}

impl<E, F> AlphaBetaPlayer<E, F> {
    /// Create a player searching up to `max_depth` with `evaluator`.
    pub fn new(name: impl Into<String>, evaluator: E, max_depth: u8, fallback: F) -> Self {
        Self {
            name: name.into(),
            searcher: Searcher::new(evaluator),
            max_depth,
            fallback,
        }
    }

    /// Deepest iteration this player starts.
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
}

impl AlphaBetaPlayer<EvaluatorKind, RandomFallback> {
    /// Build a player from `config`.
    pub fn from_config(config: &PlayerConfig) -> Self {
        Self::new(
            format!("alphabeta-{}", config.evaluator),
            config.evaluator,
            config.max_depth,
            RandomFallback::new(config.seed),
        )
    }
}

impl<E, F> Player for AlphaBetaPlayer<E, F>
where
    E: Evaluator<Board>,
    F: MoveFallback,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn select_move(&mut self, board: &Board) -> Option<Move> {
        // The search walks its own copy; the caller's board is never touched
        let mut scratch = *board;
        let name = self.name.as_str();
        let result = self.searcher.search(&mut scratch, self.max_depth, |depth, value, nodes, mv| {
            debug!(player = name, depth, value, nodes, best_move = ?mv, "iteration");
        });

        if let Some(mv) = result.best_move {
            return Some(mv);
        }

        let fallback = self.fallback.pick(board);
        if fallback.is_some() {
            warn!(
                player = %self.name,
                depth = result.depth,
                "search produced no move, using fallback"
            );
        }
        fallback
    }

    fn stop_handle(&self) -> StopSignal {
        self.searcher.stop_signal()
    }

    fn last_value(&self) -> i32 {
        self.searcher.last_value()
    }
}
