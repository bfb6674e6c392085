//! Errors raised while setting up or running games.

use dama_core::{FenError, Move};
use dama_engine::ParseEvaluatorError;

/// Errors that can occur while configuring players or playing a game.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Failed to parse a starting position.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        /// Why it was rejected.
        #[source]
        source: FenError,
    },

    /// The evaluator name is not one of the built-in kinds.
    #[error(transparent)]
    UnknownEvaluator(#[from] ParseEvaluatorError),

    /// A search depth of zero can never produce a move.
    #[error("invalid depth: {value} (must be at least 1)")]
    InvalidDepth {
        /// The rejected depth.
        value: u8,
    },

    /// A player returned a move that is not legal in the current position.
    #[error("{player} played illegal move {mv} at ply {ply}")]
    IllegalMove {
        /// Name of the offending player.
        player: String,
        /// The move it returned.
        mv: Move,
        /// Zero-based ply number.
        ply: usize,
    },
}
