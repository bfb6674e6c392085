//! Player and game configuration.

use std::time::Duration;

use dama_core::Board;
use dama_engine::EvaluatorKind;

use crate::error::HostError;

/// How a search-backed player is set up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Deepest iteration the searcher may start.
    pub max_depth: u8,
    /// Static evaluator used at the horizon.
    pub evaluator: EvaluatorKind,
    /// Seed for the fallback move picker; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_depth: 12,
            evaluator: EvaluatorKind::Positional,
            seed: None,
        }
    }
}

impl PlayerConfig {
    /// Build a config from user-facing values, rejecting a zero depth or an
    /// unknown evaluator name.
    pub fn new(max_depth: u8, evaluator: &str, seed: Option<u64>) -> Result<Self, HostError> {
        if max_depth == 0 {
            return Err(HostError::InvalidDepth { value: max_depth });
        }
        Ok(Self {
            max_depth,
            evaluator: evaluator.parse()?,
            seed,
        })
    }
}

/// How a game between two players is run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Thinking budget per turn; the search is stopped when it runs out.
    pub think_time: Duration,
    /// The game is abandoned after this many plies.
    pub max_plies: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            think_time: Duration::from_millis(1000),
            max_plies: 200,
        }
    }
}

/// Parse a starting position, defaulting to the standard one.
pub fn parse_start(fen: Option<&str>) -> Result<Board, HostError> {
    match fen {
        None => Ok(Board::starting_position()),
        Some(fen) => fen.parse().map_err(|source| HostError::InvalidFen {
            fen: fen.to_string(),
            source,
        }),
    }
}
