//! Game-tree search for dama: iterative-deepening alpha-beta over any
//! [`Position`], with pluggable static evaluation and cooperative stopping.

pub mod eval;
pub mod position;
pub mod search;

pub use eval::{Evaluator, EvaluatorKind, Material, ParseEvaluatorError, Positional};
pub use position::{Position, Role};
pub use search::alphabeta::Cancelled;
pub use search::control::{StopSignal, StopState};
pub use search::node::{AppliedMove, SearchNode};
pub use search::{SearchResult, Searcher};
