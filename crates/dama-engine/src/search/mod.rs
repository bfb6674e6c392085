//! Iterative-deepening alpha-beta search.

pub mod alphabeta;
pub mod control;
pub mod node;

use std::fmt;

use tracing::{debug, info};

use crate::eval::Evaluator;
use crate::position::Position;

use alphabeta::{Cancelled, MAX_BOUND, MIN_BOUND, SearchContext, alpha_beta};
use control::StopSignal;
use node::SearchNode;

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// Best move of the deepest completed iteration, `None` if no iteration
    /// completed or the root has no legal move.
    pub best_move: Option<M>,
    /// Value of the deepest completed iteration, 0 if none completed.
    pub value: i32,
    /// Depth of the deepest completed iteration, 0 if none completed.
    pub depth: u8,
    /// Engine calls made, including those of a cancelled iteration.
    pub nodes: u64,
}

/// Iterative-deepening searcher over a fixed evaluator.
///
/// One searcher runs one search at a time. Another thread may stop it
/// through a handle from [`stop_signal`](Self::stop_signal); the search then
/// falls back to its last completed iteration.
pub struct Searcher<E> {
    evaluator: E,
    stop: StopSignal,
    last_value: i32,
}

impl<E> Searcher<E> {
    /// Create a searcher that scores leaves with `evaluator`.
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            stop: StopSignal::new(),
            last_value: 0,
        }
    }

    /// The evaluator in use.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// A handle to this searcher's stop signal, usable from any thread.
    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    /// Ask the running search to stop. Dropped if none is running.
    pub fn request_stop(&self) -> bool {
        self.stop.request_stop()
    }

    /// Value reported by the most recent search.
    pub fn last_value(&self) -> i32 {
        self.last_value
    }

    /// Run iterative deepening from depth 1 up to `max_depth`.
    ///
    /// Calls `on_iter(depth, value, nodes, best_move)` after each completed
    /// iteration. A stop request abandons the iteration in progress and the
    /// result reflects the last completed one. `position` is left exactly as
    /// it was passed in.
    pub fn search<P, F>(
        &mut self,
        position: &mut P,
        max_depth: u8,
        mut on_iter: F,
    ) -> SearchResult<P::Move>
    where
        P: Position,
        E: Evaluator<P>,
        F: FnMut(u8, i32, u64, Option<P::Move>),
    {
        self.stop.begin();
        let mut ctx = SearchContext::new(&self.evaluator, &self.stop);

        let mut best_move = None;
        let mut best_value = 0;
        let mut completed_depth = 0;

        for depth in 1..=max_depth {
            match iterate(position, depth, &mut ctx) {
                Ok((value, mv)) => {
                    best_move = mv;
                    best_value = value;
                    completed_depth = depth;
                    debug!(depth, value, nodes = ctx.nodes, best_move = ?mv, "iteration complete");
                    on_iter(depth, value, ctx.nodes, mv);
                }
                Err(Cancelled) => {
                    debug!(depth, nodes = ctx.nodes, "iteration cancelled");
                    break;
                }
            }
        }

        let nodes = ctx.nodes;
        self.stop.finish();
        self.last_value = best_value;

        info!(
            depth = completed_depth,
            value = best_value,
            nodes,
            best_move = ?best_move,
            "search finished"
        );

        SearchResult {
            best_move,
            value: best_value,
            depth: completed_depth,
            nodes,
        }
    }

    /// Run a single iteration at exactly `depth`.
    ///
    /// Returns `None` if it was stopped before completing.
    pub fn search_at_depth<P>(
        &mut self,
        position: &mut P,
        depth: u8,
    ) -> Option<SearchResult<P::Move>>
    where
        P: Position,
        E: Evaluator<P>,
    {
        self.stop.begin();
        let mut ctx = SearchContext::new(&self.evaluator, &self.stop);
        let outcome = iterate(position, depth, &mut ctx);
        let nodes = ctx.nodes;
        self.stop.finish();

        let (value, best_move) = outcome.ok()?;
        self.last_value = value;
        Some(SearchResult {
            best_move,
            value,
            depth,
            nodes,
        })
    }
}

/// One full-width iteration from the root.
fn iterate<P, E>(
    position: &mut P,
    depth: u8,
    ctx: &mut SearchContext<'_, E>,
) -> Result<(i32, Option<P::Move>), Cancelled>
where
    P: Position,
    E: Evaluator<P>,
{
    let mut root = SearchNode::new(position);
    let value = alpha_beta(&mut root, MIN_BOUND, MAX_BOUND, depth, ctx)?;
    Ok((value, root.best_move()))
}

impl<E: fmt::Debug> fmt::Debug for Searcher<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Searcher")
            .field("evaluator", &self.evaluator)
            .field("stop", &self.stop.state())
            .field("last_value", &self.last_value)
            .finish()
    }
}

impl<E: Default> Default for Searcher<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}
