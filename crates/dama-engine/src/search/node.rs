//! Search nodes and scoped move application.

use std::ops::Deref;

use crate::position::Position;

/// One position under search plus the best move found at it so far.
///
/// The node borrows the position; it never owns or copies it. Children are
/// reached through [`SearchNode::play`], which hands back a guard that undoes
/// the move when it goes out of scope.
pub struct SearchNode<'p, P: Position> {
    position: &'p mut P,
    best_move: Option<P::Move>,
}

impl<'p, P: Position> SearchNode<'p, P> {
    /// Wrap `position` with no best move recorded.
    pub fn new(position: &'p mut P) -> Self {
        Self {
            position,
            best_move: None,
        }
    }

    /// The position this node stands on.
    #[inline]
    pub fn position(&self) -> &P {
        &*self.position
    }

    /// Best move recorded at this node, if any.
    #[inline]
    pub fn best_move(&self) -> Option<P::Move> {
        self.best_move
    }

    /// Record `mv` as the best move so far.
    #[inline]
    pub fn set_best_move(&mut self, mv: P::Move) {
        self.best_move = Some(mv);
    }

    /// Apply `mv` and return a guard over the resulting position.
    ///
    /// The move is undone when the guard drops, including when the child
    /// search returns early with an error.
    pub fn play(&mut self, mv: P::Move) -> AppliedMove<'_, P> {
        self.position.apply_move(mv);
        AppliedMove {
            position: &mut *self.position,
            mv,
        }
    }
}

/// A move applied to a position, undone on drop.
pub struct AppliedMove<'a, P: Position> {
    position: &'a mut P,
    mv: P::Move,
}

impl<P: Position> AppliedMove<'_, P> {
    /// A fresh node for the position after the move.
    pub fn child(&mut self) -> SearchNode<'_, P> {
        SearchNode::new(&mut *self.position)
    }
}

impl<P: Position> Deref for AppliedMove<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        &*self.position
    }
}

impl<P: Position> Drop for AppliedMove<'_, P> {
    fn drop(&mut self) {
        self.position.undo_move(self.mv);
    }
}
