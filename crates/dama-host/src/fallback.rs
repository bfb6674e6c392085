//! Move selection when the search comes back empty-handed.

use dama_core::{Board, Move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// Picks some legal move without searching.
pub trait MoveFallback {
    /// A legal move in `board`, or `None` if there is none.
    fn pick(&mut self, board: &Board) -> Option<Move>;
}

/// Uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomFallback {
    rng: StdRng,
}

impl RandomFallback {
    /// Reproducible picker seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picker seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded when `seed` is given, from the OS otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl MoveFallback for RandomFallback {
    fn pick(&mut self, board: &Board) -> Option<Move> {
        board.legal_moves().as_slice().choose(&mut self.rng).copied()
    }
}

/// Always the first legal move in generation order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMoveFallback;

impl MoveFallback for FirstMoveFallback {
    fn pick(&mut self, board: &Board) -> Option<Move> {
        board.legal_moves().iter().next().copied()
    }
}
