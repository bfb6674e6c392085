//! Hosting for dama players: configuration, move fallbacks, timed turns
//! and full games.

pub mod arena;
pub mod config;
pub mod error;
pub mod fallback;
pub mod player;

pub use arena::{GameRecord, Outcome, play_game, play_turn};
pub use config::{GameConfig, PlayerConfig, parse_start};
pub use error::HostError;
pub use fallback::{FirstMoveFallback, MoveFallback, RandomFallback};
pub use player::{AlphaBetaPlayer, Player};
