//! Running turns under a time budget and whole games between two players.

use std::fmt;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use dama_core::{Board, Color, Move};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::HostError;
use crate::player::Player;

/// How often an expired watchdog retries a stop that found no search running.
const STOP_RETRY: Duration = Duration::from_millis(1);

/// Let `player` choose a move in `board`, stopping its search after `budget`.
///
/// A watchdog thread waits on a channel for up to `budget`. If the player
/// answers first the watchdog exits quietly; otherwise it raises the
/// player's stop signal and the search returns its last completed result.
/// A stop raised before the player's search has begun is dropped by the
/// signal, so the watchdog keeps raising it until one lands or the turn ends.
pub fn play_turn(player: &mut dyn Player, board: &Board, budget: Duration) -> Option<Move> {
    let stop = player.stop_handle();
    let (done_tx, done_rx) = mpsc::channel::<()>();

    let watchdog = thread::spawn(move || {
        let mut wait = budget;
        loop {
            match done_rx.recv_timeout(wait) {
                Err(RecvTimeoutError::Timeout) => {
                    if stop.request_stop() {
                        return true;
                    }
                    wait = STOP_RETRY;
                }
                Ok(()) | Err(RecvTimeoutError::Disconnected) => return false,
            }
        }
    });

    let start = Instant::now();
    let mv = player.select_move(board);
    let elapsed = start.elapsed();

    // The watchdog may already have exited after firing
    let _ = done_tx.send(());
    let stopped = watchdog.join().unwrap_or(false);

    debug!(
        player = player.name(),
        best_move = ?mv,
        value = player.last_value(),
        elapsed_ms = elapsed.as_millis() as u64,
        stopped,
        "turn finished"
    );
    mv
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The other side had no legal move.
    Win(Color),
    /// The ply limit was reached first.
    PlyLimit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win(color) => write!(f, "{color} wins"),
            Outcome::PlyLimit => f.write_str("ply limit reached"),
        }
    }
}

/// Everything that happened in one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Position the game started from.
    pub start: Board,
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// Position after the last move.
    pub final_board: Board,
    /// Result.
    pub outcome: Outcome,
}

impl GameRecord {
    /// Moves in standard notation, space separated.
    pub fn notation(&self) -> String {
        self.moves
            .iter()
            .map(Move::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Play a game from `start`, alternating turns until a side cannot move or
/// the ply limit is hit.
///
/// Every move is checked against the legal moves before it is played.
pub fn play_game(
    white: &mut dyn Player,
    black: &mut dyn Player,
    start: Board,
    config: &GameConfig,
) -> Result<GameRecord, HostError> {
    let mut board = start;
    let mut moves = Vec::new();

    info!(
        white = white.name(),
        black = black.name(),
        start = %start,
        "game started"
    );

    let outcome = loop {
        if moves.len() >= config.max_plies {
            break Outcome::PlyLimit;
        }

        let side = board.side_to_move();
        let player: &mut dyn Player = match side {
            Color::White => &mut *white,
            Color::Black => &mut *black,
        };

        let Some(mv) = play_turn(player, &board, config.think_time) else {
            break Outcome::Win(!side);
        };

        if !board.legal_moves().contains(&mv) {
            return Err(HostError::IllegalMove {
                player: player.name().to_string(),
                mv,
                ply: moves.len(),
            });
        }

        debug!(ply = moves.len(), %side, %mv, value = player.last_value(), "move played");
        board.apply_move(mv);
        moves.push(mv);
    };

    info!(%outcome, plies = moves.len(), "game over");

    Ok(GameRecord {
        start,
        moves,
        final_board: board,
        outcome,
    })
}
