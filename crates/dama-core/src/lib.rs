//! Core draughts types: board representation, move generation, and game rules
//! for international (10x10) draughts.

mod bitboard;
mod board;
mod color;
mod direction;
mod draughts_move;
mod error;
mod fen;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod square;

pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use direction::Direction;
pub use draughts_move::Move;
pub use error::{BoardError, FenError};
pub use fen::STARTING_FEN;
pub use movegen::{MoveList, generate_legal_moves};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
