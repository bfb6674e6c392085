//! Error types for FEN parsing and board validation.

use crate::color::Color;

/// Errors that occur when parsing a draughts FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The FEN string does not have exactly 3 colon-separated fields.
    #[error("expected 3 FEN fields, found {found}")]
    WrongFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The side-to-move field is not "W" or "B".
    #[error("invalid side to move: \"{found}\"")]
    InvalidColor {
        /// The invalid field.
        found: String,
    },
    /// A piece list does not start with "W" or "B".
    #[error("piece list must start with W or B: \"{found}\"")]
    MissingSidePrefix {
        /// The offending field.
        found: String,
    },
    /// Both piece lists name the same side.
    #[error("piece list for {color} given twice")]
    DuplicateSide {
        /// The repeated side.
        color: Color,
    },
    /// A square token is not a number (or range) within 1-50.
    #[error("invalid square: \"{token}\"")]
    InvalidSquare {
        /// The invalid token.
        token: String,
    },
    /// A square appears more than once.
    #[error("square {square} listed more than once")]
    DuplicateSquare {
        /// The repeated square number.
        square: u8,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The two side bitboards overlap.
    #[error("white and black side bitboards overlap")]
    OverlappingSides,
    /// A king bit is set on an empty square.
    #[error("king marker on empty square {square}")]
    OrphanKing {
        /// The empty square number.
        square: u8,
    },
    /// A man stands on the row where it should have been promoted.
    #[error("{color} man on promotion square {square}")]
    ManOnPromotionRow {
        /// Owner of the man.
        color: Color,
        /// The square number.
        square: u8,
    },
}
