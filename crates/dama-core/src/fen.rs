//! FEN parsing and serialization for [`Board`].
//!
//! Draughts FEN lists occupied squares rather than describing rows:
//! `W:W31,32,K45:B1-3,19` means White to move, White men on 31 and 32, a
//! White king on 45, Black men on 1, 2, 3 and 19. Ranges are accepted when
//! parsing; output always lists single squares in ascending order.

use std::fmt;
use std::str::FromStr;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "W:W31,32,33,34,35,36,37,38,39,40,41,42,43,44,45,46,47,48,49,50\
:B1,2,3,4,5,6,7,8,9,10,11,12,13,14,15,16,17,18,19,20";

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let fields: Vec<&str> = fen.trim().split(':').collect();
        if fields.len() != 3 {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let side_to_move = match fields[0].trim() {
            s if s.len() == 1 => s.chars().next().and_then(Color::from_fen_char),
            _ => None,
        }
        .ok_or_else(|| FenError::InvalidColor {
            found: fields[0].to_string(),
        })?;

        let mut sides = [Bitboard::EMPTY; Color::COUNT];
        let mut kings = Bitboard::EMPTY;
        let mut seen_side = [false; Color::COUNT];

        for field in &fields[1..] {
            let field = field.trim();
            let color = field
                .chars()
                .next()
                .and_then(Color::from_fen_char)
                .ok_or_else(|| FenError::MissingSidePrefix {
                    found: field.to_string(),
                })?;
            if seen_side[color.index()] {
                return Err(FenError::DuplicateSide { color });
            }
            seen_side[color.index()] = true;

            let list = &field[1..];
            for token in list.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                let (kind, squares) = parse_token(token)?;
                for sq in squares {
                    if (sides[0] | sides[1]).contains(sq) {
                        return Err(FenError::DuplicateSquare {
                            square: sq.number(),
                        });
                    }
                    sides[color.index()] = sides[color.index()].with(sq);
                    if kind == PieceKind::King {
                        kings = kings.with(sq);
                    }
                }
            }
        }

        let board = Board::from_raw(sides, kings, side_to_move);
        board.validate()?;
        Ok(board)
    }
}

/// Parse one list token: `17`, `K17` or a range such as `1-20`.
fn parse_token(token: &str) -> Result<(PieceKind, Vec<Square>), FenError> {
    let invalid = || FenError::InvalidSquare {
        token: token.to_string(),
    };

    let (kind, rest) = match token.strip_prefix(['K', 'k']) {
        Some(rest) => (PieceKind::King, rest),
        None => (PieceKind::Man, token),
    };

    let parse_square = |s: &str| {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Square::from_number)
            .ok_or_else(invalid)
    };

    let squares = match rest.split_once('-') {
        Some((lo, hi)) => {
            let (lo, hi) = (parse_square(lo)?, parse_square(hi)?);
            if lo > hi {
                return Err(invalid());
            }
            (lo.number()..=hi.number())
                .filter_map(Square::from_number)
                .collect()
        }
        None => vec![parse_square(rest)?],
    };

    Ok((kind, squares))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.side_to_move().fen_char())?;

        for color in Color::ALL {
            write!(f, ":{}", color.fen_char())?;
            let mut first = true;
            for sq in self.side(color) {
                if !first {
                    write!(f, ",")?;
                }
                first = false;
                if self.piece_on(sq) == Some(Piece::new(PieceKind::King, color)) {
                    write!(f, "K")?;
                }
                write!(f, "{sq}")?;
            }
        }

        Ok(())
    }
}
