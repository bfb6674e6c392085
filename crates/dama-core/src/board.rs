//! The draughts board: piece placement and side to move.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Complete draughts position state.
///
/// Structural equality compares placement and side to move, which is exactly
/// what in-place apply/undo must restore.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Occupancy for each side, indexed by [`Color::index()`].
    sides: [Bitboard; Color::COUNT],
    /// Squares holding a king of either color.
    kings: Bitboard,
    /// Which side moves next.
    side_to_move: Color,
}

impl Board {
    /// Return the standard starting position: Black on 1-20, White on 31-50, White to move.
    pub fn starting_position() -> Board {
        let black = Bitboard::new((1u64 << 20) - 1);
        let white = Bitboard::new(((1u64 << 20) - 1) << 30);
        Board {
            sides: [white, black],
            kings: Bitboard::EMPTY,
            side_to_move: Color::White,
        }
    }

    /// Return a board with no pieces and `side_to_move` to play.
    pub fn empty(side_to_move: Color) -> Board {
        Board {
            sides: [Bitboard::EMPTY; Color::COUNT],
            kings: Bitboard::EMPTY,
            side_to_move,
        }
    }

    /// Construct a board from raw components. Used by FEN parsing.
    pub(crate) fn from_raw(
        sides: [Bitboard; Color::COUNT],
        kings: Bitboard,
        side_to_move: Color,
    ) -> Board {
        Board {
            sides,
            kings,
            side_to_move,
        }
    }

    /// Return the piece on the given square, if any.
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        let color = self.color_on(sq)?;
        let kind = if self.kings.contains(sq) {
            PieceKind::King
        } else {
            PieceKind::Man
        };
        Some(Piece::new(kind, color))
    }

    /// Return the color of the piece on the given square, if any.
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|&color| self.sides[color.index()].contains(sq))
    }

    /// Return the bitboard for the given side.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    /// Return the squares holding kings of either color.
    #[inline]
    pub fn kings(&self) -> Bitboard {
        self.kings
    }

    /// Return the squares holding pieces of the given kind and color.
    #[inline]
    pub fn pieces(&self, piece: Piece) -> Bitboard {
        let side = self.side(piece.color());
        match piece.kind() {
            PieceKind::Man => side & !self.kings,
            PieceKind::King => side & self.kings,
        }
    }

    /// Return the occupied squares bitboard.
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.sides[Color::White.index()] | self.sides[Color::Black.index()]
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occupied().contains(sq)
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Every occupied square with its piece, in ascending square order.
    pub fn occupants(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter_map(|sq| self.piece_on(sq).map(|piece| (sq, piece)))
    }

    /// Place `piece` on `sq`, replacing whatever stood there.
    pub fn put_piece(&mut self, sq: Square, piece: Piece) {
        self.remove_piece(sq);
        let color = piece.color();
        self.sides[color.index()] = self.sides[color.index()].with(sq);
        if piece.kind() == PieceKind::King {
            self.kings = self.kings.with(sq);
        }
    }

    /// Clear `sq`, returning the piece that stood there.
    pub fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_on(sq)?;
        let color = piece.color();
        self.sides[color.index()] = self.sides[color.index()].without(sq);
        self.kings = self.kings.without(sq);
        Some(piece)
    }

    /// Set the side to move.
    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Toggle a piece of `color` on `sq` via XOR; `king` also toggles the king bit.
    #[inline]
    pub(crate) fn toggle_piece(&mut self, sq: Square, color: Color, king: bool) {
        let mask = sq.bitboard();
        self.sides[color.index()] ^= mask;
        if king {
            self.kings ^= mask;
        }
    }

    /// Toggle a set of `color`'s pieces at once; `kings` selects which of them are kings.
    #[inline]
    pub(crate) fn toggle_pieces(&mut self, squares: Bitboard, color: Color, kings: Bitboard) {
        self.sides[color.index()] ^= squares;
        self.kings ^= kings;
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        if (self.sides[Color::White.index()] & self.sides[Color::Black.index()]).is_nonempty() {
            return Err(BoardError::OverlappingSides);
        }

        if let Some(sq) = (self.kings & !self.occupied()).lsb() {
            return Err(BoardError::OrphanKing { square: sq.number() });
        }

        // A man standing on its promotion row would already have been crowned
        for color in Color::ALL {
            let men = self.pieces(Piece::new(PieceKind::Man, color));
            if let Some(sq) = (men & Bitboard::promotion_row(color)).lsb() {
                return Err(BoardError::ManOnPromotionRow {
                    color,
                    square: sq.number(),
                });
            }
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a 10x10 diagram.
///
/// Men are `w`/`b`, kings `W`/`B`, empty dark squares `.`.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in 0..10i8 {
            for col in 0..10i8 {
                let c = match Square::from_coords(row, col) {
                    Some(sq) => board.piece_on(sq).map_or('.', Piece::diagram_char),
                    None => ' ',
                };
                if col < 9 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", board.side_to_move())
    }
}
