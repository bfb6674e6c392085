//! Playable squares of the 10x10 board.
//!
//! Only the 50 dark squares exist. Standard notation numbers them 1-50 row by
//! row, starting at Black's back row; internally a square is its zero-based
//! index 0..50. Row 0 is the top row, and a coordinate pair `(row, col)` is a
//! dark square exactly when `row + col` is odd.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::direction::Direction;

/// A playable square, stored as its zero-based index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

/// Sentinel for "off the board" in the neighbour table.
const NONE: u8 = u8::MAX;

/// One-step neighbour of every square in every direction.
const NEIGHBORS: [[u8; Direction::COUNT]; Square::COUNT] = {
    let mut table = [[NONE; Direction::COUNT]; Square::COUNT];
    let mut index = 0;
    while index < Square::COUNT {
        let sq = Square(index as u8);
        let mut d = 0;
        while d < Direction::COUNT {
            let (dr, dc) = Direction::ALL[d].delta();
            if let Some(next) = Square::from_coords(sq.row() as i8 + dr, sq.col() as i8 + dc) {
                table[index][d] = next.0;
            }
            d += 1;
        }
        index += 1;
    }
    table
};

impl Square {
    /// Total number of playable squares.
    pub const COUNT: usize = 50;

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if (index as usize) < Self::COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index without bounds checking.
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Square {
        debug_assert!((index as usize) < Self::COUNT);
        Square(index)
    }

    /// Create a square from its standard 1-based number.
    #[inline]
    pub const fn from_number(number: u8) -> Option<Square> {
        if number == 0 {
            None
        } else {
            Self::from_index(number - 1)
        }
    }

    /// Create a square from board coordinates; `None` for light or off-board squares.
    pub const fn from_coords(row: i8, col: i8) -> Option<Square> {
        if row < 0 || row >= 10 || col < 0 || col >= 10 || (row + col) % 2 == 0 {
            return None;
        }
        Some(Square((row * 5 + col / 2) as u8))
    }

    /// Return the zero-based index (0..49).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the standard 1-based square number.
    #[inline]
    pub const fn number(self) -> u8 {
        self.0 + 1
    }

    /// Board row, 0 at the top (Black's back row).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 5
    }

    /// Board column, 0 at the left edge.
    #[inline]
    pub const fn col(self) -> u8 {
        let offset = (self.0 % 5) * 2;
        if self.row() % 2 == 0 { offset + 1 } else { offset }
    }

    /// Return a bitboard with only this square set.
    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard::new(1u64 << self.0)
    }

    /// The adjacent square in `dir`, if it is on the board.
    #[inline]
    pub const fn neighbor(self, dir: Direction) -> Option<Square> {
        match NEIGHBORS[self.0 as usize][dir.index()] {
            NONE => None,
            index => Some(Square(index)),
        }
    }

    /// Squares along `dir`, nearest first, up to the board edge.
    pub fn ray(self, dir: Direction) -> impl Iterator<Item = Square> {
        std::iter::successors(self.neighbor(dir), move |sq| sq.neighbor(dir))
    }

    /// Iterate over all 50 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..Self::COUNT as u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::direction::Direction;

    fn sq(number: u8) -> Square {
        Square::from_number(number).unwrap()
    }

    #[test]
    fn numbering_bounds() {
        assert_eq!(Square::from_number(0), None);
        assert_eq!(Square::from_number(51), None);
        assert_eq!(sq(1).index(), 0);
        assert_eq!(sq(50).index(), 49);
        assert_eq!(Square::all().count(), Square::COUNT);
    }

    #[test]
    fn coordinates() {
        // Square 1 sits on the second column of the top row, 46 in the bottom-left corner.
        assert_eq!((sq(1).row(), sq(1).col()), (0, 1));
        assert_eq!((sq(6).row(), sq(6).col()), (1, 0));
        assert_eq!((sq(46).row(), sq(46).col()), (9, 0));
        assert_eq!((sq(50).row(), sq(50).col()), (9, 8));
        for s in Square::all() {
            assert_eq!(Square::from_coords(s.row() as i8, s.col() as i8), Some(s));
        }
    }

    #[test]
    fn light_squares_do_not_exist() {
        assert_eq!(Square::from_coords(0, 0), None);
        assert_eq!(Square::from_coords(9, 9), None);
        assert_eq!(Square::from_coords(-1, 1), None);
    }

    #[test]
    fn neighbors_of_center_square() {
        // 28 is surrounded by 22, 23 above and 32, 33 below.
        assert_eq!(sq(28).neighbor(Direction::NorthWest), Some(sq(22)));
        assert_eq!(sq(28).neighbor(Direction::NorthEast), Some(sq(23)));
        assert_eq!(sq(28).neighbor(Direction::SouthWest), Some(sq(32)));
        assert_eq!(sq(28).neighbor(Direction::SouthEast), Some(sq(33)));
    }

    #[test]
    fn neighbors_at_edges() {
        assert_eq!(sq(6).neighbor(Direction::NorthWest), None);
        assert_eq!(sq(5).neighbor(Direction::NorthEast), None);
        assert_eq!(sq(46).neighbor(Direction::SouthWest), None);
        assert_eq!(sq(1).neighbor(Direction::NorthWest), None);
    }

    #[test]
    fn long_diagonal_ray() {
        let ray: Vec<u8> = sq(46).ray(Direction::NorthEast).map(|s| s.number()).collect();
        assert_eq!(ray, vec![41, 37, 32, 28, 23, 19, 14, 10, 5]);
    }

    #[test]
    fn display() {
        assert_eq!(sq(32).to_string(), "32");
        assert_eq!(format!("{:?}", sq(7)), "Square(7)");
    }
}
