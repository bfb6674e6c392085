//! The four diagonal directions.

use crate::color::Color;

/// A diagonal direction. "North" points at square 1's row, White's forward direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    NorthWest = 0,
    NorthEast = 1,
    SouthWest = 2,
    SouthEast = 3,
}

impl Direction {
    /// Total number of directions.
    pub const COUNT: usize = 4;

    /// All directions in index order.
    pub const ALL: [Direction; 4] = [
        Direction::NorthWest,
        Direction::NorthEast,
        Direction::SouthWest,
        Direction::SouthEast,
    ];

    /// Return the index (0..3).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row and column step of one move in this direction.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthWest => (1, -1),
            Direction::SouthEast => (1, 1),
        }
    }

    /// The opposite direction.
    #[inline]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::NorthWest => Direction::SouthEast,
            Direction::NorthEast => Direction::SouthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::SouthEast => Direction::NorthWest,
        }
    }

    /// The two directions a man of `color` may step in.
    #[inline]
    pub const fn forward(color: Color) -> [Direction; 2] {
        match color {
            Color::White => [Direction::NorthWest, Direction::NorthEast],
            Color::Black => [Direction::SouthWest, Direction::SouthEast],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn reverse_negates_delta() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.delta();
            assert_eq!(dir.reverse().delta(), (-dr, -dc));
            assert_eq!(dir.reverse().reverse(), dir);
        }
    }
}
