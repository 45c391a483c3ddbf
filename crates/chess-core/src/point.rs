//! Board coordinate representation.

use crate::Color;
use std::fmt;

/// A board coordinate as a (file, rank) pair.
///
/// Both axes run 0-7 on the board (file a = 0, rank 1 = 0), but a `Point`
/// may hold any coordinates so that offset arithmetic is closed: stepping
/// off the edge yields an out-of-bounds point, and the board's bounds check
/// is the single validity test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub file: i8,
    pub rank: i8,
}

impl Point {
    /// Creates a point from file and rank coordinates.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Point { file, rank }
    }

    /// Returns this point shifted by the given offsets.
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Point {
            file: self.file + dx,
            rank: self.rank + dy,
        }
    }

    /// Returns this point shifted by a side-relative offset.
    ///
    /// Both axes are mirrored for Black, so a `(0, 1)` offset is always
    /// "one square forward" from the owning side's perspective.
    #[inline]
    pub const fn relative(self, color: Color, dx: i8, dy: i8) -> Self {
        let dir = color.pawn_direction();
        self.offset(dx * dir, dy * dir)
    }

    /// Returns true if both coordinates are within 0-7.
    #[inline]
    pub const fn in_bounds(self) -> bool {
        self.file >= 0 && self.file <= 7 && self.rank >= 0 && self.rank <= 7
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            write!(
                f,
                "{}{}",
                (b'a' + self.file as u8) as char,
                (b'1' + self.rank as u8) as char
            )
        } else {
            write!(f, "({},{})", self.file, self.rank)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset() {
        let e4 = Point::new(4, 3);
        assert_eq!(e4.offset(1, 1), Point::new(5, 4));
        assert_eq!(e4.offset(-4, -3), Point::new(0, 0));
    }

    #[test]
    fn relative_mirrors_for_black() {
        let p = Point::new(4, 4);
        assert_eq!(p.relative(Color::White, 1, 1), Point::new(5, 5));
        assert_eq!(p.relative(Color::Black, 1, 1), Point::new(3, 3));
        assert_eq!(p.relative(Color::Black, 0, 2), Point::new(4, 2));
    }

    #[test]
    fn bounds() {
        assert!(Point::new(0, 0).in_bounds());
        assert!(Point::new(7, 7).in_bounds());
        assert!(!Point::new(-1, 0).in_bounds());
        assert!(!Point::new(0, 8).in_bounds());
        assert!(!Point::new(8, 3).in_bounds());
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(0, 0).to_string(), "a1");
        assert_eq!(Point::new(4, 3).to_string(), "e4");
        assert_eq!(Point::new(7, 7).to_string(), "h8");
        assert_eq!(Point::new(8, 0).to_string(), "(8,0)");
    }
}
