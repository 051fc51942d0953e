//! Integer points in the plane.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D point with integer coordinates.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Creates a new point with the given x and y values.
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the point with its x and y components exchanged.
    #[inline]
    pub fn transposed(self) -> Self {
        Self::new(self.y, self.x)
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let point = Point::new(10, -20);
        assert_eq!(point.x, 10);
        assert_eq!(point.y, -20);
        assert_eq!(Point::from((10, -20)), point);
    }

    #[test]
    fn test_point_transposed() {
        assert_eq!(Point::new(1, 2).transposed(), Point::new(2, 1));
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(3, 4).to_string(), "[3, 4]");
    }
}
