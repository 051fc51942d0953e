//! Axis-aligned rectangles given by two opposite corners.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::error::OverlapError;

/// An axis-aligned rectangle spanned by two opposite corners.
///
/// The corners are kept in the order they were given, but the rectangle
/// itself is orientation-independent: `{a, b}`, `{b, a}`, and any
/// combination where the corners' x or y components are swapped between
/// them denote the same closed box. Equality, ordering and hashing all work
/// on the normalized `(xmin, ymin, xmax, ymax)` form, so geometrically
/// identical rectangles collapse to one key in maps and sets.
///
/// Degenerate rectangles (zero width, zero height, or a single point) are
/// valid.
#[derive(Clone, Copy)]
pub struct Rect {
    a: Point,
    b: Point,
}

impl Rect {
    /// Creates a rectangle from two opposite corners, in any order.
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Creates a rectangle from explicit corner coordinates.
    #[inline]
    pub fn from_corners(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Creates a single-point rectangle.
    #[inline]
    pub fn point(p: Point) -> Self {
        Self::new(p, p)
    }

    /// Creates a rectangle from a flat `[x0, y0, x1, y1]` slice.
    ///
    /// # Errors
    /// Returns [`OverlapError::MalformedRect`] unless the slice holds
    /// exactly four coordinates.
    pub fn from_coords(coords: &[i64]) -> Result<Self, OverlapError> {
        match *coords {
            [x0, y0, x1, y1] => Ok(Self::from_corners(x0, y0, x1, y1)),
            _ => Err(OverlapError::MalformedRect { len: coords.len() }),
        }
    }

    /// Returns the first corner as given.
    #[inline]
    pub fn a(&self) -> Point {
        self.a
    }

    /// Returns the second corner as given.
    #[inline]
    pub fn b(&self) -> Point {
        self.b
    }

    #[inline]
    pub fn xmin(&self) -> i64 {
        self.a.x.min(self.b.x)
    }

    #[inline]
    pub fn ymin(&self) -> i64 {
        self.a.y.min(self.b.y)
    }

    #[inline]
    pub fn xmax(&self) -> i64 {
        self.a.x.max(self.b.x)
    }

    #[inline]
    pub fn ymax(&self) -> i64 {
        self.a.y.max(self.b.y)
    }

    /// Returns the lower-left corner of the normalized box.
    #[inline]
    pub fn min(&self) -> Point {
        Point::new(self.xmin(), self.ymin())
    }

    /// Returns the upper-right corner of the normalized box.
    #[inline]
    pub fn max(&self) -> Point {
        Point::new(self.xmax(), self.ymax())
    }

    /// Returns the same rectangle with corners ordered as `(min, max)`.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::new(self.min(), self.max())
    }

    /// Returns the same rectangle with its two corners exchanged.
    #[inline]
    pub fn swapped(&self) -> Self {
        Self::new(self.b, self.a)
    }

    /// Returns the normalized bounds as `(xmin, ymin, xmax, ymax)`.
    #[inline]
    pub fn bounds(&self) -> (i64, i64, i64, i64) {
        (self.xmin(), self.ymin(), self.xmax(), self.ymax())
    }

    /// Returns the extent along the x axis.
    #[inline]
    pub fn width(&self) -> u64 {
        self.a.x.abs_diff(self.b.x)
    }

    /// Returns the extent along the y axis.
    #[inline]
    pub fn height(&self) -> u64 {
        self.a.y.abs_diff(self.b.y)
    }

    /// Returns true if the rectangle covers a single point.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.a == self.b
    }

    /// Returns true if `p` lies inside the closed box.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        within(p.x, self.xmin(), self.xmax()) && within(p.y, self.ymin(), self.ymax())
    }

    /// Returns true if `other` lies entirely inside this closed box.
    #[inline]
    pub fn contains(&self, other: &Rect) -> bool {
        self.contains_point(other.min()) && self.contains_point(other.max())
    }

    /// Returns true if the two closed boxes share at least one point.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }

    /// Computes the axis-aligned intersection of two closed boxes.
    ///
    /// Each axis is treated as a closed interval; touching edges and
    /// corners count as overlap. Returns `None` if either axis is disjoint.
    /// The result is normalized.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let (x0, x1) = span_intersection(
            (self.xmin(), self.xmax()),
            (other.xmin(), other.xmax()),
        )?;
        let (y0, y1) = span_intersection(
            (self.ymin(), self.ymax()),
            (other.ymin(), other.ymax()),
        )?;
        Some(Rect::from_corners(x0, y0, x1, y1))
    }
}

#[inline]
fn within(v: i64, lo: i64, hi: i64) -> bool {
    lo <= v && v <= hi
}

/// Intersects two closed spans given as `(lo, hi)` with `lo <= hi`.
fn span_intersection((lo1, hi1): (i64, i64), (lo2, hi2): (i64, i64)) -> Option<(i64, i64)> {
    let lo = lo1.max(lo2);
    let hi = hi1.min(hi2);
    (lo <= hi).then_some((lo, hi))
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        self.bounds() == other.bounds()
    }
}

impl Eq for Rect {}

impl Hash for Rect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bounds().hash(state);
    }
}

impl PartialOrd for Rect {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rect {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bounds().cmp(&other.bounds())
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rect")
            .field("xmin", &self.xmin())
            .field("ymin", &self.ymin())
            .field("xmax", &self.xmax())
            .field("ymax", &self.ymax())
            .finish()
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} .. {}", self.min(), self.max())
    }
}

// Serialized as a flat `[x0, y0, x1, y1]` array, corners in given order.
impl Serialize for Rect {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.a.x, self.a.y, self.b.x, self.b.y].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Rect {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let coords = Vec::<i64>::deserialize(deserializer)?;
        Rect::from_coords(&coords).map_err(serde::de::Error::custom)
    }
}
