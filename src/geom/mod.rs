//! Geometry types and rectangle-set I/O.
//!
//! Coordinates are integers. A [`Rect`] is an unordered pair of corner
//! [`Point`]s; all comparisons go through its normalized bounds so callers
//! never need to care which corner they pass first.
//!
//! # Example
//!
//! ```
//! use rectoverlap::geom::{Point, Rect};
//!
//! let a = Rect::new(Point::new(73, 87), Point::new(23, 47));
//! let b = Rect::from_corners(63, 67, 103, 200);
//! assert_eq!(a.intersection(&b), Some(Rect::from_corners(63, 67, 73, 87)));
//! ```

mod ids;
pub mod io_csv;
pub mod io_json;
mod model;
mod point;
mod rect;

pub use ids::RectId;
pub use model::{RectEntry, RectSet};
pub use point::Point;
pub use rect::Rect;
