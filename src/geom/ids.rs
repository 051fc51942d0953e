//! Newtype identifier for labeled rectangles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for a rectangle in an input set.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RectId(pub u64);

impl RectId {
    /// Creates a new RectId.
    #[inline]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value.
    #[inline]
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for RectId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Debug for RectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RectId({})", self.0)
    }
}

impl fmt::Display for RectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
