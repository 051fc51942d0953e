//! Labeled rectangle sets as read from and written to files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ids::RectId;
use super::rect::Rect;
use crate::error::OverlapError;

/// A list of labeled rectangles in file order.
///
/// Duplicate identifiers are representable here so that readers can report
/// them; [`RectSet::into_map`] rejects them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RectSet {
    pub rects: Vec<RectEntry>,
}

/// One labeled rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectEntry {
    pub id: RectId,
    pub rect: Rect,
}

impl RectEntry {
    pub fn new(id: impl Into<RectId>, rect: Rect) -> Self {
        Self {
            id: id.into(),
            rect,
        }
    }
}

impl RectSet {
    /// Returns the number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Converts the set into an identifier-keyed map.
    ///
    /// # Errors
    /// Returns [`OverlapError::DuplicateId`] for the first identifier that
    /// appears more than once.
    pub fn into_map(self) -> Result<BTreeMap<RectId, Rect>, OverlapError> {
        let mut map = BTreeMap::new();
        for entry in self.rects {
            if map.insert(entry.id, entry.rect).is_some() {
                return Err(OverlapError::DuplicateId(entry.id));
            }
        }
        Ok(map)
    }
}

impl FromIterator<RectEntry> for RectSet {
    fn from_iter<I: IntoIterator<Item = RectEntry>>(iter: I) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}
