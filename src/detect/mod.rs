//! Overlap detection among labeled rectangles.
//!
//! [`OverlapDetector`] owns an identifier-to-rectangle map and computes,
//! on every call to [`OverlapDetector::overlaps`], the regions covered by
//! two or more of its rectangles together with the identifiers of every
//! rectangle covering each region.
//!
//! The scan is pairwise: every incoming rectangle is intersected with each
//! region accumulated so far, and each intersection inherits the ids of the
//! region it came from. Chaining ids this way means that a region ends up
//! labeled with every rectangle that contains it, no matter in which order
//! the rectangles were visited.

mod report;

pub use report::{OverlapRegion, OverlapReport};

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

use crate::error::OverlapError;
use crate::geom::{Rect, RectId, RectSet};

/// Overlap regions mapped to the ids of every rectangle containing them.
///
/// Keys are normalized rectangles; every id set has at least two members.
pub type OverlapMap<K = RectId> = BTreeMap<Rect, BTreeSet<K>>;

/// Computes overlap regions for a fixed set of labeled rectangles.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use rectoverlap::detect::OverlapDetector;
/// use rectoverlap::geom::Rect;
///
/// let detector: OverlapDetector<u32> = [
///     (77, Rect::from_corners(23, 47, 73, 87)),
///     (99, Rect::from_corners(63, 67, 103, 200)),
/// ]
/// .into_iter()
/// .collect();
///
/// let overlaps = detector.overlaps();
/// assert_eq!(overlaps.len(), 1);
/// assert_eq!(
///     overlaps.get(&Rect::from_corners(63, 67, 73, 87)),
///     Some(&BTreeSet::from([77, 99]))
/// );
/// ```
#[derive(Clone, Debug)]
pub struct OverlapDetector<K = RectId> {
    rects: BTreeMap<K, Rect>,
}

impl<K> Default for OverlapDetector<K> {
    fn default() -> Self {
        Self {
            rects: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone> OverlapDetector<K> {
    /// Creates a detector over the given rectangles.
    pub fn new(rects: BTreeMap<K, Rect>) -> Self {
        Self { rects }
    }

    /// Returns the rectangles this detector was built from.
    pub fn rects(&self) -> &BTreeMap<K, Rect> {
        &self.rects
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Computes every region covered by at least two rectangles.
    ///
    /// Each key of the returned map is a closed intersection box, stored
    /// normalized; its value holds the id of every input rectangle that
    /// contains it. Touching edges and corners count as overlap. A region
    /// is not split or subsumed by a larger one: if three rectangles
    /// overlap in two different boxes, both boxes are reported.
    ///
    /// The result depends only on the set of input rectangles, never on
    /// corner order or visiting order. Calling this repeatedly returns
    /// equal maps.
    pub fn overlaps(&self) -> OverlapMap<K> {
        let mut candidates: BTreeMap<Rect, BTreeSet<K>> = BTreeMap::new();

        for (id, rect) in &self.rects {
            let rect = rect.normalized();

            if candidates.is_empty() {
                candidates.insert(rect, BTreeSet::from([id.clone()]));
                continue;
            }

            // Intersect against the regions accumulated before this rect;
            // new regions are merged in only after the scan.
            let found: Vec<(Rect, BTreeSet<K>)> = candidates
                .iter()
                .filter(|(_, ids)| !ids.contains(id))
                .filter_map(|(candidate, ids)| {
                    let region = candidate.intersection(&rect)?;
                    let mut ids = ids.clone();
                    ids.insert(id.clone());
                    Some((region, ids))
                })
                .collect();

            trace!("{} intersects {} accumulated region(s)", rect, found.len());

            for (region, ids) in found {
                candidates.entry(region).or_default().extend(ids);
            }
            candidates.entry(rect).or_default().insert(id.clone());
        }

        let total = candidates.len();
        let overlaps: OverlapMap<K> = candidates
            .into_iter()
            .filter(|(_, ids)| ids.len() >= 2)
            .collect();

        debug!(
            "{} rect(s) produced {} candidate region(s), {} overlapping",
            self.rects.len(),
            total,
            overlaps.len()
        );

        overlaps
    }
}

impl<K: Ord> FromIterator<(K, Rect)> for OverlapDetector<K> {
    fn from_iter<I: IntoIterator<Item = (K, Rect)>>(iter: I) -> Self {
        Self {
            rects: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<RectSet> for OverlapDetector<RectId> {
    type Error = OverlapError;

    /// Builds a detector from a file-level rectangle set, rejecting
    /// duplicate ids.
    fn try_from(set: RectSet) -> Result<Self, Self::Error> {
        Ok(Self::new(set.into_map()?))
    }
}
