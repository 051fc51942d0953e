//! Overlap report types and text formatting.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

use super::OverlapMap;
use crate::geom::{Rect, RectId};

/// A rendered overlap map, in key order.
#[derive(Clone, Debug, Default, Serialize)]
pub struct OverlapReport {
    /// Number of overlap regions.
    pub overlap_count: usize,
    /// All overlap regions.
    pub overlaps: Vec<OverlapRegion>,
}

/// One overlap region and the ids of every rectangle containing it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct OverlapRegion {
    pub rect: Rect,
    pub ids: Vec<RectId>,
}

impl OverlapReport {
    /// Returns true if no region is covered by more than one rectangle.
    pub fn is_clean(&self) -> bool {
        self.overlaps.is_empty()
    }

    /// Returns every id that takes part in at least one overlap.
    pub fn conflicting_ids(&self) -> BTreeSet<RectId> {
        self.overlaps
            .iter()
            .flat_map(|region| region.ids.iter().copied())
            .collect()
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<OverlapMap<RectId>> for OverlapReport {
    fn from(map: OverlapMap<RectId>) -> Self {
        let overlaps: Vec<OverlapRegion> = map
            .into_iter()
            .map(|(rect, ids)| OverlapRegion {
                rect: rect.normalized(),
                ids: ids.into_iter().collect(),
            })
            .collect();

        Self {
            overlap_count: overlaps.len(),
            overlaps,
        }
    }
}

impl fmt::Display for OverlapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.overlaps.is_empty() {
            return writeln!(f, "No overlaps found");
        }

        writeln!(f, "Found {} overlap region(s):", self.overlap_count)?;
        writeln!(f)?;

        for region in &self.overlaps {
            writeln!(f, "  {}", region)?;
        }

        writeln!(f)?;
        write!(f, "Conflicting IDs:")?;
        for (i, id) in self.conflicting_ids().iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{id}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for OverlapRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ids ", self.rect)?;
        for (i, id) in self.ids.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> OverlapMap<RectId> {
        OverlapMap::<RectId>::from([
            (
                Rect::from_corners(63, 67, 73, 87),
                BTreeSet::from([RectId(99), RectId(77)]),
            ),
            (
                Rect::from_corners(0, 0, 1, 1),
                BTreeSet::from([RectId(3), RectId(4), RectId(77)]),
            ),
        ])
    }

    #[test]
    fn test_empty_report() {
        let report = OverlapReport::from(OverlapMap::<RectId>::new());
        assert!(report.is_clean());
        assert_eq!(report.overlap_count, 0);
        assert_eq!(report.to_string(), "No overlaps found\n");
    }

    #[test]
    fn test_report_text() {
        let report = OverlapReport::from(sample_map());
        assert_eq!(
            report.to_string(),
            "Found 2 overlap region(s):\n\
             \n  [0, 0] .. [1, 1]: ids 3, 4, 77\
             \n  [63, 67] .. [73, 87]: ids 77, 99\
             \n\
             \nConflicting IDs: 3, 4, 77, 99\n"
        );
    }

    #[test]
    fn test_conflicting_ids() {
        let report = OverlapReport::from(sample_map());
        let ids: Vec<u64> = report.conflicting_ids().iter().map(RectId::as_u64).collect();
        assert_eq!(ids, vec![3, 4, 77, 99]);
    }

    #[test]
    fn test_report_json() {
        let report = OverlapReport::from(sample_map());
        let json = report.to_json_string().expect("serialize report");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["overlap_count"], 2);
        assert_eq!(value["overlaps"][1]["rect"], serde_json::json!([63, 67, 73, 87]));
        assert_eq!(value["overlaps"][1]["ids"], serde_json::json!([77, 99]));
    }
}
