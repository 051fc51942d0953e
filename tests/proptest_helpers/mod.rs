#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};
use rectoverlap::geom::{Point, Rect};
use rectoverlap::OverlapMap;

/// Coordinates stay in a small window so random rectangles actually meet.
pub const EXTENT: i64 = 12;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(128);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

pub fn arb_point() -> BoxedStrategy<Point> {
    (-EXTENT..=EXTENT, -EXTENT..=EXTENT)
        .prop_map(|(x, y)| Point::new(x, y))
        .boxed()
}

/// Rectangles with corners in arbitrary order, points and lines included.
pub fn arb_rect() -> BoxedStrategy<Rect> {
    prop_oneof![
        6 => (arb_point(), arb_point()).prop_map(|(a, b)| Rect::new(a, b)),
        1 => arb_point().prop_map(Rect::point),
    ]
    .boxed()
}

pub fn arb_rects(max_len: usize) -> BoxedStrategy<Vec<Rect>> {
    prop::collection::vec(arb_rect(), 0..=max_len).boxed()
}

/// Swaps the x components of the two corners, keeping the same box.
pub fn swap_x(rect: &Rect) -> Rect {
    let (a, b) = (rect.a(), rect.b());
    Rect::new(Point::new(b.x, a.y), Point::new(a.x, b.y))
}

/// Reference result: every subset of two or more rectangles with a common
/// intersection yields that intersection, labeled with every rectangle
/// containing it. Exponential, so only for small inputs.
pub fn brute_force_overlaps(rects: &[Rect]) -> OverlapMap<usize> {
    assert!(rects.len() <= 12, "brute force is exponential");

    let mut regions = BTreeSet::new();
    for mask in 1u32..(1 << rects.len()) {
        if mask.count_ones() < 2 {
            continue;
        }
        let mut members = (0..rects.len()).filter(|i| mask & (1 << i) != 0);
        let first = rects[members.next().expect("non-empty mask")];
        let common = members.try_fold(first, |acc, i| acc.intersection(&rects[i]));
        if let Some(region) = common {
            regions.insert(region.normalized());
        }
    }

    regions
        .into_iter()
        .map(|region| {
            let ids: BTreeSet<usize> = rects
                .iter()
                .enumerate()
                .filter(|(_, rect)| rect.contains(&region))
                .map(|(i, _)| i)
                .collect();
            (region, ids)
        })
        .collect()
}

/// Relabels every id in an overlap map.
pub fn relabel<K: Ord + Copy>(map: &OverlapMap<K>, f: impl Fn(K) -> K) -> OverlapMap<K> {
    map.iter()
        .map(|(rect, ids)| (*rect, ids.iter().map(|id| f(*id)).collect()))
        .collect::<BTreeMap<_, _>>()
}
