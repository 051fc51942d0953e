//! JSON reading and writing of labeled rectangle sets.
//!
//! The format is a single object with a `rects` array. Each entry carries a
//! numeric `id` and a `rect` given as a flat `[x0, y0, x1, y1]` array of the
//! two corners, in any order:
//!
//! ```json
//! {
//!   "rects": [
//!     { "id": 77, "rect": [23, 47, 73, 87] },
//!     { "id": 99, "rect": [63, 67, 103, 200] }
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::model::RectSet;
use crate::error::OverlapError;

/// Reads a rectangle set from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, including when a
/// rectangle does not have exactly four coordinates.
pub fn read_rects_json(path: &Path) -> Result<RectSet, OverlapError> {
    let file = File::open(path).map_err(OverlapError::Io)?;
    let reader = BufReader::new(file);

    serde_json::from_reader(reader).map_err(|source| OverlapError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a rectangle set from a JSON string.
pub fn from_json_str(json: &str) -> Result<RectSet, serde_json::Error> {
    serde_json::from_str(json)
}

/// Reads a rectangle set from JSON bytes.
pub fn from_json_slice(bytes: &[u8]) -> Result<RectSet, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Writes a rectangle set to a pretty-printed JSON string.
pub fn to_json_string(rects: &RectSet) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Rect, RectEntry, RectId};

    #[test]
    fn test_parse_rects() {
        let json = r#"{"rects": [
            {"id": 77, "rect": [23, 47, 73, 87]},
            {"id": 99, "rect": [103, 200, 63, 67]}
        ]}"#;

        let set = from_json_str(json).expect("parse rects");
        assert_eq!(set.len(), 2);
        assert_eq!(set.rects[0].id, RectId(77));
        assert_eq!(set.rects[1].rect, Rect::from_corners(63, 67, 103, 200));
    }

    #[test]
    fn test_parse_rejects_malformed_rect() {
        let json = r#"{"rects": [{"id": 1, "rect": [1, 2, 3]}]}"#;
        let err = from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("Malformed rectangle"));
    }

    #[test]
    fn test_parse_rejects_missing_rects() {
        assert!(from_json_str("{}").is_err());
        assert!(from_json_slice(b"not json").is_err());
    }

    #[test]
    fn test_json_preserves_corner_order() {
        let set = RectSet {
            rects: vec![RectEntry::new(5u64, Rect::from_corners(9, 8, 1, 2))],
        };
        let json = to_json_string(&set).expect("serialize rects");
        let restored = from_json_str(&json).expect("parse rects");
        assert_eq!(restored.rects[0].rect.a(), set.rects[0].rect.a());
        assert_eq!(restored.rects[0].rect.b(), set.rects[0].rect.b());
    }
}
