//! File helpers for the command-line tools.
//!
//! - `load_segments`: read the line detector's JSON output.
//! - `photo_size`: probe a photo's pixel dimensions without decoding it.
//! - `write_json_file`: save the analysis report as indented JSON.
use crate::analyzer::PhotoSize;
use crate::segments::LineSegment;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Accepted layouts of a segments file: a bare array, or an object with a
/// `segments` array as written by the detector tools.
#[derive(Deserialize)]
#[serde(untagged)]
enum SegmentsFile {
    Bare(Vec<LineSegment>),
    Wrapped { segments: Vec<LineSegment> },
}

/// Load raw line segments from a JSON file.
pub fn load_segments(path: &Path) -> Result<Vec<LineSegment>, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read segments {}: {e}", path.display()))?;
    let file: SegmentsFile = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse segments {}: {e}", path.display()))?;
    Ok(match file {
        SegmentsFile::Bare(segments) | SegmentsFile::Wrapped { segments } => segments,
    })
}

/// Read the pixel dimensions of a photo from its header.
pub fn photo_size(path: &Path) -> Result<PhotoSize, String> {
    let (width, height) = image::image_dimensions(path)
        .map_err(|e| format!("Failed to read image size of {}: {e}", path.display()))?;
    Ok(PhotoSize::new(width, height))
}

/// Writes an analysis report (or any serializable value) as indented JSON.
///
/// Missing output directories are created first; a bare file name writes
/// into the working directory.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)
            .map_err(|e| format!("Cannot create report directory {}: {e}", dir.display()))?,
        _ => {}
    }
    let mut bytes = serde_json::to_vec_pretty(value)
        .map_err(|e| format!("Cannot encode report for {}: {e}", path.display()))?;
    bytes.push(b'\n');
    fs::write(path, bytes).map_err(|e| format!("Cannot write report {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_load_from_bare_and_wrapped_files() {
        let dir = std::env::temp_dir().join(format!("joint-survey-io-{}", std::process::id()));
        let bare = dir.join("bare.json");
        let wrapped = dir.join("nested").join("wrapped.json");
        let segs = vec![LineSegment::from_coords(0.0, 0.0, 10.0, 5.0)];

        write_json_file(&bare, &segs).expect("write bare");
        write_json_file(&wrapped, &serde_json::json!({ "segments": &segs })).expect("write wrapped");

        assert_eq!(load_segments(&bare).expect("bare"), segs);
        assert_eq!(load_segments(&wrapped).expect("wrapped"), segs);
        assert!(fs::read_to_string(&bare).expect("read").ends_with('\n'));
        assert!(load_segments(&dir.join("missing.json")).is_err());

        let _ = fs::remove_dir_all(&dir);
    }
}
