//! Catalog file parser
//!
//! Catalog lines have the form `title|video_id|tag,tag,...`. The tag field
//! may be empty. Blank lines and lines starting with `#` are skipped.

use crate::model::{Video, VideoLibrary};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Load a complete video library from a catalog file
pub fn load_catalog(path: &Path) -> Result<VideoLibrary> {
    log::info!("Loading video catalog from {:?}", path);

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to open video catalog: {:?}", path))?;

    let mut library = VideoLibrary::new();

    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let video = parse_line(line)
            .with_context(|| format!("Malformed catalog entry on line {}", index + 1))?;

        log::debug!("Loaded video {} ({})", video.title, video.id);
        if let Some(previous) = library.add_video(video) {
            bail!(
                "Duplicate video id {:?} on line {}",
                previous.id,
                index + 1
            );
        }
    }

    log::info!("Parsed {} videos from catalog", library.len());
    Ok(library)
}

/// Parse a single catalog line into a video
pub fn parse_line(line: &str) -> Result<Video> {
    let mut fields = line.splitn(3, '|');

    let title = fields
        .next()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .context("missing title field")?;
    let id = fields
        .next()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .context("missing video id field")?;

    let tags = fields
        .next()
        .unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    Ok(Video::new(id, title, tags))
}
