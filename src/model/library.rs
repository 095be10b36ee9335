use super::Video;
use std::collections::HashMap;

/// Read-only catalog of all known videos, indexed by their ID.
///
/// Populated once at startup from the catalog file and never mutated
/// afterwards; the rest of the system refers to videos by ID.
#[derive(Debug, Clone, Default)]
pub struct VideoLibrary {
    videos: HashMap<String, Video>,
}

impl VideoLibrary {
    /// Create a new empty library
    pub fn new() -> Self {
        Self {
            videos: HashMap::new(),
        }
    }

    /// Add a video to the library. Returns the previously stored video if
    /// the ID was already taken (the loader treats that as an error).
    pub fn add_video(&mut self, video: Video) -> Option<Video> {
        self.videos.insert(video.id.clone(), video)
    }

    /// Get a video by ID
    pub fn get(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    /// All videos, in no particular order (callers sort for display)
    pub fn all(&self) -> impl Iterator<Item = &Video> {
        self.videos.values()
    }

    /// Total number of videos
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// True when the library holds no videos
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
