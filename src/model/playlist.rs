use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Outcomes of playlist operations that the controller turns into status
/// lines. The `Display` strings are the user-visible reason texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("A playlist with the same name already exists")]
    DuplicateName,

    #[error("Playlist does not exist")]
    NotFound,

    #[error("Video already added")]
    AlreadyAdded,

    #[error("Video is not in playlist")]
    VideoNotInPlaylist,
}

/// A named, ordered, duplicate-free list of video IDs.
///
/// Playlists reference videos by ID rather than holding copies, so they can
/// never diverge from the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    /// Display name, with the casing used at creation time
    pub name: String,

    /// Video IDs in insertion order
    pub videos: Vec<String>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            videos: Vec::new(),
        }
    }

    /// Whether the playlist already contains the given video ID
    pub fn contains(&self, video_id: &str) -> bool {
        self.videos.iter().any(|id| id == video_id)
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

/// All playlists, keyed by lower-cased name.
///
/// The normalized key gives case-insensitive lookup without scanning, and
/// the `BTreeMap` ordering doubles as the case-insensitive lexicographic
/// order used when listing playlists. Display casing lives on the
/// [`Playlist`] record itself.
#[derive(Debug, Clone, Default)]
pub struct PlaylistCollection {
    playlists: BTreeMap<String, Playlist>,
}

impl PlaylistCollection {
    /// Create a new empty collection
    pub fn new() -> Self {
        Self {
            playlists: BTreeMap::new(),
        }
    }

    /// Case-insensitive existence check
    pub fn exists(&self, name: &str) -> bool {
        self.playlists.contains_key(&name.to_lowercase())
    }

    /// Create an empty playlist under `name`, keeping its casing for display
    pub fn create(&mut self, name: &str) -> Result<(), PlaylistError> {
        if self.exists(name) {
            return Err(PlaylistError::DuplicateName);
        }
        self.playlists
            .insert(name.to_lowercase(), Playlist::new(name.to_string()));
        Ok(())
    }

    /// Append a video ID to the named playlist.
    ///
    /// The caller is responsible for checking that the ID exists in the
    /// library; this only enforces playlist existence and uniqueness.
    pub fn add_video(&mut self, name: &str, video_id: &str) -> Result<(), PlaylistError> {
        let playlist = self
            .playlists
            .get_mut(&name.to_lowercase())
            .ok_or(PlaylistError::NotFound)?;

        if playlist.contains(video_id) {
            return Err(PlaylistError::AlreadyAdded);
        }
        playlist.videos.push(video_id.to_string());
        Ok(())
    }

    /// Remove a video ID from the named playlist
    pub fn remove_video(&mut self, name: &str, video_id: &str) -> Result<(), PlaylistError> {
        let playlist = self
            .playlists
            .get_mut(&name.to_lowercase())
            .ok_or(PlaylistError::NotFound)?;

        let position = playlist
            .videos
            .iter()
            .position(|id| id == video_id)
            .ok_or(PlaylistError::VideoNotInPlaylist)?;
        playlist.videos.remove(position);
        Ok(())
    }

    /// Empty the named playlist, leaving the playlist itself in place
    pub fn clear(&mut self, name: &str) -> Result<(), PlaylistError> {
        let playlist = self
            .playlists
            .get_mut(&name.to_lowercase())
            .ok_or(PlaylistError::NotFound)?;
        playlist.videos.clear();
        Ok(())
    }

    /// Remove the named playlist entirely, returning it for display
    pub fn delete(&mut self, name: &str) -> Result<Playlist, PlaylistError> {
        self.playlists
            .remove(&name.to_lowercase())
            .ok_or(PlaylistError::NotFound)
    }

    /// Get a playlist by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&name.to_lowercase())
    }

    /// All playlists, in case-insensitive lexicographic name order
    pub fn all(&self) -> impl Iterator<Item = &Playlist> {
        self.playlists.values()
    }

    /// Total number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// True when no playlists exist
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}
