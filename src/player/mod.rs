//! Player controller
//!
//! Owns the video library, the playlist collection, and the single
//! current-video slot, and renders every operation into status lines on its
//! output sink. No user operation ever fails; only sink I/O errors
//! propagate.
//!
//! Pause and flag state is kept here, per video ID, rather than on the
//! videos themselves, so the library stays read-only after load. A pause
//! flag outlives the video's stay in the slot: explicit `play` clears the
//! flags of both the outgoing and the incoming video, but `play_random`
//! and `stop` leave them untouched. That asymmetry matches the observed
//! behavior of the product this simulator reproduces and is pinned by
//! tests; do not unify it without product guidance.

use crate::model::{PlaylistCollection, PlaylistError, Video, VideoLibrary};
use anyhow::Result;
use rand::seq::IndexedRandom;
use std::collections::{HashMap, HashSet};
use std::io::Write;

/// Reason recorded when `FLAG_VIDEO` is given no explicit reason
const DEFAULT_FLAG_REASON: &str = "Not supplied";

/// The player controller, generic over its output sink so sessions can run
/// against stdout or a capture buffer in tests.
pub struct Player<W: Write> {
    library: VideoLibrary,
    playlists: PlaylistCollection,

    /// ID of the video occupying the current-video slot, if any
    current: Option<String>,

    /// Per-video pause flags (see the module docs for their lifetime)
    paused: HashSet<String>,

    /// Flagged video IDs with their flag reason
    flagged: HashMap<String, String>,

    out: W,
}

impl<W: Write> Player<W> {
    /// Create a player over a loaded library, writing to `out`
    pub fn new(library: VideoLibrary, out: W) -> Self {
        Self {
            library,
            playlists: PlaylistCollection::new(),
            current: None,
            paused: HashSet::new(),
            flagged: HashMap::new(),
            out,
        }
    }

    /// The output sink, exposed for the command loop's own messages
    pub fn output(&mut self) -> &mut W {
        &mut self.out
    }

    /// Title of the video in the slot. Falls back to the raw ID, which can
    /// only happen if the slot were seeded with an unknown ID.
    fn current_title(&self) -> Option<String> {
        let id = self.current.as_deref()?;
        Some(
            self.library
                .get(id)
                .map(|video| video.title.clone())
                .unwrap_or_else(|| id.to_string()),
        )
    }

    /// Listing line for a video, with the flag annotation when flagged
    fn render_video(&self, video: &Video) -> String {
        match self.flagged.get(&video.id) {
            Some(reason) => format!("{} - FLAGGED (reason: {})", video.display_line(), reason),
            None => video.display_line(),
        }
    }

    // ---- library display ----

    /// Report the library size
    pub fn number_of_videos(&mut self) -> Result<()> {
        writeln!(self.out, "{} videos in the library", self.library.len())?;
        Ok(())
    }

    /// List every video, sorted lexicographically by title
    pub fn show_all_videos(&mut self) -> Result<()> {
        let mut videos: Vec<&Video> = self.library.all().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));

        let lines: Vec<String> = videos.iter().map(|v| self.render_video(v)).collect();
        writeln!(self.out, "Here's a list of all available videos:")?;
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    // ---- current-video state machine ----

    /// Play a video by ID, stopping whatever currently occupies the slot
    pub fn play(&mut self, id: &str) -> Result<()> {
        let Some(video) = self.library.get(id) else {
            writeln!(self.out, "Cannot play video: Video does not exist")?;
            return Ok(());
        };
        let title = video.title.clone();

        if let Some(reason) = self.flagged.get(id) {
            let reason = reason.clone();
            writeln!(
                self.out,
                "Cannot play video: Video is currently flagged (reason: {})",
                reason
            )?;
            return Ok(());
        }

        if let Some(outgoing) = self.current.take() {
            self.paused.remove(&outgoing);
            let outgoing_title = self
                .library
                .get(&outgoing)
                .map(|v| v.title.clone())
                .unwrap_or(outgoing);
            writeln!(self.out, "Stopping video: {}", outgoing_title)?;
        }

        // Explicit play also discards any stale pause flag on the incoming
        // video.
        self.paused.remove(id);
        self.current = Some(id.to_string());
        writeln!(self.out, "Playing video: {}", title)?;
        Ok(())
    }

    /// Stop the current video, if any. The stopped video keeps its pause
    /// flag until it is next explicitly played.
    pub fn stop(&mut self) -> Result<()> {
        match self.current_title() {
            Some(title) => {
                writeln!(self.out, "Stopping video: {}", title)?;
                self.current = None;
            }
            None => {
                writeln!(self.out, "Cannot stop video: No video is currently playing")?;
            }
        }
        Ok(())
    }

    /// Play a uniformly random non-flagged video.
    ///
    /// Unlike [`Player::play`], the outgoing video's pause flag is NOT
    /// cleared here (see the module docs).
    pub fn play_random(&mut self) -> Result<()> {
        let candidates: Vec<&Video> = self
            .library
            .all()
            .filter(|video| !self.flagged.contains_key(&video.id))
            .collect();

        let Some(video) = candidates.choose(&mut rand::rng()) else {
            writeln!(self.out, "No videos available")?;
            return Ok(());
        };
        let id = video.id.clone();
        let title = video.title.clone();

        if let Some(outgoing_title) = self.current_title() {
            writeln!(self.out, "Stopping video: {}", outgoing_title)?;
        }

        self.current = Some(id);
        writeln!(self.out, "Playing video: {}", title)?;
        Ok(())
    }

    /// Pause the current video
    pub fn pause(&mut self) -> Result<()> {
        let Some(id) = self.current.clone() else {
            writeln!(self.out, "Cannot pause video: No video is currently playing")?;
            return Ok(());
        };
        let title = self.current_title().unwrap_or_default();

        if self.paused.contains(&id) {
            writeln!(self.out, "Video already paused: {}", title)?;
        } else {
            writeln!(self.out, "Pausing video: {}", title)?;
            self.paused.insert(id);
        }
        Ok(())
    }

    /// Resume a paused video
    pub fn resume(&mut self) -> Result<()> {
        let Some(id) = self.current.clone() else {
            writeln!(
                self.out,
                "Cannot continue video: No video is currently playing"
            )?;
            return Ok(());
        };

        if self.paused.remove(&id) {
            let title = self.current_title().unwrap_or_default();
            writeln!(self.out, "Continuing video: {}", title)?;
        } else {
            writeln!(self.out, "Cannot continue video: Video is not paused")?;
        }
        Ok(())
    }

    /// Report what occupies the current-video slot
    pub fn show_playing(&mut self) -> Result<()> {
        let Some(id) = self.current.as_deref() else {
            writeln!(self.out, "No video is currently playing")?;
            return Ok(());
        };

        let line = match self.library.get(id) {
            Some(video) => video.display_line(),
            None => id.to_string(),
        };
        if self.paused.contains(id) {
            writeln!(self.out, "Currently playing: {} [PAUSED]", line)?;
        } else {
            writeln!(self.out, "Currently playing: {}", line)?;
        }
        Ok(())
    }

    // ---- playlists ----

    /// Create a new, empty playlist
    pub fn create_playlist(&mut self, name: &str) -> Result<()> {
        match self.playlists.create(name) {
            Ok(()) => writeln!(self.out, "Successfully created new playlist: {}", name)?,
            Err(err) => writeln!(self.out, "Cannot create playlist: {}", err)?,
        }
        Ok(())
    }

    /// Append a video to a playlist.
    ///
    /// Outcomes are checked in order: playlist missing, video missing,
    /// video already present.
    pub fn add_to_playlist(&mut self, name: &str, video_id: &str) -> Result<()> {
        if !self.playlists.exists(name) {
            writeln!(
                self.out,
                "Cannot add video to {}: {}",
                name,
                PlaylistError::NotFound
            )?;
            return Ok(());
        }
        let Some(video) = self.library.get(video_id) else {
            writeln!(self.out, "Cannot add video to {}: Video does not exist", name)?;
            return Ok(());
        };
        let title = video.title.clone();

        match self.playlists.add_video(name, video_id) {
            Ok(()) => writeln!(self.out, "Added video to {}: {}", name, title)?,
            Err(err) => writeln!(self.out, "Cannot add video to {}: {}", name, err)?,
        }
        Ok(())
    }

    /// Remove a video from a playlist
    pub fn remove_from_playlist(&mut self, name: &str, video_id: &str) -> Result<()> {
        if !self.playlists.exists(name) {
            writeln!(
                self.out,
                "Cannot remove video from {}: {}",
                name,
                PlaylistError::NotFound
            )?;
            return Ok(());
        }
        let Some(video) = self.library.get(video_id) else {
            writeln!(
                self.out,
                "Cannot remove video from {}: Video does not exist",
                name
            )?;
            return Ok(());
        };
        let title = video.title.clone();

        match self.playlists.remove_video(name, video_id) {
            Ok(()) => writeln!(self.out, "Removed video from {}: {}", name, title)?,
            Err(err) => writeln!(self.out, "Cannot remove video from {}: {}", name, err)?,
        }
        Ok(())
    }

    /// Empty a playlist without deleting it
    pub fn clear_playlist(&mut self, name: &str) -> Result<()> {
        match self.playlists.clear(name) {
            Ok(()) => writeln!(self.out, "Successfully removed all videos from {}", name)?,
            Err(err) => writeln!(self.out, "Cannot clear playlist {}: {}", name, err)?,
        }
        Ok(())
    }

    /// Delete a playlist entirely
    pub fn delete_playlist(&mut self, name: &str) -> Result<()> {
        match self.playlists.delete(name) {
            Ok(_) => writeln!(self.out, "Deleted playlist: {}", name)?,
            Err(err) => writeln!(self.out, "Cannot delete playlist {}: {}", name, err)?,
        }
        Ok(())
    }

    /// List all playlist names, in case-insensitive lexicographic order
    pub fn show_all_playlists(&mut self) -> Result<()> {
        if self.playlists.is_empty() {
            writeln!(self.out, "No playlists exist yet")?;
            return Ok(());
        }

        let names: Vec<String> = self.playlists.all().map(|p| p.name.clone()).collect();
        writeln!(self.out, "Showing all playlists:")?;
        for name in names {
            writeln!(self.out, "{}", name)?;
        }
        Ok(())
    }

    /// List the videos of one playlist, in insertion order
    pub fn show_playlist(&mut self, name: &str) -> Result<()> {
        let Some(playlist) = self.playlists.get(name) else {
            writeln!(
                self.out,
                "Cannot show playlist {}: {}",
                name,
                PlaylistError::NotFound
            )?;
            return Ok(());
        };

        let lines: Vec<String> = playlist
            .videos
            .iter()
            .map(|id| match self.library.get(id) {
                Some(video) => self.render_video(video),
                None => id.clone(),
            })
            .collect();

        writeln!(self.out, "Showing playlist: {}", name)?;
        if lines.is_empty() {
            writeln!(self.out, "No videos here yet")?;
        }
        for line in lines {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    // ---- search ----

    /// Videos whose title contains `term`, case-insensitively
    pub fn search_videos(&mut self, term: &str) -> Result<()> {
        let needle = term.to_lowercase();
        self.search_and_display(term, |video| video.title.to_lowercase().contains(&needle))
    }

    /// Videos carrying exactly the tag `tag`, case-insensitively
    pub fn search_videos_with_tag(&mut self, tag: &str) -> Result<()> {
        self.search_and_display(tag, |video| {
            video.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
        })
    }

    /// Shared search output: flagged videos are excluded, results are
    /// sorted by title and numbered from 1
    fn search_and_display(&mut self, term: &str, predicate: impl Fn(&Video) -> bool) -> Result<()> {
        let mut results: Vec<&Video> = self
            .library
            .all()
            .filter(|video| !self.flagged.contains_key(&video.id))
            .filter(|video| predicate(video))
            .collect();
        results.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));

        if results.is_empty() {
            writeln!(self.out, "No search results for {}", term)?;
            return Ok(());
        }

        let lines: Vec<String> = results.iter().map(|v| v.display_line()).collect();
        writeln!(self.out, "Here are the results for {}:", term)?;
        for (index, line) in lines.iter().enumerate() {
            writeln!(self.out, "{}) {}", index + 1, line)?;
        }
        Ok(())
    }

    // ---- flagging ----

    /// Flag a video, stopping it first if it occupies the slot
    pub fn flag_video(&mut self, id: &str, reason: Option<&str>) -> Result<()> {
        let Some(video) = self.library.get(id) else {
            writeln!(self.out, "Cannot flag video: Video does not exist")?;
            return Ok(());
        };
        let title = video.title.clone();

        if self.flagged.contains_key(id) {
            writeln!(self.out, "Cannot flag video: Video is already flagged")?;
            return Ok(());
        }

        if self.current.as_deref() == Some(id) {
            self.stop()?;
        }

        let reason = reason.unwrap_or(DEFAULT_FLAG_REASON).to_string();
        writeln!(
            self.out,
            "Successfully flagged video: {} (reason: {})",
            title, reason
        )?;
        self.flagged.insert(id.to_string(), reason);
        Ok(())
    }

    /// Remove the flag from a video
    pub fn allow_video(&mut self, id: &str) -> Result<()> {
        let Some(video) = self.library.get(id) else {
            writeln!(self.out, "Cannot remove flag from video: Video does not exist")?;
            return Ok(());
        };
        let title = video.title.clone();

        if self.flagged.remove(id).is_some() {
            writeln!(self.out, "Successfully removed flag from video: {}", title)?;
        } else {
            writeln!(self.out, "Cannot remove flag from video: Video is not flagged")?;
        }
        Ok(())
    }
}
