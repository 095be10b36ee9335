//! Tubeplayer - command-driven video playback simulator
//!
//! Maintains an in-memory catalog of videos, a single "currently playing"
//! slot with pause state, and named playlists. No real media is decoded;
//! playback is simulated through status lines on an output sink.

pub mod catalog;
pub mod model;
pub mod player;
pub mod repl;

pub use model::{Playlist, PlaylistCollection, PlaylistError, Video, VideoLibrary};
pub use player::Player;
