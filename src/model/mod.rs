//! Data model for the video playback simulator
//!
//! This module defines the data structures shared by the catalog loader,
//! the player controller, and the playlist collection.

mod library;
mod playlist;
mod video;

pub use library::VideoLibrary;
pub use playlist::{Playlist, PlaylistCollection, PlaylistError};
pub use video::Video;
