//! Interactive command loop
//!
//! Reads one command per line, dispatches it to the [`Player`], and keeps
//! going until EOF or `EXIT`. The command word is case-insensitive;
//! arguments are whitespace-separated, so video IDs and playlist names
//! contain no spaces. Only the flag reason may span multiple words.

use crate::player::Player;
use anyhow::Result;
use std::io::{BufRead, Write};

const HELP: &str = "Available commands:
  NUMBER_OF_VIDEOS               - show how many videos are in the library
  SHOW_ALL_VIDEOS                - list all videos
  PLAY <video_id>                - play the given video
  PLAY_RANDOM                    - play a random video
  STOP                           - stop the current video
  PAUSE                          - pause the current video
  CONTINUE                       - resume the paused video
  SHOW_PLAYING                   - show the current video
  CREATE_PLAYLIST <name>         - create a new playlist
  ADD_TO_PLAYLIST <name> <id>    - add a video to a playlist
  REMOVE_FROM_PLAYLIST <name> <id> - remove a video from a playlist
  CLEAR_PLAYLIST <name>          - remove all videos from a playlist
  DELETE_PLAYLIST <name>         - delete a playlist
  SHOW_ALL_PLAYLISTS             - list all playlists
  SHOW_PLAYLIST <name>           - list the videos in a playlist
  SEARCH_VIDEOS <term>           - search video titles
  SEARCH_VIDEOS_WITH_TAG <tag>   - search videos by tag
  FLAG_VIDEO <id> [reason]       - flag a video
  ALLOW_VIDEO <id>               - remove a flag from a video
  HELP                           - show this message
  EXIT                           - leave the player";

const UNKNOWN_COMMAND: &str =
    "Please enter a valid command, type HELP for a list of available commands.";

/// Drive a whole session: one command per input line, until EOF or `EXIT`
pub fn run_session<R: BufRead, W: Write>(input: R, player: &mut Player<W>) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if !dispatch(&line, player)? {
            break;
        }
    }
    Ok(())
}

/// Execute a single command line. Returns `false` when the session should
/// end.
pub fn dispatch<W: Write>(line: &str, player: &mut Player<W>) -> Result<bool> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some((word, args)) = parts.split_first() else {
        // Blank line, nothing to do.
        return Ok(true);
    };
    let command = word.to_uppercase();

    match (command.as_str(), args) {
        ("NUMBER_OF_VIDEOS", []) => player.number_of_videos()?,
        ("SHOW_ALL_VIDEOS", []) => player.show_all_videos()?,

        ("PLAY", [id]) => player.play(id)?,
        ("PLAY", _) => usage(player, "PLAY requires a video id")?,
        ("PLAY_RANDOM", []) => player.play_random()?,
        ("STOP", []) => player.stop()?,
        ("PAUSE", []) => player.pause()?,
        ("CONTINUE", []) => player.resume()?,
        ("SHOW_PLAYING", []) => player.show_playing()?,

        ("CREATE_PLAYLIST", [name]) => player.create_playlist(name)?,
        ("CREATE_PLAYLIST", _) => usage(player, "CREATE_PLAYLIST requires a playlist name")?,
        ("ADD_TO_PLAYLIST", [name, id]) => player.add_to_playlist(name, id)?,
        ("ADD_TO_PLAYLIST", _) => {
            usage(player, "ADD_TO_PLAYLIST requires a playlist name and a video id")?
        }
        ("REMOVE_FROM_PLAYLIST", [name, id]) => player.remove_from_playlist(name, id)?,
        ("REMOVE_FROM_PLAYLIST", _) => usage(
            player,
            "REMOVE_FROM_PLAYLIST requires a playlist name and a video id",
        )?,
        ("CLEAR_PLAYLIST", [name]) => player.clear_playlist(name)?,
        ("CLEAR_PLAYLIST", _) => usage(player, "CLEAR_PLAYLIST requires a playlist name")?,
        ("DELETE_PLAYLIST", [name]) => player.delete_playlist(name)?,
        ("DELETE_PLAYLIST", _) => usage(player, "DELETE_PLAYLIST requires a playlist name")?,
        ("SHOW_ALL_PLAYLISTS", []) => player.show_all_playlists()?,
        ("SHOW_PLAYLIST", [name]) => player.show_playlist(name)?,
        ("SHOW_PLAYLIST", _) => usage(player, "SHOW_PLAYLIST requires a playlist name")?,

        ("SEARCH_VIDEOS", [term]) => player.search_videos(term)?,
        ("SEARCH_VIDEOS", _) => usage(player, "SEARCH_VIDEOS requires a search term")?,
        ("SEARCH_VIDEOS_WITH_TAG", [tag]) => player.search_videos_with_tag(tag)?,
        ("SEARCH_VIDEOS_WITH_TAG", _) => {
            usage(player, "SEARCH_VIDEOS_WITH_TAG requires a tag")?
        }

        ("FLAG_VIDEO", [id]) => player.flag_video(id, None)?,
        ("FLAG_VIDEO", [id, reason @ ..]) => {
            let reason = reason.join(" ");
            player.flag_video(id, Some(&reason))?
        }
        ("FLAG_VIDEO", _) => usage(player, "FLAG_VIDEO requires a video id")?,
        ("ALLOW_VIDEO", [id]) => player.allow_video(id)?,
        ("ALLOW_VIDEO", _) => usage(player, "ALLOW_VIDEO requires a video id")?,

        ("HELP", _) => writeln!(player.output(), "{}", HELP)?,
        ("EXIT", _) => return Ok(false),

        _ => writeln!(player.output(), "{}", UNKNOWN_COMMAND)?,
    }

    Ok(true)
}

fn usage<W: Write>(player: &mut Player<W>, hint: &str) -> Result<()> {
    writeln!(player.output(), "{}", hint)?;
    Ok(())
}
