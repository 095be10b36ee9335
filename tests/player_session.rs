use std::io::Write as _;
use tempfile::NamedTempFile;
use tubeplayer::catalog::load_catalog;
use tubeplayer::model::{Video, VideoLibrary};
use tubeplayer::player::Player;
use tubeplayer::repl::run_session;

/// Create a minimal test library
fn create_test_library() -> VideoLibrary {
    let mut library = VideoLibrary::new();
    library.add_video(Video::new(
        "v1",
        "Amazing Cat Video",
        vec!["cat".to_string(), "fun".to_string()],
    ));
    library.add_video(Video::new("v2", "Another Video", vec![]));
    library
}

/// Run a scripted session against the given library and capture its output
fn run_script(library: VideoLibrary, script: &str) -> String {
    let mut buffer = Vec::new();
    let mut player = Player::new(library, &mut buffer);
    run_session(script.as_bytes(), &mut player).expect("session should not fail");
    drop(player);
    String::from_utf8(buffer).expect("session output is UTF-8")
}

#[test]
fn test_play_switch_and_show() {
    let output = run_script(
        create_test_library(),
        "PLAY v1\nPLAY v2\nSHOW_PLAYING\n",
    );
    assert_eq!(
        output,
        "Playing video: Amazing Cat Video\n\
         Stopping video: Amazing Cat Video\n\
         Playing video: Another Video\n\
         Currently playing: Another Video (v2) []\n"
    );
}

#[test]
fn test_play_random_with_empty_catalog() {
    let output = run_script(VideoLibrary::new(), "PLAY_RANDOM\nSHOW_PLAYING\n");
    assert_eq!(
        output,
        "No videos available\n\
         No video is currently playing\n"
    );
}

#[test]
fn test_playlist_name_is_case_insensitively_unique() {
    let output = run_script(
        create_test_library(),
        "CREATE_PLAYLIST My_List\nCREATE_PLAYLIST my_list\nSHOW_ALL_PLAYLISTS\n",
    );
    assert_eq!(
        output,
        "Successfully created new playlist: My_List\n\
         Cannot create playlist: A playlist with the same name already exists\n\
         Showing all playlists:\n\
         My_List\n"
    );
}

#[test]
fn test_adding_same_video_twice_keeps_playlist_length() {
    let output = run_script(
        create_test_library(),
        "CREATE_PLAYLIST mix\n\
         ADD_TO_PLAYLIST mix v1\n\
         ADD_TO_PLAYLIST mix v1\n\
         SHOW_PLAYLIST mix\n",
    );
    assert_eq!(
        output,
        "Successfully created new playlist: mix\n\
         Added video to mix: Amazing Cat Video\n\
         Cannot add video to mix: Video already added\n\
         Showing playlist: mix\n\
         Amazing Cat Video (v1) [cat fun]\n"
    );
}

#[test]
fn test_full_pause_resume_cycle() {
    let output = run_script(
        create_test_library(),
        "PLAY v1\nPAUSE\nSHOW_PLAYING\nCONTINUE\nCONTINUE\nSTOP\nSTOP\n",
    );
    assert_eq!(
        output,
        "Playing video: Amazing Cat Video\n\
         Pausing video: Amazing Cat Video\n\
         Currently playing: Amazing Cat Video (v1) [cat fun] [PAUSED]\n\
         Continuing video: Amazing Cat Video\n\
         Cannot continue video: Video is not paused\n\
         Stopping video: Amazing Cat Video\n\
         Cannot stop video: No video is currently playing\n"
    );
}

#[test]
fn test_random_play_preserves_stale_pause_flag() {
    // One-video library makes the random pick deterministic. The outgoing
    // pause flag survives the implicit stop, unlike with explicit PLAY.
    let mut library = VideoLibrary::new();
    library.add_video(Video::new("v1", "Amazing Cat Video", vec![]));

    let output = run_script(library, "PLAY v1\nPAUSE\nPLAY_RANDOM\nSHOW_PLAYING\n");
    assert_eq!(
        output,
        "Playing video: Amazing Cat Video\n\
         Pausing video: Amazing Cat Video\n\
         Stopping video: Amazing Cat Video\n\
         Playing video: Amazing Cat Video\n\
         Currently playing: Amazing Cat Video (v1) [] [PAUSED]\n"
    );
}

#[test]
fn test_flagged_video_is_unplayable_until_allowed() {
    let mut library = VideoLibrary::new();
    library.add_video(Video::new("v1", "Amazing Cat Video", vec![]));

    let output = run_script(
        library,
        "PLAY v1\n\
         FLAG_VIDEO v1 too many cats\n\
         PLAY v1\n\
         PLAY_RANDOM\n\
         ALLOW_VIDEO v1\n\
         PLAY v1\n",
    );
    assert_eq!(
        output,
        "Playing video: Amazing Cat Video\n\
         Stopping video: Amazing Cat Video\n\
         Successfully flagged video: Amazing Cat Video (reason: too many cats)\n\
         Cannot play video: Video is currently flagged (reason: too many cats)\n\
         No videos available\n\
         Successfully removed flag from video: Amazing Cat Video\n\
         Playing video: Amazing Cat Video\n"
    );
}

#[test]
fn test_session_from_catalog_file() {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "# test catalog").unwrap();
    writeln!(file, "Amazing Cat Video|v1|cat,fun").unwrap();
    writeln!(file, "Another Video|v2|").unwrap();

    let library = load_catalog(file.path()).expect("catalog should load");
    let output = run_script(library, "NUMBER_OF_VIDEOS\nSHOW_ALL_VIDEOS\nEXIT\nPLAY v1\n");
    assert_eq!(
        output,
        "2 videos in the library\n\
         Here's a list of all available videos:\n\
         Amazing Cat Video (v1) [cat fun]\n\
         Another Video (v2) []\n"
    );
}

#[test]
fn test_search_commands() {
    let output = run_script(
        create_test_library(),
        "SEARCH_VIDEOS video\nSEARCH_VIDEOS_WITH_TAG fun\nSEARCH_VIDEOS_WITH_TAG dog\n",
    );
    assert_eq!(
        output,
        "Here are the results for video:\n\
         1) Amazing Cat Video (v1) [cat fun]\n\
         2) Another Video (v2) []\n\
         Here are the results for fun:\n\
         1) Amazing Cat Video (v1) [cat fun]\n\
         No search results for dog\n"
    );
}
