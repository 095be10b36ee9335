use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tubeplayer::player::Player;
use tubeplayer::{catalog, repl};

#[derive(Parser, Debug)]
#[command(name = "tubeplayer")]
#[command(about = "Command-driven video playback simulator", long_about = None)]
struct Args {
    /// Path to the video catalog file
    #[arg(short = 'c', long, default_value = "videos.txt")]
    catalog: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in the catalog path
    let catalog_path = shellexpand::tilde(&args.catalog);
    let library = catalog::load_catalog(&PathBuf::from(catalog_path.as_ref()))?;
    log::info!("Library loaded: {} videos", library.len());

    let stdout = io::stdout();
    let mut player = Player::new(library, stdout.lock());

    let stdin = io::stdin();
    repl::run_session(stdin.lock(), &mut player)?;

    log::info!("Session ended");
    Ok(())
}
