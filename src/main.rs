//! `madlibs`: play one round of Mad Libs in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::Level;

use mad_libs::config::{GameConfig, DEFAULT_STORIES_PATH};
use mad_libs::core::session::{Game, INTERRUPT_MESSAGE};
use mad_libs::core::style::{set_color_enabled, DEFAULT_TITLE_WIDTH};
use mad_libs::core::wrap::DEFAULT_WIDTH;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Story catalog file (.json or .ron).
    #[arg(long, default_value = DEFAULT_STORIES_PATH)]
    stories: PathBuf,

    /// Column width the finished story is wrapped to.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Width of the title banners.
    #[arg(long, default_value_t = DEFAULT_TITLE_WIDTH)]
    title_width: usize,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    /// Fixed seed for story selection. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn config(&self) -> GameConfig {
        GameConfig {
            stories_path: self.stories.clone(),
            wrap_width: self.width,
            title_width: self.title_width,
            color: !self.no_color,
            seed: self.seed,
        }
    }

    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() {
    let args = Args::parse();
    let palette = set_color_enabled(!args.no_color);

    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(!args.no_color)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("{} {:#}", palette.error("Error:"), e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    // The game writes through an unlocked stdout, so the handler can print
    // while the main thread is blocked on a read.
    ctrlc::set_handler(|| {
        println!("\n{}", INTERRUPT_MESSAGE);
        std::process::exit(0);
    })
    .context("failed to install Ctrl-C handler")?;

    let config = args.config();
    config.validate()?;

    let mut game = Game::builder()
        .config(&config)
        .build()
        .with_context(|| format!("could not start a game from '{}'", config.stories_path.display()))?;

    game.play(io::stdin().lock(), io::stdout())?;
    Ok(())
}
