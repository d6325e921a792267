//! Orbit Todo - A voice-driven to-do starfield for the terminal

mod app;
mod input_utils;
mod todo;
mod ui;
mod voice;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "orbit-todo")]
#[command(about = "A voice-driven to-do starfield for the terminal")]
#[command(version)]
struct Args {
    /// Language hint for voice transcription (e.g., en, de, fr)
    #[arg(short, long, default_value = "en")]
    language: String,

    /// Trigger phrase for adding items by voice
    #[arg(short, long, default_value = "add todo")]
    trigger: String,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Run the app
    let mut app = app::App::new(args.language, args.trigger)?;
    app.run().await
}
