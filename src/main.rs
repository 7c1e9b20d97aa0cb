use anyhow::Result;
use blockart::RenderOptions;
use clap::Parser;
use std::path::PathBuf;

/// Print an image to the terminal as truecolor block-character art.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Image file to render (JPEG, PNG, GIF, BMP, TIFF, WebP, ...)
    path: PathBuf,
}

fn main() -> Result<()> {
    // logs go to stderr so they never end up inside the frame
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    blockart::run(&args.path, &RenderOptions::default())?;
    Ok(())
}
