use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use corpuskit::{init_logging, replay, Config, Session, BUILD_DATE, VERSION};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay a corpus editing session and print the derived scene", long_about = None)]
struct Args {
    /// Session file (.json or .toml) listing the panel edits
    session: PathBuf,

    /// Config file (.json or .toml); defaults to the platform config location
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Print dimension-line labels after the scene
    #[arg(long)]
    labels: bool,

    /// Emit log events as JSON lines on stderr
    #[arg(long)]
    json_logs: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.json_logs)?;
    info!("corpuskit {} (built {})", VERSION, BUILD_DATE);

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load_or_default().context("Failed to load default config")?,
    };

    let session = Session::load(&args.session)?;
    let outcome = replay(&session, config.layout.clone());
    if outcome.rejected > 0 {
        warn!("{} edits were rejected", outcome.rejected);
    }

    let scene = outcome.scene();
    let json = if args.compact {
        scene.to_json()?
    } else {
        scene.to_json_pretty()?
    };
    println!("{}", json);

    if args.labels {
        for spacing in &scene.spacings {
            println!(
                "{:>8.1} .. {:>8.1}  {}",
                spacing.y_start,
                spacing.y_end,
                spacing.label(config.display.measurement_system)
            );
        }
    }

    Ok(())
}
