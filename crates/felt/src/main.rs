use anyhow::Context;
use chipwheel::{Dock, SkinKind};
use clap::Parser;
use felt::config;
use felt::gui::app::{AppInit, AppModel, Overrides};
use felt::sys::runtime;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "felt", version, about, long_about = None)]
struct Cli {
    /// Configuration file to use instead of the per-user one
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Corner to dock the wheel to (br, bl, tr, tl)
    #[arg(short = 'd', long)]
    dock: Option<Dock>,

    /// Wheel skin (poker, glass)
    #[arg(short = 's', long)]
    skin: Option<SkinKind>,

    /// Write the default configuration file, print its path and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path =
        config::resolve_path(cli.config.as_deref()).context("No configuration location")?;

    if cli.write_default_config {
        let path = config::write_default_config(&config_path)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default(&config_path);

    let (tx, rx) = async_channel::bounded(32);
    runtime::start_background_services(tx, config_path.clone());

    // clap already consumed the command line
    let app = RelmApp::new("org.felt.club").with_args(Vec::new());

    app.run::<AppModel>(AppInit {
        config,
        overrides: Overrides {
            dock: cli.dock,
            skin: cli.skin,
        },
        config_path,
        events: rx,
    });
    Ok(())
}
