use circlemenu::config::{self, SourceMode};
use circlemenu::gui::app::{AppInit, AppModel};
use circlemenu::sys::runtime;
use clap::Parser;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "circlemenu", version, about, long_about = None)]
struct Cli {
    /// Config file to read and watch (defaults to the user config directory)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Populate the menu through the adapter or from parallel icon/label arrays
    #[arg(short = 'm', long)]
    mode: Option<SourceMode>,

    /// Write the default config file if none exists, print its path and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => config::resolve_config_path(&path)?,
        None => config::get_config_path()?,
    };

    if cli.init_config {
        let path = config::write_default_config(&config_path)?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = config::load_or_default(&config_path);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(config_path.clone(), tx);

    let app = RelmApp::new("org.silion.circlemenu").with_args(Vec::new());

    app.run::<AppModel>(AppInit {
        config,
        config_path,
        mode: cli.mode,
        events: rx,
    });
    Ok(())
}
