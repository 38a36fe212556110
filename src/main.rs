use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use huemix::config::{Config, ConfigStore};
use huemix::{logging, ui};

#[derive(Debug, Parser)]
#[command(name = "huemix", version, about = "Terminal RGB color mixer")]
struct Cli {
    /// Path to the config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file (also honored via the HUEMIX_LOG env var).
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Redraw tick rate in milliseconds.
    #[arg(long)]
    tick_rate: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref());

    let path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&path).context("loading configuration")?;
    if let Some(tick_rate) = cli.tick_rate {
        config.defaults.tick_rate_ms = tick_rate;
    }
    config.validate().context("validating configuration")?;

    let store = ConfigStore::new(config, path);
    ui::run(store).context("running UI")?;
    Ok(())
}
