use anyhow::Context;
use clap::Parser;
use std::time::SystemTime;

use chirp::cli::Args;
use chirp::config::{Config, ConfigStore};
use chirp::store::{SeedData, StoreHandle};
use chirp::{logging, ui};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(args.log_file.as_deref(), args.log_level.as_deref())?;

    let (config, config_path) = match args.config {
        Some(path) => (
            Config::load_from(&path).context("failed to load config")?,
            path,
        ),
        None => (
            Config::load().context("failed to load config")?,
            Config::config_path(),
        ),
    };
    let config = ConfigStore::new(config, config_path);

    let seed = match &args.seed {
        Some(path) => SeedData::from_path(path).context("failed to load seed fixture")?,
        None => SeedData::bundled(),
    };

    let stores = StoreHandle::detached();
    stores.initialize(seed.into_stores(SystemTime::now()));
    tracing::info!(posts = stores.posts().len(), "starting");

    ui::runtime::run(stores, config).context("UI loop failed")?;
    Ok(())
}
