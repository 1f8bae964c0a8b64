use anyhow::{bail, Context};
use clap::Parser;
use shopcart::cart::CartStore;
use shopcart::catalog::Catalog;
use shopcart::cli::Cli;
use shopcart::config::Config;
use shopcart::logging::init_tracing;
use shopcart::shutdown::ShutdownCoordinator;
use shopcart::storage::{JsonFileStore, KeyValueCartStorage, KeyValueStore};
use shopcart::ui::runtime;
use std::fs;
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("failed to load config")?;
    cli.apply(&mut config);
    config.validate()?;

    let log_path = init_tracing(&config.logging).context("failed to open log file")?;
    tracing::info!(log = %log_path.display(), version = env!("CARGO_PKG_VERSION"), "starting");

    let shutdown = ShutdownCoordinator::new();
    shutdown
        .register_signals()
        .context("failed to register signal handlers")?;

    let file_store = JsonFileStore::new(config.storage.resolved_path());
    if cli.reset {
        reset_storage(&file_store, &config.storage.key)?;
    }
    let storage = KeyValueCartStorage::with_key(file_store, config.storage.key.clone());

    let store = match CartStore::open(Catalog::builtin(), Box::new(storage)) {
        Ok(store) => store,
        Err(err) if err.is_corrupt() => {
            tracing::error!(error = %err, "stored cart is unusable");
            bail!("{err}\nRun with --reset to discard the stored cart.");
        }
        Err(err) => return Err(err).context("failed to open cart storage"),
    };

    runtime::run(&config, store, &shutdown)?;
    shutdown.signal();
    Ok(())
}

/// Drop the stored cart. An unreadable storage file is deleted outright.
fn reset_storage(store: &JsonFileStore, key: &str) -> anyhow::Result<()> {
    match store.remove(key) {
        Ok(()) => {
            tracing::info!(key, "stored cart discarded");
            Ok(())
        }
        Err(err) if err.is_corrupt() => {
            tracing::warn!(error = %err, "removing unreadable storage file");
            match fs::remove_file(store.path()) {
                Err(io_err) if io_err.kind() != io::ErrorKind::NotFound => Err(io_err)
                    .with_context(|| format!("failed to remove {}", store.path().display())),
                _ => Ok(()),
            }
        }
        Err(err) => Err(err).context("failed to reset cart storage"),
    }
}
