use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Terminal storefront with a persistent shopping cart.
#[derive(Debug, Clone, Parser)]
#[command(name = "shopcart", version, about)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Storage file holding the persisted cart
    #[arg(long, value_name = "PATH")]
    pub storage: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Discard the persisted cart before starting
    #[arg(long)]
    pub reset: bool,
}

impl Cli {
    /// Command-line paths take precedence over the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(storage) = &self.storage {
            config.storage.path = Some(storage.clone());
        }
        if let Some(log_file) = &self.log_file {
            config.logging.file = Some(log_file.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_paths() {
        let cli = Cli::parse_from(["shopcart", "--storage", "/tmp/cart.json", "--reset"]);
        assert!(cli.reset);

        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.storage.path, Some(PathBuf::from("/tmp/cart.json")));
        assert_eq!(config.logging.file, None);
    }
}
