use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigError};
use crate::logging::LOG_ENV_VAR;

#[derive(Debug, Parser)]
#[command(name = "mvp-counter", version, about = "Model-View-Presenter counter example")]
pub struct Cli {
    /// Path to a config file (default: ~/.config/mvp-counter/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read commands from stdin instead of opening the terminal UI
    #[arg(long)]
    pub headless: bool,

    /// Write logs to this file (timestamp and pid are appended)
    #[arg(long, value_name = "PATH", env = LOG_ENV_VAR)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Loads the config named by `--config`, or the default one.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }
}
