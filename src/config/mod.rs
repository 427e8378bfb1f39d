use crate::config::cli::Args;
use crate::error::Result;
use clap::Parser;
use tracing::info;

pub(crate) mod cli;

pub struct Config {
    pub args: Args,
}

impl Config {
    pub fn new() -> Result<Self> {
        Ok(Self {
            args: Args::parse(),
        })
    }

    pub fn ensure_directories(&self) -> Result<()> {
        if !self.args.data_dir.exists() {
            std::fs::create_dir_all(&self.args.data_dir)?;
        }

        info!("Data dir exists");
        Ok(())
    }
}
