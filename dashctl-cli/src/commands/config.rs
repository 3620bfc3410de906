use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::DashctlConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective config as TOML
    Show,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Path => {
            println!("{}", DashctlConfig::config_path().display());
        }
        ConfigCommands::Show => {
            let config = DashctlConfig::load()?;
            let toml_str =
                toml::to_string_pretty(&config).context("Failed to serialize config to TOML")?;
            print!("{}", toml_str);
        }
    }
    Ok(())
}
