//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for polyintern
#[derive(Parser, Debug)]
#[command(name = "polyintern")]
#[command(version, about = "PolyIntern - internship placement portal for the terminal")]
#[command(long_about = r#"
PolyIntern is a terminal portal for an internship-placement service: browse
the four internship domains, read their details, register with an in-form
validated application, or let the scripted assistant walk you through the
same steps as a conversation.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./polyintern.toml   Project-level config
3. ~/.config/polyintern/config.toml   Global config

Example:
  polyintern
  polyintern -vv
  polyintern --config ./demo.toml
"#)]
pub struct Cli {
    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
