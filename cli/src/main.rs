//! CLI entrypoint for PolyIntern
//!
//! Parses arguments, initializes logging, loads configuration, and runs
//! the terminal interface.

use anyhow::Result;
use clap::Parser;
use polyintern_presentation::{Cli, ConfigLoader, TuiApp};
use tracing::info;
use tracing_subscriber::EnvFilter;

// Everything runs on one thread; the event loop multiplexes terminal
// events and timers with select!.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    info!("Starting PolyIntern");

    let mut app = TuiApp::new(config);
    app.run().await?;

    Ok(())
}
