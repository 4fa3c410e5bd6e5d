mod cli;
mod commands;
mod config;
mod fetch;
mod render;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::*;

/// Default log filter: row-level catalog problems and out-of-range build
/// indices are warnings and should be visible without RUST_LOG set.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            url,
            raw,
            catalog,
            format,
        } => {
            commands::show::handle(&url, raw, catalog.as_deref(), format)?;
        }

        Commands::Catalog { catalog, format } => {
            commands::catalog::handle(catalog.as_deref(), format)?;
        }

        Commands::Configure { catalog, show } => {
            commands::configure::handle(catalog, show)?;
        }
    }

    Ok(())
}
