//! The `configure` subcommand: persist CLI defaults.

use anyhow::Result;

use crate::config::Config;

pub fn handle(catalog: Option<String>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        print_config(&config);
        return Ok(());
    }

    let Some(source) = catalog else {
        println!("Nothing to do: pass --catalog <path-or-url> to set the default");
        println!("catalog source, or --show to display the current configuration.");
        return Ok(());
    };

    config.catalog = Some(source.clone());
    config.save()?;

    println!("Default catalog source set to {}", source);
    if let Ok(path) = Config::path() {
        println!("Config saved to {}", path.display());
    }

    Ok(())
}

fn print_config(config: &Config) {
    match config.catalog.as_deref() {
        Some(source) => println!("Catalog source: {}", source),
        None => println!("No catalog source configured"),
    }
    if let Ok(path) = Config::path() {
        println!("Config file: {}", path.display());
    }
}
