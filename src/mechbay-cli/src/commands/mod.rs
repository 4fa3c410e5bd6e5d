//! Command handlers for the mechbay CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod catalog;
pub mod configure;
pub mod show;

use anyhow::{Context, Result};

use crate::config::Config;

/// Pick the catalog source for a command: an explicit `--catalog` flag wins,
/// otherwise the configured default.
fn catalog_source(flag: Option<&str>) -> Result<String> {
    if let Some(source) = flag {
        return Ok(source.to_string());
    }

    let config = Config::load()?;
    config
        .catalog
        .context("No catalog source: pass --catalog or run `mechbay configure --catalog <source>`")
}
