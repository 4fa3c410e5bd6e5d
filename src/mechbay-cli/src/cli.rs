//! CLI argument definitions for mechbay
//!
//! All clap-derived structs and enums for CLI parsing.

use clap::{Parser, Subcommand};

/// Output format for rendered results
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "mechbay")]
#[command(about = "Mech build share-link viewer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a build share link and display the selected parts
    #[command(visible_alias = "s")]
    Show {
        /// Share URL carrying a `build` query parameter
        url: String,

        /// Treat the argument as a raw `build` value instead of a URL
        #[arg(long)]
        raw: bool,

        /// Catalog source: file path or http(s) URL (overrides the
        /// configured default)
        #[arg(short, long)]
        catalog: Option<String>,

        /// Output format: table (default), json
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// List the parts catalog with build indices
    #[command(visible_alias = "l")]
    Catalog {
        /// Catalog source: file path or http(s) URL (overrides the
        /// configured default)
        #[arg(short, long)]
        catalog: Option<String>,

        /// Output format: table (default), json
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set the default catalog source (file path or http(s) URL)
        #[arg(long)]
        catalog: Option<String>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
