//! Catalog listing command handlers.

use anyhow::{Context, Result};

use crate::cli::OutputFormat;
use crate::fetch;
use crate::render::stat_cell;

/// Handle `mechbay catalog`: fetch, parse, and list every part with the
/// index a build link would use to select it.
pub fn handle(catalog: Option<&str>, format: OutputFormat) -> Result<()> {
    let source = super::catalog_source(catalog)?;
    let text = fetch::fetch_catalog(&source)?;
    let parsed = mechbay::catalog::parse(&text)
        .with_context(|| format!("Failed to parse catalog from {}", source))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&parsed)?);
        }
        OutputFormat::Table => {
            println!("{} parts ({} columns)", parsed.len(), parsed.headers.len());
            println!();
            for (index, part) in parsed.parts.iter().enumerate() {
                println!(
                    "{:>5}  {:<32}  {:<12}  EN {:>8}  WT {:>10}",
                    index,
                    part.name(),
                    part.kind(),
                    stat_cell(part.en_load),
                    stat_cell(part.weight)
                );
            }
        }
    }

    Ok(())
}
