//! Render sink for resolved builds.
//!
//! The sink is the single boundary the request pipeline writes results to:
//! the terminal analog of a results container, error banner, and loading
//! indicator. Each request starts fresh against its own sink, so concurrent
//! or repeated runs never share render state.

use mechbay::Assembly;
use serde::Serialize;

/// A display-ready view of a resolved build. Cells are pre-formatted so
/// individual sinks never re-derive number formatting.
#[derive(Debug, Clone, Serialize)]
pub struct AssemblyView {
    pub parts: Vec<PartView>,
    pub total_en_load: String,
    pub total_weight: String,
}

/// One selected part, formatted for display.
#[derive(Debug, Clone, Serialize)]
pub struct PartView {
    pub name: String,
    pub kind: String,
    pub en_load: String,
    pub weight: String,
}

impl AssemblyView {
    pub fn from_assembly(assembly: &Assembly) -> Self {
        let parts = assembly
            .parts
            .iter()
            .map(|part| PartView {
                name: part.name().to_string(),
                kind: part.kind().to_string(),
                en_load: stat_cell(part.en_load),
                weight: stat_cell(part.weight),
            })
            .collect();

        Self {
            parts,
            total_en_load: format!("{:.1}", assembly.total_en_load),
            total_weight: format!("{:.1}", assembly.total_weight),
        }
    }
}

/// Stats display to one decimal place; an absent stat displays as `N/A`.
pub fn stat_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", v),
        None => "N/A".to_string(),
    }
}

/// Where one request's lifecycle lands: loading indicator, results, error
/// region.
pub trait RenderSink {
    fn loading(&mut self);
    fn success(&mut self, view: &AssemblyView);
    fn failure(&mut self, message: &str);
}

/// Aligned-text renderer for terminals.
#[derive(Debug, Default)]
pub struct TableSink;

impl RenderSink for TableSink {
    fn loading(&mut self) {
        eprintln!("Loading catalog...");
    }

    fn success(&mut self, view: &AssemblyView) {
        let name_width = column_width(view.parts.iter().map(|p| p.name.len()), "Name".len());
        let kind_width = column_width(view.parts.iter().map(|p| p.kind.len()), "Kind".len());

        println!(
            "{:<name_width$}  {:<kind_width$}  {:>8}  {:>10}",
            "Name", "Kind", "EN Load", "Weight"
        );
        for part in &view.parts {
            println!(
                "{:<name_width$}  {:<kind_width$}  {:>8}  {:>10}",
                part.name, part.kind, part.en_load, part.weight
            );
        }
        println!();
        println!("Total EN load: {}", view.total_en_load);
        println!("Total weight:  {}", view.total_weight);
    }

    fn failure(&mut self, message: &str) {
        eprintln!("Error: {}", message);
    }
}

fn column_width(lengths: impl Iterator<Item = usize>, minimum: usize) -> usize {
    lengths.fold(minimum, usize::max)
}

/// JSON renderer. The loading indicator is a no-op so stdout stays
/// machine-readable.
#[derive(Debug, Default)]
pub struct JsonSink;

impl RenderSink for JsonSink {
    fn loading(&mut self) {}

    fn success(&mut self, view: &AssemblyView) {
        // Serializing strings and vectors of strings cannot fail
        println!(
            "{}",
            serde_json::to_string_pretty(view).unwrap_or_default()
        );
    }

    fn failure(&mut self, message: &str) {
        println!("{}", serde_json::json!({ "error": message }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechbay::catalog;

    #[test]
    fn test_stat_cell_formatting() {
        assert_eq!(stat_cell(Some(10.0)), "10.0");
        assert_eq!(stat_cell(Some(3.25)), "3.2");
        assert_eq!(stat_cell(Some(0.0)), "0.0");
        assert_eq!(stat_cell(None), "N/A");
    }

    #[test]
    fn test_view_formats_parts_and_totals() {
        let parsed = catalog::parse(
            "Name,Kind,ENLoad,Weight\r\n\
             Leg,Light,10,5\r\n\
             Blade,Melee,N/A,120\r\n",
        )
        .unwrap();
        let assembly = mechbay::resolve(&[0, 1], &parsed);
        let view = AssemblyView::from_assembly(&assembly);

        assert_eq!(view.parts.len(), 2);
        assert_eq!(view.parts[0].en_load, "10.0");
        assert_eq!(view.parts[1].en_load, "N/A");
        assert_eq!(view.total_en_load, "10.0");
        assert_eq!(view.total_weight, "125.0");
    }
}
