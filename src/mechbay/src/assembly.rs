//! Build resolution and stat aggregation.

use serde::Serialize;

use crate::catalog::{Catalog, PartRecord};

/// A resolved build: the selected parts in request order plus the summed
/// stats at full precision. Rounding for display happens at the render
/// boundary, not here.
#[derive(Debug, Clone, Serialize)]
pub struct Assembly {
    pub parts: Vec<PartRecord>,
    pub total_en_load: f64,
    pub total_weight: f64,

    /// True iff at least one requested index resolved to a catalog entry.
    pub any_found: bool,
}

/// Resolve build indices against a catalog and sum the stat columns.
///
/// Out-of-range indices (including negative ones) are skipped with a
/// warning; a duplicate index selects the same part again and counts its
/// stats again. Absent stats contribute zero without affecting `any_found`.
pub fn resolve(indices: &[i64], catalog: &Catalog) -> Assembly {
    let mut assembly = Assembly {
        parts: Vec::new(),
        total_en_load: 0.0,
        total_weight: 0.0,
        any_found: false,
    };

    for &index in indices {
        let record = usize::try_from(index).ok().and_then(|i| catalog.get(i));
        let Some(record) = record else {
            tracing::warn!(index, catalog_len = catalog.len(), "build index out of range");
            continue;
        };

        assembly.any_found = true;
        if let Some(en_load) = record.en_load {
            assembly.total_en_load += en_load;
        }
        if let Some(weight) = record.weight {
            assembly.total_weight += weight;
        }
        assembly.parts.push(record.clone());
    }

    assembly
}
