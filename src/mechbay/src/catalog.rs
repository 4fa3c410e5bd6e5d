//! Parts catalog parsing.
//!
//! The catalog is comma-delimited text: the first line is the header
//! (optionally prefixed by a `No.` row-number column), each subsequent line
//! is one part's fields in header order. Columns are dynamic apart from the
//! two stat columns, which parse to numbers.

use std::collections::HashMap;

use serde::Serialize;

/// Header name of the EN load stat column.
pub const EN_LOAD_COLUMN: &str = "ENLoad";

/// Header name of the weight stat column.
pub const WEIGHT_COLUMN: &str = "Weight";

/// Header marker for the row-number column. It carries no part data and is
/// dropped from the header list; when it leads the header line, every data
/// row starts with a row number that must be skipped too.
const ROW_NUMBER_COLUMN: &str = "No.";

/// Errors that can occur while parsing a catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is empty - no non-blank lines")]
    EmptyInput,

    #[error("catalog header contains no data columns")]
    NoHeader,

    #[error("catalog has data lines but no row survived parsing")]
    NoValidRows,
}

/// One part, keyed by the catalog's header names.
///
/// The stat columns are pulled out as numbers; everything else stays as
/// trimmed text, possibly empty. A stat is `None` when its field was blank
/// or unparsable - `NaN` never reaches callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PartRecord {
    /// EN load stat, absent when blank or unparsable.
    pub en_load: Option<f64>,

    /// Weight stat, absent when blank or unparsable.
    pub weight: Option<f64>,

    /// Every non-stat column, keyed by header name.
    pub fields: HashMap<String, String>,
}

impl PartRecord {
    /// Look up a text column by header name.
    pub fn field(&self, header: &str) -> Option<&str> {
        self.fields.get(header).map(String::as_str)
    }

    /// The `Name` column, or `""` if the catalog has no such column.
    pub fn name(&self) -> &str {
        self.field("Name").unwrap_or("")
    }

    /// The `Kind` column, or `""` if the catalog has no such column.
    pub fn kind(&self) -> &str {
        self.field("Kind").unwrap_or("")
    }
}

/// A parsed catalog: header names in source order plus one record per
/// surviving data line. A part's position in `parts` is its only identity -
/// build links index into this sequence.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub headers: Vec<String>,
    pub parts: Vec<PartRecord>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PartRecord> {
        self.parts.get(index)
    }
}

/// Parse catalog text into part records.
///
/// Rows shorter than the header are skipped with a warning; a stat field
/// that fails to parse leaves that stat absent, also with a warning.
/// Neither aborts the parse. Fatal conditions are no input at all, a header
/// with no data columns, and data lines of which none survive.
pub fn parse(text: &str) -> Result<Catalog, CatalogError> {
    // Catalog lines are CRLF-terminated; splitting on `\n` and stripping the
    // trailing `\r` is equivalent and also tolerates LF-only files.
    let mut lines = text
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty());

    let header_line = lines.next().ok_or(CatalogError::EmptyInput)?;
    let raw_headers: Vec<&str> = header_line.split(',').map(str::trim).collect();

    // A leading row-number column means every data row carries one value
    // more than the header has data columns.
    let value_offset = usize::from(raw_headers.first() == Some(&ROW_NUMBER_COLUMN));
    let headers: Vec<String> = raw_headers
        .iter()
        .filter(|header| **header != ROW_NUMBER_COLUMN)
        .map(|header| (*header).to_string())
        .collect();

    if headers.is_empty() {
        return Err(CatalogError::NoHeader);
    }

    let mut parts = Vec::new();
    let mut data_lines = 0usize;

    for (row, line) in lines.enumerate() {
        data_lines += 1;
        let values: Vec<&str> = line.split(',').map(str::trim).collect();
        let values = &values[value_offset.min(values.len())..];

        if values.len() < headers.len() {
            tracing::warn!(
                row = row + 1,
                expected = headers.len(),
                got = values.len(),
                "skipping short catalog row"
            );
            continue;
        }

        let mut record = PartRecord::default();
        for (header, value) in headers.iter().zip(values.iter().copied()) {
            match header.as_str() {
                EN_LOAD_COLUMN => record.en_load = parse_stat(header, value, row + 1),
                WEIGHT_COLUMN => record.weight = parse_stat(header, value, row + 1),
                _ => {
                    record.fields.insert(header.clone(), value.to_string());
                }
            }
        }
        parts.push(record);
    }

    if parts.is_empty() && data_lines > 0 {
        return Err(CatalogError::NoValidRows);
    }

    Ok(Catalog { headers, parts })
}

/// Parse one stat field. Blank means the part has no such stat; any other
/// value that fails to parse as a finite float is treated the same way but
/// logged, since it usually means a malformed catalog row.
fn parse_stat(header: &str, value: &str, row: usize) -> Option<f64> {
    if value.is_empty() {
        return None;
    }
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Some(parsed),
        _ => {
            tracing::warn!(row, column = header, value, "non-numeric stat field");
            None
        }
    }
}
