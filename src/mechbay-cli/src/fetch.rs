//! Catalog retrieval.
//!
//! The catalog source is either a filesystem path or an http(s) URL. The
//! fetch runs once per request and results are never cached across runs.

use anyhow::{bail, Context, Result};
use std::fs;

/// Fetch raw catalog text from a path or URL.
pub fn fetch_catalog(source: &str) -> Result<String> {
    tracing::debug!(source, "fetching catalog");
    if source.starts_with("http://") || source.starts_with("https://") {
        fetch_remote(source)
    } else {
        fs::read_to_string(source)
            .with_context(|| format!("Failed to read catalog from {}", source))
    }
}

fn fetch_remote(url: &str) -> Result<String> {
    match ureq::get(url).call() {
        Ok(response) => response
            .into_string()
            .with_context(|| format!("Failed to read catalog body from {}", url)),
        Err(ureq::Error::Status(code, _)) => {
            bail!("Catalog fetch failed: {} returned status {}", url, code)
        }
        Err(err) => Err(err).with_context(|| format!("Catalog fetch failed: {}", url)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_fetch_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Name,ENLoad,Weight\r\nLeg,10,5\r\n").unwrap();

        let text = fetch_catalog(file.path().to_str().unwrap()).unwrap();
        assert!(text.starts_with("Name,ENLoad,Weight"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = fetch_catalog("/nonexistent/parts.txt");
        assert!(result.is_err());
    }
}
