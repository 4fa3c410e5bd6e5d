//! Build share-link display pipeline.

use anyhow::{Context, Result};

use crate::cli::OutputFormat;
use crate::fetch;
use crate::render::{AssemblyView, JsonSink, RenderSink, TableSink};

/// Outcome of one request run, for callers that need to tell an empty
/// render apart from a displayed build.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The URL carried no build parameter; nothing was rendered.
    NoBuild,
    /// A build was rendered, though possibly with zero matched parts.
    Rendered,
}

/// Handle `mechbay show`.
pub fn handle(url: &str, raw: bool, catalog: Option<&str>, format: OutputFormat) -> Result<()> {
    let source = super::catalog_source(catalog)?;

    let mut sink: Box<dyn RenderSink> = match format {
        OutputFormat::Table => Box::new(TableSink),
        OutputFormat::Json => Box::new(JsonSink),
    };

    if run_request(url, raw, &source, sink.as_mut())? == Outcome::NoBuild {
        println!("URL carries no build parameter - nothing to display");
    }

    Ok(())
}

/// Run one fetch-then-resolve-then-render request to completion.
///
/// Everything a run needs comes in as arguments and its only output goes to
/// `sink`, so repeated or interleaved runs share no state. An error at any
/// stage aborts the rest of the run and becomes the request's single
/// user-visible message.
pub fn run_request(
    url: &str,
    raw: bool,
    source: &str,
    sink: &mut dyn RenderSink,
) -> Result<Outcome> {
    let indices = if raw {
        Some(mechbay::parse_build_param(url)?)
    } else {
        mechbay::parse_share_url(url)?
    };
    let Some(indices) = indices else {
        return Ok(Outcome::NoBuild);
    };

    sink.loading();

    let text = fetch::fetch_catalog(source)?;
    let catalog = mechbay::catalog::parse(&text)
        .with_context(|| format!("Failed to parse catalog from {}", source))?;

    let assembly = mechbay::resolve(&indices, &catalog);
    if !assembly.any_found {
        sink.failure("no build index matched a catalog entry");
        return Ok(Outcome::Rendered);
    }

    sink.success(&AssemblyView::from_assembly(&assembly));
    Ok(Outcome::Rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    /// Sink that records the calls made against it, in order.
    #[derive(Default)]
    struct RecordingSink {
        loading_count: usize,
        successes: Vec<AssemblyView>,
        failures: Vec<String>,
    }

    impl RenderSink for RecordingSink {
        fn loading(&mut self) {
            self.loading_count += 1;
        }

        fn success(&mut self, view: &AssemblyView) {
            self.successes.push(view.clone());
        }

        fn failure(&mut self, message: &str) {
            self.failures.push(message.to_string());
        }
    }

    fn catalog_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "No.,Name,Kind,ENLoad,Weight\r\n\
             1,Leg,Light,10,5\r\n\
             2,Core,Medium,320,12890\r\n"
        )
        .unwrap();
        file
    }

    #[test]
    fn test_full_request_renders_build() {
        let file = catalog_file();
        let source = file.path().to_str().unwrap().to_string();
        let mut sink = RecordingSink::default();

        let outcome = run_request(
            "https://mechbay.example/view?build=0-1",
            false,
            &source,
            &mut sink,
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Rendered);
        assert_eq!(sink.loading_count, 1);
        assert_eq!(sink.successes.len(), 1);
        assert!(sink.failures.is_empty());

        let view = &sink.successes[0];
        assert_eq!(view.parts.len(), 2);
        assert_eq!(view.total_en_load, "330.0");
        assert_eq!(view.total_weight, "12895.0");
    }

    #[test]
    fn test_url_without_build_renders_nothing() {
        let file = catalog_file();
        let source = file.path().to_str().unwrap().to_string();
        let mut sink = RecordingSink::default();

        let outcome =
            run_request("https://mechbay.example/view", false, &source, &mut sink).unwrap();

        assert_eq!(outcome, Outcome::NoBuild);
        assert_eq!(sink.loading_count, 0);
        assert!(sink.successes.is_empty());
        assert!(sink.failures.is_empty());
    }

    #[test]
    fn test_no_matching_index_uses_error_region() {
        let file = catalog_file();
        let source = file.path().to_str().unwrap().to_string();
        let mut sink = RecordingSink::default();

        let outcome = run_request(
            "https://mechbay.example/view?build=5",
            false,
            &source,
            &mut sink,
        )
        .unwrap();

        assert_eq!(outcome, Outcome::Rendered);
        assert!(sink.successes.is_empty());
        assert_eq!(sink.failures.len(), 1);
    }

    #[test]
    fn test_raw_build_value() {
        let file = catalog_file();
        let source = file.path().to_str().unwrap().to_string();
        let mut sink = RecordingSink::default();

        let outcome = run_request("1", true, &source, &mut sink).unwrap();

        assert_eq!(outcome, Outcome::Rendered);
        assert_eq!(sink.successes[0].parts[0].name, "Core");
    }

    #[test]
    fn test_bad_index_aborts_before_fetch() {
        let mut sink = RecordingSink::default();

        let result = run_request(
            "https://mechbay.example/view?build=1-x-2",
            false,
            "/nonexistent/parts.txt",
            &mut sink,
        );

        // The URL fails first; the missing catalog is never touched
        assert!(result.is_err());
        assert_eq!(sink.loading_count, 0);
    }

    #[test]
    fn test_unparsable_catalog_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "\r\n\r\n").unwrap();
        let source = file.path().to_str().unwrap().to_string();
        let mut sink = RecordingSink::default();

        let result = run_request(
            "https://mechbay.example/view?build=0",
            false,
            &source,
            &mut sink,
        );

        assert!(result.is_err());
        assert!(sink.successes.is_empty());
    }
}
