//! Build share-link parsing.
//!
//! A build is an ordered list of catalog indices packed into the `build`
//! query parameter as hyphen-separated base-10 integers, e.g.
//! `https://mechbay.example/view?build=0-13-27`. Duplicates are allowed;
//! range checks happen at resolution time, not here.

use url::Url;

/// Query parameter carrying the build indices.
pub const BUILD_PARAM: &str = "build";

/// Errors that can occur while parsing a share link
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("invalid share URL: {0}")]
    InvalidUrl(String),

    #[error("invalid build index '{segment}' - expected a base-10 integer")]
    InvalidIndex { segment: String },
}

/// Parse a share URL and extract its build indices.
///
/// Returns `Ok(None)` when the URL carries no `build` query parameter, or
/// an empty one - the caller should render nothing rather than report an
/// error. Only the query is consulted; a `build=` inside the fragment is
/// not a query parameter.
pub fn parse_share_url(url: &str) -> Result<Option<Vec<i64>>, BuildError> {
    let parsed = Url::parse(url).map_err(|err| BuildError::InvalidUrl(err.to_string()))?;

    let value = parsed
        .query_pairs()
        .find_map(|(key, value)| (key == BUILD_PARAM).then(|| value.into_owned()));

    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => parse_build_param(value).map(Some),
    }
}

/// Parse a raw `build` parameter value into catalog indices.
///
/// Integer validation is strict: fractional segments are rejected rather
/// than truncated, and an empty segment (from a doubled or trailing hyphen)
/// is named as-is in the error. Out-of-range values (including negatives)
/// pass through and are skipped at resolution time.
pub fn parse_build_param(value: &str) -> Result<Vec<i64>, BuildError> {
    value
        .split('-')
        .map(|segment| {
            segment.parse::<i64>().map_err(|_| BuildError::InvalidIndex {
                segment: segment.to_string(),
            })
        })
        .collect()
}
