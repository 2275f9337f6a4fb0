//! Strict parsing of a URL string into components.
//!
//! [`UrlComponents::new`] wraps this and absorbs the error; the
//! [`FromStr`]/[`TryFrom`] impls expose it for callers that want the
//! failure.

use std::str::FromStr;
use thiserror::Error;

use super::UrlComponents;

/// Error from the strict parsing entry points.
///
/// Carries the underlying `url` crate error so the fallback path can say
/// why an input was refused (relative reference, empty host, bad port...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a parseable URL: {0}")]
pub struct ParseUrlError(#[from] url::ParseError);

impl FromStr for UrlComponents {
    type Err = ParseUrlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = url::Url::parse(s)?;
        Ok(UrlComponents {
            scheme: parsed.scheme().to_string(),
            host: parsed.host_str().unwrap_or("").to_string(),
            port: parsed.port().map(|p| p.to_string()).unwrap_or_default(),
            path: parsed.path().to_string(),
            query: parsed.query().unwrap_or("").to_string(),
        })
    }
}

impl TryFrom<&str> for UrlComponents {
    type Error = ParseUrlError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
