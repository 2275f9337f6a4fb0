//! The URL component model.
//!
//! [`UrlComponents`] stores the five modeled parts of a URL (scheme, host,
//! port, path, query) as plain strings. Parts a URL does not carry stay
//! empty, getters never return an absent value, and every setter returns
//! `&mut Self` so mutations chain.

mod build;
mod parse;
mod path;
mod port;

pub use parse::ParseUrlError;
pub use port::PortValue;

use crate::query;

/// A mutable, structured view over a URL string.
///
/// Construction parses best-effort: input that does not parse as a URL
/// yields an instance with every part unset rather than an error (use the
/// [`FromStr`](std::str::FromStr) impl when a parse failure should surface).
/// Fragment and user-info are not modeled and are dropped on parse.
///
/// # Examples
///
/// ```
/// use urlsmith_core::UrlComponents;
///
/// let mut url = UrlComponents::new("http://www.example.com:8000/abc/def?ref=testcase");
/// assert_eq!(url.slugs(), ["abc", "def"]);
///
/// url.set_port(None::<u16>).set_path("ghi/");
/// assert_eq!(url.build(), "http://www.example.com/ghi?ref=testcase");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlComponents {
    scheme: String,
    host: String,
    port: String,
    path: String,
    query: String,
}

impl UrlComponents {
    /// Parses `url` into components, best-effort.
    ///
    /// Parse semantics are the `url` crate's: the scheme is required,
    /// scheme and host come back lowercased, and a port equal to the
    /// scheme's default is treated as absent. On any parse failure this
    /// returns the all-empty instance instead of failing.
    pub fn new(url: &str) -> Self {
        match url.parse() {
            Ok(components) => components,
            Err(err) => {
                tracing::debug!(url, error = %err, "input did not parse; starting from empty components");
                Self::default()
            }
        }
    }

    /// The scheme, or `""` when unset.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Replaces the scheme, stored verbatim.
    pub fn set_scheme(&mut self, scheme: impl Into<String>) -> &mut Self {
        self.scheme = scheme.into();
        self
    }

    /// The host, or `""` when unset.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Replaces the host, stored verbatim.
    pub fn set_host(&mut self, host: impl Into<String>) -> &mut Self {
        self.host = host.into();
        self
    }

    /// The port as text, or `""` when unset.
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Replaces the port with the string form of `port`.
    ///
    /// Accepts numbers, strings, or `None` (which clears the port, as does
    /// an empty string). The value is not range-checked.
    pub fn set_port(&mut self, port: impl Into<PortValue>) -> &mut Self {
        self.port = port.into().into_string();
        self
    }

    /// The path, or `"/"` when unset.
    pub fn path(&self) -> &str {
        if self.path.is_empty() {
            "/"
        } else {
            &self.path
        }
    }

    /// Replaces the path, normalized to one leading `/` and no trailing
    /// `/`. Empty or all-slash input becomes `"/"`.
    pub fn set_path(&mut self, path: &str) -> &mut Self {
        self.path = path::normalize(path);
        self
    }

    /// The `/`-separated segments of the current path, in order.
    ///
    /// The root path yields no slugs. Recomputed from the current path on
    /// every call.
    pub fn slugs(&self) -> Vec<String> {
        path::split_slugs(self.path())
    }

    /// Replaces the path with `slugs` joined by `/`, then normalized like
    /// [`set_path`](Self::set_path). An empty sequence yields `"/"`.
    pub fn set_slugs<I, S>(&mut self, slugs: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = path::join_slugs(slugs);
        self.set_path(&joined)
    }

    /// The raw query string without a leading `?`, or `""` when unset.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the raw query string; any leading `?` characters are
    /// stripped first.
    pub fn set_query(&mut self, query: &str) -> &mut Self {
        self.query = query.trim_start_matches('?').to_string();
        self
    }

    /// The query decoded into key/value pairs, in query-string order.
    ///
    /// Empty when the query is empty. Duplicate keys are kept as separate
    /// pairs; see [`crate::query`] for the decode semantics.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        query::decode_pairs(&self.query)
    }

    /// Replaces the query with `pairs`, form-encoded.
    pub fn set_query_pairs<I, K, V>(&mut self, pairs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let encoded = query::encode_pairs(pairs);
        self.set_query(&encoded)
    }

    /// Whether every part is unset (what construction from unparseable
    /// input yields).
    pub fn is_empty(&self) -> bool {
        self.scheme.is_empty()
            && self.host.is_empty()
            && self.port.is_empty()
            && self.path.is_empty()
            && self.query.is_empty()
    }
}
