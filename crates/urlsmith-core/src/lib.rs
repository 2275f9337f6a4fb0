//! Parse a URL into its components, mutate them, and rebuild the string.
//!
//! The entry point is [`UrlComponents`]: a mutable, structured view over an
//! otherwise opaque URL string, convenient for deriving variant URLs from a
//! base template.
//!
//! ```
//! use urlsmith_core::UrlComponents;
//!
//! let mut url = UrlComponents::new("https://api.example.com/v1/search?limit=20");
//! url.set_host("staging.example.com").set_query_pairs([("q", "rust")]);
//! assert_eq!(url.build(), "https://staging.example.com/v1/search?q=rust");
//! ```

pub mod components;
pub mod config;
pub mod logging;
pub mod query;

pub use components::{ParseUrlError, PortValue, UrlComponents};
