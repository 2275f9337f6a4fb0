//! Reassembly of components into a URL string.

use std::fmt;

use super::UrlComponents;

impl UrlComponents {
    /// Rebuilds the absolute form: `scheme://host[:port][path][?query]`.
    ///
    /// A bare root path is omitted (`http://example.com`, not
    /// `http://example.com/`) unless a query follows, which keeps the `?`
    /// off the authority: `http://example.com/?k=v`.
    pub fn build(&self) -> String {
        self.assemble(true)
    }

    /// Rebuilds the relative form: `path[?query]`, never scheme, host, or
    /// port. The path is always present, so the result is at least `"/"`.
    pub fn build_relative(&self) -> String {
        self.assemble(false)
    }

    fn assemble(&self, absolute: bool) -> String {
        let port = self.port();
        let query = self.query();
        let path = self.path();

        let mut url = String::new();
        if absolute {
            url.push_str(self.scheme());
            url.push_str("://");
            url.push_str(self.host());
            if !port.is_empty() {
                url.push(':');
                url.push_str(port);
            }
        }
        if !absolute || path != "/" || !query.is_empty() {
            url.push_str(path);
        }
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        url
    }
}

impl fmt::Display for UrlComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://www.example.com:8000/abc/def?ref=testcase&foo=bar";

    #[test]
    fn absolute_build_reproduces_canonical_input() {
        assert_eq!(UrlComponents::new(BASE).build(), BASE);
    }

    #[test]
    fn relative_build_keeps_path_and_query_only() {
        assert_eq!(
            UrlComponents::new(BASE).build_relative(),
            "/abc/def?ref=testcase&foo=bar"
        );
    }

    #[test]
    fn bare_root_path_is_dropped_from_absolute_form() {
        let url = UrlComponents::new("http://www.example.com:8000/");
        assert_eq!(url.build(), "http://www.example.com:8000");
        assert_eq!(url.build_relative(), "/");
    }

    #[test]
    fn root_path_is_kept_when_a_query_follows() {
        let mut url = UrlComponents::new(BASE);
        url.set_path("");
        assert_eq!(url.path(), "/");
        assert_eq!(
            url.build(),
            "http://www.example.com:8000/?ref=testcase&foo=bar"
        );
    }

    #[test]
    fn cleared_query_drops_the_question_mark() {
        let mut url = UrlComponents::new(BASE);
        url.set_query("");
        assert_eq!(url.build(), "http://www.example.com:8000/abc/def");
    }

    #[test]
    fn cleared_port_drops_the_colon_segment() {
        let mut url = UrlComponents::new(BASE);
        url.set_port(None::<u16>);
        assert_eq!(url.build(), "http://www.example.com/abc/def?ref=testcase&foo=bar");
    }

    #[test]
    fn build_does_not_mutate_the_receiver() {
        let url = UrlComponents::new(BASE);
        let before = url.clone();
        let _ = url.build();
        let _ = url.build_relative();
        assert_eq!(url, before);
    }

    #[test]
    fn display_is_the_absolute_form() {
        let url = UrlComponents::new(BASE);
        assert_eq!(url.to_string(), url.build());
    }

    #[test]
    fn empty_components_build_degenerately() {
        // Garbage in, garbage out: the assembly steps are unconditional.
        let url = UrlComponents::new("not a url");
        assert_eq!(url.build(), "://");
        assert_eq!(url.build_relative(), "/");
    }

    #[test]
    fn trailing_slash_from_construction_survives_rebuild() {
        let url = UrlComponents::new("http://example.com/a/b/?k=v");
        assert_eq!(url.build(), "http://example.com/a/b/?k=v");
    }
}
