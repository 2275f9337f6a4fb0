//! Query-string codec over the `form_urlencoded` primitive.
//!
//! Decode and encode semantics are the primitive's, not re-specified here:
//! pairs come back in query-string order, duplicate keys stay as separate
//! pairs, array-style keys (`a[]=1`) are ordinary literal keys, and
//! encoding percent-escapes keys and values (space becomes `+`).

/// Decodes a raw query string (no leading `?`) into key/value pairs.
///
/// An empty query decodes to no pairs. A key without `=` decodes to the
/// pair `(key, "")`.
pub fn decode_pairs(query: &str) -> Vec<(String, String)> {
    if query.is_empty() {
        return Vec::new();
    }
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// Form-encodes pairs into a query string (no leading `?`).
pub fn encode_pairs<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    serializer.finish()
}
