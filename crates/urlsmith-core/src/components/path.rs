//! Path normalization and slug splitting/joining.

/// Normalizes a path to exactly one leading `/` and no trailing `/`.
///
/// All leading and trailing slashes of the input are stripped first, so
/// empty and all-slash inputs both come out as `"/"`. Interior empty
/// segments are left alone.
pub(super) fn normalize(path: &str) -> String {
    format!("/{}", path.trim_matches('/'))
}

/// Splits a path into its slugs, excluding the empty segments produced by
/// leading/trailing slashes. The root path has no slugs.
pub(super) fn split_slugs(path: &str) -> Vec<String> {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').map(str::to_string).collect()
}

/// Joins slugs with `/` (no leading slash; `normalize` adds it).
pub(super) fn join_slugs<I, S>(slugs: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    slugs
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("/")
}
