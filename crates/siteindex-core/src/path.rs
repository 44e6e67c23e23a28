//! Relative path helpers.
//!
//! Manifest paths are always slash-separated, whatever the host platform
//! uses, because the browser resolves them as URLs.

/// Replaces every backslash with a forward slash.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Appends `name` to a relative base, e.g. `("docs", "a.txt")` -> `"docs/a.txt"`.
///
/// An empty base yields the bare name.
pub fn join_relative(base: &str, name: &str) -> String {
    let base = normalize_separators(base);
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", base, name)
    }
}

/// Builds a `../..`-style prefix climbing `levels` directories.
pub fn up_levels(levels: usize) -> String {
    vec![".."; levels].join("/")
}
