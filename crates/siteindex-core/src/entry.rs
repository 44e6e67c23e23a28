//! Manifest entry representation.
//!
//! A `DirectoryEntry` is one node of the file browser's tree. The JSON
//! shape is consumed as-is by the site's client scripts, so field names,
//! key order and the `url`/`children` exclusivity must not drift.

use crate::size::format_size;
use serde::{Deserialize, Serialize};

/// `type` value for directories.
pub const DIR_TYPE: &str = "DIR";

/// `type` value for files without an extension.
pub const FILE_TYPE: &str = "FILE";

/// `size` placeholder for directories.
pub const DIR_SIZE: &str = "-";

/// One file or directory in a generated manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// Base name, never containing a separator.
    pub name: String,

    /// Slash-separated path relative to the scan root.
    pub path: String,

    /// `"DIR"`, the uppercased extension, or `"FILE"`.
    #[serde(rename = "type")]
    pub kind: String,

    /// `"-"` for directories, a formatted byte size for files.
    pub size: String,

    /// Where the page can fetch the raw file. Files only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Nested listing. Directories only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<DirectoryEntry>>,
}

impl DirectoryEntry {
    /// Creates a directory entry with its (already sorted) children.
    pub fn directory(
        name: impl Into<String>,
        path: impl Into<String>,
        children: Vec<DirectoryEntry>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: DIR_TYPE.to_string(),
            size: DIR_SIZE.to_string(),
            url: None,
            children: Some(children),
        }
    }

    /// Creates a file entry, deriving `type` from the name and `size`
    /// from the byte length.
    pub fn file(
        name: impl Into<String>,
        path: impl Into<String>,
        bytes: u64,
        url: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let kind = file_type(&name);

        Self {
            name,
            path: path.into(),
            kind,
            size: format_size(bytes),
            url: Some(url.into()),
            children: None,
        }
    }

    /// Whether this entry was built from a directory.
    ///
    /// Checks for `children` rather than `type`, since a file named
    /// `backup.dir` also reports `"DIR"`.
    pub fn is_dir(&self) -> bool {
        self.children.is_some()
    }

    /// Total number of entries in this subtree, excluding `self`.
    pub fn descendant_count(&self) -> usize {
        self.children
            .as_ref()
            .map(|children| children.iter().map(|c| 1 + c.descendant_count()).sum())
            .unwrap_or(0)
    }
}

/// Returns the extension of a file name, without the dot.
///
/// Leading dots don't start an extension (`.bashrc` has none) and a
/// trailing dot yields none either.
pub fn extension(name: &str) -> Option<&str> {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    let dot = name[stem_start..].rfind('.')? + stem_start;
    let ext = &name[dot + 1..];
    if ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}

/// The manifest `type` of a file: its uppercased extension or `"FILE"`.
pub fn file_type(name: &str) -> String {
    match extension(name) {
        Some(ext) => ext.to_uppercase(),
        None => FILE_TYPE.to_string(),
    }
}

/// Sorts siblings: directories first, then case-insensitively by name.
///
/// The sort is stable and uses no further tie-breaker.
pub fn sort_entries(entries: &mut [DirectoryEntry]) {
    entries.sort_by_cached_key(|entry| (!entry.is_dir(), entry.name.to_lowercase()));
}
