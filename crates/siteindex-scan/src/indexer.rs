//! Directory indexing.
//!
//! Walks a directory one level at a time and builds the nested,
//! sorted listing the file browser renders. Indexing never fails: a
//! missing root yields an empty listing, and anything unreadable below
//! it is skipped with a warning.

use siteindex_core::config::HIDDEN_MARKER;
use siteindex_core::{extension, join_relative, normalize_separators, sort_entries, DirectoryEntry};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Options for directory indexing.
#[derive(Debug, Clone, Default)]
pub struct IndexOptions {
    /// Prepended to each file's relative path to form its `url`.
    pub url_prefix: String,

    /// Lowercase names skipped at any depth.
    pub excluded_names: HashSet<String>,

    /// Extensions (without the dot) skipped at any depth. Matched
    /// case-sensitively, so `py` doesn't hide `Setup.PY`.
    pub excluded_extensions: HashSet<String>,

    /// Deepest level listed, counting the root's children as 1.
    /// Directories at this level get an empty `children` list.
    /// `None` recurses without limit.
    pub max_depth: Option<usize>,

    /// Follow symbolic links when walking directories, listing each link
    /// as its target. When disabled, symlinks are left out of the listing.
    pub follow_symlinks: bool,
}

impl IndexOptions {
    pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefix = prefix.into();
        self
    }

    /// Adds names to skip. Matching is case-insensitive.
    pub fn exclude_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_names
            .extend(names.into_iter().map(|n| n.as_ref().to_lowercase()));
        self
    }

    /// Adds extensions to skip. Matching is case-sensitive.
    pub fn exclude_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_extensions
            .extend(extensions.into_iter().map(|e| e.as_ref().to_string()));
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn with_follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Whether an entry with this name is kept out of the listing.
    pub fn is_excluded(&self, name: &str) -> bool {
        if name.starts_with(HIDDEN_MARKER) {
            return true;
        }

        if self.excluded_names.contains(&name.to_lowercase()) {
            return true;
        }

        extension(name).is_some_and(|ext| self.excluded_extensions.contains(ext))
    }
}

/// Indexes `root` and returns its sorted listing.
///
/// `relative_base` is prepended to every emitted `path` (and, after
/// `url_prefix`, every `url`), so a subtree can be indexed with paths that
/// stay relative to an outer root. Pass `""` to index a root on its own.
///
/// # Example
///
/// ```no_run
/// use siteindex_scan::{index_directory, IndexOptions};
/// use std::path::Path;
///
/// let options = IndexOptions::default().with_url_prefix("files/");
/// let entries = index_directory(Path::new("filesystem/files"), "", &options);
/// println!("{} top-level entries", entries.len());
/// ```
pub fn index_directory(
    root: &Path,
    relative_base: &str,
    options: &IndexOptions,
) -> Vec<DirectoryEntry> {
    if !root.exists() {
        warn!("Directory not found: {}", root.display());
        return Vec::new();
    }

    debug!("Indexing {}", root.display());

    let mut ancestors = Vec::new();
    if options.follow_symlinks {
        match root.canonicalize() {
            Ok(canonical) => ancestors.push(canonical),
            Err(e) => warn!("Failed to resolve {}: {}", root.display(), e),
        }
    }

    let base = normalize_separators(relative_base);
    scan_level(root, &base, options, 1, &mut ancestors)
}

/// Lists the immediate children of `dir`, recursing into directories.
fn scan_level(
    dir: &Path,
    relative_base: &str,
    options: &IndexOptions,
    depth: usize,
    ancestors: &mut Vec<PathBuf>,
) -> Vec<DirectoryEntry> {
    let mut entries = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(options.follow_symlinks);

    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if options.is_excluded(&name) {
            debug!("Excluded: {}", entry.path().display());
            continue;
        }

        let file_type = entry.file_type();
        if file_type.is_symlink() {
            debug!("Skipping symlink: {}", entry.path().display());
            continue;
        }

        let relative = join_relative(relative_base, &name);

        if file_type.is_dir() {
            let children = scan_children(entry.path(), &relative, options, depth, ancestors);
            entries.push(DirectoryEntry::directory(name, relative, children));
        } else {
            let bytes = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(e) => {
                    warn!("Skipping {}: {}", entry.path().display(), e);
                    continue;
                }
            };
            let url = format!("{}{}", options.url_prefix, relative);
            entries.push(DirectoryEntry::file(name, relative, bytes, url));
        }
    }

    sort_entries(&mut entries);
    entries
}

/// Produces the `children` of a directory found at `depth`.
fn scan_children(
    dir: &Path,
    relative: &str,
    options: &IndexOptions,
    depth: usize,
    ancestors: &mut Vec<PathBuf>,
) -> Vec<DirectoryEntry> {
    if options.max_depth.is_some_and(|max| depth >= max) {
        return Vec::new();
    }

    if !options.follow_symlinks {
        return scan_level(dir, relative, options, depth + 1, ancestors);
    }

    let canonical = match dir.canonicalize() {
        Ok(canonical) => canonical,
        Err(e) => {
            warn!("Failed to resolve {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    if ancestors.contains(&canonical) {
        warn!("Symlink cycle at {}, not descending", dir.display());
        return Vec::new();
    }

    ancestors.push(canonical);
    let children = scan_level(dir, relative, options, depth + 1, ancestors);
    ancestors.pop();

    children
}
