//! The file browser manifest and its friend sub-sites.

use crate::error::Result;
use crate::indexer::{index_directory, IndexOptions};
use crate::template::PageRenderer;
use siteindex_core::config::{
    FILELIST_JSON, FILESYSTEM_EXCLUDED, FILES_URL_PREFIX, FRIEND_EXCLUDED, FRIEND_PAGE,
    HIDDEN_MARKER,
};
use siteindex_core::{write_manifest, SiteError, SiteLayout, FILE_MANIFEST_INDENT};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Outcome of writing one manifest.
#[derive(Debug, Clone)]
pub struct ManifestReport {
    /// Directory that was indexed.
    pub root: PathBuf,

    /// Whether that directory existed. A missing root still writes an
    /// empty manifest.
    pub root_found: bool,

    /// Where the manifest was written.
    pub output: PathBuf,

    /// Number of top-level entries.
    pub entries: usize,

    /// Number of entries at every depth.
    pub total_entries: usize,
}

/// Outcome of generating one friend sub-site.
#[derive(Debug, Clone)]
pub struct FriendReport {
    /// Friend folder name.
    pub name: String,

    /// The friend's own `filelist.json`.
    pub manifest: ManifestReport,

    /// The rendered `index.html`.
    pub page: PathBuf,
}

/// Outcome of the file browser generator.
#[derive(Debug, Clone)]
pub struct FilesystemReport {
    pub main: ManifestReport,
    pub friends: Vec<FriendReport>,
}

/// Index options for the public file browser. Symlinks are published as
/// their targets.
pub fn filesystem_options() -> IndexOptions {
    IndexOptions::default()
        .with_url_prefix(FILES_URL_PREFIX)
        .exclude_names(FILESYSTEM_EXCLUDED)
        .with_follow_symlinks(true)
}

/// Index options for a friend folder. Urls are relative to the friend's
/// own page, which sits in the indexed folder.
pub fn friend_options() -> IndexOptions {
    IndexOptions::default()
        .exclude_names(FRIEND_EXCLUDED)
        .with_follow_symlinks(true)
}

/// Writes `filesystem/filelist.json`, then every friend sub-site.
pub fn generate_filesystem(layout: &SiteLayout, renderer: &PageRenderer) -> Result<FilesystemReport> {
    let root = layout.filesystem_files();
    info!("Scanning directory: {}", root.display());

    let main = write_index(root, layout.filelist_json(), &filesystem_options())?;
    let friends = generate_friends(layout, renderer)?;

    Ok(FilesystemReport { main, friends })
}

/// Generates a `filelist.json` and `index.html` inside every friend folder.
///
/// A missing friends directory is not an error; there is simply nothing
/// to generate.
pub fn generate_friends(layout: &SiteLayout, renderer: &PageRenderer) -> Result<Vec<FriendReport>> {
    let friends_dir = layout.friends_dir();
    if !friends_dir.is_dir() {
        debug!("No friends directory at {}", friends_dir.display());
        return Ok(Vec::new());
    }

    let options = friend_options();
    let path_to_root = layout.friend_path_to_root();
    let mut reports = Vec::new();

    let walker = WalkDir::new(&friends_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", friends_dir.display(), e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if !entry.file_type().is_dir() || name.starts_with(HIDDEN_MARKER) {
            continue;
        }

        info!("Generating filesystem for friend: {}", name);

        let friend_dir = entry.into_path();
        let manifest = write_index(friend_dir.clone(), friend_dir.join(FILELIST_JSON), &options)?;

        let page = friend_dir.join(FRIEND_PAGE);
        let html = renderer.render_friend_page(&name, &path_to_root)?;
        fs::write(&page, html).map_err(|e| SiteError::io(&page, e))?;

        reports.push(FriendReport {
            name,
            manifest,
            page,
        });
    }

    Ok(reports)
}

/// Indexes `root` and writes the listing to `output`.
pub(crate) fn write_index(
    root: PathBuf,
    output: PathBuf,
    options: &IndexOptions,
) -> Result<ManifestReport> {
    let root_found = root.exists();
    let entries = index_directory(&root, "", options);
    write_manifest(&output, &entries, FILE_MANIFEST_INDENT)?;

    let total_entries = entries.iter().map(|e| 1 + e.descendant_count()).sum();
    info!(
        "Wrote {} entries ({} total) to {}",
        entries.len(),
        total_entries,
        output.display()
    );

    Ok(ManifestReport {
        root,
        root_found,
        output,
        entries: entries.len(),
        total_entries,
    })
}
