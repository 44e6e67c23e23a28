//! The public library catalog.
//!
//! A flat listing of `library/files`: sub-folders are shown but not
//! expanded.

use crate::error::Result;
use crate::filesystem::{write_index, ManifestReport};
use crate::indexer::IndexOptions;
use siteindex_core::config::{FILES_URL_PREFIX, LIBRARY_EXCLUDED, LIBRARY_EXCLUDED_EXTENSIONS};
use siteindex_core::SiteLayout;
use tracing::info;

/// Index options for the library: one level deep, without generated
/// manifests or generator scripts, symlinks published as their targets.
pub fn library_options() -> IndexOptions {
    IndexOptions::default()
        .with_url_prefix(FILES_URL_PREFIX)
        .exclude_names(LIBRARY_EXCLUDED)
        .exclude_extensions(LIBRARY_EXCLUDED_EXTENSIONS)
        .with_max_depth(1)
        .with_follow_symlinks(true)
}

/// Writes `library/files.json`.
pub fn generate_library(layout: &SiteLayout) -> Result<ManifestReport> {
    let root = layout.library_files();
    info!("Scanning public library: {}", root.display());

    write_index(root, layout.library_json(), &library_options())
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteindex_core::DirectoryEntry;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_library_catalog_is_flat() {
        let dir = tempdir().unwrap();
        let layout = SiteLayout::new(dir.path());
        let files = layout.library_files();
        fs::create_dir_all(files.join("Series")).unwrap();
        fs::write(files.join("Series").join("vol1.pdf"), "x").unwrap();
        fs::write(files.join("dune.epub"), [0u8; 3072]).unwrap();
        fs::write(files.join("files.json"), "[]").unwrap();
        fs::write(files.join("build.py"), "").unwrap();
        fs::write(files.join("NOTES.PY"), "").unwrap();

        let report = generate_library(&layout).unwrap();
        assert_eq!(report.entries, 3);

        let text = fs::read_to_string(layout.library_json()).unwrap();
        let listing: Vec<DirectoryEntry> = serde_json::from_str(&text).unwrap();

        assert_eq!(listing[0].name, "Series");
        assert_eq!(listing[0].children, Some(Vec::new()));
        assert_eq!(listing[1].name, "dune.epub");
        assert_eq!(listing[1].kind, "EPUB");
        assert_eq!(listing[1].size, "3.0 KB");
        assert_eq!(listing[1].url.as_deref(), Some("files/dune.epub"));
        assert_eq!(listing[2].name, "NOTES.PY");
    }

    #[test]
    fn test_missing_library_still_writes() {
        let dir = tempdir().unwrap();
        let layout = SiteLayout::new(dir.path());

        let report = generate_library(&layout).unwrap();
        assert!(!report.root_found);
        assert_eq!(fs::read_to_string(layout.library_json()).unwrap(), "[]");
    }
}
