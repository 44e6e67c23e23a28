//! Site layout configuration.
//!
//! Every generator reads from and writes to fixed locations under the
//! site root. The names live here as constants; the root itself is the
//! only runtime input.

use crate::path::up_levels;
use std::path::PathBuf;

/// Entries whose name starts with this are never published.
pub const HIDDEN_MARKER: char = '.';

/// The file browser page directory.
pub const FILESYSTEM_DIR: &str = "filesystem";
/// Directory holding the published files, under both the file browser
/// and the library.
pub const FILES_DIR: &str = "files";
/// Manifest read by the file browser (and by each friend page).
pub const FILELIST_JSON: &str = "filelist.json";
/// Directory under the file browser's files holding one folder per friend.
pub const FRIENDS_DIR: &str = "friends";
/// Page generated inside each friend folder.
pub const FRIEND_PAGE: &str = "index.html";
/// Prefix of file urls relative to the page rendering the manifest.
pub const FILES_URL_PREFIX: &str = "files/";

/// Folders kept out of the public file browser.
pub const FILESYSTEM_EXCLUDED: &[&str] = &["personal", FRIENDS_DIR];
/// Generated artifacts kept out of a friend's own listing.
pub const FRIEND_EXCLUDED: &[&str] = &[FRIEND_PAGE, FILELIST_JSON];

/// The library page directory.
pub const LIBRARY_DIR: &str = "library";
/// Manifest read by the library page.
pub const LIBRARY_JSON: &str = "files.json";
/// Names kept out of the library catalog.
pub const LIBRARY_EXCLUDED: &[&str] = &[LIBRARY_JSON];
/// Extensions kept out of the library catalog.
pub const LIBRARY_EXCLUDED_EXTENSIONS: &[&str] = &["py"];

/// The gallery directory; each project is a subfolder.
pub const GALLERY_DIR: &str = "gallery";
/// Manifest read by the gallery page.
pub const GALLERY_JSON: &str = "projects.json";
/// A gallery subfolder is a project only if it contains this file.
pub const GALLERY_MARKER: &str = "index.html";

/// The projects page directory.
pub const PROJECTS_DIR: &str = "projects";
/// Repository metadata read by the projects page.
pub const REPOS_JSON: &str = "repos.json";
/// GitHub account whose repositories are listed.
pub const GITHUB_USER: &str = "ImNullpo";

/// Resolves every input and output location against a site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    root: PathBuf,
}

impl SiteLayout {
    /// Creates a layout rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `filesystem/files`
    pub fn filesystem_files(&self) -> PathBuf {
        self.root.join(FILESYSTEM_DIR).join(FILES_DIR)
    }

    /// `filesystem/filelist.json`
    pub fn filelist_json(&self) -> PathBuf {
        self.root.join(FILESYSTEM_DIR).join(FILELIST_JSON)
    }

    /// `filesystem/files/friends`
    pub fn friends_dir(&self) -> PathBuf {
        self.filesystem_files().join(FRIENDS_DIR)
    }

    /// Relative prefix from a friend folder back to the site root.
    pub fn friend_path_to_root(&self) -> String {
        // filesystem/files/friends/<name>
        up_levels(4)
    }

    /// `library/files`
    pub fn library_files(&self) -> PathBuf {
        self.root.join(LIBRARY_DIR).join(FILES_DIR)
    }

    /// `library/files.json`
    pub fn library_json(&self) -> PathBuf {
        self.root.join(LIBRARY_DIR).join(LIBRARY_JSON)
    }

    /// `gallery`
    pub fn gallery_dir(&self) -> PathBuf {
        self.root.join(GALLERY_DIR)
    }

    /// `gallery/projects.json`
    pub fn gallery_json(&self) -> PathBuf {
        self.gallery_dir().join(GALLERY_JSON)
    }

    /// `projects/repos.json`
    pub fn repos_json(&self) -> PathBuf {
        self.root.join(PROJECTS_DIR).join(REPOS_JSON)
    }
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self::new(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = SiteLayout::new("/srv/site");
        assert_eq!(
            layout.filesystem_files(),
            PathBuf::from("/srv/site/filesystem/files")
        );
        assert_eq!(
            layout.filelist_json(),
            PathBuf::from("/srv/site/filesystem/filelist.json")
        );
        assert_eq!(
            layout.friends_dir(),
            PathBuf::from("/srv/site/filesystem/files/friends")
        );
        assert_eq!(layout.library_json(), PathBuf::from("/srv/site/library/files.json"));
        assert_eq!(layout.gallery_json(), PathBuf::from("/srv/site/gallery/projects.json"));
        assert_eq!(layout.repos_json(), PathBuf::from("/srv/site/projects/repos.json"));
    }

    #[test]
    fn test_friend_path_to_root_matches_nesting() {
        assert_eq!(SiteLayout::default().friend_path_to_root(), "../../../..");
    }
}
