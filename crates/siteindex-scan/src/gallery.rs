//! Gallery project listing.
//!
//! Every sub-folder of the gallery that ships its own `index.html` is a
//! project. Anything else in there (assets, drafts) is ignored.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use siteindex_core::config::{GALLERY_MARKER, HIDDEN_MARKER};
use siteindex_core::{write_manifest, SiteLayout, GALLERY_MANIFEST_INDENT};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use walkdir::WalkDir;

/// One gallery project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryProject {
    /// Folder name.
    pub name: String,

    /// Link to the project, relative to the gallery page (`"<name>/"`).
    pub path: String,
}

impl GalleryProject {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let path = format!("{}/", name);
        Self { name, path }
    }
}

/// Outcome of the gallery generator.
#[derive(Debug, Clone)]
pub struct GalleryReport {
    /// Where the listing was written, or `None` when the gallery
    /// directory doesn't exist.
    pub output: Option<PathBuf>,

    pub projects: usize,
}

/// Lists the projects in `gallery_dir`, sorted by name.
///
/// Sorting is case-sensitive. A missing directory yields no projects.
pub fn list_projects(gallery_dir: &Path) -> Vec<GalleryProject> {
    let mut projects = Vec::new();

    let walker = WalkDir::new(gallery_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);
    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", gallery_dir.display(), e);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        if !entry.file_type().is_dir() || name.starts_with(HIDDEN_MARKER) {
            continue;
        }

        if entry.path().join(GALLERY_MARKER).exists() {
            projects.push(GalleryProject::new(name));
        }
    }

    projects.sort_by(|a, b| a.name.cmp(&b.name));
    projects
}

/// Writes `gallery/projects.json`.
///
/// The listing lives inside the gallery directory, so nothing is written
/// when that directory is missing.
pub fn generate_gallery(layout: &SiteLayout) -> Result<GalleryReport> {
    let gallery_dir = layout.gallery_dir();
    if !gallery_dir.is_dir() {
        warn!("Directory not found: {}", gallery_dir.display());
        return Ok(GalleryReport {
            output: None,
            projects: 0,
        });
    }

    let projects = list_projects(&gallery_dir);
    let output = layout.gallery_json();
    write_manifest(&output, &projects, GALLERY_MANIFEST_INDENT)?;

    info!("Generated {} with {} projects", output.display(), projects.len());

    Ok(GalleryReport {
        output: Some(output),
        projects: projects.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn project(root: &Path, name: &str) {
        fs::create_dir_all(root.join(name)).unwrap();
        fs::write(root.join(name).join("index.html"), "<html></html>").unwrap();
    }

    #[test]
    fn test_only_marked_folders_are_projects() {
        let dir = tempdir().unwrap();
        project(dir.path(), "rain");
        project(dir.path(), "donut");
        project(dir.path(), ".draft");
        fs::create_dir_all(dir.path().join("assets")).unwrap();
        fs::write(dir.path().join("index.html"), "").unwrap();

        let projects = list_projects(dir.path());
        assert_eq!(
            projects,
            vec![GalleryProject::new("donut"), GalleryProject::new("rain")]
        );
        assert_eq!(projects[0].path, "donut/");
    }

    #[test]
    fn test_sort_is_case_sensitive() {
        let dir = tempdir().unwrap();
        project(dir.path(), "fishtank");
        project(dir.path(), "Scada");

        let names: Vec<_> = list_projects(dir.path()).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Scada", "fishtank"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_project_is_listed() {
        let dir = tempdir().unwrap();
        let gallery = dir.path().join("gallery");
        fs::create_dir_all(&gallery).unwrap();
        project(dir.path(), "elsewhere");
        std::os::unix::fs::symlink(dir.path().join("elsewhere"), gallery.join("rain")).unwrap();

        assert_eq!(list_projects(&gallery), vec![GalleryProject::new("rain")]);
    }

    #[test]
    fn test_generate_writes_two_space_json() {
        let dir = tempdir().unwrap();
        let layout = SiteLayout::new(dir.path());
        project(&layout.gallery_dir(), "rain");

        let report = generate_gallery(&layout).unwrap();
        assert_eq!(report.projects, 1);

        let text = fs::read_to_string(layout.gallery_json()).unwrap();
        assert_eq!(
            text,
            "[\n  {\n    \"name\": \"rain\",\n    \"path\": \"rain/\"\n  }\n]"
        );
    }

    #[test]
    fn test_missing_gallery_writes_nothing() {
        let dir = tempdir().unwrap();
        let layout = SiteLayout::new(dir.path());

        let report = generate_gallery(&layout).unwrap();
        assert!(report.output.is_none());
        assert!(!layout.gallery_json().exists());
    }
}
