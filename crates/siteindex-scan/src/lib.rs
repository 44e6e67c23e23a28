//! siteindex Scan - directory indexing and page manifests
//!
//! This crate handles the file system side of things:
//! - Walking directories into sorted, nested listings
//! - The file browser manifest and its friend sub-sites
//! - The library catalog
//! - The gallery project list
//!
//! Hidden entries and configured names are never published.

mod error;
mod filesystem;
mod gallery;
mod indexer;
mod library;
mod template;

pub use error::{Result, ScanError};
pub use filesystem::{
    filesystem_options, friend_options, generate_filesystem, generate_friends, FilesystemReport,
    FriendReport, ManifestReport,
};
pub use gallery::{generate_gallery, list_projects, GalleryProject, GalleryReport};
pub use indexer::{index_directory, IndexOptions};
pub use library::{generate_library, library_options};
pub use template::PageRenderer;
