//! siteindex Core - manifest model and shared building blocks
//!
//! This crate holds everything the generators agree on:
//! - The `DirectoryEntry` shape the site's client scripts consume
//! - Human-readable byte sizes
//! - Slash-normalized relative paths
//! - The site layout (where each manifest is read from and written to)
//! - Writing a manifest to disk as indented JSON
//!
//! # Example
//!
//! ```
//! use siteindex_core::{format_size, DirectoryEntry};
//!
//! let entry = DirectoryEntry::file("notes.txt", "docs/notes.txt", 1536, "files/docs/notes.txt");
//! assert_eq!(entry.kind, "TXT");
//! assert_eq!(entry.size, format_size(1536));
//! ```

pub mod config;
pub mod entry;
pub mod error;
pub mod manifest;
pub mod path;
pub mod size;

pub use config::SiteLayout;
pub use entry::{extension, file_type, sort_entries, DirectoryEntry, DIR_SIZE, DIR_TYPE, FILE_TYPE};
pub use error::{Result, SiteError};
pub use manifest::{to_json, write_manifest, FILE_MANIFEST_INDENT, GALLERY_MANIFEST_INDENT};
pub use path::{join_relative, normalize_separators, up_levels};
pub use size::format_size;
