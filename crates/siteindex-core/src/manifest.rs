//! Writing manifests to disk.
//!
//! Output is indented JSON with struct-declaration key order and no
//! trailing newline. The destination is always overwritten.

use crate::error::{Result, SiteError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Indent width of the file listings and repository metadata.
pub const FILE_MANIFEST_INDENT: usize = 4;

/// Indent width of the gallery project list.
pub const GALLERY_MANIFEST_INDENT: usize = 2;

/// Serializes `value` as JSON indented by `indent` spaces.
pub fn to_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> Result<Vec<u8>> {
    let indent = vec![b' '; indent];
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Serializes `value` and overwrites `path` with it, creating missing
/// parent directories.
pub fn write_manifest<T: Serialize + ?Sized>(path: &Path, value: &T, indent: usize) -> Result<()> {
    let bytes = to_json(value, indent)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
        }
    }

    fs::write(path, &bytes).map_err(|e| SiteError::io(path, e))?;
    debug!("Wrote {} bytes to {}", bytes.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::DirectoryEntry;
    use tempfile::tempdir;

    #[test]
    fn test_four_space_indent() {
        let entries = vec![DirectoryEntry::directory("docs", "docs", Vec::new())];
        let text = String::from_utf8(to_json(&entries, 4).unwrap()).unwrap();
        let expected = "[\n    {\n        \"name\": \"docs\",\n        \"path\": \"docs\",\n        \"type\": \"DIR\",\n        \"size\": \"-\",\n        \"children\": []\n    }\n]";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_listing() {
        let entries: Vec<DirectoryEntry> = Vec::new();
        assert_eq!(to_json(&entries, 4).unwrap(), b"[]");
    }

    #[test]
    fn test_write_overwrites_and_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");

        write_manifest(&path, &vec!["first", "second"], 2).unwrap();
        write_manifest(&path, &vec!["third"], 2).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "[\n  \"third\"\n]");
    }

    #[test]
    fn test_write_reports_path_on_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = write_manifest(&blocker.join("out.json"), &Vec::<String>::new(), 4).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
        assert!(err.to_string().contains("blocker"));
    }
}
